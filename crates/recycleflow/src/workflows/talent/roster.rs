//! Synthetic roster generation.
//!
//! Only the value ranges and the role-to-skill structure matter; the exact
//! draws depend on the [`RandomSource`] handed in.

use super::domain::{Candidate, CandidateId, Evaluation, PreviousRole};
use super::random::RandomSource;

pub const SKILL_POOL: [&str; 16] = [
    "Lean Manufacturing",
    "OSHA Compliance",
    "Waste Segregation",
    "Team Leadership",
    "Six Sigma Black Belt",
    "ISO 14001",
    "Chemical Handling",
    "PLC Troubleshooting",
    "Budget Management",
    "Supply Chain Optimization",
    "Environmental Safety",
    "Robotics Integration",
    "Conflict Resolution",
    "KPI Tracking",
    "Inventory Control",
    "Circular Economy Strategies",
];

pub const CANDIDATE_NAMES: [&str; 40] = [
    "Liam Smith",
    "Olivia Johnson",
    "Noah Williams",
    "Emma Brown",
    "James Jones",
    "Ava Garcia",
    "William Miller",
    "Sophia Davis",
    "Benjamin Rodriguez",
    "Isabella Martinez",
    "Lucas Hernandez",
    "Mia Lopez",
    "Henry Gonzalez",
    "Charlotte Wilson",
    "Alexander Anderson",
    "Amelia Thomas",
    "Sebastian Taylor",
    "Harper Moore",
    "Jack Jackson",
    "Evelyn Martin",
    "Michael Lee",
    "Abigail Perez",
    "Daniel Thompson",
    "Ella White",
    "Jacob Harris",
    "Scarlett Sanchez",
    "Logan Clark",
    "Victoria Ramirez",
    "Levi Lewis",
    "Madison Robinson",
    "David Walker",
    "Luna Young",
    "Joseph Allen",
    "Grace King",
    "Samuel Wright",
    "Chloe Scott",
    "Sebastian Torres",
    "Penelope Nguyen",
    "John Hill",
    "Riley Adams",
];

pub(crate) const INITIAL_SUMMARY: &str =
    "Automated preliminary scoring based on resume keyword density and certification validation.";

const EXPERIENCE_YEARS: std::ops::RangeInclusive<u32> = 3..=21;
const INITIAL_METRIC_RANGE: std::ops::RangeInclusive<u32> = 60..=95;
const BIO_TEMPLATE_COUNT: u32 = 4;
const AVATAR_BASE: &str = "https://i.pravatar.cc/300?u=";

/// Generate the standard 40-person roster.
pub fn generate_candidates<R: RandomSource>(random: &mut R) -> Vec<Candidate> {
    generate_candidates_from(&CANDIDATE_NAMES, random)
}

/// Generate one candidate per name, ids following list position.
pub fn generate_candidates_from<R, S>(names: &[S], random: &mut R) -> Vec<Candidate>
where
    R: RandomSource,
    S: AsRef<str>,
{
    names
        .iter()
        .enumerate()
        .map(|(index, name)| build_candidate(index, name.as_ref(), random))
        .collect()
}

fn build_candidate<R: RandomSource>(index: usize, name: &str, random: &mut R) -> Candidate {
    let role = *random.pick(&PreviousRole::ordered());
    let skills = draw_skills(role, random);
    let experience_years = random.in_range(EXPERIENCE_YEARS) as u8;
    let template = random.next_below(BIO_TEMPLATE_COUNT);
    let bio = render_bio(template, role, experience_years, &skills);

    Candidate {
        id: CandidateId::from_position(index),
        name: name.to_string(),
        avatar: avatar_for(name),
        experience_years,
        skills,
        bio,
        previous_role: role,
    }
}

/// Leading two role skills plus one pool pick, deduplicated in order.
fn draw_skills<R: RandomSource>(role: PreviousRole, random: &mut R) -> Vec<String> {
    let canonical = role.canonical_skills();
    let extra = *random.pick(&SKILL_POOL);

    let mut skills: Vec<String> = Vec::with_capacity(3);
    for skill in [canonical[0], canonical[1], extra] {
        if !skills.iter().any(|existing| existing == skill) {
            skills.push(skill.to_string());
        }
    }
    skills
}

fn render_bio(template: u32, role: PreviousRole, years: u8, skills: &[String]) -> String {
    let role = role.label();
    let first = skills.first().map(String::as_str).unwrap_or_default();
    let second = skills.get(1).map(String::as_str).unwrap_or(first);
    // Two-skill candidates reuse their last skill where a third is expected.
    let third = skills.get(2).map(String::as_str).unwrap_or(second);

    match template {
        0 => format!(
            "Results-oriented {role} with {years} years of experience. Proven track record in {first} and optimizing production workflows."
        ),
        1 => format!(
            "Dedicated professional specializing in {second}. Brings {years} years of expertise in high-volume recycling environments."
        ),
        2 => format!(
            "Safety-first {role} focused on {first} and {third}. Successfully reduced incident rates in previous tenure."
        ),
        _ => format!(
            "Strategic leader with {years} years in the field. Expert in implementing {second} protocols to drive efficiency."
        ),
    }
}

fn avatar_for(name: &str) -> String {
    let handle: String = name.chars().filter(|ch| !ch.is_whitespace()).collect();
    format!("{AVATAR_BASE}{handle}")
}

/// One preliminary evaluation per candidate, metrics drawn from 60..=95.
pub fn generate_initial_evaluations<R: RandomSource>(
    candidates: &[Candidate],
    random: &mut R,
) -> Vec<Evaluation> {
    candidates
        .iter()
        .map(|candidate| Evaluation {
            candidate_id: candidate.id.clone(),
            crisis_management: random.in_range(INITIAL_METRIC_RANGE) as u8,
            sustainability_knowledge: random.in_range(INITIAL_METRIC_RANGE) as u8,
            team_motivation: random.in_range(INITIAL_METRIC_RANGE) as u8,
            ai_summary: INITIAL_SUMMARY.to_string(),
        })
        .collect()
}
