use std::ops::RangeInclusive;

use super::domain::{CandidateId, Evaluation};
use super::random::RandomSource;

/// Draw ranges for crisis, sustainability and motivation on reassessment.
pub const REASSESSMENT_RANGES: [RangeInclusive<u32>; 3] = [70..=100, 60..=100, 70..=100];

const STANDOUT_THRESHOLD: u8 = 90;

const CRISIS_SUMMARY: &str = "Exceptional crisis handling capabilities detected.";
const SUSTAINABILITY_SUMMARY: &str = "Leading expert in sustainable production loops.";
const LEADERSHIP_SUMMARY: &str = "High emotional intelligence and leadership potential.";
const BALANCED_SUMMARY: &str = "Balanced performance across all metrics.";

/// Narrative for a metric triple. The first standout metric, checked in
/// crisis, sustainability, motivation order, picks the summary.
pub fn summarize_metrics(crisis: u8, sustainability: u8, motivation: u8) -> &'static str {
    if crisis > STANDOUT_THRESHOLD {
        CRISIS_SUMMARY
    } else if sustainability > STANDOUT_THRESHOLD {
        SUSTAINABILITY_SUMMARY
    } else if motivation > STANDOUT_THRESHOLD {
        LEADERSHIP_SUMMARY
    } else {
        BALANCED_SUMMARY
    }
}

/// Fresh evaluation for a candidate after a simulated scoring pass.
pub(crate) fn draft_reassessment<R: RandomSource>(
    candidate_id: CandidateId,
    random: &mut R,
) -> Evaluation {
    let [crisis, sustainability, motivation] =
        REASSESSMENT_RANGES.map(|range| random.in_range(range) as u8);

    Evaluation {
        candidate_id,
        crisis_management: crisis,
        sustainability_knowledge: sustainability,
        team_motivation: motivation,
        ai_summary: summarize_metrics(crisis, sustainability, motivation).to_string(),
    }
}
