use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for roster candidates (`c1`, `c2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl CandidateId {
    /// Identifier for the zero-based roster position.
    pub fn from_position(index: usize) -> Self {
        Self(format!("c{}", index + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Roles a candidate may have held before applying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviousRole {
    PlantSupervisor,
    OperationsLead,
    LogisticsCoordinator,
    SafetyOfficer,
    FloorManager,
    RecyclingSupervisor,
    ProcessEngineer,
    SiteDirector,
}

impl PreviousRole {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::PlantSupervisor,
            Self::OperationsLead,
            Self::LogisticsCoordinator,
            Self::SafetyOfficer,
            Self::FloorManager,
            Self::RecyclingSupervisor,
            Self::ProcessEngineer,
            Self::SiteDirector,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PlantSupervisor => "Plant Supervisor",
            Self::OperationsLead => "Operations Lead",
            Self::LogisticsCoordinator => "Logistics Coordinator",
            Self::SafetyOfficer => "Safety Officer",
            Self::FloorManager => "Floor Manager",
            Self::RecyclingSupervisor => "Recycling Supervisor",
            Self::ProcessEngineer => "Process Engineer",
            Self::SiteDirector => "Site Director",
        }
    }

    /// Primary skills associated with the role, most characteristic first.
    pub const fn canonical_skills(self) -> [&'static str; 3] {
        match self {
            Self::PlantSupervisor => ["Team Leadership", "Conflict Resolution", "KPI Tracking"],
            Self::OperationsLead => [
                "Lean Manufacturing",
                "Six Sigma Black Belt",
                "Budget Management",
            ],
            Self::LogisticsCoordinator => [
                "Supply Chain Optimization",
                "Inventory Control",
                "Waste Segregation",
            ],
            Self::SafetyOfficer => [
                "OSHA Compliance",
                "Environmental Safety",
                "Chemical Handling",
            ],
            Self::FloorManager => ["Team Leadership", "Waste Segregation", "KPI Tracking"],
            Self::RecyclingSupervisor => [
                "Circular Economy Strategies",
                "Waste Segregation",
                "ISO 14001",
            ],
            Self::ProcessEngineer => [
                "PLC Troubleshooting",
                "Robotics Integration",
                "Six Sigma Black Belt",
            ],
            Self::SiteDirector => ["Budget Management", "Team Leadership", "ISO 14001"],
        }
    }
}

/// Static profile record produced by the roster generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub avatar: String,
    pub experience_years: u8,
    pub skills: Vec<String>,
    pub bio: String,
    pub previous_role: PreviousRole,
}

/// Metrics tracked for every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    CrisisManagement,
    SustainabilityKnowledge,
    TeamMotivation,
}

impl Metric {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::CrisisManagement,
            Self::SustainabilityKnowledge,
            Self::TeamMotivation,
        ]
    }

    /// Short label used on the distribution chart.
    pub const fn label(self) -> &'static str {
        match self {
            Self::CrisisManagement => "Crisis",
            Self::SustainabilityKnowledge => "Sustain",
            Self::TeamMotivation => "Motivate",
        }
    }
}

pub(crate) const PLACEHOLDER_SUMMARY: &str = "Awaiting review...";

/// Mutable scoring record; at most one exists per candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub candidate_id: CandidateId,
    pub crisis_management: u8,
    pub sustainability_knowledge: u8,
    pub team_motivation: u8,
    pub ai_summary: String,
}

impl Evaluation {
    /// Zero-valued stand-in for candidates that have not been scored yet.
    pub fn placeholder(candidate_id: CandidateId) -> Self {
        Self {
            candidate_id,
            crisis_management: 0,
            sustainability_knowledge: 0,
            team_motivation: 0,
            ai_summary: PLACEHOLDER_SUMMARY.to_string(),
        }
    }

    pub fn metric(&self, metric: Metric) -> u8 {
        match metric {
            Metric::CrisisManagement => self.crisis_management,
            Metric::SustainabilityKnowledge => self.sustainability_knowledge,
            Metric::TeamMotivation => self.team_motivation,
        }
    }

    pub fn metric_sum(&self) -> u16 {
        Metric::ordered()
            .into_iter()
            .map(|metric| u16::from(self.metric(metric)))
            .sum()
    }
}
