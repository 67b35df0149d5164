//! Candidate roster, scoring pipeline and the reassessment desk.
//!
//! Data flows one way: the roster generator produces candidates and their
//! initial evaluations, the [`TalentDesk`] holds them in memory, and every
//! read runs the scoring pipeline from scratch.

pub mod activity;
pub(crate) mod assessment;
pub mod desk;
pub mod domain;
pub mod notify;
pub mod random;
pub mod roster;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use activity::{ActivityEntry, ActivityLog};
pub use assessment::{summarize_metrics, REASSESSMENT_RANGES};
pub use desk::{
    share_link, DeskSettings, EvaluationTrigger, PendingEvaluation, TalentDesk, TalentError,
    TriggerRejection,
};
pub use domain::{Candidate, CandidateId, Evaluation, Metric, PreviousRole};
pub use notify::{Notification, NotificationPublisher, NotificationTone};
pub use random::{RandomSource, SeededRandom};
pub use roster::{generate_candidates, generate_candidates_from, generate_initial_evaluations};
pub use router::talent_router;
pub use scoring::{
    compute_scored_population, compute_skill_matrix, leaderboard, CandidateWithScore,
    SkillDistributionRow, SkillMatrix, SkillTier, TierCounts,
};
