use std::collections::HashMap;

use serde::Serialize;

use super::domain::{Candidate, CandidateId, Evaluation, Metric};

/// Denominator turning the 0..=300 metric sum into a 0..=10 score.
const SCORE_DIVISOR: f64 = 30.0;

/// Candidate joined with its evaluation, composite score and board position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateWithScore {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub scores: Evaluation,
    pub total_score: f64,
    pub rank: usize,
}

/// Join, score, stable-sort descending and assign positional ranks.
///
/// Candidates without an evaluation join with [`Evaluation::placeholder`].
/// When the evaluation list holds duplicates the first one wins.
pub fn compute_scored_population(
    candidates: &[Candidate],
    evaluations: &[Evaluation],
) -> Vec<CandidateWithScore> {
    let mut by_candidate: HashMap<&CandidateId, &Evaluation> =
        HashMap::with_capacity(evaluations.len());
    for evaluation in evaluations {
        by_candidate
            .entry(&evaluation.candidate_id)
            .or_insert(evaluation);
    }

    let mut population: Vec<CandidateWithScore> = candidates
        .iter()
        .map(|candidate| {
            let scores = by_candidate
                .get(&candidate.id)
                .map(|evaluation| (*evaluation).clone())
                .unwrap_or_else(|| Evaluation::placeholder(candidate.id.clone()));
            let total_score = f64::from(scores.metric_sum()) / SCORE_DIVISOR;

            CandidateWithScore {
                candidate: candidate.clone(),
                scores,
                total_score,
                rank: 0,
            }
        })
        .collect();

    // `sort_by` is stable, so ties keep roster order.
    population.sort_by(|left, right| right.total_score.total_cmp(&left.total_score));
    for (index, entry) in population.iter_mut().enumerate() {
        entry.rank = index + 1;
    }

    population
}

/// First `limit` entries of an already ranked population.
pub fn leaderboard(population: &[CandidateWithScore], limit: usize) -> &[CandidateWithScore] {
    &population[..limit.min(population.len())]
}

/// Coarse band a metric value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SkillTier {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "med")]
    Medium,
    #[serde(rename = "high")]
    High,
}

impl SkillTier {
    pub const HIGH_FLOOR: u8 = 80;
    pub const MEDIUM_FLOOR: u8 = 50;

    pub const fn classify(value: u8) -> Self {
        if value >= Self::HIGH_FLOOR {
            Self::High
        } else if value >= Self::MEDIUM_FLOOR {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub low: usize,
    pub med: usize,
    pub high: usize,
}

impl TierCounts {
    fn record(&mut self, tier: SkillTier) {
        match tier {
            SkillTier::Low => self.low += 1,
            SkillTier::Medium => self.med += 1,
            SkillTier::High => self.high += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.med + self.high
    }
}

/// Metric × tier counts over the evaluation collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkillMatrix {
    pub crisis: TierCounts,
    pub sustain: TierCounts,
    pub motivate: TierCounts,
}

impl SkillMatrix {
    pub fn counts(&self, metric: Metric) -> &TierCounts {
        match metric {
            Metric::CrisisManagement => &self.crisis,
            Metric::SustainabilityKnowledge => &self.sustain,
            Metric::TeamMotivation => &self.motivate,
        }
    }

    fn counts_mut(&mut self, metric: Metric) -> &mut TierCounts {
        match metric {
            Metric::CrisisManagement => &mut self.crisis,
            Metric::SustainabilityKnowledge => &mut self.sustain,
            Metric::TeamMotivation => &mut self.motivate,
        }
    }

    /// Chart rows in Crisis, Sustain, Motivate order.
    pub fn rows(&self) -> Vec<SkillDistributionRow> {
        Metric::ordered()
            .into_iter()
            .map(|metric| {
                let counts = self.counts(metric);
                SkillDistributionRow {
                    metric,
                    label: metric.label(),
                    low: counts.low,
                    medium: counts.med,
                    high: counts.high,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillDistributionRow {
    pub metric: Metric,
    pub label: &'static str,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

pub fn compute_skill_matrix(evaluations: &[Evaluation]) -> SkillMatrix {
    let mut matrix = SkillMatrix::default();
    for evaluation in evaluations {
        for metric in Metric::ordered() {
            let tier = SkillTier::classify(evaluation.metric(metric));
            matrix.counts_mut(metric).record(tier);
        }
    }
    matrix
}
