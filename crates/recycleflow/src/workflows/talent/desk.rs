use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::activity::{ActivityEntry, ActivityLog};
use super::assessment::draft_reassessment;
use super::domain::{Candidate, CandidateId, Evaluation};
use super::notify::{Notification, NotificationPublisher};
use super::random::RandomSource;
use super::roster::{generate_candidates, generate_initial_evaluations};
use super::scoring::{
    compute_scored_population, compute_skill_matrix, leaderboard, CandidateWithScore,
    SkillMatrix,
};

/// Runtime knobs for the desk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskSettings {
    /// Simulated scoring latency; always waited out in full.
    pub evaluation_latency: Duration,
    pub public_origin: String,
}

impl Default for DeskSettings {
    fn default() -> Self {
        Self {
            evaluation_latency: Duration::from_millis(1500),
            public_origin: "http://127.0.0.1:3000".to_string(),
        }
    }
}

/// Shareable locator for a candidate profile under `origin`.
pub fn share_link(origin: &str, candidate_id: &CandidateId) -> String {
    format!("{}/candidates/{}", origin.trim_end_matches('/'), candidate_id)
}

/// Error raised by lookups that must name an existing candidate.
#[derive(Debug, thiserror::Error)]
pub enum TalentError {
    #[error("candidate {0} not found")]
    CandidateNotFound(CandidateId),
}

/// Why a reassessment request was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum TriggerRejection {
    NotFound,
    Busy { in_flight: CandidateId },
}

impl TriggerRejection {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Busy { .. } => "busy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationTrigger {
    Completed(Evaluation),
    Rejected(TriggerRejection),
    /// The worker was torn down with its runtime before storing scores. The
    /// desk has already been released.
    Interrupted(CandidateId),
}

/// Ticket for an accepted reassessment. The desk stays busy until it is
/// handed to [`TalentDesk::complete_evaluation`] or
/// [`TalentDesk::spawn_evaluation`].
#[derive(Debug)]
#[must_use = "the desk stays busy until the pending evaluation is completed"]
pub struct PendingEvaluation {
    candidate_id: CandidateId,
    candidate_name: String,
    requested_at: NaiveDateTime,
}

impl PendingEvaluation {
    pub fn candidate_id(&self) -> &CandidateId {
        &self.candidate_id
    }

    pub fn candidate_name(&self) -> &str {
        &self.candidate_name
    }
}

struct DeskState {
    candidates: Vec<Candidate>,
    evaluations: Vec<Evaluation>,
    activity: ActivityLog,
    evaluating: Option<CandidateId>,
}

impl DeskState {
    fn candidate(&self, id: &CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| &candidate.id == id)
    }

    fn upsert(&mut self, evaluation: Evaluation) {
        match self
            .evaluations
            .iter_mut()
            .find(|existing| existing.candidate_id == evaluation.candidate_id)
        {
            Some(existing) => *existing = evaluation,
            None => self.evaluations.push(evaluation),
        }
    }
}

/// Clears the busy marker when a completion is dropped before it stores scores.
struct BusyRelease<'a> {
    state: &'a Mutex<DeskState>,
    candidate_id: &'a CandidateId,
    armed: bool,
}

impl BusyRelease<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for BusyRelease<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.evaluating.as_ref() == Some(self.candidate_id) {
            state.evaluating = None;
        }
        warn!(
            candidate_id = %self.candidate_id,
            "reassessment dropped before completion; desk released"
        );
    }
}

/// Owner of the roster, evaluations, activity log and the busy marker.
///
/// Reads recompute the scoring pipeline from scratch. The only mutation is
/// the reassessment action, of which at most one runs at a time across the
/// whole desk; requests arriving while one is in flight are dropped.
pub struct TalentDesk<R, N> {
    state: Mutex<DeskState>,
    random: Mutex<R>,
    notifications: Arc<N>,
    settings: DeskSettings,
}

impl<R, N> TalentDesk<R, N>
where
    R: RandomSource + 'static,
    N: NotificationPublisher + 'static,
{
    /// Generate the standard roster and its preliminary evaluations.
    pub fn bootstrap(mut random: R, notifications: Arc<N>, settings: DeskSettings) -> Self {
        let candidates = generate_candidates(&mut random);
        let evaluations = generate_initial_evaluations(&candidates, &mut random);
        info!(population = candidates.len(), "talent roster hydrated");
        Self::with_roster(candidates, evaluations, random, notifications, settings)
    }

    pub fn with_roster(
        candidates: Vec<Candidate>,
        evaluations: Vec<Evaluation>,
        random: R,
        notifications: Arc<N>,
        settings: DeskSettings,
    ) -> Self {
        let activity = ActivityLog::seeded(Local::now().naive_local(), candidates.len());
        Self {
            state: Mutex::new(DeskState {
                candidates,
                evaluations,
                activity,
                evaluating: None,
            }),
            random: Mutex::new(random),
            notifications,
            settings,
        }
    }

    pub fn settings(&self) -> &DeskSettings {
        &self.settings
    }

    pub fn scored_population(&self) -> Vec<CandidateWithScore> {
        let state = self.state();
        compute_scored_population(&state.candidates, &state.evaluations)
    }

    pub fn leaderboard(&self, limit: usize) -> Vec<CandidateWithScore> {
        leaderboard(&self.scored_population(), limit).to_vec()
    }

    /// Scored detail view for one candidate.
    pub fn candidate(&self, id: &CandidateId) -> Result<CandidateWithScore, TalentError> {
        self.scored_population()
            .into_iter()
            .find(|entry| &entry.candidate.id == id)
            .ok_or_else(|| TalentError::CandidateNotFound(id.clone()))
    }

    pub fn evaluation(&self, id: &CandidateId) -> Option<Evaluation> {
        self.state()
            .evaluations
            .iter()
            .find(|evaluation| &evaluation.candidate_id == id)
            .cloned()
    }

    pub fn skill_matrix(&self) -> SkillMatrix {
        compute_skill_matrix(&self.state().evaluations)
    }

    pub fn recent_activity(&self, limit: usize) -> Vec<ActivityEntry> {
        self.state().activity.recent(limit)
    }

    pub fn activity_len(&self) -> usize {
        self.state().activity.len()
    }

    /// Candidate whose reassessment is in flight, if any.
    pub fn evaluating(&self) -> Option<CandidateId> {
        self.state().evaluating.clone()
    }

    /// Check the target and claim the busy marker.
    pub fn begin_evaluation(
        &self,
        id: &CandidateId,
    ) -> Result<PendingEvaluation, TriggerRejection> {
        let mut state = self.state();

        let candidate_name = match state.candidate(id) {
            Some(candidate) => candidate.name.clone(),
            None => {
                debug!(candidate_id = %id, "reassessment ignored: unknown candidate");
                return Err(TriggerRejection::NotFound);
            }
        };

        if let Some(in_flight) = &state.evaluating {
            debug!(
                candidate_id = %id,
                in_flight = %in_flight,
                "reassessment ignored: desk busy"
            );
            return Err(TriggerRejection::Busy {
                in_flight: in_flight.clone(),
            });
        }

        state.evaluating = Some(id.clone());
        info!(candidate_id = %id, "reassessment started");

        Ok(PendingEvaluation {
            candidate_id: id.clone(),
            candidate_name,
            requested_at: Local::now().naive_local(),
        })
    }

    /// Wait out the simulated latency, store the new scores and release the desk.
    ///
    /// Dropping this future early releases the desk without touching the
    /// scores; use [`TalentDesk::spawn_evaluation`] to outlive the caller.
    pub async fn complete_evaluation(&self, pending: PendingEvaluation) -> Evaluation {
        let PendingEvaluation {
            candidate_id,
            candidate_name,
            requested_at,
        } = pending;
        let release = BusyRelease {
            state: &self.state,
            candidate_id: &candidate_id,
            armed: true,
        };

        tokio::time::sleep(self.settings.evaluation_latency).await;

        let evaluation = {
            let mut random = self.random.lock().unwrap_or_else(PoisonError::into_inner);
            draft_reassessment(candidate_id.clone(), &mut *random)
        };

        release.disarm();
        {
            let mut state = self.state();
            state.upsert(evaluation.clone());
            state.activity.record(ActivityEntry::new(
                requested_at,
                format!("AI Audit Complete: {candidate_name}"),
            ));
            state.evaluating = None;
        }

        info!(
            candidate_id = %candidate_id,
            crisis = evaluation.crisis_management,
            sustainability = evaluation.sustainability_knowledge,
            motivation = evaluation.team_motivation,
            "reassessment complete"
        );
        self.notifications
            .publish(Notification::assessment_complete(candidate_id, &candidate_name));

        evaluation
    }

    /// Run the completion on its own task so it finishes even if nobody awaits it.
    pub fn spawn_evaluation(
        self: &Arc<Self>,
        pending: PendingEvaluation,
    ) -> JoinHandle<Evaluation> {
        let worker = Arc::clone(self);
        tokio::spawn(async move { worker.complete_evaluation(pending).await })
    }

    /// Full reassessment: begin, wait, store. Rejections are no-ops.
    ///
    /// The work runs on a spawned task, so cancelling this future does not
    /// cancel the reassessment.
    pub async fn trigger_evaluation(self: &Arc<Self>, id: &CandidateId) -> EvaluationTrigger {
        let pending = match self.begin_evaluation(id) {
            Ok(pending) => pending,
            Err(rejection) => return EvaluationTrigger::Rejected(rejection),
        };

        match self.spawn_evaluation(pending).await {
            Ok(evaluation) => EvaluationTrigger::Completed(evaluation),
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => {
                warn!(candidate_id = %id, error = %err, "reassessment worker cancelled");
                EvaluationTrigger::Interrupted(id.clone())
            }
        }
    }

    /// Shareable link for an existing candidate; announces the share.
    pub fn share(&self, id: &CandidateId) -> Result<String, TalentError> {
        if self.state().candidate(id).is_none() {
            return Err(TalentError::CandidateNotFound(id.clone()));
        }

        let link = share_link(&self.settings.public_origin, id);
        self.notifications.publish(Notification::shared(id.clone()));
        Ok(link)
    }

    fn state(&self) -> MutexGuard<'_, DeskState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
