use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::talent::desk::{DeskSettings, TalentDesk};
use crate::workflows::talent::domain::{Candidate, CandidateId, Evaluation, PreviousRole};
use crate::workflows::talent::notify::{Notification, NotificationPublisher};
use crate::workflows::talent::random::RandomSource;

/// Replays queued draws (offsets into the requested range), then falls back
/// to zero.
#[derive(Debug, Default)]
pub(super) struct ScriptedRandom {
    draws: VecDeque<u32>,
}

impl ScriptedRandom {
    pub(super) fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_below(&mut self, upper: u32) -> u32 {
        self.draws.pop_front().unwrap_or(0) % upper
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifications {
    events: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifications {
    pub(super) fn events(&self) -> Vec<Notification> {
        self.events.lock().expect("notification mutex poisoned").clone()
    }
}

impl NotificationPublisher for MemoryNotifications {
    fn publish(&self, notification: Notification) {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .push(notification);
    }
}

pub(super) type TestDesk = TalentDesk<ScriptedRandom, MemoryNotifications>;

pub(super) fn id(raw: &str) -> CandidateId {
    CandidateId(raw.to_string())
}

pub(super) fn candidate(index: usize, name: &str) -> Candidate {
    Candidate {
        id: CandidateId::from_position(index),
        name: name.to_string(),
        avatar: format!("https://i.pravatar.cc/300?u={}", name.replace(' ', "")),
        experience_years: 8,
        skills: vec!["Waste Segregation".to_string(), "ISO 14001".to_string()],
        bio: "Recycling floor veteran.".to_string(),
        previous_role: PreviousRole::RecyclingSupervisor,
    }
}

pub(super) fn evaluation(index: usize, metrics: [u8; 3]) -> Evaluation {
    Evaluation {
        candidate_id: CandidateId::from_position(index),
        crisis_management: metrics[0],
        sustainability_knowledge: metrics[1],
        team_motivation: metrics[2],
        ai_summary: "Automated preliminary scoring.".to_string(),
    }
}

pub(super) fn settings() -> DeskSettings {
    DeskSettings {
        evaluation_latency: Duration::from_millis(1500),
        public_origin: "https://talent.recycleflow.test".to_string(),
    }
}

/// Three candidates; `c3` has no evaluation yet.
pub(super) fn small_desk(draws: Vec<u32>) -> (Arc<TestDesk>, MemoryNotifications) {
    let candidates = vec![
        candidate(0, "Liam Smith"),
        candidate(1, "Olivia Johnson"),
        candidate(2, "Noah Williams"),
    ];
    let evaluations = vec![evaluation(0, [70, 70, 70]), evaluation(1, [90, 85, 80])];
    let notifications = MemoryNotifications::default();
    let desk = TalentDesk::with_roster(
        candidates,
        evaluations,
        ScriptedRandom::new(draws),
        Arc::new(notifications.clone()),
        settings(),
    );
    (Arc::new(desk), notifications)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
