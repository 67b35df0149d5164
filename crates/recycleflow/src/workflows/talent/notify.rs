use serde::Serialize;

use super::domain::CandidateId;

/// Visual emphasis requested for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTone {
    Success,
    Info,
}

/// User-facing toast payload; rendering is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub tone: NotificationTone,
    pub candidate_id: CandidateId,
}

impl Notification {
    pub(crate) fn assessment_complete(candidate_id: CandidateId, name: &str) -> Self {
        Self {
            title: "Assessment Complete".to_string(),
            message: format!("Updated profile for {name}"),
            tone: NotificationTone::Success,
            candidate_id,
        }
    }

    pub(crate) fn shared(candidate_id: CandidateId) -> Self {
        Self {
            title: "Shared".to_string(),
            message: "Candidate link ready to share".to_string(),
            tone: NotificationTone::Info,
            candidate_id,
        }
    }
}

/// Outbound hook for user notifications (toast queue, websocket fan-out).
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, notification: Notification);
}
