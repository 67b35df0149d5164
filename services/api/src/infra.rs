use metrics_exporter_prometheus::PrometheusHandle;
use recycleflow::workflows::talent::{
    DeskSettings, Notification, NotificationPublisher, SeededRandom, TalentDesk,
};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

pub(crate) type ServiceDesk = TalentDesk<SeededRandom, InMemoryNotificationCenter>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps every notification the desk emits and mirrors it to the log.
#[derive(Default, Clone)]
pub(crate) struct InMemoryNotificationCenter {
    events: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationPublisher for InMemoryNotificationCenter {
    fn publish(&self, notification: Notification) {
        info!(
            title = %notification.title,
            candidate_id = %notification.candidate_id,
            "{}",
            notification.message
        );
        let mut guard = self.events.lock().expect("notification mutex poisoned");
        guard.push(notification);
    }
}

impl InMemoryNotificationCenter {
    pub(crate) fn events(&self) -> Vec<Notification> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .clone()
    }
}

pub(crate) fn bootstrap_desk(
    seed: Option<u64>,
    notifications: Arc<InMemoryNotificationCenter>,
    settings: DeskSettings,
) -> ServiceDesk {
    TalentDesk::bootstrap(SeededRandom::from_optional_seed(seed), notifications, settings)
}
