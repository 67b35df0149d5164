use std::collections::VecDeque;

use chrono::NaiveDateTime;
use serde::Serialize;

const TIME_FORMAT: &str = "%m/%d %H:%M";

/// Number of entries the dashboard shows.
pub const RECENT_ACTIVITY_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub recorded_at: NaiveDateTime,
    /// `MM/DD HH:MM` rendering of `recorded_at`.
    pub time: String,
    pub action: String,
}

impl ActivityEntry {
    pub fn new(recorded_at: NaiveDateTime, action: impl Into<String>) -> Self {
        Self {
            recorded_at,
            time: recorded_at.format(TIME_FORMAT).to_string(),
            action: action.into(),
        }
    }
}

/// Append-only audit trail, newest entry first. Nothing is ever evicted.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
}

impl ActivityLog {
    /// Log seeded with the bootstrap entries for a roster of `population`.
    pub fn seeded(at: NaiveDateTime, population: usize) -> Self {
        let mut log = Self::default();
        log.record(ActivityEntry::new(
            at,
            format!("Database Hydrated ({population} Records)"),
        ));
        log.record(ActivityEntry::new(at, "System Ready - Mock Mode"));
        log
    }

    pub fn record(&mut self, entry: ActivityEntry) {
        self.entries.push_front(entry);
    }

    pub fn recent(&self, limit: usize) -> Vec<ActivityEntry> {
        self.entries.iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
