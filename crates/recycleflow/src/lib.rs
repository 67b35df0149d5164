//! In-memory model behind the RecycleFlow Intelligence hiring dashboard.
//!
//! The [`workflows::talent`] module owns the synthetic candidate roster, the
//! scoring pipeline and the single-flight reassessment action. The remaining
//! modules carry the service plumbing shared with the API binary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
