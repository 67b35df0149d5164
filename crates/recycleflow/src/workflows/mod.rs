//! Hiring workflows exposed by the service.

pub mod talent;
