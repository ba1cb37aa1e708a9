pub mod error;
pub mod extractors;
pub mod metrics;
pub mod sprints;
