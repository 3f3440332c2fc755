//! Metrics for connection string construction
//!
//! Recorded through the `metrics` facade. Nothing is exported unless the
//! application installs a recorder.

pub mod counters;
pub mod histograms;
pub mod labels;
