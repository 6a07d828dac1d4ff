//! Mathematical utilities for the pipeline

/// Percentile and range statistics over pixel samples
pub mod statistics;
