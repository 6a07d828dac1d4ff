//! Input/output operations and error handling

/// Command-line interface and batch file orchestration
pub mod cli;
/// Pipeline constants and runtime configuration defaults
pub mod configuration;
/// Error types for pipeline operations
pub mod error;
/// Image decoding and encoding at the pipeline boundaries
pub mod image;
/// Progress display for batch runs
pub mod progress;
