/// Command-line interface and run orchestration
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG preview export
pub mod image;
/// Placement rollout progress display
pub mod progress;
/// Animated GIF capture of the placement rollout
pub mod visualization;
