//! Input/output collaborators, configuration and error handling

/// Command-line interface and collage runner
pub mod cli;
/// Defaults and limits
pub mod configuration;
/// Textual tile edit scripts
pub mod edit;
/// Error types
pub mod error;
/// Image loading and saving
pub mod image;
/// Progress display for edit scripts
pub mod progress;
/// Display collaborators
pub mod viewer;
