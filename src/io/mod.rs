//! Errors, configuration and the command-line driver

/// Command-line driver for running searches on text layouts
pub mod cli;
/// Sizing, pacing and display defaults
pub mod configuration;
/// Error types and constructors
pub mod error;
/// Plain-text grid layouts with path overlays
pub mod layout;
/// Expansion progress display
pub mod progress;
