//! Shared application service layer for acidhydrochem.
//!
//! This crate provides a unified interface for both CLI and GUI frontends,
//! centralizing parameter presets, simulation execution, result export and
//! result summaries.

pub mod error;
pub mod preset_service;
pub mod query;
pub mod run_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use preset_service::{Preset, load_preset, save_preset, validate_inputs};
pub use query::{RunSummary, summarize};
pub use run_service::{ExportFormat, RunOptions, RunRequest, RunResponse, RunTiming, export, run};
