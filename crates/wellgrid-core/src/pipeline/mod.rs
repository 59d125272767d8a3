pub mod config;
mod orchestrator;
mod types;

pub use config::{CalibrationConfig, InsufficientPolicy, Manifest, ModelEntry};
pub use orchestrator::{calibrate_panel, run_manifest, run_model};
pub use types::{ModelOutcome, NoOpReporter, PanelReport, PipelineStage, ProgressReporter, SlotSource};
