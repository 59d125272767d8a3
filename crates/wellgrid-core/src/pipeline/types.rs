use std::path::PathBuf;

use serde::Serialize;

use crate::detection::Candidate;
use crate::error::Result;
use crate::frame::ImageSize;
use crate::grid::{NormalizedSlot, Slot};

/// Per-model processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Fetching,
    Decoding,
    Calibrating,
    Rendering,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetching => write!(f, "Fetching image"),
            Self::Decoding => write!(f, "Decoding"),
            Self::Calibrating => write!(f, "Calibrating"),
            Self::Rendering => write!(f, "Rendering overlay"),
        }
    }
}

/// Where a report's slots came from.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotSource {
    /// Resolved from detected candidates using the top `pool_size` of them.
    Detected { pool_size: usize },
    /// Synthesized because resolution failed; `reason` is the failure.
    Fallback { reason: String },
}

impl SlotSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

impl std::fmt::Display for SlotSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Detected { pool_size } => write!(f, "Detected (pool {pool_size})"),
            Self::Fallback { reason } => write!(f, "Fallback: {reason}"),
        }
    }
}

/// Calibration result for one panel image.
#[derive(Clone, Debug, Serialize)]
pub struct PanelReport {
    pub id: String,
    pub size: ImageSize,
    /// Candidates straight out of the extractor.
    pub raw_candidates: usize,
    /// Candidates left after deduplication.
    pub unique_candidates: usize,
    pub source: SlotSource,
    /// Empty for fallback grids.
    pub column_centers: Vec<f64>,
    pub row_centers: Vec<f64>,
    pub slots: Vec<Slot>,
    pub normalized: Vec<NormalizedSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_size_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_path: Option<PathBuf>,
    #[serde(skip)]
    pub candidates: Vec<Candidate>,
}

/// Thread-safe progress reporting across a batch of models.
///
/// All methods have default no-op implementations. Calls for different
/// models may interleave.
pub trait ProgressReporter: Send + Sync {
    /// `total_models` models are about to be processed.
    fn begin_batch(&self, _total_models: usize) {}

    fn begin_model(&self, _id: &str) {}

    fn stage(&self, _id: &str, _stage: PipelineStage) {}

    /// A model finished, successfully or not.
    fn finish_model(&self, _id: &str, _ok: bool) {}
}

/// No-op progress reporter.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// Result of one manifest entry.
#[derive(Debug)]
pub struct ModelOutcome {
    pub id: String,
    pub result: Result<PanelReport>,
}
