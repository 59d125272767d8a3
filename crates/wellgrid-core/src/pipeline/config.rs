use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FETCH_TIMEOUT_SECS;
use crate::detection::{DedupeConfig, ExtractorConfig};
use crate::error::Result;
use crate::grid::{FallbackConfig, GridSpec, ResolverConfig};

/// What to do when detection finds fewer candidates than the grid has cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsufficientPolicy {
    /// Report the shortfall and synthesize a fallback grid.
    #[default]
    Fallback,
    /// Report the shortfall and fail the model.
    Skip,
}

impl std::fmt::Display for InsufficientPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fallback => write!(f, "Fallback"),
            Self::Skip => write!(f, "Skip"),
        }
    }
}

/// Everything that shapes one calibration run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalibrationConfig {
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default)]
    pub dedupe: DedupeConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
    #[serde(default)]
    pub on_insufficient: InsufficientPolicy,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_fetch_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            dedupe: DedupeConfig::default(),
            resolver: ResolverConfig::default(),
            fallback: FallbackConfig::default(),
            on_insufficient: InsufficientPolicy::default(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

/// One product model: an image source and its declared button grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub id: String,
    /// Local path or `http(s)://` URL.
    pub source: String,
    pub cols: usize,
    pub rows: usize,
}

impl ModelEntry {
    pub fn grid(&self) -> Result<GridSpec> {
        GridSpec::new(self.cols, self.rows)
    }

    /// Overlay file name, `<id lowercased>-slots.png`.
    pub fn overlay_file_name(&self) -> String {
        format!("{}-slots.png", self.id.to_lowercase())
    }
}

impl std::fmt::Display for ModelEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}x{})", self.id, self.cols, self.rows)
    }
}

/// Batch input: the models to calibrate and the shared configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Where overlays are written; no overlays when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub config: CalibrationConfig,
    #[serde(default, rename = "model")]
    pub models: Vec<ModelEntry>,
}
