pub mod calibrate;
pub mod config;
pub mod detect;

use clap::ValueEnum;
use wellgrid_core::detection::{ContourConfig, ExtractorConfig, GradientConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StrategyArg {
    /// Multi-pass gradient circle voting
    Gradient,
    /// Threshold, morphology and contour circularity
    Contour,
}

impl StrategyArg {
    /// Keep `current` when it already uses this strategy, otherwise switch to
    /// the strategy's defaults.
    pub fn apply(self, current: ExtractorConfig) -> ExtractorConfig {
        match (self, current) {
            (Self::Gradient, cfg @ ExtractorConfig::Gradient(_)) => cfg,
            (Self::Contour, cfg @ ExtractorConfig::Contour(_)) => cfg,
            (Self::Gradient, _) => ExtractorConfig::Gradient(GradientConfig::default()),
            (Self::Contour, _) => ExtractorConfig::Contour(ContourConfig::default()),
        }
    }
}
