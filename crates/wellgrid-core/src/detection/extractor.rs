use crate::filters::gaussian_blur_array;
use crate::frame::PanelImage;

use super::candidate::Candidate;
use super::config::{ContourConfig, ExtractorConfig, GradientConfig};
use super::contour::contour_circles;
use super::gradient::{sobel, to_luma8};
use super::hough::hough_circles;

/// Turns a panel image into circular candidates.
///
/// Implementations must exclude transparent pixels and return an empty set
/// rather than fail when nothing passes their filters.
pub trait FeatureExtractor: Send + Sync {
    /// Short name for logs and summaries.
    fn name(&self) -> &'static str;

    fn extract(&self, panel: &PanelImage) -> Vec<Candidate>;
}

/// Multi-pass gradient circle voting; results of all passes are unioned.
pub struct GradientExtractor {
    config: GradientConfig,
}

impl GradientExtractor {
    pub fn new(config: GradientConfig) -> Self {
        Self { config }
    }
}

impl FeatureExtractor for GradientExtractor {
    fn name(&self) -> &'static str {
        "gradient"
    }

    fn extract(&self, panel: &PanelImage) -> Vec<Candidate> {
        let work = panel.filled(self.config.transparent_fill);
        let image = to_luma8(&work);
        // Voting directions only; edges are found on `image`.
        let blurred = gaussian_blur_array(&work, self.config.blur_sigma);
        let grads = sobel(&blurred.mapv(|v| v * 255.0));

        self.config
            .passes
            .iter()
            .flat_map(|pass| hough_circles(&image, &grads, pass))
            .collect()
    }
}

/// Threshold + morphology + contour geometry.
pub struct ContourExtractor {
    config: ContourConfig,
}

impl ContourExtractor {
    pub fn new(config: ContourConfig) -> Self {
        Self { config }
    }
}

impl FeatureExtractor for ContourExtractor {
    fn name(&self) -> &'static str {
        "contour"
    }

    fn extract(&self, panel: &PanelImage) -> Vec<Candidate> {
        contour_circles(panel, &self.config)
    }
}

/// Build the extractor selected by `config`.
pub fn create_extractor(config: &ExtractorConfig) -> Box<dyn FeatureExtractor> {
    match config {
        ExtractorConfig::Gradient(cfg) => Box::new(GradientExtractor::new(cfg.clone())),
        ExtractorConfig::Contour(cfg) => Box::new(ContourExtractor::new(cfg.clone())),
    }
}
