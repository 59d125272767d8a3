use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CLOSE_ITERATIONS, DEFAULT_CONTOUR_BLUR_SIGMA, DEFAULT_CONTOUR_MIN_RADIUS,
    DEFAULT_CONTOUR_THRESHOLD, DEFAULT_DEDUP_TOLERANCE, DEFAULT_GRADIENT_BLUR_SIGMA,
    DEFAULT_GRADIENT_TRANSPARENT_FILL, DEFAULT_MAX_AREA_FRACTION, DEFAULT_MIN_AREA_FRACTION,
    DEFAULT_MIN_CIRCULARITY, DEFAULT_OPEN_ITERATIONS, DEFAULT_STRUCTURING_ELEMENT_SIZE,
};

/// Which feature extractor to run, with its parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ExtractorConfig {
    /// Multi-pass gradient circle voting.
    Gradient(GradientConfig),
    /// Threshold, morphology and contour geometry.
    Contour(ContourConfig),
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::Gradient(GradientConfig::default())
    }
}

impl std::fmt::Display for ExtractorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gradient(cfg) => write!(f, "Gradient ({} passes)", cfg.passes.len()),
            Self::Contour(cfg) => write!(f, "Contour ({})", cfg.threshold),
        }
    }
}

/// One parameter set for the gradient circle detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoughPass {
    /// Inverse accumulator resolution: 1.0 votes at full resolution, 2.0 at half.
    pub dp: f64,
    /// Minimum distance (pixels) between accepted centers.
    pub min_dist: f64,
    /// Upper edge hysteresis threshold in 8-bit gradient units; lower is half.
    pub edge_threshold: f32,
    /// Minimum votes for an accumulator cell to become a center.
    pub accumulator_threshold: f32,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl HoughPass {
    pub fn new(
        dp: f64,
        min_dist: f64,
        edge_threshold: f32,
        accumulator_threshold: f32,
        min_radius: f64,
        max_radius: f64,
    ) -> Self {
        Self {
            dp,
            min_dist,
            edge_threshold,
            accumulator_threshold,
            min_radius,
            max_radius,
        }
    }
}

/// Configuration for the gradient-based extractor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GradientConfig {
    /// Gaussian blur sigma for the gradients that steer voting; edge
    /// detection does its own smoothing.
    #[serde(default = "default_gradient_blur_sigma")]
    pub blur_sigma: f32,
    /// Intensity written into transparent pixels.
    #[serde(default = "default_gradient_fill")]
    pub transparent_fill: f32,
    /// Parameter sweep; results of all passes are unioned.
    #[serde(default = "default_passes")]
    pub passes: Vec<HoughPass>,
}

fn default_gradient_blur_sigma() -> f32 {
    DEFAULT_GRADIENT_BLUR_SIGMA
}
fn default_gradient_fill() -> f32 {
    DEFAULT_GRADIENT_TRANSPARENT_FILL
}
fn default_passes() -> Vec<HoughPass> {
    vec![
        HoughPass::new(1.2, 28.0, 120.0, 26.0, 20.0, 80.0),
        HoughPass::new(1.15, 24.0, 110.0, 24.0, 18.0, 85.0),
        HoughPass::new(1.3, 30.0, 140.0, 30.0, 24.0, 90.0),
    ]
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            blur_sigma: DEFAULT_GRADIENT_BLUR_SIGMA,
            transparent_fill: DEFAULT_GRADIENT_TRANSPARENT_FILL,
            passes: default_passes(),
        }
    }
}

/// Binarization level used by the contour extractor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdMethod {
    /// User-specified fixed threshold in [0.0, 1.0].
    Fixed(f32),
    /// Otsu's method over the opaque pixels.
    Otsu,
}

impl Default for ThresholdMethod {
    fn default() -> Self {
        Self::Fixed(DEFAULT_CONTOUR_THRESHOLD)
    }
}

impl std::fmt::Display for ThresholdMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(v) => write!(f, "Fixed {v:.3}"),
            Self::Otsu => write!(f, "Otsu"),
        }
    }
}

/// Configuration for the contour-based extractor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContourConfig {
    #[serde(default = "default_contour_blur_sigma")]
    pub blur_sigma: f32,
    #[serde(default)]
    pub transparent_fill: f32,
    #[serde(default)]
    pub threshold: ThresholdMethod,
    /// Side length of the elliptical structuring element.
    #[serde(default = "default_element_size")]
    pub element_size: usize,
    #[serde(default = "default_open_iterations")]
    pub open_iterations: usize,
    #[serde(default = "default_close_iterations")]
    pub close_iterations: usize,
    #[serde(default = "default_min_area_fraction")]
    pub min_area_fraction: f64,
    #[serde(default = "default_max_area_fraction")]
    pub max_area_fraction: f64,
    #[serde(default = "default_min_circularity")]
    pub min_circularity: f64,
    #[serde(default = "default_contour_min_radius")]
    pub min_radius: f64,
}

fn default_contour_blur_sigma() -> f32 {
    DEFAULT_CONTOUR_BLUR_SIGMA
}
fn default_element_size() -> usize {
    DEFAULT_STRUCTURING_ELEMENT_SIZE
}
fn default_open_iterations() -> usize {
    DEFAULT_OPEN_ITERATIONS
}
fn default_close_iterations() -> usize {
    DEFAULT_CLOSE_ITERATIONS
}
fn default_min_area_fraction() -> f64 {
    DEFAULT_MIN_AREA_FRACTION
}
fn default_max_area_fraction() -> f64 {
    DEFAULT_MAX_AREA_FRACTION
}
fn default_min_circularity() -> f64 {
    DEFAULT_MIN_CIRCULARITY
}
fn default_contour_min_radius() -> f64 {
    DEFAULT_CONTOUR_MIN_RADIUS
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self {
            blur_sigma: DEFAULT_CONTOUR_BLUR_SIGMA,
            transparent_fill: 0.0,
            threshold: ThresholdMethod::default(),
            element_size: DEFAULT_STRUCTURING_ELEMENT_SIZE,
            open_iterations: DEFAULT_OPEN_ITERATIONS,
            close_iterations: DEFAULT_CLOSE_ITERATIONS,
            min_area_fraction: DEFAULT_MIN_AREA_FRACTION,
            max_area_fraction: DEFAULT_MAX_AREA_FRACTION,
            min_circularity: DEFAULT_MIN_CIRCULARITY,
            min_radius: DEFAULT_CONTOUR_MIN_RADIUS,
        }
    }
}

/// Configuration for merging near-duplicate candidates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DedupeConfig {
    /// Maximum per-axis center difference (pixels) for two candidates to merge.
    #[serde(default = "default_dedup_tolerance")]
    pub tolerance: f64,
    /// When set, radii must also agree within this many pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_tolerance: Option<f64>,
}

fn default_dedup_tolerance() -> f64 {
    DEFAULT_DEDUP_TOLERANCE
}

impl Default for DedupeConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_DEDUP_TOLERANCE,
            radius_tolerance: None,
        }
    }
}
