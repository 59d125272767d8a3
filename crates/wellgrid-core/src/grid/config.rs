use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_FALLBACK_RADIUS_FRACTION, DEFAULT_FALLBACK_X_SPAN, DEFAULT_FALLBACK_Y_SPAN,
    DEFAULT_KMEANS_ATTEMPTS, DEFAULT_KMEANS_EPSILON, DEFAULT_KMEANS_MAX_ITERATIONS,
    DEFAULT_KMEANS_SEED, DEFAULT_POOL_GROWTH_FACTOR, DEFAULT_ROW_BAND_MIN_PX,
    DEFAULT_ROW_BAND_SPACING_FRACTION,
};

/// 1-D k-means parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KMeansConfig {
    /// Independent k-means++ restarts; the lowest inertia wins.
    #[serde(default = "default_attempts")]
    pub attempts: usize,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Convergence threshold on the largest center shift (pixels).
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_attempts() -> usize {
    DEFAULT_KMEANS_ATTEMPTS
}
fn default_max_iterations() -> usize {
    DEFAULT_KMEANS_MAX_ITERATIONS
}
fn default_epsilon() -> f64 {
    DEFAULT_KMEANS_EPSILON
}
fn default_seed() -> u64 {
    DEFAULT_KMEANS_SEED
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_KMEANS_ATTEMPTS,
            max_iterations: DEFAULT_KMEANS_MAX_ITERATIONS,
            epsilon: DEFAULT_KMEANS_EPSILON,
            seed: DEFAULT_KMEANS_SEED,
        }
    }
}

/// Vertical band around a row center that candidates must fall in to be
/// assigned to that row. Half-width = max(min_px, spacing_fraction * spacing),
/// where spacing is the smallest gap between adjacent row centers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowBandConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_row_band_min_px")]
    pub min_px: f64,
    #[serde(default = "default_row_band_spacing_fraction")]
    pub spacing_fraction: f64,
}

fn default_enabled() -> bool {
    true
}
fn default_row_band_min_px() -> f64 {
    DEFAULT_ROW_BAND_MIN_PX
}
fn default_row_band_spacing_fraction() -> f64 {
    DEFAULT_ROW_BAND_SPACING_FRACTION
}

impl Default for RowBandConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_px: DEFAULT_ROW_BAND_MIN_PX,
            spacing_fraction: DEFAULT_ROW_BAND_SPACING_FRACTION,
        }
    }
}

/// Configuration for candidate-to-cell assignment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// The candidate pool grows up to `expected * pool_growth_factor`.
    #[serde(default = "default_pool_growth_factor")]
    pub pool_growth_factor: usize,
    #[serde(default)]
    pub row_band: RowBandConfig,
    #[serde(default)]
    pub kmeans: KMeansConfig,
}

fn default_pool_growth_factor() -> usize {
    DEFAULT_POOL_GROWTH_FACTOR
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            pool_growth_factor: DEFAULT_POOL_GROWTH_FACTOR,
            row_band: RowBandConfig::default(),
            kmeans: KMeansConfig::default(),
        }
    }
}

/// Fractional bounding box and radius of the synthesized fallback grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// `[start, end]` of slot centers as fractions of the image width.
    #[serde(default = "default_x_span")]
    pub x_span: [f64; 2],
    /// `[start, end]` of slot centers as fractions of the image height.
    #[serde(default = "default_y_span")]
    pub y_span: [f64; 2],
    /// Radius as a fraction of the shorter image side.
    #[serde(default = "default_radius_fraction")]
    pub radius_fraction: f64,
}

fn default_x_span() -> [f64; 2] {
    DEFAULT_FALLBACK_X_SPAN
}
fn default_y_span() -> [f64; 2] {
    DEFAULT_FALLBACK_Y_SPAN
}
fn default_radius_fraction() -> f64 {
    DEFAULT_FALLBACK_RADIUS_FRACTION
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            x_span: DEFAULT_FALLBACK_X_SPAN,
            y_span: DEFAULT_FALLBACK_Y_SPAN,
            radius_fraction: DEFAULT_FALLBACK_RADIUS_FRACTION,
        }
    }
}
