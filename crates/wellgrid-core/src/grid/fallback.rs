use tracing::debug;

use crate::frame::ImageSize;

use super::config::FallbackConfig;
use super::types::{GridSpec, Slot};

/// Evenly spaced positions across `[start, end]`; a single position sits at
/// the midpoint.
fn span_positions(span: [f64; 2], n: usize) -> Vec<f64> {
    let [start, end] = span;
    if n <= 1 {
        return vec![(start + end) * 0.5];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Synthesize a `cols x rows` grid over a fractional bounding box of the image.
///
/// Used when resolution fails. Never fails; slots come back in row-major order.
pub fn fallback_grid(size: ImageSize, spec: GridSpec, config: &FallbackConfig) -> Vec<Slot> {
    let width = size.width as f64;
    let height = size.height as f64;
    let xs = span_positions(config.x_span, spec.cols());
    let ys = span_positions(config.y_span, spec.rows());
    let radius = (size.shorter_side() as f64 * config.radius_fraction).max(1.0);

    debug!(grid = %spec, size = %size, radius, "Synthesizing fallback grid");

    spec.cells()
        .map(|(row, col)| Slot {
            row,
            col,
            x: xs[col] * width,
            y: ys[row] * height,
            radius,
        })
        .collect()
}
