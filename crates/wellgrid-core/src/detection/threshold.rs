use ndarray::{Array2, Zip};

use super::config::ThresholdMethod;

/// Number of histogram bins for Otsu's thresholding.
const OTSU_HISTOGRAM_BINS: usize = 256;

/// Compute the threshold value using the configured method.
///
/// Pixels outside `mask` (where it is `false`) do not contribute to adaptive
/// thresholds.
pub fn compute_threshold(
    data: &Array2<f32>,
    method: &ThresholdMethod,
    mask: Option<&Array2<bool>>,
) -> f32 {
    match method {
        ThresholdMethod::Fixed(v) => *v,
        ThresholdMethod::Otsu => match mask {
            Some(mask) => otsu_threshold(
                data.iter()
                    .zip(mask.iter())
                    .filter_map(|(&v, &opaque)| opaque.then_some(v)),
            ),
            None => otsu_threshold(data.iter().copied()),
        },
    }
}

/// Inverted binarization: dark pixels (at or below `threshold`) become
/// foreground. Transparent pixels are never foreground.
pub fn binarize_inverted(
    data: &Array2<f32>,
    threshold: f32,
    mask: Option<&Array2<bool>>,
) -> Array2<bool> {
    let mut out = data.mapv(|v| v <= threshold);
    if let Some(mask) = mask {
        Zip::from(&mut out)
            .and(mask)
            .for_each(|fg, &opaque| *fg = *fg && opaque);
    }
    out
}

/// Otsu's thresholding: find the value that maximizes between-class variance.
pub fn otsu_threshold(values: impl Iterator<Item = f32>) -> f32 {
    let bins = OTSU_HISTOGRAM_BINS;
    let mut histogram = vec![0u64; bins];
    let mut total = 0u64;

    for v in values {
        let bin = ((v.clamp(0.0, 1.0) * (bins - 1) as f32) as usize).min(bins - 1);
        histogram[bin] += 1;
        total += 1;
    }
    if total == 0 {
        return 0.5;
    }

    let total = total as f64;
    let sum_all: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &count)| i as f64 * count as f64)
        .sum();

    let mut weight_bg = 0.0f64;
    let mut sum_bg = 0.0f64;
    let mut best_variance = 0.0f64;
    let mut best_bin = 0usize;

    for (i, &count) in histogram.iter().enumerate() {
        weight_bg += count as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += i as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let between_variance = weight_bg * weight_fg * (mean_bg - mean_fg).powi(2);

        if between_variance > best_variance {
            best_variance = between_variance;
            best_bin = i;
        }
    }

    // Halfway to the next bin, so every value quantized into `best_bin`
    // satisfies `v <= threshold`.
    (best_bin as f32 + 0.5) / (bins - 1) as f32
}
