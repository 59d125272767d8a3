//! Gradient-direction circle voting.
//!
//! Every edge pixel casts votes along its gradient direction (both signs) at
//! distances in [min_radius, max_radius]. Circle boundaries produce peaks in
//! the accumulator at their centers because the gradients of a circular edge
//! all point through the center. Each surviving center then gets a radius
//! from the histogram of distances to nearby edge pixels.

use std::f64::consts::PI;

use image::GrayImage;
use imageproc::edges::canny;
use ndarray::Array2;
use tracing::debug;

use super::candidate::Candidate;
use super::config::HoughPass;
use super::gradient::Gradients;

/// Run one parameter pass of the circle detector.
///
/// Edges come from Canny on the unblurred 8-bit `image` (Canny smooths it
/// internally); voting directions come from `grads`, which must share its
/// shape.
pub fn hough_circles(image: &GrayImage, grads: &Gradients, pass: &HoughPass) -> Vec<Candidate> {
    let (h, w) = grads.dim();
    if h < 3 || w < 3 || pass.dp <= 0.0 || pass.max_radius <= pass.min_radius {
        return Vec::new();
    }

    let edges = canny(image, pass.edge_threshold * 0.5, pass.edge_threshold);
    let edge_points: Vec<(f64, f64)> = edges
        .enumerate_pixels()
        .filter(|(_, _, p)| p[0] > 0)
        .map(|(x, y, _)| (x as f64, y as f64))
        .collect();
    if edge_points.is_empty() {
        return Vec::new();
    }

    let accum = vote(grads, &edge_points, pass);
    let peaks = find_peaks(&accum, pass.accumulator_threshold);

    let min_dist_sq = pass.min_dist * pass.min_dist;
    let mut circles: Vec<Candidate> = Vec::new();

    for (_, arow, acol) in peaks {
        let cx = (acol as f64 + 0.5) * pass.dp;
        let cy = (arow as f64 + 0.5) * pass.dp;

        if circles.iter().any(|c| c.distance_sq(cx, cy) < min_dist_sq) {
            continue;
        }

        if let Some((radius, support)) = estimate_radius(&edge_points, cx, cy, pass) {
            circles.push(Candidate::new(cx, cy, radius).with_confidence(support));
        }
    }

    debug!(
        dp = pass.dp,
        edge_pixels = edge_points.len(),
        circles = circles.len(),
        "Gradient pass complete"
    );

    circles
}

fn vote(grads: &Gradients, edge_points: &[(f64, f64)], pass: &HoughPass) -> Array2<f32> {
    let (h, w) = grads.dim();
    let ah = (h as f64 / pass.dp).ceil() as usize;
    let aw = (w as f64 / pass.dp).ceil() as usize;
    let mut accum = Array2::<f32>::zeros((ah, aw));

    for &(x, y) in edge_points {
        let (row, col) = (y as usize, x as usize);
        let mag = grads.magnitude[[row, col]] as f64;
        if mag <= 0.0 {
            continue;
        }
        let dx = grads.gx[[row, col]] as f64 / mag;
        let dy = grads.gy[[row, col]] as f64 / mag;

        for sign in [-1.0f64, 1.0] {
            let mut r = pass.min_radius;
            while r <= pass.max_radius {
                let vx = (x + sign * dx * r) / pass.dp;
                let vy = (y + sign * dy * r) / pass.dp;
                if vx >= 0.0 && vy >= 0.0 && (vx as usize) < aw && (vy as usize) < ah {
                    accum[[vy as usize, vx as usize]] += 1.0;
                }
                r += pass.dp;
            }
        }
    }

    accum
}

/// Accumulator cells above `threshold` that beat their 4-neighbourhood,
/// strongest first. Ties are broken by raster order.
fn find_peaks(accum: &Array2<f32>, threshold: f32) -> Vec<(f32, usize, usize)> {
    let (ah, aw) = accum.dim();
    let mut peaks = Vec::new();
    if ah < 3 || aw < 3 {
        return peaks;
    }

    for row in 1..ah - 1 {
        for col in 1..aw - 1 {
            let v = accum[[row, col]];
            if v > threshold
                && v > accum[[row, col - 1]]
                && v >= accum[[row, col + 1]]
                && v > accum[[row - 1, col]]
                && v >= accum[[row + 1, col]]
            {
                peaks.push((v, row, col));
            }
        }
    }

    peaks.sort_by(|a, b| {
        b.0.total_cmp(&a.0)
            .then(a.1.cmp(&b.1))
            .then(a.2.cmp(&b.2))
    });
    peaks
}

/// Pick the radius with the densest edge support around `(cx, cy)`.
///
/// Distances are binned at 1 px and summed over a 3-bin window to absorb ring
/// thickness. Density is support per unit circumference; ties go to the
/// larger radius. Returns `None` when no radius collects at least
/// `accumulator_threshold` edge pixels.
fn estimate_radius(
    edge_points: &[(f64, f64)],
    cx: f64,
    cy: f64,
    pass: &HoughPass,
) -> Option<(f64, f64)> {
    let min_sq = pass.min_radius * pass.min_radius;
    let max_sq = pass.max_radius * pass.max_radius;
    let bins = (pass.max_radius - pass.min_radius).ceil() as usize + 1;
    let mut histogram = vec![0u32; bins];

    for &(x, y) in edge_points {
        let d_sq = (x - cx).powi(2) + (y - cy).powi(2);
        if d_sq < min_sq || d_sq > max_sq {
            continue;
        }
        let bin = (d_sq.sqrt() - pass.min_radius).round() as usize;
        histogram[bin.min(bins - 1)] += 1;
    }

    let mut best: Option<(f64, f64)> = None;
    for i in 0..bins {
        let lo = i.saturating_sub(1);
        let hi = (i + 1).min(bins - 1);
        let count: u32 = histogram[lo..=hi].iter().sum();
        if (count as f32) < pass.accumulator_threshold {
            continue;
        }
        let radius = pass.min_radius + i as f64;
        let density = count as f64 / (2.0 * PI * radius.max(1.0));
        match best {
            Some((_, d)) if density < d => {}
            _ => best = Some((radius, density)),
        }
    }

    best.map(|(radius, density)| (radius, density.min(1.0)))
}
