use image::{GrayImage, Luma};
use imageproc::contours::{find_contours, BorderType};
use imageproc::geometry::arc_length;
use ndarray::Array2;
use tracing::debug;

use crate::filters::gaussian_blur_array;
use crate::frame::PanelImage;

use super::candidate::Candidate;
use super::config::ContourConfig;
use super::geometry::{circularity, min_enclosing_circle, polygon_area};
use super::morphology::{closing, opening, StructuringElement};
use super::threshold::{binarize_inverted, compute_threshold};

/// Detect dark circular wells via thresholding and contour geometry.
///
/// Pipeline: fill transparent pixels -> Gaussian blur -> inverted threshold ->
/// opening -> closing -> external contours -> area / circularity / radius /
/// border filters.
pub fn contour_circles(panel: &PanelImage, config: &ContourConfig) -> Vec<Candidate> {
    let (h, w) = panel.data.dim();
    let mask = panel.mask.as_ref();

    let work = panel.filled(config.transparent_fill);
    let blurred = gaussian_blur_array(&work, config.blur_sigma);

    let threshold = compute_threshold(&blurred, &config.threshold, mask);
    let binary = binarize_inverted(&blurred, threshold, mask);

    let element = StructuringElement::ellipse(config.element_size);
    let opened = opening(&binary, &element, config.open_iterations);
    let clean = closing(&opened, &element, config.close_iterations);

    let image_area = (w * h) as f64;
    let min_area = image_area * config.min_area_fraction;
    let max_area = image_area * config.max_area_fraction;

    let contours = find_contours::<i32>(&to_gray_image(&clean));
    let mut circles = Vec::new();
    let mut outer = 0usize;

    for contour in contours
        .iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
    {
        outer += 1;
        let points: Vec<[f64; 2]> = contour
            .points
            .iter()
            .map(|p| [p.x as f64, p.y as f64])
            .collect();

        let area = polygon_area(&points);
        if area < min_area || area > max_area {
            continue;
        }

        let perimeter = arc_length(&contour.points, true);
        if perimeter <= 0.0 {
            continue;
        }

        let roundness = circularity(area, perimeter);
        if roundness <= config.min_circularity {
            continue;
        }

        let Some(circle) = min_enclosing_circle(&points) else {
            continue;
        };
        let [x, y] = circle.center;
        let r = circle.radius;
        if r < config.min_radius {
            continue;
        }

        // Circles that poke past the frame are edge artifacts.
        if x < r || y < r || x > w as f64 - r || y > h as f64 - r {
            continue;
        }

        circles.push(Candidate::new(x, y, r).with_confidence(roundness));
    }

    debug!(
        threshold,
        contours = outer,
        circles = circles.len(),
        "Contour extraction complete"
    );

    circles
}

fn to_gray_image(mask: &Array2<bool>) -> GrayImage {
    let (h, w) = mask.dim();
    GrayImage::from_fn(w as u32, h as u32, |x, y| {
        Luma([if mask[[y as usize, x as usize]] { 255 } else { 0 }])
    })
}
