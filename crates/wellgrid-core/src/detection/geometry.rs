use std::f64::consts::PI;

use rand::prelude::*;

use crate::consts::EPSILON;

/// Seed for the point shuffle in [`min_enclosing_circle`].
const ENCLOSING_CIRCLE_SEED: u64 = 7;

/// Area of a closed polygon (shoelace formula). Orientation-independent.
pub fn polygon_area(points: &[[f64; 2]]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        twice_area += p[0] * q[1] - q[0] * p[1];
    }
    twice_area.abs() * 0.5
}

/// `4*pi*area/perimeter^2`: 1.0 for a circle, smaller for anything else.
pub fn circularity(area: f64, perimeter: f64) -> f64 {
    if perimeter <= EPSILON {
        return 0.0;
    }
    4.0 * PI * area / (perimeter * perimeter)
}

/// A circle as `(center, radius)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: [f64; 2],
    pub radius: f64,
}

impl Circle {
    fn contains(&self, p: [f64; 2]) -> bool {
        let d = ((p[0] - self.center[0]).powi(2) + (p[1] - self.center[1]).powi(2)).sqrt();
        d <= self.radius + 1e-7
    }

    fn from_two(a: [f64; 2], b: [f64; 2]) -> Self {
        let center = [(a[0] + b[0]) * 0.5, (a[1] + b[1]) * 0.5];
        let radius = ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt() * 0.5;
        Self { center, radius }
    }

    /// Circumcircle, or the widest two-point circle for collinear input.
    fn from_three(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Self {
        let d = 2.0 * (a[0] * (b[1] - c[1]) + b[0] * (c[1] - a[1]) + c[0] * (a[1] - b[1]));
        if d.abs() <= EPSILON {
            let candidates = [Self::from_two(a, b), Self::from_two(a, c), Self::from_two(b, c)];
            return candidates
                .into_iter()
                .max_by(|x, y| x.radius.total_cmp(&y.radius))
                .unwrap_or(Self::from_two(a, b));
        }
        let a2 = a[0] * a[0] + a[1] * a[1];
        let b2 = b[0] * b[0] + b[1] * b[1];
        let c2 = c[0] * c[0] + c[1] * c[1];
        let ux = (a2 * (b[1] - c[1]) + b2 * (c[1] - a[1]) + c2 * (a[1] - b[1])) / d;
        let uy = (a2 * (c[0] - b[0]) + b2 * (a[0] - c[0]) + c2 * (b[0] - a[0])) / d;
        let radius = ((a[0] - ux).powi(2) + (a[1] - uy).powi(2)).sqrt();
        Self {
            center: [ux, uy],
            radius,
        }
    }
}

/// Smallest circle containing every point (incremental Welzl).
///
/// Points are visited in a seeded shuffled order so the expected cost stays
/// linear on ordered contour input and the result is reproducible.
pub fn min_enclosing_circle(points: &[[f64; 2]]) -> Option<Circle> {
    let mut pts = points.to_vec();
    match pts.len() {
        0 => return None,
        1 => {
            return Some(Circle {
                center: pts[0],
                radius: 0.0,
            })
        }
        _ => {}
    }

    let mut rng = StdRng::seed_from_u64(ENCLOSING_CIRCLE_SEED);
    pts.shuffle(&mut rng);

    let mut circle = Circle::from_two(pts[0], pts[1]);
    for i in 2..pts.len() {
        if circle.contains(pts[i]) {
            continue;
        }
        circle = Circle::from_two(pts[0], pts[i]);
        for j in 1..i {
            if circle.contains(pts[j]) {
                continue;
            }
            circle = Circle::from_two(pts[i], pts[j]);
            for k in 0..j {
                if !circle.contains(pts[k]) {
                    circle = Circle::from_three(pts[i], pts[j], pts[k]);
                }
            }
        }
    }

    Some(circle)
}
