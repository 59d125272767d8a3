use serde::{Deserialize, Serialize};

/// A detected circular feature in pixel space, before grid assignment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Center column (pixels).
    pub x: f64,
    /// Center row (pixels).
    pub y: f64,
    pub radius: f64,
    /// Shape regularity or detector support in [0, 1]; 0 when the strategy
    /// has no meaningful score.
    pub confidence: f64,
}

impl Candidate {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            x,
            y,
            radius,
            confidence: 0.0,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn distance_sq(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }
}
