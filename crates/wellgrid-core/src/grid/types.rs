use serde::{Deserialize, Serialize};

use crate::error::{Result, WellgridError};

/// Expected grid dimensions. Both are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridSpec {
    cols: usize,
    rows: usize,
}

impl GridSpec {
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(WellgridError::InvalidGridSpec { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cells, `cols * rows`.
    pub fn expected(&self) -> usize {
        self.cols * self.rows
    }

    /// `(row, col)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }
}

impl std::fmt::Display for GridSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// A grid cell bound to one physical well (or a synthesized fallback position).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// A slot relative to the image: centers in [0, 1], size as a percentage of
/// the image width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSlot {
    pub row: usize,
    pub col: usize,
    pub cx: f64,
    pub cy: f64,
    #[serde(rename = "sizePct")]
    pub size_pct: f64,
}
