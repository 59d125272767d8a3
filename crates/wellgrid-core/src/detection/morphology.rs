use ndarray::{Array2, Zip};

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// A binary structuring element stored as (row, col) offsets from its center.
#[derive(Clone, Debug)]
pub struct StructuringElement {
    offsets: Vec<(isize, isize)>,
}

impl StructuringElement {
    /// Filled ellipse inscribed in a `size` x `size` box. Sizes below 1 are
    /// treated as 1 (identity element).
    pub fn ellipse(size: usize) -> Self {
        let size = size.max(1);
        let radius = (size / 2) as isize;
        // Half-pixel padding so the axis rows span the full box, as a
        // rasterized ellipse would.
        let r = radius as f64 + 0.5;
        let mut offsets = Vec::new();
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                let nr = dr as f64 / r;
                let nc = dc as f64 / r;
                if nr * nr + nc * nc <= 1.0 {
                    offsets.push((dr, dc));
                }
            }
        }
        Self { offsets }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Morphological opening (erosion followed by dilation), repeated
/// `iterations` times each.
///
/// Removes foreground blobs smaller than the element while preserving larger
/// regions.
pub fn opening(mask: &Array2<bool>, element: &StructuringElement, iterations: usize) -> Array2<bool> {
    let mut out = mask.clone();
    for _ in 0..iterations {
        out = erode(&out, element);
    }
    for _ in 0..iterations {
        out = dilate(&out, element);
    }
    out
}

/// Morphological closing (dilation followed by erosion), repeated
/// `iterations` times each.
///
/// Fills gaps and pinholes narrower than the element.
pub fn closing(mask: &Array2<bool>, element: &StructuringElement, iterations: usize) -> Array2<bool> {
    let mut out = mask.clone();
    for _ in 0..iterations {
        out = dilate(&out, element);
    }
    for _ in 0..iterations {
        out = erode(&out, element);
    }
    out
}

/// Binary erosion: a pixel stays true only if every in-bounds pixel under the
/// element is true. Out-of-bounds neighbours are ignored.
pub fn erode(mask: &Array2<bool>, element: &StructuringElement) -> Array2<bool> {
    apply(mask, |row, col| {
        mask[[row, col]]
            && element
                .offsets
                .iter()
                .all(|&(dr, dc)| neighbour(mask, row, col, dr, dc).unwrap_or(true))
    })
}

/// Binary dilation: a pixel becomes true if any in-bounds pixel under the
/// element is true.
pub fn dilate(mask: &Array2<bool>, element: &StructuringElement) -> Array2<bool> {
    apply(mask, |row, col| {
        element
            .offsets
            .iter()
            .any(|&(dr, dc)| neighbour(mask, row, col, dr, dc).unwrap_or(false))
    })
}

#[inline]
fn neighbour(mask: &Array2<bool>, row: usize, col: usize, dr: isize, dc: isize) -> Option<bool> {
    let (h, w) = mask.dim();
    let nr = row as isize + dr;
    let nc = col as isize + dc;
    if nr < 0 || nr >= h as isize || nc < 0 || nc >= w as isize {
        return None;
    }
    Some(mask[[nr as usize, nc as usize]])
}

fn apply<F>(mask: &Array2<bool>, op: F) -> Array2<bool>
where
    F: Fn(usize, usize) -> bool + Sync,
{
    let (h, w) = mask.dim();
    let mut result = Array2::from_elem((h, w), false);
    let zip = Zip::indexed(&mut result);
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        zip.par_for_each(|(row, col), out| *out = op(row, col));
    } else {
        zip.for_each(|(row, col), out| *out = op(row, col));
    }
    result
}
