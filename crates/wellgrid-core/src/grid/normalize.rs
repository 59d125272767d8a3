use crate::frame::ImageSize;

use super::types::{NormalizedSlot, Slot};

/// Express a slot relative to the image: centers as fractions of width and
/// height, size as the diameter in percent of the width.
pub fn normalize(slot: &Slot, width: u32, height: u32) -> NormalizedSlot {
    let w = width as f64;
    let h = height as f64;
    NormalizedSlot {
        row: slot.row,
        col: slot.col,
        cx: slot.x / w,
        cy: slot.y / h,
        size_pct: slot.radius * 2.0 / w * 100.0,
    }
}

pub fn normalize_all(slots: &[Slot], size: ImageSize) -> Vec<NormalizedSlot> {
    slots
        .iter()
        .map(|s| normalize(s, size.width, size.height))
        .collect()
}

/// Median `sizePct` across slots; the mean of the middle two for even counts.
pub fn median_size_pct(slots: &[Slot], width: u32) -> Option<f64> {
    if slots.is_empty() {
        return None;
    }
    let mut sizes: Vec<f64> = slots
        .iter()
        .map(|s| s.radius * 2.0 / width as f64 * 100.0)
        .collect();
    sizes.sort_by(|a, b| a.total_cmp(b));

    let mid = sizes.len() / 2;
    if sizes.len() % 2 == 0 {
        Some((sizes[mid - 1] + sizes[mid]) * 0.5)
    } else {
        Some(sizes[mid])
    }
}
