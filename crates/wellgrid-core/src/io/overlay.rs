use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut};

use crate::frame::PanelImage;
use crate::grid::Slot;

const RING_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const CENTER_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const CENTER_RADIUS: i32 = 3;

/// Render the panel in gray with each slot's ring and center marked.
pub fn draw_overlay(panel: &PanelImage, slots: &[Slot]) -> RgbImage {
    let (h, w) = panel.data.dim();
    let mut canvas = RgbImage::from_fn(w as u32, h as u32, |x, y| {
        let v = (panel.data[[y as usize, x as usize]].clamp(0.0, 1.0) * 255.0) as u8;
        Rgb([v, v, v])
    });

    for slot in slots {
        let center = (slot.x.round() as i32, slot.y.round() as i32);
        let radius = slot.radius.round() as i32;
        // Two-pixel ring.
        draw_hollow_circle_mut(&mut canvas, center, radius, RING_COLOR);
        if radius > 1 {
            draw_hollow_circle_mut(&mut canvas, center, radius - 1, RING_COLOR);
        }
        draw_filled_circle_mut(&mut canvas, center, CENTER_RADIUS, CENTER_COLOR);
    }

    canvas
}
