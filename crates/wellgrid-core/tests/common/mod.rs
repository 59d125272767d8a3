#![allow(dead_code)]

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma, LumaA, RgbaImage};
use ndarray::Array2;

use wellgrid_core::detection::Candidate;
use wellgrid_core::frame::PanelImage;

pub const PANEL_LEVEL: f32 = 0.85;
pub const WELL_LEVEL: f32 = 0.1;

/// Panel size used by the synthetic keypad helpers.
pub const PANEL_W: usize = 640;
pub const PANEL_H: usize = 400;

/// Well centers of a 3x2 keypad on a `PANEL_W x PANEL_H` panel, row-major.
pub const KEYPAD_3X2: [(f64, f64); 6] = [
    (120.0, 130.0),
    (320.0, 130.0),
    (520.0, 130.0),
    (120.0, 270.0),
    (320.0, 270.0),
    (520.0, 270.0),
];

pub const WELL_RADIUS: f64 = 30.0;

/// Bright panel with dark disks of `radius` at `centers` (x, y).
pub fn render_wells(w: usize, h: usize, centers: &[(f64, f64)], radius: f64) -> Array2<f32> {
    Array2::from_shape_fn((h, w), |(row, col)| {
        let inside = centers.iter().any(|&(cx, cy)| {
            let dx = col as f64 - cx;
            let dy = row as f64 - cy;
            dx * dx + dy * dy <= radius * radius
        });
        if inside {
            WELL_LEVEL
        } else {
            PANEL_LEVEL
        }
    })
}

pub fn keypad_panel() -> PanelImage {
    PanelImage::new(render_wells(PANEL_W, PANEL_H, &KEYPAD_3X2, WELL_RADIUS)).unwrap()
}

pub fn blank_panel(w: usize, h: usize) -> PanelImage {
    PanelImage::new(Array2::from_elem((h, w), PANEL_LEVEL)).unwrap()
}

/// Candidates placed exactly on a `cols x rows` lattice, row-major.
pub fn lattice(cols: usize, rows: usize, origin: (f64, f64), pitch: (f64, f64), radius: f64) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            out.push(Candidate::new(
                origin.0 + col as f64 * pitch.0,
                origin.1 + row as f64 * pitch.1,
                radius,
            ));
        }
    }
    out
}

/// Encode a panel as an 8-bit grayscale PNG.
pub fn encode_png(data: &Array2<f32>) -> Vec<u8> {
    let (h, w) = data.dim();
    let img = GrayImage::from_fn(w as u32, h as u32, |x, y| {
        Luma([(data[[y as usize, x as usize]].clamp(0.0, 1.0) * 255.0) as u8])
    });
    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

/// Encode as gray+alpha PNG; pixels where `opaque` is false get alpha 0.
pub fn encode_png_with_alpha(data: &Array2<f32>, opaque: &Array2<bool>) -> Vec<u8> {
    let (h, w) = data.dim();
    let img = image::ImageBuffer::from_fn(w as u32, h as u32, |x, y| {
        let (r, c) = (y as usize, x as usize);
        let v = (data[[r, c]].clamp(0.0, 1.0) * 255.0) as u8;
        LumaA([v, if opaque[[r, c]] { 255 } else { 0 }])
    });
    let mut buf = Vec::new();
    DynamicImage::ImageLumaA8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

pub fn encode_rgba_png(img: RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

/// Assert that some candidate lies within `tol` pixels of `(x, y)`.
pub fn assert_near_any(candidates: &[Candidate], x: f64, y: f64, tol: f64) {
    assert!(
        candidates.iter().any(|c| c.distance_sq(x, y) <= tol * tol),
        "no candidate within {tol}px of ({x}, {y}); got {candidates:?}"
    );
}
