use image::{GrayImage, Luma};
use ndarray::Array2;

/// Sobel derivatives of an image.
#[derive(Clone, Debug)]
pub struct Gradients {
    pub gx: Array2<f32>,
    pub gy: Array2<f32>,
    pub magnitude: Array2<f32>,
}

impl Gradients {
    pub fn dim(&self) -> (usize, usize) {
        self.gx.dim()
    }
}

/// Compute Sobel gradients.
///
/// Sobel kernels:
///   Gx = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]
///   Gy = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]]
///
/// The 1-pixel border is zero (the kernel needs a 3x3 neighborhood).
pub fn sobel(data: &Array2<f32>) -> Gradients {
    let (h, w) = data.dim();
    let mut gx = Array2::<f32>::zeros((h, w));
    let mut gy = Array2::<f32>::zeros((h, w));
    let mut magnitude = Array2::<f32>::zeros((h, w));

    if h >= 3 && w >= 3 {
        for row in 1..h - 1 {
            for col in 1..w - 1 {
                let dx = -data[[row - 1, col - 1]] + data[[row - 1, col + 1]]
                    - 2.0 * data[[row, col - 1]]
                    + 2.0 * data[[row, col + 1]]
                    - data[[row + 1, col - 1]]
                    + data[[row + 1, col + 1]];

                let dy = -data[[row - 1, col - 1]]
                    - 2.0 * data[[row - 1, col]]
                    - data[[row - 1, col + 1]]
                    + data[[row + 1, col - 1]]
                    + 2.0 * data[[row + 1, col]]
                    + data[[row + 1, col + 1]];

                gx[[row, col]] = dx;
                gy[[row, col]] = dy;
                magnitude[[row, col]] = (dx * dx + dy * dy).sqrt();
            }
        }
    }

    Gradients { gx, gy, magnitude }
}

/// Quantize [0.0, 1.0] intensities to an 8-bit image for the edge detector.
pub fn to_luma8(data: &Array2<f32>) -> GrayImage {
    let (h, w) = data.dim();
    GrayImage::from_fn(w as u32, h as u32, |x, y| {
        Luma([(data[[y as usize, x as usize]].clamp(0.0, 1.0) * 255.0).round() as u8])
    })
}
