use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbImage};
use ndarray::Array2;

use crate::consts::ALPHA_TRANSPARENT_MAX;
use crate::error::{Result, WellgridError};
use crate::frame::PanelImage;

/// Decode an encoded image into a grayscale panel.
///
/// Images with an alpha channel get an opacity mask: pixels with alpha at or
/// below `ALPHA_TRANSPARENT_MAX` are marked out of bounds.
pub fn decode(bytes: &[u8]) -> Result<PanelImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| WellgridError::DecodeFailure(e.to_string()))?;
    from_dynamic(&img)
}

/// Load a panel from an image file on disk.
pub fn load_panel(path: &Path) -> Result<PanelImage> {
    let bytes = std::fs::read(path)?;
    decode(&bytes)
}

fn from_dynamic(img: &DynamicImage) -> Result<PanelImage> {
    let (w, h) = (img.width() as usize, img.height() as usize);
    if w == 0 || h == 0 {
        return Err(WellgridError::InvalidDimensions { width: w, height: h });
    }

    if !img.color().has_alpha() {
        let gray = img.to_luma8();
        let data = Array2::from_shape_fn((h, w), |(row, col)| {
            gray.get_pixel(col as u32, row as u32).0[0] as f32 / 255.0
        });
        return PanelImage::new(data);
    }

    let gray_alpha = img.to_luma_alpha8();
    let mut data = Array2::<f32>::zeros((h, w));
    let mut mask = Array2::<bool>::from_elem((h, w), true);
    for (col, row, pixel) in gray_alpha.enumerate_pixels() {
        let [luma, alpha] = pixel.0;
        data[[row as usize, col as usize]] = luma as f32 / 255.0;
        mask[[row as usize, col as usize]] = alpha > ALPHA_TRANSPARENT_MAX;
    }
    PanelImage::with_mask(data, mask)
}

/// Save an RGB image as PNG, creating parent directories as needed.
pub fn persist(img: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
