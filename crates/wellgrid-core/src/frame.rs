use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WellgridError};

/// A decoded grayscale panel photograph.
/// Pixel values are f32 in [0.0, 1.0].
#[derive(Clone, Debug)]
pub struct PanelImage {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
    /// Opacity mask with the same shape as `data`; `true` marks an in-bounds pixel.
    /// `None` means the whole image is opaque.
    pub mask: Option<Array2<bool>>,
}

impl PanelImage {
    pub fn new(data: Array2<f32>) -> Result<Self> {
        let (h, w) = data.dim();
        if h == 0 || w == 0 {
            return Err(WellgridError::InvalidDimensions {
                width: w,
                height: h,
            });
        }
        Ok(Self { data, mask: None })
    }

    /// Attach an opacity mask. The mask must match the pixel grid exactly.
    pub fn with_mask(data: Array2<f32>, mask: Array2<bool>) -> Result<Self> {
        let mut panel = Self::new(data)?;
        if mask.dim() != panel.data.dim() {
            let (h, w) = mask.dim();
            return Err(WellgridError::InvalidDimensions {
                width: w,
                height: h,
            });
        }
        panel.mask = Some(mask);
        Ok(panel)
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width() as u32,
            height: self.height() as u32,
        }
    }

    /// Pixel data with every transparent pixel replaced by `fill`.
    pub fn filled(&self, fill: f32) -> Array2<f32> {
        let mut out = self.data.clone();
        if let Some(mask) = &self.mask {
            Zip::from(&mut out).and(mask).for_each(|v, &opaque| {
                if !opaque {
                    *v = fill;
                }
            });
        }
        out
    }

    /// Number of opaque pixels.
    pub fn opaque_count(&self) -> usize {
        match &self.mask {
            Some(mask) => mask.iter().filter(|&&m| m).count(),
            None => self.data.len(),
        }
    }
}

/// Image dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn shorter_side(&self) -> u32 {
        self.width.min(self.height)
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
