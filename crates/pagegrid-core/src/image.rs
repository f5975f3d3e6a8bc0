//! Inline image descriptor

use std::path::PathBuf;

/// DPI substituted when the source reports an axis as zero
pub const DEFAULT_DPI: f64 = 150.0;

/// An image already downloaded by the acquisition layer, with its pixel
/// dimensions and reported DPI
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDescriptor {
    /// Local path to the downloaded image
    pub path: PathBuf,
    /// Width in pixels
    pub width_px: f64,
    /// Height in pixels
    pub height_px: f64,
    /// Horizontal DPI; 0 means unreported
    pub dpi_x: f64,
    /// Vertical DPI; 0 means unreported
    pub dpi_y: f64,
}

impl ImageDescriptor {
    /// Create a descriptor
    pub fn new<P: Into<PathBuf>>(path: P, width_px: f64, height_px: f64) -> Self {
        Self {
            path: path.into(),
            width_px,
            height_px,
            dpi_x: DEFAULT_DPI,
            dpi_y: DEFAULT_DPI,
        }
    }

    /// Set the reported DPI per axis
    pub fn with_dpi(mut self, dpi_x: f64, dpi_y: f64) -> Self {
        self.dpi_x = dpi_x;
        self.dpi_y = dpi_y;
        self
    }

    /// Physical size in inches, substituting [`DEFAULT_DPI`] for a zero axis
    pub fn physical_size(&self) -> (f64, f64) {
        let dpi_x = if self.dpi_x == 0.0 { DEFAULT_DPI } else { self.dpi_x };
        let dpi_y = if self.dpi_y == 0.0 { DEFAULT_DPI } else { self.dpi_y };
        (self.width_px / dpi_x, self.height_px / dpi_y)
    }
}
