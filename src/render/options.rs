//! Rendering options and configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Output image format for rendered pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossless PNG
    #[default]
    Png,
    /// Lossy JPEG, honoring the configured quality
    Jpeg,
}

impl ImageFormat {
    /// File extension for this format, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
        }
    }

    /// MIME type of the encoded payload.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

/// Options for rendering pages to images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Scale multiplier over the 96 DPI baseline (1.0 = native size)
    pub scale: f32,

    /// Output image format
    pub format: ImageFormat,

    /// JPEG quality in `(0, 1]`; ignored for PNG
    pub quality: f32,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scale multiplier.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the output image format.
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the JPEG quality (fraction in `(0, 1]`).
    pub fn with_quality(mut self, quality: f32) -> Self {
        self.quality = quality;
        self
    }

    /// Validate the options for the selected format.
    ///
    /// JPEG requires a quality in `(0, 1]`. PNG is lossless and ignores the
    /// quality field entirely.
    pub fn validate(&self) -> Result<()> {
        if self.format == ImageFormat::Jpeg && !(self.quality > 0.0 && self.quality <= 1.0) {
            return Err(Error::InvalidQuality(self.quality));
        }
        Ok(())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            format: ImageFormat::Png,
            // Matches the common browser-canvas JPEG default
            quality: 0.92,
        }
    }
}
