//! Document backend abstraction layer.
//!
//! Provides a trait-based interface for document loading and page
//! rasterization, isolating the concrete PDF renderer from the export
//! pipeline. The pipeline only ever sees PNG-encoded rasters coming out of
//! the backend; format conversion happens downstream.

use crate::error::{Error, Result};

/// Abstract interface for a loaded document that can rasterize its pages.
///
/// Implementations own the parsed document and produce one PNG-encoded
/// raster per request — without exposing any concrete PDF library types.
/// A failed load must be reported by the implementation's constructor;
/// a constructed backend is assumed openable.
pub trait DocumentBackend {
    /// Total number of pages in the document.
    fn page_count(&self) -> u32;

    /// Rasterize the 1-based page `number` at `scale` times the 96 DPI
    /// baseline and return it as PNG-encoded bytes.
    fn render_page(&self, number: u32, scale: f32) -> Result<Vec<u8>>;
}

// ---------------------------------------------------------------------------
// HayroBackend — concrete implementation backed by hayro (pure Rust)
// ---------------------------------------------------------------------------

#[cfg(feature = "hayro")]
mod hayro_backend {
    use std::sync::Arc;

    use hayro::{render, Pdf, RenderSettings};
    use hayro_interpret::InterpreterSettings;

    use super::DocumentBackend;
    use crate::error::{Error, Result};

    /// Concrete [`DocumentBackend`] backed by the `hayro` renderer.
    pub struct HayroBackend {
        pdf: Pdf,
    }

    impl HayroBackend {
        /// Load from an in-memory byte slice.
        pub fn load_bytes(data: &[u8]) -> Result<Self> {
            let data = Arc::new(data.to_vec());
            let pdf = Pdf::new(data).map_err(|e| Error::Load(format!("{:?}", e)))?;
            Ok(Self { pdf })
        }

        /// Load from a file path.
        pub fn load_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
            let data = std::fs::read(path)?;
            Self::load_bytes(&data)
        }

        /// Load from a reader.
        pub fn load_reader<R: std::io::Read>(mut reader: R) -> Result<Self> {
            let mut data = Vec::new();
            reader.read_to_end(&mut data)?;
            Self::load_bytes(&data)
        }
    }

    impl DocumentBackend for HayroBackend {
        fn page_count(&self) -> u32 {
            self.pdf.pages().len() as u32
        }

        fn render_page(&self, number: u32, scale: f32) -> Result<Vec<u8>> {
            let pages = self.pdf.pages();
            let page = number
                .checked_sub(1)
                .and_then(|i| pages.get(i as usize))
                .ok_or_else(|| Error::PageOutOfRange(number, pages.len() as u32))?;

            let interpreter_settings = InterpreterSettings::default();
            let render_settings = RenderSettings {
                x_scale: scale,
                y_scale: scale,
                ..Default::default()
            };

            let pixmap = render(page, &interpreter_settings, &render_settings);
            Ok(pixmap.take_png())
        }
    }
}

#[cfg(feature = "hayro")]
pub use hayro_backend::HayroBackend;

/// Probe the pixel dimensions of an encoded raster without decoding it.
pub(crate) fn raster_dimensions(data: &[u8]) -> Result<(u32, u32)> {
    let size = imagesize::blob_size(data)
        .map_err(|e| Error::Encode(format!("cannot read raster dimensions: {}", e)))?;
    Ok((size.width as u32, size.height as u32))
}
