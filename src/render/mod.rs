//! Rendering module: turns selected document pages into encoded images.
//!
//! The loop is deliberately sequential — one raster surface alive at a time
//! bounds peak memory, and per-page progress callbacks keep callers informed.

pub mod backend;
mod options;
mod progress;

pub use backend::DocumentBackend;
#[cfg(feature = "hayro")]
pub use backend::HayroBackend;
pub use options::{ImageFormat, RenderOptions};
pub use progress::{Progress, ProgressTracker};

use crate::error::Result;

/// One rasterized document page, encoded in the requested format.
///
/// Immutable once produced; held in memory only for the lifetime of the
/// export job.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// 1-based page number in the source document.
    pub number: u32,
    /// Pixel width of the raster.
    pub width: u32,
    /// Pixel height of the raster.
    pub height: u32,
    /// Encoding of `data`.
    pub format: ImageFormat,
    /// Encoded image payload.
    pub data: Vec<u8>,
}

impl RenderedPage {
    /// Deterministic filename for this page: `<base>_pagina_<number>.<ext>`.
    pub fn suggested_filename(&self, base_name: &str) -> String {
        format!(
            "{}_pagina_{}.{}",
            base_name,
            self.number,
            self.format.extension()
        )
    }
}

/// Render the given 1-based pages sequentially, invoking `on_progress` after
/// each attempted page.
///
/// A page that fails to rasterize or encode is skipped with a warning and the
/// job continues; the result may therefore hold fewer pages than requested.
/// The progress fraction counts attempted pages (skips included), so it
/// reaches exactly 1.0 after the final page regardless of failures.
pub fn render_pages<B, F>(
    backend: &B,
    page_numbers: &[u32],
    options: &RenderOptions,
    mut on_progress: F,
) -> Result<Vec<RenderedPage>>
where
    B: DocumentBackend + ?Sized,
    F: FnMut(Progress),
{
    options.validate()?;

    let total = page_numbers.len() as u32;
    let mut rendered = Vec::with_capacity(page_numbers.len());

    for (index, &number) in page_numbers.iter().enumerate() {
        match render_one(backend, number, options) {
            Ok(page) => {
                log::debug!(
                    "Rendered page {} ({}x{}, {} bytes)",
                    number,
                    page.width,
                    page.height,
                    page.data.len()
                );
                rendered.push(page);
            }
            Err(e) => {
                log::warn!("Failed to render page {}: {}", number, e);
            }
        }

        on_progress(Progress {
            current: index as u32 + 1,
            total,
            page: number,
        });
    }

    Ok(rendered)
}

/// Rasterize and encode a single page.
fn render_one<B>(backend: &B, number: u32, options: &RenderOptions) -> Result<RenderedPage>
where
    B: DocumentBackend + ?Sized,
{
    let png = backend.render_page(number, options.scale)?;
    encode_raster(number, png, options)
}

/// Convert a PNG raster from the backend into the requested output format.
fn encode_raster(number: u32, png: Vec<u8>, options: &RenderOptions) -> Result<RenderedPage> {
    match options.format {
        ImageFormat::Png => {
            // Backends already hand us PNG; keep the payload as-is.
            let (width, height) = backend::raster_dimensions(&png)?;
            Ok(RenderedPage {
                number,
                width,
                height,
                format: ImageFormat::Png,
                data: png,
            })
        }
        ImageFormat::Jpeg => {
            let img = image::load_from_memory_with_format(&png, image::ImageFormat::Png)?;
            // JPEG has no alpha channel; flatten to RGB first.
            let rgb = img.to_rgb8();
            let (width, height) = rgb.dimensions();

            let quality = (options.quality * 100.0).round().clamp(1.0, 100.0) as u8;
            let mut data = Vec::new();
            let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut data, quality);
            encoder.encode_image(&rgb)?;

            Ok(RenderedPage {
                number,
                width,
                height,
                format: ImageFormat::Jpeg,
                data,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Cursor;

    /// Backend producing solid-color pages, with an optional page that
    /// always fails.
    struct SolidBackend {
        pages: u32,
        failing_page: Option<u32>,
    }

    impl SolidBackend {
        fn new(pages: u32) -> Self {
            Self {
                pages,
                failing_page: None,
            }
        }

        fn with_failing_page(mut self, page: u32) -> Self {
            self.failing_page = Some(page);
            self
        }
    }

    impl DocumentBackend for SolidBackend {
        fn page_count(&self) -> u32 {
            self.pages
        }

        fn render_page(&self, number: u32, scale: f32) -> crate::error::Result<Vec<u8>> {
            if number == 0 || number > self.pages {
                return Err(Error::PageOutOfRange(number, self.pages));
            }
            if self.failing_page == Some(number) {
                return Err(Error::Render {
                    page: number,
                    reason: "synthetic failure".to_string(),
                });
            }
            let side = (8.0 * scale) as u32;
            let img = image::RgbaImage::from_pixel(side, side, image::Rgba([10, 20, 30, 255]));
            let mut buf = Vec::new();
            img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
                .unwrap();
            Ok(buf)
        }
    }

    #[test]
    fn test_render_pages_png() {
        let backend = SolidBackend::new(3);
        let options = RenderOptions::default();
        let pages = render_pages(&backend, &[1, 2, 3], &options, |_| {}).unwrap();

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[0].format, ImageFormat::Png);
        assert_eq!((pages[0].width, pages[0].height), (8, 8));
        // PNG signature
        assert_eq!(&pages[0].data[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_render_pages_jpeg() {
        let backend = SolidBackend::new(1);
        let options = RenderOptions::new()
            .with_format(ImageFormat::Jpeg)
            .with_quality(0.8);
        let pages = render_pages(&backend, &[1], &options, |_| {}).unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].format, ImageFormat::Jpeg);
        // JPEG SOI marker
        assert_eq!(&pages[0].data[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_scale_changes_dimensions() {
        let backend = SolidBackend::new(1);
        let options = RenderOptions::new().with_scale(2.0);
        let pages = render_pages(&backend, &[1], &options, |_| {}).unwrap();
        assert_eq!((pages[0].width, pages[0].height), (16, 16));
    }

    #[test]
    fn test_failing_page_is_skipped() {
        let backend = SolidBackend::new(4).with_failing_page(3);
        let options = RenderOptions::default();
        let pages = render_pages(&backend, &[1, 2, 3, 4], &options, |_| {}).unwrap();

        assert_eq!(pages.len(), 3);
        assert!(pages.iter().all(|p| p.number != 3));
    }

    #[test]
    fn test_progress_reaches_one_despite_failures() {
        let backend = SolidBackend::new(3).with_failing_page(2);
        let options = RenderOptions::default();
        let mut fractions = Vec::new();
        render_pages(&backend, &[1, 2, 3], &options, |p| {
            fractions.push(p.fraction());
        })
        .unwrap();

        assert_eq!(fractions.len(), 3);
        assert!(fractions.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*fractions.last().unwrap(), 1.0);
    }

    #[test]
    fn test_invalid_quality_rejected_up_front() {
        let backend = SolidBackend::new(2);
        let options = RenderOptions::new()
            .with_format(ImageFormat::Jpeg)
            .with_quality(0.0);
        let mut called = false;
        let result = render_pages(&backend, &[1, 2], &options, |_| called = true);

        assert!(matches!(result, Err(Error::InvalidQuality(_))));
        assert!(!called);
    }

    #[test]
    fn test_suggested_filename() {
        let page = RenderedPage {
            number: 7,
            width: 1,
            height: 1,
            format: ImageFormat::Jpeg,
            data: vec![],
        };
        assert_eq!(page.suggested_filename("report"), "report_pagina_7.jpg");
    }
}
