//! # pdfsnap
//!
//! Batch PDF page-to-image export for Rust.
//!
//! This library selects pages of a PDF document with a range expression
//! (`"1-3, 5, 7-10"`), renders them to PNG or JPEG images one page at a
//! time, and packages the result as either a single image file or a zip
//! bundle.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfsnap::{export_file, RenderOptions};
//!
//! fn main() -> pdfsnap::Result<()> {
//!     // Render pages 1-3 of a PDF to PNG and bundle them
//!     let bundle = export_file("document.pdf", "1-3", &RenderOptions::default())?;
//!     bundle.write_to_dir(".")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Range expressions**: comma-separated pages and inclusive ranges,
//!   bounded by the document, invalid tokens dropped
//! - **PNG and JPEG output**: lossless PNG or quality-controlled JPEG
//! - **Sequential rendering**: one raster surface alive at a time to bound
//!   peak memory, with per-page progress callbacks
//! - **Partial success**: a page that fails to render is skipped, not fatal
//! - **Pluggable backends**: bring your own rasterizer via
//!   [`DocumentBackend`]; a pure-Rust `hayro` backend ships by default

pub mod error;
pub mod package;
pub mod pages;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use package::{package_pages, ExportBundle};
pub use pages::parse_range;
pub use render::{
    render_pages, DocumentBackend, ImageFormat, Progress, ProgressTracker, RenderOptions,
    RenderedPage,
};

#[cfg(feature = "hayro")]
pub use render::HayroBackend;

use serde::Serialize;

#[cfg(feature = "hayro")]
use std::path::Path;

/// Outcome of a finished export job: the downloadable bundle plus a summary
/// of what was actually produced.
#[derive(Debug)]
pub struct ExportResult {
    /// The packaged output.
    pub bundle: ExportBundle,
    /// What was requested versus what was produced.
    pub summary: ExportSummary,
}

/// Serializable record of one finished export job.
///
/// `rendered_count` may be smaller than `requested_pages.len()` when single
/// pages failed to rasterize; consumers should report the actual count, not
/// the requested one.
#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    /// Pages selected by the range expression, ascending.
    pub requested_pages: Vec<u32>,
    /// Pages that actually rendered.
    pub rendered_count: usize,
    /// Pages that were requested but skipped due to render failures.
    pub skipped_pages: Vec<u32>,
    /// Output image format.
    pub format: ImageFormat,
    /// Scale multiplier used.
    pub scale: f32,
    /// Filename of the produced bundle.
    pub output_filename: String,
    /// Size of the produced bundle in bytes.
    pub output_bytes: usize,
}

/// Run the full export pipeline against an already-loaded backend.
///
/// Pipeline: parse the range expression against the document's page count,
/// reject an empty selection, render the pages sequentially, then package
/// the survivors. `on_progress` fires after each attempted page.
pub fn export_with_backend<B, F>(
    backend: &B,
    base_name: &str,
    expression: &str,
    options: &RenderOptions,
    on_progress: F,
) -> Result<ExportResult>
where
    B: DocumentBackend + ?Sized,
    F: FnMut(Progress),
{
    let selected = parse_range(expression, backend.page_count());
    if selected.is_empty() {
        return Err(Error::EmptySelection(expression.to_string()));
    }

    let rendered = render_pages(backend, &selected, options, on_progress)?;
    let bundle = package_pages(base_name, &rendered)?;

    let skipped_pages = selected
        .iter()
        .copied()
        .filter(|n| !rendered.iter().any(|p| p.number == *n))
        .collect();

    let summary = ExportSummary {
        requested_pages: selected,
        rendered_count: rendered.len(),
        skipped_pages,
        format: options.format,
        scale: options.scale,
        output_filename: bundle.filename().to_string(),
        output_bytes: bundle.data().len(),
    };

    Ok(ExportResult { bundle, summary })
}

/// Export pages of a PDF file, returning the packaged bundle.
///
/// # Example
///
/// ```no_run
/// use pdfsnap::{export_file, ImageFormat, RenderOptions};
///
/// let options = RenderOptions::new()
///     .with_scale(2.0)
///     .with_format(ImageFormat::Jpeg)
///     .with_quality(0.85);
/// let bundle = export_file("document.pdf", "1,4-6", &options).unwrap();
/// println!("{} ({} images)", bundle.filename(), bundle.entry_count());
/// ```
#[cfg(feature = "hayro")]
pub fn export_file<P: AsRef<Path>>(
    path: P,
    expression: &str,
    options: &RenderOptions,
) -> Result<ExportBundle> {
    let path = path.as_ref();
    let base_name = file_base_name(path);
    let backend = HayroBackend::load_file(path)?;
    export_with_backend(&backend, &base_name, expression, options, |_| {})
        .map(|result| result.bundle)
}

/// Export pages of an in-memory PDF, returning the packaged bundle.
#[cfg(feature = "hayro")]
pub fn export_bytes(
    data: &[u8],
    base_name: &str,
    expression: &str,
    options: &RenderOptions,
) -> Result<ExportBundle> {
    let backend = HayroBackend::load_bytes(data)?;
    export_with_backend(&backend, base_name, expression, options, |_| {})
        .map(|result| result.bundle)
}

/// Base name for output files: the input's file stem, or `"document"`.
#[cfg(feature = "hayro")]
fn file_base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

/// Builder for configuring and running export jobs.
///
/// # Example
///
/// ```no_run
/// use pdfsnap::{Exporter, ImageFormat};
///
/// let result = Exporter::new()
///     .with_pages("1-3,7")
///     .with_format(ImageFormat::Jpeg)
///     .with_quality(0.9)
///     .with_scale(1.5)
///     .export_file("document.pdf")?;
/// println!("rendered {} pages", result.summary.rendered_count);
/// # Ok::<(), pdfsnap::Error>(())
/// ```
pub struct Exporter {
    options: RenderOptions,
    expression: String,
}

impl Exporter {
    /// Create a new exporter with default options, selecting page 1.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            expression: "1".to_string(),
        }
    }

    /// Set the page-range expression.
    pub fn with_pages(mut self, expression: impl Into<String>) -> Self {
        self.expression = expression.into();
        self
    }

    /// Set the scale multiplier.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.options = self.options.with_scale(scale);
        self
    }

    /// Set the output image format.
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.options = self.options.with_format(format);
        self
    }

    /// Set the JPEG quality.
    pub fn with_quality(mut self, quality: f32) -> Self {
        self.options = self.options.with_quality(quality);
        self
    }

    /// Run the job against an already-loaded backend.
    pub fn export_with_backend<B, F>(
        &self,
        backend: &B,
        base_name: &str,
        on_progress: F,
    ) -> Result<ExportResult>
    where
        B: DocumentBackend + ?Sized,
        F: FnMut(Progress),
    {
        export_with_backend(
            backend,
            base_name,
            &self.expression,
            &self.options,
            on_progress,
        )
    }

    /// Run the job against a PDF file.
    #[cfg(feature = "hayro")]
    pub fn export_file<P: AsRef<Path>>(&self, path: P) -> Result<ExportResult> {
        let path = path.as_ref();
        let base_name = file_base_name(path);
        let backend = HayroBackend::load_file(path)?;
        self.export_with_backend(&backend, &base_name, |_| {})
    }

    /// Run the job against an in-memory PDF.
    #[cfg(feature = "hayro")]
    pub fn export_bytes(&self, data: &[u8], base_name: &str) -> Result<ExportResult> {
        let backend = HayroBackend::load_bytes(data)?;
        self.export_with_backend(&backend, base_name, |_| {})
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}
