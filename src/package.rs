//! Export packaging: a direct file for one page, a zip bundle for many.

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};
use crate::render::RenderedPage;

/// The downloadable outcome of an export job.
#[derive(Debug, Clone)]
pub enum ExportBundle {
    /// A single page exposed directly as one image file.
    Single {
        /// `<base>_pagina_<number>.<ext>`
        filename: String,
        /// Encoded image payload.
        data: Vec<u8>,
    },
    /// Two or more pages bundled into one zip archive.
    Archive {
        /// `<base>_<count>_imagens.zip`
        filename: String,
        /// Zip payload.
        data: Vec<u8>,
        /// Number of image entries inside the archive.
        entry_count: usize,
    },
}

impl ExportBundle {
    /// Suggested filename of the bundle.
    pub fn filename(&self) -> &str {
        match self {
            ExportBundle::Single { filename, .. } => filename,
            ExportBundle::Archive { filename, .. } => filename,
        }
    }

    /// Payload bytes of the bundle.
    pub fn data(&self) -> &[u8] {
        match self {
            ExportBundle::Single { data, .. } => data,
            ExportBundle::Archive { data, .. } => data,
        }
    }

    /// Number of images carried by the bundle.
    pub fn entry_count(&self) -> usize {
        match self {
            ExportBundle::Single { .. } => 1,
            ExportBundle::Archive { entry_count, .. } => *entry_count,
        }
    }

    /// Write the bundle to `dir`, returning the full path written.
    pub fn write_to_dir<P: AsRef<std::path::Path>>(&self, dir: P) -> Result<std::path::PathBuf> {
        let path = dir.as_ref().join(self.filename());
        std::fs::write(&path, self.data())?;
        Ok(path)
    }
}

/// Package rendered pages for download.
///
/// Exactly one page becomes a [`ExportBundle::Single`]; two or more become a
/// zip [`ExportBundle::Archive`] with one deterministically named entry per
/// page. Zero pages is an error — nothing survived rendering and the caller
/// must surface that instead of producing an empty archive.
pub fn package_pages(base_name: &str, pages: &[RenderedPage]) -> Result<ExportBundle> {
    match pages {
        [] => Err(Error::EmptyExport),
        [page] => Ok(ExportBundle::Single {
            filename: page.suggested_filename(base_name),
            data: page.data.clone(),
        }),
        _ => {
            let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
            let deflated = FileOptions::default().compression_method(CompressionMethod::Deflated);

            for page in pages {
                zip.start_file(page.suggested_filename(base_name), deflated)?;
                zip.write_all(&page.data)?;
            }

            let data = zip.finish()?.into_inner();
            Ok(ExportBundle::Archive {
                filename: format!("{}_{}_imagens.zip", base_name, pages.len()),
                data,
                entry_count: pages.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ImageFormat;

    fn page(number: u32) -> RenderedPage {
        RenderedPage {
            number,
            width: 2,
            height: 2,
            format: ImageFormat::Png,
            data: vec![number as u8; 16],
        }
    }

    #[test]
    fn test_empty_export_is_an_error() {
        assert!(matches!(package_pages("doc", &[]), Err(Error::EmptyExport)));
    }

    #[test]
    fn test_single_page_direct_file() {
        let bundle = package_pages("doc", &[page(4)]).unwrap();
        match &bundle {
            ExportBundle::Single { filename, data } => {
                assert_eq!(filename, "doc_pagina_4.png");
                assert_eq!(data, &vec![4u8; 16]);
            }
            other => panic!("expected Single, got {:?}", other),
        }
        assert_eq!(bundle.entry_count(), 1);
    }

    #[test]
    fn test_multi_page_archive_round_trip() {
        let pages = vec![page(1), page(3), page(9)];
        let bundle = package_pages("doc", &pages).unwrap();

        assert_eq!(bundle.filename(), "doc_3_imagens.zip");
        assert_eq!(bundle.entry_count(), 3);

        let mut archive = zip::ZipArchive::new(Cursor::new(bundle.data().to_vec())).unwrap();
        assert_eq!(archive.len(), 3);

        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert!(names.contains(&"doc_pagina_1.png".to_string()));
        assert!(names.contains(&"doc_pagina_3.png".to_string()));
        assert!(names.contains(&"doc_pagina_9.png".to_string()));
    }

    #[test]
    fn test_write_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = package_pages("doc", &[page(2)]).unwrap();
        let path = bundle.write_to_dir(dir.path()).unwrap();

        assert!(path.ends_with("doc_pagina_2.png"));
        assert_eq!(std::fs::read(&path).unwrap(), vec![2u8; 16]);
    }
}
