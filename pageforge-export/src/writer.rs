//! Writing the generated file pair to disk.
//!
//! The stylesheet always sits next to the markup file with the extension
//! replaced by `css`, and the markup's `<link>` tag references it by its
//! final path segment. Timestamps are used only to propose default
//! filenames, never to alter generated content.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use pageforge_core::Document;

use crate::codegen::{CodegenConfig, PageGenerator};
use crate::error::{ExportError, ExportResult};

/// Default basename for an export taken at `now`, e.g.
/// `webpage_20260827_153000`.
#[must_use]
pub fn default_basename(now: DateTime<Local>) -> String {
    now.format("webpage_%Y%m%d_%H%M%S").to_string()
}

/// The on-disk locations of one exported page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    /// Path of the markup file.
    pub markup: PathBuf,
    /// Path of the companion stylesheet.
    pub stylesheet: PathBuf,
}

impl ExportPaths {
    /// Derive the file pair from a chosen markup path: the stylesheet is the
    /// same path with its extension replaced by `css`.
    #[must_use]
    pub fn from_markup_path(markup: &Path) -> Self {
        let mut stylesheet = markup.to_path_buf();
        stylesheet.set_extension("css");
        Self {
            markup: markup.to_path_buf(),
            stylesheet,
        }
    }

    /// The stylesheet's final path segment, as the markup's `<link>` tag
    /// references it.
    #[must_use]
    pub fn stylesheet_href(&self) -> String {
        self.stylesheet
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned())
    }
}

/// Generate a document's markup and stylesheet and write both files.
///
/// # Errors
///
/// Returns [`ExportError::EmptyDocument`] for a document with no elements
/// (nothing is written), or the underlying I/O error if either file cannot
/// be written.
pub fn write_page(
    document: &Document,
    markup_path: &Path,
    title: &str,
) -> ExportResult<ExportPaths> {
    if document.is_empty() {
        return Err(ExportError::EmptyDocument);
    }

    let paths = ExportPaths::from_markup_path(markup_path);
    let generator = PageGenerator::new(CodegenConfig {
        title: title.to_string(),
        stylesheet_href: paths.stylesheet_href(),
    });
    let page = generator.generate(document);

    fs::write(&paths.markup, page.markup)?;
    fs::write(&paths.stylesheet, page.stylesheet)?;
    tracing::info!(
        markup = %paths.markup.display(),
        stylesheet = %paths.stylesheet.display(),
        elements = document.element_count(),
        "page exported"
    );
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_basename_formats_the_timestamp() {
        let now = Local
            .with_ymd_and_hms(2026, 8, 27, 15, 30, 0)
            .single()
            .expect("valid timestamp");
        assert_eq!(default_basename(now), "webpage_20260827_153000");
    }

    #[test]
    fn stylesheet_path_swaps_the_extension() {
        let paths = ExportPaths::from_markup_path(Path::new("/tmp/out/site.html"));
        assert_eq!(paths.markup, Path::new("/tmp/out/site.html"));
        assert_eq!(paths.stylesheet, Path::new("/tmp/out/site.css"));
        assert_eq!(paths.stylesheet_href(), "site.css");
    }

    #[test]
    fn extensionless_markup_path_still_gets_a_css_sibling() {
        let paths = ExportPaths::from_markup_path(Path::new("export/webpage"));
        assert_eq!(paths.stylesheet, Path::new("export/webpage.css"));
        assert_eq!(paths.stylesheet_href(), "webpage.css");
    }
}
