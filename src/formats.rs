//! Format trait and implementations for different document types.
//!
//! A format tells the segmenter which symbol opens a heading (repeated once per
//! rank) and which extension the written files carry. Only ATX-style markdown is
//! provided, but anything with a repeated-symbol heading marker fits.

pub mod markdown;

/// Heading syntax and file naming for one document format.
pub trait Format {
    /// Symbol repeated `rank` times to open a heading, e.g. `#`.
    fn marker_symbol(&self) -> char;
    /// Extension (without the dot) given to each output file.
    fn file_extension(&self) -> &str;
}

/// Wraps a format to write files with a different extension.
///
/// A leading `.` is dropped, and a blank extension keeps the inner one.
pub struct WithExtension<'a, F> {
    inner: F,
    extension: Option<&'a str>,
}

impl<'a, F: Format> WithExtension<'a, F> {
    #[must_use]
    /// Use `inner`'s heading marker with `extension` for output files.
    pub fn new(inner: F, extension: &'a str) -> Self {
        let extension = extension.trim().trim_start_matches('.');
        Self {
            inner,
            extension: (!extension.is_empty()).then_some(extension),
        }
    }
}

impl<F: Format> Format for WithExtension<'_, F> {
    fn marker_symbol(&self) -> char {
        self.inner.marker_symbol()
    }

    fn file_extension(&self) -> &str {
        self.extension.unwrap_or_else(|| self.inner.file_extension())
    }
}
