//! Markdown format implementation for ATX-style headings (# syntax).

use crate::formats::Format;

/// ATX-style markdown: `#` through `######`, written out as `.md` files.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn marker_symbol(&self) -> char {
        '#'
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }
}
