//! Section representation for a document cut at one heading level.
//!
//! A segment is one heading at the chosen level together with everything up to
//! the next heading at that same level. Deeper and shallower headings stay
//! inside the body verbatim. Text before the first boundary is kept apart as the
//! preamble.

#[derive(Clone, Debug, PartialEq, Eq)]
/// One heading at the split level and the text it governs.
pub struct Segment {
    /// 1-based position among the segments of one split.
    pub ordinal: usize,
    /// Heading text without the marker, trimmed.
    pub title: String,
    /// Everything after the heading line, verbatim. Empty when the heading
    /// is the last line and has no line break.
    pub body: String,
    /// 1-based line of the heading in the source document.
    pub line: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Result of scanning a document: optional preamble, then segments in source order.
pub struct Segmentation {
    /// Trimmed text before the first boundary, absent if empty or whitespace.
    pub preamble: Option<String>,
    /// Segments with ordinals `1..=N`.
    pub segments: Vec<Segment>,
}

impl Segmentation {
    #[must_use]
    /// Number of output files this segmentation yields.
    pub fn record_count(&self) -> usize {
        self.segments.len() + usize::from(self.preamble.is_some())
    }
}
