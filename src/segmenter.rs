//! Boundary detection and segmentation.
//!
//! A document is scanned once, line by line. A line is a boundary at level *k*
//! when, after leading spaces and tabs, it starts with exactly *k* marker symbols
//! followed by whitespace. `###` is therefore not a level-2 boundary, and `#`
//! is not either: other levels remain part of the enclosing body.

use crate::error::{Result, SplitError};
use crate::formats::Format;
use crate::level::BoundaryLevel;
use crate::section::{Segment, Segmentation};

/// Byte order mark some editors put in front of UTF-8 files.
const BOM: char = '\u{feff}';

/// A boundary line located during the scan.
struct Boundary<'a> {
    /// Byte offset of the start of the heading line.
    line_start: usize,
    /// Byte offset just past the heading line's line break.
    body_start: usize,
    title: &'a str,
    line: usize,
}

#[must_use]
/// Heading text of `line` if it opens a heading at exactly `level`.
///
/// `line` may carry its trailing line break. A marker followed only by
/// whitespace yields an empty title, which [`segment`] replaces with the next
/// non-blank line. A bare marker at end of input is not a boundary, since
/// nothing follows it.
pub fn boundary_title<'a>(
    line: &'a str,
    level: BoundaryLevel,
    format: &impl Format,
) -> Option<&'a str> {
    let symbol = format.marker_symbol();
    let mut rest = line.trim_start_matches([' ', '\t']);
    for _ in 0..level.rank() {
        rest = rest.strip_prefix(symbol)?;
    }
    match rest.chars().next() {
        Some(c) if c.is_whitespace() => Some(rest.trim()),
        _ => None,
    }
}

/// Decode raw input as UTF-8 text, dropping a leading byte order mark.
///
/// # Errors
///
/// Returns [`SplitError::InvalidDocument`] if the bytes are not valid UTF-8.
pub fn decode(bytes: &[u8]) -> Result<&str> {
    let text = std::str::from_utf8(bytes).map_err(|e| SplitError::InvalidDocument {
        reason: e.to_string(),
    })?;
    Ok(text.strip_prefix(BOM).unwrap_or(text))
}

#[must_use]
/// Partition `document` at every heading of exactly `level`.
///
/// Text before the first boundary becomes the preamble (trimmed, dropped if
/// blank). Each segment's title is the rest of its heading line, trimmed; its
/// body is everything after that line up to the next boundary, untouched.
///
/// A marker with nothing after it on its line takes the next non-blank line as
/// its title, and the body starts after that line. If that line is itself a
/// boundary, or there is none, the title and body are empty.
pub fn segment(document: &str, level: BoundaryLevel, format: &impl Format) -> Segmentation {
    let lines: Vec<(usize, &str)> = document
        .split_inclusive('\n')
        .scan(0, |offset, line| {
            let start = *offset;
            *offset += line.len();
            Some((start, line))
        })
        .collect();

    let mut boundaries = Vec::new();
    let mut index = 0;

    while let Some(&(line_start, line)) = lines.get(index) {
        let heading_line = index + 1;
        index += 1;
        let Some(mut title) = boundary_title(line, level, format) else {
            continue;
        };
        let mut body_start = line_start + line.len();

        if title.is_empty() {
            let next = lines
                .iter()
                .enumerate()
                .skip(index)
                .find(|(_, (_, l))| !l.trim().is_empty());
            match next {
                Some((n, &(start, candidate)))
                    if boundary_title(candidate, level, format).is_some() =>
                {
                    body_start = start;
                    index = n;
                }
                Some((n, &(start, candidate))) => {
                    title = candidate.trim();
                    body_start = start + candidate.len();
                    index = n + 1;
                }
                None => {
                    body_start = document.len();
                    index = lines.len();
                }
            }
        }

        tracing::debug!(line = heading_line, title, "boundary found");
        boundaries.push(Boundary {
            line_start,
            body_start,
            title,
            line: heading_line,
        });
    }

    let preamble_end = boundaries.first().map_or(document.len(), |b| b.line_start);
    let preamble = document[..preamble_end].trim();
    let preamble = (!preamble.is_empty()).then(|| preamble.to_string());

    let segments = boundaries
        .iter()
        .enumerate()
        .map(|(i, boundary)| {
            let body_end = boundaries
                .get(i + 1)
                .map_or(document.len(), |next| next.line_start);
            Segment {
                ordinal: i + 1,
                title: boundary.title.to_string(),
                body: document[boundary.body_start..body_end].to_string(),
                line: boundary.line,
            }
        })
        .collect();

    Segmentation { preamble, segments }
}

#[cfg(test)]
#[path = "tests/segmenter.rs"]
mod tests;
