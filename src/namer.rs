//! File names derived from section headings.
//!
//! A name is a two-digit ordinal prefix and a sanitized stem joined by `_`, e.g.
//! `03_getting_started`. The extension is added by [`crate::split_plan`], so the
//! prefix and the stem can each be checked on their own.

/// Stem used for the content before the first boundary.
pub const PREAMBLE_STEM: &str = "introduction";

/// Stem used when a heading has nothing left after sanitizing.
pub const UNTITLED_STEM: &str = "untitled";

#[must_use]
/// Zero-padded ordinal: `01`..`99`, then `100` and up unpadded.
pub fn prefix(ordinal: usize) -> String {
    format!("{ordinal:02}")
}

#[must_use]
/// Lowercase the heading, keep letters, digits, whitespace and hyphens, and join
/// words with single underscores.
///
/// Returns an empty string when no kept characters remain.
pub fn stem(heading: &str) -> String {
    let kept: String = heading
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("_")
}

#[must_use]
/// Base name (no extension) for the segment at `ordinal`.
///
/// Headings that sanitize to nothing, e.g. `## ???`, fall back to
/// [`UNTITLED_STEM`] rather than leaving a trailing underscore.
pub fn name(ordinal: usize, heading: &str) -> String {
    let stem = stem(heading);
    let stem = if stem.is_empty() { UNTITLED_STEM } else { &stem };
    format!("{}_{stem}", prefix(ordinal))
}

#[must_use]
/// Base name for the preamble, always `00_introduction`.
pub fn preamble_name() -> String {
    format!("{}_{PREAMBLE_STEM}", prefix(0))
}

#[cfg(test)]
#[path = "tests/namer.rs"]
mod tests;
