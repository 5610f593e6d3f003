//! The split plan pairs every derived file name with the content it will hold.
//!
//! Segmentation and naming are pure, so the whole plan is built in memory before
//! anything touches disk. Writing is a separate step: either the plan is produced
//! complete or the split fails before any file exists.

use crate::error::{Result, SplitError};
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::level::BoundaryLevel;
use crate::namer;
use crate::segmenter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One file to be written: its name and full content.
pub struct OutputRecord {
    /// File name including extension, e.g. `01_overview.md`.
    pub file_name: String,
    /// Reconstructed heading line plus body, or the trimmed preamble.
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Ordered output of one split: preamble record first (if any), then segments.
pub struct SplitPlan {
    /// Records in source order.
    pub records: Vec<OutputRecord>,
}

#[derive(Serialize, Debug)]
/// Machine-readable summary of a split, printed with `--json`.
pub struct Manifest {
    /// Level the document was split on, e.g. `H2`.
    pub level: String,
    /// Destination directory.
    pub output: String,
    /// False for a dry run, where nothing was written.
    pub written: bool,
    /// Files in write order.
    pub files: Vec<ManifestEntry>,
}

#[derive(Serialize, Debug)]
/// One file in a [`Manifest`].
pub struct ManifestEntry {
    /// File name including extension.
    pub file_name: String,
    /// Content length in bytes.
    pub bytes: usize,
}

#[must_use]
/// Split a markdown document at every heading of exactly `level`.
pub fn split(document: &str, level: BoundaryLevel) -> SplitPlan {
    split_with_format(document, level, &MarkdownFormat)
}

#[must_use]
/// Split `document` using the heading marker and extension of `format`.
pub fn split_with_format(
    document: &str,
    level: BoundaryLevel,
    format: &impl Format,
) -> SplitPlan {
    let segmentation = segmenter::segment(document, level, format);
    let extension = format.file_extension();
    let marker = level.marker(format);

    let mut records = Vec::with_capacity(segmentation.record_count());
    if let Some(preamble) = segmentation.preamble {
        records.push(OutputRecord {
            file_name: format!("{}.{extension}", namer::preamble_name()),
            content: preamble,
        });
    }
    for segment in segmentation.segments {
        let file_name = format!(
            "{}.{extension}",
            namer::name(segment.ordinal, &segment.title)
        );
        tracing::debug!(line = segment.line, file = %file_name, "section named");
        records.push(OutputRecord {
            file_name,
            content: format!("{marker} {}\n{}", segment.title, segment.body),
        });
    }

    tracing::debug!(level = %level, records = records.len(), "split planned");
    SplitPlan { records }
}

/// Decode raw bytes and split them as markdown.
///
/// # Errors
///
/// Returns [`SplitError::InvalidDocument`] if `bytes` is not UTF-8 text.
pub fn split_bytes(bytes: &[u8], level: BoundaryLevel) -> Result<SplitPlan> {
    let document = segmenter::decode(bytes)?;
    Ok(split(document, level))
}

/// Split with a user-facing level token such as `h2` or `H3`.
///
/// # Errors
///
/// Returns [`SplitError::InvalidBoundaryLevel`] before scanning if `token` is
/// not one of `h1`..`h6`.
pub fn split_by_token(document: &str, token: &str) -> Result<SplitPlan> {
    let level = token.parse::<BoundaryLevel>()?;
    Ok(split(document, level))
}

impl SplitPlan {
    #[must_use]
    /// File names in write order.
    pub fn file_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.file_name.as_str()).collect()
    }

    /// Write every record into `dir`, creating it (and parents) if needed.
    ///
    /// Each write is independent: a failure stops the loop but files already
    /// written are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::DestinationUnwritable`] if the directory cannot be
    /// created or a file cannot be written.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir).map_err(|source| SplitError::DestinationUnwritable {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::with_capacity(self.records.len());
        for record in &self.records {
            let path = dir.join(&record.file_name);
            fs::write(&path, &record.content).map_err(|source| {
                SplitError::DestinationUnwritable {
                    path: path.clone(),
                    source,
                }
            })?;
            tracing::debug!(path = %path.display(), bytes = record.content.len(), "wrote file");
            written.push(path);
        }

        tracing::info!(files = written.len(), dir = %dir.display(), "split written");
        Ok(written)
    }

    #[must_use]
    /// Summary of this plan for `dir`; `written` records whether the files
    /// were actually written.
    pub fn manifest(&self, level: BoundaryLevel, dir: &Path, written: bool) -> Manifest {
        Manifest {
            level: level.to_string(),
            output: dir.display().to_string(),
            written,
            files: self
                .records
                .iter()
                .map(|r| ManifestEntry {
                    file_name: r.file_name.clone(),
                    bytes: r.content.len(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/split_plan.rs"]
mod tests;
