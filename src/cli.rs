//! Command-line interface: read the input, split it, write the files, report.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::Config;
use crate::error::{Result, SplitError};
use crate::formats::markdown::MarkdownFormat;
use crate::formats::WithExtension;
use crate::level::BoundaryLevel;
use crate::segmenter;
use crate::split_plan::{split_with_format, SplitPlan};

/// Split a markdown file into multiple files based on header levels.
#[derive(Parser, Debug)]
#[command(name = "mdsplit")]
#[command(version, about, long_about = None)]
#[command(after_help = "Examples:
  mdsplit --input document.md
  mdsplit --input document.md --tag h1 --output ./chapters
  mdsplit --input document.md --tag h3 --output ./sections")]
pub struct Args {
    /// Input markdown file to split
    #[arg(long, short, value_name = "FILE")]
    pub input: PathBuf,

    /// Header level to split on: h1, h2, h3, h4, h5, h6 (default: h2)
    #[arg(long, short, value_name = "LEVEL")]
    pub tag: Option<String>,

    /// Directory to save the split files (default: ./split_markdown)
    #[arg(long, short, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// List the files that would be written without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON manifest instead of the summary
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns any error from [`execute`].
pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::load();
    execute(&args, &cfg, &mut io::stdout().lock())
}

/// Split `args.input` according to `args`, with `cfg` supplying defaults,
/// and report to `out`.
///
/// The level is validated first and the input checked second, so nothing is
/// read or written when either is wrong.
///
/// # Errors
///
/// Returns [`SplitError::InvalidBoundaryLevel`] for a bad level token,
/// [`SplitError::InputNotFound`] if the input is not a file,
/// [`SplitError::InvalidDocument`] if it is not UTF-8, and
/// [`SplitError::DestinationUnwritable`] if writing fails.
pub fn execute(args: &Args, cfg: &Config, out: &mut impl Write) -> Result<()> {
    let token = args.tag.as_deref().unwrap_or(&cfg.tag);
    let level: BoundaryLevel = token.parse()?;

    if !args.input.is_file() {
        return Err(SplitError::InputNotFound(args.input.clone()));
    }
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.output));

    let bytes = fs::read(&args.input)?;
    let document = segmenter::decode(&bytes)?;
    let format = WithExtension::new(MarkdownFormat, &cfg.extension);
    let plan = split_with_format(document, level, &format);

    if !args.dry_run {
        plan.write_to(&output)?;
    }

    let shown = std::path::absolute(&output).unwrap_or(output);
    if args.json {
        let manifest = plan.manifest(level, &shown, !args.dry_run);
        serde_json::to_writer_pretty(&mut *out, &manifest)?;
        writeln!(out)?;
    } else {
        report(&plan, level, &shown, args.dry_run, out)?;
    }
    Ok(())
}

fn report(
    plan: &SplitPlan,
    level: BoundaryLevel,
    dir: &Path,
    dry_run: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let count = plan.records.len();
    if dry_run {
        writeln!(
            out,
            "Would split markdown file into {count} files using {level} headers:"
        )?;
        for name in plan.file_names() {
            writeln!(out, "  {name}")?;
        }
        writeln!(out, "Files would be saved in: {}", dir.display())
    } else {
        writeln!(
            out,
            "Successfully split markdown file into {count} files using {level} headers."
        )?;
        writeln!(out, "Files saved in: {}", dir.display())
    }
}

#[cfg(test)]
#[path = "tests/cli.rs"]
mod tests;
