//! mdsplit: split a markdown document into one file per heading.
//!
//! The document is scanned once for headings of exactly the chosen level. Each
//! heading and the text under it becomes an [`split_plan::OutputRecord`] named
//! `NN_sanitized_title.md`, and any text before the first heading becomes
//! `00_introduction.md`.
//!
//! ```
//! use mdsplit::{split, BoundaryLevel};
//!
//! let plan = split("Intro\n## Setup\nsteps\n## Usage\n", BoundaryLevel::H2);
//! assert_eq!(
//!     plan.file_names(),
//!     ["00_introduction.md", "01_setup.md", "02_usage.md"]
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod formats;
pub mod level;
pub mod namer;
pub mod section;
pub mod segmenter;
pub mod split_plan;

pub use error::{Result, SplitError};
pub use level::BoundaryLevel;
pub use split_plan::{split, split_by_token, split_bytes, OutputRecord, SplitPlan};
