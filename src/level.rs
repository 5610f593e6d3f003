//! Heading depth chosen as the split point.
//!
//! Users name a level with a token (`h1`..`h6`, any case); the library works with
//! the [`BoundaryLevel`] enum so that an unsupported rank can never reach the scanner.

use crate::error::{Result, SplitError};
use crate::formats::Format;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// One of the six markdown heading ranks.
pub enum BoundaryLevel {
    /// `#`
    H1,
    /// `##`
    #[default]
    H2,
    /// `###`
    H3,
    /// `####`
    H4,
    /// `#####`
    H5,
    /// `######`
    H6,
}

impl BoundaryLevel {
    #[must_use]
    /// Number of marker symbols that open a heading at this level.
    pub const fn rank(self) -> usize {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }

    #[must_use]
    /// The literal marker sequence, e.g. `###` for [`BoundaryLevel::H3`] in markdown.
    pub fn marker(self, format: &impl Format) -> String {
        std::iter::repeat_n(format.marker_symbol(), self.rank()).collect()
    }
}

impl TryFrom<u8> for BoundaryLevel {
    type Error = SplitError;

    fn try_from(rank: u8) -> Result<Self> {
        match rank {
            1 => Ok(Self::H1),
            2 => Ok(Self::H2),
            3 => Ok(Self::H3),
            4 => Ok(Self::H4),
            5 => Ok(Self::H5),
            6 => Ok(Self::H6),
            other => Err(SplitError::InvalidBoundaryLevel(other.to_string())),
        }
    }
}

impl FromStr for BoundaryLevel {
    type Err = SplitError;

    fn from_str(token: &str) -> Result<Self> {
        let invalid = || SplitError::InvalidBoundaryLevel(token.to_string());
        let digits = token
            .strip_prefix('h')
            .or_else(|| token.strip_prefix('H'))
            .ok_or_else(invalid)?;
        // Exactly one digit, so "h02" and "h+2" are rejected
        if digits.len() != 1 {
            return Err(invalid());
        }
        let rank: u8 = digits.parse().map_err(|_| invalid())?;
        Self::try_from(rank).map_err(|_| invalid())
    }
}

impl fmt::Display for BoundaryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.rank())
    }
}

#[cfg(test)]
#[path = "tests/level.rs"]
mod tests;
