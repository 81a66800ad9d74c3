//! Group markers.
//!
//! A marker is the tag attached to every collected test item. It renders as
//! `group_<N>` so external selection mechanisms (a CI job matrix, a filter
//! expression) can address one group by name, and it parses back from that
//! form.

use std::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

const MARKER_PREFIX: &str = "group_";

/// The group tag attached to a test item, e.g. `group_3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupMarker(u64);

impl GroupMarker {
    pub const fn new(group: u64) -> Self {
        Self(group)
    }

    /// The group number in `[0, total_groups)`.
    pub const fn group(self) -> u64 {
        self.0
    }
}

impl From<u64> for GroupMarker {
    fn from(group: u64) -> Self {
        Self(group)
    }
}

impl fmt::Display for GroupMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{MARKER_PREFIX}{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkerParseError {
    #[error("marker {0:?} does not start with {MARKER_PREFIX:?}")]
    MissingPrefix(String),

    #[error("marker {value:?} has a non-numeric group number")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("marker {0:?} is not the rendered form")]
    NotCanonical(String),
}

impl FromStr for GroupMarker {
    type Err = MarkerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .strip_prefix(MARKER_PREFIX)
            .ok_or_else(|| MarkerParseError::MissingPrefix(s.to_owned()))?;
        // u64::from_str tolerates a leading `+`, but the rendered form never
        // carries one and is the only accepted spelling.
        if number.starts_with('+') {
            return Err(MarkerParseError::NotCanonical(s.to_owned()));
        }
        let group = number
            .parse()
            .map_err(|source| MarkerParseError::InvalidNumber {
                value: s.to_owned(),
                source,
            })?;
        Ok(Self(group))
    }
}
