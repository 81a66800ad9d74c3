//! Sharding configuration.
//!
//! One knob: the total number of groups, read from the `TOTAL_TEST_GROUPS`
//! environment variable. An unset variable means a single group (sharding
//! disabled). Anything that is set but not a positive integer is rejected at
//! parse time with an error naming the variable and the offending value —
//! never silently defaulted, since a half-configured CI matrix would quietly
//! run the wrong slice of the suite.

use std::{env, num::NonZeroU64};

use thiserror::Error;

/// Environment variable holding the total number of test groups.
pub const TOTAL_TEST_GROUPS_VAR: &str = "TOTAL_TEST_GROUPS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardConfig {
    pub total_groups: NonZeroU64,
}

impl Default for ShardConfig {
    fn default() -> Self {
        Self::single()
    }
}

impl ShardConfig {
    /// Single-group mode: every item lands in group 0.
    pub const fn single() -> Self {
        Self {
            total_groups: NonZeroU64::MIN,
        }
    }

    pub const fn new(total_groups: NonZeroU64) -> Self {
        Self { total_groups }
    }

    /// Read the configuration from [`TOTAL_TEST_GROUPS_VAR`].
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(TOTAL_TEST_GROUPS_VAR) {
            Ok(value) => Self::parse(&value),
            Err(env::VarError::NotPresent) => Ok(Self::single()),
            Err(env::VarError::NotUnicode(value)) => Err(ConfigError::NotUnicode {
                var: TOTAL_TEST_GROUPS_VAR,
                value: value.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Parse a group count as it would appear in the environment variable.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let count: u64 = value
            .trim()
            .parse()
            .map_err(|source| ConfigError::NotAnInteger {
                var: TOTAL_TEST_GROUPS_VAR,
                value: value.to_owned(),
                source,
            })?;
        let total_groups = NonZeroU64::new(count).ok_or(ConfigError::NotPositive {
            var: TOTAL_TEST_GROUPS_VAR,
            value: count,
        })?;
        Ok(Self { total_groups })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not an integer")]
    NotAnInteger {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("{var}={value} must be at least 1")]
    NotPositive { var: &'static str, value: u64 },

    #[error("{var} is set but not valid unicode: {value:?}")]
    NotUnicode { var: &'static str, value: String },
}
