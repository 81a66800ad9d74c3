use std::time::Duration;

use crate::{marker::GroupMarker, outcome::TestOutcome};

pub type TestOutcomes<'t> = Vec<(&'t str, TestOutcome)>;

/// What one worker process did with its slice of the suite.
#[derive(Debug)]
#[non_exhaustive]
pub struct ShardReport<'t> {
    /// Outcome per executed test, keyed by qualified test name.
    pub outcomes: TestOutcomes<'t>,

    /// Markers of the groups that ran in this process.
    pub selected: Vec<GroupMarker>,

    /// Number of collected items the selector excluded from this process.
    pub deselected: usize,

    pub duration: Duration,
}

impl ShardReport<'_> {
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.passed())
    }
}
