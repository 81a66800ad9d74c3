mod sharded;
pub use sharded::*;

use crate::{
    config::{ConfigError, ShardConfig},
    grouper::LocationGrouper,
    runner::DefaultRunner,
    selector::AllGroups,
    test::Test,
};

/// A harness over `tests` with the default strategies: a single group,
/// every group selected, and the worker-pool runner.
pub fn harness<Extra>(
    tests: &[Test<Extra>],
) -> ShardHarness<'_, Extra, LocationGrouper, AllGroups, DefaultRunner> {
    ShardHarness {
        tests,
        grouper: LocationGrouper::default(),
        selector: AllGroups,
        runner: DefaultRunner::default(),
    }
}

/// Like [`harness`], but with the group count read from the
/// [`TOTAL_TEST_GROUPS`](crate::config::TOTAL_TEST_GROUPS_VAR) environment
/// variable. An invalid value is an error, not a fallback to one group.
pub fn harness_from_env<Extra>(
    tests: &[Test<Extra>],
) -> Result<ShardHarness<'_, Extra, LocationGrouper, AllGroups, DefaultRunner>, ConfigError> {
    let config = ShardConfig::from_env()?;
    Ok(harness(tests).with_grouper(LocationGrouper::from_config(&config)))
}
