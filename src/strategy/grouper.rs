//! Group assignment strategies.
//!
//! A grouper maps each collected test item to a [`GroupMarker`]. The harness
//! calls it once per item during the collection phase and records the result
//! in the session's [`crate::GroupAssignment`].
//!
//! The default, [`LocationGrouper`], is the deterministic hash sharder: it
//! keys on the item's file path only, so all tests in one file land in the
//! same group. For other layouts a closure can act as a grouper directly.

use std::num::NonZeroU64;

use crate::{config::ShardConfig, marker::GroupMarker, shard, test::TestMeta};

/// A strategy for assigning test items to groups.
///
/// Implementations must be pure with respect to the item: the marker may
/// depend on the item's metadata and the grouper's own configuration, but not
/// on the order in which items are seen, or workers computing the assignment
/// independently would disagree.
pub trait ShardGrouper<Extra> {
    /// Return the group marker for a test item.
    fn group(&mut self, meta: &TestMeta<Extra>) -> GroupMarker;
}

impl<F, Extra> ShardGrouper<Extra> for F
where
    F: FnMut(&TestMeta<Extra>) -> GroupMarker,
{
    fn group(&mut self, meta: &TestMeta<Extra>) -> GroupMarker {
        self(meta)
    }
}

/// The hash-based default grouper.
///
/// Hashes the item's file path (and only the path, see
/// [`crate::test::ItemLocation::shard_key`]) into one of `total_groups`
/// groups via [`shard::assign_group`].
#[derive(Debug, Clone, Copy)]
pub struct LocationGrouper {
    total_groups: NonZeroU64,
}

impl LocationGrouper {
    pub const fn new(total_groups: NonZeroU64) -> Self {
        Self { total_groups }
    }

    pub const fn from_config(config: &ShardConfig) -> Self {
        Self {
            total_groups: config.total_groups,
        }
    }

    pub const fn total_groups(&self) -> NonZeroU64 {
        self.total_groups
    }
}

impl Default for LocationGrouper {
    fn default() -> Self {
        Self::from_config(&ShardConfig::single())
    }
}

impl<Extra> ShardGrouper<Extra> for LocationGrouper {
    fn group(&mut self, meta: &TestMeta<Extra>) -> GroupMarker {
        shard::assign_marker(meta.location.shard_key(), self.total_groups)
    }
}
