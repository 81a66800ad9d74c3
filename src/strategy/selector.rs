//! Group selection strategies.
//!
//! After collection, a selector decides which groups' items actually execute
//! in the current process. Selection only ever reads the attached marker; it
//! never re-derives an item's group, so any mechanism that can name a
//! `group_<N>` marker can drive it.
//!
//! Selectors are passed into the harness explicitly at startup. There is no
//! registry or discovery step behind this trait.

use crate::marker::GroupMarker;

/// A strategy for choosing which groups run in this process.
pub trait ShardSelector {
    fn selected(&self, marker: GroupMarker) -> bool;
}

impl<F> ShardSelector for F
where
    F: Fn(GroupMarker) -> bool,
{
    fn selected(&self, marker: GroupMarker) -> bool {
        self(marker)
    }
}

/// Run every group: sharding disabled or a single-worker run.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllGroups;

impl ShardSelector for AllGroups {
    fn selected(&self, _: GroupMarker) -> bool {
        true
    }
}

/// Run exactly one group's items, the typical per-CI-worker setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnlyGroup(pub GroupMarker);

impl ShardSelector for OnlyGroup {
    fn selected(&self, marker: GroupMarker) -> bool {
        marker == self.0
    }
}
