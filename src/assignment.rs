//! The per-session group assignment.
//!
//! A [`GroupAssignment`] is the product of the collection phase: every
//! collected item mapped to exactly one group marker. It is computed once,
//! consumed by selection, and never mutated afterward or persisted anywhere.

use std::collections::BTreeMap;

use crate::{marker::GroupMarker, test::Test};

/// Marker → items map for one collected suite.
///
/// Backed by a `BTreeMap` so iteration order over groups is stable across
/// runs, which keeps reports and logs diffable between CI workers.
#[derive(Debug, Default)]
pub struct GroupAssignment<'t, Extra = ()> {
    groups: BTreeMap<GroupMarker, Vec<&'t Test<Extra>>>,
}

impl<'t, Extra> GroupAssignment<'t, Extra> {
    pub fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    pub(crate) fn add(&mut self, marker: GroupMarker, test: &'t Test<Extra>) {
        self.groups.entry(marker).or_default().push(test);
    }

    /// The items assigned to `marker`; empty if the group received none.
    pub fn group(&self, marker: GroupMarker) -> &[&'t Test<Extra>] {
        self.groups.get(&marker).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Markers that received at least one item, in ascending order.
    pub fn markers(&self) -> impl Iterator<Item = GroupMarker> + '_ {
        self.groups.keys().copied()
    }

    pub fn iter<'s>(&'s self) -> impl Iterator<Item = (GroupMarker, &'s [&'t Test<Extra>])> {
        self.groups
            .iter()
            .map(|(marker, tests)| (*marker, tests.as_slice()))
    }

    /// Total number of assigned items across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(|tests| tests.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
