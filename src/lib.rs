//! Deterministic test sharding for parallel CI runs.
//!
//! testshard splits a collected test suite into a fixed number of groups so
//! that independent worker processes can each run one slice of the suite.
//! Group assignment is a pure function of an item's file path, so workers
//! agree on every item's group without any coordination between them.
//!
//! The crate is built from small strategy traits: a [`grouper::ShardGrouper`]
//! attaches a [`marker::GroupMarker`] to every item, a
//! [`selector::ShardSelector`] decides which groups execute in this process,
//! and a [`runner::TestRunner`] executes the selected items.

pub mod config;
pub mod marker;
pub mod outcome;
pub mod shard;
pub mod test;

mod assignment;
pub use assignment::*;

mod strategy;
pub use strategy::*;

mod harness;
pub use harness::*;

mod report;
pub use report::*;

#[cfg(test)]
pub(crate) mod test_support;
