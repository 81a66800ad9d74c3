//! Test execution.
//!
//! A runner executes the items selection kept for this process and produces
//! [`TestOutcome`] values. The harness hands it an iterator of execution
//! functions that already include panic handling (they return a
//! [`TestStatus`]), so a runner only schedules work and measures durations.
//!
//! [`DefaultRunner`] fans the items out over a worker pool; [`SimpleRunner`]
//! runs them one after another on the calling thread.

use std::{num::NonZeroUsize, thread::Scope};

use crate::{
    outcome::{TestOutcome, TestStatus},
    test::TestMeta,
};

mod default;
pub use default::*;

mod simple;
pub use simple::*;

/// A strategy for running tests and producing [`TestOutcome`] values.
pub trait TestRunner<Extra> {
    /// Run the given tests and return their outcomes.
    ///
    /// The input iterator yields `(f, meta)` pairs where `f` is the test
    /// execution function. The returned iterator yields `(meta, outcome)`
    /// pairs; its order may differ from the input order.
    ///
    /// The runner receives a [`Scope`] so it can spawn threads while still
    /// borrowing the test metadata with lifetime `'t`.
    fn run<'t, 's, I, F>(
        &self,
        tests: I,
        scope: &'s Scope<'s, 't>,
    ) -> impl Iterator<Item = (&'t TestMeta<Extra>, TestOutcome)>
    where
        I: ExactSizeIterator<Item = (F, &'t TestMeta<Extra>)>,
        F: (Fn() -> TestStatus) + Send + 's,
        Extra: 't;

    /// The number of workers this runner would use for `tests_count` tests.
    fn worker_count(&self, tests_count: usize) -> NonZeroUsize;
}
