use std::{num::NonZeroUsize, thread::Scope, time::Instant};

use crate::{
    outcome::{TestOutcome, TestStatus},
    runner::TestRunner,
    test::TestMeta,
};

/// Serial runner: executes every test on the calling thread, in order.
///
/// Useful for tests of the crate itself and for suites where parallel
/// execution is not safe.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleRunner;

impl<Extra> TestRunner<Extra> for SimpleRunner {
    fn run<'t, 's, I, F>(
        &self,
        tests: I,
        _scope: &'s Scope<'s, 't>,
    ) -> impl Iterator<Item = (&'t TestMeta<Extra>, TestOutcome)>
    where
        I: ExactSizeIterator<Item = (F, &'t TestMeta<Extra>)>,
        F: (Fn() -> TestStatus) + Send + 's,
        Extra: 't,
    {
        tests.map(|(f, meta)| {
            let now = Instant::now();
            let status = f();
            (
                meta,
                TestOutcome {
                    status,
                    duration: now.elapsed(),
                },
            )
        })
    }

    fn worker_count(&self, _: usize) -> NonZeroUsize {
        NonZeroUsize::MIN
    }
}
