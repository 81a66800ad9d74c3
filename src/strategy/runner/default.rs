use std::{
    cmp,
    num::NonZeroUsize,
    thread::Scope,
    time::Instant,
};

use crate::{
    outcome::{TestOutcome, TestStatus},
    runner::TestRunner,
    test::TestMeta,
};

/// Worker-pool runner used by the default harness.
///
/// Jobs are queued into a channel upfront and a fixed set of scoped worker
/// threads drains it, so outcomes arrive in completion order rather than
/// collection order.
#[derive(Debug)]
pub struct DefaultRunner {
    threads: NonZeroUsize,
}

impl Default for DefaultRunner {
    fn default() -> Self {
        Self {
            threads: std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl DefaultRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thread_count(self, count: NonZeroUsize) -> Self {
        Self { threads: count }
    }
}

impl<Extra: Sync> TestRunner<Extra> for DefaultRunner {
    fn run<'t, 's, I, F>(
        &self,
        tests: I,
        scope: &'s Scope<'s, 't>,
    ) -> impl Iterator<Item = (&'t TestMeta<Extra>, TestOutcome)>
    where
        I: ExactSizeIterator<Item = (F, &'t TestMeta<Extra>)>,
        F: (Fn() -> TestStatus) + Send + 's,
        Extra: 't,
    {
        let worker_count = <Self as TestRunner<Extra>>::worker_count(self, tests.len());

        let (jtx, jrx) = crossbeam_channel::bounded(tests.len());
        let (otx, orx) = crossbeam_channel::bounded(worker_count.get());
        for job in tests {
            jtx.send(job).expect("job channel sized for every test");
        }
        drop(jtx);

        for _ in 0..worker_count.get() {
            let jrx = jrx.clone();
            let otx = otx.clone();
            scope.spawn(move || {
                while let Ok((f, meta)) = jrx.recv() {
                    let now = Instant::now();
                    let status = f();
                    let outcome = TestOutcome {
                        status,
                        duration: now.elapsed(),
                    };
                    if otx.send((meta, outcome)).is_err() {
                        // Receiver dropped, remaining results are irrelevant.
                        return;
                    }
                }
            });
        }
        drop(otx);

        orx.into_iter()
    }

    fn worker_count(&self, tests_count: usize) -> NonZeroUsize {
        NonZeroUsize::new(cmp::min(self.threads.get(), tests_count)).unwrap_or(NonZeroUsize::MIN)
    }
}
