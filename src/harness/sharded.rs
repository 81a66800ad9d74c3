use std::{any::Any, panic::RefUnwindSafe, time::Instant};

use crate::{
    assignment::GroupAssignment,
    grouper::ShardGrouper,
    outcome::{TestFailure, TestStatus},
    report::ShardReport,
    runner::TestRunner,
    selector::ShardSelector,
    test::Test,
};

/// The sharding pipeline over one collected suite.
///
/// Collection computes the [`GroupAssignment`] via the grouper, selection
/// keeps the groups this process is responsible for, and the runner executes
/// what is left. Strategies are swapped with the `with_*` builders.
pub struct ShardHarness<'t, Extra, Grouper, Selector, Runner> {
    pub(crate) tests: &'t [Test<Extra>],
    pub(crate) grouper: Grouper,
    pub(crate) selector: Selector,
    pub(crate) runner: Runner,
}

impl<'t, Extra, Grouper, Selector, Runner> ShardHarness<'t, Extra, Grouper, Selector, Runner> {
    pub fn with_grouper<WithGrouper: ShardGrouper<Extra>>(
        self,
        grouper: WithGrouper,
    ) -> ShardHarness<'t, Extra, WithGrouper, Selector, Runner> {
        ShardHarness {
            tests: self.tests,
            grouper,
            selector: self.selector,
            runner: self.runner,
        }
    }

    pub fn with_selector<WithSelector: ShardSelector>(
        self,
        selector: WithSelector,
    ) -> ShardHarness<'t, Extra, Grouper, WithSelector, Runner> {
        ShardHarness {
            tests: self.tests,
            grouper: self.grouper,
            selector,
            runner: self.runner,
        }
    }

    pub fn with_runner<WithRunner: TestRunner<Extra>>(
        self,
        runner: WithRunner,
    ) -> ShardHarness<'t, Extra, Grouper, Selector, WithRunner> {
        ShardHarness {
            tests: self.tests,
            grouper: self.grouper,
            selector: self.selector,
            runner,
        }
    }
}

impl<'t, Extra, Grouper, Selector, Runner> ShardHarness<'t, Extra, Grouper, Selector, Runner>
where
    Grouper: ShardGrouper<Extra>,
{
    /// The collection phase: attach a marker to every item.
    ///
    /// Runs nothing. Useful on its own for listing which items a given CI
    /// worker would execute.
    pub fn assignment(&mut self) -> GroupAssignment<'t, Extra> {
        let mut assignment = GroupAssignment::new();
        for test in self.tests {
            let marker = self.grouper.group(&test.meta);
            assignment.add(marker, test);
        }
        assignment
    }
}

impl<'t, Extra, Grouper, Selector, Runner> ShardHarness<'t, Extra, Grouper, Selector, Runner>
where
    Extra: RefUnwindSafe + Sync,
    Grouper: ShardGrouper<Extra>,
    Selector: ShardSelector,
    Runner: TestRunner<Extra>,
{
    /// Collect, select, and execute this process's slice of the suite.
    pub fn run(mut self) -> ShardReport<'t> {
        let now = Instant::now();

        let assignment = self.assignment();
        let mut selected_markers = Vec::new();
        let mut selected: Vec<&'t Test<Extra>> = Vec::new();
        let mut deselected = 0;
        for (marker, tests) in assignment.iter() {
            match self.selector.selected(marker) {
                true => {
                    selected_markers.push(marker);
                    selected.extend_from_slice(tests);
                }
                false => deselected += tests.len(),
            }
        }

        let runner = self.runner;
        let outcomes = std::thread::scope(|scope| {
            let runs = selected
                .iter()
                .copied()
                .map(|test| (move || execute(test), &test.meta));
            runner
                .run(runs, scope)
                .map(|(meta, outcome)| (meta.location.name.as_ref(), outcome))
                .collect()
        });

        ShardReport {
            outcomes,
            selected: selected_markers,
            deselected,
            duration: now.elapsed(),
        }
    }
}

/// Run one test and turn a panic into a failure status.
fn execute<Extra: RefUnwindSafe>(test: &Test<Extra>) -> TestStatus {
    match std::panic::catch_unwind(|| test.call()) {
        Ok(result) => result.into(),
        Err(payload) => TestStatus::Failed(TestFailure::Panicked(payload_as_string(payload))),
    }
}

/// Matches the common payload types produced by `panic!`.
fn payload_as_string(payload: Box<dyn Any + Send + 'static>) -> String {
    payload
        .downcast::<&'static str>()
        .map(|s| s.to_string())
        .or_else(|payload| payload.downcast::<String>().map(|s| *s))
        .unwrap_or_else(|_| String::from("Box<dyn Any>"))
}
