use std::{borrow::Cow, num::NonZeroU64, panic::RefUnwindSafe};

use crate::{
    ShardHarness,
    grouper::LocationGrouper,
    runner::SimpleRunner,
    selector::AllGroups,
    test::{ItemLocation, Test, TestFn, TestFnHandle, TestMeta},
};

pub struct BuildTest<Extra> {
    pub func: TestFnHandle,
    pub path: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub extra: Extra,
}

impl Default for BuildTest<()> {
    fn default() -> Self {
        Self {
            func: TestFnHandle::Static(&|| ()),
            path: Default::default(),
            name: Default::default(),
            extra: (),
        }
    }
}

impl<Extra> From<BuildTest<Extra>> for Test<Extra> {
    fn from(value: BuildTest<Extra>) -> Self {
        Test::new(
            value.func,
            TestMeta {
                location: ItemLocation::new(value.path, value.name),
                extra: value.extra,
            },
        )
    }
}

impl<F> From<F> for TestFnHandle
where
    F: TestFn + Send + Sync + RefUnwindSafe + 'static,
{
    fn from(value: F) -> Self {
        TestFnHandle::Owned(Box::new(value))
    }
}

macro_rules! test {
    {$($field:ident: $value:expr),* $(,)?} => {
        $crate::test::Test::from($crate::test_support::BuildTest {
            $($field: From::from($value),)*
            ..($crate::test_support::BuildTest {
                path: file!().into(),
                name: concat!(file!(), ":", line!(), ":", column!()).into(),
                ..Default::default()
            })
        })
    };
}

pub(crate) use test;

macro_rules! meta {
    {path: $path:expr, name: $name:expr $(,)?} => {
        $crate::test::TestMeta {
            location: $crate::test::ItemLocation::new($path, $name),
            extra: (),
        }
    };
}

pub(crate) use meta;

macro_rules! nonzero {
    (0) => {
        compile_error!("0 is zero")
    };

    ($value:literal) => {
        std::num::NonZeroU64::new($value).unwrap()
    };
}

pub(crate) use nonzero;

pub fn grouper(total_groups: u64) -> LocationGrouper {
    LocationGrouper::new(NonZeroU64::new(total_groups).expect("test grouper needs a nonzero count"))
}

pub fn harness<Extra>(
    tests: &[Test<Extra>],
) -> ShardHarness<'_, Extra, LocationGrouper, AllGroups, SimpleRunner> {
    ShardHarness {
        tests,
        grouper: LocationGrouper::default(),
        selector: AllGroups,
        runner: SimpleRunner,
    }
}
