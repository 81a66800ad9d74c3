use std::{borrow::Cow, fmt::Debug, ops::Deref, panic::RefUnwindSafe};

/// Stable identifier of a collected test item.
///
/// The `path` is the collection file path and doubles as the shard key: every
/// item collected from the same file shares a group, which keeps file-level
/// fixtures together on one worker. The `name` is the qualified test name and
/// only identifies the item within its file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemLocation {
    pub path: Cow<'static, str>,
    pub name: Cow<'static, str>,
}

impl ItemLocation {
    pub fn new(
        path: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    /// The string the sharder hashes for this item.
    pub fn shard_key(&self) -> &str {
        &self.path
    }
}

/// A runnable test item: a function handle plus its metadata.
#[derive(Debug, Default)]
pub struct Test<Extra = ()> {
    function: TestFnHandle,
    pub meta: TestMeta<Extra>,
}

impl<Extra> Test<Extra> {
    pub const fn new(function: TestFnHandle, meta: TestMeta<Extra>) -> Self {
        Self { function, meta }
    }

    pub(crate) fn call(&self) -> TestResult {
        self.function.call()
    }
}

impl<Extra> Deref for Test<Extra> {
    type Target = TestMeta<Extra>;

    fn deref(&self) -> &Self::Target {
        &self.meta
    }
}

/// Metadata of a test item.
///
/// `Extra` is a user slot for whatever additional data a harness wants to
/// carry per test; the crate never inspects it.
#[derive(Debug, Clone, Default)]
pub struct TestMeta<Extra = ()> {
    pub location: ItemLocation,
    pub extra: Extra,
}

/// Handle to the actual test function.
pub enum TestFnHandle {
    Ptr(fn() -> TestResult),
    Owned(Box<dyn TestFn + Send + Sync + RefUnwindSafe>),
    Static(&'static (dyn TestFn + Send + Sync + RefUnwindSafe)),
}

impl Debug for TestFnHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ptr(ptr) => f.debug_tuple("Ptr").field(ptr).finish(),
            Self::Owned(_) => write!(f, "Owned(...)"),
            Self::Static(_) => write!(f, "Static(...)"),
        }
    }
}

impl Default for TestFnHandle {
    fn default() -> Self {
        Self::Static(&|| {})
    }
}

impl TestFnHandle {
    pub const fn from_const_fn(f: fn() -> TestResult) -> Self {
        Self::Ptr(f)
    }

    pub fn from_boxed<F, T>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + RefUnwindSafe + 'static,
        T: Into<TestResult>,
    {
        Self::Owned(Box::new(f))
    }

    pub const fn from_static_obj(f: &'static (dyn TestFn + Send + Sync + RefUnwindSafe)) -> Self {
        Self::Static(f)
    }

    pub fn call(&self) -> TestResult {
        match self {
            Self::Ptr(f) => f(),
            Self::Owned(f) => f.call_test(),
            Self::Static(f) => f.call_test(),
        }
    }
}

pub trait TestFn {
    fn call_test(&self) -> TestResult;
}

impl<F, T> TestFn for F
where
    F: Fn() -> T,
    T: Into<TestResult>,
{
    fn call_test(&self) -> TestResult {
        (self)().into()
    }
}

#[derive(Debug)]
pub struct TestResult(pub Result<(), String>);

impl From<()> for TestResult {
    fn from(_: ()) -> Self {
        Self(Ok(()))
    }
}

impl<E: Debug> From<Result<(), E>> for TestResult {
    fn from(v: Result<(), E>) -> Self {
        TestResult(v.map_err(|e| format!("{e:#?}")))
    }
}
