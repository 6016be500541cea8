use std::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const UNKNOWN: &str = "???";

/// Path prefix of every function defined in this crate.
const OWN_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");
/// Marks a method of one of this crate's traits implemented for another type.
const OWN_TRAIT: &str = concat!(" as ", env!("CARGO_CRATE_NAME"), "::");

/// A single resolved stack frame: source file, line and function.
///
/// Frames that were inlined by the compiler are expanded, so one machine
/// frame can produce several `Call`s. Without debug information only the
/// function is known and the call renders as `???:0 (<function>)`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Call {
    pub(crate) file: Option<String>,
    pub(crate) line: Option<u32>,
    pub(crate) function: Option<String>,
}

impl Call {
    /// A call that was resolved elsewhere.
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self { file: Some(file.into()), line: Some(line), function: Some(function.into()) }
    }

    /// A call resolved from the symbol table alone, with no source location.
    pub fn symbol(function: impl Into<String>) -> Self {
        Self { file: None, line: None, function: Some(function.into()) }
    }

    /// A call with nothing resolved. Renders as `???:0 (???)`.
    #[inline]
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Source file path, if debug information was available.
    #[inline]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Line number within [`file`](Self::file).
    #[inline]
    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// Demangled function path without the trailing symbol hash.
    #[inline]
    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// Whether this frame belongs to the standard library, the unwinder,
    /// the test harness or the C runtime, or resolved to nothing at all.
    ///
    /// Frames known only by their symbol are kept: release builds without
    /// debug information still produce a readable trace.
    pub fn is_runtime(&self) -> bool {
        let Some(function) = self.function.as_deref() else {
            return self.file.is_none();
        };
        if C_RUNTIME_SYMBOLS.contains(&function) || function.contains(" as core::ops::function::Fn") {
            return true;
        }
        let path = function.trim_start_matches('<');
        RUNTIME_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
    }

    /// Whether this frame is a function of this crate, including trait
    /// methods this crate implements for foreign types
    /// (`<Result<T, E> as fail_chain::...>::decorate`).
    pub(crate) fn is_own(&self) -> bool {
        let Some(function) = self.function.as_deref() else {
            return false;
        };
        function.trim_start_matches('<').starts_with(OWN_PREFIX) || function.contains(OWN_TRAIT)
    }
}

const RUNTIME_PREFIXES: &[&str] = &[
    "std::",
    "core::",
    "alloc::",
    "backtrace::",
    "test::",
    "__rust",
    "rust_begin_unwind",
];

const C_RUNTIME_SYMBOLS: &[&str] = &[
    "main",
    "_start",
    "__libc_start_main",
    "__libc_start_call_main",
    "start_thread",
    "clone",
    "clone3",
    "__clone",
    "__clone3",
    "thread_start",
    "_thread_start",
    "BaseThreadInitThunk",
    "RtlUserThreadStart",
];

impl Display for Call {
    /// `<file>:<line> (<function>)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file.as_deref().unwrap_or(UNKNOWN))?;
        write!(f, ":{}", self.line.unwrap_or(0))?;
        write!(f, " ({})", self.function.as_deref().unwrap_or(UNKNOWN))
    }
}
