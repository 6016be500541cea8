//! The decorating error behind every constructor in this crate.

use crate::stack::{self, Call, CallStack};
use crate::traits::{
    CompositeError, ErrorWithFields, ErrorWithLocation, ErrorWithStackTrace, ErrorWrapper, Fail,
};
use crate::types::{Error, Fields};
use std::fmt::{self, Debug, Display};

/// Decorates an error with the place it was created and, optionally, a cause.
///
/// `Decorated` is transparent where it matters: it prints exactly like the
/// decorated error, forwards that error's own cause and fields, and the type
/// queries look through it. Location and stack trace always describe where
/// the `Decorated` itself was built.
pub struct Decorated {
    original: Error,
    inner: Option<Error>,
    location: Call,
    stack_trace: CallStack,
}

impl Decorated {
    /// Decorates `original`, recording the first call site outside this crate,
    /// or the one `skip` frames above it.
    pub(crate) fn capture(original: Error, inner: Option<Error>, skip: usize) -> Self {
        let calls = stack::trace_skip(skip);
        let location = calls.first().cloned().unwrap_or_default();
        let stack_trace = calls.trim_runtime();
        Self { original, inner, location, stack_trace }
    }

    /// The captured creation site.
    #[inline]
    pub fn call(&self) -> &Call {
        &self.location
    }

    /// The captured stack, starting at [`call`](Self::call).
    #[inline]
    pub fn call_stack(&self) -> &CallStack {
        &self.stack_trace
    }
}

impl Display for Decorated {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.original, f)
    }
}

impl Debug for Decorated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decorated")
            .field("original", &self.original)
            .field("inner", &self.inner)
            .field("location", &format_args!("{}", self.location))
            .finish_non_exhaustive()
    }
}

impl std::error::Error for Decorated {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner_error().map(|inner| inner as &(dyn std::error::Error + 'static))
    }
}

impl CompositeError for Decorated {
    /// The decorated error's own cause when it has one, otherwise the cause
    /// given at construction.
    fn inner_error(&self) -> Option<&Error> {
        self.original
            .as_composite()
            .and_then(|composite| composite.inner_error())
            .or(self.inner.as_ref())
    }
}

impl ErrorWithLocation for Decorated {
    #[inline]
    fn location(&self) -> String {
        self.location.to_string()
    }
}

impl ErrorWithStackTrace for Decorated {
    #[inline]
    fn stack_trace(&self) -> String {
        stack::stack_trace_to_string(&self.stack_trace)
    }
}

impl ErrorWrapper for Decorated {
    fn original_error(&self) -> &Error {
        match self.original.as_wrapper() {
            Some(wrapper) => wrapper.original_error(),
            None => &self.original,
        }
    }
}

impl ErrorWithFields for Decorated {
    fn fields(&self) -> Option<&Fields> {
        self.original_error().as_fields().and_then(|with_fields| with_fields.fields())
    }
}

impl Fail for Decorated {
    #[inline]
    fn as_composite(&self) -> Option<&dyn CompositeError> {
        Some(self)
    }

    #[inline]
    fn as_located(&self) -> Option<&dyn ErrorWithLocation> {
        Some(self)
    }

    #[inline]
    fn as_traced(&self) -> Option<&dyn ErrorWithStackTrace> {
        Some(self)
    }

    #[inline]
    fn as_wrapper(&self) -> Option<&dyn ErrorWrapper> {
        Some(self)
    }

    #[inline]
    fn as_fields(&self) -> Option<&dyn ErrorWithFields> {
        Some(self)
    }
}
