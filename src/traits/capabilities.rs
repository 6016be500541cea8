//! Optional capabilities an error value may expose.
//!
//! None of these traits depend on each other and none is required. A value is
//! considered to have a capability when its [`Fail`](crate::traits::Fail)
//! probe returns `Some`; the query functions in [`crate::query`] fall back to
//! an empty default otherwise.

use crate::types::{Error, Fields};

/// An error that knows what caused it.
pub trait CompositeError {
    /// Returns the cause of this error, if any.
    fn inner_error(&self) -> Option<&Error>;
}

/// An error that remembers where in the code it was created.
pub trait ErrorWithLocation {
    /// Returns the creation site as `<file>:<line> (<function>)`.
    fn location(&self) -> String;
}

/// An error that carries the call stack from its creation.
pub trait ErrorWithStackTrace {
    /// Returns the stack as one `<file>:<line> (<function>)` per line,
    /// starting at the creation site.
    fn stack_trace(&self) -> String;
}

/// A value that decorates another error.
pub trait ErrorWrapper {
    /// Returns the decorated error, looking through nested wrappers down to
    /// the innermost value that is not itself a wrapper.
    fn original_error(&self) -> &Error;
}

/// An error that carries structured key/value context.
pub trait ErrorWithFields {
    /// Returns the attached fields, if any.
    fn fields(&self) -> Option<&Fields>;
}
