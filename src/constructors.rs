//! Constructors that decorate errors with their creation site.
//!
//! Every public constructor records the location and stack trace of *its
//! caller*, the first frame outside this crate. Helpers that wrap these
//! constructors can hide their own frame with the `*_skip` variants: each
//! unit of `extra_skip` moves the reported location one more frame up the
//! stack. A helper whose last expression is the constructor call may be
//! turned into a jump by the optimizer and lose its frame; keep it out of
//! tail position (for example with [`std::hint::black_box`]) when using
//! `extra_skip`.
//!
//! # Examples
//!
//! ```
//! use fail_chain::{get_inner, get_location, new, new_err_with_reason, newf, news, Error};
//!
//! let io = news("connection reset");
//! let err = new_err_with_reason("sync failed", io.clone());
//!
//! assert_eq!(err.to_string(), "sync failed: connection reset");
//! assert!(Error::ptr_eq(get_inner(&err).unwrap(), &io));
//!
//! let attempt = 3;
//! let err = newf!("attempt {} failed", attempt);
//! assert_eq!(err.to_string(), "attempt 3 failed");
//!
//! let wrapped = new(Error::msg("plain"));
//! assert!(!get_location(&wrapped).is_empty());
//! ```

use crate::stack;
use crate::types::{Decorated, Error, PlainError, ReasonError};
use std::fmt;

/// Builds the decorated error. `skip` counts frames above the first frame
/// outside this crate.
pub(crate) fn decorate(original: Error, inner: Option<Error>, skip: usize) -> Error {
    Error::new(Decorated::capture(original, inner, skip))
}

pub(crate) fn reason_at(message: String, reason: Error, skip: usize) -> Error {
    decorate(Error::new(ReasonError::new(message, reason)), None, skip)
}

/// Decorates `err` with the caller's location and stack trace.
///
/// The result prints exactly like `err` and exposes `err`'s own cause.
pub fn new<E: Into<Error>>(err: E) -> Error {
    decorate(err.into(), None, 0)
}

/// [`new`], reporting the location `extra_skip` frames above the caller.
pub fn new_with_skip<E: Into<Error>>(err: E, extra_skip: usize) -> Error {
    decorate(err.into(), None, extra_skip)
}

/// Decorates `err` and records `inner` as its cause.
///
/// When `err` already has a cause of its own, that cause wins and `inner` is
/// only kept as a fallback.
pub fn new_with_inner<E: Into<Error>>(err: E, inner: Error) -> Error {
    decorate(err.into(), Some(inner), 0)
}

/// [`new_with_inner`], reporting the location `extra_skip` frames above the
/// caller.
pub fn new_with_inner_skip<E: Into<Error>>(err: E, inner: Error, extra_skip: usize) -> Error {
    decorate(err.into(), Some(inner), extra_skip)
}

/// Creates a decorated [`ReasonError`] printing as `<message>: <reason>`.
pub fn new_err_with_reason<M: Into<String>>(message: M, reason: Error) -> Error {
    reason_at(message.into(), reason, 0)
}

/// Creates a decorated [`PlainError`] from text.
pub fn news<M: Into<std::borrow::Cow<'static, str>>>(text: M) -> Error {
    decorate(Error::new(PlainError::new(text)), None, 0)
}

/// Creates a decorated [`PlainError`] from format arguments.
///
/// Usually reached through [`newf!`](crate::newf).
pub fn new_fmt(args: fmt::Arguments<'_>) -> Error {
    let message = match args.as_str() {
        Some(text) => std::borrow::Cow::Borrowed(text),
        None => std::borrow::Cow::Owned(fmt::format(args)),
    };
    decorate(Error::new(PlainError::new(message)), None, 0)
}

/// Renders the caller's stack in the stack-trace format without building an
/// error.
pub fn stack_trace() -> String {
    render_stack(0)
}

/// [`stack_trace`], starting `extra_skip` frames above the caller.
pub fn stack_trace_skip(extra_skip: usize) -> String {
    render_stack(extra_skip)
}

fn render_stack(skip: usize) -> String {
    stack::stack_trace_to_string(&stack::trace_skip(skip).trim_runtime())
}
