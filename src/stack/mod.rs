//! Call-site and stack-trace capture.
//!
//! This module is the only place that talks to the unwinder. It resolves raw
//! frames through the [`backtrace`] crate into [`Call`] descriptors and offers
//! two trimming passes:
//!
//! - [`CallStack::trim_below`] drops every frame inside a reference call.
//! - [`CallStack::trim_runtime`] drops standard library, unwinder and harness
//!   frames.
//!
//! Captures start at the first frame outside this crate, so `caller(0)` is
//! the code calling into `fail_chain`, whichever of its functions that went
//! through. Frames are located by symbol, not counted, which keeps the result
//! stable when the optimizer inlines or tail-calls library functions. Skip
//! counts move further up from there: `caller(1)` is the caller of that code.
//!
//! # Examples
//!
//! ```
//! use fail_chain::stack;
//!
//! let trace = stack::trace().trim_runtime();
//! for call in trace.iter() {
//!     println!("{call}");
//! }
//! ```

use std::fmt::{self, Display};
use std::ops::Deref;

mod call;

pub use call::Call;

/// Ordered frames, innermost (most recent call) first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallStack {
    calls: Vec<Call>,
}

impl CallStack {
    /// Wraps already resolved calls. The first call is the innermost one.
    #[inline]
    pub fn from_calls(calls: Vec<Call>) -> Self {
        Self { calls }
    }

    /// Removes every frame called from inside `call`, so the stack starts at
    /// `call`. When `call` is not on the stack, the result is empty.
    #[must_use]
    pub fn trim_below(mut self, call: &Call) -> Self {
        match self.calls.iter().position(|c| c == call) {
            Some(index) => {
                self.calls.drain(..index);
            }
            None => self.calls.clear(),
        }
        self
    }

    /// Removes frames owned by the runtime (see [`Call::is_runtime`]).
    #[must_use]
    pub fn trim_runtime(mut self) -> Self {
        self.calls.retain(|c| !c.is_runtime());
        self
    }

    /// Consumes the stack, returning its calls.
    #[inline]
    pub fn into_calls(self) -> Vec<Call> {
        self.calls
    }
}

impl Deref for CallStack {
    type Target = [Call];

    #[inline]
    fn deref(&self) -> &[Call] {
        &self.calls
    }
}

impl Display for CallStack {
    /// One call per line, innermost first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, call) in self.calls.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            Display::fmt(call, f)?;
        }
        Ok(())
    }
}

impl FromIterator<Call> for CallStack {
    fn from_iter<I: IntoIterator<Item = Call>>(iter: I) -> Self {
        Self { calls: iter.into_iter().collect() }
    }
}

/// Returns the call `skip` frames above the code calling into this crate.
///
/// Yields [`Call::unknown`] when the stack is shallower than requested.
pub fn caller(skip: usize) -> Call {
    external_calls(skip).into_iter().next().unwrap_or_default()
}

/// Captures the stack of the code calling into this crate, innermost first.
pub fn trace() -> CallStack {
    trace_skip(0)
}

/// [`trace`], starting `skip` frames further up.
pub(crate) fn trace_skip(skip: usize) -> CallStack {
    CallStack { calls: external_calls(skip) }
}

/// Renders a stack in the stack-trace format: one `<file>:<line> (<function>)`
/// per line, innermost first.
pub fn stack_trace_to_string(stack: &CallStack) -> String {
    stack.to_string()
}

/// Drops the unwinder and this crate's own frames from the top of a capture,
/// then `skip` more.
fn external_calls(skip: usize) -> Vec<Call> {
    let mut calls = capture_frames();

    // Everything above the first own frame is the unwinder itself.
    let first_own = calls.iter().position(Call::is_own).unwrap_or(0);
    let start = calls[first_own..]
        .iter()
        .position(|c| !c.is_own())
        .map_or(calls.len(), |offset| first_own + offset);
    let start = start.saturating_add(skip).min(calls.len());

    calls.drain(..start);
    calls
}

/// Walks and resolves the current stack, innermost first.
///
/// Never inlined: its frame marks where the unwinder's own frames end.
#[inline(never)]
fn capture_frames() -> Vec<Call> {
    let mut calls = Vec::new();

    backtrace::trace(|frame| {
        let before = calls.len();
        backtrace::resolve_frame(frame, |symbol| {
            calls.push(Call {
                file: symbol.filename().map(|p| p.display().to_string()),
                line: symbol.lineno(),
                function: symbol.name().map(|name| format!("{name:#}")),
            });
        });
        if calls.len() == before {
            calls.push(Call::unknown());
        }
        true
    });

    calls
}
