//! Queries over arbitrary error values.
//!
//! Every function here works on any [`Error`] by probing its capabilities and
//! never fails: a missing capability yields the documented default instead.
//!
//! | Function | Capability probed | Default |
//! |----------|-------------------|---------|
//! | [`get_inner`] | [`CompositeError`](crate::traits::CompositeError) | `None` |
//! | [`get_location`] | [`ErrorWithLocation`](crate::traits::ErrorWithLocation) | `""` |
//! | [`get_stack_trace`] | [`ErrorWithStackTrace`](crate::traits::ErrorWithStackTrace) | `""` |
//! | [`get_original_error`] | [`ErrorWrapper`](crate::traits::ErrorWrapper) | the error itself |
//! | [`get_fields`] | [`ErrorWithFields`](crate::traits::ErrorWithFields) | `None` |
//!
//! Chain walks ([`chain`], [`is_error`], [`get_error_by_type`],
//! [`get_full_details`]) follow [`get_inner`] until it returns `None`. They do
//! not guard against cycles.
//!
//! # Examples
//!
//! ```
//! use fail_chain::{get_inner, is_error, new_with_inner, news};
//!
//! let cause = news("connection refused");
//! let err = new_with_inner(news("fetch failed"), cause.clone());
//!
//! assert_eq!(get_inner(&err).map(|e| e.to_string()), Some("connection refused".into()));
//! assert!(is_error(&err, &cause));
//! ```

use crate::types::{DetailsConfig, Error, ErrorType, Fields};

mod chain;

pub use chain::Chain;

/// Returns the cause of `err`, or `None` when it has none.
#[inline]
pub fn get_inner(err: &Error) -> Option<&Error> {
    err.as_composite().and_then(|composite| composite.inner_error())
}

/// Returns where `err` was created, or an empty string when unknown.
#[inline]
pub fn get_location(err: &Error) -> String {
    err.as_located().map(|located| located.location()).unwrap_or_default()
}

/// Returns the stack trace captured with `err`, or an empty string.
#[inline]
pub fn get_stack_trace(err: &Error) -> String {
    err.as_traced().map(|traced| traced.stack_trace()).unwrap_or_default()
}

/// Returns the structured fields of `err`, if it carries any.
#[inline]
pub fn get_fields(err: &Error) -> Option<&Fields> {
    err.as_fields().and_then(|with_fields| with_fields.fields())
}

/// Returns the innermost error decorated by `err`, or `err` itself when it is
/// not a decorator.
#[inline]
pub fn get_original_error(err: &Error) -> &Error {
    match err.as_wrapper() {
        Some(wrapper) => wrapper.original_error(),
        None => err,
    }
}

/// Returns the type of the original error, looking through decorators.
#[inline]
pub fn get_runtime_type(err: &Error) -> ErrorType {
    get_original_error(err).as_fail().runtime_type()
}

/// Same as [`get_runtime_type`].
#[inline]
pub fn get_type(err: &Error) -> ErrorType {
    get_runtime_type(err)
}

/// Iterates over `err` and every cause reachable through [`get_inner`].
#[inline]
pub fn chain(err: &Error) -> Chain<'_> {
    Chain::new(err)
}

/// Returns the last error of the chain starting at `err`.
pub fn root_cause(err: &Error) -> &Error {
    chain(err).last().unwrap_or(err)
}

/// Renders `err` and all of its causes, one `<type>: <message>` line per
/// error, each followed by its stack trace indented by four spaces.
///
/// # Examples
///
/// ```
/// use fail_chain::{get_full_details, new_with_inner, news};
///
/// let err = new_with_inner(news("outer"), news("inner"));
/// let details = get_full_details(&err);
///
/// assert!(details.starts_with("fail_chain::types::plain_error::PlainError: outer"));
/// assert!(details.contains("\nfail_chain::types::plain_error::PlainError: inner"));
/// ```
#[inline]
pub fn get_full_details(err: &Error) -> String {
    full_details_with(err, &DetailsConfig::default())
}

/// [`get_full_details`] with a custom layout.
#[inline]
pub fn full_details_with(err: &Error, config: &DetailsConfig) -> String {
    config.render(err)
}

/// Whether `needle` is `haystack` itself or one of its causes.
///
/// Errors are compared by identity ([`Error::ptr_eq`]), not by message.
pub fn is_error(haystack: &Error, needle: &Error) -> bool {
    chain(haystack).any(|node| Error::ptr_eq(node, needle))
}

/// Returns the first error in the chain starting at `haystack` whose type
/// equals the type of `example`.
pub fn get_error_by_type<'a>(haystack: &'a Error, example: &Error) -> Option<&'a Error> {
    chain(haystack).find(|node| are_errors_of_equal_type(*node, example))
}

/// Whether two errors are of the same type.
///
/// Decorators and smart pointers are looked through on both sides. Always
/// `false` when either side is `None`.
///
/// # Examples
///
/// ```
/// use fail_chain::{are_errors_of_equal_type, news, Error};
///
/// let decorated = news("a");
/// let plain = Error::msg("b");
///
/// assert!(are_errors_of_equal_type(&decorated, &plain));
/// assert!(!are_errors_of_equal_type(None::<&Error>, &plain));
/// ```
pub fn are_errors_of_equal_type<'a, 'b>(
    a: impl Into<Option<&'a Error>>,
    b: impl Into<Option<&'b Error>>,
) -> bool {
    match (a.into(), b.into()) {
        (Some(a), Some(b)) => get_runtime_type(a) == get_runtime_type(b),
        _ => false,
    }
}
