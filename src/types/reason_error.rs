use crate::traits::{CompositeError, Fail};
use crate::types::Error;
use std::fmt::{self, Display};

/// An error message paired with the error that caused it.
///
/// Prints as `<message>: <reason>` and exposes `reason` as its cause.
///
/// # Examples
///
/// ```
/// use fail_chain::{get_inner, Error, ReasonError};
///
/// let reason = Error::msg("inner error");
/// let err = Error::new(ReasonError::new("some error", reason.clone()));
///
/// assert_eq!(err.to_string(), "some error: inner error");
/// assert!(Error::ptr_eq(get_inner(&err).unwrap(), &reason));
/// ```
#[derive(Debug, Clone)]
pub struct ReasonError {
    /// What failed.
    pub message: String,
    /// Why it failed; reported as the cause.
    pub reason: Error,
}

impl ReasonError {
    /// Pairs `message` with the error that caused it.
    #[inline]
    pub fn new<M: Into<String>>(message: M, reason: Error) -> Self {
        Self { message: message.into(), reason }
    }
}

impl Display for ReasonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.reason)
    }
}

impl std::error::Error for ReasonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}

impl CompositeError for ReasonError {
    #[inline]
    fn inner_error(&self) -> Option<&Error> {
        Some(&self.reason)
    }
}

impl Fail for ReasonError {
    #[inline]
    fn as_composite(&self) -> Option<&dyn CompositeError> {
        Some(self)
    }
}
