//! Extension trait for decorating the error side of a `Result`.
//!
//! Every method reports the location of the code calling it, exactly like
//! calling [`new`](crate::new) at that spot would.
//!
//! # Examples
//!
//! ```
//! use fail_chain::traits::ResultExt;
//! use fail_chain::{get_location, Error, PlainError};
//!
//! fn parse_port(raw: &str) -> Result<u16, Error> {
//!     raw.parse::<u16>()
//!         .map_err(|_| PlainError::new(format!("invalid port: {raw}")))
//!         .decorate()
//! }
//!
//! let err = parse_port("http").unwrap_err();
//! assert_eq!(err.to_string(), "invalid port: http");
//! assert!(!get_location(&err).is_empty());
//! ```

use crate::constructors::{decorate, reason_at};
use crate::types::Error;

/// Adds location and stack trace to a failing `Result`.
pub trait ResultExt<T> {
    /// Decorates the error with the caller's location and stack trace.
    fn decorate(self) -> Result<T, Error>;

    /// Decorates the error and records `inner` as its cause.
    ///
    /// `inner` is only consulted when the error has no cause of its own.
    fn decorate_with_inner(self, inner: Error) -> Result<T, Error>;

    /// Replaces the error with a [`ReasonError`](crate::ReasonError) carrying
    /// `message`, with the original error as the reason.
    fn with_reason<M: Into<String>>(self, message: M) -> Result<T, Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    fn decorate(self) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(decorate(err.into(), None, 0)),
        }
    }

    fn decorate_with_inner(self, inner: Error) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(decorate(err.into(), Some(inner), 0)),
        }
    }

    fn with_reason<M: Into<String>>(self, message: M) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(reason_at(message.into(), err.into(), 0)),
        }
    }
}
