//! Error values and supporting types.
//!
//! - [`Error`]: the shared handle everything else passes around.
//! - [`PlainError`], [`ReasonError`]: ready-made error values.
//! - [`Decorated`]: adds location, stack trace and an optional cause to any
//!   error; produced by the constructors.
//! - [`Foreign`]: adapter for errors that only implement `std::error::Error`.
//! - [`Fields`], [`ErrorType`], [`DetailsConfig`]: supporting data.
//!
//! # Examples
//!
//! ```
//! use fail_chain::{get_type, news, PlainError};
//!
//! let err = news("database connection failed");
//!
//! assert_eq!(err.to_string(), "database connection failed");
//! assert_eq!(get_type(&err).name(), std::any::type_name::<PlainError>());
//! ```
use smallvec::SmallVec;

pub mod decorated;
pub mod details;
pub mod error;
pub mod error_type;
pub mod fields;
pub mod plain_error;
pub mod reason_error;

pub use decorated::Decorated;
pub use details::DetailsConfig;
pub use error::Error;
pub use error_type::ErrorType;
pub use fields::{FieldValue, Fields};
pub use plain_error::{Foreign, PlainError};
pub use reason_error::ReasonError;

/// SmallVec-backed collection used for field storage.
///
/// Uses inline storage for a single element, which covers the common case
/// of one attached field without a heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Result alias with [`Error`] as the failure type.
pub type Result<T, E = Error> = core::result::Result<T, E>;
