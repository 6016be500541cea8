//! Chained errors that remember where they were created.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `fail_chain::*` or pick focused pieces as needed.
//!
//! - Constructors ([`new`], [`new_with_inner`], [`new_err_with_reason`],
//!   [`news`], [`newf!`]) decorate an error with the caller's location and
//!   stack trace while keeping its message, cause and type.
//! - Queries ([`get_inner`], [`get_location`], [`get_stack_trace`],
//!   [`get_full_details`], [`get_original_error`], [`is_error`],
//!   [`get_error_by_type`], ...) inspect any error by probing its
//!   capabilities and degrade to empty defaults.
//!
//! # Examples
//!
//! ## Decorating an Error
//!
//! ```
//! use fail_chain::{get_location, get_stack_trace, news};
//!
//! let err = news("database connection failed");
//!
//! assert_eq!(err.to_string(), "database connection failed");
//! println!("created at {}", get_location(&err));
//! println!("{}", get_stack_trace(&err));
//! ```
//!
//! ## Building and Walking a Chain
//!
//! ```
//! use fail_chain::{get_inner, is_error, new_with_inner, newf, news};
//!
//! let e1 = newf!("Error {} occurred.", 1);
//! let e2 = news("Error 2 occurred.");
//! let err = new_with_inner(e2.clone(), e1.clone());
//!
//! assert_eq!(err.to_string(), "Error 2 occurred.");
//! assert_eq!(get_inner(&err).unwrap().to_string(), "Error 1 occurred.");
//! assert!(is_error(&err, &e1));
//! ```
//!
//! ## Full Details
//!
//! ```
//! use fail_chain::{get_full_details, new_err_with_reason, news};
//!
//! let err = new_err_with_reason("loading config", news("file not found"));
//! let details = get_full_details(&err);
//!
//! assert!(details.starts_with("fail_chain::types::reason_error::ReasonError: loading config: file not found"));
//! assert!(details.contains("fail_chain::types::plain_error::PlainError: file not found"));
//! assert_eq!(format!("{err:#}"), details);
//! ```

/// Constructors that capture location and stack trace
pub mod constructors;
/// Macros for building chained errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability queries and chain traversal
pub mod query;
/// Call-site and stack-trace capture
pub mod stack;
/// Capability traits and the `Fail` probe trait
pub mod traits;
/// Error values and supporting types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use constructors::{
    new, new_err_with_reason, new_fmt, new_with_inner, new_with_inner_skip, new_with_skip, news,
    stack_trace, stack_trace_skip,
};
pub use query::*;
pub use stack::stack_trace_to_string;
pub use traits::*;
pub use types::{
    DetailsConfig, Error, ErrorType, FieldValue, Fields, Foreign, PlainError, ReasonError, Result,
};
