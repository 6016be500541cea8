//! Capability traits and the probe trait that ties them together.
//!
//! - [`Fail`]: implemented by every value that can live in an error chain;
//!   exposes one probe per capability.
//! - [`CompositeError`], [`ErrorWithLocation`], [`ErrorWithStackTrace`],
//!   [`ErrorWrapper`], [`ErrorWithFields`]: the optional capabilities.
//! - [`ResultExt`]: decorates the error side of a `Result`.
//!
//! # Examples
//!
//! ```
//! use fail_chain::traits::Fail;
//! use fail_chain::{news, Error};
//!
//! let decorated = news("disk full");
//! assert!(decorated.as_traced().is_some());
//! assert!(decorated.as_located().is_some());
//!
//! let plain = Error::msg("disk full");
//! assert!(plain.as_traced().is_none());
//! ```

pub mod capabilities;
pub mod fail;
pub mod result_ext;

pub use capabilities::{
    CompositeError, ErrorWithFields, ErrorWithLocation, ErrorWithStackTrace, ErrorWrapper,
};
pub use fail::Fail;
pub use result_ext::ResultExt;
