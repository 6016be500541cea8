//! The probe trait every chained error value implements.
//!
//! [`Fail`] is how the query functions discover what an error can do. Each
//! `as_*` method answers "does this value have capability X?" and defaults to
//! `None`, so a type opts into a capability by implementing the capability
//! trait and overriding the matching probe to return `Some(self)`.
//!
//! # Examples
//!
//! ```
//! use fail_chain::traits::{CompositeError, Fail};
//! use fail_chain::{get_inner, news, Error};
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct QueryFailed {
//!     cause: Error,
//! }
//!
//! impl fmt::Display for QueryFailed {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("query failed")
//!     }
//! }
//!
//! impl CompositeError for QueryFailed {
//!     fn inner_error(&self) -> Option<&Error> {
//!         Some(&self.cause)
//!     }
//! }
//!
//! impl Fail for QueryFailed {
//!     fn as_composite(&self) -> Option<&dyn CompositeError> {
//!         Some(self)
//!     }
//! }
//!
//! let cause = news("connection reset");
//! let err = Error::new(QueryFailed { cause: cause.clone() });
//!
//! assert!(get_inner(&err).is_some_and(|inner| Error::ptr_eq(inner, &cause)));
//! ```

use crate::traits::capabilities::{
    CompositeError, ErrorWithFields, ErrorWithLocation, ErrorWithStackTrace, ErrorWrapper,
};
use crate::types::ErrorType;
use std::any::Any;
use std::fmt::{Debug, Display};
use std::sync::Arc;

/// An error value that can be placed in a chain and probed for capabilities.
///
/// Only `Display` and `Debug` are required. Every probe defaults to "absent",
/// so the smallest implementation is an empty `impl` block (or
/// [`impl_fail!`](crate::impl_fail)).
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a chained error",
    label = "this type does not implement `Fail`",
    note = "implement `Fail` manually, use `impl_fail!({Self})`, or wrap a std error with `Error::from_std`"
)]
pub trait Fail: Any + Debug + Display + Send + Sync {
    /// Probe for [`CompositeError`].
    #[inline]
    fn as_composite(&self) -> Option<&dyn CompositeError> {
        None
    }

    /// Probe for [`ErrorWithLocation`].
    #[inline]
    fn as_located(&self) -> Option<&dyn ErrorWithLocation> {
        None
    }

    /// Probe for [`ErrorWithStackTrace`].
    #[inline]
    fn as_traced(&self) -> Option<&dyn ErrorWithStackTrace> {
        None
    }

    /// Probe for [`ErrorWrapper`].
    #[inline]
    fn as_wrapper(&self) -> Option<&dyn ErrorWrapper> {
        None
    }

    /// Probe for [`ErrorWithFields`].
    #[inline]
    fn as_fields(&self) -> Option<&dyn ErrorWithFields> {
        None
    }

    /// The type this value reports for type comparisons.
    ///
    /// Smart pointers forward to their pointee, so `Box<T>`, `&'static T`
    /// and `T` all report `T`.
    #[inline]
    fn runtime_type(&self) -> ErrorType {
        ErrorType::of::<Self>()
    }
}

macro_rules! forward_fail {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<F: Fail + ?Sized> Fail for $ptr {
                #[inline]
                fn as_composite(&self) -> Option<&dyn CompositeError> {
                    (**self).as_composite()
                }

                #[inline]
                fn as_located(&self) -> Option<&dyn ErrorWithLocation> {
                    (**self).as_located()
                }

                #[inline]
                fn as_traced(&self) -> Option<&dyn ErrorWithStackTrace> {
                    (**self).as_traced()
                }

                #[inline]
                fn as_wrapper(&self) -> Option<&dyn ErrorWrapper> {
                    (**self).as_wrapper()
                }

                #[inline]
                fn as_fields(&self) -> Option<&dyn ErrorWithFields> {
                    (**self).as_fields()
                }

                #[inline]
                fn runtime_type(&self) -> ErrorType {
                    (**self).runtime_type()
                }
            }
        )*
    };
}

forward_fail!(Box<F>, Arc<F>, &'static F);
