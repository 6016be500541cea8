//! Macros for building chained errors.
//!
//! - [`macro@crate::newf`] - Formats a message and decorates it, like
//!   [`news`](crate::news) with `format!` arguments.
//! - [`macro@crate::impl_fail`] - Opts a `Display + Debug` type into
//!   [`Fail`](crate::traits::Fail) without any capabilities.
//!
//! # Examples
//!
//! ```
//! use fail_chain::{get_type, impl_fail, newf, new};
//!
//! #[derive(Debug)]
//! struct Timeout(u64);
//!
//! impl std::fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "timed out after {}ms", self.0)
//!     }
//! }
//!
//! impl_fail!(Timeout);
//!
//! let err = new(Timeout(250));
//! assert_eq!(err.to_string(), "timed out after 250ms");
//! assert_eq!(get_type(&err).name(), std::any::type_name::<Timeout>());
//!
//! let err = newf!("shard {} unavailable", 7);
//! assert_eq!(err.to_string(), "shard 7 unavailable");
//! ```

/// Creates a decorated [`PlainError`](crate::PlainError) from a format string.
///
/// Accepts the same arguments as [`format!`]. The recorded location is the
/// line invoking the macro.
///
/// # Examples
///
/// ```
/// use fail_chain::newf;
///
/// let err = newf!("Error {} occurred.", 1);
/// assert_eq!(err.to_string(), "Error 1 occurred.");
/// ```
#[macro_export]
macro_rules! newf {
    ($($arg:tt)*) => {
        $crate::new_fmt(::core::format_args!($($arg)*))
    };
}

/// Implements [`Fail`](crate::traits::Fail) for a type with no capabilities.
///
/// The type must be `Display + Debug + Send + Sync + 'static`.
///
/// # Examples
///
/// ```
/// use fail_chain::{impl_fail, Error};
///
/// #[derive(Debug)]
/// struct NotFound;
///
/// impl std::fmt::Display for NotFound {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("not found")
///     }
/// }
///
/// impl_fail!(NotFound);
///
/// let err = Error::new(NotFound);
/// assert!(err.is::<NotFound>());
/// ```
#[macro_export]
macro_rules! impl_fail {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::traits::Fail for $type {}
        )+
    };
}
