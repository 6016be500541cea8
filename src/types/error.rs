use crate::query;
use crate::traits::Fail;
use crate::types::{ErrorType, Foreign, PlainError};
use std::any::Any;
use std::borrow::Cow;
use std::fmt::{self, Debug, Display};
use std::ops::Deref;
use std::sync::Arc;

/// Shared handle to a chained error value.
///
/// Cloning is cheap and keeps identity: two handles are the *same error*
/// when [`Error::ptr_eq`] says so, which is what [`is_error`](crate::is_error)
/// searches for. The handle dereferences to the underlying [`Fail`] value so
/// capability probes can be called directly.
///
/// `{}` prints the error's own message, `{:#}` prints the full chain with
/// stack traces (see [`get_full_details`](crate::get_full_details)).
///
/// # Examples
///
/// ```
/// use fail_chain::{new, Error, PlainError};
///
/// let plain = Error::new(PlainError::new("timeout"));
/// let decorated = new(plain.clone());
///
/// assert_eq!(decorated.to_string(), "timeout");
/// assert!(!Error::ptr_eq(&plain, &decorated));
/// assert!(Error::ptr_eq(decorated.original_error(), &plain));
/// ```
#[derive(Clone)]
#[must_use]
pub struct Error {
    inner: Arc<dyn Fail>,
}

impl Error {
    /// Wraps a value without capturing location or stack trace.
    #[inline]
    pub fn new<F: Fail>(fail: F) -> Self {
        Self { inner: Arc::new(fail) }
    }

    /// Wraps a plain text message without capturing location or stack trace.
    #[inline]
    pub fn msg<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self::new(PlainError::new(message))
    }

    /// Wraps a foreign [`std::error::Error`]. The result reports `E` as its
    /// runtime type and exposes no capabilities.
    #[inline]
    pub fn from_std<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::new(Foreign::new(error))
    }

    /// Whether both handles refer to the same error value.
    #[inline]
    pub fn ptr_eq(a: &Error, b: &Error) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Borrows the underlying value.
    #[inline]
    pub fn as_fail(&self) -> &dyn Fail {
        &*self.inner
    }

    /// Innermost non-wrapper error. See [`get_original_error`](crate::get_original_error).
    #[inline]
    pub fn original_error(&self) -> &Error {
        query::get_original_error(self)
    }

    /// Type of the original error. See [`get_runtime_type`](crate::get_runtime_type).
    #[inline]
    pub fn runtime_type(&self) -> ErrorType {
        query::get_runtime_type(self)
    }

    /// Iterates over this error and its causes.
    #[inline]
    pub fn chain(&self) -> query::Chain<'_> {
        query::chain(self)
    }

    /// Borrows the original error as `T`, looking through decorators.
    ///
    /// Errors added with [`Error::from_std`] are reachable under their own
    /// type as well as under [`Foreign<T>`](Foreign).
    ///
    /// # Examples
    ///
    /// ```
    /// use fail_chain::{new, Error};
    /// use std::fmt;
    ///
    /// let err = new(Error::from_std(fmt::Error));
    /// assert!(err.downcast_ref::<fmt::Error>().is_some());
    /// ```
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        let original: &dyn Any = self.original_error().as_fail();
        original
            .downcast_ref::<T>()
            .or_else(|| original.downcast_ref::<Foreign<T>>().map(Foreign::get_ref))
    }

    /// Whether the original error is a `T`, looking through decorators.
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }
}

impl<F: Fail> From<F> for Error {
    #[inline]
    fn from(fail: F) -> Self {
        Self::new(fail)
    }
}

impl Deref for Error {
    type Target = dyn Fail;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_str(&query::get_full_details(self));
        }
        Display::fmt(&*self.inner, f)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.inner, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        query::get_inner(self).map(|inner| inner as &(dyn std::error::Error + 'static))
    }
}
