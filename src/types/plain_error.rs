use crate::traits::Fail;
use crate::types::ErrorType;
use std::borrow::Cow;
use std::fmt::{self, Debug, Display};

/// An error that is nothing but a message.
///
/// This is what [`news`](crate::news) and [`newf!`](crate::newf) decorate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlainError {
    message: Cow<'static, str>,
}

impl PlainError {
    /// An error that displays as `message`.
    #[inline]
    pub fn new<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self { message: message.into() }
    }

    /// The message this error displays.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for PlainError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PlainError {}

impl Fail for PlainError {}

/// Adapter placing a foreign [`std::error::Error`] into a chain.
///
/// The adapter is transparent: it prints like `E`, reports `E` as its runtime
/// type and has no capabilities. The foreign error's own `source()` chain is
/// not followed; attach a cause explicitly with
/// [`new_with_inner`](crate::new_with_inner) when needed.
pub struct Foreign<E> {
    error: E,
}

impl<E> Foreign<E> {
    /// Wraps `error`.
    #[inline]
    pub fn new(error: E) -> Self {
        Self { error }
    }

    /// Borrows the wrapped error.
    #[inline]
    pub fn get_ref(&self) -> &E {
        &self.error
    }

    /// Unwraps the foreign error.
    #[inline]
    pub fn into_inner(self) -> E {
        self.error
    }
}

impl<E: Debug> Debug for Foreign<E> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.error, f)
    }
}

impl<E: Display> Display for Foreign<E> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.error, f)
    }
}

impl<E> Fail for Foreign<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[inline]
    fn runtime_type(&self) -> ErrorType {
        ErrorType::of::<E>()
    }
}
