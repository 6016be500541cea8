use fail_chain::traits::{CompositeError, ErrorWithFields, Fail};
use fail_chain::{impl_fail, Error, Fields};
use std::fmt;

/// Cause-bearing error used to build chains in tests.
#[derive(Debug)]
pub struct MyError {
    pub message: String,
    pub inner: Error,
}

impl MyError {
    pub fn new(message: &str, inner: Error) -> Self {
        Self { message: message.to_string(), inner }
    }
}

impl fmt::Display for MyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl CompositeError for MyError {
    fn inner_error(&self) -> Option<&Error> {
        Some(&self.inner)
    }
}

impl Fail for MyError {
    fn as_composite(&self) -> Option<&dyn CompositeError> {
        Some(self)
    }
}

/// Error without any capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not found")
    }
}

impl_fail!(NotFound);

/// Field-bearing error.
#[derive(Debug)]
pub struct RequestFailed {
    pub fields: Fields,
}

impl fmt::Display for RequestFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request failed ({})", self.fields)
    }
}

impl ErrorWithFields for RequestFailed {
    fn fields(&self) -> Option<&Fields> {
        Some(&self.fields)
    }
}

impl Fail for RequestFailed {
    fn as_fields(&self) -> Option<&dyn ErrorWithFields> {
        Some(self)
    }
}

/// Foreign error implemented with `thiserror`, without `Fail`.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("disk full: {0} bytes requested")]
    DiskFull(u64),
    #[error("read-only volume")]
    ReadOnly,
}

/// Normalizes path separators so location checks work on every platform.
pub fn normalized(text: &str) -> String {
    text.replace('\\', "/")
}
