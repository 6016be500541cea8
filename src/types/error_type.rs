use std::any::TypeId;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

/// Runtime identity of an error's type.
///
/// Two `ErrorType`s are equal exactly when they describe the same Rust type.
/// The name is carried along for rendering only.
#[derive(Debug, Clone, Copy)]
pub struct ErrorType {
    id: TypeId,
    name: &'static str,
}

impl ErrorType {
    /// The `ErrorType` describing `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self { id: TypeId::of::<T>(), name: std::any::type_name::<T>() }
    }

    /// The underlying [`TypeId`].
    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, as reported by [`std::any::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ErrorType {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ErrorType {}

impl Hash for ErrorType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
