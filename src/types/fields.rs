//! Structured key/value context carried by field-bearing errors.

use crate::types::ErrorVec;
use std::borrow::Cow;
use std::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single field value.
///
/// Serialized externally tagged (`{"UInt": 2}`), so every value reads back as
/// the variant it was written as.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(Cow<'static, str>),
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => Display::fmt(v, f),
            Self::Int(v) => Display::fmt(v, f),
            Self::UInt(v) => Display::fmt(v, f),
            Self::Float(v) => Display::fmt(v, f),
            Self::Str(v) => f.write_str(v),
        }
    }
}

macro_rules! field_value_from {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

field_value_from!(Bool: bool);
field_value_from!(Int: i8, i16, i32, i64);
field_value_from!(UInt: u8, u16, u32, u64);
field_value_from!(Float: f32, f64);
field_value_from!(Str: &'static str, String, Cow<'static, str>);

impl From<usize> for FieldValue {
    #[inline]
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<isize> for FieldValue {
    #[inline]
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

/// Ordered string-keyed fields.
///
/// Insertion order is kept. Setting an existing key replaces its value in
/// place.
///
/// # Examples
///
/// ```
/// use fail_chain::{FieldValue, Fields};
///
/// let fields = Fields::new().with("user_id", 42u64).with("retry", true);
///
/// assert_eq!(fields.get("user_id"), Some(&FieldValue::UInt(42)));
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields.to_string(), "user_id=42 retry=true");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fields {
    entries: ErrorVec<(Cow<'static, str>, FieldValue)>,
}

impl Fields {
    /// An empty set of fields.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<FieldValue>,
    {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<FieldValue>
    where
        K: Into<Cow<'static, str>>,
        V: Into<FieldValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// The value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether a value is stored under `key`.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<Cow<'static, str>>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (key, value) in iter {
            fields.insert(key, value);
        }
        fields
    }
}

impl Display for Fields {
    /// `key=value` pairs separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}
