//! The value model every TAML entry belongs to.
//!
//! At rest a value is one of four shapes:
//!
//! - [`Value::Null`]: an explicit absence, stored through [`Document::set_value`](crate::Document::set_value)
//! - [`Value::Scalar`]: a leaf, kept in its raw form and interpreted on read
//! - [`Value::Section`]: a nested [`Document`]
//! - [`Value::List`]: an ordered sequence, only ever built programmatically
//!
//! Parsing text yields only sections and text scalars. Integers, floats and
//! booleans appear when a caller stores them directly; typed reads go through
//! [`Coerce`](crate::Coerce) either way.
//!
//! ## Examples
//!
//! ```rust
//! use taml::{Scalar, Value};
//!
//! let text = Value::from("hello");
//! let number = Value::from(42);
//!
//! assert_eq!(text, "hello");
//! assert_eq!(number.as_scalar(), Some(&Scalar::Integer(42)));
//! assert!(Value::Null.is_null());
//! ```

use crate::{Document, KeyMap};
use chrono::{DateTime, NaiveDate, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed TAML value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Scalar(Scalar),
    Section(Document),
    List(Vec<Value>),
}

/// A leaf value in its stored form.
///
/// Text produced by the parser is always [`Scalar::String`]; the other variants
/// hold primitives a caller stored directly. [`Display`](fmt::Display) gives the
/// canonical text used both for rendering and for text-based coercion.
///
/// # Examples
///
/// ```rust
/// use taml::Scalar;
///
/// assert_eq!(Scalar::Integer(42).to_string(), "42");
/// assert_eq!(Scalar::Float(2.5).to_string(), "2.5");
/// assert_eq!(Scalar::Bool(true).to_string(), "true");
/// assert_eq!(Scalar::String("abc".into()).to_string(), "abc");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    /// Short name of the stored variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Scalar::String(_) => "string",
            Scalar::Integer(_) => "integer",
            Scalar::Float(_) => "float",
            Scalar::Bool(_) => "boolean",
        }
    }

    /// Returns the text if this scalar is stored as a string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => f.write_str(s),
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Float(fl) => write!(f, "{}", fl),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a scalar.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Returns `true` if the value is a nested section.
    #[inline]
    #[must_use]
    pub const fn is_section(&self) -> bool {
        matches!(self, Value::Section(_))
    }

    /// Returns `true` if the value is a list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Short name of the stored shape, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Scalar(scalar) => scalar.kind(),
            Value::Section(_) => "section",
            Value::List(_) => "list",
        }
    }

    /// If the value is a scalar, returns it.
    #[inline]
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// If the value is a string scalar, returns the text without copying.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taml::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// If the value is a section, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_section(&self) -> Option<&Document> {
        match self {
            Value::Section(doc) => Some(doc),
            _ => None,
        }
    }

    /// If the value is a section, returns a mutable reference to it.
    #[inline]
    pub fn as_section_mut(&mut self) -> Option<&mut Document> {
        match self {
            Value::Section(doc) => Some(doc),
            _ => None,
        }
    }

    /// If the value is a list, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Consumes the value, returning the section it holds.
    #[must_use]
    pub fn into_section(self) -> Option<Document> {
        match self {
            Value::Section(doc) => Some(doc),
            _ => None,
        }
    }

    /// Canonical text of a leaf: the scalar's rendering, or `None` for null.
    ///
    /// Sections and lists have no single-line text form and also return `None`.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        self.as_scalar().map(Scalar::to_string)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Scalar(Scalar::String(s)) => serializer.serialize_str(s),
            Value::Scalar(Scalar::Integer(i)) => serializer.serialize_i64(*i),
            Value::Scalar(Scalar::Float(f)) => serializer.serialize_f64(*f),
            Value::Scalar(Scalar::Bool(b)) => serializer.serialize_bool(*b),
            Value::Section(doc) => doc.serialize(serializer),
            Value::List(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid TAML value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(element) = seq.next_element()? {
                    items.push(element);
                }
                Ok(Value::List(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut doc = Document::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    doc.set_value(key, value);
                }
                Ok(Value::Section(doc))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Scalar(Scalar::Bool(value))
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Scalar(Scalar::Integer(i64::from(value)))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

/// Values beyond `i64::MAX` are kept as their decimal text.
impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Value::Scalar(Scalar::Integer(i)),
            Err(_) => Value::Scalar(Scalar::String(value.to_string())),
        }
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Scalar(Scalar::Float(f64::from(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(Scalar::Float(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(Scalar::String(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Scalar(Scalar::String(value.to_rfc3339()))
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Scalar(Scalar::String(value.format("%Y-%m-%d").to_string()))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Value::Section(value)
    }
}

impl From<KeyMap<Value>> for Value {
    fn from(value: KeyMap<Value>) -> Self {
        Value::Section(Document::from(value))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
