//! serde deserialization from a parsed [`Value`] tree.
//!
//! TAML text stores every leaf as text, so typed reads go through the
//! [`Coerce`] table instead of requiring an exact stored type: `"42"` fills a
//! `u16` field and `"TRUE"` fills a `bool`. A leaf that does not convert is a
//! [`Error::TypeMismatch`].
//!
//! Shapes map as follows:
//!
//! - structs and maps read from sections; struct fields match keys ignoring case;
//! - sequences read from lists, or from the values of a section in order, which
//!   is how a rendered list comes back from text;
//! - `Option<T>` reads `None` from null and from empty text;
//! - enums read unit variants from text and data-carrying variants from a
//!   one-entry section keyed by the variant name.
//!
//! ## Examples
//!
//! ```rust
//! use serde::Deserialize;
//! use taml::{from_document, parse};
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Server {
//!     host: String,
//!     port: u16,
//!     tags: Vec<String>,
//! }
//!
//! let doc = parse("Host\tlocalhost\nport\t8080\ntags\n\t0\tweb\n\t1\tapi");
//! let server: Server = from_document(doc).unwrap();
//! assert_eq!(server.port, 8080);
//! assert_eq!(server.tags, vec!["web", "api"]);
//! ```

use crate::{Coerce, Document, Error, Result, Scalar, Value};
use serde::de::{self, DeserializeOwned};
use serde::forward_to_deserialize_any;

/// A deserializer that reads Rust values out of an owned [`Value`].
pub struct Deserializer {
    value: Value,
}

impl Deserializer {
    pub fn new(value: Value) -> Self {
        Deserializer { value }
    }

    pub fn from_document(doc: Document) -> Self {
        Deserializer::new(Value::Section(doc))
    }

    /// Coerces the held value, reporting a mismatch when it does not convert.
    fn coerce<T: Coerce>(&self, expected: &str) -> Result<T> {
        T::coerce(&self.value).ok_or_else(|| Error::type_mismatch(expected, self.value.kind()))
    }

    /// Null and empty text both stand for "no value".
    fn is_empty_leaf(&self) -> bool {
        match &self.value {
            Value::Null => true,
            Value::Scalar(Scalar::String(s)) => s.is_empty(),
            _ => false,
        }
    }
}

macro_rules! deserialize_coerced {
    ($($method:ident => $visit:ident: $t:ty, $expected:literal;)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                let value: $t = self.coerce($expected)?;
                visitor.$visit(value)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for Deserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Scalar(Scalar::String(s)) => visitor.visit_string(s),
            Value::Scalar(Scalar::Integer(i)) => visitor.visit_i64(i),
            Value::Scalar(Scalar::Float(f)) => visitor.visit_f64(f),
            Value::Scalar(Scalar::Bool(b)) => visitor.visit_bool(b),
            Value::Section(doc) => visitor.visit_map(MapDeserializer::new(doc, &[])),
            Value::List(items) => visitor.visit_seq(SeqDeserializer::new(items)),
        }
    }

    deserialize_coerced! {
        deserialize_bool => visit_bool: bool, "boolean";
        deserialize_i8 => visit_i8: i8, "i8";
        deserialize_i16 => visit_i16: i16, "i16";
        deserialize_i32 => visit_i32: i32, "i32";
        deserialize_i64 => visit_i64: i64, "i64";
        deserialize_i128 => visit_i128: i128, "i128";
        deserialize_u8 => visit_u8: u8, "u8";
        deserialize_u16 => visit_u16: u16, "u16";
        deserialize_u32 => visit_u32: u32, "u32";
        deserialize_u64 => visit_u64: u64, "u64";
        deserialize_u128 => visit_u128: u128, "u128";
        deserialize_f32 => visit_f32: f32, "f32";
        deserialize_f64 => visit_f64: f64, "f64";
        deserialize_char => visit_char: char, "char";
        deserialize_string => visit_string: String, "string";
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.is_empty_leaf() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.is_empty_leaf() {
            visitor.visit_unit()
        } else {
            Err(Error::type_mismatch("unit", self.value.kind()))
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::List(items) => visitor.visit_seq(SeqDeserializer::new(items)),
            Value::Section(doc) => {
                let items = doc.into_iter().map(|(_, value)| value).collect();
                visitor.visit_seq(SeqDeserializer::new(items))
            }
            other => Err(Error::type_mismatch("sequence", other.kind())),
        }
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Section(doc) => visitor.visit_map(MapDeserializer::new(doc, &[])),
            other => Err(Error::type_mismatch("section", other.kind())),
        }
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Section(doc) => visitor.visit_map(MapDeserializer::new(doc, fields)),
            other => Err(Error::type_mismatch("section", other.kind())),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Scalar(Scalar::String(variant)) => {
                visitor.visit_enum(EnumDeserializer::new(variant.trim().to_string(), None))
            }
            Value::Section(doc) if doc.len() == 1 => {
                let mut entries = doc.into_iter();
                match entries.next() {
                    Some((variant, value)) => {
                        visitor.visit_enum(EnumDeserializer::new(variant, Some(value)))
                    }
                    None => Err(Error::custom("enum section has no variant")),
                }
            }
            other => Err(Error::type_mismatch("enum", other.kind())),
        }
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(Deserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: <Document as IntoIterator>::IntoIter,
    value: Option<Value>,
    fields: &'static [&'static str],
}

impl MapDeserializer {
    fn new(doc: Document, fields: &'static [&'static str]) -> Self {
        MapDeserializer {
            iter: doc.into_iter(),
            value: None,
            fields,
        }
    }

    /// Maps a stored key onto the struct field it names, ignoring case.
    fn field_name(&self, key: String) -> String {
        let folded = key.to_lowercase();
        self.fields
            .iter()
            .find(|field| field.to_lowercase() == folded)
            .map_or(key, |field| field.to_string())
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                let key = self.field_name(key);
                seed.deserialize(KeyDeserializer(key)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(Deserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<Value>,
}

impl EnumDeserializer {
    fn new(variant: String, value: Option<Value>) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(KeyDeserializer(self.variant))?;
        let visitor = VariantDeserializer { value: self.value };
        Ok((variant, visitor))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            None | Some(Value::Null) => Ok(()),
            Some(Value::Scalar(Scalar::String(s))) if s.is_empty() => Ok(()),
            Some(other) => Err(Error::type_mismatch("unit variant", other.kind())),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(Deserializer::new(value)),
            None => Err(Error::type_mismatch("newtype variant", "string")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(value) => de::Deserializer::deserialize_seq(Deserializer::new(value), visitor),
            None => Err(Error::type_mismatch("tuple variant", "string")),
        }
    }

    fn struct_variant<V>(self, fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Section(doc)) => visitor.visit_map(MapDeserializer::new(doc, fields)),
            Some(other) => Err(Error::type_mismatch("struct variant", other.kind())),
            None => Err(Error::type_mismatch("struct variant", "string")),
        }
    }
}

/// Deserializes a `T` from a [`Value`].
///
/// # Examples
///
/// ```rust
/// use taml::{from_value, Value};
///
/// let port: u16 = from_value(Value::from("8080")).unwrap();
/// assert_eq!(port, 8080);
/// ```
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    T::deserialize(Deserializer::new(value))
}

/// Deserializes a `T` from a [`Document`].
pub fn from_document<T: DeserializeOwned>(doc: Document) -> Result<T> {
    T::deserialize(Deserializer::from_document(doc))
}

/// Hands map keys and variant names to serde as plain strings.
struct KeyDeserializer(String);

impl<'de> de::Deserializer<'de> for KeyDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_string(self.0)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Limits {
        max_connections: u32,
        ratio: f64,
        enabled: bool,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Config {
        name: String,
        limits: Limits,
        nickname: Option<String>,
        missing: Option<u8>,
    }

    #[test]
    fn test_struct_from_text() {
        let doc = parse(
            "name\tdemo\nlimits\n\tmax_connections\t100\n\tratio\t0.5\n\tenabled\tTrue\nnickname\t",
        );
        let config: Config = from_document(doc).unwrap();

        assert_eq!(
            config,
            Config {
                name: "demo".into(),
                limits: Limits {
                    max_connections: 100,
                    ratio: 0.5,
                    enabled: true,
                },
                nickname: None,
                missing: None,
            }
        );
    }

    #[test]
    fn test_field_names_ignore_case() {
        let doc = parse("MAX_CONNECTIONS\t5\nRatio\t1\nEnabled\tfalse");
        let limits: Limits = from_document(doc).unwrap();
        assert_eq!(limits.max_connections, 5);
        assert_eq!(limits.ratio, 1.0);
        assert!(!limits.enabled);
    }

    #[test]
    fn test_type_mismatch() {
        let doc = parse("max_connections\tlots\nratio\t1\nenabled\ttrue");
        let err = from_document::<Limits>(doc).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }), "{:?}", err);
    }

    #[test]
    fn test_sequence_from_section_values() {
        let doc = parse("items\n\t0\ta\n\t1\tb\n\t2\tc");
        let map: HashMap<String, Vec<String>> = from_document(doc).unwrap();
        assert_eq!(map["items"], vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sequence_from_list() {
        let value = Value::List(vec![Value::from("1"), Value::from(2)]);
        let numbers: Vec<i64> = from_value(value).unwrap();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[derive(Deserialize, Debug, PartialEq)]
    enum Mode {
        Fast,
        Limited(u32),
        Custom { level: u8 },
        Pair(u8, u8),
    }

    #[test]
    fn test_enums() {
        assert_eq!(from_value::<Mode>(Value::from("Fast")).unwrap(), Mode::Fast);

        let doc = parse("Limited\t3");
        assert_eq!(from_document::<Mode>(doc).unwrap(), Mode::Limited(3));

        let doc = parse("Custom\n\tlevel\t2");
        assert_eq!(
            from_document::<Mode>(doc).unwrap(),
            Mode::Custom { level: 2 }
        );

        let doc = parse("Pair\n\t0\t1\n\t1\t2");
        assert_eq!(from_document::<Mode>(doc).unwrap(), Mode::Pair(1, 2));
    }

    #[test]
    fn test_any_keeps_stored_types() {
        let mut doc = Document::new();
        doc.set_value("n", 7);
        doc.set_value("s", "text");
        let value: serde_json::Value = from_document(doc).unwrap();
        assert_eq!(value, serde_json::json!({"n": 7, "s": "text"}));
    }
}
