//! TAML emission.
//!
//! Two layers live here:
//!
//! - [`Serializer`] walks a [`Document`] depth-first and writes tab-indented,
//!   tab-delimited lines. It is the inverse of the parser.
//! - [`ValueSerializer`] is a `serde` serializer that turns any `Serialize` type
//!   into a [`Value`] tree, which the first layer then renders.
//!
//! ## Rendering rules
//!
//! - a scalar entry becomes `key<TAB>text`, and null becomes `key<TAB>`;
//! - a section entry becomes a bare `key` line followed by its children, one tab
//!   deeper;
//! - a list entry is written like a section whose keys are the element indices.
//!
//! Lines are joined with the configured [`LineEnding`](crate::LineEnding) and no
//! escaping is applied to keys or values.
//!
//! ## Examples
//!
//! ```rust
//! use taml::{Document, Serializer, TamlOptions};
//!
//! let mut server = Document::new();
//! server.set_value("host", "localhost");
//! server.set_value("port", 8080);
//!
//! let mut doc = Document::new();
//! doc.set_value("name", "demo");
//! doc.set_value("server", server);
//!
//! let mut serializer = Serializer::new(TamlOptions::default());
//! serializer.serialize_document(&doc);
//! assert_eq!(
//!     serializer.into_inner(),
//!     "name\tdemo\nserver\n\thost\tlocalhost\n\tport\t8080"
//! );
//! ```

use crate::{Document, Error, Result, Scalar, TamlOptions, Value};
use serde::{ser, Serialize};

/// Writes a [`Document`] tree as TAML text.
pub struct Serializer {
    output: String,
    options: TamlOptions,
    lines: usize,
}

impl Serializer {
    pub fn new(options: TamlOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
            lines: 0,
        }
    }

    /// Finishes the output, adding the trailing line ending if one was asked for.
    pub fn into_inner(mut self) -> String {
        if self.options.trailing_newline && self.lines > 0 {
            self.output.push_str(self.options.line_ending.as_str());
        }
        self.output
    }

    /// Appends every entry of `doc` at the top level.
    pub fn serialize_document(&mut self, doc: &Document) {
        self.write_entries(doc, 0);
    }

    fn write_entries(&mut self, doc: &Document, depth: usize) {
        for (key, value) in doc.iter() {
            self.write_entry(key, value, depth);
        }
    }

    fn write_entry(&mut self, key: &str, value: &Value, depth: usize) {
        self.start_line(depth);
        self.output.push_str(key);

        match value {
            Value::Null => self.output.push('\t'),
            Value::Scalar(scalar) => {
                self.output.push('\t');
                self.output.push_str(&scalar.to_string());
            }
            Value::Section(section) => self.write_entries(section, depth + 1),
            Value::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.write_entry(&index.to_string(), item, depth + 1);
                }
            }
        }
    }

    fn start_line(&mut self, depth: usize) {
        if self.lines > 0 {
            self.output.push_str(self.options.line_ending.as_str());
        }
        self.lines += 1;
        for _ in 0..depth {
            self.output.push('\t');
        }
    }
}

/// Renders `doc` as TAML text with the given options.
#[must_use]
pub fn render(doc: &Document, options: &TamlOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.serialize_document(doc);
    serializer.into_inner()
}

impl Document {
    /// Renders the document with custom options.
    ///
    /// [`Display`](std::fmt::Display) uses the defaults: `\n` between lines and
    /// no trailing newline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taml::{parse, LineEnding, TamlOptions};
    ///
    /// let doc = parse("a\t1\nb\t2");
    /// let options = TamlOptions::new().with_line_ending(LineEnding::CrLf);
    /// assert_eq!(doc.to_string_with_options(&options), "a\t1\r\nb\t2");
    /// ```
    #[must_use]
    pub fn to_string_with_options(&self, options: &TamlOptions) -> String {
        render(self, options)
    }
}

/// Serializes any `Serialize` value into a [`Value`] tree.
///
/// Structs and maps become sections, sequences become lists, and enum variants
/// carrying data become a one-entry section keyed by the variant name.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    doc: Document,
    current_key: Option<String>,
    variant: Option<&'static str>,
}

/// Wraps `content` as `{ variant: content }`.
fn tagged(variant: &'static str, content: Value) -> Value {
    let mut doc = Document::new();
    doc.set_value(variant, content);
    Value::Section(doc)
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Scalar(Scalar::Bool(v)))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Scalar(Scalar::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Scalar(Scalar::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v
            .iter()
            .map(|&b| Value::Scalar(Scalar::Integer(b as i64)))
            .collect();
        Ok(Value::List(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::from(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, Some(variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(None))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(Some(variant)))
    }
}

impl SerializeVec {
    fn new(capacity: usize, variant: Option<&'static str>) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
            variant,
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn finish(self) -> Value {
        let list = Value::List(self.vec);
        match self.variant {
            Some(variant) => tagged(variant, list),
            None => list,
        }
    }
}

impl SerializeMap {
    fn new(variant: Option<&'static str>) -> Self {
        SerializeMap {
            doc: Document::new(),
            current_key: None,
            variant,
        }
    }

    fn finish(self) -> Value {
        let section = Value::Section(self.doc);
        match self.variant {
            Some(variant) => tagged(variant, section),
            None => section,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            Value::Scalar(Scalar::String(s)) => {
                self.current_key = Some(s);
                Ok(())
            }
            other => Err(Error::unsupported_type(&format!(
                "map keys must be strings, found {}",
                other.kind()
            ))),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.doc.set_value(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.doc.set_value(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.doc.set_value(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

/// Converts any `Serialize` value into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use taml::{to_value, Value};
///
/// assert_eq!(to_value(&42).unwrap(), Value::from(42));
/// assert!(to_value(&vec!["a", "b"]).unwrap().is_list());
/// ```
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// Converts a `Serialize` value into a [`Document`].
///
/// Only values that serialize as a map or struct have a document form; anything
/// else is reported as [`Error::UnsupportedType`].
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use taml::to_document;
///
/// #[derive(Serialize)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// let doc = to_document(&Server { host: "localhost".into(), port: 8080 }).unwrap();
/// assert_eq!(doc["host"], "localhost");
/// assert_eq!(doc.get_value::<u16>("port"), 8080);
///
/// assert!(to_document(&42).is_err());
/// ```
pub fn to_document<T: Serialize + ?Sized>(value: &T) -> Result<Document> {
    match to_value(value)? {
        Value::Section(doc) => Ok(doc),
        other => Err(Error::unsupported_type(&format!(
            "only maps and structs have a document form, found {}",
            other.kind()
        ))),
    }
}
