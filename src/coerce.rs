//! Best-effort conversion from stored values to requested Rust types.
//!
//! [`Coerce`] is the dispatch table behind [`Document::get_value`](crate::Document::get_value)
//! and the typed reads of the serde [`Deserializer`](crate::de::Deserializer).
//! Each implementation follows the same order:
//!
//! 1. a scalar already stored as the requested type is returned directly;
//! 2. otherwise the scalar's canonical text is parsed as the target type;
//! 3. anything that does not convert yields `None`, and the caller decides the fallback.
//!
//! Null, sections and lists never convert to a scalar type.
//!
//! ## Examples
//!
//! ```rust
//! use taml::{Coerce, Value};
//!
//! assert_eq!(i32::coerce(&Value::from("42")), Some(42));
//! assert_eq!(String::coerce(&Value::from(42)), Some("42".to_string()));
//! assert_eq!(bool::coerce(&Value::from("TRUE")), Some(true));
//! assert_eq!(i32::coerce(&Value::from("not a number")), None);
//! ```

use crate::{Document, Scalar, Value};
use chrono::{DateTime, NaiveDate, Utc};
use num_bigint::BigInt;
use std::str::FromStr;

/// Conversion from a stored [`Value`] into `Self`.
pub trait Coerce: Sized {
    /// Converts `value`, or returns `None` when it does not represent a `Self`.
    fn coerce(value: &Value) -> Option<Self>;
}

/// Parses the scalar's canonical text, ignoring surrounding whitespace.
fn parse_text<T: FromStr>(scalar: &Scalar) -> Option<T> {
    match scalar {
        Scalar::String(s) => s.trim().parse().ok(),
        other => other.to_string().parse().ok(),
    }
}

macro_rules! coerce_integer {
    ($($t:ty),*) => {
        $(
            impl Coerce for $t {
                fn coerce(value: &Value) -> Option<Self> {
                    match value.as_scalar()? {
                        Scalar::Integer(i) => <$t>::try_from(*i).ok(),
                        other => parse_text(other),
                    }
                }
            }
        )*
    };
}

coerce_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! coerce_float {
    ($($t:ty),*) => {
        $(
            impl Coerce for $t {
                fn coerce(value: &Value) -> Option<Self> {
                    match value.as_scalar()? {
                        Scalar::Float(f) => Some(*f as $t),
                        other => parse_text(other),
                    }
                }
            }
        )*
    };
}

coerce_float!(f32, f64);

impl Coerce for bool {
    fn coerce(value: &Value) -> Option<Self> {
        match value.as_scalar()? {
            Scalar::Bool(b) => Some(*b),
            other => {
                let text = other.to_string();
                let text = text.trim();
                if text.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if text.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            }
        }
    }
}

impl Coerce for String {
    fn coerce(value: &Value) -> Option<Self> {
        value.to_text()
    }
}

impl Coerce for char {
    fn coerce(value: &Value) -> Option<Self> {
        let text = value.to_text()?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// Accepts RFC 3339 timestamps, converted to UTC.
impl Coerce for DateTime<Utc> {
    fn coerce(value: &Value) -> Option<Self> {
        let text = value.as_scalar()?.to_string();
        DateTime::parse_from_rfc3339(text.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Accepts `YYYY-MM-DD`.
impl Coerce for NaiveDate {
    fn coerce(value: &Value) -> Option<Self> {
        let text = value.as_scalar()?.to_string();
        NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
    }
}

impl Coerce for BigInt {
    fn coerce(value: &Value) -> Option<Self> {
        match value.as_scalar()? {
            Scalar::Integer(i) => Some(BigInt::from(*i)),
            other => parse_text(other),
        }
    }
}

/// Null reads as `Some(None)`; a value that does not convert reads as `None`,
/// so [`Document::get_value`](crate::Document::get_value) returns `None` in both cases.
impl<T: Coerce> Coerce for Option<T> {
    fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::coerce(other).map(Some),
        }
    }
}

impl Coerce for Value {
    fn coerce(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl Coerce for Document {
    fn coerce(value: &Value) -> Option<Self> {
        value.as_section().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_from_text() {
        assert_eq!(i32::coerce(&Value::from("42")), Some(42));
        assert_eq!(i64::coerce(&Value::from(" -7 ")), Some(-7));
        assert_eq!(u8::coerce(&Value::from("300")), None);
        assert_eq!(i32::coerce(&Value::from("3.5")), None);
    }

    #[test]
    fn test_integer_direct_and_range_checked() {
        assert_eq!(i32::coerce(&Value::from(42i64)), Some(42));
        assert_eq!(u16::coerce(&Value::from(-1)), None);
        assert_eq!(i8::coerce(&Value::from(1000)), None);
    }

    #[test]
    fn test_float() {
        assert_eq!(f64::coerce(&Value::from("3.25")), Some(3.25));
        assert_eq!(f64::coerce(&Value::from(2)), Some(2.0));
        assert_eq!(f32::coerce(&Value::from(1.5f64)), Some(1.5));
        assert_eq!(f64::coerce(&Value::from("abc")), None);
    }

    #[test]
    fn test_bool() {
        assert_eq!(bool::coerce(&Value::from(true)), Some(true));
        assert_eq!(bool::coerce(&Value::from("True")), Some(true));
        assert_eq!(bool::coerce(&Value::from("false")), Some(false));
        assert_eq!(bool::coerce(&Value::from("yes")), None);
        assert_eq!(bool::coerce(&Value::from(1)), None);
    }

    #[test]
    fn test_string_renders_scalars() {
        assert_eq!(String::coerce(&Value::from(42)), Some("42".to_string()));
        assert_eq!(String::coerce(&Value::from(true)), Some("true".to_string()));
        assert_eq!(String::coerce(&Value::Null), None);
        assert_eq!(String::coerce(&Value::Section(Document::new())), None);
    }

    #[test]
    fn test_char() {
        assert_eq!(char::coerce(&Value::from("x")), Some('x'));
        assert_eq!(char::coerce(&Value::from("xy")), None);
        assert_eq!(char::coerce(&Value::from(7)), Some('7'));
    }

    #[test]
    fn test_dates() {
        let dt = DateTime::<Utc>::coerce(&Value::from("2024-01-15T10:30:00+02:00")).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-15T08:30:00+00:00");

        let date = NaiveDate::coerce(&Value::from("2024-01-15")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        assert!(NaiveDate::coerce(&Value::from("15/01/2024")).is_none());
    }

    #[test]
    fn test_bigint() {
        let big = BigInt::coerce(&Value::from("123456789012345678901234567890")).unwrap();
        assert_eq!(big.to_string(), "123456789012345678901234567890");
        assert_eq!(BigInt::coerce(&Value::from(5)), Some(BigInt::from(5)));
    }

    #[test]
    fn test_option() {
        assert_eq!(Option::<i32>::coerce(&Value::Null), Some(None));
        assert_eq!(Option::<i32>::coerce(&Value::from("5")), Some(Some(5)));
        assert_eq!(Option::<i32>::coerce(&Value::from("five")), None);
    }

    #[test]
    fn test_sections_and_lists_do_not_coerce_to_scalars() {
        let list = Value::from(vec![1, 2]);
        assert_eq!(i32::coerce(&list), None);
        assert_eq!(bool::coerce(&list), None);

        let section = Value::Section(Document::parse("a\t1"));
        assert!(Document::coerce(&section).is_some());
        assert!(Document::coerce(&Value::from("a")).is_none());
    }
}
