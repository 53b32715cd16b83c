/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Objects become sections, arrays become lists, `null` becomes
/// [`Value::Null`](crate::Value::Null), and any other expression goes through
/// `Value::from`.
///
/// # Examples
///
/// ```rust
/// use taml::{taml, Value};
///
/// let value = taml!({
///     "name": "demo",
///     "server": { "port": 8080, "tls": true },
///     "tags": ["web", "api"]
/// });
///
/// let doc = value.as_section().unwrap();
/// assert_eq!(doc["name"], "demo");
/// assert_eq!(doc.get_section("server").unwrap()["port"], Value::from(8080));
/// assert_eq!(doc.to_string(), "name\tdemo\nserver\n\tport\t8080\n\ttls\ttrue\ntags\n\t0\tweb\n\t1\tapi");
/// ```
#[macro_export]
macro_rules! taml {
    (null) => {
        $crate::Value::Null
    };

    ([]) => {
        $crate::Value::List(Vec::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::taml!($elem)),*])
    };

    ({}) => {
        $crate::Value::Section($crate::Document::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut doc = $crate::Document::new();
        $(
            doc.set_value($key, $crate::taml!($value));
        )*
        $crate::Value::Section(doc)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Document, Scalar, Value};

    #[test]
    fn test_taml_macro_leaves() {
        assert_eq!(taml!(null), Value::Null);
        assert_eq!(taml!(true), Value::Scalar(Scalar::Bool(true)));
        assert_eq!(taml!(42), Value::Scalar(Scalar::Integer(42)));
        assert_eq!(taml!(-7), Value::Scalar(Scalar::Integer(-7)));
        assert_eq!(taml!(3.5), Value::Scalar(Scalar::Float(3.5)));
        assert_eq!(taml!("hello"), "hello");

        let owned = String::from("owned");
        assert_eq!(taml!(owned), "owned");
    }

    #[test]
    fn test_taml_macro_lists() {
        assert_eq!(taml!([]), Value::List(Vec::new()));

        let list = taml!([1, "two", null]);
        let items = list.as_list().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], Value::from(1));
        assert_eq!(items[1], "two");
        assert!(items[2].is_null());
    }

    #[test]
    fn test_taml_macro_sections() {
        assert_eq!(taml!({}), Value::Section(Document::new()));

        let value = taml!({
            "Name": "Alice",
            "address": { "city": "Paris" },
        });
        let doc = value.as_section().unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc["name"], "Alice");
        assert_eq!(doc.get_section("ADDRESS").unwrap()["city"], "Paris");
    }
}
