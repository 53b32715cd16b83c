use std::collections::HashMap;
use taml::{parse, Document, Value};

#[test]
fn test_new_document_is_empty() {
    let doc = Document::new();
    assert!(doc.is_empty());
    assert_eq!(doc.len(), 0);
}

#[test]
fn test_from_source_mapping() {
    let mut data = HashMap::new();
    data.insert("key1".to_string(), Value::from("value1"));
    data.insert("key2".to_string(), Value::from(42));

    let doc = Document::from(data);
    assert_eq!(doc.len(), 2);
    assert_eq!(doc["key1"], "value1");
    assert_eq!(doc["key2"], Value::from(42));
}

#[test]
fn test_indexer_get_and_set() {
    let mut doc = Document::new();
    doc["key"] = Value::from("oldValue");
    doc["key"] = Value::from("newValue");

    assert_eq!(doc["key"], "newValue");
    assert!(doc["nonexistent"].is_null());
    assert!(!doc.contains_key("nonexistent"));
}

#[test]
fn test_try_get_value() {
    let mut doc = Document::new();
    doc.set_value("key", "value");

    assert_eq!(doc.try_get_value("KEY"), Some(&Value::from("value")));
    assert_eq!(doc.try_get_value("nonexistent"), None);
}

#[test]
fn test_get_value_conversions() {
    let mut doc = Document::new();
    doc.set_value("text", "value");
    doc.set_value("int", 42);
    doc.set_value("int_text", "42");
    doc.set_value("flag", true);
    doc.set_value("flag_text", "False");
    doc.set_value("ratio", "2.5");

    assert_eq!(doc.get_value::<String>("text"), "value");
    assert_eq!(doc.get_value::<i32>("int"), 42);
    assert_eq!(doc.get_value::<String>("int"), "42");
    assert_eq!(doc.get_value::<i32>("int_text"), 42);
    assert!(doc.get_value::<bool>("flag"));
    assert!(!doc.get_value::<bool>("flag_text"));
    assert_eq!(doc.get_value::<f64>("ratio"), 2.5);
}

#[test]
fn test_get_value_falls_back_to_default() {
    let mut doc = Document::new();
    doc.set_value("key", "not a number");
    doc.set_value("section", Document::new());

    assert_eq!(doc.get_value::<i32>("key"), 0);
    assert_eq!(doc.get_value::<String>("nonexistent"), "");
    assert_eq!(doc.get_value::<Option<String>>("nonexistent"), None);
    assert_eq!(doc.get_value::<String>("section"), "");
    assert_eq!(doc.get_value_or("key", 7), 7);
}

#[test]
fn test_set_value_overwrites_ignoring_case() {
    let mut doc = Document::new();
    doc.set_value("Key", "first");
    doc.set_value("KEY", "second");

    assert_eq!(doc.len(), 1);
    assert_eq!(doc["key"], "second");
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["Key"]);
}

#[test]
fn test_set_null_value() {
    let mut doc = Document::new();
    doc.set_value("key", Value::Null);

    assert!(doc.contains_key("key"));
    assert!(doc["key"].is_null());
}

#[test]
fn test_remove() {
    let mut doc = parse("a\t1\nb\t2\nc\t3");
    assert_eq!(doc.remove("B"), Some(Value::from("2")));
    assert_eq!(doc.remove("b"), None);
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["a", "c"]);
}

#[test]
fn test_sections() {
    let mut doc = parse("server\n\thost\tlocalhost");
    assert!(doc.get_section("missing").is_none());
    assert!(doc.get_section("server:host").is_none());

    doc.get_section_mut("SERVER")
        .unwrap()
        .set_value("port", 8080);
    assert_eq!(doc.to_string(), "server\n\thost\tlocalhost\n\tport\t8080");
}

#[test]
fn test_keys_keep_insertion_order() {
    let doc = parse("zeta\t1\nalpha\t2\nmiddle\n\tx\t3");
    assert_eq!(
        doc.keys().collect::<Vec<_>>(),
        vec!["zeta", "alpha", "middle"]
    );
}

#[test]
fn test_equality_ignores_order_and_case() {
    let left = parse("a\t1\nB\t2");
    let right = parse("b\t2\nA\t1");
    assert_eq!(left, right);

    let different = parse("a\t1\nb\t3");
    assert_ne!(left, different);
}

#[test]
fn test_iteration() {
    let doc = parse("a\t1\nb\t2");
    let pairs: Vec<(String, String)> = doc
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_text().unwrap()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string())
        ]
    );

    let owned: Vec<(String, Value)> = doc.into_iter().collect();
    assert_eq!(owned.len(), 2);
}

#[test]
fn test_collect_from_pairs() {
    let doc: Document = vec![("name", "demo"), ("env", "prod")].into_iter().collect();
    assert_eq!(doc.to_string(), "name\tdemo\nenv\tprod");
}
