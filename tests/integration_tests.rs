use taml::{parse, parse_strict, validate, Document, Error, LineEnding, TamlOptions, Value};

const APP_CONFIG: &str = "\
application\tinventory
version\t2.4.1
debug\tfalse
database
\thost\tdb.internal
\tport\t5432
\tcredentials
\t\tuser\tadmin
\t\tpassword\t
\tpool
\t\tmin\t2
\t\tmax\t20
logging
\tlevel\tinfo
\ttargets
\t\t0\tstdout
\t\t1\tfile";

#[test]
fn test_realistic_config() {
    let doc = parse(APP_CONFIG);

    assert_eq!(
        doc.keys().collect::<Vec<_>>(),
        vec!["application", "version", "debug", "database", "logging"]
    );
    assert_eq!(doc["application"], "inventory");
    assert!(!doc.get_value::<bool>("debug"));

    let database = doc.get_section("database").unwrap();
    assert_eq!(database.get_value::<u16>("port"), 5432);

    let credentials = database.get_section("credentials").unwrap();
    assert_eq!(credentials["user"], "admin");
    assert_eq!(credentials["password"], "");

    let pool = database.get_section("pool").unwrap();
    assert_eq!(pool.get_value::<u32>("min"), 2);
    assert_eq!(pool.get_value::<u32>("max"), 20);
}

#[test]
fn test_realistic_config_round_trips_exactly() {
    let doc = parse(APP_CONFIG);
    assert_eq!(doc.to_string(), APP_CONFIG);
    assert_eq!(parse(&doc.to_string()), doc);
}

#[test]
fn test_realistic_config_flattens() {
    let flat = parse(APP_CONFIG).flatten(None);

    assert_eq!(flat.len(), 12);
    assert_eq!(flat["database:credentials:user"], "admin");
    assert_eq!(flat["Database:Pool:Max"], "20");
    assert_eq!(flat["logging:targets:1"], "file");
    assert!(validate(APP_CONFIG).is_valid());
}

#[test]
fn test_section_then_sibling_key() {
    let doc = parse("a\n\tb\tvalue\nc\tother");
    assert_eq!(doc.get_section("a").unwrap()["b"], "value");
    assert_eq!(doc["c"], "other");
}

#[test]
fn test_multiple_levels_close_at_once() {
    let doc = parse("a\n\tb\n\t\tc\n\t\t\td\tdeep\ntop\tyes");

    let d = doc
        .get_section("a")
        .and_then(|a| a.get_section("b"))
        .and_then(|b| b.get_section("c"))
        .map(|c| c["d"].clone());
    assert_eq!(d, Some(Value::from("deep")));
    assert_eq!(doc["top"], "yes");
}

#[test]
fn test_value_with_spaces_and_symbols() {
    let doc = parse("greeting\tHello, World!\npath\t/usr/local/bin\nurl\thttps://x.io/a?b=c");
    assert_eq!(doc["greeting"], "Hello, World!");
    assert_eq!(doc["path"], "/usr/local/bin");
    assert_eq!(doc["url"], "https://x.io/a?b=c");
}

#[test]
fn test_unicode_keys_and_values() {
    let doc = parse("名前\t太郎\nCAFÉ\tcrème");
    assert_eq!(doc["名前"], "太郎");
    assert_eq!(doc["café"], "crème");
}

#[test]
fn test_null_round_trips_as_empty_text() {
    let mut doc = Document::new();
    doc.set_value("unset", Value::Null);

    let text = doc.to_string();
    assert_eq!(text, "unset\t");

    let back = parse(&text);
    assert_eq!(back["unset"], "");
    assert_eq!(back.to_string(), text);
}

#[test]
fn test_programmatic_types_render_canonically() {
    let mut doc = Document::new();
    doc.set_value("int", -12);
    doc.set_value("float", 0.25);
    doc.set_value("yes", true);
    doc.set_value("list", vec![1, 2]);

    let text = doc.to_string();
    assert_eq!(text, "int\t-12\nfloat\t0.25\nyes\ttrue\nlist\n\t0\t1\n\t1\t2");

    let back = parse(&text);
    assert_eq!(back.get_value::<i64>("int"), -12);
    assert_eq!(back.get_value::<f64>("float"), 0.25);
    assert!(back.get_value::<bool>("yes"));
    assert_eq!(back.get_section("list").unwrap()["1"], "2");
}

#[test]
fn test_crlf_output_parses_back() {
    let doc = parse(APP_CONFIG);
    let options = TamlOptions::new()
        .with_line_ending(LineEnding::CrLf)
        .with_trailing_newline(true);

    let text = doc.to_string_with_options(&options);
    assert!(text.ends_with("\r\n"));
    assert_eq!(parse(&text), doc);
}

#[test]
fn test_strict_parse_rejects_what_parse_forgives() {
    let text = "root\n\t\tskipped\t1";
    assert_eq!(parse(text).get_section("root").unwrap()["skipped"], "1");

    match parse_strict(text) {
        Err(Error::Syntax {
            line, line_text, ..
        }) => {
            assert_eq!(line, 2);
            assert_eq!(line_text.as_deref(), Some("\t\tskipped\t1"));
        }
        other => panic!("Expected syntax error, got {:?}", other),
    }

    assert_eq!(parse_strict(APP_CONFIG).unwrap(), parse(APP_CONFIG));
}

#[test]
fn test_validation_collects_every_problem() {
    let report = validate("a\t1\n  b\t2\nc\n\t\td\t3\ne\tx\ty");
    let lines: Vec<usize> = report.errors().iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![2, 4, 5]);
}

#[test]
fn test_repeated_carriage_returns_round_trip() {
    let once = parse("a\tb\r\r");
    assert_eq!(once["a"], "b");
    assert_eq!(parse(&once.to_string()), once);

    let once = parse("s\r\r\n\tx\t1\ny\t2");
    assert_eq!(once.keys().collect::<Vec<_>>(), vec!["s", "y"]);
    assert_eq!(once.get_section("s").unwrap().get_value::<i32>("x"), 1);
    assert_eq!(parse(&once.to_string()), once);
}
