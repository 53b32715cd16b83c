//! Parsing, reading and writing a TAML document.
//!
//! Run with: cargo run --example simple

use taml::{parse, taml, Document, Value};

fn main() {
    let text = "name\tdemo\nserver\n\thost\tlocalhost\n\tport\t8080\n\ttls\tfalse";
    let mut doc = parse(text);

    // Keys ignore case; values are read as whatever type is asked for
    let server = doc.get_section("Server").expect("server section");
    let port: u16 = server.get_value("PORT");
    let tls: bool = server.get_value("tls");
    let name: String = doc.get_value("name");
    println!("{} listens on {} (tls: {})", name, port, tls);

    // Missing or unconvertible values fall back to the default
    println!("timeout = {}", server.get_value::<u32>("timeout"));

    if let Some(server) = doc.get_section_mut("server") {
        server.set_value("port", 9090);
        server.set_value("workers", vec![1, 2]);
    }
    doc.set_value("owner", Value::Null);
    doc.set_value("extra", taml!({ "region": "eu-west", "zones": ["a", "b"] }));

    println!("\nTAML output:\n{}\n", doc);

    let reparsed: Document = parse(&doc.to_string());
    assert_eq!(
        reparsed.get_section("server").map(|s| s.get_value::<u16>("port")),
        Some(9090)
    );
    println!("✓ Round-trip successful");
}
