//! Loading a TAML file into a serde struct, synchronously and with tokio.
//!
//! Run with: cargo run --example typed_config

use serde::{Deserialize, Serialize};
use std::error::Error;
use taml::{from_document, load_from_file_async, parse_strict, save_to_file_async, to_document};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct AppConfig {
    name: String,
    debug: bool,
    database: Database,
    replicas: Vec<String>,
    motd: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Database {
    host: String,
    port: u16,
    pool_size: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let text = "Name\tinventory\nDebug\tTRUE\ndatabase\n\thost\tdb.internal\n\tport\t5432\n\tpool_size\t16\nreplicas\n\t0\treplica-a\n\t1\treplica-b\nmotd\t";

    // Strict parsing rejects space indentation and level jumps
    let doc = parse_strict(text)?;
    let config: AppConfig = from_document(doc)?;
    println!("{:#?}", config);

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("app.taml");
    save_to_file_async(&path, &to_document(&config)?).await?;
    println!("\nSaved:\n{}", std::fs::read_to_string(&path)?);

    let loaded: AppConfig = from_document(load_from_file_async(&path).await?)?;
    assert_eq!(loaded, config);
    println!("\n✓ Round-trip through {} successful", path.display());

    match parse_strict("database\n  host\tdb") {
        Ok(_) => println!("unexpectedly valid"),
        Err(err) => println!("\nStrict parse error: {}", err),
    }

    Ok(())
}
