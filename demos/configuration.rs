//! Flattened configuration through the provider.
//!
//! Run with: cargo run --example configuration

use std::error::Error;
use taml::{ConfigurationProvider, TamlConfigurationSource};

const CONFIG: &str = "\
Logging
\tLogLevel
\t\tDefault\tInformation
\t\tMicrosoft\tWarning
ConnectionStrings
\tDefault\tServer=db;Database=app
AllowedHosts
\t0\texample.com
\t1\tapi.example.com";

fn main() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("appsettings.taml");
    std::fs::write(&path, CONFIG)?;

    let mut provider = TamlConfigurationSource::new(&path).build();
    provider.load()?;

    println!("Flattened keys:");
    for key in provider.keys() {
        println!("  {} = {}", key, provider.try_get(key).unwrap_or("<null>"));
    }

    assert_eq!(provider.try_get("logging:loglevel:default"), Some("Information"));
    assert_eq!(provider.try_get("AllowedHosts:1"), Some("api.example.com"));

    // A missing optional file loads as empty instead of failing
    let mut optional = TamlConfigurationSource::new(dir.path().join("local.taml"))
        .optional(true)
        .build();
    optional.load()?;
    println!("\nOptional file entries: {}", optional.keys().len());

    Ok(())
}
