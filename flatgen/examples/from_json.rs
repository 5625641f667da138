//! Generates a C++ header from a resolved schema stored as JSON.
//!
//! Run with: `cargo run --example from_json -- SCHEMA.json [NAME]`
//!
//! The header is printed to stdout; `NAME` selects the include guard
//! (default: the file stem of `SCHEMA.json`).

use flatgen::prelude::*;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: from_json SCHEMA.json [NAME]");
        std::process::exit(2);
    };
    let name = args.next().unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "schema".to_string())
    });

    let mut schema = Schema::from_json_file(&path)?;
    eprintln!(
        "Loaded {} enums and {} structs/tables from {}",
        schema.enums.len(),
        schema.structs.len(),
        path.display()
    );

    print!("{}", generate_header(&mut schema, &name));
    Ok(())
}
