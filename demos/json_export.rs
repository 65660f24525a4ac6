//! Exporting an SGF record to JSON through serde.
//!
//! Run with: cargo run --example json_export

use sgf_tree::{from_str, to_string, Collection};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let collection = from_str("(;FF[4]SZ[19]AB[dd][pp];W[dp](;B[pd])(;B[qd]))")?;

    let json = serde_json::to_string_pretty(&collection)?;
    println!("JSON:\n{}\n", json);

    let back: Collection = serde_json::from_str(&json)?;
    assert_eq!(back, collection);
    println!("SGF from JSON: {}", to_string(&back)?);

    Ok(())
}
