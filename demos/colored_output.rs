//! Pretty and highlighted output for terminals.
//!
//! Run with: cargo run --example colored_output

use sgf_tree::{from_str, print, to_string_with_options, SgfOptions};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let collection = from_str("(;GM[1]C[root](;B[aa]C[a \\] b](;W[bb])(;W[cc]))(;B[dd]))")?;

    println!("Plain:");
    print(io::stdout(), &collection, false)?;

    println!("\nColored:");
    print(io::stdout(), &collection, true)?;

    println!("\nPretty with 4-space indent:");
    let options = SgfOptions::pretty().with_indent(4);
    println!("{}", to_string_with_options(&collection, options)?);

    Ok(())
}
