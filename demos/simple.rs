//! Parse an SGF record, inspect it and write it back.
//!
//! Run with: cargo run --example simple

use sgf_tree::{from_str, to_string};
use std::error::Error;

const RECORD: &str = "(;FF[4]GM[1]SZ[19]KM[6.5]PB[Shusaku]PW[Gennan Inseki]
  ;B[qd];W[dc];B[pq];W[oc];B[cp];W[qo])";

fn main() -> Result<(), Box<dyn Error>> {
    let collection = from_str(RECORD)?;
    let game = &collection[0];
    println!("{}", game);

    let root = &game[0];
    println!("Black: {}", root.first("PB").map(|v| v.to_text()).unwrap_or_default());
    println!("White: {}", root.first("PW").map(|v| v.to_text()).unwrap_or_default());
    if let Some(komi) = root.first("KM").and_then(|v| v.as_f64()) {
        println!("Komi:  {}", komi);
    }

    for (number, node) in game.main_line().skip(1).enumerate() {
        for (color, values) in node {
            println!("  move {:>3}: {} {}", number + 1, color, values[0]);
        }
    }

    // Layout whitespace is dropped, everything else is kept
    let text = to_string(&collection)?;
    println!("\nCanonical form:\n{}", text);
    assert_eq!(from_str(&text)?, collection);
    println!("✓ Round-trip successful");

    Ok(())
}
