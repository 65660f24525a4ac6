//! Walking the main path and the alternatives of a game tree.
//!
//! Run with: cargo run --example variations

use sgf_tree::{from_str, GameTree};
use std::error::Error;

const RECORD: &str = "(;GM[1]SZ[9]
  ;B[ee]
  (;W[cc];B[gg](;W[gc])(;W[cg]C[more solid]))
  (;W[gg]C[mirror go];B[cc]))";

fn describe(tree: &GameTree, depth: usize) {
    let moves: Vec<String> = tree
        .sequence
        .iter()
        .flat_map(|node| node.iter())
        .filter(|(id, _)| id.as_str() == "B" || id.as_str() == "W")
        .map(|(id, values)| format!("{}[{}]", id, values[0]))
        .collect();
    println!("{}{}", "  ".repeat(depth), moves.join(" "));

    for variation in &tree.variations {
        describe(variation, depth + 1);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let collection = from_str(RECORD)?;
    let tree = &collection[0];

    println!("Main path has {} node(s):", tree.len());
    for (i, node) in tree.main_line().enumerate() {
        println!("  [{}] {}", i, node);
    }

    println!("\nAll lines of play:");
    describe(tree, 0);

    // Index access follows the first variation at every branch
    let last = tree.node(tree.len() - 1)?;
    println!("\nLast main-path node: {}", last);
    Ok(())
}
