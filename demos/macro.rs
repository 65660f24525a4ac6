//! Building game trees with the sgf_node! macro.
//!
//! Run with: cargo run --example macro

use sgf_tree::{sgf_node, to_string_pretty, GameTree};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let root = sgf_node! {
        "FF" => 4,
        "GM" => 1,
        "SZ" => 9,
        "KM" => 5.5,
        "AB" => ["cc", "gc"],
        "AW" => ["cg", "gg"],
    };

    let mut tree = GameTree::from(root);
    tree.push_node(sgf_node! { "B" => "ee", "C" => "Take the center." });
    tree.push_node(sgf_node! { "W" => "ec" });

    // Multi-valued properties can also grow one value at a time
    tree[2].append("TR", "ee");
    tree[2].append("TR", "ec");

    println!("{}", to_string_pretty(&tree)?);
    Ok(())
}
