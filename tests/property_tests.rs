//! Property-based tests for the round-trip guarantee
//!
//! Trees are generated through the programmatic API only, serialized, parsed
//! back and compared structurally.

use proptest::prelude::*;
use sgf_tree::{from_str, to_string, to_string_pretty, GameTree, Node, Value};

fn identifier() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9]{0,3}"
}

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<String>().prop_map(Value::from),
        "[a-s]{2}".prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1000.0f64..1000.0).prop_map(Value::from),
        Just(Value::from("with ] and \\ inside")),
    ]
}

fn node() -> impl Strategy<Value = Node> {
    prop::collection::vec((identifier(), prop::collection::vec(value(), 1..4)), 0..5)
        .prop_map(|properties| properties.into_iter().collect())
}

fn game_tree() -> impl Strategy<Value = GameTree> {
    let leaf = prop::collection::vec(node(), 1..4).prop_map(GameTree::from_sequence);
    leaf.prop_recursive(4, 32, 3, |inner| {
        (
            prop::collection::vec(node(), 1..4),
            prop::collection::vec(inner, 0..3),
        )
            .prop_map(|(sequence, variations)| {
                GameTree::from_sequence(sequence).with_variations(variations)
            })
    })
}

fn roundtrip(tree: &GameTree) -> bool {
    match to_string(tree) {
        Ok(serialized) => match from_str(&serialized) {
            Ok(collection) => collection.len() == 1 && collection[0] == *tree,
            Err(e) => {
                eprintln!("Parse failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

proptest! {
    #[test]
    fn prop_tree_roundtrip(tree in game_tree()) {
        prop_assert!(roundtrip(&tree));
    }

    #[test]
    fn prop_pretty_parses_to_same_tree(tree in game_tree()) {
        let pretty = to_string_pretty(&tree).unwrap();
        let collection = from_str(&pretty).unwrap();
        prop_assert_eq!(&collection[0], &tree);
    }

    #[test]
    fn prop_value_text_roundtrip(text in any::<String>()) {
        let mut node = Node::new();
        node.set("C", text.as_str());
        let collection = from_str(&to_string(&GameTree::from(node)).unwrap()).unwrap();
        prop_assert_eq!(collection[0][0].first("C").and_then(Value::as_str), Some(text.as_str()));
    }

    #[test]
    fn prop_parser_never_panics(input in "[();\\[\\]A-Za-z \\\\]{0,40}") {
        let _ = from_str(&input);
    }
}
