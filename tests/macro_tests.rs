use sgf_tree::{sgf_node, Node, Number, Value};

#[test]
fn test_sgf_node_macro_empty() {
    let node = sgf_node! {};
    assert_eq!(node, Node::new());
}

#[test]
fn test_sgf_node_macro_scalars() {
    let node = sgf_node! { "SZ" => 19, "KM" => 6.5, "PB" => "Honinbo Shusaku" };
    assert_eq!(node.first("SZ"), Some(&Value::Number(Number::Integer(19))));
    assert_eq!(node.first("KM"), Some(&Value::Number(Number::Float(6.5))));
    assert_eq!(node.first("PB"), Some(&Value::from("Honinbo Shusaku")));
}

#[test]
fn test_sgf_node_macro_multi_value() {
    let node = sgf_node! {
        "AB" => ["aa", "bb"],
        "AW" => vec!["cc".to_string()],
    };
    assert_eq!(node["AB"].len(), 2);
    assert_eq!(node["AW"], [Value::from("cc")]);
}

#[test]
fn test_sgf_node_macro_keeps_order() {
    let node = sgf_node! { "W" => "aa", "C" => "x", "B" => "bb" };
    assert_eq!(node.keys().collect::<Vec<_>>(), vec!["W", "C", "B"]);
}

#[test]
fn test_sgf_node_macro_last_assignment_wins() {
    let node = sgf_node! { "C" => "first", "C" => "second" };
    assert_eq!(node.len(), 1);
    assert_eq!(node["C"], [Value::from("second")]);
}

#[test]
fn test_sgf_node_macro_runtime_identifiers() {
    let id = String::from("TR");
    let points = vec![Value::from("aa"), Value::from("ab")];
    let node = sgf_node! { id.clone() => points.clone() };
    assert_eq!(node.get(&id), Some(points.as_slice()));
}
