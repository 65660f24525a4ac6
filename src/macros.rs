/// Builds a [`Node`](crate::Node) from `identifier => values` pairs.
///
/// Each pair is applied with [`Node::set`](crate::Node::set), in order, so a
/// scalar becomes a single value and an array or vector becomes a multi-valued
/// property.
///
/// ```rust
/// use sgf_tree::{sgf_node, Value};
///
/// let root = sgf_node! {
///     "FF" => 4,
///     "KM" => 6.5,
///     "AB" => ["aa", "bb"],
/// };
///
/// assert_eq!(root.keys().collect::<Vec<_>>(), vec!["FF", "KM", "AB"]);
/// assert_eq!(root["AB"], [Value::from("aa"), Value::from("bb")]);
/// assert!(sgf_node! {}.is_empty());
/// ```
#[macro_export]
macro_rules! sgf_node {
    // Handle empty node
    () => {
        $crate::Node::new()
    };

    ($($id:expr => $values:expr),+ $(,)?) => {{
        let mut node = $crate::Node::new();
        $(
            node.set($id, $values);
        )+
        node
    }};
}
