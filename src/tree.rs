//! Game trees and collections.
//!
//! A [`GameTree`] holds a main-line `sequence` of nodes plus child
//! `variations`. When variations exist, the first one continues the main line;
//! the others are alternatives branching from the last node of `sequence`.
//! Index-based access follows that rule and walks the main path as if it were
//! one flat sequence.
//!
//! A [`Collection`] is the ordered list of root trees found in one document.
//!
//! ## Examples
//!
//! ```rust
//! use sgf_tree::{sgf_node, GameTree};
//!
//! let mut tree = GameTree::from_sequence(vec![sgf_node! { "KM" => 6.5 }]);
//! tree.variations = vec![
//!     GameTree::from_sequence(vec![sgf_node! { "C" => "first" }]),
//!     GameTree::from_sequence(vec![sgf_node! { "C" => "second" }]),
//! ];
//!
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree[1].first("C").unwrap().to_text(), "first");
//! assert!(tree.get(2).is_none());
//! ```

use crate::{Error, Node, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A node sequence with branching variations.
///
/// Equality and dropping walk the variations iteratively, so a tree nested
/// thousands of levels deep is handled without exhausting the call stack.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameTree {
    pub sequence: Vec<Node>,
    #[serde(default)]
    pub variations: Vec<GameTree>,
}

impl GameTree {
    /// Creates an empty tree, useful for incremental construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_tree::GameTree;
    ///
    /// let tree = GameTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.to_string(), "0-node game tree with 0 variation(s)");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree from a main-line sequence without variations.
    #[must_use]
    pub fn from_sequence(sequence: Vec<Node>) -> Self {
        GameTree {
            sequence,
            variations: Vec::new(),
        }
    }

    /// Sets the variations, replacing any existing ones.
    #[must_use]
    pub fn with_variations(mut self, variations: Vec<GameTree>) -> Self {
        self.variations = variations;
        self
    }

    /// Returns the number of nodes on the main path.
    ///
    /// This counts `sequence` plus, recursively, the main path of the first
    /// variation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.main_line().count()
    }

    /// Returns `true` if the main path contains no node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main_line().next().is_none()
    }

    /// Returns the node at `index` on the main path.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Node> {
        let mut tree = self;
        let mut index = index;
        loop {
            if let Some(node) = tree.sequence.get(index) {
                return Some(node);
            }
            index -= tree.sequence.len();
            tree = tree.variations.first()?;
        }
    }

    /// Returns the node at `index` on the main path for editing.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        let mut tree = self;
        let mut index = index;
        loop {
            let len = tree.sequence.len();
            if index < len {
                return tree.sequence.get_mut(index);
            }
            index -= len;
            tree = tree.variations.first_mut()?;
        }
    }

    /// Returns the node at `index` on the main path, or an
    /// [`Error::IndexOutOfRange`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_tree::{GameTree, Node, Error};
    ///
    /// let tree = GameTree::from_sequence(vec![Node::new()]);
    /// assert!(tree.node(0).is_ok());
    /// assert_eq!(tree.node(3), Err(Error::IndexOutOfRange { index: 3, len: 1 }));
    /// ```
    pub fn node(&self, index: usize) -> Result<&Node> {
        self.get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.len()))
    }

    /// Returns an iterator over the nodes of the main path.
    pub fn main_line(&self) -> MainLine<'_> {
        MainLine {
            tree: Some(self),
            position: 0,
        }
    }

    /// Appends a node to this tree's own sequence.
    pub fn push_node(&mut self, node: Node) {
        self.sequence.push(node);
    }

    /// Adds a variation after the existing ones.
    ///
    /// The first variation added becomes the continuation of the main path.
    pub fn push_variation(&mut self, variation: GameTree) {
        self.variations.push(variation);
    }
}

/// Iterator over the main path of a [`GameTree`].
#[derive(Debug, Clone)]
pub struct MainLine<'a> {
    tree: Option<&'a GameTree>,
    position: usize,
}

impl<'a> Iterator for MainLine<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        loop {
            let tree = self.tree?;
            if let Some(node) = tree.sequence.get(self.position) {
                self.position += 1;
                return Some(node);
            }
            self.tree = tree.variations.first();
            self.position = 0;
        }
    }
}

impl Index<usize> for GameTree {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        match self.get(index) {
            Some(node) => node,
            None => panic!(
                "index {} out of range for game tree with {} node(s) on its main path",
                index,
                self.len()
            ),
        }
    }
}

impl IndexMut<usize> for GameTree {
    fn index_mut(&mut self, index: usize) -> &mut Node {
        if self.get(index).is_none() {
            panic!(
                "index {} out of range for game tree with {} node(s) on its main path",
                index,
                self.len()
            );
        }
        match self.get_mut(index) {
            Some(node) => node,
            None => unreachable!("main path changed between lookups"),
        }
    }
}

impl PartialEq for GameTree {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.sequence != b.sequence || a.variations.len() != b.variations.len() {
                return false;
            }
            pending.extend(a.variations.iter().zip(&b.variations));
        }
        true
    }
}

impl Eq for GameTree {}

impl Drop for GameTree {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.variations);
        while let Some(mut tree) = pending.pop() {
            pending.append(&mut tree.variations);
        }
    }
}

impl fmt::Display for GameTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-node game tree with {} variation(s)",
            self.len(),
            self.variations.len()
        )
    }
}

impl From<Node> for GameTree {
    fn from(node: Node) -> Self {
        GameTree::from_sequence(vec![node])
    }
}

/// The ordered root trees of one SGF document.
///
/// # Examples
///
/// ```rust
/// use sgf_tree::from_str;
///
/// let collection = from_str("(;GM[1])(;GM[1])").unwrap();
/// assert_eq!(collection.len(), 2);
/// assert_eq!(collection.to_string(), "2 game tree(s)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection(Vec<GameTree>);

impl Collection {
    #[must_use]
    pub fn new() -> Self {
        Collection(Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameTree> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, GameTree> {
        self.0.iter_mut()
    }

    pub fn push(&mut self, tree: GameTree) {
        self.0.push(tree);
    }

    /// Returns the first game of the collection.
    #[must_use]
    pub fn first(&self) -> Option<&GameTree> {
        self.0.first()
    }

    #[must_use]
    pub fn trees(&self) -> &[GameTree] {
        &self.0
    }

    #[must_use]
    pub fn into_trees(self) -> Vec<GameTree> {
        self.0
    }
}

impl Index<usize> for Collection {
    type Output = GameTree;

    fn index(&self, index: usize) -> &GameTree {
        &self.0[index]
    }
}

impl IndexMut<usize> for Collection {
    fn index_mut(&mut self, index: usize) -> &mut GameTree {
        &mut self.0[index]
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} game tree(s)", self.0.len())
    }
}

impl From<Vec<GameTree>> for Collection {
    fn from(trees: Vec<GameTree>) -> Self {
        Collection(trees)
    }
}

impl From<GameTree> for Collection {
    fn from(tree: GameTree) -> Self {
        Collection(vec![tree])
    }
}

impl IntoIterator for Collection {
    type Item = GameTree;
    type IntoIter = std::vec::IntoIter<GameTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a GameTree;
    type IntoIter = std::slice::Iter<'a, GameTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<GameTree> for Collection {
    fn from_iter<T: IntoIterator<Item = GameTree>>(iter: T) -> Self {
        Collection(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(text: &str) -> Node {
        let mut node = Node::new();
        node.set("C", text);
        node
    }

    fn branching() -> GameTree {
        GameTree::from_sequence(vec![comment("n0")]).with_variations(vec![
            GameTree::from_sequence(vec![comment("n1"), comment("n2")])
                .with_variations(vec![GameTree::from(comment("n3"))]),
            GameTree::from(comment("alt")),
        ])
    }

    #[test]
    fn test_index_follows_first_variation() {
        let tree = branching();
        let path: Vec<String> = tree
            .main_line()
            .map(|node| node.first("C").unwrap().to_text())
            .collect();
        assert_eq!(path, vec!["n0", "n1", "n2", "n3"]);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree[3].first("C").unwrap().to_text(), "n3");
        assert!(tree.get(4).is_none());
    }

    #[test]
    fn test_alternative_unreachable_by_index() {
        let tree = branching();
        assert!(tree
            .main_line()
            .all(|node| node.first("C").unwrap().to_text() != "alt"));
    }

    #[test]
    fn test_get_mut_edits_nested_node() {
        let mut tree = branching();
        tree[2].set("C", "edited");
        assert_eq!(
            tree.variations[0].sequence[1].first("C").unwrap().to_text(),
            "edited"
        );
    }

    #[test]
    fn test_empty_sequence_skips_to_variation() {
        let tree = GameTree::new().with_variations(vec![GameTree::from(comment("only"))]);
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree[0].first("C").unwrap().to_text(), "only");
    }

    #[test]
    fn test_node_out_of_range() {
        let tree = branching();
        assert_eq!(tree.node(9), Err(Error::IndexOutOfRange { index: 9, len: 4 }));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let tree = GameTree::new();
        let _ = &tree[0];
    }

    #[test]
    fn test_display() {
        assert_eq!(
            branching().to_string(),
            "4-node game tree with 2 variation(s)"
        );
    }

    #[test]
    #[should_panic(expected = "index 4 out of range for game tree with 4 node(s)")]
    fn test_index_mut_out_of_range_panics() {
        let mut tree = branching();
        tree[4] = Node::new();
    }

    #[test]
    fn test_index_mut_replaces_node() {
        let mut tree = branching();
        tree[3] = comment("replaced");
        assert_eq!(tree.variations[0].variations[0], GameTree::from(comment("replaced")));
    }

    fn chain(depth: usize, last: &str) -> GameTree {
        let mut tree = GameTree::from(comment(last));
        for _ in 1..depth {
            tree = GameTree::from(comment("step")).with_variations(vec![tree]);
        }
        tree
    }

    #[test]
    fn test_deep_chain_equality_and_drop() {
        let depth = 50_000;
        let a = chain(depth, "end");
        let b = chain(depth, "end");
        let c = chain(depth, "other");
        assert!(a == b);
        assert!(a != c);
        assert_eq!(a.len(), depth);

        let mut d = chain(depth, "end");
        d[depth - 1] = comment("edited");
        assert!(d == chain(depth, "edited"));
    }
}
