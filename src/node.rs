//! Game nodes.
//!
//! A [`Node`] is one step of a game record: a set of properties, each mapping a
//! case-sensitive identifier such as `B` or `KM` to one or more [`Value`]s.
//!
//! Properties are kept in an [`IndexMap`] so that they are written back in the
//! order they were first inserted. That makes serialization deterministic and
//! lets a parsed record survive a round trip without reordering.
//!
//! ## Examples
//!
//! ```rust
//! use sgf_tree::Node;
//!
//! let mut node = Node::new();
//! node.set("KM", 6.5);
//! node.append("AB", "aa");
//! node.append("AB", "bb");
//!
//! assert_eq!(node.len(), 2);
//! assert_eq!(node["AB"].len(), 2);
//! assert_eq!(node.keys().collect::<Vec<_>>(), vec!["KM", "AB"]);
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::Index;

/// Conversion into the value sequence of a property.
///
/// A single scalar becomes a one-element sequence; vectors, arrays and slices
/// keep their order.
pub trait IntoValues {
    fn into_values(self) -> Vec<Value>;
}

macro_rules! impl_into_values_scalar {
    ($($ty:ty),*) => {
        $(
            impl IntoValues for $ty {
                fn into_values(self) -> Vec<Value> {
                    vec![Value::from(self)]
                }
            }
        )*
    };
}

impl_into_values_scalar!(
    Value,
    crate::Number,
    &str,
    String,
    &String,
    char,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f32,
    f64
);

impl<T: Into<Value>> IntoValues for Vec<T> {
    fn into_values(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Value>, const N: usize> IntoValues for [T; N] {
    fn into_values(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Value> + Clone> IntoValues for &[T] {
    fn into_values(self) -> Vec<Value> {
        self.iter().cloned().map(Into::into).collect()
    }
}

/// A single node of a game tree.
///
/// Every identifier occurs at most once and always maps to a non-empty,
/// ordered sequence of values. Two nodes are equal only if their properties
/// appear in the same order.
///
/// # Examples
///
/// ```rust
/// use sgf_tree::{Node, Value};
///
/// let node: Node = vec![("B", "aa"), ("C", "good move")].into_iter().collect();
/// assert_eq!(node.first("B"), Some(&Value::from("aa")));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "IndexMap<String, Vec<Value>>")]
pub struct Node(IndexMap<String, Vec<Value>>);

impl Node {
    /// Creates a node without properties.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_tree::Node;
    ///
    /// let node = Node::new();
    /// assert!(node.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Node(IndexMap::new())
    }

    /// Creates a node with room for `capacity` properties.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Node(IndexMap::with_capacity(capacity))
    }

    /// Replaces the whole value sequence of `id`.
    ///
    /// A scalar is wrapped into a one-element sequence. Setting an empty
    /// sequence removes the property. A replaced property keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_tree::Node;
    ///
    /// let mut node = Node::new();
    /// node.set("AB", ["aa", "bb"]);
    /// node.set("AB", "cc");
    /// assert_eq!(node["AB"].len(), 1);
    ///
    /// node.set("AB", Vec::<&str>::new());
    /// assert!(!node.contains("AB"));
    /// ```
    pub fn set(&mut self, id: impl Into<String>, values: impl IntoValues) -> Option<Vec<Value>> {
        let id = id.into();
        let values = values.into_values();
        if values.is_empty() {
            self.0.shift_remove(&id)
        } else {
            self.0.insert(id, values)
        }
    }

    /// Appends `value` to the sequence of `id`, creating the property if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_tree::{Node, Value};
    ///
    /// let mut node = Node::new();
    /// node.append("AB", "aa");
    /// node.append("AB", "bb");
    /// assert_eq!(node["AB"], [Value::from("aa"), Value::from("bb")]);
    /// ```
    pub fn append(&mut self, id: impl Into<String>, value: impl Into<Value>) {
        self.0.entry(id.into()).or_default().push(value.into());
    }

    /// Returns the values of `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&[Value]> {
        self.0.get(id).map(Vec::as_slice)
    }

    /// Returns the values of `id` for in-place editing.
    ///
    /// Leaving the vector empty breaks the non-empty invariant; prefer
    /// [`Node::set`] or [`Node::remove`] for that.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Vec<Value>> {
        self.0.get_mut(id)
    }

    /// Returns the first value of `id`.
    #[must_use]
    pub fn first(&self, id: &str) -> Option<&Value> {
        self.0.get(id).and_then(|values| values.first())
    }

    /// Returns `true` if the node has a property named `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Removes `id`, keeping the order of the remaining properties.
    pub fn remove(&mut self, id: &str) -> Option<Vec<Value>> {
        self.0.shift_remove(id)
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the node has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the identifiers, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over the properties, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Vec<Value>> {
        self.0.iter()
    }

    /// Inserts a freshly parsed property, refusing duplicates.
    ///
    /// Returns the rejected pair unchanged when `id` is already present.
    pub(crate) fn insert_new(
        &mut self,
        id: String,
        values: Vec<Value>,
    ) -> std::result::Result<(), (String, Vec<Value>)> {
        match self.0.entry(id) {
            indexmap::map::Entry::Occupied(entry) => Err((entry.key().clone(), values)),
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(values);
                Ok(())
            }
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Eq for Node {}

impl Index<&str> for Node {
    type Output = [Value];

    fn index(&self, id: &str) -> &[Value] {
        match self.get(id) {
            Some(values) => values,
            None => panic!("node has no property {:?}", id),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (id, values)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(id)?;
            for value in values {
                f.write_str("[")?;
                f.write_str(&crate::ser::escape(&value.text()))?;
                f.write_str("]")?;
            }
        }
        Ok(())
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter())
    }
}

impl From<IndexMap<String, Vec<Value>>> for Node {
    fn from(map: IndexMap<String, Vec<Value>>) -> Self {
        map.into_iter().collect()
    }
}

impl IntoIterator for Node {
    type Item = (String, Vec<Value>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = (&'a String, &'a Vec<Value>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: IntoValues> FromIterator<(K, V)> for Node {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut node = Node::new();
        for (id, values) in iter {
            node.set(id, values);
        }
        node
    }
}
