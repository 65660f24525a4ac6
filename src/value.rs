//! Property values.
//!
//! SGF itself only knows text between `[` and `]`. This module provides the
//! [`Value`] enum which stores either that text or a number supplied by the
//! caller when a tree is built programmatically.
//!
//! ## Numeric policy
//!
//! The parser never guesses types: every parsed value is a [`Value::Text`]
//! holding the unescaped content. Numeric interpretation is left to the caller
//! through [`Value::as_i64`] and [`Value::as_f64`], which parse text on demand.
//!
//! Numbers written by the caller are rendered with their minimal decimal form,
//! and two values compare equal when their canonical text is equal:
//!
//! ```rust
//! use sgf_tree::{Number, Value};
//!
//! let komi = Value::from(6.5);
//! assert_eq!(komi, Value::from("6.5"));
//! assert_eq!(komi.to_text(), "6.5");
//! assert_eq!(Value::Number(Number::Float(7.0)).to_text(), "7");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single property value.
///
/// # Examples
///
/// ```rust
/// use sgf_tree::Value;
///
/// let mv = Value::from("aa");
/// let size = Value::from(19);
///
/// assert!(mv.is_text());
/// assert!(size.is_number());
/// assert_eq!(size.as_i64(), Some(19));
/// assert_eq!(Value::from("19").as_i64(), Some(19));
/// ```
#[derive(Clone, Debug)]
pub enum Value {
    Number(Number),
    Text(String),
}

/// A numeric value supplied by the caller.
///
/// # Examples
///
/// ```rust
/// use sgf_tree::Number;
///
/// assert_eq!(Number::Integer(4).to_string(), "4");
/// assert_eq!(Number::Float(6.5).to_string(), "6.5");
/// assert_eq!(Number::Float(0.5).as_i64(), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it has no fractional part.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Value {
    /// Returns `true` if the value is a caller-supplied number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is text.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns `true` if the canonical text is empty, as in `B[]`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Text(s) if s.is_empty())
    }

    /// Returns the text if this is a [`Value::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }

    /// Returns the value as an integer, parsing text if necessary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_tree::Value;
    ///
    /// assert_eq!(Value::from("4").as_i64(), Some(4));
    /// assert_eq!(Value::from(" +3 ").as_i64(), Some(3));
    /// assert_eq!(Value::from("aa").as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            Value::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Returns the value as a float, parsing text if necessary.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            Value::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Returns the canonical (unescaped) text of the value.
    ///
    /// Text is borrowed as-is; numbers use their minimal decimal form.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Value::Text(s) => Cow::Borrowed(s.as_str()),
            Value::Number(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Returns the canonical text as an owned `String`.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.text().into_owned()
    }

    /// Converts this value into its canonical [`Value::Text`] form.
    #[must_use]
    pub fn into_text(self) -> Value {
        match self {
            Value::Text(_) => self,
            Value::Number(n) => Value::Text(n.to_string()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.text() == other.text()
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text().hash(state);
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Text(String::new())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number or a string")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Number(Number::Integer(value as i64)))
                } else {
                    Ok(Value::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::Text(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::Text(value))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting typed data from a Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| crate::Error::type_mismatch("integer", &format!("{:?}", value)))
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::type_mismatch("number", &format!("{:?}", value)))
    }
}

impl From<Value> for String {
    fn from(value: Value) -> Self {
        match value {
            Value::Text(s) => s,
            Value::Number(n) => n.to_string(),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(value as i64)
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::Integer(value as i64))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_uses_canonical_text() {
        assert_eq!(Value::from(6.5), Value::from("6.5"));
        assert_eq!(Value::from(4), Value::from("4"));
        assert_ne!(Value::from(4), Value::from("04"));
        assert_eq!(Value::from(7.0), Value::from("7"));
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        let mut set = HashSet::new();
        set.insert(Value::from(4));
        assert!(set.contains(&Value::from("4")));
    }

    #[test]
    fn test_numeric_accessors() {
        assert_eq!(Value::from("6.5").as_f64(), Some(6.5));
        assert_eq!(Value::from("6.5").as_i64(), None);
        assert_eq!(Value::from(6.5).as_str(), None);
        assert_eq!(Value::from("B+R").as_f64(), None);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(i64::try_from(Value::from("19")).unwrap(), 19);
        assert_eq!(f64::try_from(Value::from(6.5)).unwrap(), 6.5);
        assert!(matches!(
            i64::try_from(Value::from("aa")),
            Err(crate::Error::TypeMismatch { .. })
        ));
        assert_eq!(String::from(Value::from(3)), "3");
    }

    #[test]
    fn test_into_text() {
        assert!(Value::from(0.5).into_text().is_text());
        assert_eq!(Value::from(0.5).into_text().as_str(), Some("0.5"));
        assert!(Value::default().is_empty());
    }
}
