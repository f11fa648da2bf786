//! The Value type
//!
//! A [`Value`] owns exactly one tagged payload plus an optional key. The key
//! is present only while the value is a member of an object; it travels with
//! the value, not with the parent's slot, so taking a member out of an object
//! keeps its key.
//!
//! Arrays and objects share one storage shape (`Vec<Value>`). What tells
//! them apart is whether the children carry keys, and that invariant is kept
//! by the mutation API (`set`, `slot`, construction), not by the storage.

use std::mem;

use crate::core::kind::Kind;
use crate::core::number::Number;
use crate::error::{ValueError, ValueResult};

/// Dynamically typed JSON value
///
/// `Value::default()` is an empty object, not null.
#[derive(Debug)]
pub struct Value {
    pub(crate) data: Data,
    pub(crate) key: Option<String>,
}

/// Tagged payload storage
#[derive(Debug)]
pub(crate) enum Data {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Vec<Value>),
}

/// Borrowed view of a value's payload.
///
/// This is the read surface for code that walks a tree without going through
/// the typed accessors, e.g. a serializer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'a> {
    Null,
    Bool(bool),
    Number(Number),
    String(&'a str),
    /// Array elements in order
    Array(&'a [Value]),
    /// Object members in insertion order; each carries its key
    Object(&'a [Value]),
}

impl Value {
    // ==================== Constructors ====================

    /// Create an empty object
    pub const fn new() -> Self {
        Self::object()
    }

    /// Create a null value
    pub const fn null() -> Self {
        Self::from_data(Data::Null)
    }

    /// Create a boolean value
    pub const fn boolean(v: bool) -> Self {
        Self::from_data(Data::Bool(v))
    }

    /// Create a signed integer value
    pub const fn int(v: i64) -> Self {
        Self::from_data(Data::Number(Number::Int(v)))
    }

    /// Create an unsigned integer value
    pub const fn uint(v: u64) -> Self {
        Self::from_data(Data::Number(Number::UInt(v)))
    }

    /// Create a floating point value
    pub const fn float(v: f64) -> Self {
        Self::from_data(Data::Number(Number::Float(v)))
    }

    /// Create a string value
    pub fn string(v: impl Into<String>) -> Self {
        Self::from_data(Data::String(v.into()))
    }

    /// Create an array value. Any keys on the items are dropped.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Self::from_data(Data::Array(
            items.into_iter().map(Value::detached).collect(),
        ))
    }

    /// Create an empty object
    pub const fn object() -> Self {
        Self::from_data(Data::Object(Vec::new()))
    }

    /// Create an object from key-value pairs.
    ///
    /// Pairs are inserted through [`set`](Value::set): a repeated key keeps
    /// its first position and takes the last value.
    pub fn object_from<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut object = Self::object();
        for (key, value) in pairs {
            object.set(key.as_ref(), value);
        }
        object
    }

    pub(crate) const fn from_data(data: Data) -> Self {
        Self { data, key: None }
    }

    /// Same value with the key removed
    pub(crate) fn detached(mut self) -> Self {
        self.key = None;
        self
    }

    pub(crate) fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    pub const fn kind(&self) -> Kind {
        match self.data {
            Data::Null => Kind::Null,
            Data::Bool(_) => Kind::Bool,
            Data::Number(_) => Kind::Number,
            Data::String(_) => Kind::String,
            Data::Array(_) => Kind::Array,
            Data::Object(_) => Kind::Object,
        }
    }

    /// Borrow the payload
    pub fn payload(&self) -> Payload<'_> {
        match &self.data {
            Data::Null => Payload::Null,
            Data::Bool(b) => Payload::Bool(*b),
            Data::Number(n) => Payload::Number(*n),
            Data::String(s) => Payload::String(s),
            Data::Array(items) => Payload::Array(items),
            Data::Object(members) => Payload::Object(members),
        }
    }

    /// Check if this is null
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self.data, Data::Null)
    }

    /// Check if this is a boolean
    #[inline]
    pub const fn is_bool(&self) -> bool {
        matches!(self.data, Data::Bool(_))
    }

    /// Check if this is a number
    #[inline]
    pub const fn is_number(&self) -> bool {
        matches!(self.data, Data::Number(_))
    }

    /// Check if this is a string
    #[inline]
    pub const fn is_string(&self) -> bool {
        matches!(self.data, Data::String(_))
    }

    /// Check if this is an array
    #[inline]
    pub const fn is_array(&self) -> bool {
        matches!(self.data, Data::Array(_))
    }

    /// Check if this is an object
    #[inline]
    pub const fn is_object(&self) -> bool {
        matches!(self.data, Data::Object(_))
    }

    // ==================== Typed accessors ====================

    /// Read as a boolean
    pub fn as_bool(&self) -> ValueResult<bool> {
        match self.data {
            Data::Bool(b) => Ok(b),
            _ => Err(self.mismatch(Kind::Bool)),
        }
    }

    /// Borrow as a string slice
    pub fn as_str(&self) -> ValueResult<&str> {
        match &self.data {
            Data::String(s) => Ok(s),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    /// Read as an owned string
    pub fn as_string(&self) -> ValueResult<String> {
        self.as_str().map(str::to_owned)
    }

    /// Read the numeric payload
    pub fn as_number(&self) -> ValueResult<Number> {
        match self.data {
            Data::Number(n) => Ok(n),
            _ => Err(self.mismatch(Kind::Number)),
        }
    }

    /// Read as a signed integer. Exact for values built from signed integers.
    pub fn as_int(&self) -> ValueResult<i64> {
        self.as_number().map(|n| n.as_i64())
    }

    /// Read as an unsigned integer. Exact for values built from unsigned integers.
    pub fn as_uint(&self) -> ValueResult<u64> {
        self.as_number().map(|n| n.as_u64())
    }

    /// Read as a float. Exact for values built from floats.
    pub fn as_double(&self) -> ValueResult<f64> {
        self.as_number().map(|n| n.as_f64())
    }

    fn mismatch(&self, expected: Kind) -> ValueError {
        ValueError::wrong_kind(expected, self.kind())
    }

    // ==================== Ownership ====================

    /// The key this value is registered under, if it is an object member
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Move the value out, leaving a detached null behind.
    ///
    /// The returned value keeps its payload and key.
    pub fn take(&mut self) -> Value {
        mem::replace(self, Value::null())
    }

    /// Replace the payload while keeping this value's key.
    ///
    /// Assigning into an object member never changes which key the member
    /// is registered under.
    pub fn assign(&mut self, value: impl Into<Value>) {
        let mut value = value.into();
        value.key = self.key.take();
        *self = value;
    }

    // ==================== Children ====================

    pub(crate) fn members(&self) -> Option<&Vec<Value>> {
        match &self.data {
            Data::Object(members) => Some(members),
            _ => None,
        }
    }

    pub(crate) fn members_mut(&mut self) -> Option<&mut Vec<Value>> {
        match &mut self.data {
            Data::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Object members paired with their keys.
    ///
    /// A member moved out with [`take`](Value::take) leaves an unkeyed null
    /// in its slot; that slot is no longer addressable and is skipped here.
    pub(crate) fn keyed_members(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.members()
            .into_iter()
            .flatten()
            .filter_map(|m| m.key().map(|key| (key, m)))
    }

    pub(crate) fn elements(&self) -> Option<&Vec<Value>> {
        match &self.data {
            Data::Array(items) => Some(items),
            _ => None,
        }
    }

    pub(crate) fn elements_mut(&mut self) -> Option<&mut Vec<Value>> {
        match &mut self.data {
            Data::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Children of an array or object, in order
    pub(crate) fn children(&self) -> Option<&[Value]> {
        match &self.data {
            Data::Array(children) | Data::Object(children) => Some(children),
            _ => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut [Value]> {
        match &mut self.data {
            Data::Array(children) | Data::Object(children) => Some(children),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep clone. The copy is detached: the source's key is not carried over,
/// while members inside a cloned object keep theirs.
impl Clone for Value {
    fn clone(&self) -> Self {
        Self::from_data(self.data.clone())
    }
}

impl Clone for Data {
    fn clone(&self) -> Self {
        match self {
            Self::Null => Self::Null,
            Self::Bool(b) => Self::Bool(*b),
            Self::Number(n) => Self::Number(*n),
            Self::String(s) => Self::String(s.clone()),
            Self::Array(items) => Self::Array(items.iter().map(Value::clone).collect()),
            Self::Object(members) => Self::Object(
                members
                    .iter()
                    .map(|m| Value {
                        data: m.data.clone(),
                        key: m.key.clone(),
                    })
                    .collect(),
            ),
        }
    }
}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::boolean(v)
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Self::from_data(Data::Number(v))
    }
}

macro_rules! impl_from_numeric {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::from(Number::from(v))
                }
            }
        )*
    };
}

impl_from_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::string(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::string(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::string(v.as_str())
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::string(v)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_empty_object() {
        let val = Value::default();
        assert_eq!(val.kind(), Kind::Object);
        assert!(val.is_empty());
        assert_eq!(val.key(), None);
    }

    #[test]
    fn test_typed_constructors() {
        assert_eq!(Value::null().kind(), Kind::Null);
        assert_eq!(Value::from(true).kind(), Kind::Bool);
        assert_eq!(Value::from(1.5).kind(), Kind::Number);
        assert_eq!(Value::from(-2).kind(), Kind::Number);
        assert_eq!(Value::from(2u32).kind(), Kind::Number);
        assert_eq!(Value::from("hi").kind(), Kind::String);
        assert_eq!(Value::array(vec![Value::null()]).kind(), Kind::Array);
        assert_eq!(Value::from(()).kind(), Kind::Null);
    }

    #[test]
    fn test_typed_accessors() {
        assert_eq!(Value::from(true).as_bool(), Ok(true));
        assert_eq!(Value::from("Ada").as_string(), Ok("Ada".to_string()));
        assert_eq!(Value::from(-42).as_int(), Ok(-42));
        assert_eq!(Value::from(42u64).as_uint(), Ok(42));
        assert_eq!(Value::from(37.0).as_double(), Ok(37.0));
    }

    #[test]
    fn test_numeric_round_trip_extremes() {
        assert_eq!(Value::from(i64::MIN).as_int(), Ok(i64::MIN));
        assert_eq!(Value::from(u64::MAX).as_uint(), Ok(u64::MAX));
        assert_eq!(Value::from(f64::MAX).as_double(), Ok(f64::MAX));
    }

    #[test]
    fn test_no_cross_kind_coercion() {
        let err = Value::from("1").as_int().unwrap_err();
        assert_eq!(err, ValueError::wrong_kind(Kind::Number, Kind::String));
        assert_eq!(err.to_string(), "not a number, found a string");

        assert!(Value::from(1).as_bool().is_err());
        assert!(Value::from(true).as_str().is_err());
        assert!(Value::null().as_double().is_err());
    }

    #[test]
    fn test_take_leaves_detached_null() {
        let mut obj = Value::object_from([("a", 1)]);
        let mut member = obj.members_mut().unwrap()[0].take();
        assert_eq!(member.key(), Some("a"));
        assert_eq!(member.as_int(), Ok(1));

        let moved = member.take();
        assert!(member.is_null());
        assert_eq!(member.key(), None);
        assert_eq!(moved.key(), Some("a"));
    }

    #[test]
    fn test_clone_drops_own_key_keeps_member_keys() {
        let root = Value::object_from([("inner", Value::object_from([("x", 1)]))]);
        let inner = root.get("inner").unwrap();
        assert_eq!(inner.key(), Some("inner"));

        let copy = inner.clone();
        assert_eq!(copy.key(), None);
        assert_eq!(copy.get("x").unwrap().key(), Some("x"));
    }

    #[test]
    fn test_assign_keeps_key() {
        let mut member = Value::from(1).with_key("slot");
        member.assign(Value::from("two").with_key("other"));
        assert_eq!(member.key(), Some("slot"));
        assert_eq!(member.as_str(), Ok("two"));
    }

    #[test]
    fn test_array_strips_keys() {
        let arr = Value::array(vec![Value::from(1).with_key("k")]);
        assert_eq!(arr.get(0).unwrap().key(), None);
    }

    #[test]
    fn test_object_from_deduplicates() {
        let obj = Value::object_from([("a", 1), ("b", 2), ("a", 3)]);
        let keys: Vec<_> = obj.iter().filter_map(Value::key).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(obj.get("a").unwrap().as_int(), Ok(3));
    }

    #[test]
    fn test_payload_view() {
        let arr = Value::array(vec![Value::from(1), Value::from(2)]);
        match arr.payload() {
            Payload::Array(items) => assert_eq!(items.len(), 2),
            other => panic!("unexpected payload {other:?}"),
        }
        assert_eq!(Value::from("s").payload(), Payload::String("s"));
    }
}
