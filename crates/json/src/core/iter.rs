//! Iteration over arrays and objects
//!
//! Children are yielded in insertion order. Object members keep their keys,
//! so a member obtained by iteration can still report where it lives.
//! Scalars iterate as empty.
//!
//! ```rust
//! use nebula_json::Value;
//!
//! let obj = Value::object_from([("a", 1), ("b", 2)]);
//! let pairs: Vec<_> = obj.entries().map(|(k, v)| (k, v.as_int().unwrap())).collect();
//! assert_eq!(pairs, [("a", 1), ("b", 2)]);
//! ```

use std::iter::FusedIterator;
use std::{slice, vec};

use crate::core::access::ValueMut;
use crate::core::value::{Data, Value};

impl Value {
    /// Iterate children by reference
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.children().unwrap_or_default().iter(),
        }
    }

    /// Iterate children through write handles
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut {
            inner: self.children_mut().unwrap_or_default().iter_mut(),
        }
    }

    /// Iterate `(key, value)` pairs. Array elements report an empty key.
    pub fn entries(&self) -> Entries<'_> {
        Entries { inner: self.iter() }
    }

    /// Keys of an object's members, in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.members().into_iter().flatten().filter_map(Value::key)
    }
}

impl ValueMut<'_> {
    /// Iterate the target's children through write handles.
    ///
    /// A detached handle iterates as empty.
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        match self.target_mut() {
            Some(target) => target.iter_mut(),
            None => IterMut {
                inner: slice::IterMut::default(),
            },
        }
    }
}

// ==================== Iterators ====================

/// Borrowing iterator over children
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Iterator yielding a [`ValueMut`] per child
#[derive(Debug)]
pub struct IterMut<'a> {
    inner: slice::IterMut<'a, Value>,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = ValueMut<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(ValueMut::new)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IterMut<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(ValueMut::new)
    }
}

impl ExactSizeIterator for IterMut<'_> {}
impl FusedIterator for IterMut<'_> {}

/// Iterator over `(key, value)` pairs
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: Iter<'a>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|v| (v.key().unwrap_or_default(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}
impl FusedIterator for Entries<'_> {}

/// Owning iterator over children; members keep their keys
#[derive(Debug)]
pub struct IntoIter {
    inner: vec::IntoIter<Value>,
}

impl Iterator for IntoIter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Value> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}

// ==================== IntoIterator ====================

impl<'a> IntoIterator for &'a Value {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Value {
    type Item = ValueMut<'a>;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl IntoIterator for Value {
    type Item = Value;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        let children = match self.data {
            Data::Array(children) | Data::Object(children) => children,
            _ => Vec::new(),
        };
        IntoIter {
            inner: children.into_iter(),
        }
    }
}

// ==================== FromIterator ====================

/// Collects into an array
impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::array(iter)
    }
}

/// Collects into an object; repeated keys keep the last value
impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::object_from(iter)
    }
}

impl<V: Into<Value>> Extend<V> for Value {
    /// Appends to an array; ignored for other kinds
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
