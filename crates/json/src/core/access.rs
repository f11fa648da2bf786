//! Keyed and indexed access
//!
//! Two access styles are provided:
//!
//! - [`Value::get`] / [`Value::get_mut`] return a [`ValueResult`] and report
//!   exactly what went wrong (wrong kind, missing key, index past the end).
//! - `value["key"]`, `value[2]`, [`Value::slot`] and [`Value::slot_at`] never
//!   fail. Reads fall back to the shared null sentinel; writes fall back to a
//!   detached [`ValueMut`] whose mutations are no-ops.
//!
//! ```rust
//! use nebula_json::Value;
//!
//! let mut root = Value::new();
//! root.slot("user").slot("name").assign("Ada");
//!
//! assert_eq!(root["user"]["name"].as_str(), Ok("Ada"));
//! assert!(root["user"]["missing"].is_sentinel());
//! assert!(root.get("nope").is_err());
//! ```

use std::ops::{Deref, Index};

use tracing::trace;

use crate::core::kind::Kind;
use crate::core::value::{Data, Value};
use crate::error::{OrNull, ValueError, ValueResult};

/// The process-wide null returned by failed non-failing lookups
static NULL: Value = Value::null();

// ==================== Index trait ====================

mod private {
    pub trait Sealed {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl Sealed for usize {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// Types that can address a child of a [`Value`].
///
/// Strings address object members by key, `usize` addresses array elements
/// by position. The trait is sealed.
pub trait ValueIndex: private::Sealed {
    #[doc(hidden)]
    fn lookup<'v>(&self, value: &'v Value) -> ValueResult<&'v Value>;

    #[doc(hidden)]
    fn lookup_mut<'v>(&self, value: &'v mut Value) -> ValueResult<&'v mut Value>;
}

impl ValueIndex for str {
    fn lookup<'v>(&self, value: &'v Value) -> ValueResult<&'v Value> {
        let members = value
            .members()
            .ok_or_else(|| ValueError::wrong_kind(Kind::Object, value.kind()))?;
        members
            .iter()
            .find(|m| m.key() == Some(self))
            .ok_or_else(|| ValueError::not_found(self))
    }

    fn lookup_mut<'v>(&self, value: &'v mut Value) -> ValueResult<&'v mut Value> {
        let kind = value.kind();
        let members = value
            .members_mut()
            .ok_or(ValueError::wrong_kind(Kind::Object, kind))?;
        members
            .iter_mut()
            .find(|m| m.key() == Some(self))
            .ok_or_else(|| ValueError::not_found(self))
    }
}

impl ValueIndex for String {
    fn lookup<'v>(&self, value: &'v Value) -> ValueResult<&'v Value> {
        self.as_str().lookup(value)
    }

    fn lookup_mut<'v>(&self, value: &'v mut Value) -> ValueResult<&'v mut Value> {
        self.as_str().lookup_mut(value)
    }
}

impl ValueIndex for usize {
    fn lookup<'v>(&self, value: &'v Value) -> ValueResult<&'v Value> {
        let items = value
            .elements()
            .ok_or_else(|| ValueError::wrong_kind(Kind::Array, value.kind()))?;
        items
            .get(*self)
            .ok_or(ValueError::out_of_range(*self, items.len()))
    }

    fn lookup_mut<'v>(&self, value: &'v mut Value) -> ValueResult<&'v mut Value> {
        let kind = value.kind();
        let items = value
            .elements_mut()
            .ok_or(ValueError::wrong_kind(Kind::Array, kind))?;
        let len = items.len();
        items
            .get_mut(*self)
            .ok_or(ValueError::out_of_range(*self, len))
    }
}

impl<T: ?Sized + ValueIndex> ValueIndex for &T {
    fn lookup<'v>(&self, value: &'v Value) -> ValueResult<&'v Value> {
        (**self).lookup(value)
    }

    fn lookup_mut<'v>(&self, value: &'v mut Value) -> ValueResult<&'v mut Value> {
        (**self).lookup_mut(value)
    }
}

// ==================== Value access ====================

impl Value {
    /// The shared null returned when a non-failing lookup misses
    #[inline]
    pub fn sentinel() -> &'static Value {
        &NULL
    }

    /// Whether this reference is the shared null sentinel.
    ///
    /// A freshly constructed null is not the sentinel.
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        std::ptr::eq(self, &NULL)
    }

    /// Look up a member by key or an element by position
    pub fn get<I: ValueIndex>(&self, index: I) -> ValueResult<&Value> {
        index.lookup(self)
    }

    /// Mutable lookup. The handle keeps the member's key intact.
    pub fn get_mut<I: ValueIndex>(&mut self, index: I) -> ValueResult<ValueMut<'_>> {
        index.lookup_mut(self).map(ValueMut::new)
    }

    /// Whether an object has a member with this key. False for other kinds.
    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.members()?.iter().position(|m| m.key() == Some(key))
    }

    /// Writable handle to the member under `key`, inserting it if missing.
    ///
    /// A missing member is appended as an empty object. On a non-object the
    /// handle is detached and writes through it do nothing.
    pub fn slot(&mut self, key: &str) -> ValueMut<'_> {
        let kind = self.kind();
        let Some(members) = self.members_mut() else {
            trace!(key, %kind, "slot on non-object, handle detached");
            return ValueMut::detached();
        };

        let pos = match members.iter().position(|m| m.key() == Some(key)) {
            Some(pos) => pos,
            None => {
                members.push(Value::new().with_key(key));
                members.len() - 1
            }
        };
        ValueMut::new(&mut members[pos])
    }

    /// Writable handle to the element at `index`, detached when out of range
    /// or when this is not an array. Never inserts.
    pub fn slot_at(&mut self, index: usize) -> ValueMut<'_> {
        self.get_mut(index).unwrap_or_else(|error| {
            trace!(index, %error, "slot_at miss, handle detached");
            ValueMut::detached()
        })
    }

    /// Insert or replace a member.
    ///
    /// An existing member keeps its key and position; a new one is appended.
    /// Does nothing on a non-object.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let kind = self.kind();
        let Some(members) = self.members_mut() else {
            trace!(key, %kind, "set on non-object ignored");
            return;
        };

        let value = value.into();
        match members.iter_mut().find(|m| m.key() == Some(key)) {
            Some(member) => member.assign(value),
            None => members.push(value.with_key(key)),
        }
    }

    /// Remove the member under `key`. Returns whether something was removed.
    pub fn erase(&mut self, key: &str) -> bool {
        let Some(pos) = self.position(key) else {
            return false;
        };
        match self.members_mut() {
            Some(members) => {
                members.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Append to an array. Any key on `value` is dropped. Does nothing on
    /// other kinds.
    pub fn push(&mut self, value: impl Into<Value>) {
        let kind = self.kind();
        match self.elements_mut() {
            Some(items) => items.push(value.into().detached()),
            None => trace!(%kind, "push on non-array ignored"),
        }
    }

    /// Number of elements or members; zero for scalars
    pub fn len(&self) -> usize {
        self.children().map_or(0, <[Value]>::len)
    }

    /// Whether [`len`](Value::len) is zero
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all elements or members. Scalars are left alone.
    pub fn clear(&mut self) {
        if let Data::Array(children) | Data::Object(children) = &mut self.data {
            children.clear();
        }
    }
}

/// Never panics: a miss yields [`Value::sentinel`].
impl<I: ValueIndex> Index<I> for Value {
    type Output = Value;

    fn index(&self, index: I) -> &Value {
        self.get(index)
            .inspect_err(|error| trace!(%error, "index miss, using null sentinel"))
            .or_null()
    }
}

// ==================== Write handle ====================

/// Write handle to a value inside a tree.
///
/// A handle either targets a real value or is *detached*. A detached handle
/// reads as the null sentinel and ignores every write, which is how failed
/// writable lookups stay infallible.
///
/// The handle never hands out `&mut Value`, so a member can only be replaced
/// through [`assign`](ValueMut::assign), which keeps its key.
#[derive(Debug)]
pub struct ValueMut<'a> {
    target: Option<&'a mut Value>,
}

impl<'a> ValueMut<'a> {
    pub(crate) fn new(target: &'a mut Value) -> Self {
        Self {
            target: Some(target),
        }
    }

    pub(crate) const fn detached() -> Self {
        Self { target: None }
    }

    pub(crate) fn target_mut(&mut self) -> Option<&mut Value> {
        self.target.as_deref_mut()
    }

    /// Whether writes through this handle are ignored
    pub const fn is_detached(&self) -> bool {
        self.target.is_none()
    }

    /// Shorter-lived handle to the same target
    pub fn reborrow(&mut self) -> ValueMut<'_> {
        ValueMut {
            target: self.target.as_deref_mut(),
        }
    }

    /// Replace the payload, keeping the target's key
    pub fn assign(&mut self, value: impl Into<Value>) {
        if let Some(target) = self.target.as_deref_mut() {
            target.assign(value);
        }
    }

    /// See [`Value::set`]
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        if let Some(target) = self.target.as_deref_mut() {
            target.set(key, value);
        }
    }

    /// See [`Value::erase`]
    pub fn erase(&mut self, key: &str) -> bool {
        self.target
            .as_deref_mut()
            .is_some_and(|target| target.erase(key))
    }

    /// See [`Value::push`]
    pub fn push(&mut self, value: impl Into<Value>) {
        if let Some(target) = self.target.as_deref_mut() {
            target.push(value);
        }
    }

    /// See [`Value::clear`]
    pub fn clear(&mut self) {
        if let Some(target) = self.target.as_deref_mut() {
            target.clear();
        }
    }

    /// Move the target out, leaving null behind. A detached handle yields a
    /// fresh null.
    pub fn take(&mut self) -> Value {
        match self.target.as_deref_mut() {
            Some(target) => target.take(),
            None => Value::null(),
        }
    }

    /// Descend by key, inserting when missing. See [`Value::slot`].
    pub fn slot(self, key: &str) -> ValueMut<'a> {
        match self.target {
            Some(target) => target.slot(key),
            None => Self::detached(),
        }
    }

    /// Descend by position. See [`Value::slot_at`].
    pub fn slot_at(self, index: usize) -> ValueMut<'a> {
        match self.target {
            Some(target) => target.slot_at(index),
            None => Self::detached(),
        }
    }

    /// Fallible descent. A detached handle reports the lookup error a null
    /// value would.
    pub fn get_mut<I: ValueIndex>(self, index: I) -> ValueResult<ValueMut<'a>> {
        match self.target {
            Some(target) => target.get_mut(index),
            None => index.lookup(Value::sentinel()).map(|_| Self::detached()),
        }
    }
}

impl Deref for ValueMut<'_> {
    type Target = Value;

    fn deref(&self) -> &Value {
        match &self.target {
            Some(target) => target,
            None => Value::sentinel(),
        }
    }
}
