//! Structural limits for value trees
//!
//! [`Limits`] bounds how large a tree may grow before it is rejected. Nothing
//! in the value model enforces limits on its own; callers that accept
//! untrusted input run [`Value::validate`] after building the tree.
//!
//! ```rust
//! use nebula_json::{Limits, Value};
//!
//! let limits = Limits { max_array_length: 2, ..Limits::default() };
//! let v = Value::from(vec![1, 2, 3]);
//! assert!(v.validate(&limits).is_err());
//! assert!(v.validate(&Limits::default()).is_ok());
//! ```

use tracing::debug;

use crate::core::value::{Data, Value};
use crate::error::{ValueError, ValueResult};

/// Configurable structural limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    /// Maximum number of elements in one array
    pub max_array_length: usize,

    /// Maximum number of members in one object
    pub max_object_members: usize,

    /// Maximum string length in bytes
    pub max_string_bytes: usize,

    /// Maximum nesting depth of arrays and objects
    pub max_nesting_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_array_length: 1_000_000,
            max_object_members: 100_000,
            max_string_bytes: 10_000_000, // 10MB
            max_nesting_depth: 128,
        }
    }
}

impl Limits {
    /// Limits for untrusted input
    pub const fn strict() -> Self {
        Self {
            max_array_length: 10_000,
            max_object_members: 1_000,
            max_string_bytes: 1_000_000, // 1MB
            max_nesting_depth: 32,
        }
    }

    /// Limits for trusted environments
    pub const fn permissive() -> Self {
        Self {
            max_array_length: 10_000_000,
            max_object_members: 1_000_000,
            max_string_bytes: 100_000_000,
            max_nesting_depth: 512,
        }
    }

    /// No limits
    pub const fn unlimited() -> Self {
        Self {
            max_array_length: usize::MAX,
            max_object_members: usize::MAX,
            max_string_bytes: usize::MAX,
            max_nesting_depth: usize::MAX,
        }
    }

    #[inline]
    pub fn check_array_length(&self, len: usize) -> ValueResult<()> {
        check("max_array_length", self.max_array_length, len)
    }

    #[inline]
    pub fn check_object_members(&self, count: usize) -> ValueResult<()> {
        check("max_object_members", self.max_object_members, count)
    }

    #[inline]
    pub fn check_string_bytes(&self, bytes: usize) -> ValueResult<()> {
        check("max_string_bytes", self.max_string_bytes, bytes)
    }

    #[inline]
    pub fn check_nesting_depth(&self, depth: usize) -> ValueResult<()> {
        check("max_nesting_depth", self.max_nesting_depth, depth)
    }
}

fn check(limit: &'static str, max: usize, actual: usize) -> ValueResult<()> {
    if actual > max {
        debug!(limit, max, actual, "value limit exceeded");
        Err(ValueError::limit_exceeded(limit, max, actual))
    } else {
        Ok(())
    }
}

impl Value {
    /// Check the whole tree against `limits`, failing on the first breach.
    ///
    /// Keys count toward `max_string_bytes` like string payloads do.
    pub fn validate(&self, limits: &Limits) -> ValueResult<()> {
        self.validate_at(limits, 0)
    }

    fn validate_at(&self, limits: &Limits, depth: usize) -> ValueResult<()> {
        if let Some(key) = self.key() {
            limits.check_string_bytes(key.len())?;
        }
        match &self.data {
            Data::String(s) => limits.check_string_bytes(s.len()),
            Data::Array(items) => {
                limits.check_nesting_depth(depth + 1)?;
                limits.check_array_length(items.len())?;
                items
                    .iter()
                    .try_for_each(|item| item.validate_at(limits, depth + 1))
            }
            Data::Object(_) => {
                limits.check_nesting_depth(depth + 1)?;
                limits.check_object_members(self.keyed_members().count())?;
                self.keyed_members()
                    .try_for_each(|(_, member)| member.validate_at(limits, depth + 1))
            }
            Data::Null | Data::Bool(_) | Data::Number(_) => Ok(()),
        }
    }

    /// Nesting depth: 0 for scalars, 1 for a flat array or object
    pub fn depth(&self) -> usize {
        match self.children() {
            Some(children) => 1 + children.iter().map(Value::depth).max().unwrap_or(0),
            None => 0,
        }
    }
}
