//! Value kinds.
//!
//! [`Kind`] is the discriminant of a [`Value`](crate::Value): it says which payload the
//! value currently holds. Declaration order doubles as the ordering rank
//! used by `PartialOrd for Value`.
//!
//! ```rust
//! use nebula_json::{Kind, Value};
//!
//! let v = Value::from(3.5);
//! assert_eq!(v.kind(), Kind::Number);
//! assert_eq!(Kind::Number.name(), "number");
//! assert_eq!(Kind::Object.to_string(), "an object");
//! ```

use std::fmt::{self, Display, Formatter};

/// Represents the kind/type of a Value
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl Kind {
    /// Get all kinds in rank order
    pub const fn all() -> [Self; 6] {
        [
            Self::Object,
            Self::Array,
            Self::String,
            Self::Number,
            Self::Bool,
            Self::Null,
        ]
    }

    /// Check if this kind stores children (array or object)
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// Check if this kind is a scalar (not a collection)
    pub const fn is_scalar(&self) -> bool {
        !self.is_collection()
    }

    /// Get a lowercase name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Null => "null",
        }
    }
}

/// Renders with an article so errors read naturally: "not a bool".
impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Object | Self::Array => write!(f, "an {}", self.name()),
            _ => write!(f, "a {}", self.name()),
        }
    }
}
