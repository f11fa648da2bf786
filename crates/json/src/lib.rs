//! # nebula-json
//!
//! An ordered JSON value model.
//!
//! [`Value`] is a single recursive type for null, booleans, numbers,
//! strings, arrays and objects. Objects keep their members in insertion
//! order, and every member carries its own key, so a value pulled out of an
//! object still knows which key it lived under.
//!
//! Two access styles sit side by side:
//!
//! - fallible lookups ([`Value::get`], [`Value::get_mut`], `as_*`) return a
//!   [`ValueResult`] describing what went wrong;
//! - ergonomic lookups (`value["key"]`, `value[0]`, [`Value::slot`]) never
//!   fail. Reads fall back to a shared null sentinel and writes go to a
//!   detached [`ValueMut`] that ignores them.
//!
//! ```rust
//! use nebula_json::Value;
//!
//! let mut person = Value::new();
//! person.set("name", "Ada");
//! person.set("age", 37);
//! person.slot("tags").assign(vec!["math", "engines"]);
//!
//! assert_eq!(person["name"], "Ada");
//! assert_eq!(person["tags"][1].as_str(), Ok("engines"));
//! assert!(person["missing"]["deeper"].is_sentinel());
//! assert!(person.get("missing").is_err());
//!
//! let keys: Vec<_> = person.keys().collect();
//! assert_eq!(keys, ["name", "age", "tags"]);
//! ```
//!
//! Text I/O goes through serde (feature `serde`, on by default):
//!
//! ```rust
//! # #[cfg(feature = "serde")] {
//! use nebula_json::Value;
//!
//! let v: Value = serde_json::from_str(r#"{"b":1,"a":2}"#).unwrap();
//! assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"b":1,"a":2}"#);
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod core;
pub mod error;

pub use crate::core::access::{ValueIndex, ValueMut};
pub use crate::core::conversions::FromValue;
pub use crate::core::iter::{Entries, IntoIter, Iter, IterMut};
pub use crate::core::kind::Kind;
pub use crate::core::limits::Limits;
pub use crate::core::number::Number;
pub use crate::core::value::{Payload, Value};
pub use crate::error::{OrNull, ValueError, ValueResult, ValueResultExt};

// Re-export serde_json::json! for building values from literals
#[cfg(feature = "serde")]
pub use serde_json::json;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{FromValue, Kind, Number, OrNull, Value, ValueMut, ValueResult, ValueResultExt};
    pub use crate::{Limits, ValueError};
}
