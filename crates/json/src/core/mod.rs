//! Core building blocks of the value model
//!
//! - [`value`]: the [`Value`](value::Value) type, constructors and typed accessors
//! - [`kind`] and [`number`]: the closed set of kinds and the numeric payload
//! - [`access`]: keyed and indexed lookup, the null sentinel and [`ValueMut`](access::ValueMut)
//! - [`iter`]: insertion-ordered iteration
//! - [`ops`]: equality and ordering
//! - [`conversions`]: `From` impls and [`FromValue`](conversions::FromValue)
//! - [`limits`]: structural limits and tree validation
//! - `serde` / `convert`: serde support and `serde_json` interop (feature `serde`)
//!
//! Most users go through the re-exports at the crate root.

pub mod access;
pub mod conversions;
#[cfg(feature = "serde")]
pub mod convert;
pub mod iter;
pub mod kind;
pub mod limits;
pub mod number;
pub mod ops;
#[cfg(feature = "serde")]
pub mod serde;
pub mod value;
