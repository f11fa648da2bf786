//! Conversions between Value and native types
//!
//! Into a [`Value`]: `From` impls for collections and options (scalars live
//! next to the type in `value.rs`).
//!
//! Out of a [`Value`]: the [`FromValue`] trait, used through [`Value::to`].
//! Extraction is strict about kinds and range-checks integer narrowing.
//! Errors inside containers carry the index or key where they happened.
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use nebula_json::Value;
//!
//! let v = Value::object_from([("a", vec![1, 2]), ("b", vec![3])]);
//! let map: BTreeMap<String, Vec<u8>> = v.to().unwrap();
//! assert_eq!(map["a"], vec![1, 2]);
//!
//! let err = Value::from(vec![1, 300]).to::<Vec<u8>>().unwrap_err();
//! assert_eq!(err.to_string(), "at index 1: cannot convert 300 to u8");
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use crate::core::kind::Kind;
use crate::core::number::Number;
use crate::core::value::Value;
use crate::error::{ValueError, ValueResult, ValueResultExt};

// ==================== Into Value ====================

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::array(items.into_iter().map(Into::into))
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::array(items.iter().cloned().map(Into::into))
    }
}

/// `None` becomes null
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or_else(Value::null, Into::into)
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(map: BTreeMap<String, T>) -> Self {
        Value::object_from(map)
    }
}

/// Member order follows the map's iteration order
impl<T: Into<Value>, S: BuildHasher> From<HashMap<String, T, S>> for Value {
    fn from(map: HashMap<String, T, S>) -> Self {
        Value::object_from(map)
    }
}

// ==================== Out of Value ====================

/// Types that can be extracted from a [`Value`]
pub trait FromValue: Sized {
    /// Extract `Self`, failing on a kind mismatch or out-of-range number
    fn from_value(value: &Value) -> ValueResult<Self>;
}

impl Value {
    /// Extract a native type
    pub fn to<T: FromValue>(&self) -> ValueResult<T> {
        T::from_value(self)
    }

    /// Extract a native type, falling back to `default` on any error
    pub fn to_or<T: FromValue>(&self, default: T) -> T {
        self.to().unwrap_or(default)
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> ValueResult<Self> {
        Ok(value.clone())
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> ValueResult<Self> {
        value.as_bool()
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> ValueResult<Self> {
        value.as_string()
    }
}

impl FromValue for Number {
    fn from_value(value: &Value) -> ValueResult<Self> {
        value.as_number()
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> ValueResult<Self> {
        value.as_double()
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> ValueResult<Self> {
        value.as_double().map(|f| f as f32)
    }
}

/// Widen a number for integer narrowing. Floats must be finite and whole.
fn integral(value: &Value, to: &'static str) -> ValueResult<i128> {
    let n = value.as_number()?;
    match n {
        Number::Float(f) if !f.is_finite() || f.fract() != 0.0 => {
            Err(ValueError::conversion(n.to_string(), to))
        }
        _ => Ok(n.as_i128()),
    }
}

macro_rules! impl_from_value_int {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: &Value) -> ValueResult<Self> {
                    let wide = integral(value, stringify!($ty))?;
                    <$ty>::try_from(wide)
                        .map_err(|_| ValueError::conversion(wide.to_string(), stringify!($ty)))
                }
            }
        )*
    };
}

impl_from_value_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Null extracts as `None`
impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> ValueResult<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}

fn from_elements<T, C>(value: &Value) -> ValueResult<C>
where
    T: FromValue,
    C: FromIterator<T>,
{
    value
        .elements()
        .ok_or_else(|| ValueError::wrong_kind(Kind::Array, value.kind()))?
        .iter()
        .enumerate()
        .map(|(i, item)| T::from_value(item).at_index(i))
        .collect()
}

fn from_members<T, C>(value: &Value) -> ValueResult<C>
where
    T: FromValue,
    C: FromIterator<(String, T)>,
{
    value
        .members()
        .ok_or_else(|| ValueError::wrong_kind(Kind::Object, value.kind()))?
        .iter()
        .map(|member| {
            let key = member.key().unwrap_or_default();
            T::from_value(member)
                .at_key(key)
                .map(|v| (key.to_owned(), v))
        })
        .collect()
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> ValueResult<Self> {
        from_elements(value)
    }
}

impl<T: FromValue + Ord> FromValue for BTreeSet<T> {
    fn from_value(value: &Value) -> ValueResult<Self> {
        from_elements(value)
    }
}

impl<T, S> FromValue for HashSet<T, S>
where
    T: FromValue + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_value(value: &Value) -> ValueResult<Self> {
        from_elements(value)
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: &Value) -> ValueResult<Self> {
        from_members(value)
    }
}

impl<T, S> FromValue for HashMap<String, T, S>
where
    T: FromValue,
    S: BuildHasher + Default,
{
    fn from_value(value: &Value) -> ValueResult<Self> {
        from_members(value)
    }
}
