//! Comparison for Value
//!
//! Equality is structural and ignores the keys of the two values being
//! compared. Object equality ignores member order. Ordering ranks kinds first
//! (object < array < string < number < bool < null), then compares payloads.

use std::cmp::Ordering;

use crate::core::number::Number;
use crate::core::value::{Data, Value};

// ==================== Equality ====================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (&self.data, &other.data) {
            (Data::Null, Data::Null) => true,
            (Data::Bool(a), Data::Bool(b)) => a == b,
            (Data::Number(a), Data::Number(b)) => a == b,
            (Data::String(a), Data::String(b)) => a == b,
            (Data::Array(a), Data::Array(b)) => a == b,
            (Data::Object(a), Data::Object(b)) => objects_eq(a, b),
            _ => false,
        }
    }
}

fn objects_eq(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len()
        && a.iter().all(|member| {
            b.iter()
                .find(|other| other.key() == member.key())
                .is_some_and(|other| other == member)
        })
}

// ==================== Ordering ====================

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.data, &other.data) {
            (Data::Null, Data::Null) => Some(Ordering::Equal),
            (Data::Bool(a), Data::Bool(b)) => a.partial_cmp(b),
            (Data::Number(a), Data::Number(b)) => a.partial_cmp(b),
            (Data::String(a), Data::String(b)) => a.partial_cmp(b),
            (Data::Array(a), Data::Array(b)) => a.as_slice().partial_cmp(b.as_slice()),
            (Data::Object(a), Data::Object(b)) => objects_cmp(a, b),
            _ => Some(self.kind().cmp(&other.kind())),
        }
    }
}

/// Compare members sorted by key, then by value; shorter wins a common prefix
fn objects_cmp(a: &[Value], b: &[Value]) -> Option<Ordering> {
    let a = sorted_by_key(a);
    let b = sorted_by_key(b);

    for (x, y) in a.iter().zip(&b) {
        match x.key().cmp(&y.key()) {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        match x.partial_cmp(y)? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
    }
    Some(a.len().cmp(&b.len()))
}

fn sorted_by_key(members: &[Value]) -> Vec<&Value> {
    let mut sorted: Vec<&Value> = members.iter().collect();
    sorted.sort_by(|x, y| x.key().cmp(&y.key()));
    sorted
}

// ==================== Primitive comparisons ====================

macro_rules! impl_eq_numeric {
    ($($ty:ty),*) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    self.as_number().is_ok_and(|n| n == Number::from(*other))
                }
            }

            impl PartialEq<Value> for $ty {
                fn eq(&self, other: &Value) -> bool {
                    other == self
                }
            }
        )*
    };
}

impl_eq_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool().is_ok_and(|b| b == *other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str().is_ok_and(|s| s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_equal_across_representations() {
        assert_eq!(Value::from(1), Value::from(1u64));
        assert_eq!(Value::from(1u8), Value::from(1.0));
        assert_ne!(Value::from(-1), Value::from(u64::MAX));
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
    }

    #[test]
    fn test_kinds_never_equal() {
        assert_ne!(Value::null(), Value::from(false));
        assert_ne!(Value::from("1"), Value::from(1));
        assert_ne!(Value::new(), Value::array(Vec::new()));
    }

    #[test]
    fn test_object_equality_ignores_order() {
        let a = Value::object_from([("x", 1), ("y", 2)]);
        let b = Value::object_from([("y", 2), ("x", 1)]);
        let c = Value::object_from([("x", 1), ("y", 3)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Value::object_from([("x", 1)]));
    }

    #[test]
    fn test_array_equality_is_ordered() {
        let a = Value::array(vec![Value::from(1), Value::from(2)]);
        let b = Value::array(vec![Value::from(2), Value::from(1)]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_own_key_ignored() {
        let obj = Value::object_from([("a", 5), ("b", 5)]);
        assert_eq!(obj["a"], obj["b"]);
    }

    #[test]
    fn test_kind_rank_ordering() {
        let ranked = [
            Value::new(),
            Value::array(Vec::new()),
            Value::from(""),
            Value::from(0),
            Value::from(false),
            Value::null(),
        ];
        assert!(ranked.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_payload_ordering() {
        assert!(Value::from(1) < Value::from(2.5));
        assert!(Value::from("abc") < Value::from("abd"));
        assert!(Value::from(false) < Value::from(true));

        let short = Value::array(vec![Value::from(1)]);
        let long = Value::array(vec![Value::from(1), Value::from(0)]);
        assert!(short < long);
    }

    #[test]
    fn test_object_ordering_consistent_with_equality() {
        let a = Value::object_from([("b", 1), ("a", 2)]);
        let b = Value::object_from([("a", 2), ("b", 1)]);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));

        let smaller = Value::object_from([("a", 1)]);
        assert!(smaller < a);
    }

    #[test]
    fn test_number_equality_is_transitive() {
        let a = Value::from((1i64 << 53) + 1);
        let b = Value::from((1u64 << 53) as f64);
        let c = Value::from(1u64 << 53);
        assert_eq!(b, c);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(Value::from(i64::MAX), 9_223_372_036_854_775_808.0);
    }

    #[test]
    fn test_primitive_comparisons() {
        assert_eq!(Value::from(42), 42);
        assert_eq!(Value::from(42u64), 42i32);
        assert_eq!(Value::from(1.5), 1.5);
        assert_eq!(Value::from("x"), "x");
        assert_eq!(Value::from("x"), String::from("x"));
        assert_eq!(Value::from(true), true);
        assert_eq!(42, Value::from(42));
        assert_ne!(Value::from("42"), 42);
        assert_ne!(Value::null(), false);
    }
}
