//! Numeric payload for JSON values.
//!
//! A [`Number`] remembers the representation it was created with, so an
//! `i64` written into a value reads back as the same `i64`, a `u64` as the
//! same `u64` and an `f64` as the same `f64`. Reads with a different
//! signedness or width convert with Rust `as` semantics (float to integer
//! truncates and saturates).

use std::cmp::Ordering;
use std::fmt;

/// Signed, unsigned or floating point number
#[derive(Clone, Copy, Debug)]
pub enum Number {
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit unsigned integer
    UInt(u64),
    /// 64-bit floating point
    Float(f64),
}

impl Number {
    // ==================== Type queries ====================

    /// Check if this holds a signed integer
    #[inline]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Check if this holds an unsigned integer
    #[inline]
    pub const fn is_uint(&self) -> bool {
        matches!(self, Self::UInt(_))
    }

    /// Check if this holds a float
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Check if this number is finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Int(_) | Self::UInt(_) => true,
            Self::Float(f) => f.is_finite(),
        }
    }

    // ==================== Conversions ====================

    /// Read as a signed integer
    pub const fn as_i64(&self) -> i64 {
        match *self {
            Self::Int(i) => i,
            Self::UInt(u) => u as i64,
            Self::Float(f) => f as i64,
        }
    }

    /// Read as an unsigned integer
    pub const fn as_u64(&self) -> u64 {
        match *self {
            Self::Int(i) => i as u64,
            Self::UInt(u) => u,
            Self::Float(f) => f as u64,
        }
    }

    /// Read as a float
    pub const fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(i) => i as f64,
            Self::UInt(u) => u as f64,
            Self::Float(f) => f,
        }
    }

    /// Widen to `i128` for range-checked narrowing.
    ///
    /// Floats truncate toward zero and saturate at the `i128` bounds.
    pub(crate) const fn as_i128(&self) -> i128 {
        match *self {
            Self::Int(i) => i as i128,
            Self::UInt(u) => u as i128,
            Self::Float(f) => f as i128,
        }
    }
}

/// Numbers compare by exact value across representations:
/// `Int(1) == UInt(1) == Float(1.0)`, while `Int(2^53 + 1) != Float(2^53)`.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
            (Self::Float(f), n) => cmp_integer_float(n.as_i128(), f).map(Ordering::reverse),
            (n, Self::Float(f)) => cmp_integer_float(n.as_i128(), f),
            (a, b) => Some(a.as_i128().cmp(&b.as_i128())),
        }
    }
}

/// Compare an integer with a float without rounding the integer through `f64`
#[allow(clippy::cast_possible_truncation)]
fn cmp_integer_float(i: i128, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f.is_infinite() {
        return Some(if f > 0.0 { Ordering::Less } else { Ordering::Greater });
    }
    // |f| < 2^1024 but any integer here fits 65 bits, so saturation keeps the order
    let whole = f.trunc();
    let fraction = f - whole;
    Some(
        i.cmp(&(whole as i128))
            .then_with(|| 0.0_f64.partial_cmp(&fraction).unwrap_or(Ordering::Equal)),
    )
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(fl) => write!(f, "{fl}"),
        }
    }
}

// ==================== From implementations ====================

macro_rules! impl_from_number {
    ($variant:ident as $wide:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                #[inline]
                #[allow(trivial_numeric_casts, clippy::unnecessary_cast)]
                fn from(v: $ty) -> Self {
                    Self::$variant(v as $wide)
                }
            }
        )*
    };
}

impl_from_number!(Int as i64: i8, i16, i32, i64, isize);
impl_from_number!(UInt as u64: u8, u16, u32, u64, usize);
impl_from_number!(Float as f64: f32, f64);
