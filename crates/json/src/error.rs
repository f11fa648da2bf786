//! Value Error Types
//!
//! Every fallible accessor on [`Value`](crate::Value) reports through
//! [`ValueError`]. Ergonomic accessors (`value["key"]`, [`Value::slot`](crate::Value::slot))
//! never surface these errors; they collapse failures into the null sentinel.

use thiserror::Error;

use crate::core::kind::Kind;
use crate::core::value::Value;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Errors produced by value access and conversion
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The operation needs a different kind of value
    #[error("not {expected}, found {actual}")]
    WrongKind { expected: Kind, actual: Kind },

    /// Object has no member with this key
    #[error("key not found: '{key}'")]
    NotFound { key: String },

    /// Array index past the end
    #[error("index {index} out of bounds (length {len})")]
    OutOfRange { index: usize, len: usize },

    /// Numeric narrowing failed
    #[error("cannot convert {from} to {to}")]
    Conversion { from: String, to: &'static str },

    /// A configured structural limit was exceeded
    #[error("{limit} exceeded: {actual} > {max}")]
    LimitExceeded {
        limit: &'static str,
        max: usize,
        actual: usize,
    },

    /// Nested error with location information
    #[error("{message}: {source}")]
    WithContext {
        message: String,
        #[source]
        source: Box<ValueError>,
    },
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValueError {
    /// Create a wrong kind error
    pub fn wrong_kind(expected: Kind, actual: Kind) -> Self {
        Self::WrongKind { expected, actual }
    }

    /// Create a key not found error
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create an index out of range error
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Create a numeric conversion error
    pub fn conversion(from: impl Into<String>, to: &'static str) -> Self {
        Self::Conversion {
            from: from.into(),
            to,
        }
    }

    /// Create a limit exceeded error
    pub fn limit_exceeded(limit: &'static str, max: usize, actual: usize) -> Self {
        Self::LimitExceeded { limit, max, actual }
    }

    /// Add context to an error
    pub fn with_context(self, message: impl Into<String>) -> Self {
        Self::WithContext {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// Add key context
    pub fn at_key(self, key: &str) -> Self {
        self.with_context(format!("at key '{key}'"))
    }

    /// Add index context
    pub fn at_index(self, index: usize) -> Self {
        self.with_context(format!("at index {index}"))
    }

    /// The innermost error, skipping any context layers
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::WithContext { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

impl ValueError {
    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::WrongKind { .. } => "JSON_WRONG_KIND",
            Self::NotFound { .. } => "JSON_NOT_FOUND",
            Self::OutOfRange { .. } => "JSON_OUT_OF_RANGE",
            Self::Conversion { .. } => "JSON_CONVERSION",
            Self::LimitExceeded { .. } => "JSON_LIMIT_EXCEEDED",
            Self::WithContext { source, .. } => source.code(),
        }
    }

    /// Whether this error only reports a missing key or index.
    ///
    /// `set`/`erase` treat these as normal outcomes rather than failures.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self.root_cause(),
            Self::NotFound { .. } | Self::OutOfRange { .. }
        )
    }
}

// ============================================================================
// RESULT TYPE
// ============================================================================

/// Result type alias for value operations
pub type ValueResult<T> = Result<T, ValueError>;

// ============================================================================
// RESULT EXTENSION TRAITS
// ============================================================================

/// Extension trait for attaching location context to value results
pub trait ValueResultExt<T> {
    /// Add key context to the error
    fn at_key(self, key: &str) -> ValueResult<T>;

    /// Add index context to the error
    fn at_index(self, index: usize) -> ValueResult<T>;
}

impl<T> ValueResultExt<T> for ValueResult<T> {
    fn at_key(self, key: &str) -> ValueResult<T> {
        self.map_err(|e| e.at_key(key))
    }

    fn at_index(self, index: usize) -> ValueResult<T> {
        self.map_err(|e| e.at_index(index))
    }
}

/// Collapse a failed lookup into the shared null sentinel.
///
/// This is how the `Index` operators turn `get` into an infallible access.
pub trait OrNull<'a> {
    /// The found value, or [`Value::sentinel`] on any error
    fn or_null(self) -> &'a Value;
}

impl<'a> OrNull<'a> for ValueResult<&'a Value> {
    fn or_null(self) -> &'a Value {
        self.unwrap_or_else(|_| Value::sentinel())
    }
}

// ============================================================================
// TESTS
// ============================================================================
