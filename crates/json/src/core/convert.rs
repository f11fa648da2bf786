//! Interop with `serde_json::Value`
//!
//! `serde_json` is built with `preserve_order`, so member order survives the
//! trip in both directions.

use serde_json::Value as Json;

use crate::core::number::Number;
use crate::core::value::{Data, Value};

impl Value {
    /// Convert into a `serde_json::Value`.
    ///
    /// Non-finite floats have no JSON form and become `null`.
    pub fn to_json(&self) -> Json {
        match &self.data {
            Data::Null => Json::Null,
            Data::Bool(b) => Json::Bool(*b),
            Data::Number(Number::Int(i)) => Json::from(*i),
            Data::Number(Number::UInt(u)) => Json::from(*u),
            Data::Number(Number::Float(f)) => {
                serde_json::Number::from_f64(*f).map_or(Json::Null, Json::Number)
            }
            Data::String(s) => Json::String(s.clone()),
            Data::Array(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Data::Object(_) => Json::Object(
                self.keyed_members()
                    .map(|(key, m)| (key.to_owned(), m.to_json()))
                    .collect(),
            ),
        }
    }

    /// Build from a `serde_json::Value`
    pub fn from_json(json: Json) -> Self {
        Self::from(json)
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::null(),
            Json::Bool(b) => Value::boolean(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::uint(u)
                } else {
                    n.as_f64().map_or_else(Value::null, Value::float)
                }
            }
            Json::String(s) => Value::string(s),
            Json::Array(items) => Value::array(items.into_iter().map(Value::from)),
            Json::Object(map) => Value::object_from(map),
        }
    }
}

impl From<&Value> for Json {
    fn from(value: &Value) -> Self {
        value.to_json()
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        value.to_json()
    }
}
