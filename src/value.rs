/*
 * Copyright 2026 Vantage Engineering
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Field values.
//!
//! [`Value`] is a closed union over the shapes the engine accepts: a
//! scalar (string, integer, float, boolean, timestamp) or a homogeneous
//! list. On the wire every scalar is a string-encoded single and every
//! list a repeated string list; timestamps are encoded as Unix seconds.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::Error;
use crate::proto;

/// A record field value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    /// Homogeneous list, held in its string-encoded form.
    List(Vec<String>),
}

impl Value {
    /// Wire encoding. Scalars become string-encoded singles, lists become
    /// repeated values.
    pub(crate) fn to_proto(&self) -> proto::engine::Value {
        use proto::engine::value;
        let value = match self {
            Value::List(vs) => value::Value::Repeated(value::Repeated {
                values: vs.clone(),
            }),
            single => value::Value::Single(single.encode()),
        };
        proto::engine::Value { value: Some(value) }
    }

    /// Wire encoding restricted to single values; lists are rejected.
    /// Keys must be single-valued.
    pub(crate) fn to_single_proto(&self) -> Result<proto::engine::Value, Error> {
        use proto::engine::value;
        match self {
            Value::List(_) => Err(Error::UnsupportedValue(
                "expected single value, got list".to_string(),
            )),
            single => Ok(proto::engine::Value {
                value: Some(value::Value::Single(single.encode())),
            }),
        }
    }

    /// Decodes a wire value.
    ///
    /// The engine does not echo type information back, so decoding is
    /// intentionally lossy: singles always come back as [`Value::String`]
    /// and repeated values as [`Value::List`], regardless of the schema
    /// type they were written with.
    pub(crate) fn from_proto(v: proto::engine::Value) -> Result<Value, Error> {
        use proto::engine::value;
        match v.value {
            Some(value::Value::Single(s)) => Ok(Value::String(s)),
            Some(value::Value::Repeated(r)) => Ok(Value::List(r.values)),
            None => Err(Error::Decode("empty value".to_string())),
        }
    }

    /// String encoding of a scalar. Lists have no single encoding.
    fn encode(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Timestamp(t) => t.timestamp().to_string(),
            Value::List(_) => unreachable!("lists are encoded as repeated values"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::List(vs) => write!(f, "[{}]", vs.join(", ")),
            single => write!(f, "{}", single.encode()),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Integer(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Value {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Value {
        Value::Float(f64::from(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Boolean(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Value {
        Value::Timestamp(t)
    }
}

impl From<Vec<String>> for Value {
    fn from(vs: Vec<String>) -> Value {
        Value::List(vs)
    }
}

impl From<Vec<&str>> for Value {
    fn from(vs: Vec<&str>) -> Value {
        Value::List(vs.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<i64>> for Value {
    fn from(vs: Vec<i64>) -> Value {
        Value::List(vs.into_iter().map(|v| v.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proto::engine::value;

    fn single(v: &proto::engine::Value) -> &str {
        match v.value.as_ref().expect("value set") {
            value::Value::Single(s) => s,
            other => panic!("expected single, got {:?}", other),
        }
    }

    #[test]
    fn test_scalar_encoding() {
        assert_eq!(single(&Value::from("hello").to_proto()), "hello");
        assert_eq!(single(&Value::from(42i64).to_proto()), "42");
        assert_eq!(single(&Value::from(-7i32).to_proto()), "-7");
        assert_eq!(single(&Value::from(2.5f64).to_proto()), "2.5");
        assert_eq!(single(&Value::from(true).to_proto()), "true");
    }

    #[test]
    fn test_timestamp_encodes_unix_seconds() {
        let t = Utc.timestamp_opt(1_500_000_000, 0).unwrap();
        assert_eq!(single(&Value::from(t).to_proto()), "1500000000");
    }

    #[test]
    fn test_list_encoding_preserves_order() {
        let v = Value::from(vec!["b", "a", "c"]).to_proto();
        match v.value.expect("value set") {
            value::Value::Repeated(r) => assert_eq!(r.values, vec!["b", "a", "c"]),
            other => panic!("expected repeated, got {:?}", other),
        }
    }

    #[test]
    fn test_round_trip_is_string_typed() {
        // Decoding never reconstructs numeric or boolean types; everything
        // comes back as strings.
        let decoded = Value::from_proto(Value::from(42i64).to_proto()).expect("decode");
        assert_eq!(decoded, Value::String("42".to_string()));

        let decoded =
            Value::from_proto(Value::from(vec![1i64, 2, 3]).to_proto()).expect("decode");
        assert_eq!(
            decoded,
            Value::List(vec!["1".to_string(), "2".to_string(), "3".to_string()])
        );
    }

    #[test]
    fn test_key_values_must_be_single() {
        let err = Value::from(vec!["a", "b"]).to_single_proto().unwrap_err();
        assert!(matches!(err, Error::UnsupportedValue(_)));
        assert!(Value::from("ok").to_single_proto().is_ok());
    }

    #[test]
    fn test_empty_value_fails_decode() {
        let err = Value::from_proto(proto::engine::Value { value: None }).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
