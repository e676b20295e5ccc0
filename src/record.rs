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

//! Records and the record store operations.
//!
//! Every singular operation is a batch of size one over its `_multi`
//! counterpart. Batch calls return positionally: the `i`-th output (and,
//! on partial failure, the `i`-th [`MultiError`] slot) corresponds to the
//! `i`-th input.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::{single_error, Error, MultiError};
use crate::proto;
use crate::proto::record::store_client::StoreClient;
use crate::transform::Transform;
use crate::value::Value;
use crate::Client;

/// Name of the internal field holding the record body. Field names
/// prefixed with `_` are reserved.
pub const BODY_FIELD: &str = "_body";

/// Name of the internal identifier field added to each record.
pub const ID_FIELD: &str = "_id";

/// A set of field/value pairs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    values: HashMap<String, Value>,
}

impl Record {
    pub fn new() -> Record {
        Record::default()
    }

    /// Creates a record with `body` stored in the [`BODY_FIELD`] alongside
    /// the given field values.
    pub fn with_body(body: impl Into<String>, values: HashMap<String, Value>) -> Record {
        let mut record = Record { values };
        record.set(BODY_FIELD, Value::String(body.into()));
        record
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Record {
        self.values.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn into_values(self) -> HashMap<String, Value> {
        self.values
    }

    pub(crate) fn to_proto(&self) -> proto::record::Record {
        proto::record::Record {
            values: self
                .values
                .iter()
                .map(|(k, v)| (k.clone(), v.to_proto()))
                .collect(),
        }
    }

    pub(crate) fn from_proto(record: proto::record::Record) -> Result<Record, Error> {
        let values = record
            .values
            .into_iter()
            .map(|(k, v)| Ok((k, Value::from_proto(v)?)))
            .collect::<Result<HashMap<_, _>, Error>>()?;
        Ok(Record { values })
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Record {
        Record {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, Value>> for Record {
    fn from(values: HashMap<String, Value>) -> Record {
        Record { values }
    }
}

/// A unique identifier for a stored record: a unique field plus its value.
#[derive(Clone, Debug, PartialEq)]
pub struct Key {
    field: String,
    value: Value,
}

impl Key {
    /// Creates a key. `field` must be marked unique in the collection
    /// schema, and the value must be a single scalar.
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Key {
        Key {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub(crate) fn to_proto(&self) -> Result<proto::engine::Key, Error> {
        if self.field.is_empty() {
            return Err(Error::InvalidKey("empty key field".to_string()));
        }
        let value = self
            .value
            .to_single_proto()
            .map_err(|e| Error::InvalidKey(format!("key value: {}", e)))?;
        Ok(proto::engine::Key {
            field: self.field.clone(),
            value: Some(value),
        })
    }

    pub(crate) fn from_proto(key: proto::engine::Key) -> Result<Option<Key>, Error> {
        if key.field.is_empty() && key.value.is_none() {
            return Ok(None);
        }
        let value = match key.value {
            Some(v) => Value::from_proto(v)?,
            None => return Err(Error::Decode("key without value".to_string())),
        };
        Ok(Some(Key {
            field: key.field,
            value,
        }))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key{{field: {:?}, value: {:?}}}", self.field, self.value)
    }
}

pub(crate) fn keys_to_proto(keys: &[Key]) -> Result<Vec<proto::engine::Key>, Error> {
    keys.iter().map(Key::to_proto).collect()
}

/// A change to a single field of a record.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldMutation {
    field: String,
    value: Option<Value>,
}

impl FieldMutation {
    /// Sets `field` to `value`.
    pub fn set(field: impl Into<String>, value: impl Into<Value>) -> FieldMutation {
        FieldMutation {
            field: field.into(),
            value: Some(value.into()),
        }
    }

    /// Clears `field`.
    pub fn unset(field: impl Into<String>) -> FieldMutation {
        FieldMutation {
            field: field.into(),
            value: None,
        }
    }

    fn to_proto(
        &self,
    ) -> proto::record::mutate_request::record_mutation::FieldMutation {
        use proto::record::mutate_request::record_mutation::{
            field_mutation, FieldMutation,
        };
        FieldMutation {
            field: self.field.clone(),
            mutation: Some(field_mutation::Mutation::Set(match &self.value {
                Some(v) => v.to_proto(),
                None => proto::engine::Value { value: None },
            })),
        }
    }
}

/// Converts a map of field/value pairs into set-field mutations.
pub fn set_fields(values: HashMap<String, Value>) -> Vec<FieldMutation> {
    values
        .into_iter()
        .map(|(field, value)| FieldMutation {
            field,
            value: Some(value),
        })
        .collect()
}

/// A mutation applied to the record identified by `key`.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordMutation {
    pub key: Key,
    pub field_mutations: Vec<FieldMutation>,
}

impl RecordMutation {
    pub fn new(key: Key, field_mutations: Vec<FieldMutation>) -> RecordMutation {
        RecordMutation {
            key,
            field_mutations,
        }
    }

    fn to_proto(
        &self,
    ) -> Result<proto::record::mutate_request::RecordMutation, Error> {
        Ok(proto::record::mutate_request::RecordMutation {
            key: Some(self.key.to_proto()?),
            field_mutations: self
                .field_mutations
                .iter()
                .map(FieldMutation::to_proto)
                .collect(),
        })
    }
}

impl Client {
    /// Adds a record, returning a key for later retrieval. Uses the
    /// configured default transforms.
    pub async fn add(&self, record: Record) -> Result<Key, Error> {
        let (mut keys, err) = self.add_multi(vec![record], &[]).await?;
        if let Some(me) = err {
            return Err(single_error(me));
        }
        match keys.pop() {
            Some(key) => Ok(key),
            None => Err(Error::Decode("missing key in add response".to_string())),
        }
    }

    /// Adds records, returning one key per record. An empty transform
    /// list selects the configured defaults.
    ///
    /// On partial failure the returned [`MultiError`] holds the error for
    /// each failed index; keys for successful indexes remain valid.
    pub async fn add_multi(
        &self,
        records: Vec<Record>,
        transforms: &[Transform],
    ) -> Result<(Vec<Key>, Option<MultiError>), Error> {
        let pb_records: Vec<_> = records.iter().map(Record::to_proto).collect();

        let transforms = if transforms.is_empty() {
            self.default_add_transforms()
        } else {
            transforms
        };
        let pb_transforms = transforms
            .iter()
            .map(|t| proto::record::Transform {
                identifier: t.identifier().to_string(),
            })
            .collect();

        debug!(records = pb_records.len(), "adding records");
        let response = StoreClient::new(self.channel())
            .add(self.request(proto::record::Records {
                records: pb_records,
                transforms: pb_transforms,
            }))
            .await?
            .into_inner();

        let keys = response
            .keys
            .into_iter()
            .map(|k| {
                Key::from_proto(k)?.ok_or_else(|| {
                    Error::Decode("empty key in add response".to_string())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok((keys, MultiError::from_statuses(&response.status)))
    }

    /// Returns the record identified by `key`.
    pub async fn get(&self, key: &Key) -> Result<Record, Error> {
        let (mut records, err) = self.get_multi(std::slice::from_ref(key)).await?;
        if let Some(me) = err {
            return Err(single_error(me));
        }
        match records.pop() {
            Some(record) => Ok(record),
            None => Err(Error::Decode("missing record in response".to_string())),
        }
    }

    /// Retrieves the records identified by `keys`, positionally. Indexes
    /// which failed hold an empty record and are flagged in the
    /// [`MultiError`].
    pub async fn get_multi(
        &self,
        keys: &[Key],
    ) -> Result<(Vec<Record>, Option<MultiError>), Error> {
        let pb_keys = keys_to_proto(keys)?;

        debug!(keys = pb_keys.len(), "getting records");
        let response = StoreClient::new(self.channel())
            .get(self.request(proto::record::Keys { keys: pb_keys }))
            .await?
            .into_inner();

        let records = response
            .records
            .into_iter()
            .map(Record::from_proto)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((records, MultiError::from_statuses(&response.status)))
    }

    /// Removes the record identified by `key`.
    pub async fn delete(&self, key: &Key) -> Result<(), Error> {
        self.delete_multi(std::slice::from_ref(key))
            .await
            .map_err(|e| match e {
                Error::Multi(me) => single_error(me),
                other => other,
            })
    }

    /// Removes the records identified by `keys`.
    pub async fn delete_multi(&self, keys: &[Key]) -> Result<(), Error> {
        let pb_keys = keys_to_proto(keys)?;

        debug!(keys = pb_keys.len(), "deleting records");
        let response = StoreClient::new(self.channel())
            .delete(self.request(proto::record::Keys { keys: pb_keys }))
            .await?
            .into_inner();

        match MultiError::from_statuses(&response.status) {
            Some(me) => Err(Error::Multi(me)),
            None => Ok(()),
        }
    }

    /// Reports whether a record identified by `key` exists.
    pub async fn exists(&self, key: &Key) -> Result<bool, Error> {
        let mut out = self
            .exists_multi(std::slice::from_ref(key))
            .await
            .map_err(|e| match e {
                Error::Multi(me) => single_error(me),
                other => other,
            })?;
        match out.pop() {
            Some(exists) => Ok(exists),
            None => Err(Error::Decode("missing status in response".to_string())),
        }
    }

    /// Reports, positionally, whether records identified by `keys` exist.
    /// Statuses other than OK/NotFound fail the call with a positional
    /// [`MultiError`].
    pub async fn exists_multi(&self, keys: &[Key]) -> Result<Vec<bool>, Error> {
        let pb_keys = keys_to_proto(keys)?;

        let response = StoreClient::new(self.channel())
            .exists(self.request(proto::record::Keys { keys: pb_keys }))
            .await?
            .into_inner();

        let mut out = Vec::with_capacity(response.status.len());
        let mut errors = Vec::with_capacity(response.status.len());
        for s in &response.status {
            match tonic::Code::from(s.code) {
                tonic::Code::Ok => {
                    out.push(true);
                    errors.push(None);
                }
                tonic::Code::NotFound => {
                    out.push(false);
                    errors.push(None);
                }
                code => {
                    errors.push(Some(Error::Rpc(tonic::Status::new(
                        code,
                        s.message.clone(),
                    ))));
                }
            }
        }

        match MultiError::new(errors) {
            Some(me) => Err(Error::Multi(me)),
            None => Ok(out),
        }
    }

    /// Applies field mutations to the record identified by `key`,
    /// in place where possible.
    pub async fn mutate(
        &self,
        key: &Key,
        field_mutations: Vec<FieldMutation>,
    ) -> Result<(), Error> {
        self.mutate_multi(vec![RecordMutation::new(key.clone(), field_mutations)])
            .await
            .map_err(|e| match e {
                Error::Multi(me) => single_error(me),
                other => other,
            })
    }

    /// Applies a batch of record mutations.
    pub async fn mutate_multi(
        &self,
        mutations: Vec<RecordMutation>,
    ) -> Result<(), Error> {
        let record_mutations = mutations
            .iter()
            .map(RecordMutation::to_proto)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(mutations = record_mutations.len(), "mutating records");
        let response = StoreClient::new(self.channel())
            .mutate(self.request(proto::record::MutateRequest { record_mutations }))
            .await?
            .into_inner();

        match MultiError::from_statuses(&response.status) {
            Some(me) => Err(Error::Multi(me)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_with_body_sets_reserved_field() {
        let record = Record::with_body("hello world", HashMap::new());
        assert_eq!(
            record.get(BODY_FIELD),
            Some(&Value::String("hello world".to_string()))
        );
    }

    #[test]
    fn test_record_proto_round_trip() {
        let mut record = Record::new();
        record.set("title", "a book");
        record.set("count", 3i64);
        record.set("tags", vec!["x", "y"]);

        let decoded = Record::from_proto(record.to_proto()).expect("decode");
        // Encode/decode is string-typed by design.
        assert_eq!(
            decoded.get("title"),
            Some(&Value::String("a book".to_string()))
        );
        assert_eq!(decoded.get("count"), Some(&Value::String("3".to_string())));
        assert_eq!(
            decoded.get("tags"),
            Some(&Value::List(vec!["x".to_string(), "y".to_string()]))
        );
    }

    #[test]
    fn test_key_requires_single_value() {
        let err = Key::new("id", vec!["a", "b"]).to_proto().unwrap_err();
        assert!(matches!(err, Error::InvalidKey(_)));

        let pb = Key::new("id", 7i64).to_proto().expect("serialize");
        assert_eq!(pb.field, "id");
    }

    #[test]
    fn test_key_rejects_empty_field() {
        let err = Key::new("", "x").to_proto().unwrap_err();
        assert!(matches!(err, Error::InvalidKey(_)));
    }

    #[test]
    fn test_empty_wire_key_decodes_to_none() {
        let none = Key::from_proto(proto::engine::Key {
            field: String::new(),
            value: None,
        })
        .expect("decode");
        assert!(none.is_none());
    }

    #[test]
    fn test_field_mutation_unset_sends_empty_value() {
        use proto::record::mutate_request::record_mutation::field_mutation::Mutation;

        let pb = FieldMutation::unset("stale").to_proto();
        assert_eq!(pb.field, "stale");
        match pb.mutation.expect("mutation") {
            Mutation::Set(v) => assert!(v.value.is_none()),
        }
    }

    #[test]
    fn test_set_fields_builds_one_mutation_per_field() {
        let mutations = set_fields(HashMap::from([
            ("a".to_string(), Value::from(1i64)),
            ("b".to_string(), Value::from("x")),
        ]));
        assert_eq!(mutations.len(), 2);
        assert!(mutations
            .iter()
            .all(|m| m.value.is_some() && !m.field.is_empty()));
    }
}
