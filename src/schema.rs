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

//! Collection schema fields, their JSON interchange form and the
//! schema handle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, MultiError};
use crate::proto;
use crate::proto::schema::schema_client::SchemaClient;
use crate::Client;

/// Data type of a schema field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldType {
    #[default]
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
}

impl FieldType {
    fn to_proto(self) -> proto::schema::field::Type {
        use proto::schema::field::Type;
        match self {
            FieldType::String => Type::String,
            FieldType::Integer => Type::Integer,
            FieldType::Float => Type::Float,
            FieldType::Boolean => Type::Boolean,
            FieldType::Timestamp => Type::Timestamp,
        }
    }

    fn from_proto(ty: i32) -> Result<FieldType, Error> {
        use proto::schema::field::Type;
        match Type::try_from(ty) {
            Ok(Type::String) => Ok(FieldType::String),
            Ok(Type::Integer) => Ok(FieldType::Integer),
            Ok(Type::Float) => Ok(FieldType::Float),
            Ok(Type::Boolean) => Ok(FieldType::Boolean),
            Ok(Type::Timestamp) => Ok(FieldType::Timestamp),
            Err(_) => Err(Error::Decode(format!("unknown field type code {}", ty))),
        }
    }
}

/// A single field definition.
///
/// Serializes to the JSON interchange form used by schema tooling, e.g.
/// `{"name": "url", "type": "STRING", "unique": true}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub repeated: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub indexed: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unique: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Field {
        Field {
            name: name.into(),
            ty,
            ..Field::default()
        }
    }

    pub fn required(mut self) -> Field {
        self.required = true;
        self
    }

    pub fn unique(mut self) -> Field {
        self.unique = true;
        self
    }

    pub fn indexed(mut self) -> Field {
        self.indexed = true;
        self
    }

    pub fn repeated(mut self) -> Field {
        self.repeated = true;
        self
    }

    fn to_proto(&self) -> proto::schema::Field {
        proto::schema::Field {
            name: self.name.clone(),
            description: self.description.clone(),
            r#type: self.ty.to_proto() as i32,
            repeated: self.repeated,
            required: self.required,
            indexed: self.indexed,
            unique: self.unique,
        }
    }

    fn from_proto(field: proto::schema::Field) -> Result<Field, Error> {
        Ok(Field {
            ty: FieldType::from_proto(field.r#type)?,
            name: field.name,
            description: field.description,
            repeated: field.repeated,
            required: field.required,
            indexed: field.indexed,
            unique: field.unique,
        })
    }
}

/// Serializes field definitions to the JSON interchange form.
pub fn fields_to_json(fields: &[Field]) -> Result<String, Error> {
    serde_json::to_string_pretty(fields)
        .map_err(|e| Error::Config(format!("serializing fields: {}", e)))
}

/// Parses field definitions from the JSON interchange form.
pub fn fields_from_json(json: &str) -> Result<Vec<Field>, Error> {
    serde_json::from_str(json).map_err(|e| Error::Config(format!("parsing fields: {}", e)))
}

/// A change to an existing field definition.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    /// Renames the field.
    Name(String),
    /// Changes the underlying type. Only valid while the collection
    /// holds no data for the field.
    Type(FieldType),
    Repeated(bool),
    Required(bool),
    Unique(bool),
    Indexed(bool),
}

impl Mutation {
    fn to_proto(&self) -> proto::schema::mutate_field_request::Mutation {
        use proto::schema::mutate_field_request::mutation::Mutation as Pb;
        proto::schema::mutate_field_request::Mutation {
            mutation: Some(match self {
                Mutation::Name(name) => Pb::Name(name.clone()),
                Mutation::Type(ty) => Pb::Type(ty.to_proto() as i32),
                Mutation::Repeated(v) => Pb::Repeated(*v),
                Mutation::Required(v) => Pb::Required(*v),
                Mutation::Unique(v) => Pb::Unique(*v),
                Mutation::Indexed(v) => Pb::Indexed(*v),
            }),
        }
    }
}

/// Handle for reading and changing a collection's schema.
pub struct Schema<'a> {
    client: &'a Client,
}

impl<'a> Schema<'a> {
    pub(crate) fn new(client: &'a Client) -> Schema<'a> {
        Schema { client }
    }

    /// Returns the collection's field definitions.
    pub async fn fields(&self) -> Result<Vec<Field>, Error> {
        let response = SchemaClient::new(self.client.channel())
            .get_fields(self.client.request(proto::rpc::Empty {}))
            .await?
            .into_inner();

        response.fields.into_iter().map(Field::from_proto).collect()
    }

    /// Adds fields to the schema. On partial failure the [`MultiError`]
    /// indexes pair with the input fields.
    pub async fn add(&self, fields: &[Field]) -> Result<(), Error> {
        let pb_fields = fields.iter().map(Field::to_proto).collect();

        debug!(fields = fields.len(), "adding schema fields");
        let response = SchemaClient::new(self.client.channel())
            .add_fields(self.client.request(proto::schema::Fields { fields: pb_fields }))
            .await?
            .into_inner();

        match MultiError::from_statuses(&response.status) {
            Some(me) => Err(Error::Multi(me)),
            None => Ok(()),
        }
    }

    /// Applies mutations to the field named `name`, in order. Mutations
    /// after the first failing one are not applied.
    pub async fn mutate_field(
        &self,
        name: &str,
        mutations: &[Mutation],
    ) -> Result<(), Error> {
        let pb_mutations = mutations.iter().map(Mutation::to_proto).collect();

        debug!(field = name, "mutating schema field");
        let response = SchemaClient::new(self.client.channel())
            .mutate_field(self.client.request(proto::schema::MutateFieldRequest {
                name: name.to_string(),
                mutations: pb_mutations,
            }))
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
    fn test_field_json_interchange() {
        let fields = vec![
            Field::new("url", FieldType::String).unique().required(),
            Field::new("rating", FieldType::Float),
        ];

        let json = fields_to_json(&fields).expect("serialize");
        assert!(json.contains("\"type\": \"STRING\""));
        assert!(json.contains("\"unique\": true"));
        // false flags are omitted
        assert!(!json.contains("\"repeated\""));

        let parsed = fields_from_json(&json).expect("parse");
        assert_eq!(parsed, fields);
    }

    #[test]
    fn test_field_json_defaults() {
        let parsed = fields_from_json(r#"[{"name": "title"}]"#).expect("parse");
        assert_eq!(parsed, vec![Field::new("title", FieldType::String)]);
    }

    #[test]
    fn test_field_type_round_trip() {
        for ty in [
            FieldType::String,
            FieldType::Integer,
            FieldType::Float,
            FieldType::Boolean,
            FieldType::Timestamp,
        ] {
            assert_eq!(FieldType::from_proto(ty.to_proto() as i32).expect("decode"), ty);
        }
        assert!(FieldType::from_proto(99).is_err());
    }

    #[test]
    fn test_mutation_serialization() {
        use proto::schema::mutate_field_request::mutation::Mutation as Pb;

        let pb = Mutation::Type(FieldType::Integer).to_proto();
        assert_eq!(
            pb.mutation,
            Some(Pb::Type(proto::schema::field::Type::Integer as i32))
        );

        let pb = Mutation::Name("new_name".to_string()).to_proto();
        assert_eq!(pb.mutation, Some(Pb::Name("new_name".to_string())));
    }
}
