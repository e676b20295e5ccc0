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

//! Package `vantage.engine.schema`: collection schema management.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Field {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(enumeration = "field::Type", tag = "3")]
    pub r#type: i32,
    #[prost(bool, tag = "4")]
    pub repeated: bool,
    #[prost(bool, tag = "5")]
    pub required: bool,
    #[prost(bool, tag = "6")]
    pub indexed: bool,
    #[prost(bool, tag = "7")]
    pub unique: bool,
}

pub mod field {
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum Type {
        String = 0,
        Integer = 1,
        Float = 2,
        Boolean = 3,
        Timestamp = 4,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Fields {
    #[prost(message, repeated, tag = "1")]
    pub fields: Vec<Field>,
}

/// Per-field statuses for AddFields/MutateField, positional.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Response {
    #[prost(message, repeated, tag = "1")]
    pub status: Vec<super::rpc::Status>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MutateFieldRequest {
    /// Name of the field to mutate.
    #[prost(string, tag = "1")]
    pub name: String,
    /// Applied in order; the remainder is skipped after the first failure.
    #[prost(message, repeated, tag = "2")]
    pub mutations: Vec<mutate_field_request::Mutation>,
}

pub mod mutate_field_request {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Mutation {
        #[prost(oneof = "mutation::Mutation", tags = "1, 2, 3, 4, 5, 6")]
        pub mutation: Option<mutation::Mutation>,
    }

    pub mod mutation {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Mutation {
            #[prost(string, tag = "1")]
            Name(String),
            #[prost(enumeration = "super::super::field::Type", tag = "2")]
            Type(i32),
            #[prost(bool, tag = "3")]
            Repeated(bool),
            #[prost(bool, tag = "4")]
            Required(bool),
            #[prost(bool, tag = "5")]
            Unique(bool),
            #[prost(bool, tag = "6")]
            Indexed(bool),
        }
    }
}

pub mod schema_client {
    use super::*;
    use tonic::codegen::http::uri::PathAndQuery;

    /// Unary client for the `vantage.engine.schema.Schema` service.
    #[derive(Debug, Clone)]
    pub struct SchemaClient {
        inner: tonic::client::Grpc<tonic::transport::Channel>,
    }

    impl SchemaClient {
        pub fn new(channel: tonic::transport::Channel) -> Self {
            Self {
                inner: tonic::client::Grpc::new(channel),
            }
        }

        async fn ready(&mut self) -> Result<(), tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e))
            })
        }

        pub async fn get_fields(
            &mut self,
            request: tonic::Request<super::super::rpc::Empty>,
        ) -> Result<tonic::Response<Fields>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                PathAndQuery::from_static("/vantage.engine.schema.Schema/GetFields");
            self.inner.unary(request, path, codec).await
        }

        pub async fn add_fields(
            &mut self,
            request: tonic::Request<Fields>,
        ) -> Result<tonic::Response<Response>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                PathAndQuery::from_static("/vantage.engine.schema.Schema/AddFields");
            self.inner.unary(request, path, codec).await
        }

        pub async fn mutate_field(
            &mut self,
            request: tonic::Request<MutateFieldRequest>,
        ) -> Result<tonic::Response<Response>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                PathAndQuery::from_static("/vantage.engine.schema.Schema/MutateField");
            self.inner.unary(request, path, codec).await
        }
    }
}
