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

//! Package `vantage.engine.store.record`: the record store (`Store`) and
//! interaction scoring (`Score`) services.

use std::collections::HashMap;

/// A stored record: field name to value.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Record {
    #[prost(map = "string, message", tag = "1")]
    pub values: HashMap<String, super::engine::Value>,
}

/// A named server-side text-processing step applied at write time.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transform {
    #[prost(string, tag = "1")]
    pub identifier: String,
}

/// Add request: records plus the transforms to run over them.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Records {
    #[prost(message, repeated, tag = "1")]
    pub records: Vec<Record>,
    #[prost(message, repeated, tag = "2")]
    pub transforms: Vec<Transform>,
}

/// Key list used by Get/Delete/Exists.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Keys {
    #[prost(message, repeated, tag = "1")]
    pub keys: Vec<super::engine::Key>,
}

/// Add response: one key and one status per input record, positionally.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeysResponse {
    #[prost(message, repeated, tag = "1")]
    pub keys: Vec<super::engine::Key>,
    #[prost(message, repeated, tag = "2")]
    pub status: Vec<super::rpc::Status>,
}

/// Get response: one record and one status per input key, positionally.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetResponse {
    #[prost(message, repeated, tag = "1")]
    pub records: Vec<Record>,
    #[prost(message, repeated, tag = "2")]
    pub status: Vec<super::rpc::Status>,
}

/// Response carrying only positional statuses (Delete/Exists/Mutate/Increment).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StatusResponse {
    #[prost(message, repeated, tag = "1")]
    pub status: Vec<super::rpc::Status>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MutateRequest {
    #[prost(message, repeated, tag = "1")]
    pub record_mutations: Vec<mutate_request::RecordMutation>,
}

pub mod mutate_request {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct RecordMutation {
        #[prost(message, optional, tag = "1")]
        pub key: Option<super::super::engine::Key>,
        #[prost(message, repeated, tag = "2")]
        pub field_mutations: Vec<record_mutation::FieldMutation>,
    }

    pub mod record_mutation {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct FieldMutation {
            #[prost(string, tag = "1")]
            pub field: String,
            #[prost(oneof = "field_mutation::Mutation", tags = "2")]
            pub mutation: Option<field_mutation::Mutation>,
        }

        pub mod field_mutation {
            #[derive(Clone, PartialEq, ::prost::Oneof)]
            pub enum Mutation {
                /// Set the field to a new value. An unset value clears the
                /// field.
                #[prost(message, tag = "2")]
                Set(super::super::super::super::engine::Value),
            }
        }
    }
}

/// Interaction score updates for a single record, positional with terms
/// computed by the analyse path.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyScores {
    #[prost(message, optional, tag = "1")]
    pub key: Option<super::engine::Key>,
    #[prost(message, repeated, tag = "2")]
    pub scores: Vec<key_scores::Score>,
}

pub mod key_scores {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Score {
        #[prost(string, repeated, tag = "1")]
        pub terms: Vec<String>,
        #[prost(int32, tag = "2")]
        pub count: i32,
        #[prost(float, tag = "3")]
        pub score: f32,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IncrementRequest {
    #[prost(message, repeated, tag = "1")]
    pub keys_scores: Vec<KeyScores>,
}

pub mod store_client {
    use super::*;
    use tonic::codegen::http::uri::PathAndQuery;

    /// Unary client for the `vantage.engine.store.record.Store` service.
    #[derive(Debug, Clone)]
    pub struct StoreClient {
        inner: tonic::client::Grpc<tonic::transport::Channel>,
    }

    impl StoreClient {
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

        pub async fn add(
            &mut self,
            request: tonic::Request<Records>,
        ) -> Result<tonic::Response<KeysResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                PathAndQuery::from_static("/vantage.engine.store.record.Store/Add");
            self.inner.unary(request, path, codec).await
        }

        pub async fn get(
            &mut self,
            request: tonic::Request<Keys>,
        ) -> Result<tonic::Response<GetResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                PathAndQuery::from_static("/vantage.engine.store.record.Store/Get");
            self.inner.unary(request, path, codec).await
        }

        pub async fn delete(
            &mut self,
            request: tonic::Request<Keys>,
        ) -> Result<tonic::Response<StatusResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                PathAndQuery::from_static("/vantage.engine.store.record.Store/Delete");
            self.inner.unary(request, path, codec).await
        }

        pub async fn exists(
            &mut self,
            request: tonic::Request<Keys>,
        ) -> Result<tonic::Response<StatusResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                PathAndQuery::from_static("/vantage.engine.store.record.Store/Exists");
            self.inner.unary(request, path, codec).await
        }

        pub async fn mutate(
            &mut self,
            request: tonic::Request<MutateRequest>,
        ) -> Result<tonic::Response<StatusResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                PathAndQuery::from_static("/vantage.engine.store.record.Store/Mutate");
            self.inner.unary(request, path, codec).await
        }
    }
}

pub mod score_client {
    use super::*;
    use tonic::codegen::http::uri::PathAndQuery;

    /// Unary client for the `vantage.engine.store.record.Score` service.
    #[derive(Debug, Clone)]
    pub struct ScoreClient {
        inner: tonic::client::Grpc<tonic::transport::Channel>,
    }

    impl ScoreClient {
        pub fn new(channel: tonic::transport::Channel) -> Self {
            Self {
                inner: tonic::client::Grpc::new(channel),
            }
        }

        pub async fn increment(
            &mut self,
            request: tonic::Request<IncrementRequest>,
        ) -> Result<tonic::Response<StatusResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = PathAndQuery::from_static(
                "/vantage.engine.store.record.Score/Increment",
            );
            self.inner.unary(request, path, codec).await
        }
    }
}
