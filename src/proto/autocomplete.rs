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

//! Package `vantage.autocomplete`: training and querying autocomplete
//! models.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Model {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TrainCorpusRequest {
    #[prost(message, optional, tag = "1")]
    pub model: Option<Model>,
    /// Correctly-spelt terms for spelling correction.
    #[prost(string, repeated, tag = "2")]
    pub terms: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TrainQueryRequest {
    #[prost(message, optional, tag = "1")]
    pub model: Option<Model>,
    #[prost(string, tag = "2")]
    pub phrase: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TrainResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AutoCompleteRequest {
    #[prost(message, optional, tag = "1")]
    pub model: Option<Model>,
    #[prost(string, tag = "2")]
    pub phrase: String,
    #[prost(string, repeated, tag = "3")]
    pub terms: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AutoCompleteResponse {
    /// Completion candidates, best first.
    #[prost(string, repeated, tag = "1")]
    pub phrases: Vec<String>,
}

pub mod train_client {
    use super::*;
    use tonic::codegen::http::uri::PathAndQuery;

    /// Unary client for the `vantage.autocomplete.Train` service.
    #[derive(Debug, Clone)]
    pub struct TrainClient {
        inner: tonic::client::Grpc<tonic::transport::Channel>,
    }

    impl TrainClient {
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

        pub async fn train_corpus(
            &mut self,
            request: tonic::Request<TrainCorpusRequest>,
        ) -> Result<tonic::Response<TrainResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                PathAndQuery::from_static("/vantage.autocomplete.Train/TrainCorpus");
            self.inner.unary(request, path, codec).await
        }

        pub async fn train_query(
            &mut self,
            request: tonic::Request<TrainQueryRequest>,
        ) -> Result<tonic::Response<TrainResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                PathAndQuery::from_static("/vantage.autocomplete.Train/TrainQuery");
            self.inner.unary(request, path, codec).await
        }
    }
}

pub mod query_client {
    use super::*;
    use tonic::codegen::http::uri::PathAndQuery;

    /// Unary client for the `vantage.autocomplete.Query` service.
    #[derive(Debug, Clone)]
    pub struct QueryClient {
        inner: tonic::client::Grpc<tonic::transport::Channel>,
    }

    impl QueryClient {
        pub fn new(channel: tonic::transport::Channel) -> Self {
            Self {
                inner: tonic::client::Grpc::new(channel),
            }
        }

        pub async fn auto_complete(
            &mut self,
            request: tonic::Request<AutoCompleteRequest>,
        ) -> Result<tonic::Response<AutoCompleteResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                PathAndQuery::from_static("/vantage.autocomplete.Query/AutoComplete");
            self.inner.unary(request, path, codec).await
        }
    }
}
