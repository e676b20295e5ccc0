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

//! Package `vantage.api.pipeline.v1`: named, server-configured query
//! templates invoked with caller-supplied key/value parameters.

use std::collections::HashMap;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Pipeline {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchRequest {
    #[prost(message, optional, tag = "1")]
    pub pipeline: Option<Pipeline>,
    #[prost(message, optional, tag = "2")]
    pub tracking: Option<super::query::search_request::Tracking>,
    #[prost(map = "string, string", tag = "3")]
    pub values: HashMap<String, String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchResponse {
    #[prost(message, optional, tag = "1")]
    pub search_response: Option<super::super::query::SearchResponse>,
    #[prost(message, repeated, tag = "2")]
    pub tokens: Vec<super::query::Token>,
    /// Input values as (possibly) rewritten by pipeline steps.
    #[prost(map = "string, string", tag = "3")]
    pub values: HashMap<String, String>,
}

pub mod query_client {
    use super::*;
    use tonic::codegen::http::uri::PathAndQuery;

    /// Unary client for the `vantage.api.pipeline.v1.Query` service.
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

        pub async fn search(
            &mut self,
            request: tonic::Request<SearchRequest>,
        ) -> Result<tonic::Response<SearchResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                PathAndQuery::from_static("/vantage.api.pipeline.v1.Query/Search");
            self.inner.unary(request, path, codec).await
        }
    }
}
