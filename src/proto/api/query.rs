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

//! Package `vantage.api.query.v1`: tracked search over the engine query
//! model. Tracking tokens generated here feed back into interaction
//! scoring.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchRequest {
    #[prost(message, optional, tag = "1")]
    pub tracking: Option<search_request::Tracking>,
    #[prost(message, optional, tag = "2")]
    pub search_request: Option<super::super::query::SearchRequest>,
}

pub mod search_request {
    use std::collections::HashMap;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Tracking {
        #[prost(enumeration = "tracking::Type", tag = "1")]
        pub r#type: i32,
        #[prost(string, tag = "2")]
        pub query_id: String,
        #[prost(int32, tag = "3")]
        pub sequence: i32,
        #[prost(string, tag = "4")]
        pub field: String,
        #[prost(map = "string, string", tag = "5")]
        pub data: HashMap<String, String>,
    }

    pub mod tracking {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
        )]
        #[repr(i32)]
        pub enum Type {
            None = 0,
            Click = 1,
            PosNeg = 2,
        }
    }
}

/// Per-result tracking token.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Token {
    #[prost(oneof = "token::Token", tags = "1, 2")]
    pub token: Option<token::Token>,
}

pub mod token {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Click {
        #[prost(string, tag = "1")]
        pub token: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct PosNeg {
        #[prost(string, tag = "1")]
        pub pos: String,
        #[prost(string, tag = "2")]
        pub neg: String,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Token {
        #[prost(message, tag = "1")]
        Click(Click),
        #[prost(message, tag = "2")]
        PosNeg(PosNeg),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchResponse {
    #[prost(message, optional, tag = "1")]
    pub search_response: Option<super::super::query::SearchResponse>,
    /// One token per result, in result order.
    #[prost(message, repeated, tag = "2")]
    pub tokens: Vec<Token>,
}

pub mod query_client {
    use super::*;
    use tonic::codegen::http::uri::PathAndQuery;

    /// Unary client for the `vantage.api.query.v1.Query` service.
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
            let path = PathAndQuery::from_static("/vantage.api.query.v1.Query/Search");
            self.inner.unary(request, path, codec).await
        }
    }
}
