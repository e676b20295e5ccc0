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

//! Package `vantage.bayes`: training sets, model training and
//! classification queries.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddClassRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub class: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UploadRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub class: String,
    #[prost(string, repeated, tag = "3")]
    pub data: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UploadResponse {
    /// Content hash of the uploaded record.
    #[prost(string, tag = "1")]
    pub hash: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InfoRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InfoResponse {
    #[prost(string, repeated, tag = "1")]
    pub classes: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TrainRequest {
    /// Training set to train from.
    #[prost(string, tag = "1")]
    pub name: String,
    /// Name to store the resulting model under.
    #[prost(string, tag = "2")]
    pub model: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TrainResponse {
    #[prost(uint32, tag = "1")]
    pub correct: u32,
    #[prost(uint32, tag = "2")]
    pub incorrect: u32,
    #[prost(message, repeated, tag = "3")]
    pub errors: Vec<train_response::ClassError>,
}

pub mod train_response {
    /// Records misclassified into `got` during cross-validation.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ClassError {
        #[prost(string, tag = "1")]
        pub got: String,
        #[prost(uint32, tag = "2")]
        pub count: u32,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryRequest {
    #[prost(string, tag = "1")]
    pub model: String,
    #[prost(string, repeated, tag = "2")]
    pub data: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryResponse {
    /// Best-matching class.
    #[prost(string, tag = "1")]
    pub best: String,
}

pub mod training_set_client {
    use super::*;
    use tonic::codegen::http::uri::PathAndQuery;

    /// Unary client for the `vantage.bayes.TrainingSet` service.
    #[derive(Debug, Clone)]
    pub struct TrainingSetClient {
        inner: tonic::client::Grpc<tonic::transport::Channel>,
    }

    impl TrainingSetClient {
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

        pub async fn create(
            &mut self,
            request: tonic::Request<CreateRequest>,
        ) -> Result<tonic::Response<super::super::rpc::Empty>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path = PathAndQuery::from_static("/vantage.bayes.TrainingSet/Create");
            self.inner.unary(request, path, codec).await
        }

        pub async fn add_class(
            &mut self,
            request: tonic::Request<AddClassRequest>,
        ) -> Result<tonic::Response<super::super::rpc::Empty>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                PathAndQuery::from_static("/vantage.bayes.TrainingSet/AddClass");
            self.inner.unary(request, path, codec).await
        }

        pub async fn upload(
            &mut self,
            request: tonic::Request<UploadRequest>,
        ) -> Result<tonic::Response<UploadResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path = PathAndQuery::from_static("/vantage.bayes.TrainingSet/Upload");
            self.inner.unary(request, path, codec).await
        }

        pub async fn info(
            &mut self,
            request: tonic::Request<InfoRequest>,
        ) -> Result<tonic::Response<InfoResponse>, tonic::Status> {
            self.ready().await?;
            let codec = tonic::codec::ProstCodec::default();
            let path = PathAndQuery::from_static("/vantage.bayes.TrainingSet/Info");
            self.inner.unary(request, path, codec).await
        }
    }
}

pub mod train_client {
    use super::*;
    use tonic::codegen::http::uri::PathAndQuery;

    /// Unary client for the `vantage.bayes.Train` service.
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

        pub async fn train(
            &mut self,
            request: tonic::Request<TrainRequest>,
        ) -> Result<tonic::Response<TrainResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = PathAndQuery::from_static("/vantage.bayes.Train/Train");
            self.inner.unary(request, path, codec).await
        }
    }
}

pub mod query_client {
    use super::*;
    use tonic::codegen::http::uri::PathAndQuery;

    /// Unary client for the `vantage.bayes.Query` service.
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

        pub async fn query(
            &mut self,
            request: tonic::Request<QueryRequest>,
        ) -> Result<tonic::Response<QueryResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = PathAndQuery::from_static("/vantage.bayes.Query/Query");
            self.inner.unary(request, path, codec).await
        }
    }
}
