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

//! # Vantage SDK
//!
//! Rust client library for the Vantage hosted search platform.
//!
//! The platform owns ranking, indexing, storage and query execution; this
//! crate builds typed query/filter/boost/aggregate requests, sends them
//! over gRPC and decodes responses back into Rust values. Every operation
//! is one unary round trip: there are no retries, no caching and no
//! client-side state beyond the channel. Cancellation and deadlines are
//! the caller's concern.
//!
//! ```no_run
//! use vantage::{Client, Config, Credentials, Request};
//!
//! # async fn run() -> Result<(), vantage::Error> {
//! let config = Config::default()
//!     .with_credentials(Credentials::key("key-id", "key-secret"));
//! let client = Client::new("my-project", "my-collection", config)?;
//!
//! let results = client.query().search(&Request::text("red shoes")).await?;
//! for result in &results.results {
//!     println!("{:?} ({})", result.values.get("_id"), result.score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod autocomplete;
pub mod bayes;
pub mod boost;
pub mod config;
pub mod creds;
pub mod error;
pub mod filter;
pub mod learn;
pub mod pipeline;
pub mod proto;
pub mod query;
pub mod record;
pub mod schema;
pub mod transform;
pub mod value;

pub use crate::aggregate::{Aggregate, AggregateValue, Bucket, BucketResult, Metric};
pub use crate::autocomplete::Autocomplete;
pub use crate::bayes::Bayes;
pub use crate::boost::{FeatureFieldBoost, FieldBoost, InstanceBoost, IntervalPoint};
pub use crate::config::Config;
pub use crate::creds::Credentials;
pub use crate::error::{Error, MultiError};
pub use crate::filter::{CombinatorOp, Filter, GeoRegion};
pub use crate::pipeline::Pipeline;
pub use crate::query::{
    Body, FeatureQuery, IndexQuery, Query, Request, Results, SearchResult, Sort, Term,
    Token, Tracking, TrackingType,
};
pub use crate::record::{FieldMutation, Key, Record, RecordMutation};
pub use crate::schema::{Field, FieldType, Mutation, Schema};
pub use crate::transform::Transform;
pub use crate::value::Value;

use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

/// Convenience alias for results with the crate error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A handle to a project/collection on the platform.
///
/// Cheap to clone; all clones share the underlying channel, which
/// multiplexes concurrent calls internally.
#[derive(Clone, Debug)]
pub struct Client {
    channel: Channel,
    project: MetadataValue<Ascii>,
    collection: MetadataValue<Ascii>,
    authorization: Option<MetadataValue<Ascii>>,
    default_add_transforms: Vec<Transform>,
}

impl Client {
    /// Creates a client for `project`/`collection` using `config`.
    ///
    /// The connection is established lazily on first use. Fails if the
    /// endpoint or any metadata value is malformed.
    pub fn new(project: &str, collection: &str, config: Config) -> Result<Client> {
        let mut endpoint = Endpoint::from_shared(config.endpoint.clone())?
            .user_agent(config.user_agent.clone())?;
        if config.endpoint.starts_with("https://") {
            endpoint = endpoint.tls_config(ClientTlsConfig::new())?;
        }
        let channel = endpoint.connect_lazy();
        Client::with_channel(channel, project, collection, config)
    }

    /// Creates a client over an existing channel. Useful for test servers
    /// and custom transport setups.
    pub fn with_channel(
        channel: Channel,
        project: &str,
        collection: &str,
        config: Config,
    ) -> Result<Client> {
        let project = ascii_metadata("project", project)?;
        let collection = ascii_metadata("collection", collection)?;
        let authorization = config
            .credentials
            .as_ref()
            .map(|c| ascii_metadata("authorization", &c.authorization()))
            .transpose()?;

        Ok(Client {
            channel,
            project,
            collection,
            authorization,
            default_add_transforms: config.default_add_transforms,
        })
    }

    /// Query handle for running searches on the collection.
    pub fn query(&self) -> Query<'_> {
        Query::new(self)
    }

    /// Handle for a named server-configured pipeline.
    pub fn pipeline(&self, name: impl Into<String>) -> Pipeline<'_> {
        Pipeline::new(self, name.into())
    }

    /// Handle for managing the collection schema.
    pub fn schema(&self) -> Schema<'_> {
        Schema::new(self)
    }

    /// Handle for a named autocomplete model.
    pub fn autocomplete(&self, name: impl Into<String>) -> Autocomplete<'_> {
        Autocomplete::new(self, name.into())
    }

    /// Handle for bayes models and training sets.
    pub fn bayes(&self) -> Bayes<'_> {
        Bayes::new(self)
    }

    pub(crate) fn channel(&self) -> Channel {
        self.channel.clone()
    }

    pub(crate) fn default_add_transforms(&self) -> &[Transform] {
        &self.default_add_transforms
    }

    /// Wraps a message in a request carrying project/collection identity
    /// and, when configured, the authorization value.
    pub(crate) fn request<T>(&self, message: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(message);
        let metadata = request.metadata_mut();
        metadata.insert("project", self.project.clone());
        metadata.insert("collection", self.collection.clone());
        if let Some(authorization) = &self.authorization {
            metadata.insert("authorization", authorization.clone());
        }
        request
    }
}

fn ascii_metadata(name: &str, value: &str) -> Result<MetadataValue<Ascii>> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("invalid {} metadata value: {:?}", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> Client {
        let channel = Endpoint::from_static("http://localhost:50051").connect_lazy();
        Client::with_channel(channel, "proj", "coll", Config::default())
            .expect("client should build")
    }

    #[tokio::test]
    async fn test_request_carries_identity_metadata() {
        let client = test_client();
        let request = client.request(());
        let metadata = request.metadata();
        assert_eq!(metadata.get("project").unwrap(), "proj");
        assert_eq!(metadata.get("collection").unwrap(), "coll");
        assert!(metadata.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_request_carries_authorization_when_configured() {
        let channel = Endpoint::from_static("http://localhost:50051").connect_lazy();
        let config = Config::default().with_credentials(Credentials::key("id", "secret"));
        let client =
            Client::with_channel(channel, "proj", "coll", config).expect("client");
        let request = client.request(());
        assert_eq!(
            request.metadata().get("authorization").unwrap(),
            "keysecret id secret"
        );
    }

    #[tokio::test]
    async fn test_invalid_metadata_is_a_config_error() {
        let channel = Endpoint::from_static("http://localhost:50051").connect_lazy();
        let err = Client::with_channel(channel, "proj\u{7f}", "coll", Config::default())
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
