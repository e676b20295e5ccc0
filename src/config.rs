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

//! Client configuration.
//!
//! All defaults live here and are passed explicitly at construction; the
//! crate keeps no global mutable state.

use serde::{Deserialize, Serialize};

use crate::creds::Credentials;
use crate::transform::Transform;

/// Hosted platform endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.vantagesearch.dev";

/// User agent reported on the channel.
pub const DEFAULT_USER_AGENT: &str =
    concat!("vantage-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Construction-time configuration for [`Client`](crate::Client).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint URI, scheme included. TLS is used for `https` endpoints.
    pub endpoint: String,

    /// User agent attached to the channel.
    pub user_agent: String,

    /// Credentials attached as `authorization` metadata on every call,
    /// when set.
    pub credentials: Option<Credentials>,

    /// Transforms applied when adding records without an explicit
    /// transform list.
    pub default_add_transforms: Vec<Transform>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            credentials: None,
            default_add_transforms: vec![Transform::split_stop_stem_indexed_fields()],
        }
    }
}

impl Config {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Config {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Config {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_default_add_transforms(mut self, transforms: Vec<Transform>) -> Config {
        self.default_add_transforms = transforms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(
            config.default_add_transforms,
            vec![Transform::split_stop_stem_indexed_fields()]
        );
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_config_deserializes_with_partial_fields() {
        let config: Config =
            serde_json::from_str(r#"{"endpoint": "https://localhost:8443"}"#)
                .expect("should deserialize");
        assert_eq!(config.endpoint, "https://localhost:8443");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }
}
