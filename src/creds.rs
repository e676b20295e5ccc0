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

//! Credentials attached to outgoing calls.
//!
//! A credential contributes a single `authorization` metadata value; there
//! is no session or refresh logic in the client.

use serde::{Deserialize, Serialize};

/// Supported credential forms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Credentials {
    /// Key ID/secret pair issued by the console.
    Key { key_id: String, key_secret: String },
    /// A pre-rendered authorization value, for credential schemes the SDK
    /// does not know about.
    Raw { value: String },
}

impl Credentials {
    pub fn key(key_id: impl Into<String>, key_secret: impl Into<String>) -> Credentials {
        Credentials::Key {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        }
    }

    pub fn raw(value: impl Into<String>) -> Credentials {
        Credentials::Raw {
            value: value.into(),
        }
    }

    /// The `authorization` metadata value sent with every call.
    pub(crate) fn authorization(&self) -> String {
        match self {
            Credentials::Key { key_id, key_secret } => {
                format!("keysecret {} {}", key_id, key_secret)
            }
            Credentials::Raw { value } => value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_credentials_render() {
        let creds = Credentials::key("kid", "shhh");
        assert_eq!(creds.authorization(), "keysecret kid shhh");
    }

    #[test]
    fn test_raw_credentials_pass_through() {
        let creds = Credentials::raw("bearer abc");
        assert_eq!(creds.authorization(), "bearer abc");
    }
}
