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

//! Transforms: named, server-defined text-processing steps applied to
//! indexed fields at write time or to queries before execution.

use serde::{Deserialize, Serialize};

/// Identifier of a server-defined transform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transform(String);

impl Transform {
    pub fn new(identifier: impl Into<String>) -> Transform {
        Transform(identifier.into())
    }

    /// Splits indexed fields into terms, removes stop words and stems
    /// what remains. The default write-time transform.
    pub fn split_stop_stem_indexed_fields() -> Transform {
        Transform::new("split-stop-stem-indexed-fields")
    }

    /// Removes stop terms and stems terms.
    pub fn stop_stem() -> Transform {
        Transform::new("stop-stem")
    }

    /// Splits indexed fields into terms.
    pub fn split_indexed_fields() -> Transform {
        Transform::new("split-indexed-fields")
    }

    pub fn identifier(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Transform {
    fn from(identifier: &str) -> Transform {
        Transform::new(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_identifiers() {
        assert_eq!(
            Transform::split_stop_stem_indexed_fields().identifier(),
            "split-stop-stem-indexed-fields"
        );
        assert_eq!(Transform::stop_stem().identifier(), "stop-stem");
        assert_eq!(
            Transform::split_indexed_fields().identifier(),
            "split-indexed-fields"
        );
    }
}
