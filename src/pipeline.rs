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

//! Pipeline searches: named, server-configured query templates driven by
//! key/value parameters instead of a full request.

use std::collections::HashMap;

use tracing::debug;

use crate::error::Error;
use crate::proto;
use crate::proto::api::pipeline::query_client::QueryClient;
use crate::query::{process_response, Results, Tracking};
use crate::Client;

/// Handle for a named pipeline on a collection.
pub struct Pipeline<'a> {
    client: &'a Client,
    name: String,
}

impl<'a> Pipeline<'a> {
    pub(crate) fn new(client: &'a Client, name: String) -> Pipeline<'a> {
        Pipeline { client, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the pipeline with the given parameter values. Returns the
    /// search results and the values as rewritten by pipeline steps.
    pub async fn search(
        &self,
        values: HashMap<String, String>,
        tracking: Option<Tracking>,
    ) -> Result<(Results, HashMap<String, String>), Error> {
        let pb = proto::api::pipeline::SearchRequest {
            pipeline: Some(proto::api::pipeline::Pipeline {
                name: self.name.clone(),
            }),
            tracking: tracking.as_ref().map(Tracking::to_proto),
            values,
        };

        debug!(pipeline = %self.name, "running pipeline search");
        let response = QueryClient::new(self.client.channel())
            .search(self.client.request(pb))
            .await?
            .into_inner();

        let search_response = response
            .search_response
            .ok_or_else(|| Error::Decode("missing search response".to_string()))?;
        let results = process_response(search_response, response.tokens)?;
        Ok((results, response.values))
    }
}
