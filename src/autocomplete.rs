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

//! Autocomplete models: spelling correction and phrase completion
//! trained on corpus terms and observed queries.

use tracing::debug;

use crate::error::Error;
use crate::proto;
use crate::proto::autocomplete::query_client::QueryClient;
use crate::proto::autocomplete::train_client::TrainClient;
use crate::Client;

/// Handle for a named autocomplete model.
pub struct Autocomplete<'a> {
    client: &'a Client,
    name: String,
}

impl<'a> Autocomplete<'a> {
    pub(crate) fn new(client: &'a Client, name: String) -> Autocomplete<'a> {
        Autocomplete { client, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> Option<proto::autocomplete::Model> {
        Some(proto::autocomplete::Model {
            name: self.name.clone(),
        })
    }

    /// Trains the model on corpus terms; completions are drawn from this
    /// vocabulary.
    pub async fn train_corpus(&self, terms: Vec<String>) -> Result<(), Error> {
        debug!(model = %self.name, terms = terms.len(), "training on corpus terms");
        TrainClient::new(self.client.channel())
            .train_corpus(self.client.request(proto::autocomplete::TrainCorpusRequest {
                model: self.model(),
                terms,
            }))
            .await?;
        Ok(())
    }

    /// Trains the model on an observed query phrase.
    pub async fn train_query(&self, phrase: impl Into<String>) -> Result<(), Error> {
        TrainClient::new(self.client.channel())
            .train_query(self.client.request(proto::autocomplete::TrainQueryRequest {
                model: self.model(),
                phrase: phrase.into(),
            }))
            .await?;
        Ok(())
    }

    /// Completes a partial phrase. `terms` is the phrase split into
    /// individual terms, the last of which is being completed.
    pub async fn complete(
        &self,
        phrase: impl Into<String>,
        terms: Vec<String>,
    ) -> Result<Vec<String>, Error> {
        let response = QueryClient::new(self.client.channel())
            .auto_complete(self.client.request(proto::autocomplete::AutoCompleteRequest {
                model: self.model(),
                phrase: phrase.into(),
                terms,
            }))
            .await?
            .into_inner();
        Ok(response.phrases)
    }
}
