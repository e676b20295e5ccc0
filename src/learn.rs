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

//! Interaction learning: feeds per-record term scores back into ranking.

use tracing::debug;

use crate::error::{single_error, Error, MultiError};
use crate::proto;
use crate::proto::record::score_client::ScoreClient;
use crate::query::Request;
use crate::record::{keys_to_proto, Key};
use crate::Client;

impl Client {
    /// Records an interaction outcome for the record identified by `key`
    /// against `request`: the record's matching terms each gain `count`
    /// observations at `score`.
    pub async fn learn(
        &self,
        key: &Key,
        request: &Request,
        count: i32,
        score: f32,
    ) -> Result<(), Error> {
        self.learn_multi(std::slice::from_ref(key), request, &[count], &[score])
            .await
            .map_err(|e| match e {
                Error::Multi(me) => single_error(me),
                other => other,
            })
    }

    /// Batch form of [`learn`](Client::learn): `counts` and `scores` pair
    /// positionally with `keys` and must be the same length.
    pub async fn learn_multi(
        &self,
        keys: &[Key],
        request: &Request,
        counts: &[i32],
        scores: &[f32],
    ) -> Result<(), Error> {
        if keys.len() != counts.len() || keys.len() != scores.len() {
            return Err(Error::LengthMismatch);
        }

        let (terms, err) = self.query().analyse_multi(keys, request).await?;
        if let Some(me) = err {
            return Err(Error::Multi(me));
        }
        if terms.len() != keys.len() {
            return Err(Error::Decode(
                "analyse returned wrong number of term lists".to_string(),
            ));
        }

        let keys_scores = keys_to_proto(keys)?
            .into_iter()
            .zip(terms)
            .zip(counts.iter().zip(scores))
            .map(|((key, terms), (&count, &score))| proto::record::KeyScores {
                key: Some(key),
                scores: vec![proto::record::key_scores::Score {
                    terms,
                    count,
                    score,
                }],
            })
            .collect();

        debug!(keys = keys.len(), "incrementing scores");
        let response = ScoreClient::new(self.channel())
            .increment(self.request(proto::record::IncrementRequest { keys_scores }))
            .await?
            .into_inner();

        match MultiError::from_statuses(&response.status) {
            Some(me) => Err(Error::Multi(me)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[tokio::test]
    async fn test_learn_multi_rejects_length_mismatch() {
        let channel =
            tonic::transport::Endpoint::from_static("http://localhost:1").connect_lazy();
        let client = Client::with_channel(channel, "p", "c", Config::default())
            .expect("client");

        let keys = vec![Key::new("id", 1i64), Key::new("id", 2i64)];
        let err = client
            .learn_multi(&keys, &Request::text("q"), &[1], &[0.5, 0.5])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::LengthMismatch));
    }
}
