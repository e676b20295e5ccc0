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

//! Naive-bayes classification: training sets of labelled term lists and
//! the models trained from them.

use tracing::debug;

use crate::error::Error;
use crate::proto;
use crate::proto::bayes::query_client::QueryClient;
use crate::proto::bayes::train_client::TrainClient;
use crate::proto::bayes::training_set_client::TrainingSetClient;
use crate::Client;

/// A classification label within a training set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Class(String);

impl Class {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<String> for Class {
    fn from(name: String) -> Class {
        Class(name)
    }
}

/// Outcome of training a model, measured by cross-validation on the
/// training set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrainResults {
    pub correct: u32,
    pub incorrect: u32,
    /// Misclassification tallies: predicted class and how often it was
    /// wrongly chosen.
    pub errors: Vec<ClassError>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassError {
    pub got: Class,
    pub count: u32,
}

impl TrainResults {
    /// Fraction of cross-validation records classified correctly.
    pub fn accuracy(&self) -> f64 {
        let total = self.correct + self.incorrect;
        if total == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(total)
    }
}

/// Entry point for bayes training sets and models.
pub struct Bayes<'a> {
    client: &'a Client,
}

impl<'a> Bayes<'a> {
    pub(crate) fn new(client: &'a Client) -> Bayes<'a> {
        Bayes { client }
    }

    /// Handle for a named training set. Does not check existence; call
    /// [`TrainingSet::create`] for new sets.
    pub fn training_set(&self, name: impl Into<String>) -> TrainingSet<'a> {
        TrainingSet {
            client: self.client,
            name: name.into(),
        }
    }

    /// Handle for a named trained model.
    pub fn model(&self, name: impl Into<String>) -> Model<'a> {
        Model {
            client: self.client,
            name: name.into(),
        }
    }
}

/// A named set of labelled training records.
pub struct TrainingSet<'a> {
    client: &'a Client,
    name: String,
}

impl<'a> TrainingSet<'a> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates the training set.
    pub async fn create(&self) -> Result<(), Error> {
        debug!(set = %self.name, "creating training set");
        TrainingSetClient::new(self.client.channel())
            .create(self.client.request(proto::bayes::CreateRequest {
                name: self.name.clone(),
            }))
            .await?;
        Ok(())
    }

    /// Adds a classification label to the set.
    pub async fn add_class(&self, class: impl Into<String>) -> Result<Class, Error> {
        let class = class.into();
        TrainingSetClient::new(self.client.channel())
            .add_class(self.client.request(proto::bayes::AddClassRequest {
                name: self.name.clone(),
                class: class.clone(),
            }))
            .await?;
        Ok(Class(class))
    }

    /// Adds a training record: a list of terms labelled with `class`.
    /// Returns the record's content hash.
    pub async fn add_record(&self, class: &Class, data: Vec<String>) -> Result<String, Error> {
        let response = TrainingSetClient::new(self.client.channel())
            .upload(self.client.request(proto::bayes::UploadRequest {
                name: self.name.clone(),
                class: class.0.clone(),
                data,
            }))
            .await?
            .into_inner();
        Ok(response.hash)
    }

    /// Returns the classes defined on the set.
    pub async fn classes(&self) -> Result<Vec<Class>, Error> {
        let response = TrainingSetClient::new(self.client.channel())
            .info(self.client.request(proto::bayes::InfoRequest {
                name: self.name.clone(),
            }))
            .await?
            .into_inner();
        Ok(response.classes.into_iter().map(Class).collect())
    }

    /// Trains a model named `model` from the set's current records.
    pub async fn train(&self, model: impl Into<String>) -> Result<TrainResults, Error> {
        let model = model.into();
        debug!(set = %self.name, model = %model, "training model");
        let response = TrainClient::new(self.client.channel())
            .train(self.client.request(proto::bayes::TrainRequest {
                name: self.name.clone(),
                model,
            }))
            .await?
            .into_inner();

        Ok(TrainResults {
            correct: response.correct,
            incorrect: response.incorrect,
            errors: response
                .errors
                .into_iter()
                .map(|e| ClassError {
                    got: Class(e.got),
                    count: e.count,
                })
                .collect(),
        })
    }
}

/// A trained classification model.
pub struct Model<'a> {
    client: &'a Client,
    name: String,
}

impl<'a> Model<'a> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classifies a list of terms, returning the best-matching class.
    pub async fn classify(&self, data: Vec<String>) -> Result<Class, Error> {
        let response = QueryClient::new(self.client.channel())
            .query(self.client.request(proto::bayes::QueryRequest {
                model: self.name.clone(),
                data,
            }))
            .await?
            .into_inner();
        Ok(Class(response.best))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy() {
        let results = TrainResults {
            correct: 3,
            incorrect: 1,
            errors: vec![],
        };
        assert_eq!(results.accuracy(), 0.75);
        assert_eq!(TrainResults::default().accuracy(), 0.0);
    }
}
