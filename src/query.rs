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

//! Search requests, result decoding and the query handle.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::aggregate::{aggregates_from_proto, aggregates_to_proto, Aggregate, AggregateValue};
use crate::boost::{FeatureFieldBoost, FieldBoost, InstanceBoost};
use crate::error::{Error, MultiError};
use crate::filter::Filter;
use crate::proto;
use crate::record::{keys_to_proto, Key};
use crate::transform::Transform;
use crate::value::Value;
use crate::Client;

/// How the platform should track interactions with results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackingType {
    /// No tracking tokens are generated.
    #[default]
    None,
    /// Each result carries a click token.
    Click,
    /// Each result carries a positive and a negative token.
    PosNeg,
}

/// Interaction tracking attached to a search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tracking {
    pub ty: TrackingType,
    /// Identifier grouping a sequence of related searches, e.g. the
    /// keystrokes of one search box session.
    pub query_id: String,
    /// Index of this search within the `query_id` sequence.
    pub sequence: i32,
    /// Field used to identify records in tracking tokens. Must be unique
    /// in the schema.
    pub field: String,
    /// Opaque values forwarded with generated tokens.
    pub data: HashMap<String, String>,
}

impl Tracking {
    /// Click tracking keyed on `field`.
    pub fn click(field: impl Into<String>) -> Tracking {
        Tracking {
            ty: TrackingType::Click,
            field: field.into(),
            ..Tracking::default()
        }
    }

    /// Pos/neg token tracking keyed on `field`.
    pub fn pos_neg(field: impl Into<String>) -> Tracking {
        Tracking {
            ty: TrackingType::PosNeg,
            field: field.into(),
            ..Tracking::default()
        }
    }

    pub(crate) fn to_proto(&self) -> proto::api::query::search_request::Tracking {
        use proto::api::query::search_request::tracking::Type;
        proto::api::query::search_request::Tracking {
            r#type: match self.ty {
                TrackingType::None => Type::None,
                TrackingType::Click => Type::Click,
                TrackingType::PosNeg => Type::PosNeg,
            } as i32,
            query_id: self.query_id.clone(),
            sequence: self.sequence,
            field: self.field.clone(),
            data: self.data.clone(),
        }
    }
}

/// Weighted free-text input.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub text: String,
    pub weight: f64,
}

impl Body {
    pub fn new(text: impl Into<String>, weight: f64) -> Body {
        Body {
            text: text.into(),
            weight,
        }
    }

    fn to_proto(&self) -> proto::query::Body {
        proto::query::Body {
            text: self.text.clone(),
            weight: self.weight,
        }
    }
}

/// A pre-analysed query term, as produced by `analyse`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Term {
    pub value: String,
    pub field: String,
    pub pos: u32,
    pub neg: u32,
    pub weight: f64,
    pub word_offset: u32,
    pub para_offset: u32,
}

impl Term {
    fn to_proto(&self) -> proto::query::Term {
        proto::query::Term {
            value: self.value.clone(),
            field: self.field.clone(),
            pos: self.pos,
            neg: self.neg,
            weight: self.weight,
            word_offset: self.word_offset,
            para_offset: self.para_offset,
        }
    }
}

/// Result ordering instruction.
#[derive(Clone, Debug, PartialEq)]
pub struct Sort {
    descending: bool,
    target: SortTarget,
}

#[derive(Clone, Debug, PartialEq)]
enum SortTarget {
    Field(String),
    Score,
}

impl Sort {
    /// Sorts by a field value, ascending. A `-` prefix on the field name
    /// flips the order, so `"-price"` sorts by price descending.
    pub fn by_field(field: impl Into<String>) -> Sort {
        let field = field.into();
        match field.strip_prefix('-') {
            Some(name) => Sort {
                descending: true,
                target: SortTarget::Field(name.to_string()),
            },
            None => Sort {
                descending: false,
                target: SortTarget::Field(field),
            },
        }
    }

    /// Sorts by relevance score, highest first.
    pub fn by_score() -> Sort {
        Sort {
            descending: true,
            target: SortTarget::Score,
        }
    }

    fn to_proto(&self) -> proto::query::Sort {
        use proto::query::sort::{Order, Ty};
        proto::query::Sort {
            order: if self.descending {
                Order::Desc
            } else {
                Order::Asc
            } as i32,
            ty: Some(match &self.target {
                SortTarget::Field(f) => Ty::Field(f.clone()),
                SortTarget::Score => Ty::Score(true),
            }),
        }
    }
}

/// The reverse-index half of a search: text, terms and boosts that decide
/// which records match and their index score.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexQuery {
    pub body: Vec<Body>,
    pub terms: Vec<Term>,
    pub field_boosts: Vec<FieldBoost>,
    pub instance_boosts: Vec<InstanceBoost>,
}

impl IndexQuery {
    fn is_empty(&self) -> bool {
        self.body.is_empty()
            && self.terms.is_empty()
            && self.field_boosts.is_empty()
            && self.instance_boosts.is_empty()
    }

    fn to_proto(&self) -> Result<proto::query::search_request::IndexQuery, Error> {
        Ok(proto::query::search_request::IndexQuery {
            body: self.body.iter().map(Body::to_proto).collect(),
            terms: self.terms.iter().map(Term::to_proto).collect(),
            field_boosts: self
                .field_boosts
                .iter()
                .map(FieldBoost::to_proto)
                .collect::<Result<_, _>>()?,
            instance_boosts: self
                .instance_boosts
                .iter()
                .map(InstanceBoost::to_proto)
                .collect(),
        })
    }
}

/// The feature half of a search: normalised boosts contributing a
/// \[0, 1\] feature score independent of index matching.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureQuery {
    pub field_boosts: Vec<FeatureFieldBoost>,
}

impl FeatureQuery {
    fn to_proto(&self) -> Result<proto::query::search_request::FeatureQuery, Error> {
        Ok(proto::query::search_request::FeatureQuery {
            field_boosts: self
                .field_boosts
                .iter()
                .map(FeatureFieldBoost::to_proto)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// A full search request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Request {
    pub tracking: Option<Tracking>,
    pub filter: Option<Filter>,
    pub index_query: IndexQuery,
    pub feature_query: FeatureQuery,
    pub offset: i32,
    pub limit: i32,
    pub fields: Vec<String>,
    pub sort: Vec<Sort>,
    pub aggregates: HashMap<String, Aggregate>,
    pub transforms: Vec<Transform>,
}

impl Request {
    /// A plain text search returning the first 10 results.
    pub fn text(text: impl Into<String>) -> Request {
        Request {
            index_query: IndexQuery {
                body: vec![Body::new(text, 1.0)],
                ..IndexQuery::default()
            },
            limit: 10,
            ..Request::default()
        }
    }

    pub(crate) fn to_proto(&self) -> Result<proto::query::SearchRequest, Error> {
        let filter = self.filter.as_ref().map(Filter::to_proto).transpose()?;
        let index_query = if self.index_query.is_empty() {
            None
        } else {
            Some(self.index_query.to_proto()?)
        };
        let feature_query = if self.feature_query.field_boosts.is_empty() {
            None
        } else {
            Some(self.feature_query.to_proto()?)
        };
        Ok(proto::query::SearchRequest {
            filter,
            index_query,
            feature_query,
            offset: self.offset,
            limit: self.limit,
            fields: self.fields.clone(),
            sort: self.sort.iter().map(Sort::to_proto).collect(),
            aggregates: aggregates_to_proto(&self.aggregates)?,
            transforms: self
                .transforms
                .iter()
                .map(|t| proto::query::Transform {
                    identifier: t.identifier().to_string(),
                })
                .collect(),
        })
    }

    pub(crate) fn to_api_proto(&self) -> Result<proto::api::query::SearchRequest, Error> {
        Ok(proto::api::query::SearchRequest {
            tracking: self.tracking.as_ref().map(Tracking::to_proto),
            search_request: Some(self.to_proto()?),
        })
    }
}

/// Interaction token attached to a single result.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// Redeem on click.
    Click(String),
    /// Redeem `pos` on a positive interaction, `neg` on a negative one.
    PosNeg { pos: String, neg: String },
}

impl Token {
    pub(crate) fn from_proto(token: proto::api::query::Token) -> Option<Token> {
        use proto::api::query::token;
        match token.token? {
            token::Token::Click(c) => Some(Token::Click(c.token)),
            token::Token::PosNeg(pn) => Some(Token::PosNeg {
                pos: pn.pos,
                neg: pn.neg,
            }),
        }
    }
}

/// A single matched record with its scores and, when tracking is on, an
/// interaction token.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub values: HashMap<String, Value>,
    pub token: Option<Token>,
    /// Combined relevance in \[0, 1\].
    pub score: f64,
    /// Index-match component of the score, in \[0, 1\].
    pub index_score: f64,
}

/// Decoded search output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Results {
    /// Records read while evaluating the query.
    pub reads: i64,
    /// Total matches, independent of paging.
    pub total_results: i64,
    /// Engine-side evaluation time.
    pub time: Duration,
    pub aggregates: HashMap<String, AggregateValue>,
    pub results: Vec<SearchResult>,
}

pub(crate) fn process_response(
    response: proto::query::SearchResponse,
    tokens: Vec<proto::api::query::Token>,
) -> Result<Results, Error> {
    let time = parse_duration(&response.time)?;

    let mut tokens = tokens.into_iter();
    let results = response
        .results
        .into_iter()
        .map(|r| {
            let values = r
                .values
                .into_iter()
                .map(|(k, v)| Ok((k, Value::from_proto(v)?)))
                .collect::<Result<HashMap<_, _>, Error>>()?;
            Ok(SearchResult {
                values,
                token: tokens.next().and_then(Token::from_proto),
                score: r.score,
                index_score: r.index_score,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(Results {
        reads: response.reads,
        total_results: response.total_results,
        time,
        aggregates: aggregates_from_proto(response.aggregates),
        results,
    })
}

/// Parses engine duration text such as `"2.5ms"` or `"1m30s"`.
pub(crate) fn parse_duration(s: &str) -> Result<Duration, Error> {
    let bad = || Error::Decode(format!("invalid duration {:?}", s));

    if s == "0" {
        return Ok(Duration::ZERO);
    }
    let mut rest = s;
    let mut total = 0f64;
    if rest.is_empty() {
        return Err(bad());
    }
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(bad)?;
        if digits == 0 {
            return Err(bad());
        }
        let number: f64 = rest[..digits].parse().map_err(|_| bad())?;
        rest = &rest[digits..];
        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let scale = match &rest[..unit_len] {
            "ns" => 1e-9,
            "us" | "µs" | "μs" => 1e-6,
            "ms" => 1e-3,
            "s" => 1.0,
            "m" => 60.0,
            "h" => 3600.0,
            _ => return Err(bad()),
        };
        total += number * scale;
        rest = &rest[unit_len..];
    }
    // Absurd magnitudes overflow Duration; treat them as malformed
    // rather than panicking.
    Duration::try_from_secs_f64(total).map_err(|_| bad())
}

/// Handle for running searches and analyses against a collection.
pub struct Query<'a> {
    client: &'a Client,
}

impl<'a> Query<'a> {
    pub(crate) fn new(client: &'a Client) -> Query<'a> {
        Query { client }
    }

    /// Runs a search.
    pub async fn search(&self, request: &Request) -> Result<Results, Error> {
        let pb = request.to_api_proto()?;

        debug!("running search");
        let response = proto::api::query::query_client::QueryClient::new(self.client.channel())
            .search(self.client.request(pb))
            .await?
            .into_inner();

        let search_response = response
            .search_response
            .ok_or_else(|| Error::Decode("missing search response".to_string()))?;
        process_response(search_response, response.tokens)
    }

    /// Returns the indexed terms of the record identified by `key` which
    /// also match `request`.
    pub async fn analyse(&self, key: &Key, request: &Request) -> Result<Vec<String>, Error> {
        let (mut terms, err) = self
            .analyse_multi(std::slice::from_ref(key), request)
            .await?;
        if let Some(me) = err {
            return Err(crate::error::single_error(me));
        }
        match terms.pop() {
            Some(terms) => Ok(terms),
            None => Err(Error::Decode("missing terms in response".to_string())),
        }
    }

    /// Batch form of [`analyse`](Query::analyse): one term list per key,
    /// positionally.
    pub async fn analyse_multi(
        &self,
        keys: &[Key],
        request: &Request,
    ) -> Result<(Vec<Vec<String>>, Option<MultiError>), Error> {
        let pb = proto::query::AnalyseRequest {
            search_request: Some(request.to_proto()?),
            keys: keys_to_proto(keys)?,
        };

        debug!(keys = keys.len(), "analysing records");
        let response = proto::query::query_client::QueryClient::new(self.client.channel())
            .analyse(self.client.request(pb))
            .await?
            .into_inner();

        let terms = response.terms.into_iter().map(|t| t.terms).collect();
        Ok((terms, MultiError::from_statuses(&response.status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(
            parse_duration("2.5ms").expect("parse"),
            Duration::from_micros(2500)
        );
        assert_eq!(parse_duration("0").expect("parse"), Duration::ZERO);
        assert_eq!(
            parse_duration("1m30s").expect("parse"),
            Duration::from_secs(90)
        );
        assert_eq!(
            parse_duration("750µs").expect("parse"),
            Duration::from_micros(750)
        );
        assert!(parse_duration("").is_err());
        assert!(parse_duration("12").is_err());
        assert!(parse_duration("fast").is_err());
    }

    #[test]
    fn test_parse_duration_overflow_is_an_error() {
        let err = parse_duration("99999999999999999999999999999h").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_sort_field_prefix() {
        use proto::query::sort::{Order, Ty};

        let pb = Sort::by_field("-price").to_proto();
        assert_eq!(pb.order, Order::Desc as i32);
        assert_eq!(pb.ty, Some(Ty::Field("price".to_string())));

        let pb = Sort::by_field("name").to_proto();
        assert_eq!(pb.order, Order::Asc as i32);
        assert_eq!(pb.ty, Some(Ty::Field("name".to_string())));
    }

    #[test]
    fn test_text_request_defaults() {
        let request = Request::text("pizza");
        assert_eq!(request.limit, 10);
        let pb = request.to_proto().expect("serialize");
        let iq = pb.index_query.expect("index query");
        assert_eq!(iq.body.len(), 1);
        assert_eq!(iq.body[0].text, "pizza");
        assert_eq!(iq.body[0].weight, 1.0);
        assert!(pb.feature_query.is_none());
    }

    #[test]
    fn test_empty_halves_are_omitted() {
        let pb = Request::default().to_proto().expect("serialize");
        assert!(pb.index_query.is_none());
        assert!(pb.feature_query.is_none());
        assert!(pb.filter.is_none());
    }

    #[test]
    fn test_tracking_serializes_type() {
        use proto::api::query::search_request::tracking::Type;

        let mut tracking = Tracking::click("url");
        tracking.query_id = "abc123".to_string();
        tracking.sequence = 2;
        let pb = tracking.to_proto();
        assert_eq!(pb.r#type, Type::Click as i32);
        assert_eq!(pb.field, "url");
        assert_eq!(pb.query_id, "abc123");
        assert_eq!(pb.sequence, 2);
    }

    #[test]
    fn test_process_response_pairs_tokens_with_results() {
        use proto::api::query::{token, Token as PbToken};

        let response = proto::query::SearchResponse {
            time: "1.2ms".to_string(),
            total_results: 2,
            reads: 40,
            results: vec![
                proto::query::SearchResult {
                    score: 0.9,
                    index_score: 0.8,
                    values: HashMap::from([(
                        "title".to_string(),
                        proto::engine::Value {
                            value: Some(proto::engine::value::Value::Single("a".to_string())),
                        },
                    )]),
                },
                proto::query::SearchResult {
                    score: 0.5,
                    index_score: 0.4,
                    values: HashMap::new(),
                },
            ],
            aggregates: HashMap::new(),
        };
        let tokens = vec![
            PbToken {
                token: Some(token::Token::Click(token::Click {
                    token: "tok-1".to_string(),
                })),
            },
            PbToken {
                token: Some(token::Token::Click(token::Click {
                    token: "tok-2".to_string(),
                })),
            },
        ];

        let results = process_response(response, tokens).expect("process");
        assert_eq!(results.total_results, 2);
        assert_eq!(results.time, Duration::from_micros(1200));
        assert_eq!(results.results[0].token, Some(Token::Click("tok-1".to_string())));
        assert_eq!(
            results.results[0].values.get("title"),
            Some(&Value::String("a".to_string()))
        );
        assert_eq!(results.results[1].token, Some(Token::Click("tok-2".to_string())));
    }
}
