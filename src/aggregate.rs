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

//! Aggregates: computations over a result set, keyed by a caller-supplied
//! name in the request and addressable by the same name in the response.

use std::collections::HashMap;

use crate::error::Error;
use crate::filter::Filter;
use crate::proto;

/// An aggregate to run over the query result set.
#[derive(Clone, Debug, PartialEq)]
pub enum Aggregate {
    /// Counts distinct values of a field.
    Count { field: String },
    /// Counts records falling into named filter-defined buckets.
    Bucket { buckets: Vec<Bucket> },
    /// min/max/avg/sum of a numeric field.
    Metric { field: String, metric: Metric },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Max,
    Min,
    Avg,
    Sum,
}

/// A classification container for bucket aggregates. A record is included
/// when it satisfies the filter.
#[derive(Clone, Debug, PartialEq)]
pub struct Bucket {
    pub name: String,
    pub filter: Filter,
}

impl Bucket {
    pub fn new(name: impl Into<String>, filter: Filter) -> Bucket {
        Bucket {
            name: name.into(),
            filter,
        }
    }
}

impl Aggregate {
    /// Counts distinct values of `field`.
    pub fn count(field: impl Into<String>) -> Aggregate {
        Aggregate::Count {
            field: field.into(),
        }
    }

    pub fn buckets(buckets: Vec<Bucket>) -> Aggregate {
        Aggregate::Bucket { buckets }
    }

    pub fn max(field: impl Into<String>) -> Aggregate {
        Aggregate::Metric {
            field: field.into(),
            metric: Metric::Max,
        }
    }

    pub fn min(field: impl Into<String>) -> Aggregate {
        Aggregate::Metric {
            field: field.into(),
            metric: Metric::Min,
        }
    }

    pub fn avg(field: impl Into<String>) -> Aggregate {
        Aggregate::Metric {
            field: field.into(),
            metric: Metric::Avg,
        }
    }

    pub fn sum(field: impl Into<String>) -> Aggregate {
        Aggregate::Metric {
            field: field.into(),
            metric: Metric::Sum,
        }
    }

    pub(crate) fn to_proto(&self) -> Result<proto::query::Aggregate, Error> {
        use proto::query::aggregate;

        let inner = match self {
            Aggregate::Count { field } => aggregate::Aggregate::Count(aggregate::Count {
                field: field.clone(),
            }),

            Aggregate::Bucket { buckets } => {
                let buckets = buckets
                    .iter()
                    .map(|b| {
                        Ok(aggregate::bucket::Bucket {
                            name: b.name.clone(),
                            filter: Some(b.filter.to_proto()?),
                        })
                    })
                    .collect::<Result<Vec<_>, Error>>()?;
                aggregate::Aggregate::Bucket(aggregate::Bucket { buckets })
            }

            Aggregate::Metric { field, metric } => {
                let ty = match metric {
                    Metric::Max => aggregate::metric::Type::Max,
                    Metric::Min => aggregate::metric::Type::Min,
                    Metric::Avg => aggregate::metric::Type::Avg,
                    Metric::Sum => aggregate::metric::Type::Sum,
                };
                aggregate::Aggregate::Metric(aggregate::Metric {
                    field: field.clone(),
                    r#type: ty as i32,
                })
            }
        };

        Ok(proto::query::Aggregate {
            aggregate: Some(inner),
        })
    }
}

/// Serializes a keyed aggregate map; keys are preserved verbatim.
pub(crate) fn aggregates_to_proto(
    aggregates: &HashMap<String, Aggregate>,
) -> Result<HashMap<String, proto::query::Aggregate>, Error> {
    aggregates
        .iter()
        .map(|(k, v)| Ok((k.clone(), v.to_proto()?)))
        .collect()
}

/// Decoded aggregate output, addressable by the request key.
#[derive(Clone, Debug, PartialEq)]
pub enum AggregateValue {
    /// Distinct value counts: value → occurrence count.
    Count(HashMap<String, u32>),
    /// Bucket name → matched record count.
    Buckets(HashMap<String, BucketResult>),
    /// Metric result.
    Metric(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BucketResult {
    pub name: String,
    pub count: u32,
}

pub(crate) fn aggregates_from_proto(
    aggregates: HashMap<String, proto::query::AggregateResponse>,
) -> HashMap<String, AggregateValue> {
    use proto::query::aggregate_response::AggregateResponse;

    aggregates
        .into_iter()
        .filter_map(|(k, v)| {
            let value = match v.aggregate_response? {
                AggregateResponse::Count(c) => AggregateValue::Count(c.counts),
                AggregateResponse::Buckets(bs) => AggregateValue::Buckets(
                    bs.buckets
                        .into_iter()
                        .map(|(bk, bv)| {
                            (
                                bk,
                                BucketResult {
                                    name: bv.name,
                                    count: bv.count,
                                },
                            )
                        })
                        .collect(),
                ),
                AggregateResponse::Metric(m) => AggregateValue::Metric(m.value),
            };
            Some((k, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto::query::aggregate;

    #[test]
    fn test_count_aggregate_keyed_by_name() {
        let mut aggregates = HashMap::new();
        aggregates.insert("total_count".to_string(), Aggregate::count("category"));

        let pb = aggregates_to_proto(&aggregates).expect("serialize");
        let entry = pb.get("total_count").expect("keyed by request name");
        match entry.aggregate.as_ref().expect("aggregate") {
            aggregate::Aggregate::Count(c) => assert_eq!(c.field, "category"),
            other => panic!("expected count, got {:?}", other),
        }
    }

    #[test]
    fn test_metric_aggregates() {
        for (agg, want) in [
            (Aggregate::max("price"), aggregate::metric::Type::Max),
            (Aggregate::min("price"), aggregate::metric::Type::Min),
            (Aggregate::avg("price"), aggregate::metric::Type::Avg),
            (Aggregate::sum("price"), aggregate::metric::Type::Sum),
        ] {
            let pb = agg.to_proto().expect("serialize");
            match pb.aggregate.expect("aggregate") {
                aggregate::Aggregate::Metric(m) => {
                    assert_eq!(m.field, "price");
                    assert_eq!(m.r#type, want as i32);
                }
                other => panic!("expected metric, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_bucket_aggregate_serializes_filters() {
        let agg = Aggregate::buckets(vec![
            Bucket::new("cheap", Filter::field("price <", 20)),
            Bucket::new("pricey", Filter::field("price >=", 20)),
        ]);
        let pb = agg.to_proto().expect("serialize");
        match pb.aggregate.expect("aggregate") {
            aggregate::Aggregate::Bucket(b) => {
                assert_eq!(b.buckets.len(), 2);
                assert_eq!(b.buckets[0].name, "cheap");
                assert!(b.buckets[0].filter.is_some());
            }
            other => panic!("expected bucket, got {:?}", other),
        }
    }

    #[test]
    fn test_bucket_aggregate_rejects_bad_filter() {
        let agg = Aggregate::buckets(vec![Bucket::new("x", Filter::field("price", 1))]);
        assert!(matches!(
            agg.to_proto().unwrap_err(),
            Error::InvalidOperator(_)
        ));
    }

    #[test]
    fn test_response_decoding_keeps_keys() {
        use proto::query::aggregate_response;

        let mut resp = HashMap::new();
        resp.insert(
            "total_count".to_string(),
            proto::query::AggregateResponse {
                aggregate_response: Some(
                    aggregate_response::AggregateResponse::Count(
                        aggregate_response::Count {
                            counts: HashMap::from([("books".to_string(), 3u32)]),
                        },
                    ),
                ),
            },
        );
        resp.insert(
            "max_price".to_string(),
            proto::query::AggregateResponse {
                aggregate_response: Some(
                    aggregate_response::AggregateResponse::Metric(
                        aggregate_response::Metric { value: 99.5 },
                    ),
                ),
            },
        );

        let decoded = aggregates_from_proto(resp);
        match decoded.get("total_count").expect("count present") {
            AggregateValue::Count(counts) => assert_eq!(counts.get("books"), Some(&3)),
            other => panic!("expected count, got {:?}", other),
        }
        assert_eq!(
            decoded.get("max_price"),
            Some(&AggregateValue::Metric(99.5))
        );
    }
}
