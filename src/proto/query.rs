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

//! Package `vantage.engine.query.v1`: the engine query model — filters,
//! boosts, aggregates, sorts and the search request/response pair.

use std::collections::HashMap;

/// A predicate over record fields, evaluated by the engine.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Filter {
    #[prost(oneof = "filter::Filter", tags = "1, 2, 3")]
    pub filter: Option<filter::Filter>,
}

pub mod filter {
    /// Single-field comparison.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Field {
        #[prost(string, tag = "1")]
        pub field: String,
        #[prost(enumeration = "field::Operator", tag = "2")]
        pub operator: i32,
        #[prost(message, optional, tag = "3")]
        pub value: Option<super::super::engine::Value>,
    }

    pub mod field {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
        )]
        #[repr(i32)]
        pub enum Operator {
            EqualTo = 0,
            NotEqualTo = 1,
            GreaterThan = 2,
            GreaterThanOrEqualTo = 3,
            LessThan = 4,
            LessThanOrEqualTo = 5,
            Contains = 6,
            DoesNotContain = 7,
            HasPrefix = 8,
            HasSuffix = 9,
        }
    }

    /// Boolean combination of child filters.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Combinator {
        #[prost(enumeration = "combinator::Operator", tag = "1")]
        pub operator: i32,
        #[prost(message, repeated, tag = "2")]
        pub filters: Vec<super::Filter>,
    }

    pub mod combinator {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
        )]
        #[repr(i32)]
        pub enum Operator {
            All = 0,
            Any = 1,
            One = 2,
            None = 3,
        }
    }

    /// Radius match on a lat/lng field pair.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Geo {
        #[prost(string, tag = "1")]
        pub field_lat: String,
        #[prost(string, tag = "2")]
        pub field_lng: String,
        #[prost(double, tag = "3")]
        pub lat: f64,
        #[prost(double, tag = "4")]
        pub lng: f64,
        #[prost(double, tag = "5")]
        pub radius: f64,
        #[prost(enumeration = "geo::Region", tag = "6")]
        pub region: i32,
    }

    pub mod geo {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
        )]
        #[repr(i32)]
        pub enum Region {
            Inside = 0,
            Outside = 1,
        }
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Filter {
        #[prost(message, tag = "1")]
        Field(Field),
        #[prost(message, tag = "2")]
        Combinator(Combinator),
        #[prost(message, tag = "3")]
        Geo(Geo),
    }
}

/// Field-data based boost applied to the index score of a record.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldBoost {
    #[prost(oneof = "field_boost::FieldBoost", tags = "1, 2, 3, 4")]
    pub field_boost: Option<field_boost::FieldBoost>,
}

pub mod field_boost {
    /// Fixed boost for records satisfying a filter.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Filter {
        #[prost(message, optional, tag = "1")]
        pub filter: Option<super::Filter>,
        #[prost(double, tag = "2")]
        pub value: f64,
    }

    /// Piecewise-linear boost over a numeric field. Interpolation between
    /// points is an engine-side computation; only the points travel.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Interval {
        #[prost(string, tag = "1")]
        pub field: String,
        #[prost(message, repeated, tag = "2")]
        pub points: Vec<interval::Point>,
    }

    pub mod interval {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Point {
            #[prost(double, tag = "1")]
            pub point: f64,
            #[prost(double, tag = "2")]
            pub value: f64,
        }
    }

    /// Boost proportional to the overlap between `elts` and a repeated
    /// string field.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Element {
        #[prost(string, tag = "1")]
        pub field: String,
        #[prost(string, repeated, tag = "2")]
        pub elts: Vec<String>,
    }

    /// Bag-of-words comparison against a string field.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Text {
        #[prost(string, tag = "1")]
        pub field: String,
        #[prost(string, tag = "2")]
        pub text: String,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum FieldBoost {
        #[prost(message, tag = "1")]
        Filter(Filter),
        #[prost(message, tag = "2")]
        Interval(Interval),
        #[prost(message, tag = "3")]
        Element(Element),
        #[prost(message, tag = "4")]
        Text(Text),
    }
}

/// Boost applied to term instances in indexed records.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InstanceBoost {
    #[prost(oneof = "instance_boost::InstanceBoost", tags = "1, 2")]
    pub instance_boost: Option<instance_boost::InstanceBoost>,
}

pub mod instance_boost {
    /// Boost terms originating from a particular field.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Field {
        #[prost(string, tag = "1")]
        pub field: String,
        #[prost(double, tag = "2")]
        pub value: f64,
    }

    /// Boost terms with interaction scores below a threshold, once they
    /// have at least `min_count` score updates.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Score {
        #[prost(uint32, tag = "1")]
        pub min_count: u32,
        #[prost(double, tag = "2")]
        pub threshold: f64,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum InstanceBoost {
        #[prost(message, tag = "1")]
        Field(Field),
        #[prost(message, tag = "2")]
        Score(Score),
    }
}

/// Computation over a result set, keyed by a caller-supplied name in the
/// request's aggregate map.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Aggregate {
    #[prost(oneof = "aggregate::Aggregate", tags = "1, 2, 3")]
    pub aggregate: Option<aggregate::Aggregate>,
}

pub mod aggregate {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Metric {
        #[prost(string, tag = "1")]
        pub field: String,
        #[prost(enumeration = "metric::Type", tag = "2")]
        pub r#type: i32,
    }

    pub mod metric {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
        )]
        #[repr(i32)]
        pub enum Type {
            Max = 0,
            Min = 1,
            Avg = 2,
            Sum = 3,
        }
    }

    /// Count distinct values of a field.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Count {
        #[prost(string, tag = "1")]
        pub field: String,
    }

    /// Count records falling into named filter-defined buckets.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Bucket {
        #[prost(message, repeated, tag = "1")]
        pub buckets: Vec<bucket::Bucket>,
    }

    pub mod bucket {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Bucket {
            #[prost(string, tag = "1")]
            pub name: String,
            #[prost(message, optional, tag = "2")]
            pub filter: Option<super::super::Filter>,
        }
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Aggregate {
        #[prost(message, tag = "1")]
        Metric(Metric),
        #[prost(message, tag = "2")]
        Count(Count),
        #[prost(message, tag = "3")]
        Bucket(Bucket),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AggregateResponse {
    #[prost(oneof = "aggregate_response::AggregateResponse", tags = "1, 2, 3")]
    pub aggregate_response: Option<aggregate_response::AggregateResponse>,
}

pub mod aggregate_response {
    use std::collections::HashMap;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Metric {
        #[prost(double, tag = "1")]
        pub value: f64,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Count {
        #[prost(map = "string, uint32", tag = "1")]
        pub counts: HashMap<String, u32>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Buckets {
        #[prost(map = "string, message", tag = "1")]
        pub buckets: HashMap<String, buckets::Bucket>,
    }

    pub mod buckets {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Bucket {
            #[prost(string, tag = "1")]
            pub name: String,
            #[prost(uint32, tag = "2")]
            pub count: u32,
        }
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum AggregateResponse {
        #[prost(message, tag = "1")]
        Metric(Metric),
        #[prost(message, tag = "2")]
        Count(Count),
        #[prost(message, tag = "3")]
        Buckets(Buckets),
    }
}

/// Weighted free text.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Body {
    #[prost(string, tag = "1")]
    pub text: String,
    #[prost(double, tag = "2")]
    pub weight: f64,
}

/// A pre-split scored query term.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Term {
    #[prost(string, tag = "1")]
    pub value: String,
    #[prost(string, tag = "2")]
    pub field: String,
    #[prost(uint32, tag = "3")]
    pub pos: u32,
    #[prost(uint32, tag = "4")]
    pub neg: u32,
    #[prost(double, tag = "5")]
    pub weight: f64,
    #[prost(uint32, tag = "6")]
    pub word_offset: u32,
    #[prost(uint32, tag = "7")]
    pub para_offset: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Sort {
    #[prost(enumeration = "sort::Order", tag = "1")]
    pub order: i32,
    #[prost(oneof = "sort::Ty", tags = "2, 3")]
    pub ty: Option<sort::Ty>,
}

pub mod sort {
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum Order {
        Asc = 0,
        Desc = 1,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Ty {
        #[prost(string, tag = "2")]
        Field(String),
        #[prost(bool, tag = "3")]
        Score(bool),
    }
}

/// Pre-query transform, applied by the engine before execution.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transform {
    #[prost(string, tag = "1")]
    pub identifier: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchRequest {
    #[prost(message, optional, tag = "1")]
    pub filter: Option<Filter>,
    #[prost(message, optional, tag = "2")]
    pub index_query: Option<search_request::IndexQuery>,
    #[prost(message, optional, tag = "3")]
    pub feature_query: Option<search_request::FeatureQuery>,
    #[prost(int32, tag = "4")]
    pub offset: i32,
    #[prost(int32, tag = "5")]
    pub limit: i32,
    #[prost(string, repeated, tag = "6")]
    pub fields: Vec<String>,
    #[prost(message, repeated, tag = "7")]
    pub sort: Vec<Sort>,
    #[prost(map = "string, message", tag = "8")]
    pub aggregates: HashMap<String, Aggregate>,
    #[prost(message, repeated, tag = "9")]
    pub transforms: Vec<Transform>,
}

pub mod search_request {
    /// Free-text/term query against the search index.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct IndexQuery {
        #[prost(message, repeated, tag = "1")]
        pub body: Vec<super::Body>,
        #[prost(message, repeated, tag = "2")]
        pub terms: Vec<super::Term>,
        #[prost(message, repeated, tag = "3")]
        pub field_boosts: Vec<super::FieldBoost>,
        #[prost(message, repeated, tag = "4")]
        pub instance_boosts: Vec<super::InstanceBoost>,
    }

    /// Feature-based contribution to record scoring.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct FeatureQuery {
        #[prost(message, repeated, tag = "1")]
        pub field_boosts: Vec<feature_query::FieldBoost>,
    }

    pub mod feature_query {
        /// A field boost normalised to contribute `value` (0..1) of the
        /// overall score.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct FieldBoost {
            #[prost(message, optional, tag = "1")]
            pub field_boost: Option<super::super::FieldBoost>,
            #[prost(double, tag = "2")]
            pub value: f64,
        }
    }
}

/// A single scored result.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchResult {
    #[prost(double, tag = "1")]
    pub score: f64,
    #[prost(double, tag = "2")]
    pub index_score: f64,
    #[prost(map = "string, message", tag = "3")]
    pub values: HashMap<String, super::engine::Value>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchResponse {
    /// Engine-reported query time as duration text, e.g. "2.5ms".
    #[prost(string, tag = "1")]
    pub time: String,
    #[prost(int64, tag = "2")]
    pub total_results: i64,
    #[prost(int64, tag = "3")]
    pub reads: i64,
    #[prost(message, repeated, tag = "4")]
    pub results: Vec<SearchResult>,
    #[prost(map = "string, message", tag = "5")]
    pub aggregates: HashMap<String, AggregateResponse>,
}

/// Analyse: overlapping terms between a search request and stored records.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AnalyseRequest {
    #[prost(message, optional, tag = "1")]
    pub search_request: Option<SearchRequest>,
    #[prost(message, repeated, tag = "2")]
    pub keys: Vec<super::engine::Key>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AnalyseResponse {
    #[prost(message, repeated, tag = "1")]
    pub terms: Vec<analyse_response::Terms>,
    #[prost(message, repeated, tag = "2")]
    pub status: Vec<super::rpc::Status>,
}

pub mod analyse_response {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Terms {
        #[prost(string, repeated, tag = "1")]
        pub terms: Vec<String>,
    }
}

pub mod query_client {
    use super::*;
    use tonic::codegen::http::uri::PathAndQuery;

    /// Unary client for the `vantage.engine.query.v1.Query` service.
    #[derive(Debug, Clone)]
    pub struct QueryClient {
        inner: tonic::client::Grpc<tonic::transport::Channel>,
    }

    impl QueryClient {
        pub fn new(channel: tonic::transport::Channel) -> Self {
            Self {
                inner: tonic::client::Grpc::new(channel),
            }
        }

        pub async fn analyse(
            &mut self,
            request: tonic::Request<AnalyseRequest>,
        ) -> Result<tonic::Response<AnalyseResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                PathAndQuery::from_static("/vantage.engine.query.v1.Query/Analyse");
            self.inner.unary(request, path, codec).await
        }
    }
}
