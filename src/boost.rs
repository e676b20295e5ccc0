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

//! Boosts: two independent families of scoring influence.
//!
//! [`FieldBoost`]s act on record field data and are normalised by the
//! engine to 0..1. [`InstanceBoost`]s change the importance of term
//! instances in indexed records.

use crate::error::Error;
use crate::filter::Filter;
use crate::proto;

/// A boost computed from record field data.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldBoost {
    /// Applies `value` to records satisfying the filter. `value` must be
    /// greater than 0.
    Filter { filter: Filter, value: f64 },
    /// Piecewise-linear boost over a numeric field, defined by point/value
    /// pairs. Values between points are interpolated linearly by the
    /// engine; only the point list is sent.
    Interval {
        field: String,
        points: Vec<IntervalPoint>,
    },
    /// Boost proportional to the overlap between `elts` and a repeated
    /// string field.
    Element { field: String, elts: Vec<String> },
    /// Bag-of-words comparison of `text` against a string field.
    Text { field: String, text: String },
}

/// A point/value pair defining the boost at one point of an interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntervalPoint {
    /// Field value at which `value` applies.
    pub point: f64,
    /// Boost value assigned at this point.
    pub value: f64,
}

impl IntervalPoint {
    pub fn new(point: f64, value: f64) -> IntervalPoint {
        IntervalPoint { point, value }
    }
}

impl FieldBoost {
    pub fn filter(filter: Filter, value: f64) -> FieldBoost {
        FieldBoost::Filter { filter, value }
    }

    pub fn interval(field: impl Into<String>, points: Vec<IntervalPoint>) -> FieldBoost {
        FieldBoost::Interval {
            field: field.into(),
            points,
        }
    }

    pub fn element(field: impl Into<String>, elts: Vec<String>) -> FieldBoost {
        FieldBoost::Element {
            field: field.into(),
            elts,
        }
    }

    pub fn text(field: impl Into<String>, text: impl Into<String>) -> FieldBoost {
        FieldBoost::Text {
            field: field.into(),
            text: text.into(),
        }
    }

    pub(crate) fn to_proto(&self) -> Result<proto::query::FieldBoost, Error> {
        use proto::query::field_boost;

        let inner = match self {
            FieldBoost::Filter { filter, value } => {
                field_boost::FieldBoost::Filter(field_boost::Filter {
                    filter: Some(filter.to_proto()?),
                    value: *value,
                })
            }

            FieldBoost::Interval { field, points } => {
                field_boost::FieldBoost::Interval(field_boost::Interval {
                    field: field.clone(),
                    points: points
                        .iter()
                        .map(|p| field_boost::interval::Point {
                            point: p.point,
                            value: p.value,
                        })
                        .collect(),
                })
            }

            FieldBoost::Element { field, elts } => {
                field_boost::FieldBoost::Element(field_boost::Element {
                    field: field.clone(),
                    elts: elts.clone(),
                })
            }

            FieldBoost::Text { field, text } => {
                field_boost::FieldBoost::Text(field_boost::Text {
                    field: field.clone(),
                    text: text.clone(),
                })
            }
        };

        Ok(proto::query::FieldBoost {
            field_boost: Some(inner),
        })
    }
}

/// A field boost lifted into the feature query, counting for `value`
/// (0..1) of the overall record score.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureFieldBoost {
    boost: FieldBoost,
    value: f64,
}

impl FeatureFieldBoost {
    pub fn new(boost: FieldBoost, value: f64) -> FeatureFieldBoost {
        FeatureFieldBoost { boost, value }
    }

    pub(crate) fn to_proto(
        &self,
    ) -> Result<proto::query::search_request::feature_query::FieldBoost, Error> {
        Ok(proto::query::search_request::feature_query::FieldBoost {
            field_boost: Some(self.boost.to_proto()?),
            value: self.value,
        })
    }
}

/// A boost over term instances in indexed records.
#[derive(Clone, Debug, PartialEq)]
pub enum InstanceBoost {
    /// Boosts terms which originate in a particular field.
    Field { field: String, value: f64 },
    /// Boosts terms with interaction scores below `threshold`, once they
    /// have received at least `min_count` score updates. A term
    /// performing as it should has score 1.
    Score { min_count: u32, threshold: f64 },
}

impl InstanceBoost {
    pub fn field(field: impl Into<String>, value: f64) -> InstanceBoost {
        InstanceBoost::Field {
            field: field.into(),
            value,
        }
    }

    pub fn score(min_count: u32, threshold: f64) -> InstanceBoost {
        InstanceBoost::Score {
            min_count,
            threshold,
        }
    }

    pub(crate) fn to_proto(&self) -> proto::query::InstanceBoost {
        use proto::query::instance_boost;

        let inner = match self {
            InstanceBoost::Field { field, value } => {
                instance_boost::InstanceBoost::Field(instance_boost::Field {
                    field: field.clone(),
                    value: *value,
                })
            }
            InstanceBoost::Score {
                min_count,
                threshold,
            } => instance_boost::InstanceBoost::Score(instance_boost::Score {
                min_count: *min_count,
                threshold: *threshold,
            }),
        };

        proto::query::InstanceBoost {
            instance_boost: Some(inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto::query::{field_boost, instance_boost};

    #[test]
    fn test_interval_boost_carries_exact_points() {
        // The point list travels as-is; interpolation (e.g. 0.5 at point 5
        // for points (0,0) and (10,1)) happens engine-side.
        let boost = FieldBoost::interval(
            "price",
            vec![IntervalPoint::new(0.0, 0.0), IntervalPoint::new(10.0, 1.0)],
        );
        let pb = boost.to_proto().expect("serialize");
        match pb.field_boost.expect("boost") {
            field_boost::FieldBoost::Interval(interval) => {
                assert_eq!(interval.field, "price");
                assert_eq!(interval.points.len(), 2);
                assert_eq!(interval.points[0].point, 0.0);
                assert_eq!(interval.points[0].value, 0.0);
                assert_eq!(interval.points[1].point, 10.0);
                assert_eq!(interval.points[1].value, 1.0);
            }
            other => panic!("expected interval, got {:?}", other),
        }
    }

    #[test]
    fn test_filter_boost_serializes_filter() {
        let boost = FieldBoost::filter(Filter::field("grade =", "a"), 1.5);
        let pb = boost.to_proto().expect("serialize");
        match pb.field_boost.expect("boost") {
            field_boost::FieldBoost::Filter(fb) => {
                assert_eq!(fb.value, 1.5);
                assert!(fb.filter.is_some());
            }
            other => panic!("expected filter boost, got {:?}", other),
        }
    }

    #[test]
    fn test_filter_boost_rejects_bad_filter() {
        let boost = FieldBoost::filter(Filter::field("grade", "a"), 1.5);
        assert!(matches!(
            boost.to_proto().unwrap_err(),
            Error::InvalidOperator(_)
        ));
    }

    #[test]
    fn test_element_and_text_boosts() {
        let pb = FieldBoost::element("tags", vec!["a".to_string(), "b".to_string()])
            .to_proto()
            .expect("serialize");
        match pb.field_boost.expect("boost") {
            field_boost::FieldBoost::Element(e) => {
                assert_eq!(e.field, "tags");
                assert_eq!(e.elts, vec!["a", "b"]);
            }
            other => panic!("expected element, got {:?}", other),
        }

        let pb = FieldBoost::text("title", "quick brown fox")
            .to_proto()
            .expect("serialize");
        match pb.field_boost.expect("boost") {
            field_boost::FieldBoost::Text(t) => {
                assert_eq!(t.field, "title");
                assert_eq!(t.text, "quick brown fox");
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_instance_boosts() {
        let pb = InstanceBoost::field("title", 2.0).to_proto();
        match pb.instance_boost.expect("boost") {
            instance_boost::InstanceBoost::Field(fb) => {
                assert_eq!(fb.field, "title");
                assert_eq!(fb.value, 2.0);
            }
            other => panic!("expected field, got {:?}", other),
        }

        let pb = InstanceBoost::score(20, 0.5).to_proto();
        match pb.instance_boost.expect("boost") {
            instance_boost::InstanceBoost::Score(sb) => {
                assert_eq!(sb.min_count, 20);
                assert_eq!(sb.threshold, 0.5);
            }
            other => panic!("expected score, got {:?}", other),
        }
    }
}
