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

//! Filters: predicate trees evaluated by the engine to exclude records
//! from results.

use crate::error::Error;
use crate::proto;
use crate::value::Value;

/// A filter over record fields. Composes into a tree via the combinator
/// constructors; serialization is recursive and side-effect free.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// Single-field comparison. The operator is kept in its textual form
    /// and validated at serialization time.
    Field {
        field: String,
        op: String,
        value: Value,
    },
    /// Boolean combination of child filters.
    Combinator {
        op: CombinatorOp,
        filters: Vec<Filter>,
    },
    /// Radius match against a latitude/longitude field pair.
    Geo {
        field_lat: String,
        field_lng: String,
        lat: f64,
        lng: f64,
        radius: f64,
        region: GeoRegion,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombinatorOp {
    /// All child filters must match (AND).
    All,
    /// Any child filter must match (OR).
    Any,
    /// Exactly one child filter must match (XOR).
    One,
    /// No child filter may match.
    None,
}

/// Which side of the radius a geo filter matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeoRegion {
    Inside,
    Outside,
}

impl Filter {
    /// Creates a field comparison filter. `field_op` is a field name
    /// followed by optional space and one of `=`, `!=`, `>`, `>=`, `<`,
    /// `<=`, `~` (contains), `!~` (does not contain), `^` (prefix) or `$`
    /// (suffix).
    ///
    /// ```
    /// use vantage::Filter;
    ///
    /// // Records where 'url' begins with "https://www.example.com":
    /// Filter::field("url ^", "https://www.example.com");
    ///
    /// // Records where 'count' is at least 10:
    /// Filter::field("count >=", 10);
    /// ```
    pub fn field(field_op: &str, value: impl Into<Value>) -> Filter {
        let field = field_op.trim_end_matches(|c| " <>=!~^$".contains(c));
        let op = field_op[field.len()..].trim().to_string();
        Filter::Field {
            field: field.to_string(),
            op,
            value: value.into(),
        }
    }

    /// Matches records satisfying all of `filters` (AND).
    pub fn all(filters: Vec<Filter>) -> Filter {
        Filter::Combinator {
            op: CombinatorOp::All,
            filters,
        }
    }

    /// Matches records satisfying any of `filters` (OR).
    pub fn any(filters: Vec<Filter>) -> Filter {
        Filter::Combinator {
            op: CombinatorOp::Any,
            filters,
        }
    }

    /// Matches records satisfying exactly one of `filters` (XOR).
    pub fn one_of(filters: Vec<Filter>) -> Filter {
        Filter::Combinator {
            op: CombinatorOp::One,
            filters,
        }
    }

    /// Matches records satisfying none of `filters`.
    pub fn none_of(filters: Vec<Filter>) -> Filter {
        Filter::Combinator {
            op: CombinatorOp::None,
            filters,
        }
    }

    /// Creates a geo filter on numeric lat/lng fields matching points
    /// within (or outside) `radius` kilometres of (`lat`, `lng`).
    ///
    /// ```
    /// use vantage::{Filter, GeoRegion};
    ///
    /// // Within 10km of Sydney (33.8688°S, 151.2093°E):
    /// Filter::geo("lat", "lng", -33.8688, 151.2093, 10.0, GeoRegion::Inside);
    /// ```
    pub fn geo(
        field_lat: impl Into<String>,
        field_lng: impl Into<String>,
        lat: f64,
        lng: f64,
        radius: f64,
        region: GeoRegion,
    ) -> Filter {
        Filter::Geo {
            field_lat: field_lat.into(),
            field_lng: field_lng.into(),
            lat,
            lng,
            radius,
            region,
        }
    }

    pub(crate) fn to_proto(&self) -> Result<proto::query::Filter, Error> {
        use proto::query::filter;

        let inner = match self {
            Filter::Field { field, op, value } => {
                let operator = match op.as_str() {
                    "=" => filter::field::Operator::EqualTo,
                    "!=" => filter::field::Operator::NotEqualTo,
                    ">" => filter::field::Operator::GreaterThan,
                    ">=" => filter::field::Operator::GreaterThanOrEqualTo,
                    "<" => filter::field::Operator::LessThan,
                    "<=" => filter::field::Operator::LessThanOrEqualTo,
                    "~" => filter::field::Operator::Contains,
                    "!~" => filter::field::Operator::DoesNotContain,
                    "^" => filter::field::Operator::HasPrefix,
                    "$" => filter::field::Operator::HasSuffix,
                    other => return Err(Error::InvalidOperator(other.to_string())),
                };
                filter::Filter::Field(filter::Field {
                    field: field.clone(),
                    operator: operator as i32,
                    value: Some(value.to_proto()),
                })
            }

            Filter::Combinator { op, filters } => {
                let operator = match op {
                    CombinatorOp::All => filter::combinator::Operator::All,
                    CombinatorOp::Any => filter::combinator::Operator::Any,
                    CombinatorOp::One => filter::combinator::Operator::One,
                    CombinatorOp::None => filter::combinator::Operator::None,
                };
                let filters = filters
                    .iter()
                    .map(Filter::to_proto)
                    .collect::<Result<Vec<_>, _>>()?;
                filter::Filter::Combinator(filter::Combinator {
                    operator: operator as i32,
                    filters,
                })
            }

            Filter::Geo {
                field_lat,
                field_lng,
                lat,
                lng,
                radius,
                region,
            } => {
                let region = match region {
                    GeoRegion::Inside => filter::geo::Region::Inside,
                    GeoRegion::Outside => filter::geo::Region::Outside,
                };
                filter::Filter::Geo(filter::Geo {
                    field_lat: field_lat.clone(),
                    field_lng: field_lng.clone(),
                    lat: *lat,
                    lng: *lng,
                    radius: *radius,
                    region: region as i32,
                })
            }
        };

        Ok(proto::query::Filter {
            filter: Some(inner),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto::query::filter;

    fn field_part(f: &proto::query::Filter) -> &filter::Field {
        match f.filter.as_ref().expect("filter set") {
            filter::Filter::Field(field) => field,
            other => panic!("expected field filter, got {:?}", other),
        }
    }

    #[test]
    fn test_field_filter_parses_operator() {
        let pb = Filter::field("count >=", 10).to_proto().expect("serialize");
        let field = field_part(&pb);
        assert_eq!(field.field, "count");
        assert_eq!(
            field.operator,
            filter::field::Operator::GreaterThanOrEqualTo as i32
        );
        let value = field.value.as_ref().expect("value set");
        match value.value.as_ref().expect("value") {
            proto::engine::value::Value::Single(s) => assert_eq!(s, "10"),
            other => panic!("expected single, got {:?}", other),
        }
    }

    #[test]
    fn test_field_filter_without_space() {
        let pb = Filter::field("name~", "abc").to_proto().expect("serialize");
        let field = field_part(&pb);
        assert_eq!(field.field, "name");
        assert_eq!(field.operator, filter::field::Operator::Contains as i32);
    }

    #[test]
    fn test_unknown_operator_fails() {
        // An unrecognized suffix must be rejected, never defaulted.
        let err = Filter::field("count", 10).to_proto().unwrap_err();
        assert!(matches!(err, Error::InvalidOperator(_)));

        let err = Filter::field("count >=<", 10).to_proto().unwrap_err();
        assert!(matches!(err, Error::InvalidOperator(_)));
    }

    #[test]
    fn test_all_operators_serialize() {
        for (op, want) in [
            ("=", filter::field::Operator::EqualTo),
            ("!=", filter::field::Operator::NotEqualTo),
            (">", filter::field::Operator::GreaterThan),
            (">=", filter::field::Operator::GreaterThanOrEqualTo),
            ("<", filter::field::Operator::LessThan),
            ("<=", filter::field::Operator::LessThanOrEqualTo),
            ("~", filter::field::Operator::Contains),
            ("!~", filter::field::Operator::DoesNotContain),
            ("^", filter::field::Operator::HasPrefix),
            ("$", filter::field::Operator::HasSuffix),
        ] {
            let pb = Filter::field(&format!("f {}", op), "v")
                .to_proto()
                .expect("serialize");
            assert_eq!(field_part(&pb).operator, want as i32, "operator {}", op);
        }
    }

    #[test]
    fn test_nested_combinators_serialize_recursively() {
        // ALL containing an ANY containing two field filters must keep its
        // nesting; no flattening.
        let f = Filter::all(vec![Filter::any(vec![
            Filter::field("a =", 1),
            Filter::field("b =", 2),
        ])]);

        let pb = f.to_proto().expect("serialize");
        let outer = match pb.filter.expect("filter") {
            filter::Filter::Combinator(c) => c,
            other => panic!("expected combinator, got {:?}", other),
        };
        assert_eq!(outer.operator, filter::combinator::Operator::All as i32);
        assert_eq!(outer.filters.len(), 1);

        let inner = match outer.filters[0].filter.as_ref().expect("filter") {
            filter::Filter::Combinator(c) => c,
            other => panic!("expected combinator, got {:?}", other),
        };
        assert_eq!(inner.operator, filter::combinator::Operator::Any as i32);
        assert_eq!(inner.filters.len(), 2);
        assert_eq!(field_part(&inner.filters[0]).field, "a");
        assert_eq!(field_part(&inner.filters[1]).field, "b");
    }

    #[test]
    fn test_combinator_propagates_child_errors() {
        let f = Filter::all(vec![Filter::field("bad", 1)]);
        assert!(matches!(
            f.to_proto().unwrap_err(),
            Error::InvalidOperator(_)
        ));
    }

    #[test]
    fn test_geo_filter() {
        let pb = Filter::geo("lat", "lng", -33.8688, 151.2093, 10.0, GeoRegion::Inside)
            .to_proto()
            .expect("serialize");
        match pb.filter.expect("filter") {
            filter::Filter::Geo(g) => {
                assert_eq!(g.field_lat, "lat");
                assert_eq!(g.field_lng, "lng");
                assert_eq!(g.radius, 10.0);
                assert_eq!(g.region, filter::geo::Region::Inside as i32);
            }
            other => panic!("expected geo, got {:?}", other),
        }
    }
}
