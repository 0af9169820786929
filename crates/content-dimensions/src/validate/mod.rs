//! Validation of dimension space points against dimension definitions.
//!
//! Constraints are declared directionally on dimension values. A
//! combination of coordinates is allowed only if every value accepts every
//! other coordinate, so both directions are checked here.

use std::sync::Arc;

use tracing::debug;

use crate::error::DimensionError;
use crate::model::{ContentDimensionIdentifier, ContentDimensionValue, DimensionSpacePoint, DimensionSpacePointSet};
use crate::source::ContentDimensionSource;

/// Returns true if no coordinate of `point` forbids another.
pub fn combination_allowed(point: &DimensionSpacePoint) -> bool {
    point.coordinates().all(|(dimension, value)| {
        point.coordinates().all(|(other_dimension, other_value)| {
            dimension == other_dimension || value.can_combine_with(other_dimension.as_str(), other_value)
        })
    })
}

/// Validates a point against a dimension source.
///
/// The point must have exactly one coordinate per registered dimension,
/// each coordinate must be a registered value, and the combination must be
/// allowed in both directions.
pub fn validate_point<S>(source: &S, point: &DimensionSpacePoint) -> Result<(), DimensionError>
where
    S: ContentDimensionSource + ?Sized,
{
    // Combinations are checked on the registered values; the point's own
    // values may be detached copies without constraints.
    let mut registered = Vec::with_capacity(point.len());
    for (dimension, value) in point.coordinates() {
        let definition =
            source
                .dimension(dimension.as_str())
                .ok_or_else(|| DimensionError::UnknownContentDimension {
                    dimension: dimension.to_string(),
                })?;
        let value = definition.value(value.value()).ok_or_else(|| {
            DimensionError::UnknownContentDimensionValue {
                dimension: dimension.to_string(),
                value: value.value().to_string(),
            }
        })?;
        registered.push((dimension, value));
    }

    for definition in source.dimensions() {
        if point.coordinate(definition.identifier().as_str()).is_none() {
            return Err(DimensionError::MissingCoordinate {
                dimension: definition.identifier().to_string(),
            });
        }
    }

    for &(dimension, value) in &registered {
        for &(other_dimension, other_value) in &registered {
            if dimension != other_dimension && !value.can_combine_with(other_dimension.as_str(), other_value) {
                return Err(DimensionError::DisallowedCombination {
                    dimension: dimension.to_string(),
                    value: value.value().to_string(),
                    other_dimension: other_dimension.to_string(),
                    other_value: other_value.value().to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Enumerates every allowed combination of the source's dimension values.
///
/// Dimensions are combined in identifier order and values in configuration
/// order, so the result is deterministic. A source without dimensions
/// yields the single empty point.
pub fn allowed_combinations<S>(source: &S) -> Vec<DimensionSpacePoint>
where
    S: ContentDimensionSource + ?Sized,
{
    let mut combinations: Vec<Vec<(ContentDimensionIdentifier, Arc<ContentDimensionValue>)>> = vec![Vec::new()];

    for dimension in source.dimensions() {
        let identifier = dimension.identifier();
        let mut extended = Vec::with_capacity(combinations.len() * dimension.values().len());
        for partial in &combinations {
            for value in dimension.values() {
                let compatible = partial.iter().all(|(other_dimension, other_value)| {
                    value.can_combine_with(other_dimension.as_str(), other_value)
                        && other_value.can_combine_with(identifier.as_str(), value)
                });
                if compatible {
                    let mut combination = partial.clone();
                    combination.push((identifier.clone(), Arc::clone(value)));
                    extended.push(combination);
                }
            }
        }
        combinations = extended;
    }

    debug!(combinations = combinations.len(), "computed allowed dimension combinations");
    combinations.into_iter().map(DimensionSpacePoint::new).collect()
}

/// Returns all allowed combinations as a point set.
pub fn allowed_dimension_subspace<S>(source: &S) -> DimensionSpacePointSet
where
    S: ContentDimensionSource + ?Sized,
{
    DimensionSpacePointSet::from_consistent(allowed_combinations(source))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::source::InMemoryContentDimensionSource;

    fn source() -> InMemoryContentDimensionSource {
        InMemoryContentDimensionSource::from_configuration(json!({
            "language": {
                "values": {
                    "en": {
                        "specializations": {
                            "en_US": { "constraints": { "country": { "*": false, "us": true } } }
                        }
                    }
                }
            },
            "country": {
                "values": { "us": {}, "de": {} }
            }
        }))
        .unwrap()
    }

    fn point(source: &InMemoryContentDimensionSource, pairs: &[(&str, &str)]) -> DimensionSpacePoint {
        let coordinates: BTreeMap<String, String> = pairs
            .iter()
            .map(|(d, v)| (d.to_string(), v.to_string()))
            .collect();
        source.point_from_coordinates(&coordinates).unwrap()
    }

    #[test]
    fn test_allowed_combinations() {
        let source = source();
        let combinations = allowed_combinations(&source);
        assert_eq!(
            combinations,
            vec![
                point(&source, &[("country", "us"), ("language", "en")]),
                point(&source, &[("country", "us"), ("language", "en_US")]),
                point(&source, &[("country", "de"), ("language", "en")]),
            ]
        );
        assert!(combinations.iter().all(combination_allowed));
    }

    #[test]
    fn test_constraints_checked_in_both_directions() {
        // The restriction is declared on country=de, not on the language.
        let source = InMemoryContentDimensionSource::from_configuration(json!({
            "language": { "values": { "en": {}, "fr": {} } },
            "country": {
                "values": { "de": { "constraints": { "language": { "fr": false } } } }
            }
        }))
        .unwrap();

        let subspace = allowed_dimension_subspace(&source);
        assert_eq!(subspace.len(), 1);
        assert!(subspace.contains(&point(&source, &[("language", "en"), ("country", "de")])));

        let fr_de = point(&source, &[("language", "fr"), ("country", "de")]);
        assert!(!combination_allowed(&fr_de));
        assert_eq!(
            validate_point(&source, &fr_de).unwrap_err(),
            DimensionError::DisallowedCombination {
                dimension: "country".into(),
                value: "de".into(),
                other_dimension: "language".into(),
                other_value: "fr".into(),
            }
        );
    }

    #[test]
    fn test_validate_point() {
        let source = source();
        assert_eq!(
            validate_point(&source, &point(&source, &[("language", "en_US"), ("country", "us")])),
            Ok(())
        );
        assert_eq!(
            validate_point(&source, &point(&source, &[("language", "en_US"), ("country", "de")])),
            Err(DimensionError::DisallowedCombination {
                dimension: "language".into(),
                value: "en_US".into(),
                other_dimension: "country".into(),
                other_value: "de".into(),
            })
        );
        assert_eq!(
            validate_point(&source, &point(&source, &[("language", "en")])),
            Err(DimensionError::MissingCoordinate {
                dimension: "country".into()
            })
        );
    }

    #[test]
    fn test_validate_point_with_foreign_values() {
        let source = source();
        let foreign = DimensionSpacePoint::new([
            (
                ContentDimensionIdentifier::new("language").unwrap(),
                Arc::new(ContentDimensionValue::new("fr").unwrap()),
            ),
            (
                ContentDimensionIdentifier::new("country").unwrap(),
                Arc::new(ContentDimensionValue::new("us").unwrap()),
            ),
        ]);
        assert_eq!(
            validate_point(&source, &foreign),
            Err(DimensionError::UnknownContentDimensionValue {
                dimension: "language".into(),
                value: "fr".into()
            })
        );

        let valid = point(&source, &[("language", "en"), ("country", "us")]);
        let extra = valid.vary(
            ContentDimensionIdentifier::new("market").unwrap(),
            Arc::new(ContentDimensionValue::new("eu").unwrap()),
        );
        assert_eq!(
            validate_point(&source, &extra),
            Err(DimensionError::UnknownContentDimension {
                dimension: "market".into()
            })
        );
    }

    #[test]
    fn test_validate_point_uses_registered_constraints() {
        let source = source();
        let registered = point(&source, &[("language", "en_US"), ("country", "de")]);
        let detached = DimensionSpacePoint::new([
            (
                ContentDimensionIdentifier::new("language").unwrap(),
                Arc::new(ContentDimensionValue::new("en_US").unwrap()),
            ),
            (
                ContentDimensionIdentifier::new("country").unwrap(),
                Arc::new(ContentDimensionValue::new("de").unwrap()),
            ),
        ]);
        assert_eq!(detached, registered);

        let expected = Err(DimensionError::DisallowedCombination {
            dimension: "language".into(),
            value: "en_US".into(),
            other_dimension: "country".into(),
            other_value: "de".into(),
        });
        assert_eq!(validate_point(&source, &registered), expected);
        assert_eq!(validate_point(&source, &detached), expected);
    }

    #[test]
    fn test_subspace_without_dimensions() {
        let source = InMemoryContentDimensionSource::default();
        let subspace = allowed_dimension_subspace(&source);
        assert_eq!(subspace.len(), 1);
        assert!(subspace.first().unwrap().is_empty());
        assert_eq!(validate_point(&source, &DimensionSpacePoint::empty()), Ok(()));
    }

    #[test]
    fn test_subspace_is_usable_through_trait_object() {
        let source = source();
        let dynamic: &dyn ContentDimensionSource = &source;
        assert_eq!(allowed_dimension_subspace(dynamic).len(), 3);
    }
}
