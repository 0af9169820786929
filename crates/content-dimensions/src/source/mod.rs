//! Registries of content dimension definitions.
//!
//! A dimension source hands out the dimensions of a content repository and
//! the values registered for them. Points are built from source values so
//! that every point shares the registered `ContentDimensionValue`s.

pub mod config;

use std::collections::BTreeMap;

use crate::error::DimensionError;
use crate::model::{ContentDimension, ContentDimensionIdentifier, DimensionSpacePoint};

/// Read access to a set of content dimension definitions.
pub trait ContentDimensionSource {
    /// Returns the dimension named `identifier`, if registered.
    fn dimension(&self, identifier: &str) -> Option<&ContentDimension>;

    /// Returns all dimensions ordered by identifier.
    fn dimensions(&self) -> Vec<&ContentDimension>;

    /// Builds a point from plain `dimension -> value` strings, e.g. the
    /// `points` entries of a serialized point set.
    ///
    /// # Errors
    ///
    /// Returns `UnknownContentDimension` or `UnknownContentDimensionValue` if
    /// a coordinate does not name a registered dimension value.
    fn point_from_coordinates(
        &self,
        coordinates: &BTreeMap<String, String>,
    ) -> Result<DimensionSpacePoint, DimensionError> {
        let mut resolved = Vec::with_capacity(coordinates.len());
        for (dimension, value) in coordinates {
            let definition =
                self.dimension(dimension)
                    .ok_or_else(|| DimensionError::UnknownContentDimension {
                        dimension: dimension.clone(),
                    })?;
            let value = definition.value(value).ok_or_else(|| {
                DimensionError::UnknownContentDimensionValue {
                    dimension: dimension.clone(),
                    value: value.clone(),
                }
            })?;
            resolved.push((definition.identifier().clone(), value.clone()));
        }
        Ok(DimensionSpacePoint::new(resolved))
    }
}

/// A dimension source holding its definitions in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentDimensionSource {
    dimensions: BTreeMap<ContentDimensionIdentifier, ContentDimension>,
}

impl InMemoryContentDimensionSource {
    /// Creates a source from dimension definitions.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::DuplicateContentDimension` if two definitions
    /// share an identifier.
    pub fn new(dimensions: Vec<ContentDimension>) -> Result<Self, DimensionError> {
        let mut by_identifier = BTreeMap::new();
        for dimension in dimensions {
            let identifier = dimension.identifier().clone();
            if by_identifier.contains_key(&identifier) {
                return Err(DimensionError::DuplicateContentDimension {
                    dimension: identifier.to_string(),
                });
            }
            by_identifier.insert(identifier, dimension);
        }
        Ok(Self {
            dimensions: by_identifier,
        })
    }

    /// Returns the number of registered dimensions.
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    /// Returns true if no dimensions are registered.
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}

impl ContentDimensionSource for InMemoryContentDimensionSource {
    fn dimension(&self, identifier: &str) -> Option<&ContentDimension> {
        self.dimensions.get(identifier)
    }

    fn dimensions(&self) -> Vec<&ContentDimension> {
        self.dimensions.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentDimensionValue;
    use crate::util::ConfigurationTree;

    fn dimension(name: &str, values: &[&str]) -> ContentDimension {
        ContentDimension::new(
            ContentDimensionIdentifier::new(name).unwrap(),
            values
                .iter()
                .map(|v| ContentDimensionValue::new(*v).unwrap())
                .collect(),
            None,
            BTreeMap::new(),
            ConfigurationTree::new(),
        )
        .unwrap()
    }

    fn source() -> InMemoryContentDimensionSource {
        InMemoryContentDimensionSource::new(vec![
            dimension("language", &["en", "de"]),
            dimension("country", &["us", "de"]),
        ])
        .unwrap()
    }

    fn coordinates(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(d, v)| (d.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_lookup() {
        let source = source();
        assert_eq!(source.len(), 2);
        assert!(source.dimension("language").is_some());
        assert!(source.dimension("market").is_none());

        let names: Vec<_> = source
            .dimensions()
            .iter()
            .map(|d| d.identifier().as_str())
            .collect();
        assert_eq!(names, vec!["country", "language"]);
    }

    #[test]
    fn test_duplicate_dimension_rejected() {
        let result = InMemoryContentDimensionSource::new(vec![
            dimension("language", &["en"]),
            dimension("language", &["de"]),
        ]);
        assert_eq!(
            result.unwrap_err(),
            DimensionError::DuplicateContentDimension {
                dimension: "language".into()
            }
        );
    }

    #[test]
    fn test_point_from_coordinates_shares_registered_values() {
        let source = source();
        let point = source
            .point_from_coordinates(&coordinates(&[("language", "en"), ("country", "us")]))
            .unwrap();

        let registered = source.dimension("language").unwrap().value("en").unwrap();
        assert!(std::sync::Arc::ptr_eq(point.coordinate("language").unwrap(), registered));
        assert_eq!(
            point.coordinate_values(),
            coordinates(&[("language", "en"), ("country", "us")])
        );
    }

    #[test]
    fn test_point_from_unknown_coordinates() {
        let source = source();
        assert_eq!(
            source
                .point_from_coordinates(&coordinates(&[("market", "eu")]))
                .unwrap_err(),
            DimensionError::UnknownContentDimension {
                dimension: "market".into()
            }
        );
        assert_eq!(
            source
                .point_from_coordinates(&coordinates(&[("language", "fr")]))
                .unwrap_err(),
            DimensionError::UnknownContentDimensionValue {
                dimension: "language".into(),
                value: "fr".into()
            }
        );
    }

    #[test]
    fn test_round_trip_through_serialized_set() {
        use crate::model::DimensionSpacePointSet;

        let source = source();
        let set = DimensionSpacePointSet::new([
            source
                .point_from_coordinates(&coordinates(&[("language", "en"), ("country", "us")]))
                .unwrap(),
            source
                .point_from_coordinates(&coordinates(&[("language", "de"), ("country", "de")]))
                .unwrap(),
        ])
        .unwrap();

        let json = serde_json::to_value(&set).unwrap();
        let reread: Vec<BTreeMap<String, String>> =
            serde_json::from_value(json["points"].clone()).unwrap();
        let points: Vec<_> = reread
            .iter()
            .map(|c| source.point_from_coordinates(c).unwrap())
            .collect();

        assert_eq!(DimensionSpacePointSet::new(points).unwrap(), set);
    }
}
