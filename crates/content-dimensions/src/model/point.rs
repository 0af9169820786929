//! Dimension space points.
//!
//! A point is one coordinate in the dimension space: at most one value per
//! dimension, e.g. `{language: en_US, country: us}`. It addresses a single
//! content variant.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::model::{ContentDimensionIdentifier, ContentDimensionValue};

/// An immutable mapping from dimension identifier to dimension value.
///
/// Coordinates are kept sorted by identifier, so two points built from the
/// same coordinates in any order are equal and hash alike. Values are
/// compared by their value string.
#[derive(Debug, Clone)]
pub struct DimensionSpacePoint {
    coordinates: BTreeMap<ContentDimensionIdentifier, Arc<ContentDimensionValue>>,
    /// SHA-256 of the canonical coordinate JSON, lowercase hex.
    hash: String,
}

impl DimensionSpacePoint {
    /// Creates a point from `(identifier, value)` pairs.
    ///
    /// A later pair for the same identifier replaces an earlier one.
    pub fn new(
        coordinates: impl IntoIterator<Item = (ContentDimensionIdentifier, Arc<ContentDimensionValue>)>,
    ) -> Self {
        let coordinates: BTreeMap<_, _> = coordinates.into_iter().collect();
        let hash = format_hex(&Sha256::digest(canonical_json(&coordinates).as_bytes()));
        Self { coordinates, hash }
    }

    /// Creates the point with no coordinates (the origin of a space without dimensions).
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// Returns the value for `dimension`, if the point has a coordinate there.
    pub fn coordinate(&self, dimension: &str) -> Option<&Arc<ContentDimensionValue>> {
        self.coordinates.get(dimension)
    }

    /// Iterates `(identifier, value)` pairs in identifier order.
    pub fn coordinates(&self) -> impl Iterator<Item = (&ContentDimensionIdentifier, &Arc<ContentDimensionValue>)> {
        self.coordinates.iter()
    }

    /// Returns the coordinates as plain strings.
    pub fn coordinate_values(&self) -> BTreeMap<String, String> {
        self.coordinates
            .iter()
            .map(|(id, value)| (id.to_string(), value.value().to_string()))
            .collect()
    }

    /// Iterates the identifiers this point has coordinates for, in order.
    pub fn dimension_identifiers(&self) -> impl Iterator<Item = &ContentDimensionIdentifier> {
        self.coordinates.keys()
    }

    /// Returns the number of coordinates.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns true if the point has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Returns the content hash identifying this point's coordinates.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Returns a copy of this point with the coordinate for `dimension` set to `value`.
    pub fn vary(&self, dimension: ContentDimensionIdentifier, value: Arc<ContentDimensionValue>) -> Self {
        let mut coordinates = self.coordinates.clone();
        coordinates.insert(dimension, value);
        Self::new(coordinates)
    }

    /// Returns true if `other` differs from this point in `dimension` and
    /// nowhere else.
    pub fn is_direct_variant_in_dimension(&self, other: &DimensionSpacePoint, dimension: &str) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut differs_in_dimension = false;
        for (id, value) in &self.coordinates {
            let Some(other_value) = other.coordinate(id.as_str()) else {
                return false;
            };
            if value.value() != other_value.value() {
                if id.as_str() != dimension {
                    return false;
                }
                differs_in_dimension = true;
            }
        }
        differs_in_dimension
    }
}

impl PartialEq for DimensionSpacePoint {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates.len() == other.coordinates.len()
            && self
                .coordinates
                .iter()
                .zip(&other.coordinates)
                .all(|((a_id, a), (b_id, b))| a_id == b_id && a.value() == b.value())
    }
}

impl Eq for DimensionSpacePoint {}

impl Hash for DimensionSpacePoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl Serialize for DimensionSpacePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.coordinates.len()))?;
        for (id, value) in &self.coordinates {
            map.serialize_entry(id.as_str(), value.value())?;
        }
        map.end()
    }
}

impl fmt::Display for DimensionSpacePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dimension space point:{}", canonical_json(&self.coordinates))
    }
}

/// Renders coordinates as a JSON object with keys in identifier order.
fn canonical_json(coordinates: &BTreeMap<ContentDimensionIdentifier, Arc<ContentDimensionValue>>) -> String {
    let map: Map<String, Value> = coordinates
        .iter()
        .map(|(id, value)| (id.to_string(), Value::String(value.value().to_string())))
        .collect();
    Value::Object(map).to_string()
}

/// Formats bytes as lowercase hex.
fn format_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        s.push_str(&format!("{:02x}", byte));
    }
    s
}
