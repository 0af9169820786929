//! Sets of dimension space points.
//!
//! A point set describes a region of the dimension space, e.g. all variants
//! reachable from a point: `{[language => es, country => ar], [language => es, country => es]}`.
//! Order is significant; consumers may treat the first point as the
//! preferred one.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::error::DimensionError;
use crate::model::DimensionSpacePoint;

/// An ordered, duplicate-free collection of dimension space points.
///
/// All points span the same dimension identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DimensionSpacePointSet {
    points: Vec<DimensionSpacePoint>,
    #[serde(skip)]
    hashes: FxHashSet<String>,
}

impl DimensionSpacePointSet {
    /// Creates a set, keeping the first occurrence of each structurally
    /// equal point.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::InconsistentPointSet` if the points do not
    /// all have coordinates for the same dimensions. This is stricter than a
    /// plain point collection, which accepts any points: a set here always
    /// describes a region of a single dimension space.
    pub fn new(points: impl IntoIterator<Item = DimensionSpacePoint>) -> Result<Self, DimensionError> {
        let mut set = Self::empty();
        for point in points {
            if let Some(first) = set.points.first() {
                if !first.dimension_identifiers().eq(point.dimension_identifiers()) {
                    return Err(DimensionError::InconsistentPointSet {
                        expected: first.dimension_identifiers().map(|id| id.to_string()).collect(),
                        found: point.dimension_identifiers().map(|id| id.to_string()).collect(),
                    });
                }
            }
            set.push_unique(point);
        }
        Ok(set)
    }

    /// Creates an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a set from points already known to span the same dimensions.
    pub(crate) fn from_consistent(points: impl IntoIterator<Item = DimensionSpacePoint>) -> Self {
        let mut set = Self::empty();
        for point in points {
            set.push_unique(point);
        }
        set
    }

    /// Appends `point` unless an equal point is already present.
    fn push_unique(&mut self, point: DimensionSpacePoint) {
        if self.hashes.insert(point.hash().to_string()) {
            self.points.push(point);
        }
    }

    /// Returns the points in order.
    pub fn points(&self) -> &[DimensionSpacePoint] {
        &self.points
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DimensionSpacePoint> {
        self.points.iter()
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first (preferred) point.
    pub fn first(&self) -> Option<&DimensionSpacePoint> {
        self.points.first()
    }

    /// Returns true if a structurally equal point is in the set.
    pub fn contains(&self, point: &DimensionSpacePoint) -> bool {
        self.hashes.contains(point.hash())
    }

    /// Returns this set's points followed by the points of `other` not in this set.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::InconsistentPointSet` if the two sets span
    /// different dimensions.
    pub fn union(&self, other: &DimensionSpacePointSet) -> Result<Self, DimensionError> {
        Self::new(self.iter().chain(other.iter()).cloned())
    }

    /// Returns the points of this set that are also in `other`, in this set's order.
    pub fn intersection(&self, other: &DimensionSpacePointSet) -> Self {
        self.filtered(|point| other.contains(point))
    }

    /// Returns the points of this set that are not in `other`, in this set's order.
    pub fn difference(&self, other: &DimensionSpacePointSet) -> Self {
        self.filtered(|point| !other.contains(point))
    }

    fn filtered(&self, keep: impl Fn(&DimensionSpacePoint) -> bool) -> Self {
        Self::from_consistent(self.iter().filter(|p| keep(p)).cloned())
    }
}

impl<'a> IntoIterator for &'a DimensionSpacePointSet {
    type Item = &'a DimensionSpacePoint;
    type IntoIter = std::slice::Iter<'a, DimensionSpacePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for DimensionSpacePointSet {
    type Item = DimensionSpacePoint;
    type IntoIter = std::vec::IntoIter<DimensionSpacePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl fmt::Display for DimensionSpacePointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dimension space points:[")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", point)?;
        }
        f.write_str("]")
    }
}
