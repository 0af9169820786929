//! Dimension values.
//!
//! A dimension value is one legal point on a dimension's axis, e.g. `en` or
//! `en_US` for a `language` dimension. Values are created once when the
//! dimension definitions are loaded and are shared (via `Arc`) by every
//! dimension space point built from them.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::error::DimensionError;
use crate::model::{
    ContentDimensionConstraints, ContentDimensionIdentifier, ContentDimensionValueSpecializationDepth,
};
use crate::util::{ConfigurationTree, value_by_path};

/// A single legal value of a content dimension.
///
/// Identity is the `value` string within the owning dimension; uniqueness is
/// enforced by [`ContentDimension`](crate::model::ContentDimension), not here.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDimensionValue {
    value: String,
    specialization_depth: ContentDimensionValueSpecializationDepth,
    constraints: BTreeMap<ContentDimensionIdentifier, ContentDimensionConstraints>,
    /// General configuration like UI labels or detection hints. Not interpreted.
    configuration: ConfigurationTree,
}

impl ContentDimensionValue {
    /// Creates a root value with no constraints and no configuration.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::InvalidContentDimensionValue` if `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, DimensionError> {
        Self::with_details(value, None, BTreeMap::new(), ConfigurationTree::new())
    }

    /// Creates a value with all attributes. A missing depth defaults to 0.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::InvalidContentDimensionValue` if `value` is empty.
    pub fn with_details(
        value: impl Into<String>,
        specialization_depth: Option<ContentDimensionValueSpecializationDepth>,
        constraints: BTreeMap<ContentDimensionIdentifier, ContentDimensionConstraints>,
        configuration: ConfigurationTree,
    ) -> Result<Self, DimensionError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DimensionError::InvalidContentDimensionValue);
        }
        Ok(Self {
            value,
            specialization_depth: specialization_depth.unwrap_or_default(),
            constraints,
            configuration,
        })
    }

    /// Returns the raw value string.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns how many generalization steps separate this value from its root.
    pub fn specialization_depth(&self) -> ContentDimensionValueSpecializationDepth {
        self.specialization_depth
    }

    /// Returns the constraints against all other dimensions.
    pub fn all_constraints(&self) -> &BTreeMap<ContentDimensionIdentifier, ContentDimensionConstraints> {
        &self.constraints
    }

    /// Returns the constraints declared against `dimension`, or `None` if
    /// there are none.
    pub fn constraints_for(&self, dimension: &str) -> Option<&ContentDimensionConstraints> {
        self.constraints.get(dimension)
    }

    /// Checks whether this value may be combined with `other`, a value of
    /// `dimension`.
    ///
    /// Without constraints against `dimension` every value is allowed. The
    /// check is directional: it only consults the constraints declared on
    /// `self`. Callers needing symmetric legality must also ask `other`.
    pub fn can_combine_with(&self, dimension: &str, other: &ContentDimensionValue) -> bool {
        self.constraints_for(dimension)
            .is_none_or(|constraints| constraints.allows_combination_with(other))
    }

    /// Returns the opaque configuration tree.
    pub fn configuration(&self) -> &ConfigurationTree {
        &self.configuration
    }

    /// Looks up a dot-separated path in the configuration, e.g. `"ui.label"`.
    pub fn configuration_value(&self, path: &str) -> Option<&Value> {
        value_by_path(&self.configuration, path)
    }
}

impl fmt::Display for ContentDimensionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
