//! Content dimension definitions.
//!
//! A dimension owns its values and the generalization edges between them
//! (`en_US -> en`). Definitions are built once, at configuration time, and
//! shared read-only afterwards.

use std::collections::BTreeMap;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::error::DimensionError;
use crate::model::{ContentDimensionIdentifier, ContentDimensionValue, ContentDimensionValueSpecializationDepth};
use crate::util::{ConfigurationTree, value_by_path};

/// A named axis of content variation together with its legal values.
#[derive(Debug, Clone)]
pub struct ContentDimension {
    identifier: ContentDimensionIdentifier,
    /// Values in configuration order.
    values: Vec<Arc<ContentDimensionValue>>,
    /// Value string -> index into `values`.
    index: FxHashMap<String, usize>,
    default_value: usize,
    /// Specialization value -> generalization value.
    generalizations: BTreeMap<String, String>,
    configuration: ConfigurationTree,
}

impl ContentDimension {
    /// Creates a dimension definition.
    ///
    /// `generalizations` maps each specialized value to the value it
    /// specializes. When `default_value` is `None` the first value is used.
    ///
    /// # Errors
    ///
    /// - `DuplicateContentDimensionValue` if two values share a value string
    /// - `EmptyContentDimension` if `values` is empty
    /// - `UnknownContentDimensionValue` if the default value or an edge
    ///   endpoint is not among `values`
    /// - `CyclicGeneralization` if following generalizations never reaches a root
    /// - `InconsistentSpecializationDepth` if a root value does not have depth 0
    ///   or a specialization is not exactly one level below its generalization
    pub fn new(
        identifier: ContentDimensionIdentifier,
        values: Vec<ContentDimensionValue>,
        default_value: Option<&str>,
        generalizations: BTreeMap<String, String>,
        configuration: ConfigurationTree,
    ) -> Result<Self, DimensionError> {
        if values.is_empty() {
            return Err(DimensionError::EmptyContentDimension {
                dimension: identifier.to_string(),
            });
        }

        let mut index = FxHashMap::default();
        for (i, value) in values.iter().enumerate() {
            if index.insert(value.value().to_string(), i).is_some() {
                return Err(DimensionError::DuplicateContentDimensionValue {
                    dimension: identifier.to_string(),
                    value: value.value().to_string(),
                });
            }
        }

        let unknown = |value: &str| DimensionError::UnknownContentDimensionValue {
            dimension: identifier.to_string(),
            value: value.to_string(),
        };

        let default_value = match default_value {
            Some(default) => *index.get(default).ok_or_else(|| unknown(default))?,
            None => 0,
        };

        for (specialization, generalization) in &generalizations {
            if !index.contains_key(specialization) {
                return Err(unknown(specialization));
            }
            if !index.contains_key(generalization) {
                return Err(unknown(generalization));
            }
        }

        // Every chain must reach a root within as many steps as there are values.
        for start in generalizations.keys() {
            let mut current = start;
            let mut steps = 0;
            while let Some(next) = generalizations.get(current) {
                steps += 1;
                if steps > values.len() {
                    return Err(DimensionError::CyclicGeneralization {
                        dimension: identifier.to_string(),
                        value: start.clone(),
                    });
                }
                current = next;
            }
        }

        // Roots sit at depth 0 and each specialization one level below its generalization.
        for value in &values {
            let mut expected = 0u32;
            let mut current = value.value();
            while let Some(next) = generalizations.get(current) {
                expected += 1;
                current = next.as_str();
            }
            let found = value.specialization_depth().value();
            if found != expected {
                return Err(DimensionError::InconsistentSpecializationDepth {
                    dimension: identifier.to_string(),
                    value: value.value().to_string(),
                    expected,
                    found,
                });
            }
        }

        Ok(Self {
            identifier,
            values: values.into_iter().map(Arc::new).collect(),
            index,
            default_value,
            generalizations,
            configuration,
        })
    }

    /// Returns the dimension's identifier.
    pub fn identifier(&self) -> &ContentDimensionIdentifier {
        &self.identifier
    }

    /// Returns all values in configuration order.
    pub fn values(&self) -> &[Arc<ContentDimensionValue>] {
        &self.values
    }

    /// Looks up a value by its string.
    pub fn value(&self, value: &str) -> Option<&Arc<ContentDimensionValue>> {
        self.index.get(value).map(|&i| &self.values[i])
    }

    /// Returns the default value.
    pub fn default_value(&self) -> &Arc<ContentDimensionValue> {
        &self.values[self.default_value]
    }

    /// Returns the values that do not specialize any other value.
    pub fn root_values(&self) -> Vec<&Arc<ContentDimensionValue>> {
        self.values
            .iter()
            .filter(|v| !self.generalizations.contains_key(v.value()))
            .collect()
    }

    /// Returns the value that `value` directly specializes, if any.
    pub fn generalization(&self, value: &ContentDimensionValue) -> Option<&Arc<ContentDimensionValue>> {
        self.generalizations
            .get(value.value())
            .and_then(|general| self.value(general))
    }

    /// Returns the values that directly specialize `value`, in configuration order.
    pub fn specializations(&self, value: &ContentDimensionValue) -> Vec<&Arc<ContentDimensionValue>> {
        self.values
            .iter()
            .filter(|v| {
                self.generalizations
                    .get(v.value())
                    .is_some_and(|general| general == value.value())
            })
            .collect()
    }

    /// Returns the depth of the most specialized value.
    pub fn maximum_depth(&self) -> ContentDimensionValueSpecializationDepth {
        self.values
            .iter()
            .map(|v| v.specialization_depth())
            .max()
            .unwrap_or_default()
    }

    /// Looks up a dot-separated path in the dimension's configuration.
    pub fn configuration_value(&self, path: &str) -> Option<&Value> {
        value_by_path(&self.configuration, path)
    }
}
