//! Loading dimension definitions from a configuration tree.
//!
//! The tree maps each dimension identifier to its definition:
//!
//! ```json
//! {
//!   "language": {
//!     "defaultValue": "en",
//!     "label": "Language",
//!     "values": {
//!       "en": {
//!         "label": "English",
//!         "specializations": {
//!           "en_US": { "constraints": { "country": { "*": false, "us": true } } }
//!         }
//!       },
//!       "de": {}
//!     }
//!   }
//! }
//! ```
//!
//! Nesting under `specializations` defines both the generalization edges and
//! the specialization depth. Inside `constraints`, `"*"` sets the policy for
//! all values of the other dimension and any other key overrides it for one
//! value. Remaining keys are kept as opaque configuration.
//!
//! Loading is all-or-nothing: the first malformed dimension or value aborts
//! the load with an error naming it.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{ConfigurationError, DimensionError};
use crate::model::{
    CombinationPolicy, ContentDimension, ContentDimensionConstraints, ContentDimensionIdentifier,
    ContentDimensionValue, ContentDimensionValueSpecializationDepth,
};
use crate::source::InMemoryContentDimensionSource;
use crate::util::ConfigurationTree;

const DEFAULT_VALUE_KEY: &str = "defaultValue";
const VALUES_KEY: &str = "values";
const CONSTRAINTS_KEY: &str = "constraints";
const SPECIALIZATIONS_KEY: &str = "specializations";
const WILDCARD_KEY: &str = "*";

impl InMemoryContentDimensionSource {
    /// Parses a JSON document and loads the dimensions it defines.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let tree: Value = serde_json::from_str(json)?;
        Self::from_configuration(tree)
    }

    /// Loads the dimensions defined by a configuration tree.
    pub fn from_configuration(tree: Value) -> Result<Self, ConfigurationError> {
        let Value::Object(dimensions) = tree else {
            return Err(ConfigurationError::Malformed(
                "dimension configuration must be an object".to_string(),
            ));
        };

        let mut loaded = Vec::with_capacity(dimensions.len());
        for (name, node) in dimensions {
            loaded.push(load_dimension(&name, node)?);
        }

        let source = Self::new(loaded).map_err(|source| match source {
            DimensionError::DuplicateContentDimension { ref dimension } => {
                ConfigurationError::InvalidDimension {
                    dimension: dimension.clone(),
                    source,
                }
            }
            other => ConfigurationError::Malformed(other.to_string()),
        })?;
        debug!(dimensions = source.len(), "loaded content dimensions");
        Ok(source)
    }
}

fn load_dimension(name: &str, node: Value) -> Result<ContentDimension, ConfigurationError> {
    let invalid_dimension = |source| ConfigurationError::InvalidDimension {
        dimension: name.to_string(),
        source,
    };

    let identifier = ContentDimensionIdentifier::new(name).map_err(invalid_dimension)?;
    let mut configuration = expect_object(node, || format!("dimension {name:?} must be an object"))?;

    let default_value = match configuration.remove(DEFAULT_VALUE_KEY) {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) => Some(value),
        Some(_) => {
            return Err(ConfigurationError::Malformed(format!(
                "{DEFAULT_VALUE_KEY} of dimension {name:?} must be a string"
            )));
        }
    };
    let value_nodes = match configuration.remove(VALUES_KEY) {
        None | Some(Value::Null) => Map::new(),
        Some(node) => expect_object(node, || format!("values of dimension {name:?} must be an object"))?,
    };

    let mut values = Vec::new();
    let mut generalizations = BTreeMap::new();
    load_values(
        name,
        value_nodes,
        None,
        ContentDimensionValueSpecializationDepth::ROOT,
        &mut values,
        &mut generalizations,
    )?;

    if values.is_empty() {
        return Err(invalid_dimension(DimensionError::EmptyContentDimension {
            dimension: name.to_string(),
        }));
    }
    if default_value.is_none() {
        if let Some(first) = values.first() {
            warn!(
                dimension = name,
                default_value = first.value(),
                "no default value configured, using first root value"
            );
        }
    }

    ContentDimension::new(
        identifier,
        values,
        default_value.as_deref(),
        generalizations,
        configuration,
    )
    .map_err(|source| match source {
        DimensionError::DuplicateContentDimensionValue { ref value, .. }
        | DimensionError::UnknownContentDimensionValue { ref value, .. }
        | DimensionError::CyclicGeneralization { ref value, .. }
        | DimensionError::InconsistentSpecializationDepth { ref value, .. } => {
            ConfigurationError::InvalidValue {
                dimension: name.to_string(),
                value: value.clone(),
                source,
            }
        }
        other => invalid_dimension(other),
    })
}

/// Loads `nodes` depth-first, so every generalization precedes its specializations.
fn load_values(
    dimension: &str,
    nodes: Map<String, Value>,
    generalization: Option<&str>,
    depth: ContentDimensionValueSpecializationDepth,
    values: &mut Vec<ContentDimensionValue>,
    generalizations: &mut BTreeMap<String, String>,
) -> Result<(), ConfigurationError> {
    for (name, node) in nodes {
        let invalid_value = |source| ConfigurationError::InvalidValue {
            dimension: dimension.to_string(),
            value: name.clone(),
            source,
        };

        let mut configuration = match node {
            Value::Null => ConfigurationTree::new(),
            node => expect_object(node, || {
                format!("value {name:?} of dimension {dimension:?} must be an object")
            })?,
        };

        let constraints = match configuration.remove(CONSTRAINTS_KEY) {
            None | Some(Value::Null) => BTreeMap::new(),
            Some(node) => load_constraints(dimension, &name, node)?,
        };
        let specializations = match configuration.remove(SPECIALIZATIONS_KEY) {
            None | Some(Value::Null) => Map::new(),
            Some(node) => expect_object(node, || {
                format!("specializations of value {name:?} in dimension {dimension:?} must be an object")
            })?,
        };

        let value = ContentDimensionValue::with_details(name.as_str(), Some(depth), constraints, configuration)
            .map_err(invalid_value)?;
        values.push(value);
        if let Some(generalization) = generalization {
            generalizations.insert(name.clone(), generalization.to_string());
        }

        load_values(
            dimension,
            specializations,
            Some(name.as_str()),
            depth.increment(),
            values,
            generalizations,
        )?;
    }
    Ok(())
}

fn load_constraints(
    dimension: &str,
    value: &str,
    node: Value,
) -> Result<BTreeMap<ContentDimensionIdentifier, ContentDimensionConstraints>, ConfigurationError> {
    let per_dimension = expect_object(node, || {
        format!("constraints of value {value:?} in dimension {dimension:?} must be an object")
    })?;

    let mut constraints = BTreeMap::new();
    for (other_dimension, rules) in per_dimension {
        let identifier = ContentDimensionIdentifier::new(other_dimension.as_str()).map_err(|source| {
            ConfigurationError::InvalidValue {
                dimension: dimension.to_string(),
                value: value.to_string(),
                source,
            }
        })?;
        let rules = expect_object(rules, || {
            format!(
                "constraints of value {value:?} in dimension {dimension:?} against {other_dimension:?} must be an object"
            )
        })?;

        let mut wildcard = CombinationPolicy::default();
        let mut overrides = Vec::with_capacity(rules.len());
        for (other_value, allowed) in rules {
            let Value::Bool(allowed) = allowed else {
                return Err(ConfigurationError::Malformed(format!(
                    "constraint {other_dimension}.{other_value} of value {value:?} in dimension {dimension:?} must be a boolean"
                )));
            };
            if other_value == WILDCARD_KEY {
                wildcard = allowed.into();
            } else {
                overrides.push((other_value, CombinationPolicy::from(allowed)));
            }
        }

        let entry = overrides
            .into_iter()
            .fold(ContentDimensionConstraints::new(wildcard), |entry, (other_value, policy)| {
                entry.with_override(other_value, policy)
            });
        constraints.insert(identifier, entry);
    }
    Ok(constraints)
}

fn expect_object(node: Value, message: impl FnOnce() -> String) -> Result<Map<String, Value>, ConfigurationError> {
    match node {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigurationError::Malformed(message())),
    }
}
