//! Error types for the content dimension model.

use thiserror::Error;

/// Error categories for dimension model failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// D001: Malformed dimension definition (empty names, negative depths, duplicates)
    MalformedDefinition,
    /// D002: Reference to an unregistered dimension or value
    UnknownReference,
    /// D003: Coordinates that may not be combined
    DisallowedCombination,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "D001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::MalformedDefinition => "D001",
            ErrorCode::UnknownReference => "D002",
            ErrorCode::DisallowedCombination => "D003",
        }
    }
}

/// Error raised while building or checking dimension model objects.
///
/// All of these are raised at construction or validation time. Once an
/// object exists it is well-formed and its accessors cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    // === D001: Malformed definition ===
    #[error("[D001] content dimension values must not be empty")]
    InvalidContentDimensionValue,

    #[error("[D001] specialization depth must be a non-negative 32-bit integer, got {depth}")]
    InvalidSpecializationDepth { depth: i64 },

    #[error("[D001] content dimension identifiers must not be empty")]
    InvalidContentDimensionIdentifier,

    #[error("[D001] value {value:?} is defined more than once in dimension {dimension:?}")]
    DuplicateContentDimensionValue { dimension: String, value: String },

    #[error("[D001] dimension {dimension:?} defines no values")]
    EmptyContentDimension { dimension: String },

    #[error("[D001] generalizations of value {value:?} in dimension {dimension:?} form a cycle")]
    CyclicGeneralization { dimension: String, value: String },

    #[error("[D001] value {value:?} in dimension {dimension:?} has specialization depth {found}, expected {expected}")]
    InconsistentSpecializationDepth {
        dimension: String,
        value: String,
        expected: u32,
        found: u32,
    },

    #[error("[D001] dimension {dimension:?} is registered more than once")]
    DuplicateContentDimension { dimension: String },

    #[error(
        "[D001] dimension space point set mixes dimensions: expected {expected:?}, found {found:?}"
    )]
    InconsistentPointSet {
        expected: Vec<String>,
        found: Vec<String>,
    },

    // === D002: Unknown reference ===
    #[error("[D002] dimension {dimension:?} has no value {value:?}")]
    UnknownContentDimensionValue { dimension: String, value: String },

    #[error("[D002] unknown content dimension {dimension:?}")]
    UnknownContentDimension { dimension: String },

    #[error("[D002] dimension space point has no coordinate for dimension {dimension:?}")]
    MissingCoordinate { dimension: String },

    // === D003: Disallowed combination ===
    #[error("[D003] {dimension}={value} cannot be combined with {other_dimension}={other_value}")]
    DisallowedCombination {
        dimension: String,
        value: String,
        other_dimension: String,
        other_value: String,
    },
}

impl DimensionError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DimensionError::UnknownContentDimensionValue { .. }
            | DimensionError::UnknownContentDimension { .. }
            | DimensionError::MissingCoordinate { .. } => ErrorCode::UnknownReference,
            DimensionError::DisallowedCombination { .. } => ErrorCode::DisallowedCombination,
            _ => ErrorCode::MalformedDefinition,
        }
    }
}

/// Error while loading dimension definitions from a configuration tree.
///
/// Loading is all-or-nothing: a malformed dimension prevents the whole
/// source from being built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("malformed dimension configuration: {0}")]
    Malformed(String),

    #[error("invalid configuration for dimension {dimension:?}: {source}")]
    InvalidDimension {
        dimension: String,
        #[source]
        source: DimensionError,
    },

    #[error("invalid configuration for value {value:?} of dimension {dimension:?}: {source}")]
    InvalidValue {
        dimension: String,
        value: String,
        #[source]
        source: DimensionError,
    },
}

impl ConfigurationError {
    /// Returns the underlying model error, if any.
    pub fn dimension_error(&self) -> Option<&DimensionError> {
        match self {
            ConfigurationError::Malformed(_) => None,
            ConfigurationError::InvalidDimension { source, .. }
            | ConfigurationError::InvalidValue { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(e: serde_json::Error) -> Self {
        ConfigurationError::Malformed(e.to_string())
    }
}
