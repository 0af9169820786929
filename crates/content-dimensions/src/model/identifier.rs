//! Dimension identifiers.

use std::borrow::Borrow;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::DimensionError;

/// The name of a content dimension, e.g. `"language"` or `"country"`.
///
/// Identifiers are case-sensitive and never empty. They compare and order
/// by their string value and are used as map keys throughout the model.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentDimensionIdentifier(String);

impl ContentDimensionIdentifier {
    /// Creates a new identifier.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::InvalidContentDimensionIdentifier` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, DimensionError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DimensionError::InvalidContentDimensionIdentifier);
        }
        Ok(Self(name))
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentDimensionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentDimensionIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ContentDimensionIdentifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ContentDimensionIdentifier {
    type Error = DimensionError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl Serialize for ContentDimensionIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_empty_identifier_rejected() {
        assert_eq!(
            ContentDimensionIdentifier::new(""),
            Err(DimensionError::InvalidContentDimensionIdentifier)
        );
    }

    #[test]
    fn test_case_sensitive() {
        let lower = ContentDimensionIdentifier::new("language").unwrap();
        let upper = ContentDimensionIdentifier::new("Language").unwrap();
        assert_ne!(lower, upper);
        assert_eq!(lower.to_string(), "language");
    }

    #[test]
    fn test_ordering_by_value() {
        let a = ContentDimensionIdentifier::new("country").unwrap();
        let b = ContentDimensionIdentifier::new("language").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_map_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(ContentDimensionIdentifier::new("language").unwrap(), 1);
        assert_eq!(map.get("language"), Some(&1));
        assert_eq!(map.get("country"), None);
    }

    #[test]
    fn test_serializes_as_string() {
        let id = ContentDimensionIdentifier::try_from("language").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"language\"");
    }
}
