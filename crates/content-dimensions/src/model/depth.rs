//! Specialization depth of dimension values.

use std::fmt;

use serde::Serialize;

use crate::error::DimensionError;

/// How many levels more specific a value is than its dimension's root value.
///
/// Depth 0 is a root (general) value; `en_US` specializing `en` has depth 1.
/// Depths order fallback chains from most to least specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ContentDimensionValueSpecializationDepth(u32);

impl ContentDimensionValueSpecializationDepth {
    /// The depth of a root value.
    pub const ROOT: Self = Self(0);

    /// Creates a depth from a signed integer.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::InvalidSpecializationDepth` if `depth` is
    /// negative or does not fit in 32 bits.
    pub fn new(depth: i64) -> Result<Self, DimensionError> {
        u32::try_from(depth)
            .map(Self)
            .map_err(|_| DimensionError::InvalidSpecializationDepth { depth })
    }

    /// Returns the raw depth.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns true for root values.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the depth one level more specialized than this one.
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u32> for ContentDimensionValueSpecializationDepth {
    fn from(depth: u32) -> Self {
        Self(depth)
    }
}

impl fmt::Display for ContentDimensionValueSpecializationDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_depth_rejected() {
        assert_eq!(
            ContentDimensionValueSpecializationDepth::new(-1),
            Err(DimensionError::InvalidSpecializationDepth { depth: -1 })
        );
    }

    #[test]
    fn test_non_negative_depths_accepted() {
        assert_eq!(ContentDimensionValueSpecializationDepth::new(0).unwrap().value(), 0);
        assert_eq!(ContentDimensionValueSpecializationDepth::new(7).unwrap().value(), 7);
        assert!(ContentDimensionValueSpecializationDepth::new(0).unwrap().is_zero());
    }

    #[test]
    fn test_default_is_root() {
        assert_eq!(
            ContentDimensionValueSpecializationDepth::default(),
            ContentDimensionValueSpecializationDepth::ROOT
        );
    }

    #[test]
    fn test_increment_and_ordering() {
        let root = ContentDimensionValueSpecializationDepth::ROOT;
        let child = root.increment();
        assert_eq!(child.value(), 1);
        assert!(root < child);
        assert!(child < child.increment());
    }
}
