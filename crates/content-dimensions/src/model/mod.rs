//! Data model types for content dimensions.
//!
//! This module contains the value objects of the dimension model:
//! - Identifiers and specialization depths
//! - Combination constraints between dimensions
//! - Dimension values and dimension definitions
//! - Dimension space points and point sets

pub mod constraints;
pub mod depth;
pub mod dimension;
pub mod identifier;
pub mod point;
pub mod point_set;
pub mod value;

pub use constraints::{CombinationPolicy, ContentDimensionConstraints};
pub use depth::ContentDimensionValueSpecializationDepth;
pub use dimension::ContentDimension;
pub use identifier::ContentDimensionIdentifier;
pub use point::DimensionSpacePoint;
pub use point_set::DimensionSpacePointSet;
pub use value::ContentDimensionValue;
