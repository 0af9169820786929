//! Content dimension model for multi-dimensional content repositories.
//!
//! Content items can exist in several simultaneous variants, one per
//! combination of dimension values (language, country, audience, ...).
//! This crate names those variants, checks which combinations are legal and
//! groups them into sets.
//!
//! # Overview
//!
//! - **Dimension values** carry a specialization depth (`en` = 0, `en_US` = 1)
//!   and directional constraints against other dimensions.
//! - **Dimension space points** are immutable coordinates such as
//!   `{language: en_US, country: us}`, compared structurally.
//! - **Dimension space point sets** are ordered, duplicate-free regions of
//!   the dimension space.
//!
//! # Quick Start
//!
//! ```rust
//! use content_dimensions::{
//!     ContentDimensionSource, InMemoryContentDimensionSource, allowed_dimension_subspace,
//! };
//!
//! let source = InMemoryContentDimensionSource::from_json(r#"{
//!     "language": {
//!         "values": {
//!             "en": {
//!                 "specializations": {
//!                     "en_US": { "constraints": { "country": { "*": false, "us": true } } }
//!                 }
//!             }
//!         }
//!     },
//!     "country": { "values": { "us": {}, "de": {} } }
//! }"#).unwrap();
//!
//! let language = source.dimension("language").unwrap();
//! let en_us = language.value("en_US").unwrap();
//! let de = source.dimension("country").unwrap().value("de").unwrap();
//! assert!(!en_us.can_combine_with("country", de));
//!
//! let subspace = allowed_dimension_subspace(&source);
//! assert_eq!(subspace.len(), 3);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Identifiers, depths, constraints, values, dimensions, points and point sets
//! - [`source`]: Dimension registries and the configuration loader
//! - [`validate`]: Point validation and allowed-combination enumeration
//! - [`error`]: Error types
//! - [`util`]: Configuration tree lookup
//!
//! # Concurrency
//!
//! Every type is immutable once built. Values are shared through `Arc` and
//! may be read from any number of threads without locking.

pub mod error;
pub mod model;
pub mod source;
pub mod util;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::{ConfigurationError, DimensionError, ErrorCode};
pub use model::{
    CombinationPolicy, ContentDimension, ContentDimensionConstraints, ContentDimensionIdentifier,
    ContentDimensionValue, ContentDimensionValueSpecializationDepth, DimensionSpacePoint,
    DimensionSpacePointSet,
};
pub use source::{ContentDimensionSource, InMemoryContentDimensionSource};
pub use util::{ConfigurationTree, value_by_path};
pub use validate::{allowed_combinations, allowed_dimension_subspace, combination_allowed, validate_point};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
