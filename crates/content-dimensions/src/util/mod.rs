//! Utility modules for the content dimension model.

pub mod path;

pub use path::{ConfigurationTree, value_by_path};
