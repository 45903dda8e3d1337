//! Configuration metadata model.
//!
//! Descriptors are built once through builders and never mutated afterwards:
//!
//! - [`module`] - Modules and the module set
//! - [`node`] - Config nodes (object, list, value, map)
//! - [`types`] - Declared value types

/// Modules and the module set.
pub mod module;

/// Config tree nodes and their builders.
pub mod node;

/// Declared value types, labels and sample values.
pub mod types;

pub use module::{ModuleMetadata, ModulesMetadata};
pub use node::{ConfigList, ConfigMap, ConfigMetadata, ConfigObject, ConfigValue};
pub use types::TypeRef;
