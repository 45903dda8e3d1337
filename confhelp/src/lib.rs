//! # confhelp
//!
//! Renders the configuration schema of application modules into a
//! fixed-width, indented help text.
//!
//! ## Features
//!
//! - Immutable metadata model built with builders: modules, config objects,
//!   lists, maps and typed values
//! - Deterministic output: modules and properties sorted by name
//! - Description folding to the terminal width
//! - Import of JSON Schema documents, including types deriving
//!   [`schemars::JsonSchema`]
//!
//! ## Quick Start
//!
//! ```rust
//! use confhelp::{
//!     ConfigHelpGenerator,
//!     metadata::{ConfigObject, ConfigValue, ModuleMetadata, ModulesMetadata, TypeRef},
//! };
//!
//! let jdbc = ConfigObject::builder("jdbc")
//!     .type_name("app.JdbcConfig")
//!     .property(ConfigValue::builder("url", TypeRef::String).build())
//!     .build();
//!
//! let modules = ModulesMetadata::builder()
//!     .module(
//!         ModuleMetadata::builder("Jdbc")
//!             .description("Database access")
//!             .config(jdbc)
//!             .build(),
//!     )
//!     .build();
//!
//! let help = ConfigHelpGenerator::new(&modules, 80).generate();
//! assert!(help.starts_with("MODULES\n      Jdbc: Database access\n"));
//! ```
//!
//! ## Modules
//!
//! - [`metadata`] - Configuration metadata model
//! - [`help`] - Help text rendering
//! - [`options`] - Layout options
//! - [`schema`] - JSON Schema import

#[macro_use]
extern crate log;

/// Help text rendering.
pub mod help;

/// Configuration metadata model.
pub mod metadata;

/// Layout options of the generated help.
pub mod options;

/// JSON Schema import.
pub mod schema;

pub use help::{ConfigHelpGenerator, render};
pub use options::HelpOptions;
pub use schema::{SchemaError, config_for, config_from_schema};
