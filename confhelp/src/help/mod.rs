//! Help text rendering.
//!
//! The help lists modules under `MODULES`, then every config root under
//! `CONFIGURATION` as an annotated, YAML-like sample:
//!
//! ```text
//! MODULES
//!       Jdbc: Database access
//!
//! CONFIGURATION
//!       # Type: app.JdbcConfig
//!       jdbc:
//!             # Type: String
//!             url: 'string'
//! ```

/// Offset-aware line writer with word folding.
pub mod appender;

/// Top-level help generator.
pub mod generator;

/// Rendering of config nodes, list elements and map entries.
pub mod section;

pub use generator::{ConfigHelpGenerator, render};
