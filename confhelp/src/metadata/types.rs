use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared type of a configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// Boolean flag.
    Boolean,
    /// Integer number.
    Integer,
    /// Floating-point number.
    Float,
    /// Text value.
    String,
    /// Closed set of string variants.
    Enum {
        /// Type name shown in the help.
        name: String,
        /// Allowed variants, in declaration order.
        variants: Vec<String>,
    },
    /// Any other type, referenced by its (usually fully qualified) name.
    Named(String),
}

impl TypeRef {
    /// Shorthand for [`TypeRef::Named`].
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Label printed after `Type:` in the help.
    pub fn label(&self) -> &str {
        match self {
            TypeRef::Boolean => "boolean",
            TypeRef::Integer => "int",
            TypeRef::Float => "double",
            TypeRef::String => "String",
            TypeRef::Enum { name, .. } => name.as_str(),
            TypeRef::Named(name) => name.as_str(),
        }
    }

    /// Example value printed in place of a real one.
    pub fn sample_value(&self) -> &str {
        match self {
            TypeRef::Boolean => "false",
            TypeRef::Integer => "100",
            TypeRef::Float => "1.0",
            TypeRef::String => "'string'",
            TypeRef::Enum { variants, .. } => variants.first().map_or("value", String::as_str),
            TypeRef::Named(_) => "value",
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(TypeRef::Boolean.label(), "boolean");
        assert_eq!(TypeRef::Integer.label(), "int");
        assert_eq!(TypeRef::String.label(), "String");
        assert_eq!(TypeRef::named("io.bootique.Bootique").label(), "io.bootique.Bootique");
        assert_eq!(TypeRef::Float.to_string(), "double");
    }

    #[test]
    fn test_sample_values() {
        assert_eq!(TypeRef::Boolean.sample_value(), "false");
        assert_eq!(TypeRef::Integer.sample_value(), "100");
        assert_eq!(TypeRef::String.sample_value(), "'string'");
        assert_eq!(TypeRef::named("app.Unknown").sample_value(), "value");

        let level = TypeRef::Enum {
            name: "LogLevel".to_string(),
            variants: vec!["Trace".to_string(), "Debug".to_string()],
        };
        assert_eq!(level.label(), "LogLevel");
        assert_eq!(level.sample_value(), "Trace");

        let empty = TypeRef::Enum {
            name: "Empty".to_string(),
            variants: Vec::new(),
        };
        assert_eq!(empty.sample_value(), "value");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(TypeRef::Integer).unwrap();
        assert_eq!(json, serde_json::json!("integer"));

        let named: TypeRef =
            serde_json::from_value(serde_json::json!({"named": "app.Pool"})).unwrap();
        assert_eq!(named, TypeRef::named("app.Pool"));
    }
}
