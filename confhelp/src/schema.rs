//! JSON Schema import.
//!
//! Converts JSON Schema documents, typically produced by
//! `schemars::schema_for!`, into [`ConfigMetadata`] trees that the help
//! generator can render.
//!
//! Supported constructs:
//!
//! - `object` with `properties`, or with only `additionalProperties` (a map)
//! - `array` with `items` / `prefixItems`
//! - `string`, `integer`, `number`, `boolean`, string `enum` and `const`;
//!   other `enum`/`const` values keep their JSON type
//! - `$ref` into `$defs` / `definitions`, cutting recursive references
//! - nullable types and single-branch `anyOf` / `oneOf` / `allOf`

use schemars::JsonSchema;
use serde_json::{Map, Value};

use crate::metadata::{ConfigList, ConfigMap, ConfigMetadata, ConfigObject, ConfigValue, TypeRef};

/// Errors raised while importing a JSON Schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("schema of config `{name}` is not an object schema")]
    RootNotObject { name: String },
    #[error("unresolved schema reference `{reference}` at {path}")]
    UnresolvedRef { path: String, reference: String },
    #[error("invalid schema at {path}: expected object or boolean, got {actual}")]
    InvalidNode { path: String, actual: String },
    #[error("failed to serialize schema: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Builds a config root called `name` from the JSON Schema of `C`.
pub fn config_for<C: JsonSchema>(name: &str) -> Result<ConfigMetadata, SchemaError> {
    let schema = schemars::schema_for!(C);
    let schema_json = serde_json::to_value(&schema)?;
    config_from_schema(name, &schema_json)
}

/// Builds a config root called `name` from a JSON Schema document.
///
/// The document must describe an object; `$ref`s resolve against the
/// document itself.
pub fn config_from_schema(name: &str, schema: &Value) -> Result<ConfigMetadata, SchemaError> {
    let mut reader = SchemaReader {
        root: schema,
        expanding: Vec::new(),
    };
    match reader.read(Some(name), schema, "#", Hints::default())? {
        root @ ConfigMetadata::Object(_) => Ok(root),
        _ => Err(SchemaError::RootNotObject {
            name: name.to_string(),
        }),
    }
}

/// Details a referring node passes down to the schema it points to.
#[derive(Default)]
struct Hints {
    type_name: Option<String>,
    description: Option<String>,
}

struct SchemaReader<'a> {
    root: &'a Value,
    /// `$ref`s currently being expanded, innermost last.
    expanding: Vec<&'a str>,
}

impl<'a> SchemaReader<'a> {
    fn read(
        &mut self,
        name: Option<&str>,
        node: &'a Value,
        path: &str,
        hints: Hints,
    ) -> Result<ConfigMetadata, SchemaError> {
        let schema = match node {
            Value::Object(schema) => schema,
            Value::Bool(_) => {
                let type_name = hints.type_name.unwrap_or_else(|| "value".to_string());
                return Ok(value(name, TypeRef::Named(type_name), hints.description));
            }
            other => {
                return Err(SchemaError::InvalidNode {
                    path: path.to_string(),
                    actual: json_kind(other).to_string(),
                });
            }
        };

        let description = hints.description.or_else(|| str_field(schema, "description"));
        let title = str_field(schema, "title");

        if let Some(reference) = schema.get("$ref").and_then(Value::as_str) {
            let hints = Hints {
                type_name: title,
                description,
            };
            return self.read_ref(name, reference, path, hints);
        }
        let type_name = title.or(hints.type_name);

        for key in ["allOf", "anyOf", "oneOf"] {
            let Some(branches) = schema.get(key).and_then(Value::as_array) else {
                continue;
            };
            let branches: Vec<&'a Value> =
                branches.iter().filter(|b| !is_null_schema(b)).collect();
            if let [single] = branches.as_slice() {
                let hints = Hints {
                    type_name,
                    description,
                };
                return self.read(name, *single, &format!("{path}/{key}"), hints);
            }
            if let Some(variants) = const_variants(&branches) {
                return Ok(value(name, enum_type(type_name, variants), description));
            }
            let type_name = type_name.unwrap_or_else(|| "value".to_string());
            return Ok(value(name, TypeRef::Named(type_name), description));
        }

        let variants = schema.get("enum").and_then(Value::as_array);
        if let Some(variants) = variants.and_then(|v| string_variants(v)) {
            return Ok(value(name, enum_type(type_name, variants), description));
        }
        if let Some(variant) = schema.get("const").and_then(Value::as_str) {
            let value_type = enum_type(type_name, vec![variant.to_string()]);
            return Ok(value(name, value_type, description));
        }

        let json_type = match schema.get("type") {
            Some(Value::String(t)) => Some(t.as_str()),
            Some(Value::Array(types)) => {
                types.iter().filter_map(Value::as_str).find(|t| *t != "null")
            }
            _ => None,
        };

        let value_type = match json_type {
            Some("object") => {
                return self.read_object(name, schema, path, type_name, description);
            }
            None if schema.contains_key("properties") => {
                return self.read_object(name, schema, path, type_name, description);
            }
            Some("array") => return self.read_array(name, schema, path, description),
            Some("string") => TypeRef::String,
            Some("integer") => TypeRef::Integer,
            Some("number") => TypeRef::Float,
            Some("boolean") => TypeRef::Boolean,
            _ => TypeRef::Named(type_name.unwrap_or_else(|| "value".to_string())),
        };
        Ok(value(name, value_type, description))
    }

    fn read_ref(
        &mut self,
        name: Option<&str>,
        reference: &'a str,
        path: &str,
        hints: Hints,
    ) -> Result<ConfigMetadata, SchemaError> {
        let root = self.root;
        let target = reference
            .strip_prefix('#')
            .and_then(|pointer| root.pointer(pointer))
            .ok_or_else(|| SchemaError::UnresolvedRef {
                path: path.to_string(),
                reference: reference.to_string(),
            })?;

        let def_name = reference
            .rsplit('/')
            .next()
            .filter(|n| !n.is_empty() && *n != "#")
            .map(String::from);
        let Hints {
            type_name,
            description,
        } = hints;

        if self.expanding.contains(&reference) {
            debug!("not expanding recursive schema reference `{reference}` at {path}");
            let type_name = type_name
                .or_else(|| target.as_object().and_then(|t| str_field(t, "title")))
                .or(def_name)
                .unwrap_or_else(|| "value".to_string());
            return Ok(value(name, TypeRef::Named(type_name), description));
        }

        self.expanding.push(reference);
        let hints = Hints {
            type_name: type_name.or(def_name),
            description,
        };
        let result = self.read(name, target, path, hints);
        self.expanding.pop();
        result
    }

    fn read_object(
        &mut self,
        name: Option<&str>,
        schema: &'a Map<String, Value>,
        path: &str,
        type_name: Option<String>,
        description: Option<String>,
    ) -> Result<ConfigMetadata, SchemaError> {
        let properties = schema.get("properties").and_then(Value::as_object);

        if let (None, Some(values @ Value::Object(_))) =
            (properties, schema.get("additionalProperties"))
        {
            let values = self.read(
                None,
                values,
                &format!("{path}/additionalProperties"),
                Hints::default(),
            )?;
            return Ok(ConfigMap {
                name: name.map(String::from),
                key_type: TypeRef::String,
                value: Box::new(values),
                description,
            }
            .into());
        }

        let mut children = Vec::new();
        for (key, property) in properties.into_iter().flatten() {
            let child_path = format!("{path}/properties/{key}");
            children.push(self.read(Some(key.as_str()), property, &child_path, Hints::default())?);
        }

        Ok(ConfigObject {
            name: name.map(String::from),
            type_name: type_name.unwrap_or_else(|| "Object".to_string()),
            description,
            properties: children,
        }
        .into())
    }

    fn read_array(
        &mut self,
        name: Option<&str>,
        schema: &'a Map<String, Value>,
        path: &str,
        description: Option<String>,
    ) -> Result<ConfigMetadata, SchemaError> {
        let items = match schema.get("items") {
            Some(Value::Array(tuple)) => tuple.first(),
            Some(items) => Some(items),
            None => schema
                .get("prefixItems")
                .and_then(Value::as_array)
                .and_then(|tuple| tuple.first()),
        };

        let element = match items {
            Some(items) => self.read(None, items, &format!("{path}/items"), Hints::default())?,
            None => value(None, TypeRef::named("value"), None),
        };

        Ok(ConfigList {
            name: name.map(String::from),
            element: Box::new(element),
            description,
        }
        .into())
    }
}

fn value(name: Option<&str>, value_type: TypeRef, description: Option<String>) -> ConfigMetadata {
    ConfigValue {
        name: name.map(String::from),
        value_type,
        description,
    }
    .into()
}

fn enum_type(type_name: Option<String>, variants: Vec<String>) -> TypeRef {
    TypeRef::Enum {
        name: type_name.unwrap_or_else(|| "String".to_string()),
        variants,
    }
}

fn str_field(schema: &Map<String, Value>, key: &str) -> Option<String> {
    schema.get(key).and_then(Value::as_str).map(String::from)
}

fn is_null_schema(schema: &Value) -> bool {
    schema.get("type").and_then(Value::as_str) == Some("null")
}

/// Variant names when every branch is a string `const` or string `enum`.
fn const_variants(branches: &[&Value]) -> Option<Vec<String>> {
    let mut variants = Vec::new();
    for branch in branches {
        if let Some(variant) = branch.get("const").and_then(Value::as_str) {
            variants.push(variant.to_string());
        } else if let Some(values) = branch.get("enum").and_then(Value::as_array) {
            variants.extend(string_variants(values)?);
        } else {
            return None;
        }
    }
    (!variants.is_empty()).then_some(variants)
}

/// Enum values as strings, ignoring `null`; `None` if any other value is not a string.
fn string_variants(values: &[Value]) -> Option<Vec<String>> {
    let mut variants = Vec::new();
    for value in values.iter().filter(|v| !v.is_null()) {
        variants.push(value.as_str()?.to_string());
    }
    (!variants.is_empty()).then_some(variants)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
