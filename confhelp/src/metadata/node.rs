use serde::{Deserialize, Serialize};

use crate::metadata::types::TypeRef;

/// A node of a configuration schema tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigMetadata {
    /// Structured value with named properties.
    Object(ConfigObject),
    /// Sequence of elements sharing one element schema.
    List(ConfigList),
    /// Scalar or opaque value.
    Value(ConfigValue),
    /// Keyed collection sharing one value schema.
    Map(ConfigMap),
}

impl ConfigMetadata {
    /// Property name, `None` for list elements and anonymous nodes.
    pub fn name(&self) -> Option<&str> {
        match self {
            ConfigMetadata::Object(o) => o.name.as_deref(),
            ConfigMetadata::List(l) => l.name.as_deref(),
            ConfigMetadata::Value(v) => v.name.as_deref(),
            ConfigMetadata::Map(m) => m.name.as_deref(),
        }
    }

    /// Human readable description, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            ConfigMetadata::Object(o) => o.description.as_deref(),
            ConfigMetadata::List(l) => l.description.as_deref(),
            ConfigMetadata::Value(v) => v.description.as_deref(),
            ConfigMetadata::Map(m) => m.description.as_deref(),
        }
    }

    /// Label of the declared type, as shown after `Type:`.
    pub fn type_label(&self) -> &str {
        match self {
            ConfigMetadata::Object(o) => o.type_name.as_str(),
            ConfigMetadata::List(_) => "List",
            ConfigMetadata::Value(v) => v.value_type.label(),
            ConfigMetadata::Map(_) => "Map",
        }
    }
}

/// Object node: a named group of properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Declared type name, usually fully qualified.
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: Vec<ConfigMetadata>,
}

impl ConfigObject {
    /// Start building a named object.
    pub fn builder(name: impl Into<String>) -> ConfigObjectBuilder {
        ConfigObjectBuilder::new(Some(name.into()))
    }

    /// Start building an anonymous object, e.g. a list element.
    pub fn anonymous() -> ConfigObjectBuilder {
        ConfigObjectBuilder::new(None)
    }
}

/// Builder for [`ConfigObject`].
#[derive(Debug, Clone)]
pub struct ConfigObjectBuilder {
    name: Option<String>,
    type_name: String,
    description: Option<String>,
    properties: Vec<ConfigMetadata>,
}

impl ConfigObjectBuilder {
    fn new(name: Option<String>) -> Self {
        Self {
            name,
            type_name: "Object".to_string(),
            description: None,
            properties: Vec::new(),
        }
    }

    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn property(mut self, property: impl Into<ConfigMetadata>) -> Self {
        self.properties.push(property.into());
        self
    }

    pub fn build(self) -> ConfigObject {
        ConfigObject {
            name: self.name,
            type_name: self.type_name,
            description: self.description,
            properties: self.properties,
        }
    }
}

/// List node with a single element schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub element: Box<ConfigMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ConfigList {
    /// Start building a named list of `element`.
    pub fn builder(
        name: impl Into<String>,
        element: impl Into<ConfigMetadata>,
    ) -> ConfigListBuilder {
        ConfigListBuilder {
            name: Some(name.into()),
            element: element.into(),
            description: None,
        }
    }

    /// Start building an anonymous list, e.g. the element of another list.
    pub fn anonymous(element: impl Into<ConfigMetadata>) -> ConfigListBuilder {
        ConfigListBuilder {
            name: None,
            element: element.into(),
            description: None,
        }
    }
}

/// Builder for [`ConfigList`].
#[derive(Debug, Clone)]
pub struct ConfigListBuilder {
    name: Option<String>,
    element: ConfigMetadata,
    description: Option<String>,
}

impl ConfigListBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> ConfigList {
        ConfigList {
            name: self.name,
            element: Box::new(self.element),
            description: self.description,
        }
    }
}

/// Value node: a leaf with a declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value_type: TypeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ConfigValue {
    /// Start building a named value.
    pub fn builder(name: impl Into<String>, value_type: TypeRef) -> ConfigValueBuilder {
        ConfigValueBuilder {
            name: Some(name.into()),
            value_type,
            description: None,
        }
    }

    /// Start building an anonymous value, e.g. a list element.
    pub fn anonymous(value_type: TypeRef) -> ConfigValueBuilder {
        ConfigValueBuilder {
            name: None,
            value_type,
            description: None,
        }
    }
}

/// Builder for [`ConfigValue`].
#[derive(Debug, Clone)]
pub struct ConfigValueBuilder {
    name: Option<String>,
    value_type: TypeRef,
    description: Option<String>,
}

impl ConfigValueBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> ConfigValue {
        ConfigValue {
            name: self.name,
            value_type: self.value_type,
            description: self.description,
        }
    }
}

/// Map node: arbitrary keys of one type, values of one schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigMap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub key_type: TypeRef,
    pub value: Box<ConfigMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ConfigMap {
    /// Start building a named map with `String` keys.
    pub fn builder(
        name: impl Into<String>,
        value: impl Into<ConfigMetadata>,
    ) -> ConfigMapBuilder {
        ConfigMapBuilder {
            name: Some(name.into()),
            key_type: TypeRef::String,
            value: value.into(),
            description: None,
        }
    }

    /// Start building an anonymous map with `String` keys.
    pub fn anonymous(value: impl Into<ConfigMetadata>) -> ConfigMapBuilder {
        ConfigMapBuilder {
            name: None,
            key_type: TypeRef::String,
            value: value.into(),
            description: None,
        }
    }
}

/// Builder for [`ConfigMap`].
#[derive(Debug, Clone)]
pub struct ConfigMapBuilder {
    name: Option<String>,
    key_type: TypeRef,
    value: ConfigMetadata,
    description: Option<String>,
}

impl ConfigMapBuilder {
    pub fn key_type(mut self, key_type: TypeRef) -> Self {
        self.key_type = key_type;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> ConfigMap {
        ConfigMap {
            name: self.name,
            key_type: self.key_type,
            value: Box::new(self.value),
            description: self.description,
        }
    }
}

impl From<ConfigObject> for ConfigMetadata {
    fn from(value: ConfigObject) -> Self {
        ConfigMetadata::Object(value)
    }
}

impl From<ConfigList> for ConfigMetadata {
    fn from(value: ConfigList) -> Self {
        ConfigMetadata::List(value)
    }
}

impl From<ConfigValue> for ConfigMetadata {
    fn from(value: ConfigValue) -> Self {
        ConfigMetadata::Value(value)
    }
}

impl From<ConfigMap> for ConfigMetadata {
    fn from(value: ConfigMap) -> Self {
        ConfigMetadata::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_builder() {
        let root = ConfigObject::builder("m1root")
            .type_name("app.RootConfig")
            .description("Root config")
            .property(ConfigValue::builder("port", TypeRef::Integer).build())
            .build();

        assert_eq!(root.name.as_deref(), Some("m1root"));
        assert_eq!(root.properties.len(), 1);

        let node = ConfigMetadata::from(root);
        assert_eq!(node.type_label(), "app.RootConfig");
        assert_eq!(node.description(), Some("Root config"));
    }

    #[test]
    fn test_type_labels() {
        let host = ConfigValue::anonymous(TypeRef::String).build();
        let list: ConfigMetadata = ConfigList::builder("hosts", host).build().into();
        assert_eq!(list.type_label(), "List");
        assert_eq!(list.name(), Some("hosts"));

        let var = ConfigValue::anonymous(TypeRef::String).build();
        let map: ConfigMetadata = ConfigMap::builder("env", var).build().into();
        assert_eq!(map.type_label(), "Map");

        let anonymous: ConfigMetadata = ConfigObject::anonymous().build().into();
        assert_eq!(anonymous.name(), None);
        assert_eq!(anonymous.type_label(), "Object");
    }

    #[test]
    fn test_deserialize_tree() {
        let node: ConfigMetadata = serde_json::from_value(serde_json::json!({
            "kind": "object",
            "name": "db",
            "type_name": "app.DbConfig",
            "properties": [
                {"kind": "value", "name": "url", "value_type": "string"},
                {
                    "kind": "list",
                    "name": "replicas",
                    "element": {"kind": "value", "value_type": "string"}
                }
            ]
        }))
        .unwrap();

        let ConfigMetadata::Object(db) = node else {
            panic!("expected object");
        };
        assert_eq!(db.type_name, "app.DbConfig");
        assert_eq!(db.properties[1].type_label(), "List");
    }
}
