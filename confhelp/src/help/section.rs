//! Rendering of a single configuration tree.

use std::fmt::{self, Write};

use crate::help::appender::ConsoleAppender;
use crate::metadata::node::{ConfigMap, ConfigMetadata, ConfigObject};

/// Extra indentation of list element content relative to its `- ` marker.
const ELEMENT_OFFSET: usize = 2;

/// Returns `nodes` ordered by name, nameless nodes first.
pub fn sorted_by_name(nodes: &[ConfigMetadata]) -> Vec<&ConfigMetadata> {
    let mut sorted: Vec<&ConfigMetadata> = nodes.iter().collect();
    sorted.sort_by(|a, b| a.name().cmp(&b.name()));
    sorted
}

/// Renders config nodes, nesting children `step` columns deeper.
pub struct ConfigSectionRenderer {
    step: usize,
}

impl ConfigSectionRenderer {
    pub fn new(step: usize) -> Self {
        Self { step }
    }

    /// Renders `node` as a property: type header, description, then its body.
    pub fn render<W: Write + ?Sized>(
        &self,
        out: &mut ConsoleAppender<'_, W>,
        node: &ConfigMetadata,
    ) -> fmt::Result {
        out.println(&format!("# Type: {}", node.type_label()))?;
        if let Some(description) = node.description() {
            out.println_comment(description)?;
        }

        match node {
            ConfigMetadata::Object(object) => self.render_object(out, object),
            ConfigMetadata::List(list) => {
                print_key(out, list.name.as_deref())?;
                self.render_element(&mut out.shifted(self.step), &list.element)
            }
            ConfigMetadata::Value(value) => {
                let sample = value.value_type.sample_value();
                match &value.name {
                    Some(name) => out.println(&format!("{name}: {sample}")),
                    None => out.println(sample),
                }
            }
            ConfigMetadata::Map(map) => {
                print_key(out, map.name.as_deref())?;
                self.render_map_body(&mut out.shifted(self.step), map)
            }
        }
    }

    fn render_object<W: Write + ?Sized>(
        &self,
        out: &mut ConsoleAppender<'_, W>,
        object: &ConfigObject,
    ) -> fmt::Result {
        match &object.name {
            Some(name) => {
                out.println(&format!("{name}:"))?;
                self.render_properties(&mut out.shifted(self.step), &object.properties)
            }
            None => self.render_properties(out, &object.properties),
        }
    }

    fn render_properties<W: Write + ?Sized>(
        &self,
        out: &mut ConsoleAppender<'_, W>,
        properties: &[ConfigMetadata],
    ) -> fmt::Result {
        for (i, property) in sorted_by_name(properties).into_iter().enumerate() {
            if i > 0 {
                out.blank_line()?;
            }
            self.render(out, property)?;
        }
        Ok(())
    }

    /// Renders the single representative element of a list.
    fn render_element<W: Write + ?Sized>(
        &self,
        out: &mut ConsoleAppender<'_, W>,
        element: &ConfigMetadata,
    ) -> fmt::Result {
        out.println(&format!("- # Element type: {}", element.type_label()))?;

        let mut body = out.shifted(ELEMENT_OFFSET);
        if let Some(description) = element.description() {
            body.println_comment(description)?;
        }

        match element {
            ConfigMetadata::Object(object) => {
                self.render_properties(&mut body, &object.properties)
            }
            ConfigMetadata::List(list) => self.render_element(&mut body, &list.element),
            ConfigMetadata::Value(value) => body.println(value.value_type.sample_value()),
            ConfigMetadata::Map(map) => self.render_map_body(&mut body, map),
        }
    }

    /// Renders key/value types and one representative entry of a map.
    fn render_map_body<W: Write + ?Sized>(
        &self,
        out: &mut ConsoleAppender<'_, W>,
        map: &ConfigMap,
    ) -> fmt::Result {
        out.println(&format!("# Keys type: {}", map.key_type.label()))?;
        out.println(&format!("# Values type: {}", map.value.type_label()))?;
        if let Some(description) = map.value.description() {
            out.println_comment(description)?;
        }

        let key = format!("<{}>", map.key_type.label());
        match map.value.as_ref() {
            ConfigMetadata::Value(value) => {
                out.println(&format!("{key}: {}", value.value_type.sample_value()))
            }
            ConfigMetadata::Object(object) => {
                out.println(&format!("{key}:"))?;
                self.render_properties(&mut out.shifted(self.step), &object.properties)
            }
            ConfigMetadata::List(list) => {
                out.println(&format!("{key}:"))?;
                self.render_element(&mut out.shifted(self.step), &list.element)
            }
            ConfigMetadata::Map(inner) => {
                out.println(&format!("{key}:"))?;
                self.render_map_body(&mut out.shifted(self.step), inner)
            }
        }
    }
}

fn print_key<W: Write + ?Sized>(
    out: &mut ConsoleAppender<'_, W>,
    name: Option<&str>,
) -> fmt::Result {
    match name {
        Some(name) => out.println(&format!("{name}:")),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{ConfigList, ConfigMap, ConfigObject, ConfigValue, TypeRef};

    fn render(node: impl Into<ConfigMetadata>) -> String {
        let mut out = String::new();
        let mut appender = ConsoleAppender::new(&mut out, 80);
        ConfigSectionRenderer::new(6)
            .render(&mut appender, &node.into())
            .unwrap();
        out
    }

    fn lines(lines: &[&str]) -> String {
        lines.iter().map(|l| format!("{l}\n")).collect()
    }

    #[test]
    fn test_value() {
        let value = ConfigValue::builder("port", TypeRef::Integer)
            .description("Listen port")
            .build();
        assert_eq!(
            render(value),
            lines(&["# Type: int", "# Listen port", "port: 100"])
        );
    }

    #[test]
    fn test_nameless_value() {
        let value = ConfigValue::anonymous(TypeRef::Boolean).build();
        assert_eq!(render(value), lines(&["# Type: boolean", "false"]));
    }

    #[test]
    fn test_nested_object_sorted() {
        let pool = ConfigObject::builder("pool")
            .type_name("app.PoolConfig")
            .property(ConfigValue::builder("min", TypeRef::Integer).build())
            .property(ConfigValue::builder("max", TypeRef::Integer).build())
            .build();
        let db = ConfigObject::builder("db")
            .type_name("app.DbConfig")
            .property(pool)
            .property(ConfigValue::builder("url", TypeRef::String).build())
            .build();

        assert_eq!(
            render(db),
            lines(&[
                "# Type: app.DbConfig",
                "db:",
                "      # Type: app.PoolConfig",
                "      pool:",
                "            # Type: int",
                "            max: 100",
                "",
                "            # Type: int",
                "            min: 100",
                "",
                "      # Type: String",
                "      url: 'string'",
            ])
        );
    }

    #[test]
    fn test_nameless_object_keeps_offset() {
        let object = ConfigObject::anonymous()
            .type_name("app.Anon")
            .property(ConfigValue::builder("flag", TypeRef::Boolean).build())
            .build();
        assert_eq!(
            render(object),
            lines(&["# Type: app.Anon", "# Type: boolean", "flag: false"])
        );
    }

    #[test]
    fn test_list_of_lists() {
        let cell = ConfigValue::anonymous(TypeRef::Integer).build();
        let inner = ConfigList::anonymous(cell).build();
        let matrix = ConfigList::builder("matrix", inner).build();
        assert_eq!(
            render(matrix),
            lines(&[
                "# Type: List",
                "matrix:",
                "      - # Element type: List",
                "        - # Element type: int",
                "          100",
            ])
        );
    }

    #[test]
    fn test_list_element_description() {
        let host = ConfigValue::anonymous(TypeRef::String)
            .description("Host name")
            .build();
        let hosts = ConfigList::builder("hosts", host).build();
        assert_eq!(
            render(hosts),
            lines(&[
                "# Type: List",
                "hosts:",
                "      - # Element type: String",
                "        # Host name",
                "        'string'",
            ])
        );
    }

    #[test]
    fn test_map_of_values() {
        let env = ConfigMap::builder("env", ConfigValue::anonymous(TypeRef::String).build())
            .description("Environment variables")
            .build();
        assert_eq!(
            render(env),
            lines(&[
                "# Type: Map",
                "# Environment variables",
                "env:",
                "      # Keys type: String",
                "      # Values type: String",
                "      <String>: 'string'",
            ])
        );
    }

    #[test]
    fn test_map_of_objects() {
        let endpoint = ConfigObject::anonymous()
            .type_name("app.Endpoint")
            .property(ConfigValue::builder("url", TypeRef::String).build())
            .property(ConfigValue::builder("retries", TypeRef::Integer).build())
            .build();
        let endpoints = ConfigMap::builder("endpoints", endpoint).build();
        assert_eq!(
            render(endpoints),
            lines(&[
                "# Type: Map",
                "endpoints:",
                "      # Keys type: String",
                "      # Values type: app.Endpoint",
                "      <String>:",
                "            # Type: int",
                "            retries: 100",
                "",
                "            # Type: String",
                "            url: 'string'",
            ])
        );
    }

    #[test]
    fn test_sorted_by_name_nameless_first() {
        let nodes: Vec<ConfigMetadata> = vec![
            ConfigValue::builder("b", TypeRef::Integer).build().into(),
            ConfigValue::anonymous(TypeRef::Integer).build().into(),
            ConfigValue::builder("a", TypeRef::Integer).build().into(),
        ];
        let names: Vec<Option<&str>> = sorted_by_name(&nodes)
            .into_iter()
            .map(ConfigMetadata::name)
            .collect();
        assert_eq!(names, vec![None, Some("a"), Some("b")]);
    }
}
