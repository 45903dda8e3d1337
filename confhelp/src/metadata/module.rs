use serde::{Deserialize, Serialize};

use crate::metadata::node::ConfigMetadata;

/// A named application module and the configuration roots it declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub configs: Vec<ConfigMetadata>,
}

impl ModuleMetadata {
    /// Start building a module called `name`.
    pub fn builder(name: impl Into<String>) -> ModuleMetadataBuilder {
        ModuleMetadataBuilder {
            name: name.into(),
            description: None,
            configs: Vec::new(),
        }
    }
}

/// Builder for [`ModuleMetadata`].
#[derive(Debug, Clone)]
pub struct ModuleMetadataBuilder {
    name: String,
    description: Option<String>,
    configs: Vec<ConfigMetadata>,
}

impl ModuleMetadataBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a configuration root.
    pub fn config(mut self, config: impl Into<ConfigMetadata>) -> Self {
        self.configs.push(config.into());
        self
    }

    pub fn build(self) -> ModuleMetadata {
        ModuleMetadata {
            name: self.name,
            description: self.description,
            configs: self.configs,
        }
    }
}

/// The set of modules of an application, keyed by module name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ModuleMetadata>", into = "Vec<ModuleMetadata>")]
pub struct ModulesMetadata {
    modules: Vec<ModuleMetadata>,
}

impl ModulesMetadata {
    pub fn builder() -> ModulesMetadataBuilder {
        ModulesMetadataBuilder::default()
    }

    /// Modules in insertion order.
    pub fn modules(&self) -> &[ModuleMetadata] {
        &self.modules
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Modules sorted by name, case-sensitive.
    pub fn sorted(&self) -> Vec<&ModuleMetadata> {
        let mut sorted: Vec<&ModuleMetadata> = self.modules.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }
}

/// Builder for [`ModulesMetadata`].
#[derive(Debug, Clone, Default)]
pub struct ModulesMetadataBuilder {
    modules: Vec<ModuleMetadata>,
}

impl ModulesMetadataBuilder {
    /// Add a module, replacing any earlier module with the same name.
    pub fn module(mut self, module: ModuleMetadata) -> Self {
        match self.modules.iter_mut().find(|m| m.name == module.name) {
            Some(existing) => {
                warn!("module `{}` declared twice, keeping the last one", module.name);
                *existing = module;
            }
            None => self.modules.push(module),
        }
        self
    }

    pub fn modules(self, modules: impl IntoIterator<Item = ModuleMetadata>) -> Self {
        modules.into_iter().fold(self, Self::module)
    }

    pub fn build(self) -> ModulesMetadata {
        ModulesMetadata {
            modules: self.modules,
        }
    }
}

impl From<Vec<ModuleMetadata>> for ModulesMetadata {
    fn from(modules: Vec<ModuleMetadata>) -> Self {
        modules.into_iter().collect()
    }
}

impl From<ModulesMetadata> for Vec<ModuleMetadata> {
    fn from(modules: ModulesMetadata) -> Self {
        modules.modules
    }
}

impl FromIterator<ModuleMetadata> for ModulesMetadata {
    fn from_iter<T: IntoIterator<Item = ModuleMetadata>>(iter: T) -> Self {
        ModulesMetadata::builder().modules(iter).build()
    }
}
