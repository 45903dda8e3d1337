use std::fmt::{self, Write};

use crate::{
    help::{
        appender::ConsoleAppender,
        section::{ConfigSectionRenderer, sorted_by_name},
    },
    metadata::{ConfigMetadata, ModuleMetadata, ModulesMetadata},
    options::HelpOptions,
};

/// Generates the `MODULES` / `CONFIGURATION` help for a set of modules.
///
/// Output is deterministic: modules are sorted by name, config roots follow
/// module order and properties are sorted by name at every level.
pub struct ConfigHelpGenerator<'a> {
    modules: &'a ModulesMetadata,
    options: HelpOptions,
}

impl<'a> ConfigHelpGenerator<'a> {
    /// Creates a generator folding descriptions at `line_width` columns.
    pub fn new(modules: &'a ModulesMetadata, line_width: usize) -> Self {
        Self::with_options(modules, HelpOptions::with_line_width(line_width))
    }

    pub fn with_options(modules: &'a ModulesMetadata, options: HelpOptions) -> Self {
        Self { modules, options }
    }

    /// Renders the help into a string. Empty when there are no modules.
    pub fn generate(&self) -> String {
        let mut help = String::new();
        if let Err(err) = self.append(&mut help) {
            warn!("config help truncated: {err}");
        }
        help
    }

    /// Renders the help into `out`.
    pub fn append<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        if self.modules.is_empty() {
            return Ok(());
        }

        let modules = self.modules.sorted();
        let roots: Vec<&ConfigMetadata> = modules
            .iter()
            .copied()
            .flat_map(|m| sorted_by_name(&m.configs))
            .collect();
        debug!(
            "generating config help for {} modules, {} config roots",
            modules.len(),
            roots.len()
        );

        let mut appender = ConsoleAppender::new(out, self.options.line_width);
        self.print_modules(&mut appender, &modules)?;

        if !roots.is_empty() {
            appender.blank_line()?;
            self.print_configs(&mut appender, &roots)?;
        }
        Ok(())
    }

    fn print_modules<W: Write + ?Sized>(
        &self,
        out: &mut ConsoleAppender<'_, W>,
        modules: &[&ModuleMetadata],
    ) -> fmt::Result {
        out.println("MODULES")?;

        let mut shifted = out.shifted(self.options.offset);
        for (i, module) in modules.iter().enumerate() {
            if i > 0 {
                shifted.blank_line()?;
            }
            match &module.description {
                Some(description) => {
                    shifted.fold_println(&format!("{}: {description}", module.name))?
                }
                None => shifted.println(&module.name)?,
            }
        }
        Ok(())
    }

    fn print_configs<W: Write + ?Sized>(
        &self,
        out: &mut ConsoleAppender<'_, W>,
        roots: &[&ConfigMetadata],
    ) -> fmt::Result {
        out.println("CONFIGURATION")?;

        let renderer = ConfigSectionRenderer::new(self.options.offset);
        let mut shifted = out.shifted(self.options.offset);
        for (i, root) in roots.iter().enumerate() {
            if i > 0 {
                shifted.blank_line()?;
            }
            trace!("rendering config root {:?}", root.name());
            renderer.render(&mut shifted, root)?;
        }
        Ok(())
    }
}

/// Renders the help for `modules`, folding descriptions at `line_width`.
pub fn render(modules: &ModulesMetadata, line_width: usize) -> String {
    ConfigHelpGenerator::new(modules, line_width).generate()
}
