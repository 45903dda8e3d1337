//! Layout options of the generated help.

use serde::{Deserialize, Serialize};

/// Line width used when the terminal size cannot be determined.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Left offset of section content, also the indentation step of nested nodes.
pub const DEFAULT_OFFSET: usize = 6;

/// Layout options for [`ConfigHelpGenerator`](crate::ConfigHelpGenerator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpOptions {
    /// Maximum width of folded description lines.
    pub line_width: usize,
    /// Indentation step in columns.
    pub offset: usize,
}

impl Default for HelpOptions {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl HelpOptions {
    /// Options with the given line width and the default offset.
    pub fn with_line_width(line_width: usize) -> Self {
        Self {
            line_width,
            ..Default::default()
        }
    }

    /// Options sized for the attached terminal.
    ///
    /// Falls back to the `COLUMNS` environment variable, then to
    /// [`DEFAULT_LINE_WIDTH`].
    pub fn from_terminal() -> Self {
        let line_width = match crossterm::terminal::size() {
            Ok((columns, _)) if columns > 0 => columns as usize,
            _ => columns_from_env(std::env::var("COLUMNS").ok().as_deref()),
        };
        debug!("help line width: {line_width}");
        Self::with_line_width(line_width)
    }
}

fn columns_from_env(columns: Option<&str>) -> usize {
    columns
        .and_then(|c| c.trim().parse::<usize>().ok())
        .filter(|c| *c > 0)
        .unwrap_or(DEFAULT_LINE_WIDTH)
}
