//! Offset-aware line writer.
//!
//! [`ConsoleAppender`] prints lines at a fixed left offset and folds long
//! free text to the configured line width. Shifted appenders write to the
//! same output with a larger offset, which is how nesting is expressed.

use std::fmt::{self, Write};

/// Line writer with a left offset and a maximum line width.
pub struct ConsoleAppender<'a, W: Write + ?Sized> {
    out: &'a mut W,
    line_width: usize,
    offset: usize,
}

impl<'a, W: Write + ?Sized> ConsoleAppender<'a, W> {
    /// Creates an appender with no offset.
    pub fn new(out: &'a mut W, line_width: usize) -> Self {
        Self {
            out,
            line_width,
            offset: 0,
        }
    }

    /// Current left offset in columns.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns an appender writing to the same output, `by` columns further right.
    pub fn shifted(&mut self, by: usize) -> ConsoleAppender<'_, W> {
        ConsoleAppender {
            out: &mut *self.out,
            line_width: self.line_width,
            offset: self.offset + by,
        }
    }

    /// Prints an empty line, without offset padding.
    pub fn blank_line(&mut self) -> fmt::Result {
        self.out.write_char('\n')
    }

    /// Prints `line` at the current offset as-is.
    pub fn println(&mut self, line: &str) -> fmt::Result {
        writeln!(self.out, "{:width$}{line}", "", width = self.offset)
    }

    /// Prints `text` at the current offset, folded to the line width.
    pub fn fold_println(&mut self, text: &str) -> fmt::Result {
        for line in fold(text, self.available()) {
            if line.is_empty() {
                self.blank_line()?;
            } else {
                self.println(&line)?;
            }
        }
        Ok(())
    }

    /// Prints `text` as `# ` comment lines, folded to the line width.
    pub fn println_comment(&mut self, text: &str) -> fmt::Result {
        for line in fold(text, self.available().saturating_sub(2)) {
            if line.is_empty() {
                self.println("#")?;
            } else {
                self.println(&format!("# {line}"))?;
            }
        }
        Ok(())
    }

    fn available(&self) -> usize {
        self.line_width.saturating_sub(self.offset)
    }
}

/// Splits `text` into lines of at most `max_width` characters.
///
/// Embedded line breaks are kept and each paragraph is folded on its own.
/// Breaks only on whitespace; a single word wider than `max_width` gets a
/// line of its own. Lines that already fit are returned untouched.
pub fn fold(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        fold_paragraph(paragraph, max_width, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn fold_paragraph(text: &str, max_width: usize, lines: &mut Vec<String>) {
    if text.chars().count() <= max_width {
        lines.push(text.to_string());
        return;
    }

    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
}
