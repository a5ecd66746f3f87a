//! Code builder utility for generating tab-indented build files.

use std::iter;

/// Fluent API for building build-file text with tab indentation.
///
/// Consuming methods (returning `Self`) chain declarative blocks; the
/// `push_` methods (returning `&mut Self`) suit loops that branch per item.
///
/// ```
/// use mkproj_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::tab()
///     .line("add_executable(demo")
///     .indent()
///     .line("a.cpp")
///     .dedent()
///     .line(")")
///     .build();
///
/// assert_eq!(code, "add_executable(demo\n\ta.cpp\n)\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder at indentation level zero.
    pub fn tab() -> Self {
        Self::default()
    }

    /// Start at the given indentation level.
    pub fn at_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    /// Add a line with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.buffer.extend(iter::repeat_n('\t', self.indent_level));
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a line with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add an empty line, never indented.
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add `header`, the indented content written by `f`, then `close`.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block() {
        let code = CodeBuilder::tab()
            .block_with_close("<Linker>", "</Linker>", |b| {
                b.line("<Add library=\"libz\" />")
            })
            .build();

        assert_eq!(code, "<Linker>\n\t<Add library=\"libz\" />\n</Linker>\n");
    }

    #[test]
    fn test_blank_line_is_not_indented() {
        let code = CodeBuilder::tab()
            .at_level(1)
            .line("cmake_minimum_required(VERSION 3.2)")
            .blank()
            .line("project(demo)")
            .build();

        assert_eq!(code, "\tcmake_minimum_required(VERSION 3.2)\n\n\tproject(demo)\n");
    }

    #[test]
    fn test_when_and_each() {
        let code = CodeBuilder::tab()
            .line("add_definitions(")
            .indent()
            .each(["-DA", "-DB"], |b, flag| b.line(flag))
            .when(false, |b| b.line("-DC"))
            .dedent()
            .line(")")
            .build();

        assert_eq!(code, "add_definitions(\n\t-DA\n\t-DB\n)\n");
    }

    #[test]
    fn test_mutable_api_and_level() {
        let mut builder = CodeBuilder::tab().at_level(2);
        builder
            .push_line("<Unit>")
            .push_indent()
            .push_line("<Option />")
            .push_dedent()
            .push_dedent()
            .push_dedent()
            .push_dedent()
            .push_line("</Workspace>");
        assert_eq!(builder.build(), "\t\t<Unit>\n\t\t\t<Option />\n</Workspace>\n");
    }
}
