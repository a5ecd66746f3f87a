//! Rendering targets for command reports.

/// Where a report goes.
///
/// Reports only speak in headings, items and text blocks; the terminal
/// layout lives in the implementation.
pub trait Output {
    /// Underlined heading.
    fn title(&mut self, text: &str);

    /// Section heading, rendered with a trailing colon.
    fn section(&mut self, name: &str);

    /// `key: value` line.
    fn key_value(&mut self, key: &str, value: &str);

    /// Bulleted entry.
    fn list_item(&mut self, text: &str);

    /// Entry for a file that was written.
    fn added_item(&mut self, text: &str);

    /// Warning, sent to stderr on a terminal.
    fn warning(&mut self, msg: &str);

    /// Labelled rule, used between previewed files.
    fn divider(&mut self, label: &str);

    /// Text emitted as is.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// Data produced by a command, rendered once it is complete.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain text on stdout, warnings on stderr.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{}", text);
        println!("{}", "=".repeat(text.chars().count()));
    }

    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered lines, for tests.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl BufferOutput {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for BufferOutput {
    fn title(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn section(&mut self, name: &str) {
        self.lines.push(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("  - {}", text));
    }

    fn added_item(&mut self, text: &str) {
        self.lines.push(format!("  + {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
