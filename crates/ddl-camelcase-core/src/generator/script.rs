//! Line buffer for the generated SQL script.

const BANNER: &str = "-- ============================================";

/// Accumulates script lines and numbers section banners as they are opened.
#[derive(Debug, Default)]
pub(crate) struct ScriptWriter {
    lines: Vec<String>,
    section: usize,
}

impl ScriptWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Open the next numbered section, separated from the previous one by a blank line.
    pub(crate) fn section(&mut self, title: &str) {
        self.section += 1;
        self.lines.push(String::new());
        self.lines.push(BANNER.to_string());
        self.lines.push(format!("-- {}. {}", self.section, title));
        self.lines.push(BANNER.to_string());
    }

    pub(crate) fn comment(&mut self, text: impl AsRef<str>) {
        self.lines.push(format!("-- {}", text.as_ref()));
    }

    pub(crate) fn statement(&mut self, sql: impl Into<String>) {
        self.lines.push(sql.into());
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Join all lines with `\n`. No trailing newline.
    pub(crate) fn finish(self) -> String {
        self.lines.join("\n")
    }
}
