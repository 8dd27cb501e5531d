//! Terminal styles for human-mode output.

use console::Style;

/// Centralizes colors and styles for consistent rendering.
#[derive(Debug, Clone)]
pub struct OutputTheme {
    pub header: Style,
    pub label: Style,
    pub value: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub muted: Style,
    pub level: Style,
}

impl Default for OutputTheme {
    fn default() -> Self {
        Self {
            header: Style::new().bold().cyan(),
            label: Style::new().dim(),
            value: Style::new().bold(),
            success: Style::new().bold().green(),
            warning: Style::new().bold().yellow(),
            error: Style::new().bold().red(),
            muted: Style::new().dim().italic(),
            level: Style::new().yellow(),
        }
    }
}

impl OutputTheme {
    /// Theme with every style reset, for `--no-color`.
    pub fn plain() -> Self {
        let plain = Style::new();
        Self {
            header: plain.clone(),
            label: plain.clone(),
            value: plain.clone(),
            success: plain.clone(),
            warning: plain.clone(),
            error: plain.clone(),
            muted: plain.clone(),
            level: plain,
        }
    }
}
