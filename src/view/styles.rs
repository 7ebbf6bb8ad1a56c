//! Table styling configuration.
//!
//! Status cells are colored (passing green, failed red); chrome uses a
//! muted palette. With colors off every style falls back to modifiers only.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether color output is enabled.
///
/// Resolved from the `colors` config key, `NO_COLOR`, and `--no-color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== TableStyles =====

/// Styles used by the roster view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyles {
    /// Column titles.
    pub header: Style,
    /// Highlighted (selected) row.
    pub selected: Style,
    /// "passing" status cell.
    pub passing: Style,
    /// "failed" status cell.
    pub failed: Style,
    /// Secondary text: hints, counts, empty-state message.
    pub muted: Style,
    /// Load error text.
    pub error: Style,
    /// Border of the focused widget.
    pub focus_border: Style,
}

impl TableStyles {
    /// Create styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                header: bold.fg(Color::Cyan),
                selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
                passing: Style::default().fg(Color::Green),
                failed: Style::default().fg(Color::Red),
                muted: Style::default().fg(Color::Gray),
                error: bold.fg(Color::Red),
                focus_border: Style::default().fg(Color::Yellow),
            }
        } else {
            Self {
                header: bold,
                selected: Style::default().add_modifier(Modifier::REVERSED),
                passing: Style::default(),
                failed: Style::default(),
                muted: Style::default(),
                error: bold,
                focus_border: bold,
            }
        }
    }

    /// Style for a status label.
    pub fn status(&self, label: &str) -> Style {
        if label == "passing" {
            self.passing
        } else {
            self.failed
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}
