//! Render metadata attached to console output.

use serde::{Deserialize, Serialize};

/// The base terminal palette available for styled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsoleColor {
    /// ANSI black.
    Black,
    /// ANSI red.
    Red,
    /// ANSI green.
    Green,
    /// ANSI yellow.
    Yellow,
    /// ANSI blue.
    Blue,
    /// ANSI magenta.
    Magenta,
    /// ANSI cyan.
    Cyan,
    /// ANSI white.
    White,
}

/// How a piece of console output should be rendered.
///
/// A style is a pure value compared by structure. Sinks that cannot render
/// styles accept and discard it; the text itself is never altered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsoleStyle {
    /// Foreground color, or `None` for the terminal default.
    pub color: Option<ConsoleColor>,
    /// Whether the text is rendered bold.
    pub bold: bool,
}

impl ConsoleStyle {
    /// No color, no emphasis. The default for all output helpers.
    pub const PLAIN: ConsoleStyle = ConsoleStyle {
        color: None,
        bold: false,
    };

    /// Bold green, for success reports.
    pub const SUCCESS: ConsoleStyle = ConsoleStyle {
        color: Some(ConsoleColor::Green),
        bold: true,
    };

    /// Cyan, for informational output.
    pub const INFO: ConsoleStyle = ConsoleStyle {
        color: Some(ConsoleColor::Cyan),
        bold: false,
    };

    /// Yellow, for warnings.
    pub const WARNING: ConsoleStyle = ConsoleStyle {
        color: Some(ConsoleColor::Yellow),
        bold: false,
    };

    /// Bold red, for errors.
    pub const ERROR: ConsoleStyle = ConsoleStyle {
        color: Some(ConsoleColor::Red),
        bold: true,
    };

    /// Creates a style with the given foreground color and no emphasis.
    pub fn color(color: ConsoleColor) -> Self {
        Self {
            color: Some(color),
            bold: false,
        }
    }

    /// Returns the same style with bold enabled.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Whether this style carries no rendering metadata at all.
    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }
}

impl Default for ConsoleStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plain() {
        assert_eq!(ConsoleStyle::default(), ConsoleStyle::PLAIN);
        assert!(ConsoleStyle::default().is_plain());
    }

    #[test]
    fn test_severity_presets() {
        assert_eq!(ConsoleStyle::SUCCESS.color, Some(ConsoleColor::Green));
        assert!(ConsoleStyle::SUCCESS.bold);
        assert_eq!(ConsoleStyle::INFO.color, Some(ConsoleColor::Cyan));
        assert!(!ConsoleStyle::INFO.bold);
        assert_eq!(ConsoleStyle::WARNING.color, Some(ConsoleColor::Yellow));
        assert!(!ConsoleStyle::WARNING.bold);
        assert_eq!(ConsoleStyle::ERROR.color, Some(ConsoleColor::Red));
        assert!(ConsoleStyle::ERROR.bold);
    }

    #[test]
    fn test_builder_composition() {
        let style = ConsoleStyle::color(ConsoleColor::Blue).bold();
        assert_eq!(style.color, Some(ConsoleColor::Blue));
        assert!(style.bold);
        assert!(!style.is_plain());
    }

    #[test]
    fn test_styles_compare_by_structure() {
        assert_eq!(
            ConsoleStyle::color(ConsoleColor::Yellow),
            ConsoleStyle::WARNING
        );
        assert_ne!(ConsoleStyle::WARNING, ConsoleStyle::ERROR);
    }
}
