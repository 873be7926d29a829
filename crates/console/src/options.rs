//! Terminal behavior configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// When to emit color and emphasis escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Style only when stdout is a terminal that appears to support it.
    #[default]
    Auto,
    /// Always style, even when output is piped.
    Always,
    /// Never style.
    Never,
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorChoice::Auto => write!(f, "auto"),
            ColorChoice::Always => write!(f, "always"),
            ColorChoice::Never => write!(f, "never"),
        }
    }
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!("Unknown color choice: {s}")),
        }
    }
}

/// Configuration for a [`Terminal`](crate::Terminal) console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TerminalOptions {
    /// Color and emphasis emission policy.
    pub color: ColorChoice,
}

impl TerminalOptions {
    /// Options with the given color choice.
    pub fn with_color(color: ColorChoice) -> Self {
        Self { color }
    }

    /// Resolves the effective styling decision against the process
    /// environment and the given stdout state.
    pub(crate) fn styling_enabled(&self, stdout_is_terminal: bool) -> bool {
        styling_decision(
            self.color,
            stdout_is_terminal,
            env::var_os("NO_COLOR").is_some(),
            term_is_dumb(),
        )
    }
}

/// Whether `TERM` names a terminal with no escape sequence support.
pub(crate) fn term_is_dumb() -> bool {
    env::var("TERM").map(|term| term == "dumb").unwrap_or(false)
}

/// Pure styling decision. `Always` and `Never` are unconditional; `Auto`
/// requires a terminal, honors the `NO_COLOR` convention and refuses dumb
/// terminals.
pub(crate) fn styling_decision(
    choice: ColorChoice,
    tty: bool,
    no_color: bool,
    dumb: bool,
) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => tty && !no_color && !dumb,
    }
}
