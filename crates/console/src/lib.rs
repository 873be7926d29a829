//! # termkit-console
//!
//! Styled console abstraction for command-line tools.
//!
//! The crate centers on the [`Console`] capability trait: styled text
//! output with an optional trailing newline, blocking line input, screen
//! clear operations and a blocking wait. Convenience helpers (severity
//! styles, prompting, yes/no confirmation) are derived from those basics
//! and work on every implementation. Two implementations ship here:
//!
//! - [`Terminal`] renders through the process terminal, detecting whether
//!   ANSI styling is appropriate and degrading to plain text when it is
//!   not.
//! - [`MemoryConsole`] records every call and serves scripted input, for
//!   testing interactive code without a terminal.
//!
//! Console output never fails toward the caller. Sink faults are absorbed
//! and reported on the `tracing` debug channel only.

pub mod clear;
pub mod console;
pub mod memory;
pub mod options;
pub mod style;
pub mod terminal;

pub use clear::ConsoleClear;
pub use console::Console;
pub use memory::{MemoryConsole, OutputEvent};
pub use options::{ColorChoice, TerminalOptions};
pub use style::{ConsoleColor, ConsoleStyle};
pub use terminal::Terminal;
