//! # termkit
//!
//! Command-line interaction toolkit.
//!
//! This facade re-exports the two member crates:
//!
//! - [`params`] — typed parameter declaration, resolution and retrieval.
//! - [`console`] — the styled console abstraction with terminal and
//!   in-memory implementations.
//!
//! Most users pull in [`prelude`] and work from there:
//!
//! ```
//! use termkit::prelude::*;
//!
//! let mut console = MemoryConsole::with_inputs(["y"]);
//! if console.confirm("Install?") {
//!     console.success("installed");
//! }
//! assert_eq!(console.rendered(), "Install? [y/n] installed\n");
//! ```

#![warn(missing_docs)]

pub use termkit_console as console;
pub use termkit_params as params;

/// Common imports for command authors.
pub mod prelude {
    pub use termkit_console::{
        ColorChoice, Console, ConsoleClear, ConsoleColor, ConsoleStyle, MemoryConsole, Terminal,
        TerminalOptions,
    };
    pub use termkit_params::{
        Parameter, ParameterDescriptor, ParameterError, ParameterKind, ParameterResult,
        ParameterValue, ResolvedParameters,
    };
}

/// Toolkit version, from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
