//! Terminal clear targets.

use serde::{Deserialize, Serialize};

/// A clear operation a console can be asked to perform.
///
/// Sinks with no notion of a screen treat every variant as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsoleClear {
    /// Erase the most recently written line.
    Line,
    /// Erase the given number of most recently written lines.
    Lines(u16),
    /// Erase the whole screen and move the cursor to the top-left corner.
    Screen,
}
