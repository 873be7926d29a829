//! The console capability interface.

use std::thread;
use std::time::Duration;

use crate::clear::ConsoleClear;
use crate::style::ConsoleStyle;

/// Capability interface for styled command-line interaction.
///
/// Implementations write somewhere (a real terminal, an in-memory recorder)
/// and read line input back. The basic operations never surface failures to
/// the caller: a sink fault is absorbed by the implementation and at most
/// reported on the diagnostic log, so presentation code can call the console
/// unconditionally.
///
/// A console expects exclusive access while operating; the `&mut self`
/// receivers make that explicit. Callers that share one console across
/// threads wrap it in a lock they own.
pub trait Console {
    /// Writes `text` rendered with `style`, appending a line terminator when
    /// `newline` is true. Never fails; sink faults are absorbed.
    fn output(&mut self, text: &str, style: ConsoleStyle, newline: bool);

    /// Blocks until a full line of input is available and returns it without
    /// its trailing line terminator. Returns an empty string at end of input
    /// instead of failing.
    fn input(&mut self) -> String;

    /// Performs the requested clear. A no-op on sinks with no notion of a
    /// screen.
    fn clear(&mut self, target: ConsoleClear);

    /// Blocks the calling thread for approximately `seconds`.
    ///
    /// This is a plain blocking sleep, not a scheduler yield: the thread is
    /// occupied for the whole duration. Values no [`Duration`] can represent
    /// (negative, non-finite, or past its upper bound) are treated as zero.
    fn wait(&mut self, seconds: f64) {
        if let Ok(duration) = Duration::try_from_secs_f64(seconds) {
            thread::sleep(duration);
        }
    }

    /// Writes a plain line. Equivalent to
    /// `output(text, ConsoleStyle::PLAIN, true)`.
    fn output_line(&mut self, text: &str) {
        self.output(text, ConsoleStyle::PLAIN, true);
    }

    /// Writes a line in the success style.
    fn success(&mut self, text: &str) {
        self.output(text, ConsoleStyle::SUCCESS, true);
    }

    /// Writes a line in the informational style.
    fn info(&mut self, text: &str) {
        self.output(text, ConsoleStyle::INFO, true);
    }

    /// Writes a line in the warning style.
    fn warning(&mut self, text: &str) {
        self.output(text, ConsoleStyle::WARNING, true);
    }

    /// Writes a line in the error style.
    fn error(&mut self, text: &str) {
        self.output(text, ConsoleStyle::ERROR, true);
    }

    /// Prints `prompt` without a newline and reads one line of input.
    fn ask(&mut self, prompt: &str) -> String {
        self.output(&format!("{prompt} "), ConsoleStyle::PLAIN, false);
        self.input()
    }

    /// Asks a yes/no question until an answer is recognized.
    ///
    /// Accepts the usual spellings case-insensitively (`y`, `yes`, `true`,
    /// `1` and `n`, `no`, `false`, `0`). An empty line counts as a decline,
    /// which is also what an exhausted input source produces, so a scripted
    /// console cannot loop forever here.
    fn confirm(&mut self, prompt: &str) -> bool {
        loop {
            self.output(&format!("{prompt} [y/n] "), ConsoleStyle::PLAIN, false);
            let line = self.input();
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" | "true" | "1" => return true,
                "" | "n" | "no" | "false" | "0" => return false,
                _ => self.warning("Please answer yes or no."),
            }
        }
    }
}
