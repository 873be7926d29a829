//! In-memory console for tests and non-interactive embedding.

use std::collections::VecDeque;

use crate::clear::ConsoleClear;
use crate::console::Console;
use crate::style::ConsoleStyle;

/// One recorded `output` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEvent {
    /// The text as passed, without any added line terminator.
    pub text: String,
    /// The style the text was rendered with.
    pub style: ConsoleStyle,
    /// Whether a trailing newline was requested.
    pub newline: bool,
}

/// A scriptable [`Console`] that records every call instead of touching a
/// terminal.
///
/// Canned input lines are served in order; once they run out, `input`
/// returns an empty string, mirroring a real console at end of input.
/// `wait` records the requested duration and returns immediately, so tests
/// that exercise waiting code stay fast.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    inputs: VecDeque<String>,
    outputs: Vec<OutputEvent>,
    clears: Vec<ConsoleClear>,
    waits: Vec<f64>,
}

impl MemoryConsole {
    /// Creates an empty console with no scripted input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console preloaded with input lines.
    pub fn with_inputs<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut console = Self::new();
        for line in lines {
            console.queue_input(line);
        }
        console
    }

    /// Appends one line to the scripted input queue.
    pub fn queue_input(&mut self, line: impl Into<String>) {
        self.inputs.push_back(line.into());
    }

    /// All `output` calls in order.
    pub fn outputs(&self) -> &[OutputEvent] {
        &self.outputs
    }

    /// All `clear` calls in order.
    pub fn clears(&self) -> &[ConsoleClear] {
        &self.clears
    }

    /// All `wait` durations in order.
    pub fn waits(&self) -> &[f64] {
        &self.waits
    }

    /// The recorded output as one plain string, requested newlines included,
    /// styles dropped.
    pub fn rendered(&self) -> String {
        let mut text = String::new();
        for event in &self.outputs {
            text.push_str(&event.text);
            if event.newline {
                text.push('\n');
            }
        }
        text
    }

    /// Number of scripted input lines not yet consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Drops everything recorded so far; scripted input is kept.
    pub fn reset_recording(&mut self) {
        self.outputs.clear();
        self.clears.clear();
        self.waits.clear();
    }
}

impl Console for MemoryConsole {
    fn output(&mut self, text: &str, style: ConsoleStyle, newline: bool) {
        self.outputs.push(OutputEvent {
            text: text.to_string(),
            style,
            newline,
        });
    }

    fn input(&mut self) -> String {
        self.inputs.pop_front().unwrap_or_default()
    }

    fn clear(&mut self, target: ConsoleClear) {
        self.clears.push(target);
    }

    fn wait(&mut self, seconds: f64) {
        self.waits.push(seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_inputs_are_served_in_order() {
        let mut console = MemoryConsole::with_inputs(["first", "second"]);
        assert_eq!(console.remaining_inputs(), 2);
        assert_eq!(console.input(), "first");
        assert_eq!(console.input(), "second");
        assert_eq!(console.remaining_inputs(), 0);
    }

    #[test]
    fn test_exhausted_input_yields_empty_string() {
        let mut console = MemoryConsole::new();
        assert_eq!(console.input(), "");
        assert_eq!(console.input(), "");
    }

    #[test]
    fn test_outputs_record_text_style_and_newline() {
        let mut console = MemoryConsole::new();
        console.output("partial", ConsoleStyle::INFO, false);
        console.output_line("done");

        assert_eq!(
            console.outputs(),
            [
                OutputEvent {
                    text: "partial".to_string(),
                    style: ConsoleStyle::INFO,
                    newline: false,
                },
                OutputEvent {
                    text: "done".to_string(),
                    style: ConsoleStyle::PLAIN,
                    newline: true,
                },
            ]
        );
    }

    #[test]
    fn test_rendered_joins_text_with_requested_newlines() {
        let mut console = MemoryConsole::new();
        console.output("a", ConsoleStyle::PLAIN, false);
        console.output("b", ConsoleStyle::ERROR, true);
        console.output_line("c");
        assert_eq!(console.rendered(), "ab\nc\n");
    }

    #[test]
    fn test_wait_records_instead_of_sleeping() {
        let mut console = MemoryConsole::new();
        console.wait(1200.0);
        console.wait(-3.0);
        assert_eq!(console.waits(), [1200.0, -3.0]);
    }

    #[test]
    fn test_clears_are_recorded_in_order() {
        let mut console = MemoryConsole::new();
        console.clear(ConsoleClear::Line);
        console.clear(ConsoleClear::Lines(2));
        console.clear(ConsoleClear::Screen);
        assert_eq!(
            console.clears(),
            [
                ConsoleClear::Line,
                ConsoleClear::Lines(2),
                ConsoleClear::Screen,
            ]
        );
    }

    #[test]
    fn test_reset_recording_keeps_scripted_input() {
        let mut console = MemoryConsole::with_inputs(["kept"]);
        console.output_line("noise");
        console.clear(ConsoleClear::Line);
        console.reset_recording();

        assert!(console.outputs().is_empty());
        assert!(console.clears().is_empty());
        assert_eq!(console.input(), "kept");
    }
}
