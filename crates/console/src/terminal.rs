//! The real-terminal console backed by stdin and stdout.

use std::io::{self, IsTerminal, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tracing::debug;

use crate::clear::ConsoleClear;
use crate::console::Console;
use crate::options::{term_is_dumb, TerminalOptions};
use crate::style::{ConsoleColor, ConsoleStyle};

/// A [`Console`] for the process terminal.
///
/// Styles and clears are rendered as ANSI escape sequences when the
/// environment supports them; otherwise output degrades to plain text and
/// clears become no-ops. Write and flush failures are absorbed and reported
/// on the debug log, never to the caller.
pub struct Terminal {
    styled: bool,
    interactive: bool,
}

impl Terminal {
    /// Creates a terminal with auto-detected capabilities.
    pub fn new() -> Self {
        Self::with_options(TerminalOptions::default())
    }

    /// Creates a terminal honoring the given options.
    pub fn with_options(options: TerminalOptions) -> Self {
        let tty = io::stdout().is_terminal();
        let styled = options.styling_enabled(tty);
        let interactive = tty && !term_is_dumb();
        debug!(styled, interactive, "terminal console ready");
        Self {
            styled,
            interactive,
        }
    }

    /// Whether styles are rendered rather than discarded.
    pub fn is_styled(&self) -> bool {
        self.styled
    }

    /// Whether clear operations reach a real screen.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Terminal {
    fn output(&mut self, text: &str, style: ConsoleStyle, newline: bool) {
        emit_styled(&mut io::stdout(), text, style, newline, self.styled);
    }

    fn input(&mut self) -> String {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => String::new(),
            Ok(_) => {
                trim_newline(&mut line);
                line
            }
            Err(err) => {
                debug!("console read failed: {err}");
                String::new()
            }
        }
    }

    fn clear(&mut self, target: ConsoleClear) {
        if !self.interactive {
            return;
        }
        emit_clear(&mut io::stdout(), target);
    }
}

fn emit_styled(
    sink: &mut impl Write,
    text: &str,
    style: ConsoleStyle,
    newline: bool,
    styled: bool,
) {
    if let Err(err) = write_styled(sink, text, style, newline, styled) {
        debug!("console write failed: {err}");
        return;
    }
    if let Err(err) = sink.flush() {
        debug!("console flush failed: {err}");
    }
}

fn emit_clear(sink: &mut impl Write, target: ConsoleClear) {
    if let Err(err) = write_clear(sink, target) {
        debug!("console clear failed: {err}");
        return;
    }
    if let Err(err) = sink.flush() {
        debug!("console flush failed: {err}");
    }
}

fn to_crossterm(color: ConsoleColor) -> Color {
    match color {
        ConsoleColor::Black => Color::Black,
        ConsoleColor::Red => Color::Red,
        ConsoleColor::Green => Color::Green,
        ConsoleColor::Yellow => Color::Yellow,
        ConsoleColor::Blue => Color::Blue,
        ConsoleColor::Magenta => Color::Magenta,
        ConsoleColor::Cyan => Color::Cyan,
        ConsoleColor::White => Color::White,
    }
}

fn write_styled(
    sink: &mut impl Write,
    text: &str,
    style: ConsoleStyle,
    newline: bool,
    styled: bool,
) -> io::Result<()> {
    if styled && !style.is_plain() {
        if let Some(color) = style.color {
            queue!(sink, SetForegroundColor(to_crossterm(color)))?;
        }
        if style.bold {
            queue!(sink, SetAttribute(Attribute::Bold))?;
        }
        sink.write_all(text.as_bytes())?;
        queue!(sink, ResetColor)?;
    } else {
        sink.write_all(text.as_bytes())?;
    }
    if newline {
        sink.write_all(b"\n")?;
    }
    Ok(())
}

fn write_clear(sink: &mut impl Write, target: ConsoleClear) -> io::Result<()> {
    match target {
        ConsoleClear::Line => erase_last_lines(sink, 1),
        ConsoleClear::Lines(count) => erase_last_lines(sink, count),
        ConsoleClear::Screen => queue!(sink, Clear(ClearType::All), cursor::MoveTo(0, 0)),
    }
}

fn erase_last_lines(sink: &mut impl Write, count: u16) -> io::Result<()> {
    for _ in 0..count {
        queue!(sink, cursor::MoveUp(1), Clear(ClearType::CurrentLine))?;
    }
    if count > 0 {
        queue!(sink, cursor::MoveToColumn(0))?;
    }
    Ok(())
}

fn trim_newline(value: &mut String) {
    while value.ends_with(['\n', '\r']) {
        value.pop();
    }
}
