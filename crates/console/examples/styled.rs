//! Styled output demo. Run with `cargo run --example styled`.
//!
//! Set `NO_COLOR=1` or pipe the output to see the plain-text degradation.

use termkit_console::{Console, ConsoleClear, ConsoleColor, ConsoleStyle, Terminal};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut console = Terminal::new();

    console.output_line("termkit console demo");
    console.success("operation completed");
    console.info("17 items processed");
    console.warning("cache is cold");
    console.error("upstream unreachable");
    console.output(
        "custom: ",
        ConsoleStyle::color(ConsoleColor::Magenta).bold(),
        false,
    );
    console.output_line("magenta and bold");

    let name = console.ask("Your name?");
    if console.confirm(&format!("Greet {name}?")) {
        console.output_line("working...");
        console.wait(0.5);
        console.clear(ConsoleClear::Line);
        console.success(&format!("Hello, {name}!"));
    } else {
        console.output_line("Maybe next time.");
    }
}
