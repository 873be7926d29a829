//! Parameter resolution demo. Run with:
//!
//! ```text
//! cargo run --example greet -- name=world count=3 excited=yes
//! ```

use std::collections::HashMap;
use std::process::ExitCode;

use termkit_console::{Console, Terminal};
use termkit_params::{Parameter, ParameterDescriptor, ResolvedParameters};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut console = Terminal::new();

    let name = Parameter::<String>::argument_named("name").with_help_text("Who to greet");
    let count = Parameter::<i64>::option_named("count").with_help_text("How many greetings");
    let excited = Parameter::<bool>::option_named("excited");

    // A minimal name=value tokenizer; real dispatchers bring their own.
    let raw: HashMap<String, String> = std::env::args()
        .skip(1)
        .filter_map(|token| {
            token
                .split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
        })
        .collect();

    let declarations: [&dyn ParameterDescriptor; 3] = [&name, &count, &excited];
    let resolved = match ResolvedParameters::resolve(&declarations, &raw) {
        Ok(resolved) => resolved,
        Err(err) => {
            console.error(&err.to_string());
            console.output_line("Usage:");
            for declaration in declarations {
                let help = declaration.help().unwrap_or_default();
                console.output_line(&format!(
                    "  {}=<{}>  {}",
                    declaration.name(),
                    declaration.value_type().name(),
                    help
                ));
            }
            return ExitCode::FAILURE;
        }
    };

    let who = match resolved.require(&name) {
        Ok(who) => who,
        Err(err) => {
            console.error(&err.to_string());
            return ExitCode::FAILURE;
        }
    };
    let times = resolved.get(&count).ok().flatten().unwrap_or(1);
    let bang = resolved.get(&excited).ok().flatten().unwrap_or(false);

    for _ in 0..times.max(0) {
        if bang {
            console.success(&format!("Hello, {who}!"));
        } else {
            console.output_line(&format!("Hello, {who}."));
        }
    }
    ExitCode::SUCCESS
}
