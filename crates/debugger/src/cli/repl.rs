//! Interactive REPL loop for the debugger.

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use crate::cli::commands;
use crate::cli::commands::{Action, DebuggerState};
use crate::config::DebuggerConfig;
use crate::engine::DebugEngine;
use crate::error::DebuggerError;
use crate::types::SessionSummary;

/// Start the interactive debugger REPL. Returns the session summary on quit.
pub fn start(
    mut engine: DebugEngine,
    config: &DebuggerConfig,
) -> Result<SessionSummary, DebuggerError> {
    let rl_config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<(), DefaultHistory> =
        Editor::with_config(rl_config).map_err(|e| DebuggerError::Cli(e.to_string()))?;
    let mut state = DebuggerState::new(config.viewport_height, config.stack_top_capture);

    println!("{}", commands::current_step(&engine, &state));
    println!("Type 'help' for available commands.\n");

    loop {
        let prompt = format!("(dbg {}/{}) ", engine.position(), engine.len());
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if let Some(cmd) = commands::parse(trimmed) {
                    match commands::execute(&cmd, &mut engine, &mut state) {
                        Action::Print(s) => println!("{s}"),
                        Action::Quit => break,
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Readline error: {e}");
                break;
            }
        }
    }

    Ok(engine.quit())
}
