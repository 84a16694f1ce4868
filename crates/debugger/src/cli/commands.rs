//! Command parsing and execution for the debugger REPL.

use std::collections::BTreeSet;

use crate::cli::formatter;
use crate::engine::DebugEngine;
use crate::view::{bytecode_strip, disassemble};

/// A parsed debugger command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Step,
    StepBack,
    Continue,
    ReverseContinue,
    Break { pc: usize },
    Delete { pc: usize },
    Goto { step: usize },
    Info,
    Stack,
    Memory,
    Storage,
    List { count: usize },
    Code,
    Breakpoints,
    Help,
    Quit,
}

/// Result of executing a command.
pub enum Action {
    Print(String),
    Quit,
}

/// Mutable state for the debugger session.
pub struct DebuggerState {
    pub breakpoints: BTreeSet<usize>,
    /// Disassembly rows shown by `code`.
    pub viewport_height: usize,
    /// Stack items shown in step summaries.
    pub stack_top_capture: usize,
}

impl DebuggerState {
    pub fn new(viewport_height: usize, stack_top_capture: usize) -> Self {
        Self {
            breakpoints: BTreeSet::new(),
            viewport_height,
            stack_top_capture,
        }
    }
}

/// Parse user input into a command. Returns `None` for empty or unrecognized input.
pub fn parse(input: &str) -> Option<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut parts = trimmed.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let arg = parts.next().map(str::trim);

    match cmd {
        "s" | "step" => Some(Command::Step),
        "sb" | "step-back" => Some(Command::StepBack),
        "c" | "continue" => Some(Command::Continue),
        "rc" | "reverse-continue" => Some(Command::ReverseContinue),
        "b" | "break" => Some(Command::Break {
            pc: parse_number(arg?)?,
        }),
        "d" | "delete" => Some(Command::Delete {
            pc: parse_number(arg?)?,
        }),
        "g" | "goto" => Some(Command::Goto {
            step: parse_number(arg?)?,
        }),
        "i" | "info" => Some(Command::Info),
        "st" | "stack" => Some(Command::Stack),
        "m" | "memory" => Some(Command::Memory),
        "ss" | "storage" => Some(Command::Storage),
        "l" | "list" => {
            let count = arg.and_then(parse_number).unwrap_or(5);
            Some(Command::List { count })
        }
        "code" => Some(Command::Code),
        "bp" | "breakpoints" => Some(Command::Breakpoints),
        "h" | "help" => Some(Command::Help),
        "q" | "quit" => Some(Command::Quit),
        _ => {
            eprintln!("Unknown command: '{cmd}'. Type 'help' for available commands.");
            None
        }
    }
}

/// Execute a command against the engine and debugger state.
pub fn execute(cmd: &Command, engine: &mut DebugEngine, state: &mut DebuggerState) -> Action {
    match cmd {
        Command::Step => {
            if engine.step_forward().is_none() {
                return Action::Print(format!(
                    "Cannot step forward: {}.",
                    halted_description(engine)
                ));
            }
            Action::Print(current_step(engine, state))
        }
        Command::StepBack => {
            if engine.step_backward().is_none() {
                return Action::Print("Already at first step.".to_string());
            }
            Action::Print(current_step(engine, state))
        }
        Command::Continue => {
            let reason = engine.continue_forward(&state.breakpoints);
            Action::Print(format!(
                "{}\n{}",
                formatter::format_stop_reason(&reason),
                current_step(engine, state)
            ))
        }
        Command::ReverseContinue => {
            let reason = engine.continue_backward(&state.breakpoints);
            Action::Print(format!(
                "{}\n{}",
                formatter::format_stop_reason(&reason),
                current_step(engine, state)
            ))
        }
        Command::Break { pc } => {
            state.breakpoints.insert(*pc);
            Action::Print(format!("Breakpoint set at PC={:#06x} ({}).", pc, pc))
        }
        Command::Delete { pc } => {
            if state.breakpoints.remove(pc) {
                Action::Print(format!("Breakpoint removed at PC={:#06x} ({}).", pc, pc))
            } else {
                Action::Print(format!("No breakpoint at PC={:#06x} ({}).", pc, pc))
            }
        }
        Command::Goto { step } => match engine.goto(*step) {
            Ok(_) => Action::Print(current_step(engine, state)),
            Err(e) => Action::Print(format!("{e}.")),
        },
        Command::Info => Action::Print(formatter::format_info(&engine.summary(), engine.env())),
        Command::Stack => Action::Print(formatter::format_stack(engine.current_snapshot())),
        Command::Memory => Action::Print(formatter::format_memory(
            &engine.current_snapshot().state.memory.non_zero_words(),
        )),
        Command::Storage => Action::Print(formatter::format_storage(
            &engine.current_snapshot().state.storage.visible_entries(),
        )),
        Command::List { count } => execute_list(engine, *count),
        Command::Code => {
            let pc = engine.current_snapshot().pc();
            let rows = disassemble(engine.table(), engine.program(), pc, state.viewport_height);
            Action::Print(format!(
                "{}\n\n{}",
                formatter::format_disassembly(&rows, pc),
                bytecode_strip(engine.program(), pc)
            ))
        }
        Command::Breakpoints => Action::Print(formatter::format_breakpoints(&state.breakpoints)),
        Command::Help => Action::Print(formatter::format_help()),
        Command::Quit => Action::Quit,
    }
}

/// Detailed line for the snapshot under the cursor.
pub fn current_step(engine: &DebugEngine, state: &DebuggerState) -> String {
    let snapshot = engine.current_snapshot();
    formatter::format_step(
        snapshot,
        &engine.mnemonic_at(snapshot.pc()),
        engine.len(),
        state.stack_top_capture,
    )
}

fn halted_description(engine: &DebugEngine) -> String {
    match engine.current_snapshot().halted() {
        Some(reason) => format!("execution halted ({reason})"),
        None => "no further steps".to_string(),
    }
}

fn execute_list(engine: &DebugEngine, count: usize) -> Action {
    let pos = engine.position();
    let half = count / 2;
    let start = pos.saturating_sub(half);
    let snapshots = engine.history().snapshots_range(start, count);
    if snapshots.is_empty() {
        return Action::Print("No steps recorded.".to_string());
    }
    let total = engine.len();
    let lines: Vec<String> = snapshots
        .iter()
        .map(|s| {
            formatter::format_step_compact(
                s,
                &engine.mnemonic_at(s.pc()),
                total,
                s.step_index == pos,
            )
        })
        .collect();
    Action::Print(lines.join("\n"))
}

/// Parse a number supporting hex (0x prefix) and decimal.
fn parse_number(s: &str) -> Option<usize> {
    let s = s.trim();
    if let Some(hex_str) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        usize::from_str_radix(hex_str, 16).ok()
    } else {
        s.parse::<usize>().ok()
    }
}

