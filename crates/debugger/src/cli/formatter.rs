//! Display formatting for debugger output.

use std::collections::BTreeSet;

use ethereum_types::U256;
use opstep_vm::Environment;

use crate::types::{SessionSummary, Snapshot, StopReason};
use crate::view::DisassemblyRow;

/// Format a snapshot for detailed display (after step/goto).
pub fn format_step(snapshot: &Snapshot, mnemonic: &str, total: usize, stack_top: usize) -> String {
    let stack_preview = format_stack_inline(&snapshot.stack_top(stack_top));
    let mut out = format!(
        "[{}/{}] PC={:#06x}  {:<14} gas_used={}  gas_left={}\n  stack({}): [{}]",
        snapshot.step_index,
        total,
        snapshot.pc(),
        mnemonic,
        snapshot.gas_used,
        snapshot.state.gas_remaining,
        snapshot.stack_depth(),
        stack_preview,
    );
    if let Some(reason) = snapshot.halted() {
        out.push_str(&format!("\n  halted: {reason}"));
    }
    out
}

/// Format a snapshot compactly (for list view).
pub fn format_step_compact(
    snapshot: &Snapshot,
    mnemonic: &str,
    total: usize,
    is_cursor: bool,
) -> String {
    let marker = if is_cursor { ">" } else { " " };
    format!(
        "{marker} [{}/{}] PC={:#06x}  {:<14} gas_used={}",
        snapshot.step_index,
        total,
        snapshot.pc(),
        mnemonic,
        snapshot.gas_used,
    )
}

/// Format the session summary.
pub fn format_info(summary: &SessionSummary, env: &Environment) -> String {
    let output_hex = format!("0x{}", hex::encode(&summary.output));
    let status = match summary.halted {
        Some(reason) => reason.to_string(),
        None => "running".to_string(),
    };
    format!(
        "Recorded: {} steps | gas_used: {} | status: {} | output: {}\n\
         Position: {}/{}\n\
         Call data: 0x{} | call value: {:#x} | gas limit: {}",
        summary.steps_recorded,
        summary.gas_used,
        status,
        output_hex,
        summary.position,
        summary.steps_recorded,
        hex::encode(&env.call_data),
        env.call_value,
        env.gas_limit,
    )
}

/// Format the full stack of a snapshot.
pub fn format_stack(snapshot: &Snapshot) -> String {
    if snapshot.stack_depth() == 0 {
        return "Stack depth: 0 (empty)".to_string();
    }
    let mut lines = vec![format!("Stack depth: {}:", snapshot.stack_depth())];
    for (i, val) in snapshot.state.stack.iter_top_first().enumerate() {
        lines.push(format!("  [{}]: {:#x}", i, val));
    }
    lines.join("\n")
}

/// Format non-zero memory words.
pub fn format_memory(words: &[(usize, U256)]) -> String {
    if words.is_empty() {
        return "Memory: (all zero)".to_string();
    }
    let mut lines = vec![format!("Memory ({} non-zero words):", words.len())];
    for (offset, word) in words {
        lines.push(format!("  {:#06x}: {:#x}", offset, word));
    }
    lines.join("\n")
}

/// Format storage slots.
pub fn format_storage(entries: &[(U256, U256)]) -> String {
    if entries.is_empty() {
        return "Storage: (empty)".to_string();
    }
    let mut lines = vec![format!("Storage ({} slots):", entries.len())];
    for (key, value) in entries {
        lines.push(format!("  {:#x} => {:#x}", key, value));
    }
    lines.join("\n")
}

/// Format disassembly rows, marking the row at `pc`.
pub fn format_disassembly(rows: &[DisassemblyRow], pc: usize) -> String {
    if rows.is_empty() {
        return "(end of code)".to_string();
    }
    rows.iter()
        .map(|row| {
            let marker = if row.offset == pc { ">" } else { " " };
            let fee = row
                .fee
                .map(|fee| fee.to_string())
                .unwrap_or_else(|| "-".to_string());
            let immediate = if row.immediate.is_empty() {
                String::new()
            } else {
                format!(" 0x{}", hex::encode(&row.immediate))
            };
            format!(
                "{marker} {:#06x}  {:<14} fee={:<5}{}",
                row.offset, row.mnemonic, fee, immediate
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the reason a continue stopped.
pub fn format_stop_reason(reason: &StopReason) -> String {
    match reason {
        StopReason::Breakpoint { pc } => format!("Breakpoint hit at PC={:#06x}", pc),
        StopReason::Halted(halt) => format!("Execution halted: {halt}"),
        StopReason::StartOfHistory => "Reached start of history.".to_string(),
        StopReason::StepLimit { steps } => format!("Stopped after {steps} steps."),
    }
}

/// Format the list of active breakpoints.
pub fn format_breakpoints(breakpoints: &BTreeSet<usize>) -> String {
    if breakpoints.is_empty() {
        return "No breakpoints set.".to_string();
    }
    let mut lines = vec![format!("Breakpoints ({}):", breakpoints.len())];
    for pc in breakpoints {
        lines.push(format!("  PC={:#06x} ({})", pc, pc));
    }
    lines.join("\n")
}

/// Static help text.
pub fn format_help() -> String {
    "\
Commands:
  s, step            Step forward one instruction
  sb, step-back      Step backward one instruction
  c, continue        Continue until breakpoint or halt
  rc, reverse-continue  Continue backward until breakpoint or start
  b, break <pc>      Set breakpoint at PC (hex 0x0a or decimal 10)
  d, delete <pc>     Delete breakpoint at PC
  g, goto <step>     Jump to step number
  i, info            Show session summary
  st, stack          Show current stack
  m, memory          Show non-zero memory words
  ss, storage        Show storage slots
  l, list [n]        List n steps around cursor (default: 5)
  code               Disassemble from the current PC
  bp, breakpoints    List all breakpoints
  h, help            Show this help
  q, quit            Exit debugger"
        .to_string()
}

fn format_stack_inline(stack_top: &[U256]) -> String {
    stack_top
        .iter()
        .map(|v| format!("{:#x}", v))
        .collect::<Vec<_>>()
        .join(", ")
}
