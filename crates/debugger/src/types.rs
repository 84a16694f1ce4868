//! Core data types for the time-travel debugger.

use bytes::Bytes;
use ethereum_types::U256;
use opstep_vm::{ExecutionState, HaltReason};
use serde::Serialize;

/// Immutable record of the machine after `step_index` instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Sequential step index (0 = before any instruction ran).
    pub step_index: usize,
    pub state: ExecutionState,
    /// Gas consumed since the session started.
    pub gas_used: u64,
}

impl Snapshot {
    /// Program counter of the next instruction to execute.
    pub fn pc(&self) -> usize {
        self.state.pc
    }

    pub fn halted(&self) -> Option<HaltReason> {
        self.state.halted
    }

    pub fn is_halted(&self) -> bool {
        self.state.halted.is_some()
    }

    /// Top `n` stack items (index 0 = top of stack).
    pub fn stack_top(&self, n: usize) -> Vec<U256> {
        self.state.stack.iter_top_first().take(n).copied().collect()
    }

    pub fn stack_depth(&self) -> usize {
        self.state.stack.len()
    }

    pub fn memory_size(&self) -> usize {
        self.state.memory.len()
    }
}

/// Why a continue command stopped moving the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// The cursor reached a snapshot whose pc has a breakpoint.
    Breakpoint { pc: usize },
    /// Execution halted; nothing further to step into.
    Halted(HaltReason),
    /// Reverse continue reached step 0.
    StartOfHistory,
    /// The step budget for a single continue ran out.
    StepLimit { steps: usize },
}

/// Final report handed back when a session quits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Snapshots recorded, including the initial one.
    pub steps_recorded: usize,
    /// Cursor position at quit.
    pub position: usize,
    /// Gas used by the furthest state reached.
    pub gas_used: u64,
    /// Halt reason of the furthest state reached, if it halted.
    pub halted: Option<HaltReason>,
    /// Data returned by RETURN or REVERT.
    pub output: Bytes,
}

impl SessionSummary {
    /// 1 when the furthest state reached halted on a fault, else 0.
    pub fn exit_code(&self) -> i32 {
        self.halted.map(|reason| reason.exit_code()).unwrap_or(0)
    }
}
