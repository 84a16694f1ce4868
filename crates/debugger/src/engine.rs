//! Debug engine: owns a program and its history, and drives navigation.

use std::collections::BTreeSet;

use bytes::Bytes;
use opstep_vm::{Environment, ExecutionState, OpcodeTable, Program, Stepper};
use tracing::info;

use crate::{
    config::DebuggerConfig,
    error::DebuggerError,
    history::History,
    types::{SessionSummary, Snapshot, StopReason},
};

/// Default bound for a single continue when no config is supplied.
const DEFAULT_MAX_CONTINUE_STEPS: usize = 1_000_000;

/// Time-travel debug engine.
///
/// Starts positioned at step 0, before any instruction has run. Steps are
/// executed lazily as the cursor moves past the furthest recorded state.
#[derive(Debug)]
pub struct DebugEngine {
    program: Program,
    table: OpcodeTable,
    env: Environment,
    history: History,
    max_continue_steps: usize,
}

impl DebugEngine {
    pub fn new(program: Program, table: OpcodeTable, env: Environment) -> Self {
        let history = History::new(ExecutionState::new(&env));
        info!(
            code_len = program.len(),
            gas_limit = env.gas_limit,
            subroutines = table.supports_subroutines(),
            "debug session started"
        );
        Self {
            program,
            table,
            env,
            history,
            max_continue_steps: DEFAULT_MAX_CONTINUE_STEPS,
        }
    }

    /// Build an engine for `code` with the session parameters in `config`.
    pub fn from_config(
        code: impl Into<Bytes>,
        config: &DebuggerConfig,
    ) -> Result<Self, DebuggerError> {
        config.validate().map_err(DebuggerError::Config)?;
        let env = config.environment()?;
        let mut engine = Self::new(Program::load(code), config.opcode_table(), env);
        engine.max_continue_steps = config.max_continue_steps;
        Ok(engine)
    }

    pub fn with_max_continue_steps(mut self, max_continue_steps: usize) -> Self {
        self.max_continue_steps = max_continue_steps;
        self
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn table(&self) -> &OpcodeTable {
        &self.table
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Snapshot under the cursor.
    pub fn current_snapshot(&self) -> &Snapshot {
        self.history.current()
    }

    /// Current cursor position (0-based step index).
    pub fn position(&self) -> usize {
        self.history.cursor()
    }

    /// Number of snapshots recorded so far.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the initial snapshot exists from the start.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn can_step_forward(&self) -> bool {
        self.history.can_step_forward()
    }

    pub fn can_step_backward(&self) -> bool {
        self.history.can_step_backward()
    }

    /// Move forward one step, returning the new current snapshot.
    ///
    /// Returns `None` if execution has halted at the cursor.
    pub fn step_forward(&mut self) -> Option<&Snapshot> {
        let stepper = Stepper::new(&self.program, &self.table, &self.env);
        self.history.step_forward(&stepper)
    }

    /// Move backward one step, returning the new current snapshot.
    ///
    /// Returns `None` if already at step 0.
    pub fn step_backward(&mut self) -> Option<&Snapshot> {
        self.history.step_backward()
    }

    /// Move to step `step`, executing any instructions not yet recorded.
    ///
    /// If execution halts before reaching `step`, the cursor is left where
    /// it was and `StepOutOfRange` reports the last reachable step.
    pub fn goto(&mut self, step: usize) -> Result<&Snapshot, DebuggerError> {
        let origin = self.position();
        while self.position() < step {
            if self.step_forward().is_none() {
                let max = self.history.highest_reached();
                self.move_back_to(origin);
                return Err(DebuggerError::StepOutOfRange { index: step, max });
            }
        }
        self.move_back_to(step);
        Ok(self.current_snapshot())
    }

    fn move_back_to(&mut self, step: usize) {
        while self.position() > step {
            if self.step_backward().is_none() {
                break;
            }
        }
    }

    /// Step forward until the cursor lands on a breakpoint pc, execution
    /// halts, or the configured step budget runs out.
    pub fn continue_forward(&mut self, breakpoints: &BTreeSet<usize>) -> StopReason {
        for _ in 0..self.max_continue_steps {
            let Some(snapshot) = self.step_forward() else {
                return self.halt_stop_reason();
            };
            if breakpoints.contains(&snapshot.pc()) {
                return StopReason::Breakpoint { pc: snapshot.pc() };
            }
            if let Some(reason) = snapshot.halted() {
                return StopReason::Halted(reason);
            }
        }
        StopReason::StepLimit {
            steps: self.max_continue_steps,
        }
    }

    /// Step backward until the cursor lands on a breakpoint pc or step 0.
    pub fn continue_backward(&mut self, breakpoints: &BTreeSet<usize>) -> StopReason {
        while let Some(snapshot) = self.step_backward() {
            if breakpoints.contains(&snapshot.pc()) {
                return StopReason::Breakpoint { pc: snapshot.pc() };
            }
        }
        StopReason::StartOfHistory
    }

    fn halt_stop_reason(&self) -> StopReason {
        match self.current_snapshot().halted() {
            Some(reason) => StopReason::Halted(reason),
            None => StopReason::StepLimit { steps: 0 },
        }
    }

    /// Mnemonic of the instruction at `pc`. Past the end of the code this is
    /// the implicit STOP; bytes without a table entry read as UNKNOWN.
    pub fn mnemonic_at(&self, pc: usize) -> String {
        match self.program.opcode_at(pc) {
            Some(byte) => self
                .table
                .mnemonic(byte)
                .unwrap_or_else(|| "UNKNOWN".to_string()),
            None => "STOP".to_string(),
        }
    }

    /// Session summary so far, without ending the session.
    pub fn summary(&self) -> SessionSummary {
        let frontier = self.history.frontier();
        SessionSummary {
            steps_recorded: self.history.len(),
            position: self.position(),
            gas_used: frontier.gas_used,
            halted: frontier.halted(),
            output: frontier.state.output.clone(),
        }
    }

    /// End the session.
    pub fn quit(self) -> SessionSummary {
        let summary = self.summary();
        info!(
            steps = summary.steps_recorded,
            gas_used = summary.gas_used,
            halted = ?summary.halted,
            "debug session ended"
        );
        summary
    }
}
