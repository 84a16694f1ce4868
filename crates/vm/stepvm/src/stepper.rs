//! One-instruction state transitions.
//!
//! [`Stepper::step`] never fails: every fault is folded into
//! [`StepOutcome::Halted`]. The input state is borrowed and a new state is
//! returned, so the caller keeps the pre-step state intact.

use serde::Serialize;
use tracing::{trace, warn};

use crate::{
    errors::{ExceptionalHalt, HaltReason},
    opcodes::OpcodeTable,
    program::Program,
    state::{Environment, ExecutionContext, ExecutionState},
};

/// Result of executing a single instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StepOutcome {
    Continued(ExecutionState),
    Halted(ExecutionState, HaltReason),
}

impl StepOutcome {
    pub fn state(&self) -> &ExecutionState {
        match self {
            StepOutcome::Continued(state) | StepOutcome::Halted(state, _) => state,
        }
    }

    pub fn into_state(self) -> ExecutionState {
        match self {
            StepOutcome::Continued(state) | StepOutcome::Halted(state, _) => state,
        }
    }

    pub fn halt_reason(&self) -> Option<HaltReason> {
        match self {
            StepOutcome::Continued(_) => None,
            StepOutcome::Halted(_, reason) => Some(*reason),
        }
    }
}

/// Executes instructions of one program against one opcode table.
#[derive(Debug, Clone, Copy)]
pub struct Stepper<'a> {
    program: &'a Program,
    table: &'a OpcodeTable,
    env: &'a Environment,
}

impl<'a> Stepper<'a> {
    pub fn new(program: &'a Program, table: &'a OpcodeTable, env: &'a Environment) -> Self {
        Self {
            program,
            table,
            env,
        }
    }

    /// Execute the instruction at `state.pc`.
    ///
    /// Stepping a halted state returns it unchanged. On a fault the returned
    /// state equals `state` except for the `halted` field.
    pub fn step(&self, state: &ExecutionState) -> StepOutcome {
        if let Some(reason) = state.halted {
            return StepOutcome::Halted(state.clone(), reason);
        }

        let pc = state.pc;
        let Some(opcode) = self.program.opcode_at(pc) else {
            // Running off the end of the code is an implicit STOP.
            trace!(pc, "implicit stop at end of code");
            let mut stopped = state.clone();
            stopped.halted = Some(HaltReason::Stopped);
            return StepOutcome::Halted(stopped, HaltReason::Stopped);
        };

        if !self.program.is_instruction_boundary(pc) {
            return Self::fault(state, ExceptionalHalt::MalformedProgram { pc });
        }

        let Some(info) = self.table.get(opcode) else {
            return Self::fault(state, ExceptionalHalt::InvalidOpcode(opcode));
        };

        let ctx = ExecutionContext {
            program: self.program,
            env: self.env,
        };
        let mut next = state.clone();
        next.pc = pc.saturating_add(1);

        if let Err(halt) = self.table.transition(info, &mut next, &ctx) {
            return Self::fault(state, halt);
        }

        trace!(
            pc,
            opcode = %info.opcode,
            gas_remaining = next.gas_remaining,
            stack_len = next.stack.len(),
            "executed"
        );

        match info.halts {
            Some(reason) => {
                next.halted = Some(reason);
                StepOutcome::Halted(next, reason)
            }
            None => StepOutcome::Continued(next),
        }
    }

    /// Run until halted, returning the final state. `max_steps` bounds the
    /// number of instructions executed.
    pub fn run(&self, state: &ExecutionState, max_steps: usize) -> StepOutcome {
        let mut outcome = StepOutcome::Continued(state.clone());
        for _ in 0..max_steps {
            outcome = match outcome {
                StepOutcome::Continued(current) => self.step(&current),
                halted @ StepOutcome::Halted(..) => return halted,
            };
        }
        outcome
    }

    fn fault(state: &ExecutionState, halt: ExceptionalHalt) -> StepOutcome {
        warn!(pc = state.pc, %halt, "exceptional halt");
        let mut failed = state.clone();
        let reason = HaltReason::Exception(halt);
        failed.halted = Some(reason);
        StepOutcome::Halted(failed, reason)
    }
}
