//! Shared helpers for the VM tests.

use crate::{
    errors::HaltReason,
    opcodes::OpcodeTable,
    program::Program,
    state::{Environment, ExecutionState},
    stepper::{StepOutcome, Stepper},
};

/// Everything needed to step a program: owns what [`Stepper`] borrows.
pub struct TestMachine {
    pub program: Program,
    pub table: OpcodeTable,
    pub env: Environment,
}

impl TestMachine {
    pub fn new(code: Vec<u8>) -> Self {
        Self::with_table(code, OpcodeTable::reference())
    }

    pub fn with_table(code: Vec<u8>, table: OpcodeTable) -> Self {
        Self {
            program: Program::load(code),
            table,
            env: Environment::default(),
        }
    }

    pub fn with_gas(mut self, gas_limit: u64) -> Self {
        self.env.gas_limit = gas_limit;
        self
    }

    pub fn stepper(&self) -> Stepper<'_> {
        Stepper::new(&self.program, &self.table, &self.env)
    }

    pub fn initial_state(&self) -> ExecutionState {
        ExecutionState::new(&self.env)
    }

    /// Step `n` times from the initial state, stopping early on a halt.
    pub fn step_n(&self, n: usize) -> ExecutionState {
        let stepper = self.stepper();
        let mut state = self.initial_state();
        for _ in 0..n {
            match stepper.step(&state) {
                StepOutcome::Continued(next) => state = next,
                StepOutcome::Halted(next, _) => return next,
            }
        }
        state
    }

    /// Step until halted; panics if the program runs for more than 10k steps.
    pub fn run_to_halt(&self) -> (ExecutionState, HaltReason) {
        match self.stepper().run(&self.initial_state(), 10_000) {
            StepOutcome::Halted(state, reason) => (state, reason),
            StepOutcome::Continued(state) => panic!("program did not halt, pc {}", state.pc),
        }
    }

    pub fn gas_used(&self, state: &ExecutionState) -> u64 {
        self.env.gas_limit - state.gas_remaining
    }
}
