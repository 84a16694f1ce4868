//! # opstep-vm
//!
//! A small EVM-style bytecode interpreter built for stepping.
//!
//! Execution is expressed as a pure transition: [`stepper::Stepper::step`]
//! borrows an [`state::ExecutionState`] and returns the next one, never
//! mutating its input. This is what lets a debugger keep every intermediate
//! state around and move backward through them.
//!
//! ## Key Components
//!
//! - [`program::Program`]: decoded bytecode with jump destination sets
//! - [`opcodes::OpcodeTable`]: byte to instruction metadata and handler
//! - [`state::ExecutionState`]: pc, stack, memory, storage, gas
//! - [`stepper::Stepper`]: one instruction at a time
//!
//! ## Usage
//!
//! ```
//! use ethereum_types::U256;
//! use opstep_vm::{
//!     opcodes::OpcodeTable,
//!     program::Program,
//!     state::{Environment, ExecutionState},
//!     stepper::{StepOutcome, Stepper},
//! };
//!
//! // PUSH1 0x01 PUSH1 0x02 ADD STOP
//! let program = Program::load(vec![0x60, 0x01, 0x60, 0x02, 0x01, 0x00]);
//! let table = OpcodeTable::reference();
//! let env = Environment::default();
//! let stepper = Stepper::new(&program, &table, &env);
//!
//! let outcome = stepper.run(&ExecutionState::new(&env), 16);
//! assert!(matches!(outcome, StepOutcome::Halted(..)));
//! assert_eq!(outcome.state().stack.peek(0), Some(U256::from(3)));
//! ```

pub mod constants;
pub mod errors;
pub mod gas_cost;
pub mod memory;
pub mod opcode_handlers;
pub mod opcodes;
pub mod program;
pub mod stack;
pub mod state;
pub mod stepper;

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects
)]
mod tests;

pub use errors::{ExceptionalHalt, HaltReason};
pub use opcodes::{Opcode, OpcodeInfo, OpcodeTable};
pub use program::Program;
pub use state::{Environment, ExecutionContext, ExecutionState};
pub use stepper::{StepOutcome, Stepper};
