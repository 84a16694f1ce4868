//! Halting taxonomy for the stepper.
//!
//! Nothing in here is ever returned past [`crate::stepper::Stepper::step`]:
//! every failure ends up recorded as the `halted` field of an
//! [`crate::state::ExecutionState`], so a failed run can be inspected and
//! rewound like any other.

use serde::Serialize;

/// Failures raised by an instruction transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
pub enum ExceptionalHalt {
    #[error("Out of gas")]
    OutOfGas,
    #[error("Invalid opcode {0:#04x}")]
    InvalidOpcode(u8),
    #[error("Invalid jump destination")]
    InvalidJump,
    #[error("Stack underflow")]
    StackUnderflow,
    #[error("Stack overflow")]
    StackOverflow,
    #[error("Return stack underflow")]
    ReturnStackUnderflow,
    #[error("Return stack overflow")]
    ReturnStackOverflow,
    #[error("Subroutine entry reached by fallthrough")]
    InvalidSubroutineEntry,
    /// Program counter is not at an instruction boundary. Decoding is total,
    /// so this only shows up when a state was assembled by hand.
    #[error("Malformed program at pc {pc:#06x}")]
    MalformedProgram { pc: usize },
}

/// Why execution ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
pub enum HaltReason {
    #[error("Stopped")]
    Stopped,
    #[error("Reverted")]
    Reverted,
    #[error("{0}")]
    Exception(#[from] ExceptionalHalt),
}

impl HaltReason {
    /// STOP, RETURN and REVERT end a run normally; everything else is a fault.
    pub fn is_exceptional(&self) -> bool {
        matches!(self, HaltReason::Exception(_))
    }

    /// Process exit code for a session whose furthest state halted this way.
    pub fn exit_code(&self) -> i32 {
        if self.is_exceptional() { 1 } else { 0 }
    }
}
