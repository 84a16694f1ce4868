//! Error types for the time-travel debugger.
//!
//! Instruction faults are not errors here: they are recorded as halted
//! snapshots and can be navigated like any other step.

#[derive(Debug, thiserror::Error)]
pub enum DebuggerError {
    #[error("Step {index} out of range (max {max})")]
    StepOutOfRange { index: usize, max: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[cfg(feature = "cli")]
    #[error("CLI error: {0}")]
    Cli(String),

    #[cfg(feature = "cli")]
    #[error("Invalid bytecode: {0}")]
    InvalidBytecode(String),

    #[cfg(feature = "cli")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
