//! Time-travel debugger for opstep bytecode.
//!
//! Executes a program one instruction at a time and keeps every state it
//! has reached, so the cursor can move backward and forward freely. Moving
//! forward over already explored steps is a cursor move; only stepping past
//! the furthest state reached executes an instruction.

pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod types;
pub mod view;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(test)]
mod tests;
