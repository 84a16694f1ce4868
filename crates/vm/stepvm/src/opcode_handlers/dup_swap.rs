use crate::{
    errors::ExceptionalHalt,
    state::{ExecutionContext, ExecutionState},
};

// Duplication and Exchange Operations
// Opcodes: DUP1 ... DUP16, SWAP1 ... SWAP16

// DUPn copies the n-th word; DEPTH is n - 1 (DUP1 copies the top).
#[inline]
pub fn op_dup<const DEPTH: usize>(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    state.stack.dup(DEPTH)
}

// SWAPn exchanges the top with the word n slots below it.
#[inline]
pub fn op_swap<const DEPTH: usize>(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    state.stack.swap(DEPTH)
}
