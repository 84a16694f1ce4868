//! Subroutine extension (EIP-2315): BEGINSUB, RETURNSUB, JUMPSUB.
//!
//! Only registered by [`crate::opcodes::OpcodeTable::with_subroutines`].
//! Entry points are validated against the BEGINSUB markers found at load
//! time, the same way ordinary jumps are validated against JUMPDESTs.

use crate::{
    errors::ExceptionalHalt,
    opcode_handlers::u256_to_usize,
    state::{ExecutionContext, ExecutionState},
};

// BEGINSUB can only be entered through JUMPSUB, which skips over it.
pub fn op_beginsub(
    _state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    Err(ExceptionalHalt::InvalidSubroutineEntry)
}

// JUMPSUB operation
pub fn op_jumpsub(
    state: &mut ExecutionState,
    ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let target = state.stack.pop1()?;
    if !ctx.program.is_valid_subroutine_entry(target) {
        return Err(ExceptionalHalt::InvalidJump);
    }
    let target = u256_to_usize(target).map_err(|_| ExceptionalHalt::InvalidJump)?;

    // pc already points past JUMPSUB, which is where RETURNSUB resumes.
    state.return_stack.push(state.pc)?;
    state.pc = target.saturating_add(1);
    Ok(())
}

// RETURNSUB operation
pub fn op_returnsub(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    state.pc = state.return_stack.pop()?;
    Ok(())
}
