use ethereum_types::U256;

use crate::{
    errors::ExceptionalHalt,
    state::{ExecutionContext, ExecutionState},
};

// Push Operations
// Opcodes: PUSH0, PUSH1 ... PUSH32

// Generic PUSH operation. Reads N immediate bytes at pc and steps past them.
#[inline]
pub fn op_push<const N: usize>(
    state: &mut ExecutionState,
    ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let code = ctx.program.code();
    let new_pc = state.pc.saturating_add(N);

    // A push cut short by the end of the code reads the missing bytes as zero.
    let mut immediate = [0u8; N];
    let available = code.get(state.pc..new_pc.min(code.len())).unwrap_or_default();
    if let Some(prefix) = immediate.get_mut(..available.len()) {
        prefix.copy_from_slice(available);
    }

    state.stack.push(U256::from_big_endian(&immediate))?;

    // Advance the PC by the number of bytes in this instruction's payload,
    // stopping at the implicit STOP after the last byte.
    state.pc = new_pc.min(code.len());

    Ok(())
}

// PUSH0
#[inline]
pub fn op_push0(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    state.stack.push_zero()
}
