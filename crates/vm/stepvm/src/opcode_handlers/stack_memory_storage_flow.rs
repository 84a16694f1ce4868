use ethereum_types::U256;

use crate::{
    constants::WORD_SIZE_IN_BYTES_USIZE,
    errors::ExceptionalHalt,
    gas_cost,
    memory::calculate_memory_size,
    opcode_handlers::{current_instruction_offset, u256_to_usize},
    state::{ExecutionContext, ExecutionState},
};

// Stack, Memory, Storage, and Flow Operations (12)
// Opcodes: POP, MLOAD, MSTORE, MSTORE8, SLOAD, SSTORE, JUMP, JUMPI, PC, MSIZE, GAS, JUMPDEST

// POP operation
pub fn op_pop(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    state.stack.pop1()?;
    Ok(())
}

// MLOAD operation
pub fn op_mload(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let offset = u256_to_usize(state.stack.pop1()?)?;

    state.expand_memory(calculate_memory_size(offset, WORD_SIZE_IN_BYTES_USIZE)?)?;

    let word = state.memory.load_word(offset)?;
    state.stack.push(word)
}

// MSTORE operation
pub fn op_mstore(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [offset, value] = state.stack.pop()?;
    let offset = u256_to_usize(offset)?;

    state.expand_memory(calculate_memory_size(offset, WORD_SIZE_IN_BYTES_USIZE)?)?;

    state.memory.store_word(offset, value)
}

// MSTORE8 operation
pub fn op_mstore8(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [offset, value] = state.stack.pop()?;
    let offset = u256_to_usize(offset)?;

    state.expand_memory(calculate_memory_size(offset, 1)?)?;

    // Only the least significant byte is stored.
    state.memory.store_data(offset, &[value.byte(0)])
}

// SLOAD operation
pub fn op_sload(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let key = state.stack.pop1()?;
    let value = state.storage.get(&key);
    state.stack.push(value)
}

// SSTORE operation
pub fn op_sstore(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [key, new_value] = state.stack.pop()?;
    let current_value = state.storage.get(&key);

    state.consume_gas(gas_cost::sstore(current_value, new_value))?;

    state.storage.set(key, new_value);
    Ok(())
}

// JUMP operation
pub fn op_jump(
    state: &mut ExecutionState,
    ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let target = state.stack.pop1()?;
    jump(state, ctx, target)
}

// JUMPI operation
pub fn op_jumpi(
    state: &mut ExecutionState,
    ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [target, condition] = state.stack.pop()?;
    if condition.is_zero() {
        return Ok(());
    }
    jump(state, ctx, target)
}

/// Moves pc to `target` if it is a JUMPDEST at an instruction boundary.
fn jump(
    state: &mut ExecutionState,
    ctx: &ExecutionContext<'_>,
    target: U256,
) -> Result<(), ExceptionalHalt> {
    if !ctx.program.is_valid_jump_destination(target) {
        return Err(ExceptionalHalt::InvalidJump);
    }
    state.pc = u256_to_usize(target).map_err(|_| ExceptionalHalt::InvalidJump)?;
    Ok(())
}

// PC operation
pub fn op_pc(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let offset = current_instruction_offset(state.pc);
    state
        .stack
        .push(U256::from(u64::try_from(offset).unwrap_or(u64::MAX)))
}

// MSIZE operation
pub fn op_msize(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let size = u64::try_from(state.memory.len()).unwrap_or(u64::MAX);
    state.stack.push(U256::from(size))
}

// GAS operation
pub fn op_gas(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    // Remaining gas after paying for this instruction.
    let remaining = state.gas_remaining;
    state.stack.push(U256::from(remaining))
}

// JUMPDEST operation
pub fn op_jumpdest(
    _state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    Ok(())
}
