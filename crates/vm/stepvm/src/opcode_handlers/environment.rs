use ethereum_types::{Address, U256};

use crate::{
    constants::WORD_SIZE_IN_BYTES_USIZE,
    errors::ExceptionalHalt,
    gas_cost,
    memory::calculate_memory_size,
    opcode_handlers::size_offset_to_usize,
    state::{ExecutionContext, ExecutionState},
};

// Environmental Information (8)
// Opcodes: ADDRESS, CALLER, CALLVALUE, CALLDATALOAD, CALLDATASIZE, CALLDATACOPY, CODESIZE, CODECOPY

fn address_to_word(address: Address) -> U256 {
    U256::from_big_endian(address.as_bytes())
}

fn len_to_word(len: usize) -> U256 {
    U256::from(u64::try_from(len).unwrap_or(u64::MAX))
}

/// Bytes of `source` starting at `offset`, possibly fewer than `size` when
/// the read runs off the end. Callers zero-pad the rest.
fn source_slice(source: &[u8], offset: U256, size: usize) -> &[u8] {
    let Ok(offset) = usize::try_from(offset) else {
        return &[];
    };
    let end = offset.saturating_add(size).min(source.len());
    source.get(offset..end).unwrap_or_default()
}

// ADDRESS operation
pub fn op_address(
    state: &mut ExecutionState,
    ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    state.stack.push(address_to_word(ctx.env.address))
}

// CALLER operation
pub fn op_caller(
    state: &mut ExecutionState,
    ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    state.stack.push(address_to_word(ctx.env.caller))
}

// CALLVALUE operation
pub fn op_callvalue(
    state: &mut ExecutionState,
    ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    state.stack.push(ctx.env.call_value)
}

// CALLDATALOAD operation
pub fn op_calldataload(
    state: &mut ExecutionState,
    ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let offset = state.stack.pop1()?;

    // Reads past the end of calldata are zero-filled.
    let mut word = [0u8; WORD_SIZE_IN_BYTES_USIZE];
    let available = source_slice(&ctx.env.call_data, offset, WORD_SIZE_IN_BYTES_USIZE);
    if let Some(prefix) = word.get_mut(..available.len()) {
        prefix.copy_from_slice(available);
    }
    state.stack.push(U256::from_big_endian(&word))
}

// CALLDATASIZE operation
pub fn op_calldatasize(
    state: &mut ExecutionState,
    ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    state.stack.push(len_to_word(ctx.env.call_data.len()))
}

// CALLDATACOPY operation
pub fn op_calldatacopy(
    state: &mut ExecutionState,
    ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [dest_offset, calldata_offset, size] = state.stack.pop()?;
    copy_to_memory(state, &ctx.env.call_data, dest_offset, calldata_offset, size)
}

// CODESIZE operation
pub fn op_codesize(
    state: &mut ExecutionState,
    ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    state.stack.push(len_to_word(ctx.program.len()))
}

// CODECOPY operation
pub fn op_codecopy(
    state: &mut ExecutionState,
    ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [dest_offset, code_offset, size] = state.stack.pop()?;
    copy_to_memory(state, ctx.program.code(), dest_offset, code_offset, size)
}

fn copy_to_memory(
    state: &mut ExecutionState,
    source: &[u8],
    dest_offset: U256,
    source_offset: U256,
    size: U256,
) -> Result<(), ExceptionalHalt> {
    let (size, dest_offset) = size_offset_to_usize(size, dest_offset)?;
    let new_memory_size = calculate_memory_size(dest_offset, size)?;

    state.consume_gas(gas_cost::copy(new_memory_size, state.memory.len(), size)?)?;

    if size == 0 {
        return Ok(());
    }

    let data = source_slice(source, source_offset, size);
    state.memory.store_data_zero_padded(dest_offset, data, size)
}
