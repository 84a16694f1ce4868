use ethereum_types::U256;
use sha3::{Digest, Keccak256};

use crate::{
    errors::ExceptionalHalt,
    gas_cost,
    memory::calculate_memory_size,
    opcode_handlers::size_offset_to_usize,
    state::{ExecutionContext, ExecutionState},
};

// KECCAK256 (1)
// Opcodes: KECCAK256

pub fn op_keccak256(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [offset, size] = state.stack.pop()?;
    let (size, offset) = size_offset_to_usize(size, offset)?;

    let new_memory_size = calculate_memory_size(offset, size)?;
    state.consume_gas(gas_cost::keccak256(
        new_memory_size,
        state.memory.len(),
        size,
    )?)?;

    let data = state.memory.load_range(offset, size)?;
    let hash = Keccak256::digest(&data);
    state.stack.push(U256::from_big_endian(&hash))
}
