//! Transition functions for every instruction in the reference table.
//!
//! Each handler receives the state with `pc` already past the opcode byte
//! and the static fee already paid. Handlers charge dynamic gas themselves.

pub mod arithmetic;
pub mod bitwise_comparison;
pub mod dup_swap;
pub mod environment;
pub mod keccak;
pub mod push;
pub mod stack_memory_storage_flow;
pub mod subroutine;
pub mod system;

use ethereum_types::U256;

use crate::errors::ExceptionalHalt;

/// Converts a size and offset pair to usize. A zero size ignores the offset,
/// anything else that does not fit can only be paid for with infinite gas.
pub(crate) fn size_offset_to_usize(
    size: U256,
    offset: U256,
) -> Result<(usize, usize), ExceptionalHalt> {
    if size.is_zero() {
        return Ok((0, 0));
    }
    Ok((u256_to_usize(size)?, u256_to_usize(offset)?))
}

pub(crate) fn u256_to_usize(value: U256) -> Result<usize, ExceptionalHalt> {
    usize::try_from(value).map_err(|_| ExceptionalHalt::OutOfGas)
}

/// Offset of the instruction being executed, given the already advanced pc.
pub(crate) fn current_instruction_offset(pc: usize) -> usize {
    pc.saturating_sub(1)
}
