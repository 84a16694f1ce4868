//! Fee schedule for the reference opcode table.
//!
//! Static fees are charged by the table before a handler runs; the functions
//! below compute the dynamic part a handler charges on top.

use ethereum_types::U256;

use crate::{
    constants::WORD_SIZE_IN_BYTES_USIZE,
    errors::ExceptionalHalt,
    memory,
};

pub const ZERO: u64 = 0;
pub const JUMPDEST: u64 = 1;
pub const BASE: u64 = 2;
pub const VERYLOW: u64 = 3;
pub const LOW: u64 = 5;
pub const MID: u64 = 8;
pub const HIGH: u64 = 10;

pub const EXP_STATIC: u64 = 10;
pub const EXP_DYNAMIC_BASE: u64 = 50;

pub const KECCAK25_STATIC: u64 = 30;
pub const KECCAK25_DYNAMIC_BASE: u64 = 6;

pub const COPY_PER_WORD: u64 = 3;

pub const SLOAD: u64 = 800;
pub const SSTORE_SET: u64 = 20_000;
pub const SSTORE_RESET: u64 = 5_000;

pub const BEGINSUB: u64 = 2;
pub const RETURNSUB: u64 = 5;
pub const JUMPSUB: u64 = 10;

/// Per-byte charge on the exponent of EXP.
pub fn exp(exponent: U256) -> Result<u64, ExceptionalHalt> {
    let exponent_byte_size = u64::try_from(exponent.bits().div_ceil(8))
        .map_err(|_| ExceptionalHalt::OutOfGas)?;
    EXP_DYNAMIC_BASE
        .checked_mul(exponent_byte_size)
        .ok_or(ExceptionalHalt::OutOfGas)
}

/// Word charge plus memory expansion for KECCAK256.
pub fn keccak256(
    new_memory_size: usize,
    current_memory_size: usize,
    size: usize,
) -> Result<u64, ExceptionalHalt> {
    per_word_with_expansion(
        KECCAK25_DYNAMIC_BASE,
        new_memory_size,
        current_memory_size,
        size,
    )
}

/// Shared by CALLDATACOPY and CODECOPY.
pub fn copy(
    new_memory_size: usize,
    current_memory_size: usize,
    size: usize,
) -> Result<u64, ExceptionalHalt> {
    per_word_with_expansion(COPY_PER_WORD, new_memory_size, current_memory_size, size)
}

fn per_word_with_expansion(
    per_word: u64,
    new_memory_size: usize,
    current_memory_size: usize,
    size: usize,
) -> Result<u64, ExceptionalHalt> {
    let words = u64::try_from(size.div_ceil(WORD_SIZE_IN_BYTES_USIZE))
        .map_err(|_| ExceptionalHalt::OutOfGas)?;
    let word_cost = per_word
        .checked_mul(words)
        .ok_or(ExceptionalHalt::OutOfGas)?;
    memory::expansion_cost(new_memory_size, current_memory_size)?
        .checked_add(word_cost)
        .ok_or(ExceptionalHalt::OutOfGas)
}

/// Writing a non-zero value into an empty slot allocates it.
pub fn sstore(current_value: U256, new_value: U256) -> u64 {
    if current_value.is_zero() && !new_value.is_zero() {
        SSTORE_SET
    } else {
        SSTORE_RESET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exp_charges_per_exponent_byte() {
        assert_eq!(exp(U256::zero()), Ok(0));
        assert_eq!(exp(U256::from(0xff)), Ok(50));
        assert_eq!(exp(U256::from(0x100)), Ok(100));
        assert_eq!(exp(U256::MAX), Ok(50 * 32));
    }

    #[test]
    fn sstore_distinguishes_set_from_reset() {
        assert_eq!(sstore(U256::zero(), U256::one()), SSTORE_SET);
        assert_eq!(sstore(U256::one(), U256::from(2)), SSTORE_RESET);
        assert_eq!(sstore(U256::one(), U256::zero()), SSTORE_RESET);
        assert_eq!(sstore(U256::zero(), U256::zero()), SSTORE_RESET);
    }

    #[test]
    fn copy_includes_expansion() {
        // One word copied into fresh memory: 3 (copy) + 3 (expansion of one word).
        assert_eq!(copy(32, 0, 32), Ok(6));
        // Already expanded memory only pays for the copy.
        assert_eq!(copy(32, 64, 32), Ok(3));
    }
}
