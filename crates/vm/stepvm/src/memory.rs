use std::sync::Arc;

use crate::{
    constants::{MEMORY_EXPANSION_QUOTIENT, WORD_SIZE_IN_BYTES_U64, WORD_SIZE_IN_BYTES_USIZE},
    errors::ExceptionalHalt,
};
use ExceptionalHalt::OutOfGas;
use bytes::Bytes;
use ethereum_types::U256;
use serde::Serialize;

/// Linear, word-granular memory.
///
/// The buffer is shared between snapshots and copied on the first write after
/// a clone, so stepping an instruction that never touches memory costs no
/// allocation and an earlier snapshot never observes a later write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Memory {
    buffer: Arc<Vec<u8>>,
}

impl Memory {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Size in bytes; always a multiple of 32.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only view of the whole buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Whether two memories still point at the same allocation.
    pub fn shares_buffer_with(&self, other: &Memory) -> bool {
        Arc::ptr_eq(&self.buffer, &other.buffer)
    }

    /// Grows memory to fit `new_memory_size` bytes.
    ///
    /// Note: new_memory_size is increased to the next 32 byte multiple.
    #[inline]
    pub fn resize(&mut self, new_memory_size: usize) -> Result<(), ExceptionalHalt> {
        if new_memory_size == 0 {
            return Ok(());
        }

        let new_memory_size = new_memory_size
            .checked_next_multiple_of(WORD_SIZE_IN_BYTES_USIZE)
            .ok_or(OutOfGas)?;

        if new_memory_size <= self.len() {
            return Ok(());
        }

        Arc::make_mut(&mut self.buffer).resize(new_memory_size, 0);
        Ok(())
    }

    /// Load `size` bytes from the given offset, expanding memory as needed.
    pub fn load_range(&mut self, offset: usize, size: usize) -> Result<Bytes, ExceptionalHalt> {
        if size == 0 {
            return Ok(Bytes::new());
        }

        let end = offset.checked_add(size).ok_or(OutOfGas)?;
        self.resize(end)?;

        self.buffer
            .get(offset..end)
            .map(Bytes::copy_from_slice)
            .ok_or(OutOfGas)
    }

    /// Load a word from the given offset.
    #[inline]
    pub fn load_word(&mut self, offset: usize) -> Result<U256, ExceptionalHalt> {
        let bytes = self.load_range(offset, WORD_SIZE_IN_BYTES_USIZE)?;
        Ok(U256::from_big_endian(&bytes))
    }

    /// Stores the given data at the given offset.
    pub fn store_data(&mut self, offset: usize, data: &[u8]) -> Result<(), ExceptionalHalt> {
        if data.is_empty() {
            return Ok(());
        }
        let end = offset.checked_add(data.len()).ok_or(OutOfGas)?;
        self.resize(end)?;

        Arc::make_mut(&mut self.buffer)
            .get_mut(offset..end)
            .ok_or(OutOfGas)?
            .copy_from_slice(data);
        Ok(())
    }

    /// Stores data and zero-pads up to total_size at the given offset.
    pub fn store_data_zero_padded(
        &mut self,
        offset: usize,
        data: &[u8],
        total_size: usize,
    ) -> Result<(), ExceptionalHalt> {
        if total_size == 0 {
            return Ok(());
        }

        let end = offset.checked_add(total_size).ok_or(OutOfGas)?;
        self.resize(end)?;

        let copy_size = data.len().min(total_size);
        let target = Arc::make_mut(&mut self.buffer)
            .get_mut(offset..end)
            .ok_or(OutOfGas)?;
        let (copied, padding) = target.split_at_mut(copy_size);
        copied.copy_from_slice(data.get(..copy_size).ok_or(OutOfGas)?);
        padding.fill(0);
        Ok(())
    }

    /// Stores a word at the given offset, resizing memory if needed.
    #[inline]
    pub fn store_word(&mut self, offset: usize, word: U256) -> Result<(), ExceptionalHalt> {
        self.store_data(offset, &word.to_big_endian())
    }

    /// Non-zero 32-byte words as `(offset, word)`, in address order.
    pub fn non_zero_words(&self) -> Vec<(usize, U256)> {
        self.buffer
            .chunks(WORD_SIZE_IN_BYTES_USIZE)
            .enumerate()
            .filter(|(_, chunk)| chunk.iter().any(|byte| *byte != 0))
            .map(|(index, chunk)| {
                (
                    index.saturating_mul(WORD_SIZE_IN_BYTES_USIZE),
                    U256::from_big_endian(chunk),
                )
            })
            .collect()
    }
}

/// When a memory expansion is triggered, only the additional bytes of memory
/// must be paid for.
#[inline]
pub fn expansion_cost(
    new_memory_size: usize,
    current_memory_size: usize,
) -> Result<u64, ExceptionalHalt> {
    let cost = if new_memory_size <= current_memory_size {
        0
    } else {
        // cost(x) > cost(y) where x > y, so this cannot underflow.
        cost(new_memory_size)?.saturating_sub(cost(current_memory_size)?)
    };
    Ok(cost)
}

/// The total cost for a given memory size.
#[inline]
fn cost(memory_size: usize) -> Result<u64, ExceptionalHalt> {
    let memory_size = u64::try_from(memory_size).map_err(|_| OutOfGas)?;

    // memory size measured in 32 byte words
    let words = memory_size.div_ceil(WORD_SIZE_IN_BYTES_U64);

    // Cost(words) = floor(words^2 / q) + 3 * words
    let quadratic = words
        .checked_mul(words)
        .ok_or(OutOfGas)?
        .checked_div(MEMORY_EXPANSION_QUOTIENT)
        .ok_or(OutOfGas)?;
    let linear = words.checked_mul(3).ok_or(OutOfGas)?;
    quadratic.checked_add(linear).ok_or(OutOfGas)
}

/// Memory size after touching `size` bytes at `offset`, rounded to words.
#[inline]
pub fn calculate_memory_size(offset: usize, size: usize) -> Result<usize, ExceptionalHalt> {
    if size == 0 {
        return Ok(0);
    }

    offset
        .checked_add(size)
        .and_then(|sum| sum.checked_next_multiple_of(WORD_SIZE_IN_BYTES_USIZE))
        .ok_or(OutOfGas)
}
