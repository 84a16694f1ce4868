//! Immutable decoded view of a bytecode program.
//!
//! Decoding is a single linear scan that never fails: it records every
//! instruction boundary, the length of the instruction starting there, and
//! which boundaries carry a JUMPDEST or BEGINSUB marker. Bytes inside a push
//! immediate are never boundaries, so an immediate that happens to equal a
//! marker opcode is not a valid destination.

use bitvec::vec::BitVec;
use bytes::Bytes;
use ethereum_types::U256;

use crate::constants::{BEGINSUB_BYTE, JUMPDEST_BYTE, PUSH1_BYTE, PUSH32_BYTE};

/// Number of immediate bytes following a push opcode (0 for anything else).
pub fn push_size(opcode: u8) -> usize {
    if (PUSH1_BYTE..=PUSH32_BYTE).contains(&opcode) {
        // PUSH1 = 0x60 pushes 1 byte, PUSH32 = 0x7f pushes 32 bytes
        usize::from(opcode.wrapping_sub(PUSH1_BYTE)).saturating_add(1)
    } else {
        0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    code: Bytes,
    /// Instruction length keyed by offset; 0 marks a byte inside an immediate.
    instruction_lengths: Vec<u8>,
    jump_destinations: BitVec,
    subroutine_entries: BitVec,
}

impl Program {
    /// Decode `code`. Total over every byte sequence.
    pub fn load(code: impl Into<Bytes>) -> Self {
        let code: Bytes = code.into();
        let len = code.len();

        let mut instruction_lengths = vec![0u8; len];
        let mut jump_destinations = BitVec::repeat(false, len);
        let mut subroutine_entries = BitVec::repeat(false, len);

        let mut offset: usize = 0;
        while let Some(&opcode) = code.get(offset) {
            let length = push_size(opcode).saturating_add(1);

            if let Some(slot) = instruction_lengths.get_mut(offset) {
                // At most 33, always fits.
                *slot = u8::try_from(length).unwrap_or(u8::MAX);
            }
            match opcode {
                JUMPDEST_BYTE => jump_destinations.set(offset, true),
                BEGINSUB_BYTE => subroutine_entries.set(offset, true),
                _ => {}
            }

            offset = offset.saturating_add(length);
        }

        Self {
            code,
            instruction_lengths,
            jump_destinations,
            subroutine_entries,
        }
    }

    pub fn code(&self) -> &Bytes {
        &self.code
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Opcode byte at `offset`, `None` past the end of the code.
    pub fn opcode_at(&self, offset: usize) -> Option<u8> {
        self.code.get(offset).copied()
    }

    /// Whether an instruction starts at `offset`.
    pub fn is_instruction_boundary(&self, offset: usize) -> bool {
        self.instruction_lengths
            .get(offset)
            .is_some_and(|length| *length != 0)
    }

    /// Length of the instruction at `offset`: 1, or 1 + immediate bytes for
    /// pushes. Only meaningful at instruction boundaries; offsets at or past
    /// the end of the code behave like the implicit trailing STOP.
    pub fn instruction_length(&self, offset: usize) -> usize {
        match self.instruction_lengths.get(offset) {
            Some(length) => usize::from(*length),
            None => 1,
        }
    }

    pub fn next_instruction_offset(&self, offset: usize) -> usize {
        offset.saturating_add(self.instruction_length(offset))
    }

    /// Immediate bytes of the push at `offset`, truncated at the end of code.
    pub fn immediate_at(&self, offset: usize) -> &[u8] {
        let start = offset.saturating_add(1);
        let end = self.next_instruction_offset(offset).min(self.code.len());
        self.code.get(start..end).unwrap_or_default()
    }

    pub fn is_valid_jump_destination(&self, target: U256) -> bool {
        usize::try_from(target)
            .ok()
            .and_then(|target| self.jump_destinations.get(target).map(|bit| *bit))
            .unwrap_or(false)
    }

    pub fn is_valid_subroutine_entry(&self, target: U256) -> bool {
        usize::try_from(target)
            .ok()
            .and_then(|target| self.subroutine_entries.get(target).map(|bit| *bit))
            .unwrap_or(false)
    }

    pub fn jump_destinations(&self) -> Vec<usize> {
        self.jump_destinations.iter_ones().collect()
    }

    pub fn subroutine_entries(&self) -> Vec<usize> {
        self.subroutine_entries.iter_ones().collect()
    }

    /// Instruction boundaries in order.
    pub fn instruction_offsets(&self) -> impl Iterator<Item = usize> + '_ {
        self.instruction_lengths
            .iter()
            .enumerate()
            .filter(|(_, length)| **length != 0)
            .map(|(offset, _)| offset)
    }
}
