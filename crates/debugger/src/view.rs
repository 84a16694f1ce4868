//! Read-only views of a snapshot for a front end to render.

use ethereum_types::U256;
use opstep_vm::{HaltReason, OpcodeTable, Program, program::push_size};
use serde::Serialize;

use crate::{engine::DebugEngine, types::Snapshot};

/// One line of disassembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisassemblyRow {
    pub offset: usize,
    pub mnemonic: String,
    /// Static fee from the table; `None` for bytes the table does not know.
    pub fee: Option<u64>,
    /// Push data, truncated at the end of the code.
    pub immediate: Vec<u8>,
}

/// Up to `height` instructions starting at `from_pc`.
pub fn disassemble(
    table: &OpcodeTable,
    program: &Program,
    from_pc: usize,
    height: usize,
) -> Vec<DisassemblyRow> {
    let mut rows = Vec::with_capacity(height);
    let mut offset = from_pc;

    while rows.len() < height {
        let Some(byte) = program.opcode_at(offset) else {
            break;
        };
        let info = table.get(byte);
        let immediate = if push_size(byte) > 0 {
            program.immediate_at(offset).to_vec()
        } else {
            Vec::new()
        };
        rows.push(DisassemblyRow {
            offset,
            mnemonic: info
                .map(|info| info.mnemonic())
                .unwrap_or_else(|| "UNKNOWN".to_string()),
            fee: info.map(|info| info.base_fee),
            immediate,
        });
        // Never stall on an offset inside an immediate.
        offset = offset.saturating_add(program.instruction_length(offset).max(1));
    }

    rows
}

/// Whole program as hex with the instruction at `pc` in brackets.
pub fn bytecode_strip(program: &Program, pc: usize) -> String {
    let code = program.code();
    let mut strip = String::with_capacity(code.len().saturating_mul(2).saturating_add(2));

    for offset in program.instruction_offsets() {
        let end = program.next_instruction_offset(offset).min(code.len());
        let Some(instruction) = code.get(offset..end) else {
            continue;
        };
        if offset == pc {
            strip.push('[');
            strip.push_str(&hex::encode(instruction));
            strip.push(']');
        } else {
            strip.push_str(&hex::encode(instruction));
        }
    }

    strip
}

/// Everything a front end shows for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotView {
    pub step_index: usize,
    pub pc: usize,
    pub disassembly: Vec<DisassemblyRow>,
    /// Top of the stack first.
    pub stack: Vec<U256>,
    /// Non-zero 32-byte words as `(offset, word)`.
    pub memory: Vec<(usize, U256)>,
    /// Storage sorted by key, bootstrap sentinel entries hidden.
    pub storage: Vec<(U256, U256)>,
    pub gas_used: u64,
    pub gas_remaining: u64,
    pub halted: Option<HaltReason>,
}

impl SnapshotView {
    pub fn new(
        table: &OpcodeTable,
        program: &Program,
        snapshot: &Snapshot,
        height: usize,
    ) -> Self {
        let state = &snapshot.state;
        Self {
            step_index: snapshot.step_index,
            pc: state.pc,
            disassembly: disassemble(table, program, state.pc, height),
            stack: state.stack.iter_top_first().copied().collect(),
            memory: state.memory.non_zero_words(),
            storage: state.storage.visible_entries(),
            gas_used: snapshot.gas_used,
            gas_remaining: state.gas_remaining,
            halted: state.halted,
        }
    }

    /// View of the engine's current snapshot.
    pub fn current(engine: &DebugEngine, height: usize) -> Self {
        Self::new(
            engine.table(),
            engine.program(),
            engine.current_snapshot(),
            height,
        )
    }
}
