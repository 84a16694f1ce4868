//! Instruction set and the pluggable opcode table.
//!
//! [`Opcode`] names every instruction the reference table knows about.
//! [`OpcodeTable`] maps each of the 256 byte values to optional metadata and a
//! transition function; bytes without an entry halt with `InvalidOpcode`.

use strum::{Display, EnumString};

use crate::{
    errors::{ExceptionalHalt, HaltReason},
    gas_cost,
    opcode_handlers::{
        arithmetic::*, bitwise_comparison::*, dup_swap::*, environment::*, keccak::*, push::*,
        stack_memory_storage_flow::*, subroutine::*, system::*,
    },
    program::push_size,
    state::{ExecutionContext, ExecutionState},
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Hash, Display, EnumString)]
pub enum Opcode {
    // Stop and Arithmetic Operations
    STOP = 0x00,
    ADD = 0x01,
    MUL = 0x02,
    SUB = 0x03,
    DIV = 0x04,
    MOD = 0x06,
    EXP = 0x0A,

    // Comparison & Bitwise Logic Operations
    LT = 0x10,
    GT = 0x11,
    EQ = 0x14,
    ISZERO = 0x15,
    AND = 0x16,
    OR = 0x17,
    XOR = 0x18,
    NOT = 0x19,
    BYTE = 0x1A,
    SHL = 0x1B,
    SHR = 0x1C,

    // KECCAK256
    KECCAK256 = 0x20,

    // Environmental Information
    ADDRESS = 0x30,
    CALLER = 0x33,
    CALLVALUE = 0x34,
    CALLDATALOAD = 0x35,
    CALLDATASIZE = 0x36,
    CALLDATACOPY = 0x37,
    CODESIZE = 0x38,
    CODECOPY = 0x39,

    // Stack, Memory, Storage, and Flow Operations
    POP = 0x50,
    MLOAD = 0x51,
    MSTORE = 0x52,
    MSTORE8 = 0x53,
    SLOAD = 0x54,
    SSTORE = 0x55,
    JUMP = 0x56,
    JUMPI = 0x57,
    PC = 0x58,
    MSIZE = 0x59,
    GAS = 0x5A,
    JUMPDEST = 0x5B,

    // Subroutines (EIP-2315)
    BEGINSUB = 0x5C,
    RETURNSUB = 0x5D,
    JUMPSUB = 0x5E,

    // Push Operations
    PUSH0 = 0x5F,
    PUSH1 = 0x60,
    PUSH2 = 0x61,
    PUSH3 = 0x62,
    PUSH4 = 0x63,
    PUSH5 = 0x64,
    PUSH6 = 0x65,
    PUSH7 = 0x66,
    PUSH8 = 0x67,
    PUSH9 = 0x68,
    PUSH10 = 0x69,
    PUSH11 = 0x6A,
    PUSH12 = 0x6B,
    PUSH13 = 0x6C,
    PUSH14 = 0x6D,
    PUSH15 = 0x6E,
    PUSH16 = 0x6F,
    PUSH17 = 0x70,
    PUSH18 = 0x71,
    PUSH19 = 0x72,
    PUSH20 = 0x73,
    PUSH21 = 0x74,
    PUSH22 = 0x75,
    PUSH23 = 0x76,
    PUSH24 = 0x77,
    PUSH25 = 0x78,
    PUSH26 = 0x79,
    PUSH27 = 0x7A,
    PUSH28 = 0x7B,
    PUSH29 = 0x7C,
    PUSH30 = 0x7D,
    PUSH31 = 0x7E,
    PUSH32 = 0x7F,

    // Duplication Operations
    DUP1 = 0x80,
    DUP2 = 0x81,
    DUP3 = 0x82,
    DUP4 = 0x83,
    DUP5 = 0x84,
    DUP6 = 0x85,
    DUP7 = 0x86,
    DUP8 = 0x87,
    DUP9 = 0x88,
    DUP10 = 0x89,
    DUP11 = 0x8A,
    DUP12 = 0x8B,
    DUP13 = 0x8C,
    DUP14 = 0x8D,
    DUP15 = 0x8E,
    DUP16 = 0x8F,

    // Swap Operations
    SWAP1 = 0x90,
    SWAP2 = 0x91,
    SWAP3 = 0x92,
    SWAP4 = 0x93,
    SWAP5 = 0x94,
    SWAP6 = 0x95,
    SWAP7 = 0x96,
    SWAP8 = 0x97,
    SWAP9 = 0x98,
    SWAP10 = 0x99,
    SWAP11 = 0x9A,
    SWAP12 = 0x9B,
    SWAP13 = 0x9C,
    SWAP14 = 0x9D,
    SWAP15 = 0x9E,
    SWAP16 = 0x9F,

    // System Operations
    RETURN = 0xF3,
    REVERT = 0xFD,
    INVALID = 0xFE,
}

impl From<u8> for Opcode {
    #[allow(clippy::indexing_slicing)]
    fn from(byte: u8) -> Self {
        // Lookup table instead of a match; unknown bytes map to INVALID.
        const OPCODE_TABLE: [Opcode; 256] = const {
            let mut table = [Opcode::INVALID; 256];
            table[0x00] = Opcode::STOP;
            table[0x01] = Opcode::ADD;
            table[0x02] = Opcode::MUL;
            table[0x03] = Opcode::SUB;
            table[0x04] = Opcode::DIV;
            table[0x06] = Opcode::MOD;
            table[0x0A] = Opcode::EXP;
            table[0x10] = Opcode::LT;
            table[0x11] = Opcode::GT;
            table[0x14] = Opcode::EQ;
            table[0x15] = Opcode::ISZERO;
            table[0x16] = Opcode::AND;
            table[0x17] = Opcode::OR;
            table[0x18] = Opcode::XOR;
            table[0x19] = Opcode::NOT;
            table[0x1A] = Opcode::BYTE;
            table[0x1B] = Opcode::SHL;
            table[0x1C] = Opcode::SHR;
            table[0x20] = Opcode::KECCAK256;
            table[0x30] = Opcode::ADDRESS;
            table[0x33] = Opcode::CALLER;
            table[0x34] = Opcode::CALLVALUE;
            table[0x35] = Opcode::CALLDATALOAD;
            table[0x36] = Opcode::CALLDATASIZE;
            table[0x37] = Opcode::CALLDATACOPY;
            table[0x38] = Opcode::CODESIZE;
            table[0x39] = Opcode::CODECOPY;
            table[0x50] = Opcode::POP;
            table[0x51] = Opcode::MLOAD;
            table[0x52] = Opcode::MSTORE;
            table[0x53] = Opcode::MSTORE8;
            table[0x54] = Opcode::SLOAD;
            table[0x55] = Opcode::SSTORE;
            table[0x56] = Opcode::JUMP;
            table[0x57] = Opcode::JUMPI;
            table[0x58] = Opcode::PC;
            table[0x59] = Opcode::MSIZE;
            table[0x5A] = Opcode::GAS;
            table[0x5B] = Opcode::JUMPDEST;
            table[0x5C] = Opcode::BEGINSUB;
            table[0x5D] = Opcode::RETURNSUB;
            table[0x5E] = Opcode::JUMPSUB;
            table[0x5F] = Opcode::PUSH0;
            table[0x60] = Opcode::PUSH1;
            table[0x61] = Opcode::PUSH2;
            table[0x62] = Opcode::PUSH3;
            table[0x63] = Opcode::PUSH4;
            table[0x64] = Opcode::PUSH5;
            table[0x65] = Opcode::PUSH6;
            table[0x66] = Opcode::PUSH7;
            table[0x67] = Opcode::PUSH8;
            table[0x68] = Opcode::PUSH9;
            table[0x69] = Opcode::PUSH10;
            table[0x6A] = Opcode::PUSH11;
            table[0x6B] = Opcode::PUSH12;
            table[0x6C] = Opcode::PUSH13;
            table[0x6D] = Opcode::PUSH14;
            table[0x6E] = Opcode::PUSH15;
            table[0x6F] = Opcode::PUSH16;
            table[0x70] = Opcode::PUSH17;
            table[0x71] = Opcode::PUSH18;
            table[0x72] = Opcode::PUSH19;
            table[0x73] = Opcode::PUSH20;
            table[0x74] = Opcode::PUSH21;
            table[0x75] = Opcode::PUSH22;
            table[0x76] = Opcode::PUSH23;
            table[0x77] = Opcode::PUSH24;
            table[0x78] = Opcode::PUSH25;
            table[0x79] = Opcode::PUSH26;
            table[0x7A] = Opcode::PUSH27;
            table[0x7B] = Opcode::PUSH28;
            table[0x7C] = Opcode::PUSH29;
            table[0x7D] = Opcode::PUSH30;
            table[0x7E] = Opcode::PUSH31;
            table[0x7F] = Opcode::PUSH32;
            table[0x80] = Opcode::DUP1;
            table[0x81] = Opcode::DUP2;
            table[0x82] = Opcode::DUP3;
            table[0x83] = Opcode::DUP4;
            table[0x84] = Opcode::DUP5;
            table[0x85] = Opcode::DUP6;
            table[0x86] = Opcode::DUP7;
            table[0x87] = Opcode::DUP8;
            table[0x88] = Opcode::DUP9;
            table[0x89] = Opcode::DUP10;
            table[0x8A] = Opcode::DUP11;
            table[0x8B] = Opcode::DUP12;
            table[0x8C] = Opcode::DUP13;
            table[0x8D] = Opcode::DUP14;
            table[0x8E] = Opcode::DUP15;
            table[0x8F] = Opcode::DUP16;
            table[0x90] = Opcode::SWAP1;
            table[0x91] = Opcode::SWAP2;
            table[0x92] = Opcode::SWAP3;
            table[0x93] = Opcode::SWAP4;
            table[0x94] = Opcode::SWAP5;
            table[0x95] = Opcode::SWAP6;
            table[0x96] = Opcode::SWAP7;
            table[0x97] = Opcode::SWAP8;
            table[0x98] = Opcode::SWAP9;
            table[0x99] = Opcode::SWAP10;
            table[0x9A] = Opcode::SWAP11;
            table[0x9B] = Opcode::SWAP12;
            table[0x9C] = Opcode::SWAP13;
            table[0x9D] = Opcode::SWAP14;
            table[0x9E] = Opcode::SWAP15;
            table[0x9F] = Opcode::SWAP16;
            table[0xF3] = Opcode::RETURN;
            table[0xFD] = Opcode::REVERT;

            table
        };
        OPCODE_TABLE
            .get(usize::from(byte))
            .copied()
            .unwrap_or(Opcode::INVALID)
    }
}

impl From<Opcode> for u8 {
    #[allow(clippy::as_conversions)]
    fn from(opcode: Opcode) -> Self {
        opcode as u8
    }
}

/// Represents an opcode transition function.
#[derive(Debug, Clone, Copy)]
pub struct OpCodeFn(
    pub fn(&mut ExecutionState, &ExecutionContext<'_>) -> Result<(), ExceptionalHalt>,
);

impl OpCodeFn {
    #[inline(always)]
    pub fn call(
        self,
        state: &mut ExecutionState,
        ctx: &ExecutionContext<'_>,
    ) -> Result<(), ExceptionalHalt> {
        (self.0)(state, ctx)
    }
}

/// Metadata and transition for one table entry.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    pub opcode: Opcode,
    /// Charged before the handler runs.
    pub base_fee: u64,
    /// Bytes of push data following the opcode.
    pub immediate_len: usize,
    /// Set for instructions that end execution when they succeed.
    pub halts: Option<HaltReason>,
    pub handler: OpCodeFn,
}

impl OpcodeInfo {
    pub fn new(opcode: Opcode, base_fee: u64, handler: OpCodeFn) -> Self {
        Self {
            opcode,
            base_fee,
            immediate_len: push_size(u8::from(opcode)),
            halts: None,
            handler,
        }
    }

    /// An entry that halts with `reason` once its transition succeeds.
    pub fn halting(opcode: Opcode, base_fee: u64, handler: OpCodeFn, reason: HaltReason) -> Self {
        Self {
            halts: Some(reason),
            ..Self::new(opcode, base_fee, handler)
        }
    }

    pub fn mnemonic(&self) -> String {
        self.opcode.to_string()
    }

    pub fn is_terminal(&self) -> bool {
        self.halts.is_some()
    }

    pub fn is_push(&self) -> bool {
        self.immediate_len > 0
    }
}

/// Lookup from opcode byte to [`OpcodeInfo`].
#[derive(Debug, Clone)]
pub struct OpcodeTable {
    entries: [Option<OpcodeInfo>; 256],
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::reference()
    }
}

impl OpcodeTable {
    /// A table with no instructions at all.
    pub fn empty() -> Self {
        Self {
            entries: [None; 256],
        }
    }

    pub fn get(&self, byte: u8) -> Option<&OpcodeInfo> {
        self.entries.get(usize::from(byte))?.as_ref()
    }

    pub fn insert(&mut self, info: OpcodeInfo) -> Option<OpcodeInfo> {
        let slot = self.entries.get_mut(usize::from(u8::from(info.opcode)))?;
        slot.replace(info)
    }

    pub fn remove(&mut self, byte: u8) -> Option<OpcodeInfo> {
        self.entries.get_mut(usize::from(byte))?.take()
    }

    /// Mnemonic for `byte`, or `None` when the table has no entry.
    pub fn mnemonic(&self, byte: u8) -> Option<String> {
        self.get(byte).map(OpcodeInfo::mnemonic)
    }

    pub fn supports_subroutines(&self) -> bool {
        self.get(u8::from(Opcode::JUMPSUB)).is_some()
    }

    /// Apply `info` to `state`: the base fee first, then the handler.
    ///
    /// On error `state` may be partially modified; callers discard it.
    pub fn transition(
        &self,
        info: &OpcodeInfo,
        state: &mut ExecutionState,
        ctx: &ExecutionContext<'_>,
    ) -> Result<(), ExceptionalHalt> {
        state.consume_gas(info.base_fee)?;
        info.handler.call(state, ctx)
    }

    /// Reference table with the subroutine extension enabled.
    pub fn with_subroutines() -> Self {
        let mut table = Self::reference();
        let entries = [
            (Opcode::BEGINSUB, gas_cost::BEGINSUB, OpCodeFn(op_beginsub)),
            (Opcode::RETURNSUB, gas_cost::RETURNSUB, OpCodeFn(op_returnsub)),
            (Opcode::JUMPSUB, gas_cost::JUMPSUB, OpCodeFn(op_jumpsub)),
        ];
        for (opcode, fee, handler) in entries {
            table.insert(OpcodeInfo::new(opcode, fee, handler));
        }
        table
    }

    /// The reference instruction set used by the debugger and its tests.
    pub fn reference() -> Self {
        use gas_cost::{BASE, HIGH, JUMPDEST, LOW, MID, VERYLOW, ZERO};

        let mut table = Self::empty();
        let mut add = |opcode: Opcode, fee: u64, handler: OpCodeFn| {
            table.insert(OpcodeInfo::new(opcode, fee, handler));
        };

        add(Opcode::ADD, VERYLOW, OpCodeFn(op_add));
        add(Opcode::MUL, LOW, OpCodeFn(op_mul));
        add(Opcode::SUB, VERYLOW, OpCodeFn(op_sub));
        add(Opcode::DIV, LOW, OpCodeFn(op_div));
        add(Opcode::MOD, LOW, OpCodeFn(op_mod));
        add(Opcode::EXP, gas_cost::EXP_STATIC, OpCodeFn(op_exp));

        add(Opcode::LT, VERYLOW, OpCodeFn(op_lt));
        add(Opcode::GT, VERYLOW, OpCodeFn(op_gt));
        add(Opcode::EQ, VERYLOW, OpCodeFn(op_eq));
        add(Opcode::ISZERO, VERYLOW, OpCodeFn(op_iszero));
        add(Opcode::AND, VERYLOW, OpCodeFn(op_and));
        add(Opcode::OR, VERYLOW, OpCodeFn(op_or));
        add(Opcode::XOR, VERYLOW, OpCodeFn(op_xor));
        add(Opcode::NOT, VERYLOW, OpCodeFn(op_not));
        add(Opcode::BYTE, VERYLOW, OpCodeFn(op_byte));
        add(Opcode::SHL, VERYLOW, OpCodeFn(op_shl));
        add(Opcode::SHR, VERYLOW, OpCodeFn(op_shr));

        add(Opcode::KECCAK256, gas_cost::KECCAK25_STATIC, OpCodeFn(op_keccak256));

        add(Opcode::ADDRESS, BASE, OpCodeFn(op_address));
        add(Opcode::CALLER, BASE, OpCodeFn(op_caller));
        add(Opcode::CALLVALUE, BASE, OpCodeFn(op_callvalue));
        add(Opcode::CALLDATALOAD, VERYLOW, OpCodeFn(op_calldataload));
        add(Opcode::CALLDATASIZE, BASE, OpCodeFn(op_calldatasize));
        add(Opcode::CALLDATACOPY, VERYLOW, OpCodeFn(op_calldatacopy));
        add(Opcode::CODESIZE, BASE, OpCodeFn(op_codesize));
        add(Opcode::CODECOPY, VERYLOW, OpCodeFn(op_codecopy));

        add(Opcode::POP, BASE, OpCodeFn(op_pop));
        add(Opcode::MLOAD, VERYLOW, OpCodeFn(op_mload));
        add(Opcode::MSTORE, VERYLOW, OpCodeFn(op_mstore));
        add(Opcode::MSTORE8, VERYLOW, OpCodeFn(op_mstore8));
        add(Opcode::SLOAD, gas_cost::SLOAD, OpCodeFn(op_sload));
        add(Opcode::SSTORE, ZERO, OpCodeFn(op_sstore));
        add(Opcode::JUMP, MID, OpCodeFn(op_jump));
        add(Opcode::JUMPI, HIGH, OpCodeFn(op_jumpi));
        add(Opcode::PC, BASE, OpCodeFn(op_pc));
        add(Opcode::MSIZE, BASE, OpCodeFn(op_msize));
        add(Opcode::GAS, BASE, OpCodeFn(op_gas));
        add(Opcode::JUMPDEST, JUMPDEST, OpCodeFn(op_jumpdest));

        add(Opcode::PUSH0, BASE, OpCodeFn(op_push0));
        add(Opcode::PUSH1, VERYLOW, OpCodeFn(op_push::<1>));
        add(Opcode::PUSH2, VERYLOW, OpCodeFn(op_push::<2>));
        add(Opcode::PUSH3, VERYLOW, OpCodeFn(op_push::<3>));
        add(Opcode::PUSH4, VERYLOW, OpCodeFn(op_push::<4>));
        add(Opcode::PUSH5, VERYLOW, OpCodeFn(op_push::<5>));
        add(Opcode::PUSH6, VERYLOW, OpCodeFn(op_push::<6>));
        add(Opcode::PUSH7, VERYLOW, OpCodeFn(op_push::<7>));
        add(Opcode::PUSH8, VERYLOW, OpCodeFn(op_push::<8>));
        add(Opcode::PUSH9, VERYLOW, OpCodeFn(op_push::<9>));
        add(Opcode::PUSH10, VERYLOW, OpCodeFn(op_push::<10>));
        add(Opcode::PUSH11, VERYLOW, OpCodeFn(op_push::<11>));
        add(Opcode::PUSH12, VERYLOW, OpCodeFn(op_push::<12>));
        add(Opcode::PUSH13, VERYLOW, OpCodeFn(op_push::<13>));
        add(Opcode::PUSH14, VERYLOW, OpCodeFn(op_push::<14>));
        add(Opcode::PUSH15, VERYLOW, OpCodeFn(op_push::<15>));
        add(Opcode::PUSH16, VERYLOW, OpCodeFn(op_push::<16>));
        add(Opcode::PUSH17, VERYLOW, OpCodeFn(op_push::<17>));
        add(Opcode::PUSH18, VERYLOW, OpCodeFn(op_push::<18>));
        add(Opcode::PUSH19, VERYLOW, OpCodeFn(op_push::<19>));
        add(Opcode::PUSH20, VERYLOW, OpCodeFn(op_push::<20>));
        add(Opcode::PUSH21, VERYLOW, OpCodeFn(op_push::<21>));
        add(Opcode::PUSH22, VERYLOW, OpCodeFn(op_push::<22>));
        add(Opcode::PUSH23, VERYLOW, OpCodeFn(op_push::<23>));
        add(Opcode::PUSH24, VERYLOW, OpCodeFn(op_push::<24>));
        add(Opcode::PUSH25, VERYLOW, OpCodeFn(op_push::<25>));
        add(Opcode::PUSH26, VERYLOW, OpCodeFn(op_push::<26>));
        add(Opcode::PUSH27, VERYLOW, OpCodeFn(op_push::<27>));
        add(Opcode::PUSH28, VERYLOW, OpCodeFn(op_push::<28>));
        add(Opcode::PUSH29, VERYLOW, OpCodeFn(op_push::<29>));
        add(Opcode::PUSH30, VERYLOW, OpCodeFn(op_push::<30>));
        add(Opcode::PUSH31, VERYLOW, OpCodeFn(op_push::<31>));
        add(Opcode::PUSH32, VERYLOW, OpCodeFn(op_push::<32>));

        add(Opcode::DUP1, VERYLOW, OpCodeFn(op_dup::<0>));
        add(Opcode::DUP2, VERYLOW, OpCodeFn(op_dup::<1>));
        add(Opcode::DUP3, VERYLOW, OpCodeFn(op_dup::<2>));
        add(Opcode::DUP4, VERYLOW, OpCodeFn(op_dup::<3>));
        add(Opcode::DUP5, VERYLOW, OpCodeFn(op_dup::<4>));
        add(Opcode::DUP6, VERYLOW, OpCodeFn(op_dup::<5>));
        add(Opcode::DUP7, VERYLOW, OpCodeFn(op_dup::<6>));
        add(Opcode::DUP8, VERYLOW, OpCodeFn(op_dup::<7>));
        add(Opcode::DUP9, VERYLOW, OpCodeFn(op_dup::<8>));
        add(Opcode::DUP10, VERYLOW, OpCodeFn(op_dup::<9>));
        add(Opcode::DUP11, VERYLOW, OpCodeFn(op_dup::<10>));
        add(Opcode::DUP12, VERYLOW, OpCodeFn(op_dup::<11>));
        add(Opcode::DUP13, VERYLOW, OpCodeFn(op_dup::<12>));
        add(Opcode::DUP14, VERYLOW, OpCodeFn(op_dup::<13>));
        add(Opcode::DUP15, VERYLOW, OpCodeFn(op_dup::<14>));
        add(Opcode::DUP16, VERYLOW, OpCodeFn(op_dup::<15>));

        add(Opcode::SWAP1, VERYLOW, OpCodeFn(op_swap::<1>));
        add(Opcode::SWAP2, VERYLOW, OpCodeFn(op_swap::<2>));
        add(Opcode::SWAP3, VERYLOW, OpCodeFn(op_swap::<3>));
        add(Opcode::SWAP4, VERYLOW, OpCodeFn(op_swap::<4>));
        add(Opcode::SWAP5, VERYLOW, OpCodeFn(op_swap::<5>));
        add(Opcode::SWAP6, VERYLOW, OpCodeFn(op_swap::<6>));
        add(Opcode::SWAP7, VERYLOW, OpCodeFn(op_swap::<7>));
        add(Opcode::SWAP8, VERYLOW, OpCodeFn(op_swap::<8>));
        add(Opcode::SWAP9, VERYLOW, OpCodeFn(op_swap::<9>));
        add(Opcode::SWAP10, VERYLOW, OpCodeFn(op_swap::<10>));
        add(Opcode::SWAP11, VERYLOW, OpCodeFn(op_swap::<11>));
        add(Opcode::SWAP12, VERYLOW, OpCodeFn(op_swap::<12>));
        add(Opcode::SWAP13, VERYLOW, OpCodeFn(op_swap::<13>));
        add(Opcode::SWAP14, VERYLOW, OpCodeFn(op_swap::<14>));
        add(Opcode::SWAP15, VERYLOW, OpCodeFn(op_swap::<15>));
        add(Opcode::SWAP16, VERYLOW, OpCodeFn(op_swap::<16>));

        add(Opcode::INVALID, ZERO, OpCodeFn(op_invalid));

        table.insert(OpcodeInfo::halting(
            Opcode::STOP,
            ZERO,
            OpCodeFn(op_stop),
            HaltReason::Stopped,
        ));
        table.insert(OpcodeInfo::halting(
            Opcode::RETURN,
            ZERO,
            OpCodeFn(op_return),
            HaltReason::Stopped,
        ));
        table.insert(OpcodeInfo::halting(
            Opcode::REVERT,
            ZERO,
            OpCodeFn(op_revert),
            HaltReason::Reverted,
        ));

        table
    }
}
