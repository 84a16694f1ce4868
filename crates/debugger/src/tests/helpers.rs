//! Shared test helpers for opstep-debugger tests.

use opstep_vm::{Environment, OpcodeTable, Program};

use crate::engine::DebugEngine;

/// `PUSH1 1, PUSH1 2, ADD, STOP`: four instructions, five snapshots.
pub const ADD_PROGRAM: [u8; 6] = [0x60, 0x01, 0x60, 0x02, 0x01, 0x00];

/// Counts down from 3 through a JUMPI loop, then stops.
pub const LOOP_PROGRAM: [u8; 12] = [
    0x60, 0x03, // PUSH1 3
    0x5b, // JUMPDEST (offset 2)
    0x60, 0x01, // PUSH1 1
    0x90, // SWAP1
    0x03, // SUB
    0x80, // DUP1
    0x60, 0x02, // PUSH1 2
    0x57, // JUMPI
    0x00, // STOP
];

pub fn make_engine(code: &[u8]) -> DebugEngine {
    DebugEngine::new(
        Program::load(code.to_vec()),
        OpcodeTable::reference(),
        Environment::default(),
    )
}

pub fn make_engine_with_gas(code: &[u8], gas_limit: u64) -> DebugEngine {
    DebugEngine::new(
        Program::load(code.to_vec()),
        OpcodeTable::reference(),
        Environment {
            gas_limit,
            ..Default::default()
        },
    )
}

/// Step forward until halted, returning the number of steps taken.
pub fn run_to_end(engine: &mut DebugEngine) -> usize {
    let mut steps = 0;
    while engine.step_forward().is_some() {
        steps += 1;
        assert!(steps < 100_000, "program did not halt");
    }
    steps
}
