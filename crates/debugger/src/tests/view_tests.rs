//! Rendering views: disassembly, bytecode strip, snapshot view.

use ethereum_types::U256;
use opstep_vm::{OpcodeTable, Program, constants::STORAGE_SENTINEL};

use super::helpers::*;
use crate::view::{DisassemblyRow, SnapshotView, bytecode_strip, disassemble};

#[test]
fn test_disassemble_from_pc() {
    let program = Program::load(ADD_PROGRAM.to_vec());
    let table = OpcodeTable::reference();

    let rows = disassemble(&table, &program, 2, 10);
    assert_eq!(
        rows,
        vec![
            DisassemblyRow {
                offset: 2,
                mnemonic: "PUSH1".to_string(),
                fee: Some(3),
                immediate: vec![0x02],
            },
            DisassemblyRow {
                offset: 4,
                mnemonic: "ADD".to_string(),
                fee: Some(3),
                immediate: vec![],
            },
            DisassemblyRow {
                offset: 5,
                mnemonic: "STOP".to_string(),
                fee: Some(0),
                immediate: vec![],
            },
        ]
    );
}

#[test]
fn test_disassemble_respects_height() {
    let program = Program::load(vec![0x5b; 20]);
    let rows = disassemble(&OpcodeTable::reference(), &program, 0, 10);
    assert_eq!(rows.len(), 10);
    assert_eq!(rows.last().map(|row| row.offset), Some(9));
}

#[test]
fn test_disassemble_unknown_and_truncated() {
    // unassigned 0x0c, then PUSH2 with one byte
    let program = Program::load(vec![0x0c, 0x61, 0xaa]);
    let rows = disassemble(&OpcodeTable::reference(), &program, 0, 10);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].mnemonic, "UNKNOWN");
    assert_eq!(rows[0].fee, None);
    assert_eq!(rows[1].mnemonic, "PUSH2");
    assert_eq!(rows[1].immediate, vec![0xaa]);
}

#[test]
fn test_subroutine_mnemonics_need_extension() {
    let program = Program::load(vec![0x5c]);
    let plain = disassemble(&OpcodeTable::reference(), &program, 0, 1);
    let extended = disassemble(&OpcodeTable::with_subroutines(), &program, 0, 1);
    assert_eq!(plain[0].mnemonic, "UNKNOWN");
    assert_eq!(extended[0].mnemonic, "BEGINSUB");
}

#[test]
fn test_bytecode_strip_brackets_current_instruction() {
    let program = Program::load(ADD_PROGRAM.to_vec());
    assert_eq!(bytecode_strip(&program, 2), "6001[6002]0100");
    assert_eq!(bytecode_strip(&program, 0), "[6001]60020100");
    // pc at the end of code: nothing bracketed
    assert_eq!(bytecode_strip(&program, 6), "600160020100");
}

#[test]
fn test_snapshot_view_contents() {
    // PUSH1 0x2a PUSH1 0x20 MSTORE PUSH1 0x07 PUSH1 0x01 SSTORE PUSH1 0x05
    let mut engine = make_engine(&[
        0x60, 0x2a, 0x60, 0x20, 0x52, 0x60, 0x07, 0x60, 0x01, 0x55, 0x60, 0x05,
    ]);
    engine.goto(7).unwrap();

    let view = SnapshotView::current(&engine, 4);
    assert_eq!(view.step_index, 7);
    assert_eq!(view.stack, vec![U256::from(5)]);
    assert_eq!(view.memory, vec![(32, U256::from(0x2a))]);
    assert_eq!(view.storage, vec![(U256::one(), U256::from(7))]);
    assert_eq!(view.halted, None);
    assert!(view.disassembly.is_empty(), "pc is at the end of the code");
}

#[test]
fn test_storage_view_hides_sentinel() {
    // PUSH32 sentinel DUP1 SSTORE PUSH1 0x01 PUSH1 0x02 SSTORE STOP
    let mut code = vec![0x7f];
    code.extend(STORAGE_SENTINEL.to_big_endian());
    code.extend([0x80, 0x55, 0x60, 0x01, 0x60, 0x02, 0x55, 0x00]);
    let mut engine = make_engine(&code);
    run_to_end(&mut engine);

    let snapshot = engine.current_snapshot();
    assert_eq!(snapshot.state.storage.len(), 2);
    let view = SnapshotView::current(&engine, 10);
    assert_eq!(view.storage, vec![(U256::from(2), U256::one())]);
}
