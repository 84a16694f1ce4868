//! Jump destination validation.

use ethereum_types::U256;

use super::helpers::*;
use crate::errors::{ExceptionalHalt, HaltReason};

const INVALID_JUMP: HaltReason = HaltReason::Exception(ExceptionalHalt::InvalidJump);

#[test]
fn test_jump_into_push_immediate_is_invalid() {
    // PUSH1 0x04 JUMP PUSH1 0x5b JUMPDEST ; offset 4 is the 0x5b immediate
    let machine = TestMachine::new(vec![0x60, 0x04, 0x56, 0x60, 0x5b, 0x5b]);
    let (state, reason) = machine.run_to_halt();

    assert_eq!(reason, INVALID_JUMP);
    assert_eq!(state.pc, 2, "pc stays on the JUMP");
}

#[test]
fn test_jump_to_real_jumpdest() {
    // PUSH1 0x05 JUMP PUSH1 0x5b JUMPDEST PUSH1 0x09 STOP
    let machine = TestMachine::new(vec![0x60, 0x05, 0x56, 0x60, 0x5b, 0x5b, 0x60, 0x09, 0x00]);
    let (state, reason) = machine.run_to_halt();

    assert_eq!(reason, HaltReason::Stopped);
    assert_eq!(state.stack.peek(0), Some(U256::from(9)));
}

#[test]
fn test_jump_to_non_jumpdest_instruction() {
    // PUSH1 0x00 JUMP
    let machine = TestMachine::new(vec![0x60, 0x00, 0x56]);
    assert_eq!(machine.run_to_halt().1, INVALID_JUMP);
}

#[test]
fn test_jump_past_end_is_invalid() {
    // PUSH32 0xff..ff JUMP
    let mut code = vec![0x7f];
    code.extend([0xff; 32]);
    code.push(0x56);
    let machine = TestMachine::new(code);
    assert_eq!(machine.run_to_halt().1, INVALID_JUMP);
}

#[test]
fn test_jumpi_validates_only_when_taken() {
    // PUSH1 0x01 PUSH1 0x63 JUMPI: taken, 0x63 is not a destination
    let taken = TestMachine::new(vec![0x60, 0x01, 0x60, 0x63, 0x57]);
    assert_eq!(taken.run_to_halt().1, INVALID_JUMP);

    // PUSH1 0x00 PUSH1 0x63 JUMPI STOP: not taken
    let not_taken = TestMachine::new(vec![0x60, 0x00, 0x60, 0x63, 0x57, 0x00]);
    assert_eq!(not_taken.run_to_halt().1, HaltReason::Stopped);
}
