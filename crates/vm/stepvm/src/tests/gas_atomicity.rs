//! A failed instruction leaves nothing behind but the halt flag.

use ethereum_types::U256;

use super::helpers::*;
use crate::{
    errors::{ExceptionalHalt, HaltReason},
    gas_cost,
    stepper::StepOutcome,
};

const OUT_OF_GAS: Option<HaltReason> = Some(HaltReason::Exception(ExceptionalHalt::OutOfGas));

#[test]
fn test_base_fee_shortfall_keeps_stack() {
    // PUSH1 0x01 PUSH1 0x02 ADD with exactly enough gas for the pushes
    let machine = TestMachine::new(vec![0x60, 0x01, 0x60, 0x02, 0x01]).with_gas(6);
    let before = machine.step_n(2);
    assert!(before.is_running());

    let outcome = machine.stepper().step(&before);
    assert_eq!(outcome.halt_reason(), OUT_OF_GAS);

    let after = outcome.state();
    assert_eq!(after.stack, before.stack);
    assert_eq!(after.pc, before.pc);
    assert_eq!(after.gas_remaining, 0);
}

#[test]
fn test_dynamic_fee_shortfall_keeps_memory_and_stack() {
    // PUSH1 0xff PUSH1 0x00 MSTORE: base fee paid, expansion unaffordable
    let code = vec![0x60, 0xff, 0x60, 0x00, 0x52];
    let gas = 2 * gas_cost::VERYLOW + gas_cost::VERYLOW + 2;
    let machine = TestMachine::new(code).with_gas(gas);
    let before = machine.step_n(2);

    let outcome = machine.stepper().step(&before);
    assert_eq!(outcome.halt_reason(), OUT_OF_GAS);
    let after = outcome.state();
    assert!(after.memory.is_empty());
    assert_eq!(after.stack, before.stack);
    assert_eq!(after.gas_remaining, before.gas_remaining);
}

#[test]
fn test_sstore_shortfall_keeps_storage() {
    // PUSH1 0x01 PUSH1 0x01 SSTORE without the 20k for a fresh slot
    let machine = TestMachine::new(vec![0x60, 0x01, 0x60, 0x01, 0x55]).with_gas(10_000);
    let before = machine.step_n(2);

    let outcome = machine.stepper().step(&before);
    assert_eq!(outcome.halt_reason(), OUT_OF_GAS);
    assert!(outcome.state().storage.is_empty());
    assert_eq!(outcome.state().stack.len(), 2);
}

#[test]
fn test_gas_is_monotonic_until_halt() {
    // PUSH1 0x03 JUMPDEST PUSH1 0x01 SWAP1 SUB DUP1 PUSH1 0x02 JUMPI STOP
    let machine = TestMachine::new(vec![
        0x60, 0x03, 0x5b, 0x60, 0x01, 0x90, 0x03, 0x80, 0x60, 0x02, 0x57, 0x00,
    ]);
    let stepper = machine.stepper();
    let mut state = machine.initial_state();
    let mut steps = 0;

    loop {
        let outcome = stepper.step(&state);
        assert!(outcome.state().gas_remaining <= state.gas_remaining);
        steps += 1;
        match outcome {
            StepOutcome::Continued(next) => state = next,
            StepOutcome::Halted(last, reason) => {
                assert_eq!(reason, HaltReason::Stopped);
                assert_eq!(last.stack.peek(0), Some(U256::zero()));
                break;
            }
        }
        assert!(steps < 1_000, "loop did not terminate");
    }
}

#[test]
fn test_stack_overflow_is_atomic() {
    // 1025 x PUSH0
    let machine = TestMachine::new(vec![0x5f; 1025]);
    let full = machine.step_n(1024);
    assert_eq!(full.stack.len(), 1024);

    let outcome = machine.stepper().step(&full);
    assert_eq!(
        outcome.halt_reason(),
        Some(HaltReason::Exception(ExceptionalHalt::StackOverflow))
    );
    assert_eq!(outcome.state().stack.len(), 1024);
    assert_eq!(outcome.state().gas_remaining, full.gas_remaining);
}
