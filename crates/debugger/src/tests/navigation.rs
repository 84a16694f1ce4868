//! Navigation tests: forward/backward/goto/continue cursor operations.

use std::collections::BTreeSet;

use ethereum_types::U256;
use opstep_vm::HaltReason;

use super::helpers::*;
use crate::types::StopReason;

#[test]
fn test_forward_backward_cursor() {
    let mut engine = make_engine(&ADD_PROGRAM);

    assert_eq!(engine.position(), 0);
    assert_eq!(engine.current_snapshot().pc(), 0);

    let step1 = engine.step_forward().unwrap();
    assert_eq!(step1.step_index, 1);
    assert_eq!(step1.pc(), 2);

    let step2 = engine.step_forward().unwrap();
    assert_eq!(step2.step_index, 2);

    let step3 = engine.step_forward().unwrap();
    assert_eq!(step3.step_index, 3);
    assert_eq!(step3.stack_top(1), vec![U256::from(3)]);

    let step2_back = engine.step_backward().unwrap();
    assert_eq!(step2_back.step_index, 2);
    assert_eq!(step2_back.stack_depth(), 2);
    assert_eq!(engine.position(), 2);
}

#[test]
fn test_three_forward_two_back_two_forward_matches_three_forward() {
    let mut direct = make_engine(&ADD_PROGRAM);
    for _ in 0..3 {
        direct.step_forward().unwrap();
    }

    let mut wandering = make_engine(&ADD_PROGRAM);
    for _ in 0..3 {
        wandering.step_forward().unwrap();
    }
    for _ in 0..2 {
        wandering.step_backward().unwrap();
    }
    for _ in 0..2 {
        wandering.step_forward().unwrap();
    }

    assert_eq!(wandering.current_snapshot(), direct.current_snapshot());
    assert_eq!(wandering.len(), 4, "replay must not record new snapshots");
}

#[test]
fn test_backward_restores_previous_snapshot_exactly() {
    let mut engine = make_engine(&LOOP_PROGRAM);
    let mut recorded = vec![engine.current_snapshot().clone()];
    while let Some(snapshot) = engine.step_forward() {
        recorded.push(snapshot.clone());
    }

    for expected in recorded.iter().rev().skip(1) {
        let snapshot = engine.step_backward().unwrap();
        assert_eq!(snapshot, expected);
    }
    assert!(engine.step_backward().is_none());
    assert!(!engine.can_step_backward());
}

#[test]
fn test_cannot_step_past_halt() {
    let mut engine = make_engine(&ADD_PROGRAM);
    assert_eq!(run_to_end(&mut engine), 4);

    assert!(!engine.can_step_forward());
    assert!(engine.step_forward().is_none());
    assert_eq!(
        engine.current_snapshot().halted(),
        Some(HaltReason::Stopped)
    );

    engine.step_backward().unwrap();
    assert!(engine.can_step_forward(), "recorded steps can be replayed");
}

#[test]
fn test_goto_first_middle_last() {
    let mut engine = make_engine(&ADD_PROGRAM);

    let last = engine.goto(4).unwrap();
    assert_eq!(last.step_index, 4);
    assert!(last.is_halted());

    let mid = engine.goto(2).unwrap();
    assert_eq!(mid.step_index, 2);

    let first = engine.goto(0).unwrap();
    assert_eq!(first.step_index, 0);
    assert_eq!(first.pc(), 0);
}

#[test]
fn test_goto_executes_unexplored_steps() {
    let mut engine = make_engine(&LOOP_PROGRAM);
    engine.goto(7).unwrap();
    assert_eq!(engine.len(), 8);
    assert_eq!(engine.position(), 7);
}

#[test]
fn test_continue_stops_at_breakpoint() {
    let mut engine = make_engine(&LOOP_PROGRAM);
    let breakpoints = BTreeSet::from([2]);

    // First arrival at the JUMPDEST is after PUSH1.
    assert_eq!(
        engine.continue_forward(&breakpoints),
        StopReason::Breakpoint { pc: 2 }
    );
    assert_eq!(engine.position(), 1);

    // Next arrival is through the loop's JUMPI.
    assert_eq!(
        engine.continue_forward(&breakpoints),
        StopReason::Breakpoint { pc: 2 }
    );
    assert_eq!(engine.position(), 8);
}

#[test]
fn test_continue_runs_to_halt() {
    let mut engine = make_engine(&LOOP_PROGRAM);
    let reason = engine.continue_forward(&BTreeSet::new());
    assert_eq!(reason, StopReason::Halted(HaltReason::Stopped));
    assert!(engine.current_snapshot().is_halted());

    // Already halted: a second continue reports the same halt.
    assert_eq!(
        engine.continue_forward(&BTreeSet::new()),
        StopReason::Halted(HaltReason::Stopped)
    );
}

#[test]
fn test_reverse_continue() {
    let mut engine = make_engine(&LOOP_PROGRAM);
    engine.continue_forward(&BTreeSet::new());
    let last = engine.position();

    let breakpoints = BTreeSet::from([2]);
    assert_eq!(
        engine.continue_backward(&breakpoints),
        StopReason::Breakpoint { pc: 2 }
    );
    assert!(engine.position() < last);

    assert_eq!(
        engine.continue_backward(&BTreeSet::new()),
        StopReason::StartOfHistory
    );
    assert_eq!(engine.position(), 0);
}

#[test]
fn test_continue_respects_step_limit() {
    // JUMPDEST PUSH1 0 JUMP: loops until gas runs out
    let mut engine = make_engine(&[0x5b, 0x60, 0x00, 0x56]).with_max_continue_steps(10);
    assert_eq!(
        engine.continue_forward(&BTreeSet::new()),
        StopReason::StepLimit { steps: 10 }
    );
    assert_eq!(engine.position(), 10);
}
