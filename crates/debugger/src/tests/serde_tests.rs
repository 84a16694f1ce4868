//! Serialization tests for debugger types.

use bytes::Bytes;
use opstep_vm::{ExceptionalHalt, HaltReason};

use super::helpers::*;
use crate::types::{SessionSummary, StopReason};
use crate::view::SnapshotView;

#[test]
fn snapshot_serializes() {
    let mut engine = make_engine(&ADD_PROGRAM);
    engine.goto(2).unwrap();

    let json = serde_json::to_value(engine.current_snapshot()).expect("Snapshot should serialize");
    assert_eq!(json["step_index"], 2);
    assert_eq!(json["gas_used"], 6);
    assert_eq!(json["state"]["pc"], 4);
    assert!(json["state"]["halted"].is_null());
}

#[test]
fn halted_snapshot_serializes_reason() {
    let mut engine = make_engine(&[0x56]);
    engine.step_forward().unwrap();

    let json = serde_json::to_value(engine.current_snapshot()).expect("serialize");
    assert_eq!(
        json["state"]["halted"],
        serde_json::json!({ "Exception": "StackUnderflow" })
    );
}

#[test]
fn session_summary_serializes() {
    let summary = SessionSummary {
        steps_recorded: 5,
        position: 4,
        gas_used: 9,
        halted: Some(HaltReason::Exception(ExceptionalHalt::OutOfGas)),
        output: Bytes::new(),
    };
    let json = serde_json::to_value(&summary).expect("SessionSummary should serialize");
    assert_eq!(json["steps_recorded"], 5);
    assert_eq!(json["gas_used"], 9);
    assert_eq!(json["halted"]["Exception"], "OutOfGas");
}

#[test]
fn stop_reason_serializes() {
    let json = serde_json::to_value(StopReason::Breakpoint { pc: 7 }).expect("serialize");
    assert_eq!(json["Breakpoint"]["pc"], 7);
}

#[test]
fn snapshot_view_serializes() {
    let mut engine = make_engine(&ADD_PROGRAM);
    engine.goto(3).unwrap();

    let json = serde_json::to_value(SnapshotView::current(&engine, 2)).expect("serialize");
    assert_eq!(json["pc"], 5);
    assert_eq!(json["disassembly"][0]["mnemonic"], "STOP");
    assert_eq!(json["stack"].as_array().map(Vec::len), Some(1));
}
