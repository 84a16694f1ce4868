use crate::{
    errors::ExceptionalHalt,
    memory::calculate_memory_size,
    opcode_handlers::{current_instruction_offset, size_offset_to_usize},
    state::{ExecutionContext, ExecutionState},
};

// System Operations (4)
// Opcodes: STOP, RETURN, REVERT, INVALID
//
// The table marks STOP, RETURN and REVERT as halting; the handlers only
// produce the output data.

// STOP operation
pub fn op_stop(
    _state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    Ok(())
}

// RETURN operation
pub fn op_return(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    capture_output(state)
}

// REVERT operation
pub fn op_revert(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    capture_output(state)
}

// INVALID operation
pub fn op_invalid(
    state: &mut ExecutionState,
    ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let byte = ctx
        .program
        .opcode_at(current_instruction_offset(state.pc))
        .unwrap_or(0xfe);
    Err(ExceptionalHalt::InvalidOpcode(byte))
}

fn capture_output(state: &mut ExecutionState) -> Result<(), ExceptionalHalt> {
    let [offset, size] = state.stack.pop()?;
    let (size, offset) = size_offset_to_usize(size, offset)?;

    state.expand_memory(calculate_memory_size(offset, size)?)?;

    state.output = state.memory.load_range(offset, size)?;
    Ok(())
}
