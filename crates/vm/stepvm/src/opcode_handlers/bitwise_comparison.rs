use ethereum_types::U256;

use crate::{
    constants::WORD_SIZE_IN_BYTES_USIZE,
    errors::ExceptionalHalt,
    state::{ExecutionContext, ExecutionState},
};

// Comparison and Bitwise Logic Operations (11)
// Opcodes: LT, GT, EQ, ISZERO, AND, OR, XOR, NOT, BYTE, SHL, SHR

fn bool_word(value: bool) -> U256 {
    if value { U256::one() } else { U256::zero() }
}

// LT operation
pub fn op_lt(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [lho, rho] = state.stack.pop()?;
    state.stack.push(bool_word(lho < rho))
}

// GT operation
pub fn op_gt(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [lho, rho] = state.stack.pop()?;
    state.stack.push(bool_word(lho > rho))
}

// EQ operation (equality check)
pub fn op_eq(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [lho, rho] = state.stack.pop()?;
    state.stack.push(bool_word(lho == rho))
}

// ISZERO operation (check if zero)
pub fn op_iszero(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let operand = state.stack.pop1()?;
    state.stack.push(bool_word(operand.is_zero()))
}

// AND operation
pub fn op_and(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [a, b] = state.stack.pop()?;
    state.stack.push(a & b)
}

// OR operation
pub fn op_or(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [a, b] = state.stack.pop()?;
    state.stack.push(a | b)
}

// XOR operation
pub fn op_xor(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [a, b] = state.stack.pop()?;
    state.stack.push(a ^ b)
}

// NOT operation
pub fn op_not(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let a = state.stack.pop1()?;
    state.stack.push(!a)
}

// BYTE operation
pub fn op_byte(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [index, word] = state.stack.pop()?;
    let Ok(byte_index) = usize::try_from(index) else {
        // Index is out of bounds, then push 0
        return state.stack.push_zero();
    };

    // U256::byte counts from the least significant end.
    match WORD_SIZE_IN_BYTES_USIZE
        .checked_sub(byte_index)
        .and_then(|n| n.checked_sub(1))
    {
        Some(little_endian_index) => state
            .stack
            .push(U256::from(word.byte(little_endian_index))),
        None => state.stack.push_zero(),
    }
}

#[allow(clippy::arithmetic_side_effects)]
// SHL operation (shift left)
pub fn op_shl(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [shift, value] = state.stack.pop()?;

    if shift < U256::from(256) {
        state.stack.push(value << shift)
    } else {
        state.stack.push_zero()
    }
}

#[allow(clippy::arithmetic_side_effects)]
// SHR operation (shift right)
pub fn op_shr(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [shift, value] = state.stack.pop()?;

    if shift < U256::from(256) {
        state.stack.push(value >> shift)
    } else {
        state.stack.push_zero()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use crate::{program::Program, state::Environment};

    fn apply(
        handler: fn(&mut ExecutionState, &ExecutionContext<'_>) -> Result<(), ExceptionalHalt>,
        top_first: &[U256],
    ) -> U256 {
        let program = Program::load(Vec::new());
        let env = Environment::default();
        let ctx = ExecutionContext {
            program: &program,
            env: &env,
        };
        let mut state = ExecutionState::new(&env);
        for value in top_first.iter().rev() {
            state.stack.push(*value).unwrap();
        }
        handler(&mut state, &ctx).unwrap();
        state.stack.pop1().unwrap()
    }

    #[test]
    fn comparisons_use_top_as_left_operand() {
        let (one, two) = (U256::one(), U256::from(2));
        assert_eq!(apply(op_lt, &[one, two]), U256::one());
        assert_eq!(apply(op_gt, &[one, two]), U256::zero());
        assert_eq!(apply(op_eq, &[two, two]), U256::one());
        assert_eq!(apply(op_iszero, &[U256::zero()]), U256::one());
    }

    #[test]
    fn byte_counts_from_most_significant() {
        let word = U256::from(0xabcd);
        assert_eq!(apply(op_byte, &[U256::from(31), word]), U256::from(0xcd));
        assert_eq!(apply(op_byte, &[U256::from(30), word]), U256::from(0xab));
        assert_eq!(apply(op_byte, &[U256::from(32), word]), U256::zero());
        assert_eq!(apply(op_byte, &[U256::MAX, word]), U256::zero());
    }

    #[test]
    fn shifts_saturate_at_word_width() {
        assert_eq!(apply(op_shl, &[U256::from(4), U256::one()]), U256::from(16));
        assert_eq!(apply(op_shr, &[U256::from(4), U256::from(16)]), U256::one());
        assert_eq!(apply(op_shl, &[U256::from(256), U256::one()]), U256::zero());
    }

    #[test]
    fn not_flips_every_bit() {
        assert_eq!(apply(op_not, &[U256::zero()]), U256::MAX);
    }
}
