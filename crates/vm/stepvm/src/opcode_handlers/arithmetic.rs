use crate::{
    errors::ExceptionalHalt,
    gas_cost,
    state::{ExecutionContext, ExecutionState},
};

// Arithmetic Operations (6)
// Opcodes: ADD, MUL, SUB, DIV, MOD, EXP

// ADD operation
#[inline]
pub fn op_add(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [augend, addend] = state.stack.pop()?;
    let sum = augend.overflowing_add(addend).0;
    state.stack.push(sum)
}

// MUL operation
#[inline]
pub fn op_mul(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [multiplicand, multiplier] = state.stack.pop()?;
    let product = multiplicand.overflowing_mul(multiplier).0;
    state.stack.push(product)
}

// SUB operation
#[inline]
pub fn op_sub(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [minuend, subtrahend] = state.stack.pop()?;
    let difference = minuend.overflowing_sub(subtrahend).0;
    state.stack.push(difference)
}

// DIV operation
pub fn op_div(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [dividend, divisor] = state.stack.pop()?;
    let Some(quotient) = dividend.checked_div(divisor) else {
        return state.stack.push_zero();
    };
    state.stack.push(quotient)
}

// MOD operation
pub fn op_mod(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [dividend, divisor] = state.stack.pop()?;
    let remainder = dividend.checked_rem(divisor).unwrap_or_default();
    state.stack.push(remainder)
}

// EXP operation
pub fn op_exp(
    state: &mut ExecutionState,
    _ctx: &ExecutionContext<'_>,
) -> Result<(), ExceptionalHalt> {
    let [base, exponent] = state.stack.pop()?;

    state.consume_gas(gas_cost::exp(exponent)?)?;

    let power = base.overflowing_pow(exponent).0;
    state.stack.push(power)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use ethereum_types::U256;

    use super::*;
    use crate::{program::Program, state::Environment};

    fn run(
        handler: fn(&mut ExecutionState, &ExecutionContext<'_>) -> Result<(), ExceptionalHalt>,
        operands: &[u64],
    ) -> ExecutionState {
        let program = Program::load(Vec::new());
        let env = Environment::default();
        let ctx = ExecutionContext {
            program: &program,
            env: &env,
        };
        let mut state = ExecutionState::new(&env);
        // Operands are listed bottom first, so the last one ends up on top.
        for operand in operands {
            state.stack.push(U256::from(*operand)).unwrap();
        }
        handler(&mut state, &ctx).unwrap();
        state
    }

    #[test]
    fn add_wraps() {
        let program = Program::load(Vec::new());
        let env = Environment::default();
        let ctx = ExecutionContext {
            program: &program,
            env: &env,
        };
        let mut state = ExecutionState::new(&env);
        state.stack.push(U256::MAX).unwrap();
        state.stack.push(U256::from(2)).unwrap();
        op_add(&mut state, &ctx).unwrap();
        assert_eq!(state.stack.peek(0), Some(U256::one()));
    }

    #[test]
    fn sub_takes_top_as_minuend() {
        let state = run(op_sub, &[3, 10]);
        assert_eq!(state.stack.peek(0), Some(U256::from(7)));
    }

    #[test]
    fn division_by_zero_is_zero() {
        assert_eq!(run(op_div, &[0, 10]).stack.peek(0), Some(U256::zero()));
        assert_eq!(run(op_mod, &[0, 10]).stack.peek(0), Some(U256::zero()));
        assert_eq!(run(op_mod, &[4, 10]).stack.peek(0), Some(U256::from(2)));
    }

    #[test]
    fn exp_charges_dynamic_gas() {
        let state = run(op_exp, &[10, 2]);
        assert_eq!(state.stack.peek(0), Some(U256::from(1024)));
        assert_eq!(
            state.gas_remaining,
            crate::constants::DEFAULT_GAS_LIMIT - gas_cost::EXP_DYNAMIC_BASE
        );
    }
}
