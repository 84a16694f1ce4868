//! Operand stack and subroutine return stack.

use ethereum_types::U256;
use serde::Serialize;

use crate::{
    constants::{RETURN_STACK_LIMIT, STACK_LIMIT},
    errors::ExceptionalHalt,
};

/// LIFO stack of 256-bit words, bounded at [`STACK_LIMIT`].
///
/// Index 0 of the backing vector is the bottom; `peek(0)` is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stack {
    values: Vec<U256>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn push(&mut self, value: U256) -> Result<(), ExceptionalHalt> {
        if self.values.len() >= STACK_LIMIT {
            return Err(ExceptionalHalt::StackOverflow);
        }
        self.values.push(value);
        Ok(())
    }

    #[inline]
    pub fn push_zero(&mut self) -> Result<(), ExceptionalHalt> {
        self.push(U256::zero())
    }

    /// Pop `N` words at once, top of the stack first.
    ///
    /// Either all `N` words are removed or the stack is left untouched.
    #[inline]
    pub fn pop<const N: usize>(&mut self) -> Result<[U256; N], ExceptionalHalt> {
        let new_len = self
            .values
            .len()
            .checked_sub(N)
            .ok_or(ExceptionalHalt::StackUnderflow)?;
        let mut popped = [U256::zero(); N];
        for (slot, value) in popped.iter_mut().zip(self.values.drain(new_len..).rev()) {
            *slot = value;
        }
        Ok(popped)
    }

    #[inline]
    pub fn pop1(&mut self) -> Result<U256, ExceptionalHalt> {
        self.values.pop().ok_or(ExceptionalHalt::StackUnderflow)
    }

    /// Word at `index` from the top, without removing it.
    pub fn peek(&self, index: usize) -> Option<U256> {
        let position = self.values.len().checked_sub(index)?.checked_sub(1)?;
        self.values.get(position).copied()
    }

    /// DUP semantics: copy the word `depth` slots below the top onto the top.
    pub fn dup(&mut self, depth: usize) -> Result<(), ExceptionalHalt> {
        let value = self.peek(depth).ok_or(ExceptionalHalt::StackUnderflow)?;
        self.push(value)
    }

    /// SWAP semantics: exchange the top with the word `depth` slots below it.
    pub fn swap(&mut self, depth: usize) -> Result<(), ExceptionalHalt> {
        let len = self.values.len();
        let top = len.checked_sub(1).ok_or(ExceptionalHalt::StackUnderflow)?;
        let other = top
            .checked_sub(depth)
            .ok_or(ExceptionalHalt::StackUnderflow)?;
        self.values.swap(top, other);
        Ok(())
    }

    /// Iterate from the top of the stack down.
    pub fn iter_top_first(&self) -> impl Iterator<Item = &U256> {
        self.values.iter().rev()
    }
}

/// Offsets saved by JUMPSUB, bounded at [`RETURN_STACK_LIMIT`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReturnStack {
    offsets: Vec<usize>,
}

impl ReturnStack {
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn push(&mut self, offset: usize) -> Result<(), ExceptionalHalt> {
        if self.offsets.len() >= RETURN_STACK_LIMIT {
            return Err(ExceptionalHalt::ReturnStackOverflow);
        }
        self.offsets.push(offset);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<usize, ExceptionalHalt> {
        self.offsets
            .pop()
            .ok_or(ExceptionalHalt::ReturnStackUnderflow)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn pop_returns_top_first() {
        let mut stack = Stack::new();
        stack.push(U256::from(1)).unwrap();
        stack.push(U256::from(2)).unwrap();
        stack.push(U256::from(3)).unwrap();

        let [a, b] = stack.pop().unwrap();
        assert_eq!(a, U256::from(3));
        assert_eq!(b, U256::from(2));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn failed_pop_leaves_stack_untouched() {
        let mut stack = Stack::new();
        stack.push(U256::from(7)).unwrap();
        assert_eq!(stack.pop::<2>(), Err(ExceptionalHalt::StackUnderflow));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(0), Some(U256::from(7)));
    }

    #[test]
    fn push_past_limit_overflows() {
        let mut stack = Stack::new();
        for i in 0..STACK_LIMIT {
            stack.push(U256::from(i)).unwrap();
        }
        assert_eq!(stack.push_zero(), Err(ExceptionalHalt::StackOverflow));
        assert_eq!(stack.len(), STACK_LIMIT);
    }

    #[test]
    fn dup_and_swap() {
        let mut stack = Stack::new();
        stack.push(U256::from(1)).unwrap();
        stack.push(U256::from(2)).unwrap();

        stack.dup(1).unwrap();
        assert_eq!(stack.peek(0), Some(U256::from(1)));

        stack.swap(2).unwrap();
        let top: Vec<_> = stack.iter_top_first().copied().collect();
        assert_eq!(top, vec![U256::from(1), U256::from(2), U256::from(1)]);

        assert_eq!(stack.swap(3), Err(ExceptionalHalt::StackUnderflow));
    }

    #[test]
    fn return_stack_bounds() {
        let mut rs = ReturnStack::default();
        assert_eq!(rs.pop(), Err(ExceptionalHalt::ReturnStackUnderflow));
        for i in 0..RETURN_STACK_LIMIT {
            rs.push(i).unwrap();
        }
        assert_eq!(rs.push(0), Err(ExceptionalHalt::ReturnStackOverflow));
    }
}
