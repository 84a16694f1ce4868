//! Machine state at one point in time, plus the immutable session context
//! instructions read from.

use std::sync::Arc;

use bytes::Bytes;
use ethereum_types::{Address, U256};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::{
    constants::{DEFAULT_GAS_LIMIT, STORAGE_SENTINEL_MARKER},
    errors::{ExceptionalHalt, HaltReason},
    memory::Memory,
    program::Program,
    stack::{ReturnStack, Stack},
};

/// Session parameters, fixed when the debugger starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Environment {
    /// Address of the account whose code is being debugged.
    pub address: Address,
    pub caller: Address,
    pub call_data: Bytes,
    pub call_value: U256,
    pub gas_limit: u64,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            address: Address::zero(),
            caller: Address::zero(),
            call_data: Bytes::new(),
            call_value: U256::zero(),
            gas_limit: DEFAULT_GAS_LIMIT,
        }
    }
}

/// Everything a transition may read besides the state it mutates.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionContext<'a> {
    pub program: &'a Program,
    pub env: &'a Environment,
}

/// Account storage, shared between snapshots until written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Storage {
    slots: Arc<FxHashMap<U256, U256>>,
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unset slots read as zero.
    pub fn get(&self, key: &U256) -> U256 {
        self.slots.get(key).copied().unwrap_or_default()
    }

    pub fn set(&mut self, key: U256, value: U256) {
        let slots = Arc::make_mut(&mut self.slots);
        if value.is_zero() {
            slots.remove(&key);
        } else {
            slots.insert(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn shares_slots_with(&self, other: &Storage) -> bool {
        Arc::ptr_eq(&self.slots, &other.slots)
    }

    /// Slots sorted by key, without entries whose value carries
    /// [`STORAGE_SENTINEL_MARKER`] in its hex form.
    pub fn visible_entries(&self) -> Vec<(U256, U256)> {
        let mut entries: Vec<(U256, U256)> = self
            .slots
            .iter()
            .filter(|(_, value)| !format!("{value:x}").contains(STORAGE_SENTINEL_MARKER))
            .map(|(key, value)| (*key, *value))
            .collect();
        entries.sort_unstable_by_key(|(key, _)| *key);
        entries
    }
}

/// Mutable machine state. Cloning is cheap for memory and storage, which are
/// copied on write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionState {
    pub pc: usize,
    pub stack: Stack,
    pub return_stack: ReturnStack,
    pub memory: Memory,
    pub storage: Storage,
    pub gas_remaining: u64,
    /// `None` while running.
    pub halted: Option<HaltReason>,
    /// Data handed back by RETURN or REVERT.
    pub output: Bytes,
}

impl ExecutionState {
    /// Initial state: pc 0, empty stack and memory, full gas allowance.
    pub fn new(env: &Environment) -> Self {
        Self {
            gas_remaining: env.gas_limit,
            ..Default::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.halted.is_none()
    }

    /// Deduct `gas`, failing without touching the balance when it is short.
    #[inline]
    pub fn consume_gas(&mut self, gas: u64) -> Result<(), ExceptionalHalt> {
        self.gas_remaining = self
            .gas_remaining
            .checked_sub(gas)
            .ok_or(ExceptionalHalt::OutOfGas)?;
        Ok(())
    }

    /// Charge memory expansion up to `new_memory_size` bytes and grow memory.
    pub fn expand_memory(&mut self, new_memory_size: usize) -> Result<(), ExceptionalHalt> {
        let cost = crate::memory::expansion_cost(new_memory_size, self.memory.len())?;
        self.consume_gas(cost)?;
        self.memory.resize(new_memory_size)
    }
}
