//! Append-only snapshot log with a movable cursor.
//!
//! Entry `i` is the state after `i` instructions. Stepping backward and
//! re-stepping over recorded entries only moves the cursor; the stepper runs
//! only when the cursor is on the last entry. Entries are never removed or
//! modified, so every read of an index returns the same snapshot for the
//! lifetime of the session.

use opstep_vm::{ExecutionState, Stepper};
use tracing::debug;

use crate::types::Snapshot;

#[derive(Debug, Clone)]
pub struct History {
    /// Never empty: index 0 is the initial state.
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    pub fn new(initial: ExecutionState) -> Self {
        Self {
            snapshots: vec![Snapshot {
                step_index: 0,
                state: initial,
                gas_used: 0,
            }],
            cursor: 0,
        }
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> &Snapshot {
        // cursor < snapshots.len() always holds
        &self.snapshots[self.cursor]
    }

    /// Furthest snapshot recorded.
    pub fn frontier(&self) -> &Snapshot {
        &self.snapshots[self.highest_reached()]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots recorded, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Highest step index recorded.
    pub fn highest_reached(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// At most `count` snapshots starting from `start`.
    pub fn snapshots_range(&self, start: usize, count: usize) -> &[Snapshot] {
        let len = self.snapshots.len();
        if start >= len {
            return &[];
        }
        let end = len.min(start.saturating_add(count));
        &self.snapshots[start..end]
    }

    pub fn can_step_backward(&self) -> bool {
        self.cursor > 0
    }

    /// True when a later snapshot is recorded or the current one can still
    /// execute.
    pub fn can_step_forward(&self) -> bool {
        self.cursor < self.highest_reached() || !self.current().is_halted()
    }

    /// Move the cursor back by one. `None` at step 0.
    pub fn step_backward(&mut self) -> Option<&Snapshot> {
        self.cursor = self.cursor.checked_sub(1)?;
        Some(self.current())
    }

    /// Move the cursor forward by one, executing an instruction only when the
    /// cursor is on the frontier. `None` when the frontier has halted.
    pub fn step_forward(&mut self, stepper: &Stepper<'_>) -> Option<&Snapshot> {
        if self.cursor < self.highest_reached() {
            self.cursor = self.cursor.saturating_add(1);
            debug!(step = self.cursor, "replayed recorded step");
            return Some(self.current());
        }

        let frontier = self.frontier();
        if frontier.is_halted() {
            return None;
        }

        let next_state = stepper.step(&frontier.state).into_state();
        let spent = frontier
            .state
            .gas_remaining
            .saturating_sub(next_state.gas_remaining);
        let snapshot = Snapshot {
            step_index: self.snapshots.len(),
            gas_used: frontier.gas_used.saturating_add(spent),
            state: next_state,
        };
        debug!(
            step = snapshot.step_index,
            pc = snapshot.pc(),
            gas_used = snapshot.gas_used,
            halted = ?snapshot.halted(),
            "recorded new step"
        );

        self.snapshots.push(snapshot);
        self.cursor = self.highest_reached();
        Some(self.current())
    }
}
