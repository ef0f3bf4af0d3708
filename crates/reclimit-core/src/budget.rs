//! The shared budget cell.
//!
//! One [`Budget`] exists per limiter. Every wrapping made from that limiter,
//! and every recursive call reached through those wrappings, reads and
//! writes the same cell. The cell lives behind an `Rc`, so a budget is
//! neither `Send` nor `Sync` and cannot be shared across threads.

use std::cell::Cell;
use std::rc::Rc;

use crate::bound::Bound;

/// Remaining levels (depth) or remaining calls (call count).
///
/// Cloning a `Budget` yields another handle to the same cell.
#[derive(Debug, Clone)]
pub struct Budget {
    state: Rc<BudgetState>,
    initial: Bound,
}

#[derive(Debug)]
struct BudgetState {
    remaining: Cell<i64>,
    /// Levels taken by live [`DepthGuard`]s.
    in_flight: Cell<i64>,
}

impl Budget {
    #[must_use]
    pub fn new(bound: Bound) -> Self {
        Self {
            state: Rc::new(BudgetState {
                remaining: Cell::new(bound.get()),
                in_flight: Cell::new(0),
            }),
            initial: bound,
        }
    }

    /// Current value of the cell. Negative means exhausted.
    #[must_use]
    pub fn remaining(&self) -> i64 {
        self.state.remaining.get()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() < 0
    }

    /// The bound this budget was created with.
    #[must_use]
    pub const fn initial(&self) -> Bound {
        self.initial
    }

    /// Take one level for the duration of a call.
    ///
    /// Returns `None` without touching the cell when the budget is exhausted.
    /// Otherwise decrements and hands back a guard that increments again when
    /// dropped, including during unwinding.
    #[must_use]
    pub fn descend(&self) -> Option<DepthGuard<'_>> {
        if self.take() {
            let in_flight = &self.state.in_flight;
            in_flight.set(in_flight.get() + 1);
            Some(DepthGuard { budget: self })
        } else {
            None
        }
    }

    /// Take one call permanently. Returns `false` when exhausted.
    #[must_use]
    pub fn consume(&self) -> bool {
        self.take()
    }

    /// Put the cell back to its initial bound.
    ///
    /// Levels still held by live depth guards stay deducted, so the cell
    /// lands exactly on the initial bound once they are all released.
    pub fn reset(&self) {
        let held = self.state.in_flight.get();
        self.state
            .remaining
            .set(self.initial.get().saturating_sub(held));
    }

    /// Whether two budgets are handles to the same cell.
    #[must_use]
    pub fn shares_cell_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    fn take(&self) -> bool {
        let remaining = &self.state.remaining;
        let current = remaining.get();
        if current < 0 {
            return false;
        }
        // current >= 0, so this never underflows.
        remaining.set(current - 1);
        true
    }
}

/// Gives one depth level back to its [`Budget`] on drop.
#[derive(Debug)]
#[must_use = "dropping the guard immediately restores the level"]
pub struct DepthGuard<'a> {
    budget: &'a Budget,
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        let state = &self.budget.state;
        state.in_flight.set(state.in_flight.get() - 1);
        state.remaining.set(state.remaining.get().saturating_add(1));
    }
}
