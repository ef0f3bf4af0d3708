//! Call-count-bounded recursion.

use crate::bound::Bound;
use crate::budget::Budget;
use crate::enums::LimitKind;
use crate::limited::{Limited, Recurse};

/// Bounds the total number of times a wrapped function's body may run.
///
/// Every admitted call consumes one unit of budget for good, wherever it sits
/// in the call tree. A limit of `n` lets `n + 1` calls run over the lifetime
/// of the wrapping (the first call plus `n` more); every later call, at any
/// depth, returns the default value. [`Limited::reset`] is the only way to
/// get budget back.
///
/// All wrappings made from one limiter (and its clones) share one budget.
#[derive(Debug, Clone)]
pub struct CallLimiter<R> {
    budget: Budget,
    default_return: R,
}

impl<R: Clone> CallLimiter<R> {
    #[must_use]
    pub fn new(limit: i64, default_return: R) -> Self {
        Self::from_bound(Bound::new(limit), default_return)
    }

    #[must_use]
    pub fn from_bound(limit: Bound, default_return: R) -> Self {
        Self {
            budget: Budget::new(limit),
            default_return,
        }
    }

    /// Wrap a recursive body. The body recurses through its first argument.
    pub fn wrap<A, F>(&self, body: F) -> Limited<A, R, F>
    where
        F: Fn(&dyn Recurse<A, R>, A) -> R,
    {
        Limited::new(
            LimitKind::Calls,
            self.budget.clone(),
            self.default_return.clone(),
            body,
        )
    }

    #[must_use]
    pub fn remaining(&self) -> i64 {
        self.budget.remaining()
    }

    #[must_use]
    pub const fn default_return(&self) -> &R {
        &self.default_return
    }
}

impl<R: Clone + Default> CallLimiter<R> {
    /// Limiter whose suppressed calls return `R::default()`.
    #[must_use]
    pub fn with_default(limit: i64) -> Self {
        Self::new(limit, R::default())
    }
}

/// Build a [`CallLimiter`]; `wrap` on the result decorates a body.
#[must_use]
pub fn make_call_limiter<R: Clone>(limit: i64, default_return: R) -> CallLimiter<R> {
    CallLimiter::new(limit, default_return)
}
