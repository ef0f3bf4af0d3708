//! Depth-bounded recursion.

use crate::bound::Bound;
use crate::budget::Budget;
use crate::enums::LimitKind;
use crate::limited::{Limited, Recurse};

/// Bounds how deeply a wrapped function may nest recursive calls.
///
/// Each call takes one level before running the body and gives it back when
/// the body returns, so depth is a property of the current path rather than
/// of total work: two sibling calls made by the same parent each get the
/// same allowance. A depth of `n` lets `n + 1` levels run; depth `0` runs
/// only the initial call and suppresses the first recursive call it makes.
///
/// All wrappings made from one limiter (and its clones) share one budget.
#[derive(Debug, Clone)]
pub struct DepthLimiter<R> {
    budget: Budget,
    default_return: R,
}

impl<R: Clone> DepthLimiter<R> {
    #[must_use]
    pub fn new(depth: i64, default_return: R) -> Self {
        Self::from_bound(Bound::new(depth), default_return)
    }

    #[must_use]
    pub fn from_bound(depth: Bound, default_return: R) -> Self {
        Self {
            budget: Budget::new(depth),
            default_return,
        }
    }

    /// Wrap a recursive body. The body recurses through its first argument.
    pub fn wrap<A, F>(&self, body: F) -> Limited<A, R, F>
    where
        F: Fn(&dyn Recurse<A, R>, A) -> R,
    {
        Limited::new(
            LimitKind::Depth,
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

impl<R: Clone + Default> DepthLimiter<R> {
    /// Limiter whose suppressed calls return `R::default()`.
    #[must_use]
    pub fn with_default(depth: i64) -> Self {
        Self::new(depth, R::default())
    }
}

/// Build a [`DepthLimiter`]; `wrap` on the result decorates a body.
#[must_use]
pub fn make_depth_limiter<R: Clone>(depth: i64, default_return: R) -> DepthLimiter<R> {
    DepthLimiter::new(depth, default_return)
}
