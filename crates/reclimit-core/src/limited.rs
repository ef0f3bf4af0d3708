//! The wrapped function and its recursion handle.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::budget::Budget;
use crate::enums::LimitKind;
use crate::outcome::Outcome;

/// Recursion handle passed to a wrapped body.
///
/// A body recurses by calling through this handle instead of calling itself
/// directly; that is how the shared budget and default value reach nested
/// calls without appearing in the body's own arguments. Multiple arguments
/// travel as a tuple.
pub trait Recurse<A, R> {
    /// Run one limited call, reporting whether the body ran.
    fn try_call(&self, args: A) -> Outcome<R>;

    /// The value substituted for suppressed calls.
    fn default_return(&self) -> R;

    /// Current value of the shared budget.
    fn remaining(&self) -> i64;

    /// Run one limited call, substituting the default value when suppressed.
    fn call(&self, args: A) -> R {
        match self.try_call(args) {
            Outcome::Completed(value) => value,
            Outcome::Suppressed => self.default_return(),
        }
    }
}

/// A function body wrapped by a [`DepthLimiter`](crate::DepthLimiter) or
/// [`CallLimiter`](crate::CallLimiter).
///
/// Carries the body's name and documentation so callers and debug output
/// can identify it.
pub struct Limited<A, R, F> {
    kind: LimitKind,
    budget: Budget,
    default_return: R,
    body: F,
    name: Cow<'static, str>,
    doc: Option<Cow<'static, str>>,
    _args: PhantomData<fn(A)>,
}

impl<A, R, F> Limited<A, R, F>
where
    R: Clone,
    F: Fn(&dyn Recurse<A, R>, A) -> R,
{
    pub(crate) fn new(kind: LimitKind, budget: Budget, default_return: R, body: F) -> Self {
        Self {
            kind,
            budget,
            default_return,
            body,
            name: Cow::Borrowed(std::any::type_name::<F>()),
            doc: None,
            _args: PhantomData,
        }
    }

    /// Call the wrapped function. Same contract as the body, except that a
    /// call past the bound returns the default value.
    pub fn call(&self, args: A) -> R {
        Recurse::call(self, args)
    }

    /// Call the wrapped function, tagging suppressed calls.
    pub fn try_call(&self, args: A) -> Outcome<R> {
        Recurse::try_call(self, args)
    }

    /// Set the name reported by [`name`](Self::name) and in logs.
    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Attach documentation to the wrapping.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

impl<A, R, F> Limited<A, R, F> {
    /// Name of the wrapped body; the closure's type name unless set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    #[must_use]
    pub const fn kind(&self) -> LimitKind {
        self.kind
    }

    #[must_use]
    pub fn remaining(&self) -> i64 {
        self.budget.remaining()
    }

    #[must_use]
    pub const fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Restore the shared budget to the bound it was created with.
    ///
    /// Affects every wrapping made from the same limiter.
    pub fn reset(&self) {
        self.budget.reset();
    }

    fn suppressed(&self) -> Outcome<R> {
        tracing::debug!(
            name = %self.name,
            kind = %self.kind,
            budget = self.budget.remaining(),
            "recursion bound reached; short-circuiting"
        );
        Outcome::Suppressed
    }
}

impl<A, R, F> Recurse<A, R> for Limited<A, R, F>
where
    R: Clone,
    F: Fn(&dyn Recurse<A, R>, A) -> R,
{
    fn try_call(&self, args: A) -> Outcome<R> {
        if self.kind.restores_budget() {
            let Some(_level) = self.budget.descend() else {
                return self.suppressed();
            };
            tracing::trace!(name = %self.name, remaining = self.budget.remaining(), "descending");
            Outcome::Completed((self.body)(self, args))
        } else {
            if !self.budget.consume() {
                return self.suppressed();
            }
            tracing::trace!(name = %self.name, remaining = self.budget.remaining(), "call admitted");
            Outcome::Completed((self.body)(self, args))
        }
    }

    fn default_return(&self) -> R {
        self.default_return.clone()
    }

    fn remaining(&self) -> i64 {
        self.budget.remaining()
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for Limited<A, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Limited")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("remaining", &self.budget.remaining())
            .field("initial", &self.budget.initial())
            .field("default_return", &self.default_return)
            .finish_non_exhaustive()
    }
}
