//! Tagged result of a limited call.

/// Whether a limited call ran its body or was short-circuited.
///
/// Unlike the plain sentinel returned by [`Limited::call`](crate::Limited::call),
/// an `Outcome` keeps a suppressed call apart from a body that happened to
/// produce the default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome<R> {
    /// The body ran and produced this value.
    Completed(R),
    /// The budget was exhausted; the body did not run.
    Suppressed,
}

impl<R> Outcome<R> {
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    #[must_use]
    pub const fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed)
    }

    /// Convert into an `Option`, discarding the suppressed tag.
    pub fn completed(self) -> Option<R> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Suppressed => None,
        }
    }

    /// Return the computed value, or `default` if suppressed.
    pub fn unwrap_or(self, default: R) -> R {
        self.completed().unwrap_or(default)
    }

    /// Return the computed value, or compute one if suppressed.
    pub fn unwrap_or_else(self, f: impl FnOnce() -> R) -> R {
        self.completed().unwrap_or_else(f)
    }

    pub fn map<U>(self, f: impl FnOnce(R) -> U) -> Outcome<U> {
        match self {
            Self::Completed(value) => Outcome::Completed(f(value)),
            Self::Suppressed => Outcome::Suppressed,
        }
    }
}

impl<R> From<Outcome<R>> for Option<R> {
    fn from(outcome: Outcome<R>) -> Self {
        outcome.completed()
    }
}
