//! Limiter kinds.

use std::fmt;

/// Which quantity a limiter bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitKind {
    /// Nesting depth. Budget is restored when a call returns.
    Depth,
    /// Total executions. Budget is consumed permanently.
    Calls,
}

impl LimitKind {
    /// Return the string representation used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Depth => "depth",
            Self::Calls => "calls",
        }
    }

    /// Whether a finished call gives its budget back.
    #[must_use]
    pub const fn restores_budget(self) -> bool {
        matches!(self, Self::Depth)
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
