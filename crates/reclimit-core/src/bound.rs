//! Integer bounds for depth and call limiters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::LimitError;

/// A depth or call bound.
///
/// Any `i64` is a valid bound. `n >= 0` admits `n + 1` executions (levels for
/// depth, total calls for call count). Every negative bound behaves like
/// [`Bound::EXHAUSTED`]: the very first call is already suppressed.
///
/// The fallible conversions reject inputs that are not integers, such as
/// `"3.5"` or `2.5_f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bound(i64);

impl Bound {
    /// A bound that suppresses every call, including the first.
    pub const EXHAUSTED: Self = Self(-1);

    /// A bound that admits exactly one execution.
    pub const ONCE: Self = Self(0);

    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether a budget starting at this bound suppresses its first call.
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Bound {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Bound> for i64 {
    fn from(bound: Bound) -> Self {
        bound.0
    }
}

impl FromStr for Bound {
    type Err = LimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| LimitError::InvalidBound {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl TryFrom<f64> for Bound {
    type Error = LimitError;

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let reject = |reason: &str| LimitError::InvalidBound {
            input: value.to_string(),
            reason: reason.to_string(),
        };

        if !value.is_finite() {
            return Err(reject("not a finite number"));
        }
        if value.fract() != 0.0 {
            return Err(reject("not an integer"));
        }
        // i64::MAX as f64 rounds up to 2^63, which is already out of range.
        if value < i64::MIN as f64 || value >= i64::MAX as f64 {
            return Err(reject("out of range for i64"));
        }
        Ok(Self(value as i64))
    }
}
