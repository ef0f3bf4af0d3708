//! Default depth bound.

use reclimit_core::Bound;
use serde::{Deserialize, Serialize};

/// Default number of extra nesting levels.
const fn default_bound() -> Bound {
    Bound::new(64)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DepthConfig {
    /// Depth handed to limiters built from this config.
    #[serde(default = "default_bound")]
    pub bound: Bound,
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            bound: default_bound(),
        }
    }
}
