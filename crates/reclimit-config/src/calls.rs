//! Default call bound.

use reclimit_core::Bound;
use serde::{Deserialize, Serialize};

/// Default number of extra calls after the first.
const fn default_bound() -> Bound {
    Bound::new(1024)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CallsConfig {
    /// Call limit handed to limiters built from this config.
    #[serde(default = "default_bound")]
    pub bound: Bound,
}

impl Default for CallsConfig {
    fn default() -> Self {
        Self {
            bound: default_bound(),
        }
    }
}
