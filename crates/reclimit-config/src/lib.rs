//! # reclimit-config
//!
//! Layered configuration of default recursion bounds using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RECLIMIT_*` prefix, `__` as separator)
//! 2. Project-level `.reclimit/config.toml`
//! 3. User-level `~/.config/reclimit/config.toml`, or `$RECLIMIT_HOME/config.toml`
//!    when `RECLIMIT_HOME` is set
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RECLIMIT_DEPTH__BOUND` -> `depth.bound` and
//! `RECLIMIT_CALLS__BOUND` -> `calls.bound`.
//!
//! # Usage
//!
//! ```no_run
//! use reclimit_config::LimitsConfig;
//!
//! let config = LimitsConfig::load().expect("config");
//! let fib = config.depth_limiter(0_u64).wrap(|this, n: u64| {
//!     if n < 2 { n } else { this.call(n - 1) + this.call(n - 2) }
//! });
//! println!("{}", fib.call(20));
//! ```

mod calls;
mod depth;
mod error;

pub use calls::CallsConfig;
pub use depth::DepthConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use reclimit_core::{Bound, CallLimiter, DepthLimiter};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Overrides the directory holding the user-global `config.toml`.
pub const HOME_ENV: &str = "RECLIMIT_HOME";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LimitsConfig {
    #[serde(default)]
    pub depth: DepthConfig,
    #[serde(default)]
    pub calls: CallsConfig,
}

impl LimitsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Err(error) = dotenvy::dotenv() {
            tracing::debug!(%error, "no .env file loaded");
        }
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        tracing::debug!(
            depth = %config.depth.bound,
            calls = %config.calls.bound,
            "recursion limits loaded"
        );
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".reclimit/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("RECLIMIT_").split("__").ignore(&["home"]))
    }

    /// Reject bounds below -1.
    ///
    /// The limiters accept any negative bound, but every value below -1
    /// behaves exactly like -1, so a configured `-5` is almost certainly a
    /// mistake.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check_bound("depth.bound", self.depth.bound)?;
        Self::check_bound("calls.bound", self.calls.bound)
    }

    /// A depth limiter using the configured depth.
    #[must_use]
    pub fn depth_limiter<R: Clone>(&self, default_return: R) -> DepthLimiter<R> {
        DepthLimiter::from_bound(self.depth.bound, default_return)
    }

    /// A call limiter using the configured call bound.
    #[must_use]
    pub fn call_limiter<R: Clone>(&self, default_return: R) -> CallLimiter<R> {
        CallLimiter::from_bound(self.calls.bound, default_return)
    }

    fn check_bound(field: &str, bound: Bound) -> Result<(), ConfigError> {
        if bound < Bound::EXHAUSTED {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                reason: format!("{bound} is below -1"),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        if let Some(home) = std::env::var_os(HOME_ENV) {
            return Some(PathBuf::from(home).join("config.toml"));
        }
        dirs::config_dir().map(|p| p.join("reclimit").join("config.toml"))
    }
}
