//! # reclimit-core
//!
//! Bounded recursion for ordinary recursive functions.
//!
//! This crate provides two limiters that wrap a recursive function body:
//! - [`DepthLimiter`] bounds how deeply calls may nest. The budget is taken
//!   on the way down and given back on the way up, so sibling branches each
//!   see the same allowance.
//! - [`CallLimiter`] bounds how many calls may run in total over the lifetime
//!   of the wrapping. The budget is consumed once per call and never returned.
//!
//! Once a bound is exceeded the wrapped function returns the configured
//! default value instead of running its body.
//!
//! # Recursion handle
//!
//! The wrapped body receives a [`Recurse`] handle as its first argument and
//! recurses through it. The handle carries the shared [`Budget`] cell and the
//! default value, so the body's own argument list stays untouched.
//!
//! ```
//! use reclimit_core::DepthLimiter;
//!
//! let fib = DepthLimiter::new(40, 0_u64).wrap(|this, n: u64| {
//!     if n < 2 { n } else { this.call(n - 1) + this.call(n - 2) }
//! });
//! assert_eq!(fib.call(10), 55);
//!
//! let truncated = DepthLimiter::new(2, 0_u64).wrap(|this, n: u64| {
//!     if n < 2 { n } else { this.call(n - 1) + this.call(n - 2) }
//! });
//! assert_eq!(truncated.call(10), 0);
//! ```
//!
//! # Sentinel ambiguity
//!
//! [`Limited::call`] cannot tell a caller whether the default value was
//! computed by the body or substituted because the bound was hit. Pick a
//! default that the body never produces, or use [`Limited::try_call`], which
//! returns an [`Outcome`] tagging suppressed calls explicitly.

pub mod bound;
pub mod budget;
pub mod calls;
pub mod depth;
pub mod enums;
pub mod errors;
pub mod limited;
pub mod outcome;

pub use bound::Bound;
pub use budget::{Budget, DepthGuard};
pub use calls::{CallLimiter, make_call_limiter};
pub use depth::{DepthLimiter, make_depth_limiter};
pub use enums::LimitKind;
pub use errors::LimitError;
pub use limited::{Limited, Recurse};
pub use outcome::Outcome;
