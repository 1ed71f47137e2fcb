//! Tolerance defaults for 2D predicates (internal).
//!
//! Policy
//! - Fixed constants. Only the selection tolerances in `select::SelectCfg`
//!   are user-facing.

/// Relative collinearity tolerance for `barycentric`.
///
/// A triangle is degenerate when `|v0|²|v1|² − (v0·v1)² <= DEGENERATE_EPS · |v0|²|v1|²`,
/// i.e. when the squared sine of the angle at `p0` falls below this value.
pub(crate) const DEGENERATE_EPS: f64 = 1e-12;
