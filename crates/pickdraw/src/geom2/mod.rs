//! 2D math for hit testing.
//!
//! Purpose
//! - Small value types (`Vec2`, `Mat2`) with non-mutating arithmetic.
//! - Predicates (`barycentric`, `point_segment_distance`) that report
//!   degenerate input as `GeomError` rather than propagating inf/NaN.
//!
//! Code cross-refs: `select::Selector` (only consumer of the predicates).

mod cfg;
mod predicates;
mod types;

pub use predicates::{barycentric, point_segment_distance, Barycentric};
pub use types::{Mat2, Vec2};
