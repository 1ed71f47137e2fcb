//! Error type shared by the geometry, store, and selection modules.
//!
//! Policy
//! - Predicate degeneracies (`DegenerateTriangle`, `DegenerateSegment`) are
//!   recoverable: the selection scan skips or special-cases the offending
//!   primitive and keeps going.
//! - `IndexOutOfRange` only comes from checked store accessors and should be
//!   unreachable while the store and selection invariants hold.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for geometry and selection operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeomError {
    /// A vector was built from a sequence of the wrong length.
    InvalidArgument {
        /// Number of components required.
        expected: usize,
        /// Number of components supplied.
        got: usize,
    },

    /// The three triangle vertices are collinear (zero or near-zero area).
    DegenerateTriangle,

    /// The segment endpoints coincide.
    DegenerateSegment,

    /// An index into a store or candidate list is out of bounds.
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Length of the indexed collection.
        len: usize,
    },
}

impl Display for GeomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidArgument { expected, got } => {
                write!(f, "Invalid argument: expected {expected} components, got {got}")
            }
            Self::DegenerateTriangle => {
                write!(f, "Degenerate triangle: vertices are collinear")
            }
            Self::DegenerateSegment => {
                write!(f, "Degenerate segment: endpoints coincide")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: {index} (len {len})")
            }
        }
    }
}

impl Error for GeomError {}
