//! Geometry core of a click-driven 2D drawing surface.
//!
//! Clicks build line segments, triangles and quads; a selection click
//! finds every primitive under or near the cursor and repeated clicks at the
//! same spot cycle through them.
//!
//! Layout
//! - `geom2`: `Vec2`, `Mat2`, barycentric and point–segment predicates.
//! - `store`: committed primitives and pending clicks.
//! - `select`: candidate scan and the cycling cursor.
//! - `session`: the context object UI glue drives, plus renderer views.
//!
//! All coordinates are normalized device coordinates (origin at the canvas
//! center, axes roughly in [-1, 1]); converting from pixels is the caller's job.

pub mod error;
pub mod geom2;
pub mod select;
pub mod session;
pub mod store;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use geom2::{Mat2, Vec2};
pub use session::{Button, Session, SessionCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GeomError;
    pub use crate::geom2::{barycentric, point_segment_distance, Barycentric, Mat2, Vec2};
    pub use crate::select::{
        CandidateKind, CandidateOrder, ClickLocation, QuadHighlight, SameLocationPolicy,
        SelectCfg, SelectionCandidate, SelectionState, Selector,
    };
    pub use crate::session::{flatten, Button, ClickOutcome, Frame, Interaction, Session, SessionCfg};
    pub use crate::store::{
        AppendOutcome, DrawMode, PrimitiveRef, PrimitiveStore, QuadAssembly, QuadStrip, Segment,
        StoreCfg, Triangle,
    };
}
