//! Selection configuration, candidates and cursor state.

use crate::error::GeomError;
use crate::geom2::{Barycentric, Vec2};
use crate::store::{PrimitiveRef, PrimitiveStore};

/// When a selection click counts as "the same place" as the previous one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SameLocationPolicy {
    /// Both coordinates bit-identical. Real mouse input rarely repeats exactly,
    /// so in practice most clicks rescan.
    #[default]
    Exact,
    /// Euclidean distance at most `eps`.
    Epsilon(f64),
    /// Either coordinate repeats exactly (legacy behavior).
    AnyAxis,
}

impl SameLocationPolicy {
    pub fn is_same(&self, prev: Vec2, p: Vec2) -> bool {
        match *self {
            SameLocationPolicy::Exact => {
                prev.x().to_bits() == p.x().to_bits() && prev.y().to_bits() == p.y().to_bits()
            }
            SameLocationPolicy::Epsilon(eps) => p.sub(&prev).magnitude() <= eps,
            SameLocationPolicy::AnyAxis => prev.x() == p.x() || prev.y() == p.y(),
        }
    }
}

/// Order of the candidate list produced by a rescan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CandidateOrder {
    /// Segments, then triangles, then quad sub-triangles, each in store order.
    #[default]
    ScanOrder,
    /// Stable sort by `SelectionCandidate::proximity`.
    NearestFirst,
}

/// What gets highlighted when a quad sub-triangle is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuadHighlight {
    /// Every vertex of the containing strip.
    #[default]
    WholeStrip,
    /// Only the three vertices of the hit sub-triangle.
    SubTriangle,
}

/// Selection configuration.
#[derive(Clone, Copy, Debug)]
pub struct SelectCfg {
    /// A segment is a candidate when its distance to the click is below this.
    pub proximity: f64,
    pub same_location: SameLocationPolicy,
    pub order: CandidateOrder,
    pub quad_highlight: QuadHighlight,
}

impl Default for SelectCfg {
    fn default() -> Self {
        Self {
            proximity: 0.02,
            same_location: SameLocationPolicy::Exact,
            order: CandidateOrder::ScanOrder,
            quad_highlight: QuadHighlight::WholeStrip,
        }
    }
}

/// How the engine treats a selection click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickLocation {
    /// Rescan the store and restart the cursor.
    NewLocation,
    /// Keep the list, advance the cursor.
    SameLocation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    LineSegment,
    Triangle,
    Quad,
}

/// One primitive near or under a selection click.
///
/// Indices point into the `PrimitiveStore` the scan ran against; no vertex
/// data is copied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectionCandidate {
    LineSegment {
        index: usize,
        distance: f64,
    },
    Triangle {
        index: usize,
        bary: Barycentric,
    },
    /// Sub-triangle `first_vertex..first_vertex + 3` of strip `strip`.
    Quad {
        strip: usize,
        first_vertex: usize,
        bary: Barycentric,
    },
}

impl SelectionCandidate {
    #[inline]
    pub fn kind(&self) -> CandidateKind {
        match self {
            SelectionCandidate::LineSegment { .. } => CandidateKind::LineSegment,
            SelectionCandidate::Triangle { .. } => CandidateKind::Triangle,
            SelectionCandidate::Quad { .. } => CandidateKind::Quad,
        }
    }

    #[inline]
    pub fn primitive(&self) -> PrimitiveRef {
        match *self {
            SelectionCandidate::LineSegment { index, .. } => PrimitiveRef::Segment(index),
            SelectionCandidate::Triangle { index, .. } => PrimitiveRef::Triangle(index),
            SelectionCandidate::Quad {
                strip,
                first_vertex,
                ..
            } => PrimitiveRef::Quad {
                strip,
                first_vertex,
            },
        }
    }

    /// Segment distance; interior hits count as 0.
    #[inline]
    pub fn proximity(&self) -> f64 {
        match *self {
            SelectionCandidate::LineSegment { distance, .. } => distance,
            _ => 0.0,
        }
    }

    /// Vertices of the hit primitive (for quads: the hit sub-triangle).
    pub fn vertices(&self, store: &PrimitiveStore) -> Result<Vec<Vec2>, GeomError> {
        Ok(match *self {
            SelectionCandidate::LineSegment { index, .. } => {
                store.segment(index)?.vertices().to_vec()
            }
            SelectionCandidate::Triangle { index, .. } => {
                store.triangle(index)?.vertices().to_vec()
            }
            SelectionCandidate::Quad {
                strip,
                first_vertex,
                ..
            } => store.quad_strip(strip)?.triangle(first_vertex)?.to_vec(),
        })
    }

    /// One-line description for logs.
    pub fn describe(&self, store: &PrimitiveStore) -> Result<String, GeomError> {
        let verts = self
            .vertices(store)?
            .iter()
            .map(|v| format!("({}, {})", v.x(), v.y()))
            .collect::<Vec<_>>()
            .join(" -> ");
        Ok(match self {
            SelectionCandidate::LineSegment { distance, .. } => {
                format!("line segment {verts} at distance {distance}")
            }
            SelectionCandidate::Triangle { bary, .. } => {
                format!("triangle {verts} with barycentric {:?}", bary.as_array())
            }
            SelectionCandidate::Quad { bary, .. } => {
                format!("quad sub-triangle {verts} with barycentric {:?}", bary.as_array())
            }
        })
    }
}

/// Candidate list of the last rescan plus the cycling cursor.
///
/// Invariant: `cursor < candidates.len()`, or the list is empty and `cursor == 0`.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    pub(crate) candidates: Vec<SelectionCandidate>,
    pub(crate) cursor: usize,
    pub(crate) last_click: Option<Vec2>,
}

impl SelectionState {
    #[inline]
    pub fn candidates(&self) -> &[SelectionCandidate] {
        &self.candidates
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Location of the click that produced the current list.
    #[inline]
    pub fn last_click(&self) -> Option<Vec2> {
        self.last_click
    }

    #[inline]
    pub fn active(&self) -> Option<&SelectionCandidate> {
        self.candidates.get(self.cursor)
    }

    /// Nearest segment in the current list, if any.
    pub fn closest_segment(&self) -> Option<&SelectionCandidate> {
        self.candidates
            .iter()
            .filter(|c| c.kind() == CandidateKind::LineSegment)
            .min_by(|a, b| a.proximity().total_cmp(&b.proximity()))
    }

    pub(crate) fn replace(&mut self, candidates: Vec<SelectionCandidate>, at: Vec2) {
        self.candidates = candidates;
        self.cursor = 0;
        self.last_click = Some(at);
    }

    /// Step to the next candidate, wrapping to the first.
    pub(crate) fn advance(&mut self) {
        self.cursor = if self.cursor + 1 < self.candidates.len() {
            self.cursor + 1
        } else {
            0
        };
    }

    pub fn clear(&mut self) {
        self.candidates.clear();
        self.cursor = 0;
        self.last_click = None;
    }
}
