//! Primitive store: finished geometry plus per-mode pending clicks.
//!
//! Purpose
//! - Turn raw clicks into segments (2 clicks), triangles (3) and quads (4).
//! - Own all committed vertex data; selection only reads it by index.
//!
//! Quads are kept as triangle strips: every 3 consecutive vertices form one
//! selectable sub-triangle. With `QuadAssembly::SharedStrip` every committed
//! quad extends one growing strip, so windows straddling two quads are
//! selectable too.
//!
//! Nothing is removed individually; `reset` wipes everything.

pub mod rand;

use crate::error::GeomError;
use crate::geom2::Vec2;

/// Active drawing tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawMode {
    #[default]
    Line,
    Triangle,
    Quad,
    /// Primary clicks are ignored.
    None,
}

impl DrawMode {
    /// Clicks needed to commit one primitive, `None` for `DrawMode::None`.
    #[inline]
    pub fn points_per_primitive(self) -> Option<usize> {
        match self {
            DrawMode::Line => Some(2),
            DrawMode::Triangle => Some(3),
            DrawMode::Quad => Some(4),
            DrawMode::None => None,
        }
    }

    fn slot(self) -> Option<usize> {
        match self {
            DrawMode::Line => Some(0),
            DrawMode::Triangle => Some(1),
            DrawMode::Quad => Some(2),
            DrawMode::None => None,
        }
    }
}

/// How committed quads are laid out in `PrimitiveStore::quad_strips`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuadAssembly {
    /// Every quad appends its 4 vertices to a single growing strip.
    #[default]
    SharedStrip,
    /// Every quad becomes its own 4-vertex strip.
    Separate,
}

/// Store configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct StoreCfg {
    pub quad_assembly: QuadAssembly,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p0: Vec2,
    pub p1: Vec2,
}

impl Segment {
    #[inline]
    pub fn vertices(&self) -> [Vec2; 2] {
        [self.p0, self.p1]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
}

impl Triangle {
    #[inline]
    pub fn vertices(&self) -> [Vec2; 3] {
        [self.p0, self.p1, self.p2]
    }
}

/// Vertices drawn as a triangle strip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuadStrip {
    verts: Vec<Vec2>,
}

impl QuadStrip {
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// A strip is drawn only once it holds a complete quad.
    #[inline]
    pub fn is_renderable(&self) -> bool {
        self.verts.len() >= 4
    }

    /// Sub-triangles `(first_vertex, [v_i, v_i+1, v_i+2])`, step 1.
    pub fn triangles(&self) -> impl Iterator<Item = (usize, [Vec2; 3])> + '_ {
        self.verts
            .windows(3)
            .enumerate()
            .map(|(i, w)| (i, [w[0], w[1], w[2]]))
    }

    /// Sub-triangle starting at `first_vertex`.
    pub fn triangle(&self, first_vertex: usize) -> Result<[Vec2; 3], GeomError> {
        match self.verts.get(first_vertex..first_vertex + 3) {
            Some(w) => Ok([w[0], w[1], w[2]]),
            None => Err(GeomError::IndexOutOfRange {
                index: first_vertex,
                len: self.verts.len().saturating_sub(2),
            }),
        }
    }
}

/// Location of one committed primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveRef {
    Segment(usize),
    Triangle(usize),
    /// First vertex of the committed quad inside strip `strip`.
    Quad { strip: usize, first_vertex: usize },
}

/// Result of feeding one click to the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Point buffered; `collected` of `needed` clicks so far.
    Pending { collected: usize, needed: usize },
    Committed(PrimitiveRef),
    /// `DrawMode::None`: nothing recorded.
    Ignored,
}

/// Owner of all committed geometry and the in-progress click buffers.
#[derive(Clone, Debug, Default)]
pub struct PrimitiveStore {
    cfg: StoreCfg,
    segments: Vec<Segment>,
    triangles: Vec<Triangle>,
    strips: Vec<QuadStrip>,
    pending: [Vec<Vec2>; 3],
}

impl PrimitiveStore {
    pub fn new(cfg: StoreCfg) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    #[inline]
    pub fn cfg(&self) -> StoreCfg {
        self.cfg
    }

    /// Buffer `p` for `mode`; commits once the mode's click count is reached.
    pub fn append_point(&mut self, mode: DrawMode, p: Vec2) -> AppendOutcome {
        let (Some(slot), Some(needed)) = (mode.slot(), mode.points_per_primitive()) else {
            return AppendOutcome::Ignored;
        };
        self.pending[slot].push(p);
        let collected = self.pending[slot].len();
        if collected < needed {
            tracing::trace!(?mode, collected, needed, "pending point");
            return AppendOutcome::Pending { collected, needed };
        }
        let pts = std::mem::take(&mut self.pending[slot]);
        let r = self.commit(mode, pts);
        tracing::debug!(?mode, primitive = ?r, "committed");
        AppendOutcome::Committed(r)
    }

    fn commit(&mut self, mode: DrawMode, pts: Vec<Vec2>) -> PrimitiveRef {
        match mode {
            DrawMode::Line => {
                self.segments.push(Segment {
                    p0: pts[0],
                    p1: pts[1],
                });
                PrimitiveRef::Segment(self.segments.len() - 1)
            }
            DrawMode::Triangle => {
                self.triangles.push(Triangle {
                    p0: pts[0],
                    p1: pts[1],
                    p2: pts[2],
                });
                PrimitiveRef::Triangle(self.triangles.len() - 1)
            }
            _ => self.commit_quad(pts),
        }
    }

    fn commit_quad(&mut self, pts: Vec<Vec2>) -> PrimitiveRef {
        debug_assert_eq!(pts.len(), 4, "quad commit needs 4 points");
        match self.cfg.quad_assembly {
            QuadAssembly::SharedStrip if !self.strips.is_empty() => {
                let strip = &mut self.strips[0];
                let first_vertex = strip.verts.len();
                strip.verts.extend(pts);
                PrimitiveRef::Quad {
                    strip: 0,
                    first_vertex,
                }
            }
            _ => {
                self.strips.push(QuadStrip { verts: pts });
                PrimitiveRef::Quad {
                    strip: self.strips.len() - 1,
                    first_vertex: 0,
                }
            }
        }
    }

    /// Clear committed geometry and every pending buffer.
    pub fn reset(&mut self) {
        self.segments.clear();
        self.triangles.clear();
        self.strips.clear();
        for p in &mut self.pending {
            p.clear();
        }
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn quad_strips(&self) -> &[QuadStrip] {
        &self.strips
    }

    /// In-progress clicks for `mode` (empty for `DrawMode::None`).
    pub fn pending(&self, mode: DrawMode) -> &[Vec2] {
        match mode.slot() {
            Some(slot) => &self.pending[slot],
            None => &[],
        }
    }

    pub fn segment(&self, i: usize) -> Result<&Segment, GeomError> {
        self.segments.get(i).ok_or(GeomError::IndexOutOfRange {
            index: i,
            len: self.segments.len(),
        })
    }

    pub fn triangle(&self, i: usize) -> Result<&Triangle, GeomError> {
        self.triangles.get(i).ok_or(GeomError::IndexOutOfRange {
            index: i,
            len: self.triangles.len(),
        })
    }

    pub fn quad_strip(&self, i: usize) -> Result<&QuadStrip, GeomError> {
        self.strips.get(i).ok_or(GeomError::IndexOutOfRange {
            index: i,
            len: self.strips.len(),
        })
    }

    /// True when nothing is committed and nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
            && self.triangles.is_empty()
            && self.strips.is_empty()
            && self.pending.iter().all(Vec::is_empty)
    }
}
