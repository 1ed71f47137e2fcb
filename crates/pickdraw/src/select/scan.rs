use crate::error::GeomError;
use crate::geom2::{barycentric, point_segment_distance, Barycentric, Vec2};
use crate::store::PrimitiveStore;

use super::types::{CandidateOrder, SelectCfg, SelectionCandidate};

/// Every primitive near or under `p`, in scan order unless `cfg.order` says otherwise.
///
/// - Segments: distance `< cfg.proximity`. Zero-length segments use the
///   distance to their single point.
/// - Triangles and every 3-vertex window of every quad strip: barycentric hit test.
///   Degenerate (collinear) ones are skipped.
///
/// Overlaps are not collapsed: each qualifying primitive is its own entry.
pub fn scan(store: &PrimitiveStore, p: Vec2, cfg: &SelectCfg) -> Vec<SelectionCandidate> {
    let mut out = Vec::new();

    for (index, seg) in store.segments().iter().enumerate() {
        let distance = match point_segment_distance(seg.p0, seg.p1, p) {
            Ok(d) => d,
            Err(GeomError::DegenerateSegment) => {
                tracing::debug!(index, "zero-length segment, using point distance");
                p.sub(&seg.p0).magnitude()
            }
            Err(e) => {
                tracing::debug!(index, error = %e, "segment skipped");
                continue;
            }
        };
        if distance < cfg.proximity {
            out.push(SelectionCandidate::LineSegment { index, distance });
        }
    }

    for (index, tri) in store.triangles().iter().enumerate() {
        if let Some(bary) = hit(tri.p0, tri.p1, tri.p2, p) {
            out.push(SelectionCandidate::Triangle { index, bary });
        } else {
            tracing::trace!(index, "triangle missed");
        }
    }

    for (strip, quad) in store.quad_strips().iter().enumerate() {
        for (first_vertex, [p0, p1, p2]) in quad.triangles() {
            if let Some(bary) = hit(p0, p1, p2, p) {
                out.push(SelectionCandidate::Quad {
                    strip,
                    first_vertex,
                    bary,
                });
            }
        }
    }

    if cfg.order == CandidateOrder::NearestFirst {
        out.sort_by(|a, b| a.proximity().total_cmp(&b.proximity()));
    }
    out
}

fn hit(p0: Vec2, p1: Vec2, p2: Vec2, p: Vec2) -> Option<Barycentric> {
    match barycentric(p0, p1, p2, p) {
        Ok(b) if b.is_inside() => Some(b),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "degenerate triangle skipped");
            None
        }
    }
}
