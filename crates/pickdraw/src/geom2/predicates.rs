//! Point-vs-primitive predicates used by hit testing.
//!
//! - `barycentric`: weights of a point w.r.t. a triangle (normal-equations solve).
//! - `point_segment_distance`: distance to a closed segment (projection clamped to [0,1]).
//!
//! Both report degenerate input as an error instead of returning ±inf/NaN.

use super::cfg::DEGENERATE_EPS;
use super::types::Vec2;
use crate::error::GeomError;

/// Barycentric weights of a point: `p = alpha·p0 + beta·p1 + gamma·p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Barycentric {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl Barycentric {
    #[inline]
    pub fn as_array(&self) -> [f64; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    /// Hit test used by selection: `beta >= 0`, `gamma >= 0`, `beta + gamma < 1`.
    ///
    /// `beta` and `gamma` are the raw solver unknowns (coefficients of the edge
    /// vectors `p1 − p0` and `p2 − p0`). The strict upper bound leaves the edge
    /// opposite `p0` outside the triangle.
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.beta >= 0.0 && self.gamma >= 0.0 && self.beta + self.gamma < 1.0
    }
}

/// Barycentric coordinates of `p` with respect to triangle `(p0, p1, p2)`.
///
/// Solves `v2 = beta·v0 + gamma·v1` for edge vectors `v0 = p1 − p0`, `v1 = p2 − p0`,
/// `v2 = p − p0` through the 2×2 normal equations; `alpha = 1 − beta − gamma`.
/// Fails with `DegenerateTriangle` when the vertices are (nearly) collinear.
pub fn barycentric(p0: Vec2, p1: Vec2, p2: Vec2, p: Vec2) -> Result<Barycentric, GeomError> {
    let v0 = p1.sub(&p0);
    let v1 = p2.sub(&p0);
    let v2 = p.sub(&p0);
    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    let d20 = v2.dot(&v0);
    let d21 = v2.dot(&v1);
    let denom = d00 * d11 - d01 * d01;
    // denom = (|v0||v1| sin θ)², so compare against the same scale
    if !denom.is_finite() || denom <= DEGENERATE_EPS * d00 * d11 {
        return Err(GeomError::DegenerateTriangle);
    }
    let beta = (d11 * d20 - d01 * d21) / denom;
    let gamma = (d00 * d21 - d01 * d20) / denom;
    Ok(Barycentric {
        alpha: 1.0 - beta - gamma,
        beta,
        gamma,
    })
}

/// Shortest distance from `p` to the closed segment `[p0, p1]`.
///
/// Fails with `DegenerateSegment` when `p0 == p1`; callers that want a point
/// distance in that case use `(p - p0).magnitude()`.
pub fn point_segment_distance(p0: Vec2, p1: Vec2, p: Vec2) -> Result<f64, GeomError> {
    let m = p1.sub(&p0);
    let mm = m.dot(&m);
    if mm == 0.0 {
        return Err(GeomError::DegenerateSegment);
    }
    let t0 = (m.dot(&p.sub(&p0)) / mm).clamp(0.0, 1.0);
    let closest = p0.add(&m.scale(t0));
    Ok(p.sub(&closest).magnitude())
}
