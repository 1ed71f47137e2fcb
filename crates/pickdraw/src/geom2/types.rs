//! Basic 2D value types.
//!
//! - `Vec2`: point or vector; every operation returns a new value.
//! - `Mat2`: 2×2 matrix, column-major like GLSL (`[M00, M10, M01, M11]`).
//!
//! Both wrap the nalgebra fixed-size types so callers can drop down to
//! nalgebra when they need more than the small API here.

use nalgebra::{Matrix2, Vector2};

use crate::error::GeomError;

/// 2D point or vector with immutable-result arithmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2(Vector2<f64>);

impl Default for Vec2 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl Vec2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    #[inline]
    pub fn zeros() -> Self {
        Self(Vector2::zeros())
    }

    /// Copy the components out of a 2-element sequence.
    pub fn from_slice(s: &[f64]) -> Result<Self, GeomError> {
        match *s {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(GeomError::InvalidArgument {
                expected: 2,
                got: s.len(),
            }),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn as_array(&self) -> [f64; 2] {
        [self.0.x, self.0.y]
    }

    /// Underlying nalgebra column vector.
    #[inline]
    pub fn inner(&self) -> Vector2<f64> {
        self.0
    }

    #[inline]
    pub fn add(&self, v: &Vec2) -> Vec2 {
        Self(self.0 + v.0)
    }

    #[inline]
    pub fn sub(&self, v: &Vec2) -> Vec2 {
        Self(self.0 - v.0)
    }

    #[inline]
    pub fn scale(&self, s: f64) -> Vec2 {
        Self(self.0 * s)
    }

    #[inline]
    pub fn dot(&self, v: &Vec2) -> f64 {
        self.0.dot(&v.0)
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Column-vector product `M · v`.
    #[inline]
    pub fn multiply(&self, m: &Mat2) -> Vec2 {
        Self(m.0 * self.0)
    }

    /// Row-vector product `v · M`.
    #[inline]
    pub fn right_multiply(&self, m: &Mat2) -> Vec2 {
        Self(m.0.transpose() * self.0)
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl From<Vector2<f64>> for Vec2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self(v)
    }
}

impl TryFrom<&[f64]> for Vec2 {
    type Error = GeomError;
    fn try_from(s: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(s)
    }
}

impl TryFrom<Vec<f64>> for Vec2 {
    type Error = GeomError;
    fn try_from(s: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&s)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
impl std::ops::Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}
impl std::ops::Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// 2×2 matrix, identity by default.
///
/// Storage is column-major: `get(c, r)` reads `array[c * 2 + r]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat2(Matrix2<f64>);

impl Default for Mat2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat2 {
    #[inline]
    pub fn identity() -> Self {
        Self(Matrix2::identity())
    }

    /// Build from `[M00, M10, M01, M11]`.
    #[inline]
    pub fn from_column_major(a: [f64; 4]) -> Self {
        Self(Matrix2::from_column_slice(&a))
    }

    /// Counterclockwise rotation by `theta` radians.
    pub fn rotation(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_column_major([c, s, -s, c])
    }

    /// Element at column `c`, row `r`. Panics if either index exceeds 1.
    #[inline]
    pub fn get(&self, c: usize, r: usize) -> f64 {
        self.0[(r, c)]
    }

    /// Set element at column `c`, row `r`. Panics if either index exceeds 1.
    #[inline]
    pub fn set(&mut self, c: usize, r: usize, val: f64) {
        self.0[(r, c)] = val;
    }

    /// `a0·a3 − a1·a2` over the column-major array; exactly 0 for singular input.
    #[inline]
    pub fn det(&self) -> f64 {
        let a = self.as_array();
        a[0] * a[3] - a[1] * a[2]
    }

    #[inline]
    pub fn as_array(&self) -> [f64; 4] {
        let s = self.0.as_slice();
        [s[0], s[1], s[2], s[3]]
    }

    #[inline]
    pub fn inner(&self) -> Matrix2<f64> {
        self.0
    }
}

impl From<Matrix2<f64>> for Mat2 {
    #[inline]
    fn from(m: Matrix2<f64>) -> Self {
        Self(m)
    }
}
