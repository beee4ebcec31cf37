//! Plane type and the kernel's error taxonomy.

use nalgebra::Vector3;
use thiserror::Error;

/// Failure kinds of the geometry kernel.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SpaceError {
    /// A direction-dependent operation got a vector with magnitude below tolerance.
    #[error("zero vector has no direction")]
    ZeroVector,
    /// The three points given for a plane are collinear; no unique plane exists.
    #[error("points are collinear, no unique plane through them")]
    NotCoplanar,
    /// An operation that requires parallel planes or lines got non-parallel inputs.
    #[error("inputs are not parallel")]
    NotParallel,
    /// An operation that requires perpendicular planes got non-perpendicular inputs.
    #[error("inputs are not perpendicular")]
    NotPerpendicular,
    /// A numeric parameter (area, angle) lies outside its domain.
    #[error("parameter outside its valid domain")]
    InvalidParam,
}

pub type Result<T> = std::result::Result<T, SpaceError>;

/// Plane `n · x + d = 0`, i.e. `a·x + b·y + c·z + d = 0` with `n = (a, b, c)`.
///
/// Invariants:
/// - `n` is not normalized.
/// - `n` should be non-zero; `Plane::new` does not check (raw coefficients),
///   every predicate and query rejects a zero normal with `ZeroVector`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub n: Vector3<f64>,
    pub d: f64,
}

impl Plane {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            n: Vector3::new(a, b, c),
            d,
        }
    }
    #[inline]
    pub fn from_normal(n: Vector3<f64>, d: f64) -> Self {
        Self { n, d }
    }
    /// Normal vector `(a, b, c)`, as stored.
    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        self.n
    }
    #[inline]
    pub fn coefficients(&self) -> (f64, f64, f64, f64) {
        (self.n.x, self.n.y, self.n.z, self.d)
    }
    /// Left-hand side of the plane equation at `p` (zero on the plane).
    #[inline]
    pub fn eval(&self, p: Vector3<f64>) -> f64 {
        super::vector::dot(self.n, p) + self.d
    }
}
