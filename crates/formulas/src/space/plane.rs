//! Plane construction from three points.

use nalgebra::Vector3;

use super::types::{Plane, Result, SpaceError};
use super::vector::{cross, dot, magnitude, subtract};
use crate::cfg::SpaceCfg;

impl Plane {
    /// Plane through `p1`, `p2`, `p3` with normal `(p2 - p1) × (p3 - p1)`.
    ///
    /// Fails with `NotCoplanar` when the points are collinear (degenerate normal).
    /// `d` is chosen so that `p1` satisfies the equation exactly.
    pub fn from_points(
        p1: Vector3<f64>,
        p2: Vector3<f64>,
        p3: Vector3<f64>,
        cfg: SpaceCfg,
    ) -> Result<Self> {
        let n = cross(subtract(p2, p1), subtract(p3, p1));
        if magnitude(n) < cfg.eps {
            tracing::debug!(?p1, ?p2, ?p3, "plane from collinear points");
            return Err(SpaceError::NotCoplanar);
        }
        Ok(Self::from_normal(n, -dot(n, p1)))
    }

    /// `|eval(p)| / |n| < eps`, i.e. `p` lies on the plane up to distance `eps`.
    pub fn contains(&self, p: Vector3<f64>, cfg: SpaceCfg) -> Result<bool> {
        let mag = magnitude(self.n);
        if mag < cfg.eps {
            tracing::debug!(n = ?self.n, "contains: zero plane normal");
            return Err(SpaceError::ZeroVector);
        }
        Ok((self.eval(p) / mag).abs() < cfg.eps)
    }
}

/// Free-function form of [`Plane::from_points`].
#[inline]
pub fn new_plane(
    p1: Vector3<f64>,
    p2: Vector3<f64>,
    p3: Vector3<f64>,
    cfg: SpaceCfg,
) -> Result<Plane> {
    Plane::from_points(p1, p2, p3, cfg)
}
