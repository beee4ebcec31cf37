//! Vector algebra primitives over `Vector3<f64>`.
//!
//! Arithmetic (`add`, `subtract`, `scale`, `dot`, `cross`, `magnitude`) never
//! fails. Anything that needs a direction (`normalize`, `is_collinear`,
//! `cos_angle`) rejects zero vectors with `SpaceError::ZeroVector`.

use nalgebra::Vector3;

use super::types::{Result, SpaceError};
use crate::cfg::SpaceCfg;

#[inline]
pub fn add(v: Vector3<f64>, u: Vector3<f64>) -> Vector3<f64> {
    v + u
}

#[inline]
pub fn subtract(v: Vector3<f64>, u: Vector3<f64>) -> Vector3<f64> {
    v - u
}

#[inline]
pub fn scale(v: Vector3<f64>, s: f64) -> Vector3<f64> {
    v * s
}

#[inline]
pub fn dot(v: Vector3<f64>, u: Vector3<f64>) -> f64 {
    v.x * u.x + v.y * u.y + v.z * u.z
}

/// Right-handed cross product; zero iff `v` and `u` are collinear.
#[inline]
pub fn cross(v: Vector3<f64>, u: Vector3<f64>) -> Vector3<f64> {
    Vector3::new(
        v.y * u.z - v.z * u.y,
        v.z * u.x - v.x * u.z,
        v.x * u.y - v.y * u.x,
    )
}

#[inline]
pub fn magnitude(v: Vector3<f64>) -> f64 {
    v.norm()
}

/// Component-wise zero test: every `|component| < eps`.
#[inline]
pub fn is_zero(v: Vector3<f64>, cfg: SpaceCfg) -> bool {
    v.iter().all(|c| cfg.is_negligible(*c))
}

/// Unit vector along `v`.
pub fn normalize(v: Vector3<f64>, cfg: SpaceCfg) -> Result<Vector3<f64>> {
    let mag = magnitude(v);
    if mag < cfg.eps {
        tracing::debug!(?v, mag, "normalize: zero vector");
        return Err(SpaceError::ZeroVector);
    }
    Ok(v / mag)
}

/// Same or opposite direction: `||v̂·û| - 1| < eps`.
pub fn is_collinear(v: Vector3<f64>, u: Vector3<f64>, cfg: SpaceCfg) -> Result<bool> {
    let v_hat = normalize(v, cfg)?;
    let u_hat = normalize(u, cfg)?;
    Ok((dot(v_hat, u_hat).abs() - 1.0).abs() < cfg.eps)
}

/// Linear dependence via the three 2×2 minors of `[v u]`.
///
/// A zero vector is dependent with everything. Minors are compared with a
/// mixed absolute/relative tolerance so large coordinates do not fail on
/// rounding alone.
pub fn linearly_dependent(v: Vector3<f64>, u: Vector3<f64>, cfg: SpaceCfg) -> bool {
    if is_zero(v, cfg) || is_zero(u, cfg) {
        return true;
    }
    let close = |a: f64, b: f64| {
        let diff = (a - b).abs();
        diff < cfg.eps || diff < cfg.eps * a.abs().max(b.abs())
    };
    close(v.x * u.y, v.y * u.x) && close(v.x * u.z, v.z * u.x) && close(v.y * u.z, v.z * u.y)
}

/// Cosine of the angle between `v` and `u`.
pub fn cos_angle(v: Vector3<f64>, u: Vector3<f64>, cfg: SpaceCfg) -> Result<f64> {
    let (mv, mu) = (magnitude(v), magnitude(u));
    if mv < cfg.eps || mu < cfg.eps {
        tracing::debug!(?v, ?u, "cos_angle: zero vector");
        return Err(SpaceError::ZeroVector);
    }
    Ok((dot(v, u) / (mv * mu)).clamp(-1.0, 1.0))
}
