//! Derived geometric queries: projections, angle extremes, intersection directions.
//!
//! Angles are in radians. Cosine/sine ratios are clamped to `[0, 1]` before
//! `asin`/`acos` so rounding cannot produce NaN for (anti)parallel inputs.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector3;

use super::predicates::{are_planes_parallel, is_line_parallel_to_plane};
use super::types::{Plane, Result, SpaceError};
use super::vector::{cross, dot, magnitude, normalize, scale, subtract};
use crate::cfg::SpaceCfg;

/// Component of `v` orthogonal to `normal`: `v - n̂ (v · n̂)`.
pub fn project_onto_plane(
    v: Vector3<f64>,
    normal: Vector3<f64>,
    cfg: SpaceCfg,
) -> Result<Vector3<f64>> {
    let n_hat = normalize(normal, cfg)?;
    Ok(subtract(v, scale(n_hat, dot(v, n_hat))))
}

/// Area projection theorem: `S' = S · |cos θ|`, θ the angle between normals.
pub fn projected_area(
    area: f64,
    n1: Vector3<f64>,
    n2: Vector3<f64>,
    cfg: SpaceCfg,
) -> Result<f64> {
    if area < 0.0 {
        tracing::debug!(area, "projected_area: negative area");
        return Err(SpaceError::InvalidParam);
    }
    let (m1, m2) = (magnitude(n1), magnitude(n2));
    if m1 < cfg.eps || m2 < cfg.eps {
        return Err(SpaceError::ZeroVector);
    }
    let cos_theta = (dot(n1, n2).abs() / (m1 * m2)).min(1.0);
    Ok(area * cos_theta)
}

/// Minimum angle theorem: the angle between a line and a plane, `asin(|cos(dir, n)|)`.
pub fn min_angle_line_to_plane(
    line_dir: Vector3<f64>,
    plane: &Plane,
    cfg: SpaceCfg,
) -> Result<f64> {
    let n = plane.normal();
    let (md, mn) = (magnitude(line_dir), magnitude(n));
    if md < cfg.eps || mn < cfg.eps {
        return Err(SpaceError::ZeroVector);
    }
    let sin_alpha = (dot(line_dir, n) / (md * mn)).abs().min(1.0);
    let alpha = sin_alpha.asin();
    tracing::trace!(alpha, "min_angle_line_to_plane");
    Ok(alpha)
}

/// Angle between two (skew) lines, in `[0, π/2]`: `acos(|cos(d1, d2)|)`.
pub fn max_angle_between_skew_lines(
    dir1: Vector3<f64>,
    dir2: Vector3<f64>,
    cfg: SpaceCfg,
) -> Result<f64> {
    let (m1, m2) = (magnitude(dir1), magnitude(dir2));
    if m1 < cfg.eps || m2 < cfg.eps {
        return Err(SpaceError::ZeroVector);
    }
    let cos_theta = (dot(dir1, dir2) / (m1 * m2)).abs().min(1.0);
    Ok(cos_theta.acos())
}

#[inline]
fn in_quarter_turn(angle: f64) -> bool {
    (0.0..=FRAC_PI_2).contains(&angle)
}

/// Three-cosine theorem: `cos θ = cos θ1 · cos θ2`, both angles in `[0, π/2]`.
pub fn three_cosine_theorem(angle_oab: f64, angle_bac: f64) -> Result<f64> {
    if !in_quarter_turn(angle_oab) || !in_quarter_turn(angle_bac) {
        tracing::debug!(angle_oab, angle_bac, "three_cosine_theorem: angle out of [0, pi/2]");
        return Err(SpaceError::InvalidParam);
    }
    Ok(angle_oab.cos() * angle_bac.cos())
}

/// Three-sine theorem: `sin θ = sin θ1 · sin θ2`, both angles in `[0, π/2]`.
pub fn three_sine_theorem(angle_oac: f64, angle_aoc: f64) -> Result<f64> {
    if !in_quarter_turn(angle_oac) || !in_quarter_turn(angle_aoc) {
        tracing::debug!(angle_oac, angle_aoc, "three_sine_theorem: angle out of [0, pi/2]");
        return Err(SpaceError::InvalidParam);
    }
    Ok(angle_oac.sin() * angle_aoc.sin())
}

/// Intersection directions of two parallel planes with a third plane.
///
/// Fails with `NotParallel` unless `p1 ∥ p2`. Returns `(n1 × n3, n2 × n3)`;
/// the two directions are themselves parallel.
pub fn plane_intersection_dirs(
    p1: &Plane,
    p2: &Plane,
    third: &Plane,
    cfg: SpaceCfg,
) -> Result<(Vector3<f64>, Vector3<f64>)> {
    if !are_planes_parallel(p1, p2, cfg)? {
        tracing::debug!(n1 = ?p1.normal(), n2 = ?p2.normal(), "planes not parallel");
        return Err(SpaceError::NotParallel);
    }
    let n3 = third.normal();
    Ok((cross(p1.normal(), n3), cross(p2.normal(), n3)))
}

/// Direction `dir × n` for a line parallel to `plane`.
///
/// Fails with `ZeroVector` on a zero direction or normal and with
/// `NotParallel` when the line is not parallel to the plane.
pub fn line_plane_intersection_dir(
    line_dir: Vector3<f64>,
    plane: &Plane,
    cfg: SpaceCfg,
) -> Result<Vector3<f64>> {
    let n = plane.normal();
    if !is_line_parallel_to_plane(line_dir, n, cfg)? {
        tracing::debug!(?line_dir, ?n, "line not parallel to plane");
        return Err(SpaceError::NotParallel);
    }
    Ok(cross(line_dir, n))
}
