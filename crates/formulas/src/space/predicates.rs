//! Relational predicates between lines (directions) and planes.
//!
//! Every predicate validates its direction/normal operands before testing;
//! a zero operand is `Err(ZeroVector)`, never a silent `false`.

use nalgebra::Vector3;

use super::queries::project_onto_plane;
use super::types::{Plane, Result, SpaceError};
use super::vector::{cross, dot, magnitude};
use crate::cfg::SpaceCfg;

#[inline]
fn require_nonzero(v: Vector3<f64>, cfg: SpaceCfg) -> Result<()> {
    if magnitude(v) < cfg.eps {
        tracing::debug!(?v, "zero direction rejected");
        return Err(SpaceError::ZeroVector);
    }
    Ok(())
}

/// Line direction lies in the plane's direction space: `|dir · n| < eps`.
pub fn is_line_parallel_to_plane(
    line_dir: Vector3<f64>,
    plane_normal: Vector3<f64>,
    cfg: SpaceCfg,
) -> Result<bool> {
    require_nonzero(line_dir, cfg)?;
    require_nonzero(plane_normal, cfg)?;
    Ok(cfg.is_negligible(dot(line_dir, plane_normal)))
}

/// Line direction is parallel to the plane normal: `|dir × n| < eps`.
pub fn is_line_perpendicular_to_plane(
    line_dir: Vector3<f64>,
    plane: &Plane,
    cfg: SpaceCfg,
) -> Result<bool> {
    require_nonzero(line_dir, cfg)?;
    require_nonzero(plane.normal(), cfg)?;
    Ok(magnitude(cross(line_dir, plane.normal())) < cfg.eps)
}

pub fn are_planes_parallel(p1: &Plane, p2: &Plane, cfg: SpaceCfg) -> Result<bool> {
    require_nonzero(p1.normal(), cfg)?;
    require_nonzero(p2.normal(), cfg)?;
    Ok(magnitude(cross(p1.normal(), p2.normal())) < cfg.eps)
}

pub fn are_planes_perpendicular(p1: &Plane, p2: &Plane, cfg: SpaceCfg) -> Result<bool> {
    require_nonzero(p1.normal(), cfg)?;
    require_nonzero(p2.normal(), cfg)?;
    Ok(cfg.is_negligible(dot(p1.normal(), p2.normal())))
}

/// Perpendicular-planes property: a line in `p1` orthogonal to the
/// intersection line of `p1 ⟂ p2` is perpendicular to `p2`.
///
/// Fails with `NotPerpendicular` unless `p1 ⟂ p2`. Returns `false` when the
/// line is not orthogonal to the intersection direction `n1 × n2`.
pub fn is_line_perpendicular_to_plane_by_intersection(
    line_dir: Vector3<f64>,
    p1: &Plane,
    p2: &Plane,
    cfg: SpaceCfg,
) -> Result<bool> {
    require_nonzero(line_dir, cfg)?;
    if !are_planes_perpendicular(p1, p2, cfg)? {
        tracing::debug!(n1 = ?p1.normal(), n2 = ?p2.normal(), "planes not perpendicular");
        return Err(SpaceError::NotPerpendicular);
    }
    let intersection_dir = cross(p1.normal(), p2.normal());
    if dot(line_dir, intersection_dir).abs() > cfg.eps {
        return Ok(false);
    }
    is_line_perpendicular_to_plane(line_dir, p2, cfg)
}

/// Two lines perpendicular to the same plane, and parallel to each other.
pub fn are_lines_perpendicular_to_same_plane(
    dir1: Vector3<f64>,
    dir2: Vector3<f64>,
    plane: &Plane,
    cfg: SpaceCfg,
) -> Result<bool> {
    let perp1 = is_line_perpendicular_to_plane(dir1, plane, cfg)?;
    let perp2 = is_line_perpendicular_to_plane(dir2, plane, cfg)?;
    if !perp1 || !perp2 {
        return Ok(false);
    }
    Ok(magnitude(cross(dir1, dir2)) < cfg.eps)
}

/// Three perpendiculars theorem: a line in the plane orthogonal to the
/// projection of an oblique is orthogonal to the oblique itself.
///
/// Returns `false` when `line_dir` is not orthogonal to the projection.
pub fn is_line_perpendicular_to_oblique(
    line_dir: Vector3<f64>,
    oblique_dir: Vector3<f64>,
    plane_normal: Vector3<f64>,
    cfg: SpaceCfg,
) -> Result<bool> {
    require_nonzero(line_dir, cfg)?;
    require_nonzero(oblique_dir, cfg)?;
    let proj = project_onto_plane(oblique_dir, plane_normal, cfg)?;
    if dot(line_dir, proj).abs() > cfg.eps {
        return Ok(false);
    }
    Ok(cfg.is_negligible(dot(line_dir, oblique_dir)))
}
