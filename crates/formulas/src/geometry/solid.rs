//! Solid geometry: surface areas, volumes, Euler's polyhedron formula.
//!
//! Dimensions (radii, heights, slant heights, base areas) must be finite and
//! non-negative; zero is allowed and yields the degenerate value.

use std::f64::consts::PI;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SolidError {
    #[error("dimensions must be finite and non-negative")]
    InvalidDimensions,
    #[error("counts violate Euler's formula V - E + F = 2")]
    EulerViolation,
}

pub type Result<T> = std::result::Result<T, SolidError>;

fn check_dims(dims: &[f64]) -> Result<()> {
    if dims.iter().all(|d| d.is_finite() && *d >= 0.0) {
        Ok(())
    } else {
        tracing::debug!(?dims, "invalid solid dimensions");
        Err(SolidError::InvalidDimensions)
    }
}

/// `2πr(r + h)`.
pub fn cylinder_surface_area(r: f64, h: f64) -> Result<f64> {
    check_dims(&[r, h])?;
    Ok(2.0 * PI * r * (r + h))
}

/// `πr(r + l)`, `l` the slant height.
pub fn cone_surface_area(r: f64, l: f64) -> Result<f64> {
    check_dims(&[r, l])?;
    Ok(PI * r * (r + l))
}

/// `π(r1² + r2² + (r1 + r2) l)` for a conical frustum with slant height `l`.
pub fn frustum_surface_area(r1: f64, r2: f64, l: f64) -> Result<f64> {
    check_dims(&[r1, r2, l])?;
    Ok(PI * (r1 * r1 + r2 * r2 + (r1 + r2) * l))
}

/// Prism or cylinder: `S h`.
pub fn prism_volume(base_area: f64, h: f64) -> Result<f64> {
    check_dims(&[base_area, h])?;
    Ok(base_area * h)
}

/// Pyramid or cone: `S h / 3`.
pub fn pyramid_volume(base_area: f64, h: f64) -> Result<f64> {
    check_dims(&[base_area, h])?;
    Ok(base_area * h / 3.0)
}

/// Frustum: `(S1 + S2 + √(S1 S2)) h / 3`. Covers prisms (`S1 = S2`) and pyramids (`S2 = 0`).
pub fn frustum_volume(s1: f64, s2: f64, h: f64) -> Result<f64> {
    check_dims(&[s1, s2, h])?;
    Ok((s1 + s2 + (s1 * s2).sqrt()) * h / 3.0)
}

/// `4πr²`.
pub fn sphere_surface_area(r: f64) -> Result<f64> {
    check_dims(&[r])?;
    Ok(4.0 * PI * r * r)
}

/// `4πr³ / 3`.
pub fn sphere_volume(r: f64) -> Result<f64> {
    check_dims(&[r])?;
    Ok(4.0 * PI * r.powi(3) / 3.0)
}

/// Euler's polyhedron formula `V - E + F = 2` over vertex/edge/face counts.
///
/// - Exactly one `None`: solve for it and return the missing count.
/// - All known: `Ok(2)` if the formula holds, else `EulerViolation`.
/// - Two or more unknown, or no non-negative solution: `InvalidDimensions`.
pub fn euler_solve(v: Option<u64>, e: Option<u64>, f: Option<u64>) -> Result<u64> {
    let solve = |x: i128| u64::try_from(x).map_err(|_| SolidError::InvalidDimensions);
    match (v, e, f) {
        (Some(v), Some(e), Some(f)) => {
            if v as i128 - e as i128 + f as i128 == 2 {
                Ok(2)
            } else {
                Err(SolidError::EulerViolation)
            }
        }
        (None, Some(e), Some(f)) => solve(2 + e as i128 - f as i128),
        (Some(v), None, Some(f)) => solve(v as i128 + f as i128 - 2),
        (Some(v), Some(e), None) => solve(2 + e as i128 - v as i128),
        _ => Err(SolidError::InvalidDimensions),
    }
}
