//! Triangle formulas.
//!
//! Side-based formulas take lengths `a, b, c` opposite the angles `A, B, C`
//! (radians). Center formulas take a `Triangle` of three `Vector2<f64>` points.
//!
//! Validation order: lengths, then angles, then consistency (triangle
//! inequality, angle sum, ratio calibration).

use std::f64::consts::PI;

use nalgebra::Vector2;
use thiserror::Error;

use crate::cfg::{ANGLE_EPS, ZERO_EPS};

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TriangleError {
    #[error("no such triangle: side length must be positive")]
    NonPositiveLength,
    #[error("no such triangle: angle must be positive")]
    NonPositiveAngle,
    #[error("no such triangle: angle out of range")]
    AngleOutOfRange,
    #[error("no such triangle: angles do not sum to pi")]
    AngleSum,
    #[error("no such triangle: triangle inequality violated")]
    TriangleInequality,
    #[error("inconsistent inputs: derived quantities disagree")]
    Inconsistent,
    #[error("degenerate triangle: vertices are collinear")]
    Degenerate,
}

pub type Result<T> = std::result::Result<T, TriangleError>;

/// Triangle with vertices `a`, `b`, `c` in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub c: Vector2<f64>,
}

impl Triangle {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Self {
        Self { a, b, c }
    }
    /// Side lengths `(|BC|, |CA|, |AB|)`, opposite `a`, `b`, `c` respectively.
    #[inline]
    pub fn side_lengths(&self) -> (f64, f64, f64) {
        (
            (self.c - self.b).norm(),
            (self.c - self.a).norm(),
            (self.b - self.a).norm(),
        )
    }
    /// Twice the signed area (positive for counterclockwise `a → b → c`).
    #[inline]
    pub fn signed_area2(&self) -> f64 {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.x * ac.y - ab.y * ac.x
    }
}

fn check_lengths(sides: &[f64]) -> Result<()> {
    if sides.iter().any(|&s| !(s > 0.0)) {
        return Err(TriangleError::NonPositiveLength);
    }
    Ok(())
}

fn check_inequality(a: f64, b: f64, c: f64) -> Result<()> {
    if a >= b + c || b >= a + c || c >= a + b {
        return Err(TriangleError::TriangleInequality);
    }
    Ok(())
}

/// Law of sines, `a / sin A = b / sin B = c / sin C = 2R`; returns the circumradius `R`.
pub fn law_of_sines(a: f64, b: f64, c: f64, big_a: f64, big_b: f64, big_c: f64) -> Result<f64> {
    check_lengths(&[a, b, c])?;
    if [big_a, big_b, big_c].iter().any(|&x| !(x > 0.0)) {
        return Err(TriangleError::NonPositiveAngle);
    }
    if (big_a + big_b + big_c - PI).abs() > ANGLE_EPS {
        return Err(TriangleError::AngleSum);
    }
    let r1 = a / big_a.sin();
    let r2 = b / big_b.sin();
    let r3 = c / big_c.sin();
    if (r1 - r2).abs() > ANGLE_EPS || (r1 - r3).abs() > ANGLE_EPS {
        tracing::debug!(r1, r2, r3, "law_of_sines: ratios disagree");
        return Err(TriangleError::Inconsistent);
    }
    Ok(r1 / 2.0)
}

/// Law of cosines, `c² = a² + b² - 2ab cos C`; returns `c`.
pub fn law_of_cosines(a: f64, b: f64, big_c: f64) -> Result<f64> {
    check_lengths(&[a, b])?;
    if !(big_c > 0.0 && big_c < PI) {
        return Err(TriangleError::AngleOutOfRange);
    }
    let c_sq = a * a + b * b - 2.0 * a * b * big_c.cos();
    if c_sq < 0.0 {
        return Err(TriangleError::Inconsistent);
    }
    Ok(c_sq.sqrt())
}

/// Projection theorem, `a = b cos C + c cos B`.
pub fn projection_theorem(a: f64, b: f64, c: f64, big_b: f64, big_c: f64) -> Result<bool> {
    check_lengths(&[a, b, c])?;
    if !(big_b > 0.0 && big_c > 0.0 && big_b + big_c < PI) {
        return Err(TriangleError::AngleOutOfRange);
    }
    Ok((a - (b * big_c.cos() + c * big_b.cos())).abs() < ANGLE_EPS)
}

/// Median to side `a`: `m_a = √(2b² + 2c² - a²) / 2`.
pub fn median_length(a: f64, b: f64, c: f64) -> Result<f64> {
    check_lengths(&[a, b, c])?;
    check_inequality(a, b, c)?;
    Ok((2.0 * b * b + 2.0 * c * c - a * a).sqrt() / 2.0)
}

/// Heron's formula, `S = √(s(s-a)(s-b)(s-c))` with `s` the semi-perimeter.
pub fn heron(a: f64, b: f64, c: f64) -> Result<f64> {
    check_lengths(&[a, b, c])?;
    check_inequality(a, b, c)?;
    let s = (a + b + c) / 2.0;
    let area_sq = s * (s - a) * (s - b) * (s - c);
    Ok(area_sq.max(0.0).sqrt())
}

/// Intersection of the medians.
pub fn centroid(t: &Triangle) -> Vector2<f64> {
    (t.a + t.b + t.c) / 3.0
}

/// Center of the inscribed circle: side-length weighted vertex average.
pub fn incenter(t: &Triangle) -> Result<Vector2<f64>> {
    let (a, b, c) = t.side_lengths();
    check_lengths(&[a, b, c])?;
    if t.signed_area2().abs() < ZERO_EPS {
        return Err(TriangleError::Degenerate);
    }
    Ok((t.a * a + t.b * b + t.c * c) / (a + b + c))
}

/// Center of the circumscribed circle.
pub fn circumcenter(t: &Triangle) -> Result<Vector2<f64>> {
    let (a, b, c) = t.side_lengths();
    check_lengths(&[a, b, c])?;
    if t.signed_area2().abs() < ZERO_EPS {
        return Err(TriangleError::Degenerate);
    }
    let d = 2.0 * t.signed_area2();
    let (sa, sb, sc) = (t.a.norm_squared(), t.b.norm_squared(), t.c.norm_squared());
    let x = (sa * (t.b.y - t.c.y) + sb * (t.c.y - t.a.y) + sc * (t.a.y - t.b.y)) / d;
    let y = (sa * (t.c.x - t.b.x) + sb * (t.a.x - t.c.x) + sc * (t.b.x - t.a.x)) / d;
    Ok(Vector2::new(x, y))
}

/// Intersection of the altitudes.
///
/// Solves `(h - a)·(c - b) = 0`, `(h - b)·(c - a) = 0` by Cramer's rule, which
/// covers vertical sides without slope special cases.
pub fn orthocenter(t: &Triangle) -> Result<Vector2<f64>> {
    let bc = t.c - t.b;
    let ac = t.c - t.a;
    let det = bc.x * ac.y - bc.y * ac.x;
    if det.abs() < ZERO_EPS {
        return Err(TriangleError::Degenerate);
    }
    let r1 = bc.dot(&t.a);
    let r2 = ac.dot(&t.b);
    Ok(Vector2::new(
        (r1 * ac.y - bc.y * r2) / det,
        (bc.x * r2 - r1 * ac.x) / det,
    ))
}
