//! Trigonometric identities (angles in radians).
//!
//! Functions that are defined everywhere return `f64`; those with undefined
//! points (tan at odd multiples of π/2, half-angle tangent at θ = π, ...)
//! or restricted inputs (sin/cos values outside `[-1, 1]`) return `Result`.
//! Product-to-sum identities return both terms of the sum.

use std::f64::consts::{PI, TAU};

use thiserror::Error;

use crate::cfg::ZERO_EPS;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TrigError {
    #[error("function is undefined at this point")]
    Undefined,
    #[error("sine/cosine value outside [-1, 1]")]
    OutOfRange,
    #[error("angular frequency must not be zero")]
    ZeroOmega,
}

pub type Result<T> = std::result::Result<T, TrigError>;

#[inline]
fn unit_range(x: f64) -> Result<f64> {
    if (-1.0..=1.0).contains(&x) {
        Ok(x)
    } else {
        Err(TrigError::OutOfRange)
    }
}

pub fn tan(rad: f64) -> Result<f64> {
    if rad.cos().abs() < ZERO_EPS {
        return Err(TrigError::Undefined);
    }
    Ok(rad.tan())
}

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Non-negative root `√(1 - sin²)`.
pub fn sin_to_cos(sin: f64) -> Result<f64> {
    let s = unit_range(sin)?;
    Ok((1.0 - s * s).sqrt())
}

/// Non-negative root `√(1 - cos²)`.
pub fn cos_to_sin(cos: f64) -> Result<f64> {
    let c = unit_range(cos)?;
    Ok((1.0 - c * c).sqrt())
}

// Sum and difference formulas.

#[inline]
pub fn sin_add(a: f64, b: f64) -> f64 {
    a.sin() * b.cos() + a.cos() * b.sin()
}

#[inline]
pub fn sin_sub(a: f64, b: f64) -> f64 {
    a.sin() * b.cos() - a.cos() * b.sin()
}

#[inline]
pub fn cos_add(a: f64, b: f64) -> f64 {
    a.cos() * b.cos() - a.sin() * b.sin()
}

#[inline]
pub fn cos_sub(a: f64, b: f64) -> f64 {
    a.cos() * b.cos() + a.sin() * b.sin()
}

// Double angle.

#[inline]
pub fn sin_double(rad: f64) -> f64 {
    2.0 * rad.sin() * rad.cos()
}

#[inline]
pub fn cos_double(rad: f64) -> f64 {
    2.0 * rad.cos() * rad.cos() - 1.0
}

/// `tan 2θ = 2 tan θ / (1 - tan² θ)`.
pub fn tan_double(rad: f64) -> Result<f64> {
    let t = tan(rad)?;
    let denom = 1.0 - t * t;
    if denom.abs() < ZERO_EPS {
        return Err(TrigError::Undefined);
    }
    Ok(2.0 * t / denom)
}

// Sum to product.

/// `sin A + sin B = 2 sin((A+B)/2) cos((A-B)/2)`.
#[inline]
pub fn sin_sum_to_product(a: f64, b: f64) -> f64 {
    2.0 * ((a + b) / 2.0).sin() * ((a - b) / 2.0).cos()
}

/// `sin A - sin B = 2 cos((A+B)/2) sin((A-B)/2)`.
#[inline]
pub fn sin_sub_to_product(a: f64, b: f64) -> f64 {
    2.0 * ((a + b) / 2.0).cos() * ((a - b) / 2.0).sin()
}

/// `cos A + cos B = 2 cos((A+B)/2) cos((A-B)/2)`.
#[inline]
pub fn cos_sum_to_product(a: f64, b: f64) -> f64 {
    2.0 * ((a + b) / 2.0).cos() * ((a - b) / 2.0).cos()
}

/// `cos A - cos B = -2 sin((A+B)/2) sin((A-B)/2)`.
#[inline]
pub fn cos_sub_to_product(a: f64, b: f64) -> f64 {
    -2.0 * ((a + b) / 2.0).sin() * ((a - b) / 2.0).sin()
}

// Product to sum; each returns the two terms whose sum is the product.

/// `sin A cos B = ½ sin(A+B) + ½ sin(A-B)`.
#[inline]
pub fn sin_cos_to_sum(a: f64, b: f64) -> (f64, f64) {
    (0.5 * (a + b).sin(), 0.5 * (a - b).sin())
}

/// `sin A sin B = ½ cos(A-B) - ½ cos(A+B)`.
#[inline]
pub fn sin_sin_to_sum(a: f64, b: f64) -> (f64, f64) {
    (0.5 * (a - b).cos(), -0.5 * (a + b).cos())
}

/// `cos A cos B = ½ cos(A-B) + ½ cos(A+B)`.
#[inline]
pub fn cos_cos_to_sum(a: f64, b: f64) -> (f64, f64) {
    (0.5 * (a - b).cos(), 0.5 * (a + b).cos())
}

// Half angle, from cos θ; non-negative roots.

pub fn sin_half(cos: f64) -> Result<f64> {
    let c = unit_range(cos)?;
    Ok(((1.0 - c) / 2.0).sqrt())
}

pub fn cos_half(cos: f64) -> Result<f64> {
    let c = unit_range(cos)?;
    Ok(((1.0 + c) / 2.0).sqrt())
}

pub fn tan_half(cos: f64) -> Result<f64> {
    let c = unit_range(cos)?;
    if (1.0 + c).abs() < ZERO_EPS {
        return Err(TrigError::Undefined);
    }
    Ok(((1.0 - c) / (1.0 + c)).sqrt())
}

// Universal substitution, t = tan(θ/2).

#[inline]
pub fn sin_from_tan_half(t: f64) -> f64 {
    2.0 * t / (1.0 + t * t)
}

#[inline]
pub fn cos_from_tan_half(t: f64) -> f64 {
    (1.0 - t * t) / (1.0 + t * t)
}

pub fn tan_from_tan_half(t: f64) -> Result<f64> {
    let denom = 1.0 - t * t;
    if denom.abs() < ZERO_EPS {
        return Err(TrigError::Undefined);
    }
    Ok(2.0 * t / denom)
}

/// `a sin θ + b cos θ = A sin(θ + φ)`; returns `(A, φ)`.
pub fn auxiliary_angle(a: f64, b: f64) -> Result<(f64, f64)> {
    if a == 0.0 && b == 0.0 {
        return Err(TrigError::Undefined);
    }
    Ok((a.hypot(b), b.atan2(a)))
}

/// Inverse of [`auxiliary_angle`]: `A sin(θ + φ)` back to `(a, b)`.
#[inline]
pub fn inverse_auxiliary_angle(amplitude: f64, phase: f64) -> (f64, f64) {
    (amplitude * phase.cos(), amplitude * phase.sin())
}

/// Period `2π / ω` of `sin(ωx + φ)`.
pub fn period(omega: f64) -> Result<f64> {
    if omega == 0.0 {
        return Err(TrigError::ZeroOmega);
    }
    Ok(TAU / omega)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6};

    const TOL: f64 = 1e-12;

    #[test]
    fn tan_and_conversions() {
        assert!((tan(FRAC_PI_4).unwrap() - 1.0).abs() < TOL);
        assert_eq!(tan(FRAC_PI_2), Err(TrigError::Undefined));
        assert_eq!(tan(-3.0 * FRAC_PI_2), Err(TrigError::Undefined));
        assert!((deg_to_rad(180.0) - PI).abs() < TOL);
        assert!((rad_to_deg(FRAC_PI_3) - 60.0).abs() < 1e-9);
        assert!((sin_to_cos(0.6).unwrap() - 0.8).abs() < TOL);
        assert!((cos_to_sin(-0.6).unwrap() - 0.8).abs() < TOL);
        assert_eq!(sin_to_cos(1.5), Err(TrigError::OutOfRange));
        assert_eq!(cos_to_sin(f64::NAN), Err(TrigError::OutOfRange));
    }

    #[test]
    fn identities_agree_with_direct_evaluation() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let a: f64 = rng.gen_range(-10.0..10.0);
            let b: f64 = rng.gen_range(-10.0..10.0);
            assert!((sin_add(a, b) - (a + b).sin()).abs() < 1e-9);
            assert!((sin_sub(a, b) - (a - b).sin()).abs() < 1e-9);
            assert!((cos_add(a, b) - (a + b).cos()).abs() < 1e-9);
            assert!((cos_sub(a, b) - (a - b).cos()).abs() < 1e-9);
            assert!((sin_double(a) - (2.0 * a).sin()).abs() < 1e-9);
            assert!((cos_double(a) - (2.0 * a).cos()).abs() < 1e-9);
            assert!((sin_sum_to_product(a, b) - (a.sin() + b.sin())).abs() < 1e-9);
            assert!((sin_sub_to_product(a, b) - (a.sin() - b.sin())).abs() < 1e-9);
            assert!((cos_sum_to_product(a, b) - (a.cos() + b.cos())).abs() < 1e-9);
            assert!((cos_sub_to_product(a, b) - (a.cos() - b.cos())).abs() < 1e-9);
            let (p, q) = sin_cos_to_sum(a, b);
            assert!((p + q - a.sin() * b.cos()).abs() < 1e-9);
            let (p, q) = sin_sin_to_sum(a, b);
            assert!((p + q - a.sin() * b.sin()).abs() < 1e-9);
            let (p, q) = cos_cos_to_sum(a, b);
            assert!((p + q - a.cos() * b.cos()).abs() < 1e-9);
        }
    }

    #[test]
    fn double_and_half_angles() {
        assert!((tan_double(FRAC_PI_6).unwrap() - FRAC_PI_3.tan()).abs() < 1e-9);
        assert_eq!(tan_double(FRAC_PI_4), Err(TrigError::Undefined));
        let theta = FRAC_PI_3;
        let c = theta.cos();
        assert!((sin_half(c).unwrap() - (theta / 2.0).sin()).abs() < TOL);
        assert!((cos_half(c).unwrap() - (theta / 2.0).cos()).abs() < TOL);
        assert!((tan_half(c).unwrap() - (theta / 2.0).tan()).abs() < TOL);
        assert_eq!(tan_half(-1.0), Err(TrigError::Undefined));
        assert_eq!(sin_half(2.0), Err(TrigError::OutOfRange));
    }

    #[test]
    fn universal_substitution() {
        let theta = 1.1f64;
        let t = (theta / 2.0).tan();
        assert!((sin_from_tan_half(t) - theta.sin()).abs() < TOL);
        assert!((cos_from_tan_half(t) - theta.cos()).abs() < TOL);
        assert!((tan_from_tan_half(t).unwrap() - theta.tan()).abs() < 1e-9);
        assert_eq!(tan_from_tan_half(1.0), Err(TrigError::Undefined));
    }

    #[test]
    fn auxiliary_angle_round_trip() {
        let (amp, phase) = auxiliary_angle(1.0, 3f64.sqrt()).unwrap();
        assert!((amp - 2.0).abs() < TOL);
        assert!((phase - FRAC_PI_3).abs() < TOL);
        let (a, b) = inverse_auxiliary_angle(amp, phase);
        assert!((a - 1.0).abs() < TOL && (b - 3f64.sqrt()).abs() < TOL);
        // a sinθ + b cosθ == A sin(θ + φ) at an arbitrary θ
        let x = 0.37f64;
        assert!((x.sin() + 3f64.sqrt() * x.cos() - amp * (x + phase).sin()).abs() < TOL);
        assert_eq!(auxiliary_angle(0.0, 0.0), Err(TrigError::Undefined));
    }

    #[test]
    fn period_of_angular_frequency() {
        assert!((period(2.0).unwrap() - PI).abs() < TOL);
        assert!((period(-1.0).unwrap() + TAU).abs() < TOL);
        assert_eq!(period(0.0), Err(TrigError::ZeroOmega));
    }
}
