//! Complex arithmetic on `nalgebra::Complex<f64>`.
//!
//! Division is the only fallible operation; a denominator with squared
//! modulus below `ZERO_EPS` is reported instead of producing inf/NaN parts.

use nalgebra::Complex;
use thiserror::Error;

use crate::cfg::ZERO_EPS;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ComplexError {
    #[error("division by zero or a number too close to zero")]
    DivideByZero,
}

#[inline]
pub fn add(a: Complex<f64>, b: Complex<f64>) -> Complex<f64> {
    Complex::new(a.re + b.re, a.im + b.im)
}

/// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`.
#[inline]
pub fn multiply(a: Complex<f64>, b: Complex<f64>) -> Complex<f64> {
    Complex::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
}

/// `a / b = a · conj(b) / |b|²`.
pub fn divide(a: Complex<f64>, b: Complex<f64>) -> Result<Complex<f64>, ComplexError> {
    let denominator = b.norm_sqr();
    if denominator.abs() < ZERO_EPS {
        tracing::debug!(re = b.re, im = b.im, "complex division by ~0");
        return Err(ComplexError::DivideByZero);
    }
    Ok(Complex::new(
        (a.re * b.re + a.im * b.im) / denominator,
        (a.im * b.re - a.re * b.im) / denominator,
    ))
}

#[inline]
pub fn conjugate(a: Complex<f64>) -> Complex<f64> {
    Complex::new(a.re, -a.im)
}

#[inline]
pub fn modulus(a: Complex<f64>) -> f64 {
    a.re.hypot(a.im)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Complex<f64>, b: Complex<f64>) -> bool {
        (a - b).norm() < 1e-12
    }

    #[test]
    fn ring_operations_match_num_complex() {
        let a = Complex::new(3.0, -2.0);
        let b = Complex::new(-1.5, 4.0);
        assert!(close(add(a, b), a + b));
        assert!(close(multiply(a, b), a * b));
        assert!(close(divide(a, b).unwrap(), a / b));
        assert_eq!(conjugate(a), Complex::new(3.0, 2.0));
        assert_eq!(modulus(Complex::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn i_squared_is_minus_one() {
        let i = Complex::new(0.0, 1.0);
        assert_eq!(multiply(i, i), Complex::new(-1.0, 0.0));
        assert!(close(divide(Complex::new(1.0, 0.0), i).unwrap(), Complex::new(0.0, -1.0)));
    }

    #[test]
    fn divide_by_near_zero_is_an_error() {
        let a = Complex::new(1.0, 1.0);
        assert_eq!(divide(a, Complex::new(0.0, 0.0)), Err(ComplexError::DivideByZero));
        assert_eq!(divide(a, Complex::new(1e-6, 0.0)), Err(ComplexError::DivideByZero));
    }

    #[test]
    fn product_with_conjugate_is_modulus_squared() {
        let a = Complex::new(1.25, -7.5);
        let p = multiply(a, conjugate(a));
        assert!((p.re - modulus(a).powi(2)).abs() < 1e-9);
        assert_eq!(p.im, 0.0);
    }
}
