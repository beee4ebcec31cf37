//! Algebraic identities and inequalities.
//!
//! - `cubic_difference`: `a³ - b³ = (a - b)(a² + ab + b²)`.
//! - `subset_count`: `2ⁿ` subsets of an `n`-element set.
//! - `mean_inequalities`: the chain `H ≤ G ≤ A ≤ Q` for positive data.
//! - `cauchy_equality`: value of `(a² + b²)(c² + d²)` in the Cauchy–Schwarz equality case.

use thiserror::Error;

use crate::cfg::ZERO_EPS;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AlgebraError {
    #[error("input set must not be empty")]
    EmptySet,
    #[error("every element must be positive")]
    NonPositive,
    #[error("arguments do not satisfy the Cauchy equality condition ad = bc")]
    CauchyCondition,
    #[error("result does not fit in 64 bits")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, AlgebraError>;

/// Harmonic, geometric, arithmetic and quadratic means of a positive sample.
///
/// Invariant: `harmonic <= geometric <= arithmetic <= quadratic` up to rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Means {
    pub harmonic: f64,
    pub geometric: f64,
    pub arithmetic: f64,
    pub quadratic: f64,
}

#[inline]
pub fn cubic_difference(a: f64, b: f64) -> f64 {
    (a - b) * (a * a + a * b + b * b)
}

pub fn subset_count(n: u32) -> Result<u64> {
    1u64.checked_shl(n).ok_or(AlgebraError::Overflow)
}

pub fn mean_inequalities(u: &[f64]) -> Result<Means> {
    if u.is_empty() {
        return Err(AlgebraError::EmptySet);
    }
    // `!(x > 0)` also rejects NaN
    if u.iter().any(|&x| !(x > 0.0)) {
        tracing::debug!(len = u.len(), "mean_inequalities: non-positive element");
        return Err(AlgebraError::NonPositive);
    }
    let n = u.len() as f64;
    let (mut recip_sum, mut ln_sum, mut sum, mut sq_sum) = (0.0, 0.0, 0.0, 0.0);
    for &x in u {
        recip_sum += 1.0 / x;
        ln_sum += x.ln();
        sum += x;
        sq_sum += x * x;
    }
    Ok(Means {
        harmonic: n / recip_sum,
        // through logs: the plain product overflows for long samples
        geometric: (ln_sum / n).exp(),
        arithmetic: sum / n,
        quadratic: (sq_sum / n).sqrt(),
    })
}

/// `(ac + bd)²` when `(a, b)` and `(c, d)` are proportional (`ad = bc`).
pub fn cauchy_equality(a: f64, b: f64, c: f64, d: f64) -> Result<f64> {
    if (a * d - b * c).abs() >= ZERO_EPS {
        return Err(AlgebraError::CauchyCondition);
    }
    Ok((a * c + b * d).powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cubic_difference_matches_direct() {
        assert_eq!(cubic_difference(3.0, 2.0), 19.0);
        assert_eq!(cubic_difference(-1.0, 2.0), -9.0);
    }

    #[test]
    fn subset_count_and_overflow() {
        assert_eq!(subset_count(0), Ok(1));
        assert_eq!(subset_count(10), Ok(1024));
        assert_eq!(subset_count(63), Ok(1u64 << 63));
        assert_eq!(subset_count(64), Err(AlgebraError::Overflow));
    }

    #[test]
    fn means_of_known_sample() {
        let m = mean_inequalities(&[1.0, 2.0, 4.0]).unwrap();
        assert!((m.harmonic - 3.0 / 1.75).abs() < 1e-12);
        assert!((m.geometric - 2.0).abs() < 1e-12);
        assert!((m.arithmetic - 7.0 / 3.0).abs() < 1e-12);
        assert!((m.quadratic - 7.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn means_reject_bad_input() {
        assert_eq!(mean_inequalities(&[]), Err(AlgebraError::EmptySet));
        assert_eq!(mean_inequalities(&[1.0, 0.0]), Err(AlgebraError::NonPositive));
        assert_eq!(mean_inequalities(&[1.0, -2.0]), Err(AlgebraError::NonPositive));
        assert_eq!(mean_inequalities(&[f64::NAN]), Err(AlgebraError::NonPositive));
    }

    #[test]
    fn cauchy_equality_case() {
        // (1, 2) ∥ (3, 6): (1·3 + 2·6)² = 225 = (1 + 4)(9 + 36)
        assert_eq!(cauchy_equality(1.0, 2.0, 3.0, 6.0), Ok(225.0));
        assert_eq!(cauchy_equality(1.0, 2.0, 3.0, 5.0), Err(AlgebraError::CauchyCondition));
    }

    proptest! {
        #[test]
        fn mean_chain_holds(u in proptest::collection::vec(1e-3..1e3f64, 1..32)) {
            let m = mean_inequalities(&u).unwrap();
            let tol = 1e-9 * m.quadratic;
            prop_assert!(m.harmonic <= m.geometric + tol);
            prop_assert!(m.geometric <= m.arithmetic + tol);
            prop_assert!(m.arithmetic <= m.quadratic + tol);
        }
    }
}
