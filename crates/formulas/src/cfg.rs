//! Tolerances shared by every formula module.
//!
//! Policy
//! - One absolute epsilon for zero/degeneracy checks, one looser epsilon for
//!   angle-sum and calibration checks on derived triangle quantities.
//! - The 3D kernel takes its epsilon through `SpaceCfg` so callers working at
//!   a different scale can tighten or loosen it without touching call sites.

/// Zero-vector, degeneracy, and undefined-point threshold.
pub const ZERO_EPS: f64 = 1e-10;
/// Angle-sum and ratio calibration threshold for triangle formulas.
pub const ANGLE_EPS: f64 = 1e-9;

/// Kernel configuration (tolerances).
///
/// `eps` is an absolute tolerance applied to magnitudes, dot products and
/// cross-product magnitudes alike.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpaceCfg {
    pub eps: f64,
}

impl Default for SpaceCfg {
    fn default() -> Self {
        Self { eps: ZERO_EPS }
    }
}

impl SpaceCfg {
    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        Self { eps }
    }
    /// `|x| < eps`.
    #[inline]
    pub fn is_negligible(&self, x: f64) -> bool {
        x.abs() < self.eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_eps_is_zero_eps() {
        assert_eq!(SpaceCfg::default().eps, ZERO_EPS);
        assert!(SpaceCfg::default().is_negligible(5e-11));
        assert!(!SpaceCfg::default().is_negligible(1e-9));
        assert!(SpaceCfg::with_eps(1e-6).is_negligible(1e-7));
    }
}
