//! Logarithms and growth rates.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LogError {
    #[error("logarithm base must be positive and not equal to 1")]
    InvalidBase,
    #[error("logarithm argument must be positive")]
    InvalidArgument,
    #[error("base-period value must not be zero")]
    ZeroBase,
}

pub type Result<T> = std::result::Result<T, LogError>;

/// Validates `log_base(x)`: `base > 0`, `base != 1`, `x > 0`.
pub fn check_log_validity(base: f64, x: f64) -> Result<()> {
    if !(base > 0.0) || base == 1.0 {
        return Err(LogError::InvalidBase);
    }
    if !(x > 0.0) {
        return Err(LogError::InvalidArgument);
    }
    Ok(())
}

/// Change of base: `log_base(x) = ln x / ln base`.
pub fn log(base: f64, x: f64) -> Result<f64> {
    check_log_validity(base, x)?;
    Ok(x.ln() / base.ln())
}

/// `(present - previous) / previous`.
pub fn average_growth_rate(present: f64, previous: f64) -> Result<f64> {
    if previous == 0.0 {
        return Err(LogError::ZeroBase);
    }
    Ok((present - previous) / previous)
}
