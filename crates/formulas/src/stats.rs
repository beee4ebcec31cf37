//! Descriptive statistics over `f64` samples.
//!
//! Percentile rule (textbook form): sort ascending, let `i = n·p/100`.
//! - `i` an integer: mean of the `i`-th and `(i+1)`-th values (1-based),
//!   clamped to the first/last value at `p = 0` / `p = 100`.
//! - otherwise: the `⌈i⌉`-th value.
//!
//! Variance is the population form `(1/n) Σ (x - x̄)²`.

use thiserror::Error;

use crate::cfg::ZERO_EPS;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("sample must not be empty")]
    EmptySample,
    #[error("percentile must lie in [0, 100]")]
    InvalidPercentile,
    #[error("sample contains NaN")]
    NotANumber,
}

pub type Result<T> = std::result::Result<T, StatsError>;

fn check_sample(sample: &[f64]) -> Result<()> {
    if sample.is_empty() {
        return Err(StatsError::EmptySample);
    }
    if sample.iter().any(|x| x.is_nan()) {
        return Err(StatsError::NotANumber);
    }
    Ok(())
}

/// `p`-th percentile of `data` (`p` in percent). `data` is not reordered.
pub fn percentile(p: f64, data: &[f64]) -> Result<f64> {
    if !(0.0..=100.0).contains(&p) {
        return Err(StatsError::InvalidPercentile);
    }
    check_sample(data)?;
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    let i = n as f64 * p / 100.0;
    let rank = i.round();
    if (i - rank).abs() < ZERO_EPS {
        // 1-based ranks k and k+1 are 0-based indices k-1 and k
        let k = rank as usize;
        let lo = sorted[k.saturating_sub(1)];
        let hi = sorted[k.min(n - 1)];
        Ok((lo + hi) / 2.0)
    } else {
        let k = i.ceil() as usize;
        Ok(sorted[k.clamp(1, n) - 1])
    }
}

pub fn sample_mean(sample: &[f64]) -> Result<f64> {
    check_sample(sample)?;
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

pub fn sample_variance(sample: &[f64]) -> Result<f64> {
    let mean = sample_mean(sample)?;
    let ss: f64 = sample.iter().map(|x| (x - mean).powi(2)).sum();
    Ok(ss / sample.len() as f64)
}

pub fn sample_std_dev(sample: &[f64]) -> Result<f64> {
    Ok(sample_variance(sample)?.sqrt())
}
