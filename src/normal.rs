//! Standard normal density and cumulative distribution approximation.
//!
//! Shared leaf dependency of every closed-form pricer in this crate. The CDF
//! uses the Zelen & Severo (1964) five-term polynomial approximation
//! (Abramowitz & Stegun 26.2.17), accurate to about 7.5e-8 absolute error.
//!
//! The approximation is a compatibility constant, not an implementation
//! detail: the implied-volatility solver tolerances and the pinned
//! cross-implementation fixtures in the test suite sit on this exact
//! polynomial's error floor. Do not replace it with an `erf`-based CDF
//! without re-deriving every pinned value.
//!
//! # References
//! - Zelen, M. & Severo, N. "Probability Functions", in Abramowitz & Stegun,
//!   *Handbook of Mathematical Functions* (1964), §26.2

use std::f64::consts::PI;

/// Standard normal probability density φ(x) = (1/√(2π))·exp(−x²/2).
///
/// Defined and finite for all finite `x`; never fails.
///
/// # Examples
/// ```
/// use vanopt::normal::density;
/// let atm = density(0.0);
/// assert!((atm - 0.3989422804014327).abs() < 1e-15);
/// ```
pub fn density(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-x * x / 2.0).exp()
}

/// Standard normal cumulative distribution Φ(x), Zelen–Severo approximation.
///
/// Computes `k = 1/(1 + 0.2316419·|x|)`, evaluates the five-term polynomial
/// in `k`, and forms the upper tail `φ(x)·poly(k)`. For `x ≥ 0` returns
/// `1 − tail`, otherwise `tail` directly (the approximation is symmetric by
/// construction).
///
/// Absolute error is bounded by ~7.5e-8; callers must not assume exactness.
///
/// # Examples
/// ```
/// use vanopt::normal::cumulative;
/// assert!((cumulative(0.0) - 0.5).abs() < 1e-7);
/// assert!(cumulative(3.0) > 0.998);
/// ```
pub fn cumulative(x: f64) -> f64 {
    let k = 1.0 / (1.0 + 0.2316419 * x.abs());
    // Horner evaluation of the Zelen-Severo coefficients.
    let poly = k
        * (0.319381530
            + k * (-0.356563782 + k * (1.781477937 + k * (-1.821255978 + k * 1.330274429))));
    let tail = density(x) * poly;
    if x >= 0.0 {
        1.0 - tail
    } else {
        tail
    }
}
