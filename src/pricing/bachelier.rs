//! Bachelier (normal model) pricing for European options on spreads.
//!
//! The underlying follows arithmetic rather than lognormal dynamics, so the
//! forward and strike may take any sign — the natural setting for futures
//! spreads, which trade through zero.
//!
//! Volatility here is **absolute**, in price units, not a relative log-return
//! volatility. A 20%-vol underlying at 50 corresponds to a normal vol of
//! roughly 10. Converting between conventions is the caller's responsibility;
//! [`crate::conventions`] provides the scaling helpers.
//!
//! # Formula
//! ```text
//! d = (F − K) / (σ√T)
//! C = e^(−rT)·(Φ(d)·(F − K) + φ(d)·σ√T)
//! P = e^(−rT)·(Φ(−d)·(K − F) + φ(d)·σ√T)
//! ```

use crate::normal::{cumulative, density};
use crate::types::{OptionType, Price};
use crate::validate::{validate_finite, validate_positive};

/// Bachelier (normal) price of a European option on a forward or spread.
///
/// # Arguments
/// * `option_type` — Call or Put
/// * `forward` — Forward price of the spread (any finite value, sign included)
/// * `strike` — Strike price (any finite value)
/// * `expiry` — Time to expiry in years (must be > 0)
/// * `rate` — Continuously compounded discount rate
/// * `vol` — Absolute (price-unit) volatility (must be > 0)
///
/// # Errors
/// Returns [`crate::VanOptError::InvalidInput`] for non-positive expiry/vol
/// or any non-finite input.
pub fn bachelier_price(
    option_type: OptionType,
    forward: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    vol: f64,
) -> crate::error::Result<Price> {
    validate_finite(forward, "forward")?;
    validate_finite(strike, "strike")?;
    validate_positive(expiry, "expiry")?;
    validate_positive(vol, "vol")?;
    validate_finite(rate, "rate")?;

    let sqrt_t = expiry.sqrt();
    let d = (forward - strike) / (vol * sqrt_t);
    let df = (-rate * expiry).exp();

    // The time-value term uses φ(d) for both branches; φ is symmetric, so
    // φ(d) = φ(−d) and the put mirrors the call exactly.
    let price = match option_type {
        OptionType::Call => df * (cumulative(d) * (forward - strike) + density(d) * (vol * sqrt_t)),
        OptionType::Put => df * (cumulative(-d) * (strike - forward) + density(d) * (vol * sqrt_t)),
    };
    Ok(Price(price))
}

/// Bachelier vega ∂V/∂σ = e^(−rT)·√T·φ(d).
///
/// Internal helper for the Newton-Raphson implied vol solver; identical for
/// calls and puts.
pub(crate) fn bachelier_vega(
    forward: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    vol: f64,
) -> f64 {
    let sqrt_t = expiry.sqrt();
    let d = (forward - strike) / (vol * sqrt_t);
    (-rate * expiry).exp() * sqrt_t * density(d)
}
