//! Black-Scholes-Merton pricing for spot-settled European options.
//!
//! # Formula
//! ```text
//! d1 = (ln(S/K) + (r − q + σ²/2)·T) / (σ√T)
//! d2 = d1 − σ√T
//! C  = e^(−qT)·S·Φ(d1) − e^(−rT)·K·Φ(d2)
//! P  = e^(−rT)·K·Φ(−d2) − e^(−qT)·S·Φ(−d1)
//! ```
//!
//! # References
//! - Black, F. & Scholes, M. "The Pricing of Options and Corporate
//!   Liabilities" (1973)
//! - Merton, R. "Theory of Rational Option Pricing" (1973)

use crate::normal::cumulative;
use crate::types::{OptionType, Price};
use crate::validate::{validate_finite, validate_positive};

/// Black-Scholes-Merton price of a European option on a spot underlying with
/// a flat continuous dividend (or convenience) yield.
///
/// # Arguments
/// * `option_type` — Call or Put
/// * `spot` — Current underlying price (must be > 0)
/// * `strike` — Strike price (must be > 0)
/// * `expiry` — Time to expiry in years (must be > 0)
/// * `rate` — Continuously compounded risk-free rate
/// * `dividend_yield` — Continuous dividend/convenience yield `q`
/// * `vol` — Annualized lognormal volatility (must be > 0)
///
/// # Errors
/// Returns [`crate::VanOptError::InvalidInput`] for non-positive
/// spot/strike/expiry/vol or any non-finite input. The `d1`/`d2` terms divide
/// by `σ√T`, so `expiry` and `vol` are hard preconditions, not soft edge
/// cases.
pub fn bsm_price(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
) -> crate::error::Result<Price> {
    validate_positive(spot, "spot")?;
    validate_positive(strike, "strike")?;
    validate_positive(expiry, "expiry")?;
    validate_positive(vol, "vol")?;
    validate_finite(rate, "rate")?;
    validate_finite(dividend_yield, "dividend_yield")?;

    let sqrt_t = expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate - dividend_yield + vol * vol / 2.0) * expiry)
        / (vol * sqrt_t);
    let d2 = d1 - vol * sqrt_t;

    let carry_df = (-dividend_yield * expiry).exp();
    let rate_df = (-rate * expiry).exp();

    let price = match option_type {
        OptionType::Call => carry_df * spot * cumulative(d1) - rate_df * strike * cumulative(d2),
        OptionType::Put => rate_df * strike * cumulative(-d2) - carry_df * spot * cumulative(-d1),
    };
    Ok(Price(price))
}
