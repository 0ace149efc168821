//! Black-76 pricing for European options on forwards and futures.
//!
//! The forward already carries the cost of carry, so the drift term reduces
//! to σ²/2 and the rate appears only through discounting.
//!
//! # Formula
//! ```text
//! d1 = (ln(F/K) + (σ²/2)·T) / (σ√T)
//! d2 = d1 − σ√T
//! C  = e^(−rT)·(F·Φ(d1) − K·Φ(d2))
//! P  = e^(−rT)·(K·Φ(−d2) − F·Φ(−d1))
//! ```
//!
//! # References
//! - Black, F. "The pricing of commodity contracts" (1976)

use crate::normal::cumulative;
use crate::types::{OptionType, Price};
use crate::validate::{validate_finite, validate_positive};

/// Black-76 price of a European option on a forward.
///
/// # Arguments
/// * `option_type` — Call or Put
/// * `forward` — Forward price at expiry (must be > 0)
/// * `strike` — Strike price (must be > 0)
/// * `expiry` — Time to expiry in years (must be > 0)
/// * `rate` — Continuously compounded discount rate
/// * `vol` — Annualized lognormal volatility (must be > 0)
///
/// # Errors
/// Returns [`crate::VanOptError::InvalidInput`] for non-positive
/// forward/strike/expiry/vol or any non-finite input.
pub fn black76_price(
    option_type: OptionType,
    forward: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    vol: f64,
) -> crate::error::Result<Price> {
    validate_positive(forward, "forward")?;
    validate_positive(strike, "strike")?;
    validate_positive(expiry, "expiry")?;
    validate_positive(vol, "vol")?;
    validate_finite(rate, "rate")?;

    let sqrt_t = expiry.sqrt();
    let d1 = ((forward / strike).ln() + (vol * vol / 2.0) * expiry) / (vol * sqrt_t);
    let d2 = d1 - vol * sqrt_t;
    let df = (-rate * expiry).exp();

    let price = match option_type {
        OptionType::Call => df * (forward * cumulative(d1) - strike * cumulative(d2)),
        OptionType::Put => df * (strike * cumulative(-d2) - forward * cumulative(-d1)),
    };
    Ok(Price(price))
}
