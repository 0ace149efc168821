//! Market conventions and unit conversions.
//!
//! The lognormal models (BSM, Black-76) quote volatility as a relative
//! log-return number, while the Bachelier model quotes it in absolute price
//! units. The pricers never convert between the two — that is the caller's
//! job, and these helpers are the supported way to do it.

/// Compute the forward price from spot: `F = S·e^((r − q)·T)`.
///
/// Useful for feeding a spot-market contract into the forward-based models
/// (Black-76, Bachelier).
pub fn forward_price(spot: f64, rate: f64, dividend_yield: f64, expiry: f64) -> f64 {
    spot * ((rate - dividend_yield) * expiry).exp()
}

/// Scale a relative (lognormal) volatility to an absolute price-unit
/// volatility at the given underlying level: `σ_abs = σ_rel·F`.
pub fn absolute_vol(relative_vol: f64, forward: f64) -> f64 {
    relative_vol * forward
}

/// Scale an absolute price-unit volatility back to a relative one:
/// `σ_rel = σ_abs/F`.
pub fn relative_vol(absolute_vol: f64, forward: f64) -> f64 {
    absolute_vol / forward
}
