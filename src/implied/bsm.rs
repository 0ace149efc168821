//! Black-Scholes-Merton implied volatility via bisection.

use crate::pricing::bsm_price;
use crate::solver::{bisect_vol, BisectionConfig};
use crate::types::{OptionType, Vol};
use crate::validate::validate_positive;

/// Black-Scholes-Merton implied volatility calculator.
///
/// Inverts [`bsm_price`] over the bracket `[0.0001, 9.0]` with a pricing
/// residual tolerance of 1e-6 and a bracket-width tolerance of 1e-4. The
/// constants are protocol values shared with the reference implementations
/// this crate is output-compatible with; do not tighten them.
pub struct BsmImpliedVol;

impl BsmImpliedVol {
    /// Lower volatility bracket endpoint.
    const VOL_LOWER: f64 = 0.0001;
    /// Upper volatility bracket endpoint.
    const VOL_UPPER: f64 = 9.0;
    /// Pricing-residual tolerance.
    const FVALUE_TOL: f64 = 1e-6;
    /// Bracket-width tolerance.
    const WIDTH_TOL: f64 = 1e-4;

    /// Compute BSM implied volatility from an observed option price.
    ///
    /// # Arguments
    /// * `option_price` — Observed market price (must be > 0)
    /// * `spot` — Current underlying price (must be > 0)
    /// * `strike` — Strike price (must be > 0)
    /// * `expiry` — Time to expiry in years (must be > 0)
    /// * `rate` — Continuously compounded risk-free rate
    /// * `dividend_yield` — Continuous dividend/convenience yield
    /// * `option_type` — Call or Put
    ///
    /// # Errors
    /// Returns [`crate::VanOptError::InvalidInput`] for invalid contract
    /// parameters and [`crate::VanOptError::UnattainablePrice`] if no
    /// volatility in the bracket reproduces `option_price`.
    pub fn compute(
        option_price: f64,
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        dividend_yield: f64,
        option_type: OptionType,
    ) -> crate::error::Result<Vol> {
        validate_positive(option_price, "option_price")?;
        let config = BisectionConfig {
            lower: Self::VOL_LOWER,
            upper: Self::VOL_UPPER,
            fvalue_tol: Self::FVALUE_TOL,
            width_tol: Self::WIDTH_TOL,
            max_iter: 200,
            model: "BSM",
        };
        let vol = bisect_vol(
            |v| bsm_price(option_type, spot, strike, expiry, rate, dividend_yield, v).map(|p| p.0),
            option_price,
            &config,
        )?;
        Ok(Vol(vol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VanOptError;
    use approx::assert_abs_diff_eq;

    const S: f64 = 50.0;
    const K: f64 = 50.0;
    const T: f64 = 1.0;
    const R: f64 = 0.01;
    const Q: f64 = 0.01;

    #[test]
    fn recovers_pinned_fixture() {
        let iv = BsmImpliedVol::compute(
            3.9431602019637353,
            S,
            K,
            T,
            R,
            Q,
            OptionType::Call,
        )
        .unwrap();
        assert_abs_diff_eq!(iv.0, 0.2000146183013916, epsilon = 1e-9);
    }

    #[test]
    fn round_trips_through_the_pricer() {
        for vol in [0.05, 0.2, 0.5, 1.5] {
            let price = crate::pricing::bsm_price(OptionType::Put, S, 45.0, T, R, Q, vol)
                .unwrap()
                .0;
            let iv = BsmImpliedVol::compute(price, S, 45.0, T, R, Q, OptionType::Put).unwrap();
            assert_abs_diff_eq!(iv.0, vol, epsilon = 1e-4);
        }
    }

    #[test]
    fn rejects_negative_price() {
        let r = BsmImpliedVol::compute(-1.0, S, K, T, R, Q, OptionType::Call);
        assert!(matches!(r, Err(VanOptError::InvalidInput { .. })));
    }

    #[test]
    fn rejects_price_above_bracket_maximum() {
        // Even a 900% vol cannot justify a price above the spot forward value.
        let r = BsmImpliedVol::compute(100.0, S, K, T, R, Q, OptionType::Call);
        assert!(matches!(r, Err(VanOptError::UnattainablePrice { model: "BSM", .. })));
    }

    #[test]
    fn rejects_price_below_bracket_minimum() {
        // Near-zero vol leaves an ITM call at discounted intrinsic; anything
        // cheaper is unattainable.
        let r = BsmImpliedVol::compute(1e-9, 60.0, K, T, R, 0.0, OptionType::Call);
        assert!(matches!(r, Err(VanOptError::UnattainablePrice { .. })));
    }
}
