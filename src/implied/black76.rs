//! Black-76 implied volatility via bisection.

use crate::pricing::black76_price;
use crate::solver::{bisect_vol, BisectionConfig};
use crate::types::{OptionType, Vol};
use crate::validate::validate_positive;

/// Black-76 implied volatility calculator for options on forwards.
///
/// Shares the lognormal bracket `[0.0001, 9.0]` and tolerances (1e-6
/// residual, 1e-4 width) with [`crate::implied::BsmImpliedVol`].
pub struct Black76ImpliedVol;

impl Black76ImpliedVol {
    const VOL_LOWER: f64 = 0.0001;
    const VOL_UPPER: f64 = 9.0;
    const FVALUE_TOL: f64 = 1e-6;
    const WIDTH_TOL: f64 = 1e-4;

    /// Compute Black-76 implied volatility from an observed option price.
    ///
    /// # Arguments
    /// * `option_price` — Observed market price (must be > 0)
    /// * `forward` — Forward price at expiry (must be > 0)
    /// * `strike` — Strike price (must be > 0)
    /// * `expiry` — Time to expiry in years (must be > 0)
    /// * `rate` — Continuously compounded discount rate
    /// * `option_type` — Call or Put
    ///
    /// # Errors
    /// Returns [`crate::VanOptError::InvalidInput`] for invalid contract
    /// parameters and [`crate::VanOptError::UnattainablePrice`] if no
    /// volatility in the bracket reproduces `option_price`.
    pub fn compute(
        option_price: f64,
        forward: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        option_type: OptionType,
    ) -> crate::error::Result<Vol> {
        validate_positive(option_price, "option_price")?;
        let config = BisectionConfig {
            lower: Self::VOL_LOWER,
            upper: Self::VOL_UPPER,
            fvalue_tol: Self::FVALUE_TOL,
            width_tol: Self::WIDTH_TOL,
            max_iter: 200,
            model: "Black-76",
        };
        let vol = bisect_vol(
            |v| black76_price(option_type, forward, strike, expiry, rate, v).map(|p| p.0),
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

    const F: f64 = 50.0;
    const K: f64 = 50.0;
    const T: f64 = 1.0;
    const R: f64 = 0.01;

    #[test]
    fn recovers_pinned_fixture() {
        let iv =
            Black76ImpliedVol::compute(3.9431602019637353, F, K, T, R, OptionType::Call).unwrap();
        assert_abs_diff_eq!(iv.0, 0.2000146183013916, epsilon = 1e-9);
    }

    #[test]
    fn agrees_with_bsm_when_yield_equals_rate() {
        let price = crate::pricing::black76_price(OptionType::Call, F, K, T, R, 0.35)
            .unwrap()
            .0;
        let b76 = Black76ImpliedVol::compute(price, F, K, T, R, OptionType::Call).unwrap();
        let bsm =
            crate::implied::BsmImpliedVol::compute(price, F, K, T, R, R, OptionType::Call).unwrap();
        assert_abs_diff_eq!(b76.0, bsm.0, epsilon = 1e-10);
    }

    #[test]
    fn round_trips_through_the_pricer() {
        for vol in [0.1, 0.3, 0.8] {
            let price = crate::pricing::black76_price(OptionType::Put, F, 55.0, T, R, vol)
                .unwrap()
                .0;
            let iv = Black76ImpliedVol::compute(price, F, 55.0, T, R, OptionType::Put).unwrap();
            assert_abs_diff_eq!(iv.0, vol, epsilon = 1e-4);
        }
    }

    #[test]
    fn rejects_price_above_bracket_maximum() {
        let r = Black76ImpliedVol::compute(1000.0, F, K, T, R, OptionType::Call);
        assert!(matches!(
            r,
            Err(VanOptError::UnattainablePrice { model: "Black-76", .. })
        ));
    }

    #[test]
    fn rejects_zero_price() {
        let r = Black76ImpliedVol::compute(0.0, F, K, T, R, OptionType::Call);
        assert!(matches!(r, Err(VanOptError::InvalidInput { .. })));
    }
}
