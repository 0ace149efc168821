//! Bachelier (normal) implied volatility.
//!
//! Returns an **absolute** volatility in price units, matching the
//! [`crate::pricing::bachelier_price`] convention. Because the numeric range
//! of a price-unit vol is much wider than a relative vol, the bisection
//! bracket spans `[0.01, 999]` and the width tolerance relaxes to 1e-2.
//!
//! Two solvers are provided: plain bisection ([`BachelierImpliedVol::compute`],
//! the reference-compatible path) and a Newton-Raphson variant
//! ([`BachelierImpliedVol::compute_newton`]) that converges in a handful of
//! iterations by exploiting the closed-form normal vega.

use crate::error::VanOptError;
use crate::pricing::bachelier::{bachelier_price, bachelier_vega};
use crate::solver::{bisect_vol, BisectionConfig};
use crate::types::{OptionType, Vol};
use crate::validate::{validate_finite, validate_positive};

/// Bachelier (normal model) implied volatility calculator.
pub struct BachelierImpliedVol;

impl BachelierImpliedVol {
    /// Lower volatility bracket endpoint (price units).
    const VOL_LOWER: f64 = 0.01;
    /// Upper volatility bracket endpoint (price units).
    const VOL_UPPER: f64 = 999.0;
    /// Pricing-residual tolerance.
    const FVALUE_TOL: f64 = 1e-6;
    /// Bracket-width tolerance, wider than the lognormal solvers because the
    /// vol is in absolute price units.
    const WIDTH_TOL: f64 = 1e-2;
    /// Newton-Raphson iteration cap.
    const NEWTON_MAX_ITER: usize = 10;
    /// Newton-Raphson residual threshold.
    const NEWTON_TOL: f64 = 1e-10;

    /// Compute normal (Bachelier) implied volatility by bisection.
    ///
    /// The returned [`Vol`] is absolute, in price units; divide by the
    /// underlying level (see [`crate::conventions::relative_vol`]) to compare
    /// against lognormal vols.
    ///
    /// # Arguments
    /// * `option_price` — Observed market price (must be > 0)
    /// * `forward` — Forward price of the spread (any finite value)
    /// * `strike` — Strike price (any finite value)
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
            model: "Bachelier",
        };
        let vol = bisect_vol(
            |v| bachelier_price(option_type, forward, strike, expiry, rate, v).map(|p| p.0),
            option_price,
            &config,
        )?;
        Ok(Vol(vol))
    }

    /// Compute normal implied volatility by Newton-Raphson.
    ///
    /// Seeds from `σ₀ = √(2π/T)·F/K` and iterates
    /// `σ ← σ − (price(σ) − observed)/vega(σ)`, stopping once the pricing
    /// residual falls below 1e-10 or after 10 iterations. Converges far
    /// faster than bisection near the money but inherits Newton's usual
    /// sensitivity to the seed far from it.
    ///
    /// # Errors
    /// Same invalid-input conditions as [`Self::compute`], plus
    /// [`crate::VanOptError::NumericalError`] if an iterate leaves the
    /// positive-vol domain (vanishing vega).
    pub fn compute_newton(
        option_price: f64,
        forward: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        option_type: OptionType,
    ) -> crate::error::Result<Vol> {
        validate_positive(option_price, "option_price")?;
        validate_finite(forward, "forward")?;
        validate_positive(strike, "strike")?;
        validate_positive(expiry, "expiry")?;
        validate_finite(rate, "rate")?;

        let mut vol = (2.0 * std::f64::consts::PI / expiry).sqrt() * forward / strike;

        #[cfg(feature = "logging")]
        tracing::debug!(seed = vol, observed = option_price, "Bachelier Newton started");

        for _ in 0..Self::NEWTON_MAX_ITER {
            let price = bachelier_price(option_type, forward, strike, expiry, rate, vol)?.0;
            let vega = bachelier_vega(forward, strike, expiry, rate, vol);
            if !vega.is_finite() || vega <= 0.0 {
                return Err(VanOptError::NumericalError {
                    message: format!("Bachelier vega vanished at vol {vol}"),
                });
            }
            vol -= (price - option_price) / vega;
            if !vol.is_finite() || vol <= 0.0 {
                return Err(VanOptError::NumericalError {
                    message: format!("Newton iterate left the positive-vol domain: {vol}"),
                });
            }
            if (price - option_price).abs() < Self::NEWTON_TOL {
                break;
            }
        }
        Ok(Vol(vol))
    }
}
