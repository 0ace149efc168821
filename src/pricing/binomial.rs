//! Cox-Ross-Rubinstein binomial lattice pricer for European options.
//!
//! Serves as an independent numerical cross-check of the closed-form models:
//! the lattice price converges to the Black-Scholes price (no dividend
//! yield) as the step count grows. O(n²) time and space; no early-exercise
//! check (European only).
//!
//! # References
//! - Cox, J., Ross, S. & Rubinstein, M. "Option Pricing: A Simplified
//!   Approach" (1979)

use crate::error::VanOptError;
use crate::types::{OptionType, Price};
use crate::validate::{validate_finite, validate_positive};

/// CRR binomial tree price of a European option on a spot underlying.
///
/// Builds a recombining lattice with up-move `u = exp(σ√Δt)`, down-move
/// `d = 1/u`, and risk-neutral up-probability `p = (e^(rΔt) − d)/(u − d)`,
/// then backward-inducts discounted expectations from the terminal payoffs
/// to the root.
///
/// # Arguments
/// * `option_type` — Call or Put
/// * `spot` — Current underlying price (must be > 0)
/// * `strike` — Strike price (must be > 0)
/// * `expiry` — Time to expiry in years (must be > 0)
/// * `rate` — Continuously compounded risk-free rate
/// * `vol` — Annualized lognormal volatility (must be > 0)
/// * `steps` — Number of time steps `n` (must be ≥ 1)
///
/// # Errors
/// Returns [`VanOptError::InvalidInput`] for non-positive
/// spot/strike/expiry/vol, `steps == 0`, or any non-finite input.
pub fn binomial_tree_price(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    vol: f64,
    steps: usize,
) -> crate::error::Result<Price> {
    validate_positive(spot, "spot")?;
    validate_positive(strike, "strike")?;
    validate_positive(expiry, "expiry")?;
    validate_positive(vol, "vol")?;
    validate_finite(rate, "rate")?;
    if steps == 0 {
        return Err(VanOptError::InvalidInput {
            message: "steps must be at least 1".to_string(),
        });
    }

    let n = steps;
    let dt = expiry / n as f64;
    let up = (vol * dt.sqrt()).exp();
    let down = 1.0 / up;
    let prob_up = ((rate * dt).exp() - down) / (up - down);
    let step_df = (-rate * dt).exp();

    // Triangular lattice of underlying prices: node (layer i, up-count j)
    // holds S·u^j·d^(i−j).
    let mut underlying: Vec<Vec<f64>> = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let mut layer = Vec::with_capacity(i + 1);
        for j in 0..=i {
            layer.push(spot * up.powi(j as i32) * down.powi((i - j) as i32));
        }
        underlying.push(layer);
    }

    // Matching triangular lattice of option values, filled backward from the
    // terminal payoffs.
    let sign = option_type.sign();
    let mut values: Vec<Vec<f64>> = underlying
        .iter()
        .map(|layer| vec![0.0; layer.len()])
        .collect();
    for j in 0..=n {
        values[n][j] = (sign * (underlying[n][j] - strike)).max(0.0);
    }
    for i in (0..n).rev() {
        for j in 0..=i {
            values[i][j] = step_df * (prob_up * values[i + 1][j + 1] + (1.0 - prob_up) * values[i + 1][j]);
        }
    }

    Ok(Price(values[0][0]))
}
