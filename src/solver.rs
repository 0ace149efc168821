//! Internal bisection root-finder for implied volatility extraction.
//!
//! Each implied-vol model wraps its closed-form pricer as a monotonically
//! increasing black-box function of volatility and inverts it against an
//! observed price. The loop semantics (midpoint bookkeeping and the
//! *disjunctive* stopping rule) are preserved exactly from the reference
//! implementations this crate is output-compatible with; tightening either
//! changes the pinned solver outputs. See the note on [`BisectionConfig`].

use crate::error::VanOptError;

/// Bracket and tolerances for one model's implied-vol bisection.
///
/// These are protocol constants, not tunables: the solver stops when EITHER
/// the pricing residual falls within `fvalue_tol` OR the bracket width falls
/// within `width_tol`. The disjunctive rule can stop on a narrow bracket
/// while the residual is still large (and vice versa) — a deliberate
/// cheap-convergence trade-off inherited from the reference behavior, kept
/// for output compatibility.
pub(crate) struct BisectionConfig {
    /// Lower volatility bracket endpoint.
    pub lower: f64,
    /// Upper volatility bracket endpoint.
    pub upper: f64,
    /// Pricing-residual tolerance.
    pub fvalue_tol: f64,
    /// Bracket-width tolerance.
    pub width_tol: f64,
    /// Hard iteration cap. The bracket halves every iteration, so for
    /// well-posed inputs `width_tol` is reached long before the cap; the cap
    /// only guarantees termination.
    pub max_iter: usize,
    /// Model name for diagnostics.
    pub model: &'static str,
}

/// Invert `price_fn` against `observed` by bisection over vol.
///
/// `price_fn` must be monotonically increasing in volatility over the
/// bracket (true for all vanilla models in this crate, calls and puts alike).
/// Returns the final bracket midpoint.
///
/// # Errors
/// Returns [`VanOptError::UnattainablePrice`] if `observed` lies outside the
/// price range attainable within `[lower, upper]`, and propagates any pricer
/// error.
pub(crate) fn bisect_vol<F>(
    price_fn: F,
    observed: f64,
    config: &BisectionConfig,
) -> crate::error::Result<f64>
where
    F: Fn(f64) -> crate::error::Result<f64>,
{
    // Reject targets no volatility in the bracket can reach; without this
    // check the width-tolerance branch would terminate the loop anyway and
    // hand back a meaningless endpoint value.
    let price_lower = price_fn(config.lower)?;
    let price_upper = price_fn(config.upper)?;
    if observed < price_lower - config.fvalue_tol {
        return Err(VanOptError::UnattainablePrice {
            message: format!(
                "observed price {observed} below minimum attainable {price_lower} at vol {}",
                config.lower
            ),
            model: config.model,
        });
    }
    if observed > price_upper + config.fvalue_tol {
        return Err(VanOptError::UnattainablePrice {
            message: format!(
                "observed price {observed} above maximum attainable {price_upper} at vol {}",
                config.upper
            ),
            model: config.model,
        });
    }

    #[cfg(feature = "logging")]
    tracing::debug!(
        model = config.model,
        observed,
        lower = config.lower,
        upper = config.upper,
        "implied vol bisection started"
    );

    let mut lower = config.lower;
    let mut upper = config.upper;
    let mut mid = (lower + upper) / 2.0;

    for _iteration in 0..config.max_iter {
        let diff = price_fn(mid)? - observed;
        if diff.is_nan() {
            return Err(VanOptError::NumericalError {
                message: format!("pricer returned NaN at vol {mid}"),
            });
        }

        // Disjunctive stop: residual within tolerance OR bracket collapsed.
        if diff.abs() <= config.fvalue_tol || (upper - lower).abs() <= config.width_tol {
            break;
        }

        #[cfg(feature = "logging")]
        tracing::trace!(iteration = _iteration, mid, residual = diff, "bisection step");

        // Price is increasing in vol, so a non-negative residual means the
        // implied vol lies at or below the midpoint.
        if diff >= 0.0 {
            upper = mid;
        } else {
            lower = mid;
        }
        mid = (lower + upper) / 2.0;
    }

    #[cfg(feature = "logging")]
    tracing::debug!(model = config.model, vol = mid, "implied vol bisection finished");

    Ok(mid)
}
