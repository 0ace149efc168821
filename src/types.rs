//! Core domain types for option pricing.
//!
//! These newtypes wrap `f64` to provide compile-time type safety, preventing
//! accidental mixing of model outputs (e.g., treating a price as a volatility).
//!
//! # Newtype Strategy
//!
//! **Outputs use newtypes** — [`Price`] and [`Vol`] wrap return values so
//! callers can't silently confuse a fair value with an implied volatility.
//!
//! **Inputs use bare `f64`** — pricing functions take raw floats for
//! ergonomics. Requiring `bsm_price(Spot(50.0), ...)` at every call site adds
//! ceremony without meaningful safety (the caller already knows they're
//! passing a spot). Newtypes guard against *silent* misuse of outputs, while
//! inputs are self-documenting via parameter names.
//!
//! # Why no `Eq` or `Ord`?
//! These types wrap `f64`, which does not implement `Eq` or `Ord` because
//! `NaN` breaks total ordering. We derive `PartialEq` and `PartialOrd` only.
//! Do not add `Eq` without handling `NaN` explicitly.

use serde::{Deserialize, Serialize};

/// Fair value of an option under a given model, in the currency of the
/// underlying quote.
///
/// # Examples
/// ```
/// use vanopt::types::Price;
/// let price = Price(3.94);
/// assert_eq!(price.0, 3.94);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Price(pub f64);

/// Volatility `σ`, annualized.
///
/// For the lognormal models (BSM, Black-76) this is a relative (log-return)
/// volatility: 0.20 means 20% annualized. For the Bachelier model it is an
/// absolute volatility in price units — see [`crate::conventions`] for
/// conversion helpers.
///
/// # Examples
/// ```
/// use vanopt::types::Vol;
/// let vol = Vol(0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Vol(pub f64);

/// Option type: call or put.
///
/// The reference implementations this crate is output-compatible with
/// dispatch on a string tag with an implicit "anything that is not a call is
/// a put" fallback. That open dispatch is deliberately narrowed here to a
/// closed two-variant enum; there is no third branch anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// Right to buy at strike price.
    Call,
    /// Right to sell at strike price.
    Put,
}

impl OptionType {
    /// Payoff sign: +1 for a call, −1 for a put.
    pub(crate) fn sign(self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}
