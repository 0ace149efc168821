//! Implied volatility extraction from observed option prices.
//!
//! Provides one solver per pricing model:
//!
//! - [`BsmImpliedVol`] — Black-Scholes-Merton (spot underlying, continuous yield)
//! - [`Black76ImpliedVol`] — Black-76 (forward underlying)
//! - [`BachelierImpliedVol`] — Bachelier normal model (absolute price-unit vol)
//!
//! Each solver treats its closed-form pricer as a monotonically increasing
//! black-box function of volatility and inverts it by bisection over a fixed
//! bracket (see [`crate::solver`] for the shared loop and its deliberately
//! disjunctive stopping rule). The Bachelier solver additionally offers a
//! Newton-Raphson variant seeded from the ATM normal vol.

pub mod bachelier;
pub mod black76;
pub mod bsm;

pub use bachelier::BachelierImpliedVol;
pub use black76::Black76ImpliedVol;
pub use bsm::BsmImpliedVol;
