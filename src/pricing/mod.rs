//! Closed-form and lattice pricers for European vanilla options.
//!
//! Four independent valuation functions, each a pure function of its
//! arguments:
//!
//! - [`bsm_price`] — Black-Scholes-Merton on a spot underlying with a flat
//!   continuous dividend yield
//! - [`black76_price`] — Black-76 on a forward/futures underlying
//! - [`bachelier_price`] — Bachelier (normal) model for spreads, volatility
//!   in absolute price units
//! - [`binomial_tree_price`] — Cox-Ross-Rubinstein lattice, used as an
//!   independent cross-check of the closed forms rather than a production
//!   pricer
//!
//! All share the [`crate::normal`] leaf approximation (the lattice needs no
//! normal approximation). No pricer holds state; two calls with identical
//! inputs are interchangeable.

pub mod bachelier;
pub mod binomial;
pub mod black76;
pub mod bsm;

pub use bachelier::bachelier_price;
pub use binomial::binomial_tree_price;
pub use black76::black76_price;
pub use bsm::bsm_price;
