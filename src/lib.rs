//! # vanopt
//!
//! Analytics library for pricing European vanilla options and recovering
//! implied volatility from observed market prices.
//!
//! Provides closed-form valuation under three market conventions —
//! spot-settled equities (Black-Scholes-Merton), futures (Black-76), and
//! normal-model spreads (Bachelier) — plus a Cox-Ross-Rubinstein binomial
//! lattice for independent cross-checks, and bisection implied-volatility
//! solvers that invert each closed form.
//!
//! ## Architecture
//!
//! - **`normal`** — Standard-normal density and the Zelen–Severo CDF
//!   approximation, the shared leaf of every closed-form pricer
//! - **`pricing`** — BSM, Black-76, Bachelier, and CRR binomial tree pricers
//! - **`implied`** — Bisection (and Bachelier Newton-Raphson) implied vol
//!   solvers
//! - **`conventions`** — Forward price and vol-unit conversion helpers
//!
//! ## Design
//!
//! - **Newtypes for outputs, bare `f64` for inputs.** [`Price`] and [`Vol`]
//!   wrap return values to prevent accidental mixing. Inputs take raw `f64`
//!   for ergonomics — validation happens inside each pricer and solver.
//! - **No panics.** Every fallible operation returns [`Result`]. Library
//!   code never calls `unwrap()` or `expect()`; precondition violations
//!   (zero expiry, zero vol, zero lattice steps) fail fast with
//!   [`VanOptError::InvalidInput`] instead of propagating NaN.
//! - **Stateless and re-entrant.** Every function is a pure computation over
//!   its arguments; there is no shared mutable state, no I/O, and no
//!   cross-call caching, so calls may run on any thread in any order.
//! - **Output compatibility.** The normal-CDF approximation, solver brackets,
//!   tolerances, and the disjunctive bisection stopping rule are protocol
//!   constants shared with the reference implementations this crate mirrors;
//!   the test suite pins their exact outputs.
//! - **Serializable.** All value types implement Serde
//!   `Serialize` / `Deserialize`.

pub mod conventions;
pub mod error;
pub mod implied;
pub mod normal;
pub mod pricing;
mod solver;
pub mod types;
mod validate;

#[doc(inline)]
pub use error::{Result, VanOptError};
#[doc(inline)]
pub use implied::{BachelierImpliedVol, Black76ImpliedVol, BsmImpliedVol};
#[doc(inline)]
pub use pricing::{bachelier_price, binomial_tree_price, black76_price, bsm_price};
#[doc(inline)]
pub use types::{OptionType, Price, Vol};
