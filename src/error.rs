//! Error types for the vanopt library.
//!
//! All fallible operations return `Result<T, VanOptError>` rather than
//! panicking, providing meaningful diagnostics for invalid inputs and
//! solver failures.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, VanOptError>;

/// Errors that can occur during pricing and implied volatility extraction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VanOptError {
    /// Input data is invalid (e.g., non-positive expiry or vol, zero lattice
    /// steps, NaN/Inf parameters).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// The observed option price lies outside the range attainable within the
    /// solver's volatility bracket, so no implied volatility exists there.
    #[error("unattainable price: {message}")]
    UnattainablePrice {
        message: String,
        /// Model whose bracket was exhausted (e.g., "BSM", "Bachelier").
        model: &'static str,
    },

    /// Numerical computation failed (e.g., NaN produced mid-solve).
    #[error("numerical error: {message}")]
    NumericalError { message: String },
}
