//! Recover implied volatility from an observed market price.
//!
//! Shows how to:
//!   - Invert each closed-form model by bisection
//!   - Use the Bachelier Newton-Raphson fast path
//!   - Verify round-trip accuracy through the pricer
//!
//! Run with: `cargo run --example implied_vol`

use vanopt::{
    bsm_price, BachelierImpliedVol, Black76ImpliedVol, BsmImpliedVol, OptionType,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spot = 50.0;
    let strike = 50.0;
    let expiry = 1.0;
    let rate = 0.01;
    let dividend_yield = 0.01;
    let observed = 3.9431602019637353; // 20%-vol BSM fair value

    // ---------------------------------------------------------------
    // 1. Bisection under each model
    // ---------------------------------------------------------------

    let bsm_iv = BsmImpliedVol::compute(
        observed,
        spot,
        strike,
        expiry,
        rate,
        dividend_yield,
        OptionType::Call,
    )?;
    let b76_iv =
        Black76ImpliedVol::compute(observed, spot, strike, expiry, rate, OptionType::Call)?;
    let bfs_iv =
        BachelierImpliedVol::compute(observed, spot, strike, expiry, rate, OptionType::Call)?;

    println!("Observed price: {observed}");
    println!("  BSM implied vol:       {:.12}", bsm_iv.0);
    println!("  Black-76 implied vol:  {:.12}", b76_iv.0);
    println!(
        "  Bachelier implied vol: {:.12} ({:.4} relative)",
        bfs_iv.0,
        bfs_iv.0 / spot
    );

    // ---------------------------------------------------------------
    // 2. Newton-Raphson fast path for the normal model
    // ---------------------------------------------------------------

    let newton =
        BachelierImpliedVol::compute_newton(observed, spot, strike, expiry, rate, OptionType::Call)?;
    println!("  Bachelier (Newton):    {:.12}", newton.0);

    // ---------------------------------------------------------------
    // 3. Round trip: reprice at the recovered vol
    // ---------------------------------------------------------------

    let repriced = bsm_price(
        OptionType::Call,
        spot,
        strike,
        expiry,
        rate,
        dividend_yield,
        bsm_iv.0,
    )?;
    println!("\nRound trip");
    println!("  Repriced at recovered vol: {:.15}", repriced.0);
    println!("  Residual: {:+.2e}", repriced.0 - observed);

    Ok(())
}
