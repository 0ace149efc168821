//! Price one contract under every model in the crate.
//!
//! Shows how to:
//!   - Price with Black-Scholes-Merton, Black-76, and Bachelier
//!   - Convert between relative and absolute (price-unit) vol
//!   - Cross-check the closed forms against the binomial lattice
//!
//! Run with: `cargo run --example pricing_models`

use vanopt::{
    bachelier_price, binomial_tree_price, black76_price, bsm_price, conventions, OptionType,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spot = 50.0;
    let strike = 50.0;
    let expiry = 1.0; // 1 year
    let rate = 0.01;
    let dividend_yield = 0.01;
    let vol = 0.20; // 20% lognormal vol

    // ---------------------------------------------------------------
    // 1. Closed-form prices under three conventions
    // ---------------------------------------------------------------

    let bsm = bsm_price(
        OptionType::Call,
        spot,
        strike,
        expiry,
        rate,
        dividend_yield,
        vol,
    )?;
    let forward = conventions::forward_price(spot, rate, dividend_yield, expiry);
    let b76 = black76_price(OptionType::Call, forward, strike, expiry, rate, vol)?;

    // The Bachelier model wants an absolute vol in price units.
    let normal_vol = conventions::absolute_vol(vol, forward);
    let bfs = bachelier_price(OptionType::Call, forward, strike, expiry, rate, normal_vol)?;

    println!("ATM call, S = F = K = {spot}, t = {expiry}y, vol = {:.0}%", vol * 100.0);
    println!("  Black-Scholes-Merton: {:.12}", bsm.0);
    println!("  Black-76:             {:.12}", b76.0);
    println!("  Bachelier (σ = {normal_vol}):  {:.12}", bfs.0);

    // ---------------------------------------------------------------
    // 2. Binomial lattice cross-check (no dividend yield)
    // ---------------------------------------------------------------

    let closed = bsm_price(OptionType::Call, spot, strike, expiry, rate, 0.0, vol)?;
    println!("\nCRR lattice convergence toward {:.12}", closed.0);
    for steps in [10, 100, 1000] {
        let bt = binomial_tree_price(OptionType::Call, spot, strike, expiry, rate, vol, steps)?;
        println!(
            "  n = {steps:>4}: {:.12}  (error {:+.2e})",
            bt.0,
            bt.0 - closed.0
        );
    }

    Ok(())
}
