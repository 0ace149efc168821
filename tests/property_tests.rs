//! Property-based tests using proptest.
//!
//! These tests verify invariant properties across random inputs rather than
//! testing fixed examples. They help catch edge cases and ensure robustness.

use proptest::prelude::*;
use vanopt::normal::{cumulative, density};
use vanopt::{
    bachelier_price, binomial_tree_price, black76_price, bsm_price, BsmImpliedVol, OptionType,
};

// --- Property 1: normal CDF symmetry ---

proptest! {
    /// Φ(x) + Φ(−x) = 1 within the Zelen–Severo approximation's error bound.
    #[test]
    fn cdf_symmetry(x in -10.0_f64..10.0) {
        let sum = cumulative(x) + cumulative(-x);
        prop_assert!((sum - 1.0).abs() < 1e-7, "Φ(x) + Φ(−x) = {sum} at x = {x}");
    }
}

// --- Property 2: density is a symmetric, bounded bell ---

proptest! {
    #[test]
    fn density_symmetric_and_bounded(x in -20.0_f64..20.0) {
        prop_assert_eq!(density(x), density(-x));
        prop_assert!(density(x) > 0.0);
        prop_assert!(density(x) <= density(0.0));
    }
}

// --- Property 3: put-call parity ---

proptest! {
    /// BSM parity: C − P = e^(−qT)·S − e^(−rT)·K.
    #[test]
    fn bsm_put_call_parity(
        spot in 10.0_f64..200.0,
        strike in 10.0_f64..200.0,
        expiry in 0.05_f64..3.0,
        rate in -0.02_f64..0.10,
        dividend_yield in 0.0_f64..0.05,
        vol in 0.05_f64..1.0,
    ) {
        let c = bsm_price(OptionType::Call, spot, strike, expiry, rate, dividend_yield, vol)
            .unwrap().0;
        let p = bsm_price(OptionType::Put, spot, strike, expiry, rate, dividend_yield, vol)
            .unwrap().0;
        let parity = (-dividend_yield * expiry).exp() * spot - (-rate * expiry).exp() * strike;
        prop_assert!((c - p - parity).abs() < 1e-6 * spot.max(strike));
    }
}

proptest! {
    /// Black-76 and Bachelier parity: C − P = e^(−rT)·(F − K).
    #[test]
    fn forward_model_put_call_parity(
        forward in 10.0_f64..200.0,
        strike in 10.0_f64..200.0,
        expiry in 0.05_f64..3.0,
        rate in -0.02_f64..0.10,
        vol in 0.05_f64..1.0,
    ) {
        let parity = (-rate * expiry).exp() * (forward - strike);

        let c = black76_price(OptionType::Call, forward, strike, expiry, rate, vol).unwrap().0;
        let p = black76_price(OptionType::Put, forward, strike, expiry, rate, vol).unwrap().0;
        prop_assert!((c - p - parity).abs() < 1e-6 * forward.max(strike));

        let normal_vol = vol * forward;
        let c = bachelier_price(OptionType::Call, forward, strike, expiry, rate, normal_vol)
            .unwrap().0;
        let p = bachelier_price(OptionType::Put, forward, strike, expiry, rate, normal_vol)
            .unwrap().0;
        prop_assert!((c - p - parity).abs() < 1e-6 * forward.max(strike));
    }
}

// --- Property 4: monotonicity in vol (bisection precondition) ---

proptest! {
    /// Each closed-form price must be strictly increasing in volatility for
    /// both calls and puts; the implied-vol bisection relies on it.
    /// Domain kept away from deep-ITM/low-vol corners where Φ saturates to
    /// exactly 1.0 in f64 and the price becomes flat in vol.
    #[test]
    fn prices_increase_with_vol(
        forward in 40.0_f64..60.0,
        strike in 40.0_f64..60.0,
        expiry in 0.5_f64..2.0,
        vol in 0.1_f64..1.0,
    ) {
        let bump = vol + 0.05;
        for option_type in [OptionType::Call, OptionType::Put] {
            let lo = bsm_price(option_type, forward, strike, expiry, 0.01, 0.01, vol).unwrap().0;
            let hi = bsm_price(option_type, forward, strike, expiry, 0.01, 0.01, bump).unwrap().0;
            prop_assert!(hi > lo, "BSM price not increasing in vol");

            let lo = black76_price(option_type, forward, strike, expiry, 0.01, vol).unwrap().0;
            let hi = black76_price(option_type, forward, strike, expiry, 0.01, bump).unwrap().0;
            prop_assert!(hi > lo, "Black-76 price not increasing in vol");

            let lo = bachelier_price(option_type, forward, strike, expiry, 0.01, vol * forward)
                .unwrap().0;
            let hi = bachelier_price(option_type, forward, strike, expiry, 0.01, bump * forward)
                .unwrap().0;
            prop_assert!(hi > lo, "Bachelier price not increasing in vol");
        }
    }
}

// --- Property 5: implied vol round trip ---

proptest! {
    /// Solving for the vol that was used to generate the price must land
    /// within the solver's bracket-width tolerance.
    #[test]
    fn bsm_implied_vol_round_trip(
        strike in 40.0_f64..60.0,
        vol in 0.15_f64..1.0,
    ) {
        let spot = 50.0;
        let price = bsm_price(OptionType::Call, spot, strike, 1.0, 0.01, 0.01, vol)
            .unwrap().0;
        let iv = BsmImpliedVol::compute(price, spot, strike, 1.0, 0.01, 0.01, OptionType::Call)
            .unwrap().0;
        prop_assert!((iv - vol).abs() < 1e-4, "round trip drifted: {vol} -> {iv}");
    }
}

// --- Property 6: lattice price brackets sanity ---

proptest! {
    /// The binomial price stays within no-arbitrage bounds: below the
    /// underlying (call) and above discounted intrinsic.
    #[test]
    fn binomial_price_within_no_arbitrage_bounds(
        spot in 20.0_f64..100.0,
        strike in 20.0_f64..100.0,
        vol in 0.05_f64..0.8,
        steps in 1_usize..64,
    ) {
        let rate = 0.01;
        let expiry = 1.0;
        let price = binomial_tree_price(OptionType::Call, spot, strike, expiry, rate, vol, steps)
            .unwrap().0;
        let intrinsic_fwd = spot - (-rate * expiry).exp() * strike;
        prop_assert!(price <= spot + 1e-9);
        prop_assert!(price >= intrinsic_fwd.max(0.0) - 1e-9);
    }
}
