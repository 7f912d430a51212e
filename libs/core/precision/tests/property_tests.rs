//! Property-based tests for the precision context and transcendental
//! primitives.
//!
//! Unlike the fixed-value unit tests in `src/transcendental.rs`, these
//! check invariants that must hold across a generated range of inputs.
//!
//! # How to run
//!
//! ```bash
//! cargo test --test property_tests
//! ```

use proptest::prelude::*;
use rug::Float;

use grfc_core_precision::{transcendental, Context};

fn ctx() -> Context {
    Context::new(256, 64)
}

proptest! {
    /// `exp(ln(x)) == x` for arbitrary positive `x`, within a tolerance
    /// that scales with the context's precision. This is the round-trip
    /// the snap kernel depends on: `p_hat = exp((ln N + delta_phi) / 2)`
    /// only recovers a meaningful candidate if `exp` inverts `ln`.
    #[test]
    fn exp_ln_round_trips_for_arbitrary_positive_values(raw in 1e-6f64..1e15f64) {
        let ctx = ctx();
        let x = Float::with_val(ctx.precision(), raw);
        let l = transcendental::ln(&ctx, &x).expect("raw is strictly positive");
        let back = transcendental::exp(&ctx, &l);
        let diff = Float::with_val(ctx.precision(), &back - &x).abs();
        let tolerance = Float::with_val(ctx.precision(), raw.abs().max(1.0) * 1e-9);
        prop_assert!(diff < tolerance, "exp(ln({raw})) = {back}, diff {diff} exceeds {tolerance}");
    }

    /// `frac(x)` is always in `[0, 1)` regardless of the sign or
    /// magnitude of `x`. The additive-recurrence sampler relies on this
    /// to keep its coordinate bounded across an unbounded run length.
    #[test]
    fn frac_always_lands_in_the_unit_interval(raw in -1e9f64..1e9f64) {
        let ctx = ctx();
        let x = Float::with_val(ctx.precision(), raw);
        let f = transcendental::frac(&ctx, &x);
        prop_assert!(f >= 0 && f < 1, "frac({raw}) = {f} escaped [0, 1)");
    }

    /// `ln` rejects every non-positive input, never panics or returns a
    /// bogus value.
    #[test]
    fn ln_rejects_every_non_positive_input(raw in -1e12f64..=0.0f64) {
        let ctx = ctx();
        let x = Float::with_val(ctx.precision(), raw);
        prop_assert!(transcendental::ln(&ctx, &x).is_err());
    }
}
