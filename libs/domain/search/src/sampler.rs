// [libs/domain/search/src/sampler.rs]
/*!
 * =================================================================
 * APARATO: WEYL SAMPLER (ESTRATO L2)
 * RESPONSABILIDAD: RECURRENCIA ADITIVA DE BAJA DISCREPANCIA PARA k
 *
 * u_0 = 0; u_{n+1} = frac(u_n + phi_inv); k_n = k_lo + u_n*(k_hi-k_lo).
 * Trivialmente reanudable desde (n, u_n); sin estado pseudoaleatorio.
 * =================================================================
 */

use grfc_core_precision::{transcendental, Context};
use rug::Float;

/// Additive-recurrence (Weyl/Kronecker) sampler over `k in [k_lo, k_hi)`.
#[derive(Debug, Clone)]
pub struct WeylSampler {
    u: Float,
    phi_inv: Float,
    k_lo: Float,
    k_hi: Float,
    samples_drawn: u64,
}

impl WeylSampler {
    /// Builds a sampler starting at `u_0 = 0`.
    #[must_use]
    pub fn new(ctx: &Context, k_lo: f64, k_hi: f64) -> Self {
        Self {
            u: ctx.zero(),
            phi_inv: ctx.golden_ratio_inverse(),
            k_lo: Float::with_val(ctx.precision(), k_lo),
            k_hi: Float::with_val(ctx.precision(), k_hi),
            samples_drawn: 0,
        }
    }

    /// Restores a sampler at a specific `(n, u_n)` checkpoint, for
    /// resumable searches.
    #[must_use]
    pub fn resume_at(ctx: &Context, k_lo: f64, k_hi: f64, samples_drawn: u64, u: Float) -> Self {
        Self {
            u,
            phi_inv: ctx.golden_ratio_inverse(),
            k_lo: Float::with_val(ctx.precision(), k_lo),
            k_hi: Float::with_val(ctx.precision(), k_hi),
            samples_drawn,
        }
    }

    /// Current additive-recurrence coordinate, `u_n in [0, 1)`.
    #[must_use]
    pub fn coordinate(&self) -> &Float {
        &self.u
    }

    /// Number of `k` values drawn so far.
    #[must_use]
    pub fn samples_drawn(&self) -> u64 {
        self.samples_drawn
    }

    /// Advances the recurrence and returns the next `k` value.
    pub fn next_k(&mut self, ctx: &Context) -> Float {
        self.u = transcendental::frac(ctx, &Float::with_val(ctx.precision(), &self.u + &self.phi_inv));
        self.samples_drawn += 1;
        let span = Float::with_val(ctx.precision(), &self.k_hi - &self.k_lo);
        Float::with_val(ctx.precision(), &self.k_lo + Float::with_val(ctx.precision(), &self.u * span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grfc_core_precision::Context;

    #[test]
    fn samples_stay_within_the_k_window() {
        let ctx = Context::new(128, 64);
        let mut sampler = WeylSampler::new(&ctx, 2.0, 4096.0);
        for _ in 0..500 {
            let k = sampler.next_k(&ctx);
            assert!(k >= 2.0 && k < 4096.0, "k out of window: {k}");
        }
    }

    #[test]
    fn coordinate_sequence_has_bounded_discrepancy() {
        // Bin u_1..u_n into `buckets` and check the max bucket-count
        // deviation from the uniform expectation is O(log n / n) * n,
        // i.e. bounded by a small multiple of log(n) in absolute count.
        let ctx = Context::new(128, 64);
        let mut sampler = WeylSampler::new(&ctx, 0.0, 1.0);
        let n = 2000usize;
        let buckets = 20usize;
        let mut counts = vec![0u32; buckets];

        for _ in 0..n {
            let k = sampler.next_k(&ctx); // k_lo=0,k_hi=1 so k == u_n
            let bucket = (k.to_f64() * buckets as f64).floor() as usize;
            counts[bucket.min(buckets - 1)] += 1;
        }

        let expected = n as f64 / buckets as f64;
        let max_deviation = counts.iter().map(|&c| (c as f64 - expected).abs()).fold(0.0, f64::max);
        let bound = 6.0 * (n as f64).ln(); // generous O(log n) envelope
        assert!(max_deviation < bound, "max deviation {max_deviation} exceeds bound {bound}");
    }

    #[test]
    fn resume_at_continues_the_same_sequence() {
        let ctx = Context::new(128, 64);
        let mut fresh = WeylSampler::new(&ctx, 0.0, 1.0);
        let first = fresh.next_k(&ctx);
        let second = fresh.next_k(&ctx);

        let mut resumed = WeylSampler::resume_at(&ctx, 0.0, 1.0, 1, first.clone());
        let replayed_second = resumed.next_k(&ctx);

        assert!((second - replayed_second).abs() < 1e-30);
    }
}
