// [libs/core/precision/src/context.rs]
/*!
 * =================================================================
 * APARATO: PRECISION CONTEXT (ESTRATO L1)
 * RESPONSABILIDAD: UNICA FUENTE DE VERDAD PARA DIGIT COUNT Y REDONDEO
 *
 * El contexto se crea una vez por llamada a `factor` y se pasa por
 * referencia a los componentes B, C y E. Nunca se muta tras su
 * construccion: la precision solo puede crecer entre llamadas, jamas
 * dentro de una misma llamada.
 * =================================================================
 */

use rug::Float;
use rug::float::Constant;
use rug::float::prec_min;

/// Minimum precision headroom added on top of `4 * bits(N)`, in bits.
///
/// Derivation (see spec rationale): a relative error `epsilon` in
/// `ln N` propagates to an absolute error `~ p_hat * epsilon / 2` in
/// the snapped candidate. At 127 bits, `p_hat ~ 10^19`; reaching
/// sub-integer accuracy needs `epsilon <~ 10^-19`. `4*bits + 200`
/// keeps generous headroom beyond that floor to absorb the error of
/// composed `ln`/`exp`/`sin` evaluations.
const PRECISION_HEADROOM_BITS: u32 = 200;

/// Arbitrary-precision numeric context bound to a single `factor(...)`
/// call. Owns the digit count; every `Float` produced by this module's
/// siblings (`transcendental`) is constructed `with_val(ctx.precision(), ...)`.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    precision_bits: u32,
}

impl Context {
    /// Builds the context for a call, enforcing
    /// `P = max(configured_precision, bits(N) * 4 + 200)`.
    ///
    /// `bits_n` is `N.significant_bits()`; `configured_precision` is
    /// the caller's `Config::precision` floor (may be zero).
    #[must_use]
    pub fn new(configured_precision: u32, bits_n: u32) -> Self {
        let floor = bits_n.saturating_mul(4).saturating_add(PRECISION_HEADROOM_BITS);
        let precision_bits = configured_precision.max(floor).max(prec_min());
        Self { precision_bits }
    }

    /// Effective precision, in bits, used by every `Float` this
    /// context mints. MPFR's default rounding mode is round-to-nearest
    /// with ties-to-even, satisfying the half-to-even requirement for
    /// every primitive in `transcendental`.
    #[inline]
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision_bits
    }

    /// `0` at this context's precision.
    #[must_use]
    pub fn zero(&self) -> Float {
        Float::with_val(self.precision_bits, 0)
    }

    /// `pi` at this context's precision.
    #[must_use]
    pub fn pi(&self) -> Float {
        Float::with_val(self.precision_bits, Constant::Pi)
    }

    /// `2 * pi` at this context's precision.
    #[must_use]
    pub fn two_pi(&self) -> Float {
        Float::with_val(self.precision_bits, self.pi() * 2)
    }

    /// Euler's number `e` at this context's precision.
    #[must_use]
    pub fn e(&self) -> Float {
        Float::with_val(self.precision_bits, 1).exp()
    }

    /// `phi_inv = (sqrt(5) - 1) / 2`, the reciprocal of the golden
    /// ratio, used as the additive-recurrence increment by the sampler.
    #[must_use]
    pub fn golden_ratio_inverse(&self) -> Float {
        let five = Float::with_val(self.precision_bits, 5);
        Float::with_val(self.precision_bits, (five.sqrt() - 1) / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_is_at_least_four_bits_plus_headroom() {
        let ctx = Context::new(0, 127);
        assert!(ctx.precision() >= 4 * 127 + PRECISION_HEADROOM_BITS);
    }

    #[test]
    fn configured_floor_wins_when_larger() {
        let ctx = Context::new(10_000, 64);
        assert_eq!(ctx.precision(), 10_000);
    }

    #[test]
    fn precision_never_drops_below_the_bits_rule() {
        let ctx = Context::new(1, 64);
        assert!(ctx.precision() >= 64 * 4 + PRECISION_HEADROOM_BITS);
    }
}
