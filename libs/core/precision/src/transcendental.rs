// [libs/core/precision/src/transcendental.rs]
/*!
 * =================================================================
 * APARATO: TRANSCENDENTAL PRIMITIVES (ESTRATO L1)
 * RESPONSABILIDAD: ln, exp, sin, cos, sqrt LIGADOS AL CONTEXTO
 *
 * Cada primitiva acepta y devuelve reales de precision arbitraria
 * ligados al `Context` de la llamada. `ln` y `sqrt` son las unicas
 * primitivas parciales (dominio restringido); `exp`, `sin`, `cos` son
 * totales.
 * =================================================================
 */

use rug::Float;

use crate::context::Context;
use crate::errors::PrecisionError;

/// Natural logarithm of `x` at `ctx`'s precision.
///
/// # Errors
/// Returns [`PrecisionError::NonPositiveLogArgument`] if `x <= 0`.
pub fn ln(ctx: &Context, x: &Float) -> Result<Float, PrecisionError> {
    if *x <= 0 {
        return Err(PrecisionError::NonPositiveLogArgument);
    }
    Ok(Float::with_val(ctx.precision(), x.ln_ref()))
}

/// `exp(x)` at `ctx`'s precision. Total: every real has a defined
/// exponential.
#[must_use]
pub fn exp(ctx: &Context, x: &Float) -> Float {
    Float::with_val(ctx.precision(), x.exp_ref())
}

/// `sin(x)` at `ctx`'s precision. Total.
#[must_use]
pub fn sin(ctx: &Context, x: &Float) -> Float {
    Float::with_val(ctx.precision(), x.sin_ref())
}

/// `cos(x)` at `ctx`'s precision. Total.
#[must_use]
pub fn cos(ctx: &Context, x: &Float) -> Float {
    Float::with_val(ctx.precision(), x.cos_ref())
}

/// `sqrt(x)` at `ctx`'s precision.
///
/// # Errors
/// Returns [`PrecisionError::NegativeSqrtArgument`] if `x < 0`.
pub fn sqrt(ctx: &Context, x: &Float) -> Result<Float, PrecisionError> {
    if *x < 0 {
        return Err(PrecisionError::NegativeSqrtArgument);
    }
    Ok(Float::with_val(ctx.precision(), x.sqrt_ref()))
}

/// `10^(-exponent)` at `ctx`'s precision, used by the kernel gate and
/// snap kernel to build precision-scaled epsilon thresholds.
#[must_use]
pub fn pow10_neg(ctx: &Context, exponent: u32) -> Float {
    let ten_ln = Float::with_val(ctx.precision(), 10).ln();
    let neg_exponent = Float::with_val(ctx.precision(), -i64::from(exponent));
    exp(ctx, &Float::with_val(ctx.precision(), neg_exponent * ten_ln))
}

/// Fractional part of `x`, i.e. `x - floor(x)`, always in `[0, 1)`.
/// Used by the additive-recurrence sampler.
#[must_use]
pub fn frac(ctx: &Context, x: &Float) -> Float {
    let floor = Float::with_val(ctx.precision(), x.clone().floor());
    Float::with_val(ctx.precision(), x - floor)
}
