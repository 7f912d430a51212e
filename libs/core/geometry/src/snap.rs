// [libs/core/geometry/src/snap.rs]
/*!
 * =================================================================
 * APARATO: SNAP KERNEL (ESTRATO L1)
 * RESPONSABILIDAD: (lnN, theta) -> CANDIDATO ENTERO p0
 *
 * p_hat = exp((lnN + delta_phi) / 2); p0 = round_half_up(p_hat).
 * El refinamiento de Newton (opcional) resuelve ln(p) - target = 0
 * antes del redondeo. La certificacion (Componente E) consume el
 * vecindario {p0-1, p0, p0+1}, no solo p0.
 * =================================================================
 */

use grfc_core_precision::{transcendental, Context};
use rug::{Float, Integer};

use crate::kernel::{principal_angle, KernelVariant};

/// Result of a single snap evaluation: the rounded integer candidate
/// and the pre-rounding real value, kept for diagnostics/artifacts.
#[derive(Debug, Clone)]
pub struct SnapResult {
    /// `round_half_up(p_hat)`.
    pub p0: Integer,
    /// The real-valued candidate before rounding (post-Newton if refined).
    pub p_hat: Float,
}

/// `Delta_phi = principal(theta) * weight`, where `weight` is `sigma`
/// for the Gaussian variant and `1/(2J+1)` for the Dirichlet variant
/// (a first-order correction).
#[must_use]
pub fn delta_phi(ctx: &Context, theta: &Float, variant: KernelVariant, sigma: &Float, j: u32) -> Float {
    let principal = principal_angle(ctx, theta);
    let weight = match variant {
        KernelVariant::Gaussian => sigma.clone(),
        KernelVariant::Dirichlet => Float::with_val(ctx.precision(), 1) / (2 * j + 1),
    };
    Float::with_val(ctx.precision(), principal * weight)
}

/// `round_half_up(x) = floor(x + 1/2)`, as an arbitrary-precision
/// integer. Distinct from MPFR's native round-to-nearest-even.
#[must_use]
pub fn round_half_up(ctx: &Context, x: &Float) -> Integer {
    let half = Float::with_val(ctx.precision(), 0.5);
    let shifted = Float::with_val(ctx.precision(), x + half);
    shifted.floor().to_integer().unwrap_or_else(|| Integer::from(0))
}

/// The three-element certification neighborhood `{p0-1, p0, p0+1}`
/// that absorbs the +/-1 error typical of rounding logs through an
/// exponential.
#[must_use]
pub fn neighborhood(p0: &Integer) -> [Integer; 3] {
    [
        Integer::from(p0 - 1),
        p0.clone(),
        Integer::from(p0 + 1),
    ]
}

/// Solves `ln(p) - target == 0` by Newton iteration:
/// `p_{i+1} = p_i - p_i * (ln(p_i) - target)`, stopping early once
/// `|ln(p) - target| < 10^(-P/2)` or after `max_iterations` steps.
/// Reverts (returns `None`) if any iterate would be `<= 1`.
#[must_use]
pub fn newton_refine(ctx: &Context, target: &Float, p0_hat: &Float, max_iterations: u8) -> Option<Float> {
    if max_iterations == 0 {
        return None;
    }
    let stop_threshold = transcendental::pow10_neg(ctx, ctx.precision() / 2);
    let mut p = p0_hat.clone();

    for _ in 0..max_iterations {
        if p <= 1 {
            return None;
        }
        let ln_p = match transcendental::ln(ctx, &p) {
            Ok(v) => v,
            Err(_) => return None,
        };
        let residual = Float::with_val(ctx.precision(), &ln_p - target);
        if Float::with_val(ctx.precision(), residual.clone().abs()) < stop_threshold {
            return Some(p);
        }
        let step = Float::with_val(ctx.precision(), &p * &residual);
        p = Float::with_val(ctx.precision(), &p - step);
    }

    if p <= 1 {
        None
    } else {
        Some(p)
    }
}

/// Full snap map: `(lnN, theta) -> SnapResult`, applying the base
/// map and optional Newton refinement in one call.
#[must_use]
pub fn snap(
    ctx: &Context,
    ln_n: &Float,
    theta: &Float,
    variant: KernelVariant,
    sigma: &Float,
    j: u32,
    newton_iterations: u8,
) -> SnapResult {
    let phi_correction = delta_phi(ctx, theta, variant, sigma, j);
    let sum = Float::with_val(ctx.precision(), ln_n + &phi_correction);
    let target = Float::with_val(ctx.precision(), sum / 2);
    let base_p_hat = transcendental::exp(ctx, &target);

    let p_hat = newton_refine(ctx, &target, &base_p_hat, newton_iterations).unwrap_or(base_p_hat);
    let p0 = round_half_up(ctx, &p_hat);

    SnapResult { p0, p_hat }
}
