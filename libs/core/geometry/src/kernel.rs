// [libs/core/geometry/src/kernel.rs]
/*!
 * =================================================================
 * APARATO: KERNEL GATE (ESTRATO L1)
 * RESPONSABILIDAD: AMPLITUD SUAVE A(theta) CON GUARDAS DE SINGULARIDAD
 *
 * Dos variantes comparten la misma interfaz: reducir theta al angulo
 * principal, producir una amplitud en (0,1], y compararla contra un
 * umbral. La variante Gaussiana es la recomendada (sin singularidades);
 * la Dirichlet se conserva por compatibilidad con sintonias previas.
 * =================================================================
 */

use grfc_core_precision::{transcendental, Context};
use rug::Float;

/// Kernel amplitude family selected by [`Config::kernel_variant`](../../grfc_domain_models/config/enum.KernelVariant.html).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelVariant {
    /// `A(theta) = exp(-principal(theta)^2 / (2*sigma^2))`. No singularities.
    Gaussian,
    /// Normalized Dirichlet kernel, retained for legacy tuning.
    Dirichlet,
}

/// Reduces `theta` to its principal representative in `[-pi, pi]`,
/// i.e. `theta - 2*pi*floor(theta/(2*pi) + 1/2)`.
#[must_use]
pub fn principal_angle(ctx: &Context, theta: &Float) -> Float {
    let two_pi = ctx.two_pi();
    let half = Float::with_val(ctx.precision(), 0.5);
    let winding = Float::with_val(ctx.precision(), theta / &two_pi) + half;
    let winding_floor = Float::with_val(ctx.precision(), winding.floor());
    Float::with_val(ctx.precision(), theta - winding_floor * two_pi)
}

/// Gaussian gate amplitude: `exp(-principal(theta)^2 / (2*sigma^2))`.
/// Always in `(0, 1]`, with `A(0) == 1`.
#[must_use]
pub fn gaussian_amplitude(ctx: &Context, theta: &Float, sigma: &Float) -> Float {
    let principal = principal_angle(ctx, theta);
    let two_sigma_sq = Float::with_val(ctx.precision(), sigma.clone() * sigma * 2);
    let ratio = Float::with_val(ctx.precision(), &principal * &principal) / two_sigma_sq;
    transcendental::exp(ctx, &Float::with_val(ctx.precision(), -ratio))
}

/// Numerically stable `sinc(x) = sin(x)/x`, guarded by a Taylor series
/// near the removable singularity at `x == 0`.
#[must_use]
pub fn stable_sinc(ctx: &Context, x: &Float, epsilon: &Float) -> Float {
    if Float::with_val(ctx.precision(), x.clone().abs()) < *epsilon {
        let x2 = Float::with_val(ctx.precision(), x * x);
        let x4 = Float::with_val(ctx.precision(), &x2 * &x2);
        let x6 = Float::with_val(ctx.precision(), &x4 * &x2);
        let one = Float::with_val(ctx.precision(), 1);
        one - Float::with_val(ctx.precision(), &x2 / 6) + Float::with_val(ctx.precision(), &x4 / 120)
            - Float::with_val(ctx.precision(), &x6 / 5040)
    } else {
        Float::with_val(ctx.precision(), transcendental::sin(ctx, x)) / x
    }
}

/// `epsilon = 10^(-max(12, P/2))`, the Dirichlet singularity-guard
/// threshold fixed by the spec to scale with the context's precision.
#[must_use]
pub fn dirichlet_epsilon(ctx: &Context) -> Float {
    let exponent = std::cmp::max(12, ctx.precision() / 2);
    transcendental::pow10_neg(ctx, exponent)
}

/// Normalized Dirichlet kernel amplitude:
/// `|sin((2J+1)*theta/2) / ((2J+1)*sin(theta/2))|`, clamped to `[0,1]`.
///
/// Implemented as `|sinc((2J+1)*theta/2) / sinc(theta/2)|` since
/// `sin(n*x) = n*x*sinc(n*x)` cancels the `n` factor exactly; this is
/// the "numerically stable sinc" construction the spec calls for, and
/// it reuses the same guard threshold for both removable
/// singularities (`theta == 0` and, implicitly, `n*theta == 0`).
#[must_use]
pub fn dirichlet_amplitude(ctx: &Context, theta: &Float, j: u32) -> Float {
    let principal = principal_angle(ctx, theta);
    let half_theta = Float::with_val(ctx.precision(), &principal / 2);
    let epsilon = dirichlet_epsilon(ctx);

    if Float::with_val(ctx.precision(), half_theta.clone().sin()).abs() < epsilon {
        return Float::with_val(ctx.precision(), 1);
    }

    let n = 2 * j + 1;
    let n_half_theta = Float::with_val(ctx.precision(), &half_theta * n);
    let sinc_n = stable_sinc(ctx, &n_half_theta, &epsilon);
    let sinc_1 = stable_sinc(ctx, &half_theta, &epsilon);

    let ratio = Float::with_val(ctx.precision(), sinc_n / sinc_1).abs();
    let one = Float::with_val(ctx.precision(), 1);
    if ratio > one {
        Float::with_val(ctx.precision(), 1)
    } else {
        ratio
    }
}

/// Dispatches to the configured kernel variant.
#[must_use]
pub fn amplitude(ctx: &Context, theta: &Float, variant: KernelVariant, sigma: &Float, j: u32) -> Float {
    match variant {
        KernelVariant::Gaussian => gaussian_amplitude(ctx, theta, sigma),
        KernelVariant::Dirichlet => dirichlet_amplitude(ctx, theta, j),
    }
}

/// Optional stability check (spec §4.B): require that the amplitude
/// stays above `0.9 * threshold` at `theta +/- epsilon_stab`, where
/// `epsilon_stab = 10^(-P/4)`. A tuning knob, not a correctness
/// requirement — callers opt in explicitly.
#[must_use]
pub fn is_stable<F>(ctx: &Context, theta: &Float, threshold: &Float, amplitude_fn: F) -> bool
where
    F: Fn(&Float) -> Float,
{
    let epsilon_stab = transcendental::pow10_neg(ctx, ctx.precision() / 4);
    let bound = Float::with_val(ctx.precision(), threshold * 0.9);
    let plus = Float::with_val(ctx.precision(), theta + &epsilon_stab);
    let minus = Float::with_val(ctx.precision(), theta - &epsilon_stab);
    amplitude_fn(&plus) > bound && amplitude_fn(&minus) > bound
}
