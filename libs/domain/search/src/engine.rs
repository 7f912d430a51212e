// [libs/domain/search/src/engine.rs]
/*!
 * =================================================================
 * APARATO: SEARCH ENGINE (ESTRATO L2)
 * RESPONSABILIDAD: ORQUESTACION A -> (B,C) -> D -> E
 *
 * `factor(n, cfg)` es el unico punto de entrada programatico. Crea el
 * Context y las constantes derivadas una sola vez, ejecuta el bucle
 * externo secuencial sobre k con barrido interno paralelo sobre m, y
 * devuelve el primer par certificado o un Outcome::Failure tipado.
 * =================================================================
 */

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use rug::{Float, Integer};
use tracing::{info, instrument, warn};

use grfc_core_precision::{transcendental, Context};
use grfc_domain_models::{Config, FailureReason, Outcome};

use crate::gate;
use crate::sampler::WeylSampler;
use crate::worker::{scan_m, ResultCell};

/// Progress percentages at which [`Config`]-driven observers are
/// notified. Not a correctness contract — purely informational.
const PROGRESS_CHECKPOINTS_PERCENT: [u8; 9] = [10, 20, 30, 40, 50, 60, 70, 80, 90];

/// Attempts to factor the balanced semiprime `n` under `cfg`.
///
/// Returns [`Outcome::Success`] with a certified `(p, q)` pair such
/// that `1 < p <= q < n` and `p * q == n`, or a typed
/// [`Outcome::Failure`] when the gate rejects the input, the deadline
/// expires, or the sample budget is exhausted.
#[instrument(skip(cfg), fields(bits = n.significant_bits()))]
pub fn factor(n: Integer, cfg: Config) -> Outcome {
    factor_with_progress(n, cfg, |_percent| {})
}

/// Same contract as [`factor`], with an additional progress observer
/// invoked at the percentage boundaries in [`PROGRESS_CHECKPOINTS_PERCENT`].
pub fn factor_with_progress<F>(n: Integer, cfg: Config, mut on_progress: F) -> Outcome
where
    F: FnMut(u8),
{
    let start = Instant::now();

    if let Err(_gate_error) = gate::check(&n, &cfg) {
        warn!("gate rejected N before any computation");
        return Outcome::Failure { reason: FailureReason::OutOfGate };
    }

    if cfg.samples == 0 {
        return Outcome::Failure { reason: FailureReason::NoFactorFound };
    }

    let deadline = if cfg.search_timeout_ms == 0 {
        None
    } else {
        Some(start + Duration::from_millis(cfg.search_timeout_ms))
    };

    let bits_n = n.significant_bits();
    let ctx = Context::new(cfg.precision, bits_n);
    let ln_n = match transcendental::ln(&ctx, &Float::with_val(ctx.precision(), &n)) {
        Ok(v) => v,
        Err(_) => return Outcome::Failure { reason: FailureReason::NoFactorFound },
    };
    let two_pi = ctx.two_pi();
    let sigma = Float::with_val(ctx.precision(), cfg.sigma);

    let mut sampler = WeylSampler::new(&ctx, cfg.k_lo, cfg.k_hi);
    let cell = ResultCell::new();
    let effort = AtomicU64::new(0);

    let mut next_checkpoint_index = 0usize;

    for _sample_index in 0..cfg.samples {
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                info!("wall-clock deadline reached");
                return Outcome::Failure { reason: FailureReason::Timeout };
            }
        }

        let k = sampler.next_k(&ctx);
        if k == 0 {
            continue; // theta undefined at k == 0; skip, do not divide by zero.
        }

        scan_m(
            &ctx,
            &n,
            &ln_n,
            &two_pi,
            &k,
            cfg.m_span,
            cfg.kernel_variant,
            &sigma,
            cfg.j,
            cfg.threshold,
            cfg.newton_iterations,
            &cell,
            &effort,
        );

        if cell.is_set() {
            break;
        }

        let progress_percent =
            ((sampler.samples_drawn() as f64 / cfg.samples as f64) * 100.0) as u8;
        while next_checkpoint_index < PROGRESS_CHECKPOINTS_PERCENT.len()
            && progress_percent >= PROGRESS_CHECKPOINTS_PERCENT[next_checkpoint_index]
        {
            on_progress(PROGRESS_CHECKPOINTS_PERCENT[next_checkpoint_index]);
            next_checkpoint_index += 1;
        }
    }

    let samples_evaluated = effort.load(Ordering::Relaxed);
    match cell.take() {
        Some((p, q)) => {
            info!(%p, %q, samples_evaluated, "factor certified");
            Outcome::Success { p, q, duration: start.elapsed(), config: cfg }
        }
        None => {
            info!(samples_evaluated, "sample budget exhausted without a certified factor");
            Outcome::Failure { reason: FailureReason::NoFactorFound }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grfc_core_geometry::KernelVariant;

    fn relaxed_config() -> Config {
        Config {
            precision: 0,
            samples: 4000,
            m_span: 48,
            sigma: 0.4,
            j: 8,
            threshold: 0.01,
            k_lo: 2.0,
            k_hi: 8192.0,
            search_timeout_ms: 20_000,
            allow_whitelisted_challenge: false,
            kernel_variant: KernelVariant::Gaussian,
            newton_iterations: 2,
            stability_check: false,
        }
    }

    #[test]
    fn rejects_n_outside_the_gate() {
        let n = Integer::from_str_radix("99999999999999", 10).unwrap();
        let outcome = factor(n, Config::default());
        assert!(matches!(outcome, Outcome::Failure { reason: FailureReason::OutOfGate }));
    }

    #[test]
    fn zero_samples_returns_no_factor_found_immediately() {
        let n = Integer::from_str_radix("100000980001501", 10).unwrap();
        let cfg = Config { samples: 0, ..relaxed_config() };
        let outcome = factor(n, cfg);
        assert!(matches!(outcome, Outcome::Failure { reason: FailureReason::NoFactorFound }));
    }

    #[test]
    fn one_millisecond_budget_times_out() {
        let n = Integer::from_str_radix("1152921470247108503", 10).unwrap();
        let cfg = Config { search_timeout_ms: 1, samples: 10_000_000, ..relaxed_config() };
        let outcome = factor(n, cfg);
        assert!(matches!(outcome, Outcome::Failure { reason: FailureReason::Timeout }));
    }

    #[test]
    fn m_span_zero_still_tries_m_zero() {
        // A tight window around theta == 0 with m_span == 0 must still
        // evaluate m == 0 for every k, which is sufficient to find a
        // balanced semiprime whose sqrt lands within the neighborhood.
        let p = Integer::from(100_000_007u64);
        let q = Integer::from(100_000_009u64);
        let n = Integer::from(&p * &q);
        let cfg = Config {
            samples: 1,
            m_span: 0,
            k_lo: 1_000_000.0,
            k_hi: 1_000_001.0,
            search_timeout_ms: 5_000,
            ..relaxed_config()
        };
        let outcome = factor(n, cfg);
        assert!(matches!(outcome, Outcome::Success { .. }));
    }
}
