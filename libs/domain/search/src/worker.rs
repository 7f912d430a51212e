// [libs/domain/search/src/worker.rs]
/*!
 * =================================================================
 * APARATO: RESULT CELL Y BARRIDO PARALELO DE m (ESTRATO L2)
 * RESPONSABILIDAD: EARLY-EXIT COMPARE-AND-SWAP Y FAN-OUT rayon
 *
 * El primer hilo en certificar un par instala el resultado en una
 * celda de escritura unica; los demas la observan antes de empezar
 * cada nuevo m y abandonan si ya esta ocupada. `rug::Integer` no es
 * Copy/atomico, asi que la semantica CAS se implementa con un
 * AtomicBool de centinela mas un Mutex<Option<..>> para la carga util
 * — el sustituto idiomatico en Rust de la celda CAS literal del spec.
 * =================================================================
 */

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use rayon::prelude::*;
use rug::{Float, Integer};
use tracing::debug;

use grfc_core_geometry::{amplitude, snap, KernelVariant};
use grfc_core_precision::Context;

use crate::certification::certify;

/// Write-once cell for the first certified factor pair found across
/// all workers. Reads are lock-free (`AtomicBool`); the single write
/// takes the `Mutex` exactly once.
#[derive(Default)]
pub struct ResultCell {
    found: AtomicBool,
    value: Mutex<Option<(Integer, Integer)>>,
}

impl ResultCell {
    /// New, empty cell.
    #[must_use]
    pub fn new() -> Self {
        Self { found: AtomicBool::new(false), value: Mutex::new(None) }
    }

    /// `true` once a pair has been installed.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.found.load(Ordering::SeqCst)
    }

    /// Installs `pair` if no pair has been installed yet. Returns
    /// `true` if this call performed the installation.
    pub fn try_install(&self, pair: (Integer, Integer)) -> bool {
        if self.found.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_ok() {
            let mut guard = self.value.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            *guard = Some(pair);
            true
        } else {
            false
        }
    }

    /// Takes the installed pair, if any.
    pub fn take(&self) -> Option<(Integer, Integer)> {
        self.value.lock().unwrap_or_else(std::sync::PoisonError::into_inner).take()
    }
}

/// Sentinel used to short-circuit `rayon`'s `try_for_each` once a
/// result has been installed by any lane.
struct Stop;

/// Parallel sweep of `m in [-m_span, m_span]` for a fixed `k`. Each
/// work item is pure: it reads the immutable `N`, `ln_n`, `two_pi` and
/// `Config`-derived parameters and, at most, writes into `cell` once.
///
/// Early exit: every lane checks `cell.is_set()` before doing any
/// per-`m` work, matching the spec's "observe the cell before
/// starting each new m" discipline.
#[allow(clippy::too_many_arguments)]
pub fn scan_m(
    ctx: &Context,
    n: &Integer,
    ln_n: &Float,
    two_pi: &Float,
    k: &Float,
    m_span: i64,
    variant: KernelVariant,
    sigma: &Float,
    j: u32,
    threshold: f64,
    newton_iterations: u8,
    cell: &ResultCell,
    effort: &AtomicU64,
) {
    let threshold_f = Float::with_val(ctx.precision(), threshold);

    (-m_span..=m_span).into_par_iter().try_for_each(|m| -> Result<(), Stop> {
        if cell.is_set() {
            return Err(Stop);
        }

        let theta = Float::with_val(ctx.precision(), Float::with_val(ctx.precision(), two_pi * m) / k);
        let amp = amplitude(ctx, &theta, variant, sigma, j);
        effort.fetch_add(1, Ordering::Relaxed);

        if amp <= threshold_f {
            return Ok(());
        }

        let snap_result = snap(ctx, ln_n, &theta, variant, sigma, j, newton_iterations);
        if let Some(pair) = certify(n, &snap_result.p0) {
            debug!(m, p0 = %snap_result.p0, "candidate certified");
            cell.try_install(pair);
            return Err(Stop);
        }

        Ok(())
    }).ok();
}
