// [libs/domain/models/src/config.rs]
/*!
 * =================================================================
 * APARATO: CONFIG CONTRACT (ESTRATO L2)
 * RESPONSABILIDAD: REGISTRO CONGELADO DE PARAMETROS DE BUSQUEDA
 *
 * `Config` es un valor inmutable construido por el llamador antes de
 * invocar `factor`; nada dentro de `grfc-core-*` o `grfc-domain-search`
 * lo muta tras la construccion.
 * =================================================================
 */

use serde::{Deserialize, Serialize};

use grfc_core_geometry::KernelVariant;

/// Frozen search configuration. See spec.md §6 for the authoritative
/// field table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Floor for the digit count; effective `P = max(precision, bits(N)*4 + 200)`.
    pub precision: u32,
    /// Maximum outer-loop iterations over `k`.
    pub samples: u64,
    /// Inner sweep range `m in [-m_span, m_span]`.
    pub m_span: i64,
    /// Gaussian kernel width (also the Gaussian snap weight).
    pub sigma: f64,
    /// Dirichlet kernel half-width (only used when `kernel_variant == Dirichlet`).
    pub j: u32,
    /// Minimum accepted amplitude.
    pub threshold: f64,
    /// Lower bound of the `k` sampling window.
    pub k_lo: f64,
    /// Upper bound of the `k` sampling window.
    pub k_hi: f64,
    /// Wall-clock budget in milliseconds; `0` disables the deadline.
    pub search_timeout_ms: u64,
    /// Bypasses the `[1e14, 1e18]` gate for the single whitelisted `N`.
    pub allow_whitelisted_challenge: bool,
    /// Kernel gate / snap kernel variant.
    #[serde(with = "kernel_variant_serde")]
    pub kernel_variant: KernelVariant,
    /// Snap-kernel Newton refinement iterations, in `[0, 3]`.
    pub newton_iterations: u8,
    /// Opt-in amplitude stability check (spec §4.B); a tuning knob, not
    /// a correctness requirement.
    pub stability_check: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: 0,
            samples: 200_000,
            m_span: 64,
            sigma: 0.35,
            j: 8,
            threshold: 0.05,
            k_lo: 2.0,
            k_hi: 4096.0,
            search_timeout_ms: 30_000,
            allow_whitelisted_challenge: false,
            kernel_variant: KernelVariant::Gaussian,
            newton_iterations: 2,
            stability_check: false,
        }
    }
}

// `KernelVariant` lives in `grfc-core-geometry` and intentionally has
// no `serde` dependency (it is a pure-geometry crate); this adapter
// keeps that boundary while still letting `Config` round-trip to JSON.
mod kernel_variant_serde {
    use grfc_core_geometry::KernelVariant;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    enum Wire {
        Gaussian,
        Dirichlet,
    }

    pub fn serialize<S: Serializer>(variant: &KernelVariant, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match variant {
            KernelVariant::Gaussian => Wire::Gaussian,
            KernelVariant::Dirichlet => Wire::Dirichlet,
        };
        wire.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<KernelVariant, D::Error> {
        Ok(match Wire::deserialize(deserializer)? {
            Wire::Gaussian => KernelVariant::Gaussian,
            Wire::Dirichlet => KernelVariant::Dirichlet,
        })
    }
}
