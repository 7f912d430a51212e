// [apps/grfc-cli/src/main.rs]
/*!
 * =================================================================
 * APARATO: GRFC CLI SHELL
 * RESPONSABILIDAD: PARSEO DE DIRECTIVAS Y DESPACHO A factor()
 *
 * Capa fina: no contiene ninguna logica de busqueda propia. Traduce
 * argumentos de linea de comandos a un Config, invoca
 * grfc_domain_search::factor y emite el Outcome como texto o JSON.
 * =================================================================
 */

use anyhow::{Context as _, Result};
use clap::Parser;
use rug::Integer;
use tracing::info;

use grfc_core_geometry::KernelVariant;
use grfc_domain_models::Config;
use grfc_domain_search::factor;

/// Command-line directives for a single `factor(N, cfg)` call.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Geometric Resonance Factorization Core: deterministic search for balanced semiprime factors."
)]
struct SearchDirectives {
    /// The balanced semiprime to factor, as a decimal string.
    n: String,

    /// Precision floor in bits (0 lets the engine derive it from N).
    #[arg(long, env = "GRFC_PRECISION", default_value_t = 0)]
    precision: u32,

    /// Maximum outer-loop samples over k.
    #[arg(long, env = "GRFC_SAMPLES", default_value_t = 200_000)]
    samples: u64,

    /// Inner sweep half-width, m in [-m_span, m_span].
    #[arg(long, env = "GRFC_M_SPAN", default_value_t = 64)]
    m_span: i64,

    /// Gaussian kernel width / snap weight.
    #[arg(long, env = "GRFC_SIGMA", default_value_t = 0.35)]
    sigma: f64,

    /// Dirichlet kernel half-width (ignored unless --dirichlet is set).
    #[arg(long, env = "GRFC_J", default_value_t = 8)]
    j: u32,

    /// Minimum accepted kernel amplitude.
    #[arg(long, env = "GRFC_THRESHOLD", default_value_t = 0.05)]
    threshold: f64,

    /// Lower bound of the k sampling window.
    #[arg(long, env = "GRFC_K_LO", default_value_t = 2.0)]
    k_lo: f64,

    /// Upper bound of the k sampling window.
    #[arg(long, env = "GRFC_K_HI", default_value_t = 4096.0)]
    k_hi: f64,

    /// Wall-clock budget in milliseconds (0 disables the deadline).
    #[arg(long, env = "GRFC_TIMEOUT_MS", default_value_t = 30_000)]
    search_timeout_ms: u64,

    /// Use the Dirichlet kernel instead of the Gaussian default.
    #[arg(long, env = "GRFC_DIRICHLET", default_value_t = false)]
    dirichlet: bool,

    /// Snap-kernel Newton refinement iterations, in [0, 3].
    #[arg(long, env = "GRFC_NEWTON_ITERATIONS", default_value_t = 2)]
    newton_iterations: u8,

    /// Bypasses the [1e14, 1e18] gate for the single whitelisted challenge.
    #[arg(long, env = "GRFC_ALLOW_WHITELISTED_CHALLENGE", default_value_t = false)]
    allow_whitelisted_challenge: bool,

    /// Emit the result as a JSON artifact instead of plain text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl From<SearchDirectives> for Config {
    fn from(directives: SearchDirectives) -> Self {
        Config {
            precision: directives.precision,
            samples: directives.samples,
            m_span: directives.m_span,
            sigma: directives.sigma,
            j: directives.j,
            threshold: directives.threshold,
            k_lo: directives.k_lo,
            k_hi: directives.k_hi,
            search_timeout_ms: directives.search_timeout_ms,
            allow_whitelisted_challenge: directives.allow_whitelisted_challenge,
            kernel_variant: if directives.dirichlet { KernelVariant::Dirichlet } else { KernelVariant::Gaussian },
            newton_iterations: directives.newton_iterations,
            stability_check: false,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let directives = SearchDirectives::parse();
    let n_literal = directives.n.clone();
    let emit_json = directives.json;

    let n = Integer::from_str_radix(&n_literal, 10)
        .map_err(|e| anyhow::anyhow!("N is not a valid decimal integer: {e}"))
        .context("failed to parse N")?;

    info!(%n_literal, "starting search");
    let outcome = factor(n, directives.into());

    if emit_json {
        let artifact = outcome.to_artifact();
        println!("{}", serde_json::to_string_pretty(&artifact)?);
    } else {
        match &outcome {
            grfc_domain_models::Outcome::Success { p, q, duration, .. } => {
                println!("SUCCESS p={p} q={q} elapsed={duration:?}");
            }
            grfc_domain_models::Outcome::Failure { reason } => {
                println!("FAILURE reason={}", reason.as_tag());
            }
        }
    }

    Ok(())
}
