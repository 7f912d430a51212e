// [libs/domain/models/src/outcome.rs]
/*!
 * =================================================================
 * APARATO: OUTCOME CONTRACT (ESTRATO L2)
 * RESPONSABILIDAD: RESULTADO TERMINAL DE UNA LLAMADA A factor()
 *
 * `Outcome` es el unico tipo que escapa de una llamada. No hay
 * excepciones para control de flujo: el exito y cada modo de fallo
 * son variantes explicitas de esta enumeracion.
 * =================================================================
 */

use std::time::Duration;

use rug::Integer;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Why a call returned without a certified factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// `N` fell outside `[1e14, 1e18]` and was not the whitelisted challenge.
    OutOfGate,
    /// The wall-clock budget (`search_timeout_ms`) expired first.
    Timeout,
    /// The sample budget was exhausted without a certified factor.
    NoFactorFound,
}

impl FailureReason {
    /// Stable string tag matching spec.md §6's failure surface
    /// (`"OUT_OF_GATE"`, `"TIMEOUT"`, `"NO_FACTOR_FOUND"`).
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            FailureReason::OutOfGate => "OUT_OF_GATE",
            FailureReason::Timeout => "TIMEOUT",
            FailureReason::NoFactorFound => "NO_FACTOR_FOUND",
        }
    }
}

/// Terminal result of a `factor(...)` call.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// A certified factor pair was found: `1 < p <= q < N` and `p*q == N`.
    Success {
        /// The smaller certified factor.
        p: Integer,
        /// The larger certified factor.
        q: Integer,
        /// Wall-clock time spent inside the call.
        duration: Duration,
        /// The `Config` snapshot used for this call.
        config: Config,
    },
    /// No certified factor was produced; see [`FailureReason`].
    Failure {
        /// The reason the call did not succeed.
        reason: FailureReason,
    },
}

impl Outcome {
    /// `true` for [`Outcome::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Converts to the JSON-serializable artifact described in
    /// spec.md §6 (optional output, never part of the core contract).
    /// Big integers are carried as decimal strings, mirroring the
    /// lineage's convention for values too large for a JSON number.
    #[must_use]
    pub fn to_artifact(&self) -> Artifact {
        match self {
            Outcome::Success { p, q, duration, config } => Artifact {
                status: "SUCCESS".to_string(),
                p: Some(p.to_string()),
                q: Some(q.to_string()),
                failure_reason: None,
                elapsed_ms: duration.as_millis() as u64,
                config: config.clone(),
            },
            Outcome::Failure { reason } => Artifact {
                status: "FAILURE".to_string(),
                p: None,
                q: None,
                failure_reason: Some(reason.as_tag().to_string()),
                elapsed_ms: 0,
                config: Config::default(),
            },
        }
    }
}

/// Serializable snapshot of an [`Outcome`], suitable for the optional
/// artifact record described in spec.md §6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    /// `"SUCCESS"` or `"FAILURE"`.
    pub status: String,
    /// Decimal string of the smaller factor, present only on success.
    pub p: Option<String>,
    /// Decimal string of the larger factor, present only on success.
    pub q: Option<String>,
    /// Stable failure tag, present only on failure.
    pub failure_reason: Option<String>,
    /// Wall-clock milliseconds spent inside the call.
    pub elapsed_ms: u64,
    /// The `Config` snapshot used for this call.
    pub config: Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_artifact_carries_decimal_factors() {
        let outcome = Outcome::Success {
            p: Integer::from(32749),
            q: Integer::from(32771),
            duration: Duration::from_millis(42),
            config: Config::default(),
        };
        let artifact = outcome.to_artifact();
        assert_eq!(artifact.status, "SUCCESS");
        assert_eq!(artifact.p.as_deref(), Some("32749"));
        assert_eq!(artifact.q.as_deref(), Some("32771"));
    }

    #[test]
    fn failure_artifact_carries_stable_tag() {
        let outcome = Outcome::Failure { reason: FailureReason::Timeout };
        let artifact = outcome.to_artifact();
        assert_eq!(artifact.status, "FAILURE");
        assert_eq!(artifact.failure_reason.as_deref(), Some("TIMEOUT"));
    }
}
