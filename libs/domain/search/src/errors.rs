// [libs/domain/search/src/errors.rs]
// =================================================================
// APARATO: SEARCH ERRORS
// RESPONSABILIDAD: CATALOGO DE FALLOS DE ENTRADA (PRE-COMPUTO)
// =================================================================

use thiserror::Error;

/// Input-contract violations, surfaced before any `Context` is
/// constructed or any sample is evaluated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    /// `N` is not a positive integer greater than 1.
    #[error("N must be a positive integer greater than 1")]
    NonPositive,

    /// `N` fell outside `[1e14, 1e18]` and is not the whitelisted challenge.
    #[error("N is outside the operational gate [1e14, 1e18] and is not the whitelisted challenge")]
    OutOfGate,
}
