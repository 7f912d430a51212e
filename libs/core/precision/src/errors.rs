// [libs/core/precision/src/errors.rs]
// =================================================================
// APARATO: PRECISION ERRORS
// RESPONSABILIDAD: CATALOGO DE FALLOS NUMERICOS LOCALES
// =================================================================

use thiserror::Error;

/// Errors a transcendental primitive can hit for an out-of-domain
/// argument. These are always local and recoverable: the precision
/// policy itself is total (arbitrary-precision arithmetic cannot
/// overflow), only `ln`/`sqrt` have a restricted domain.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionError {
    /// `ln(x)` was called with `x <= 0`.
    #[error("ln() requires a strictly positive argument")]
    NonPositiveLogArgument,

    /// `sqrt(x)` was called with `x < 0`.
    #[error("sqrt() requires a non-negative argument")]
    NegativeSqrtArgument,
}
