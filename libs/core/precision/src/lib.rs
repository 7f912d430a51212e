// [libs/core/precision/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: PRECISION POLICY MASTER HUB (ESTRATO L1)
 * RESPONSABILIDAD: CONTEXTO Y PRIMITIVAS TRASCENDENTALES
 *
 * Unica fuente de verdad para digit count y modo de redondeo. Cada
 * componente aguas abajo (kernel gate, snap kernel, certificacion)
 * consume este contexto por referencia; ninguno lo muta.
 * =================================================================
 */

/// Precision context: owns digit count and rounding discipline.
pub mod context;
/// Catalog of local, recoverable numerical failures.
pub mod errors;
/// `ln`, `exp`, `sin`, `cos`, `sqrt` and small helpers bound to a [`context::Context`].
pub mod transcendental;

pub use context::Context;
pub use errors::PrecisionError;
