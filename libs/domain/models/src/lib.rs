// [libs/domain/models/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: DOMAIN MODELS MASTER HUB (ESTRATO L2)
 * RESPONSABILIDAD: Config Y Outcome COMPARTIDOS
 * =================================================================
 */

/// Frozen search configuration.
pub mod config;
/// Terminal `Outcome`/`FailureReason`/`Artifact` contracts.
pub mod outcome;

pub use config::Config;
pub use outcome::{Artifact, FailureReason, Outcome};
