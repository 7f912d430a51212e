// [libs/domain/search/src/lib.rs]
#![deny(missing_docs)]
//! Component D (sampler & scheduler) and Component E (certification)
//! of the geometric resonance factorization search, plus the
//! operational gate that fronts both.

/// Exact `N mod d == 0` certification over a three-element neighborhood.
pub mod certification;
/// Typed errors for the gate and search layers.
pub mod errors;
/// Orchestrates the sequential outer `k`-loop and the public `factor` entry point.
pub mod engine;
/// Cheap operational-window gate, evaluated before any numerical work.
pub mod gate;
/// Additive-recurrence sampler over the `k` parameter space.
pub mod sampler;
/// Parallel inner `m`-sweep and the write-once result cell.
pub mod worker;

pub use engine::{factor, factor_with_progress};
pub use errors::GateError;
pub use sampler::WeylSampler;
pub use worker::{scan_m, ResultCell};
