// [libs/core/geometry/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: GEOMETRY MASTER HUB (ESTRATO L1)
 * RESPONSABILIDAD: KERNEL GATE Y SNAP KERNEL
 * =================================================================
 */

/// Smooth amplitude gate: Gaussian (default) and Dirichlet (legacy) variants.
pub mod kernel;
/// Phase-corrected snap from `(lnN, theta)` to an integer candidate.
pub mod snap;

pub use kernel::{amplitude, dirichlet_amplitude, gaussian_amplitude, is_stable, principal_angle, KernelVariant};
pub use snap::{delta_phi, neighborhood, newton_refine, round_half_up, snap, SnapResult};
