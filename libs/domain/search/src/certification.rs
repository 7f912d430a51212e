// [libs/domain/search/src/certification.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICATION LAYER (ESTRATO L2)
 * RESPONSABILIDAD: N mod d == 0 SOBRE UN VECINDARIO DE A LO SUMO 3
 *
 * Unico predicado aritmetico admitido fuera de la geometria. Nunca
 * amplia la ventana: trial division, Pollard rho, ECM y cualquier
 * criba quedan fuera por diseno.
 * =================================================================
 */

use grfc_core_geometry::neighborhood;
use rug::Integer;
use tracing::error;

/// Tests `N mod d == 0` for each `d` in the three-element
/// certification neighborhood of `p0`, skipping `d <= 1` or `d >= N`.
/// Returns the ordered pair `(min(d,q), max(d,q))` on the first hit.
///
/// # Panics
/// Panics if `N mod d == 0` holds but `p * q != N` — an arithmetic bug,
/// never reachable from valid integer division, and therefore a fatal
/// invariant violation per spec.md §7.
#[must_use]
pub fn certify(n: &Integer, p0: &Integer) -> Option<(Integer, Integer)> {
    for d in neighborhood(p0) {
        if d <= 1 || d >= *n {
            continue;
        }

        let remainder = Integer::from(n % &d);
        if remainder != 0 {
            continue;
        }

        let q = Integer::from(n / &d);
        let (p, q) = if d <= q { (d, q) } else { (q, d) };

        let product = Integer::from(&p * &q);
        if product != *n {
            error!("certification invariant violated: p={p} q={q} p*q={product} N={n}");
            panic!("certification invariant violated: {p} * {q} != {n}");
        }

        return Some((p, q));
    }
    None
}
