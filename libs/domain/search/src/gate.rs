// [libs/domain/search/src/gate.rs]
/*!
 * =================================================================
 * APARATO: GATE GUARD (ESTRATO L2)
 * RESPONSABILIDAD: RECHAZO BARATO ANTES DE CUALQUIER COMPUTO CARO
 *
 * Si N cae fuera de [1e14, 1e18] y no es el reto de 127 bits en la
 * lista blanca, la llamada falla con OUT_OF_GATE antes de construir
 * el Context o de evaluar una sola muestra.
 * =================================================================
 */

use std::sync::LazyLock;

use rug::Integer;

use grfc_domain_models::Config;

use crate::errors::GateError;

/// Lower bound of the operational window, `10^14`.
pub static OPERATIONAL_LOWER_BOUND: LazyLock<Integer> =
    LazyLock::new(|| Integer::from_str_radix("100000000000000", 10).expect("valid literal"));

/// Upper bound of the operational window, `10^18`.
pub static OPERATIONAL_UPPER_BOUND: LazyLock<Integer> =
    LazyLock::new(|| Integer::from_str_radix("1000000000000000000", 10).expect("valid literal"));

/// The single named 127-bit challenge exempted from the operational
/// window when `Config::allow_whitelisted_challenge` is set.
/// `p = 10508623501177419659, q = 13086849276577416863`.
pub static WHITELISTED_CHALLENGE_N: LazyLock<Integer> = LazyLock::new(|| {
    Integer::from_str_radix("137524771864208156028430259349934309717", 10).expect("valid literal")
});

/// Enforces the operational gate. Cheap: only integer comparisons, no
/// `Context` is constructed here.
///
/// # Errors
/// - [`GateError::NonPositive`] if `n <= 1`.
/// - [`GateError::OutOfGate`] if `n` is outside `[1e14, 1e18]` and is
///   not the whitelisted challenge with `allow_whitelisted_challenge` set.
pub fn check(n: &Integer, cfg: &Config) -> Result<(), GateError> {
    if *n <= 1 {
        return Err(GateError::NonPositive);
    }

    if *n >= *OPERATIONAL_LOWER_BOUND && *n <= *OPERATIONAL_UPPER_BOUND {
        return Ok(());
    }

    if cfg.allow_whitelisted_challenge && *n == *WHITELISTED_CHALLENGE_N {
        return Ok(());
    }

    Err(GateError::OutOfGate)
}
