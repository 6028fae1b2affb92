//! Tolerance defaults.
//!
//! Policy
//! - Defaults are fixed constants; callers who need other thresholds pass a
//!   `Tolerance` (lines) or call the `_eps` variant of a predicate (vectors).

use rust_decimal::Decimal;

/// `1e-10`: zero, orthogonality and parallelism threshold.
pub(crate) const ZERO_EPS: Decimal = Decimal::from_parts(1, 0, 0, false, 10);
/// Decimal places kept when rendering line equations.
pub(crate) const DISPLAY_DECIMALS: u32 = 3;

/// Tolerances used by tolerance-aware operations.
///
/// - `eps_zero`: a scalar/magnitude below this is treated as zero (basepoint
///   search, degenerate-line constants, zero vectors).
/// - `eps_orthogonal`: `|a · b|` below this means orthogonal.
/// - `eps_parallel`: sine of the angle between two vectors below this means
///   parallel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tolerance {
    pub eps_zero: Decimal,
    pub eps_orthogonal: Decimal,
    pub eps_parallel: Decimal,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            eps_zero: ZERO_EPS,
            eps_orthogonal: ZERO_EPS,
            eps_parallel: ZERO_EPS,
        }
    }
}

impl Tolerance {
    /// Same threshold for every check.
    #[inline]
    pub fn uniform(eps: Decimal) -> Self {
        Self {
            eps_zero: eps,
            eps_orthogonal: eps,
            eps_parallel: eps,
        }
    }
}
