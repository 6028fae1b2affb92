//! Exact-decimal vector algebra and 2D lines.
//!
//! Purpose
//! - `Vector`: arbitrary-dimension, immutable tuple of `Decimal` coordinates with
//!   arithmetic, norms, products, angles and projections.
//! - `Line`: `n · x = k` in R², with a derived basepoint, coincidence/parallelism
//!   tests and a tagged intersection result.
//!
//! Conventions
//! - Scalars are `rust_decimal::Decimal` (28 significant digits). Only the angle
//!   leaves decimal arithmetic (`acos` runs on `f64` after clamping to [-1, 1]).
//! - Tolerance-based predicates default to `1e-10`; every one of them has an
//!   explicit-epsilon variant. See `cfg::Tolerance`.
//! - Failures are `LinalgError`; degenerate-but-valid line outcomes are values of
//!   `LineIntersection`.

pub mod cfg;
pub mod error;
pub mod line;
pub mod scalar;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::Tolerance;
pub use error::{ErrorKind, LinalgError};
pub use line::{Line, LineIntersection};
pub use rust_decimal::Decimal;
pub use vector::{AngleUnit, Vector};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::Tolerance;
    pub use crate::error::{ErrorKind, LinalgError};
    pub use crate::line::{Line, LineIntersection};
    pub use crate::scalar::{first_nonzero_index, is_near_zero, IntoScalar};
    pub use crate::vector::{AngleUnit, Vector};
    pub use rust_decimal::Decimal;
}
