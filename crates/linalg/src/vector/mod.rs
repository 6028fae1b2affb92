//! Exact-decimal vectors of any (non-zero) dimension.
//!
//! - `Vector` wraps an `nalgebra::DVector<Decimal>`; it is immutable and every
//!   operation returns a fresh value.
//! - Equality is exact decimal comparison (no tolerance). Tolerance-aware
//!   questions (`is_zero`, `is_parallel_to`, ...) live in `geometry`.
//! - Binary operations check dimensions up front and return
//!   `LinalgError::DimensionMismatch` instead of panicking inside nalgebra.
//! - Arithmetic is checked: a value beyond the `Decimal` range is
//!   `LinalgError::Overflow`, never a panic.
//!
//! Code cross-refs: `arith` (sums, scaling, norms, dot), `geometry` (angles,
//! projections, cross product, areas), `parse` (`FromStr`).

mod arith;
mod geometry;
mod parse;

use std::fmt;
use std::ops::{Index, Neg};

use nalgebra::DVector;
use rust_decimal::Decimal;

use crate::error::LinalgError;
use crate::scalar::IntoScalar;

pub use geometry::AngleUnit;

/// Immutable vector with `Decimal` coordinates.
///
/// Invariants:
/// - `dimension() >= 1`; fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vector {
    coords: DVector<Decimal>,
}

impl Vector {
    /// Build from any non-empty sequence of decimal-convertible values.
    ///
    /// Errors: `EmptyCoordinates` for an empty sequence, `InvalidCoordinate`
    /// for the first element that is not a finite decimal.
    pub fn new<I>(coordinates: I) -> Result<Self, LinalgError>
    where
        I: IntoIterator,
        I::Item: IntoScalar,
    {
        let coords = coordinates
            .into_iter()
            .enumerate()
            .map(|(i, x)| x.into_scalar().map_err(|input| LinalgError::invalid(i, input)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_decimals(coords)
    }

    /// Build from decimals already in hand.
    pub fn from_decimals(coords: Vec<Decimal>) -> Result<Self, LinalgError> {
        if coords.is_empty() {
            return Err(LinalgError::EmptyCoordinates);
        }
        Ok(Self::from_nonempty(coords))
    }

    /// Zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Result<Self, LinalgError> {
        if dimension == 0 {
            return Err(LinalgError::EmptyCoordinates);
        }
        Ok(Self::from_dvector(DVector::zeros(dimension)))
    }

    /// Callers guarantee `coords` is non-empty.
    #[inline]
    pub(crate) fn from_nonempty(coords: Vec<Decimal>) -> Self {
        Self::from_dvector(DVector::from_vec(coords))
    }

    /// Callers guarantee `coords` is non-empty.
    #[inline]
    pub(crate) fn from_dvector(coords: DVector<Decimal>) -> Self {
        debug_assert!(!coords.is_empty(), "vector must have a coordinate");
        Self { coords }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn coordinates(&self) -> &[Decimal] {
        self.coords.as_slice()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Decimal> {
        self.coordinates().iter()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&Decimal> {
        self.coordinates().get(i)
    }

    pub(crate) fn ensure_same_dimension(&self, other: &Vector) -> Result<(), LinalgError> {
        if self.dimension() != other.dimension() {
            return Err(LinalgError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }
}

impl Index<usize> for Vector {
    type Output = Decimal;
    #[inline]
    fn index(&self, i: usize) -> &Decimal {
        &self.coords[i]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Decimal;
    type IntoIter = std::slice::Iter<'a, Decimal>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Neg for &Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::from_dvector(self.coords.map(|x| -x))
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        -&self
    }
}

/// `Vector: (x_1, x_2, ...)`
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}
