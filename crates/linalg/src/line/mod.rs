//! Lines in R² written as `n · x = k`.
//!
//! - `Line` stores the normal vector, the constant term and a basepoint derived
//!   once at construction (first coordinate of `n` with `|n_k| >= eps_zero`).
//! - A zero normal makes the line degenerate: no basepoint, and two degenerate
//!   lines coincide iff their constants agree within `eps_zero`.
//! - Intersection returns `LineIntersection`; parallel and coincident lines are
//!   ordinary outcomes, not errors. Only a point outside the `Decimal` range
//!   fails (`LinalgError::Overflow`).
//!
//! Code cross-refs: `Vector::is_parallel_to_eps`, `Vector::is_orthogonal_to_eps`,
//! `display` (equation rendering).

mod display;

use rust_decimal::Decimal;

use crate::cfg::Tolerance;
use crate::error::LinalgError;
use crate::scalar::{det2, div, first_nonzero_index, is_near_zero, sub};
use crate::vector::Vector;

const DIMENSION: usize = 2;

/// Line `normal_vector · x = constant_term` in R².
///
/// Invariants:
/// - `normal_vector.dimension() == 2`.
/// - `basepoint` is `None` iff every normal coordinate is below `tolerance.eps_zero`.
#[derive(Clone, Debug)]
pub struct Line {
    normal_vector: Vector,
    constant_term: Decimal,
    basepoint: Option<Vector>,
    tolerance: Tolerance,
}

/// Result of intersecting two lines.
#[derive(Clone, Debug, PartialEq)]
pub enum LineIntersection {
    /// Unique intersection point.
    Point(Vector),
    /// The lines coincide (infinitely many common points).
    SameLine,
    /// Parallel, distinct lines (no common point).
    Parallel,
}

impl LineIntersection {
    #[inline]
    pub fn point(&self) -> Option<&Vector> {
        match self {
            Self::Point(p) => Some(p),
            _ => None,
        }
    }
}

impl Default for Line {
    /// The degenerate line `0 = 0`.
    fn default() -> Self {
        Self::degenerate(Decimal::ZERO)
    }
}

impl Line {
    /// Errors: `UnsupportedDimension` unless `normal_vector` is 2D, `Overflow`
    /// if the basepoint `c / n_k` is out of range.
    pub fn new(normal_vector: Vector, constant_term: Decimal) -> Result<Self, LinalgError> {
        Self::with_tolerance(normal_vector, constant_term, Tolerance::default())
    }

    /// Line through the origin (`constant_term = 0`).
    pub fn from_normal(normal_vector: Vector) -> Result<Self, LinalgError> {
        Self::new(normal_vector, Decimal::ZERO)
    }

    /// Degenerate line `0 = constant_term`.
    pub fn from_constant(constant_term: Decimal) -> Self {
        Self::degenerate(constant_term)
    }

    pub fn with_tolerance(
        normal_vector: Vector,
        constant_term: Decimal,
        tolerance: Tolerance,
    ) -> Result<Self, LinalgError> {
        if normal_vector.dimension() != DIMENSION {
            return Err(LinalgError::UnsupportedDimension {
                op: "line",
                supported: "2",
                dimension: normal_vector.dimension(),
            });
        }
        let basepoint = basepoint(&normal_vector, constant_term, tolerance.eps_zero)?;
        if basepoint.is_none() {
            tracing::debug!(constant = %constant_term, "zero normal vector; line has no basepoint");
        }
        Ok(Self {
            normal_vector,
            constant_term,
            basepoint,
            tolerance,
        })
    }

    fn degenerate(constant_term: Decimal) -> Self {
        tracing::debug!(constant = %constant_term, "zero normal vector; line has no basepoint");
        Self {
            normal_vector: zero_normal(),
            constant_term,
            basepoint: None,
            tolerance: Tolerance::default(),
        }
    }

    #[inline]
    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    #[inline]
    pub fn constant_term(&self) -> Decimal {
        self.constant_term
    }

    /// A point on the line; `None` for a degenerate line.
    #[inline]
    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    #[inline]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.basepoint.is_none()
    }

    /// Parallel normals (a zero normal is parallel to everything).
    ///
    /// Normals whose comparison leaves the `Decimal` range count as not parallel.
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        matches!(
            self.normal_vector
                .is_parallel_to_eps(&other.normal_vector, self.tolerance.eps_parallel),
            Ok(true)
        )
    }

    /// Same solution set.
    ///
    /// - Both degenerate: constants equal within `eps_zero`.
    /// - Exactly one degenerate: never.
    /// - Otherwise: parallel, and the basepoint difference is orthogonal to the normal.
    #[doc(alias = "equals")]
    pub fn coincides_with(&self, other: &Line) -> bool {
        match (&self.basepoint, &other.basepoint) {
            (None, None) => sub(self.constant_term, other.constant_term)
                .is_ok_and(|gap| is_near_zero(gap, self.tolerance.eps_zero)),
            (None, Some(_)) | (Some(_), None) => false,
            (Some(p), Some(q)) => {
                if !self.is_parallel_to(other) {
                    return false;
                }
                let offset = p.minus(q);
                matches!(
                    offset.and_then(|d| {
                        d.is_orthogonal_to_eps(&self.normal_vector, self.tolerance.eps_orthogonal)
                    }),
                    Ok(true)
                )
            }
        }
    }

    /// Solve the 2×2 system `[A B; C D] x = [k1; k2]` by Cramer's rule.
    ///
    /// `Parallel` only for an exactly singular system (`A D - B C == 0`); nearly
    /// parallel lines still meet in a (possibly distant) point.
    ///
    /// Errors: `Overflow` if the point is out of the `Decimal` range.
    pub fn intersection_with(&self, other: &Line) -> Result<LineIntersection, LinalgError> {
        if self.coincides_with(other) {
            tracing::trace!(line = %self, "coincident lines");
            return Ok(LineIntersection::SameLine);
        }
        let (a, b) = (self.normal_vector[0], self.normal_vector[1]);
        let (c, d) = (other.normal_vector[0], other.normal_vector[1]);
        let (k1, k2) = (self.constant_term, other.constant_term);
        let denom = det2(a, b, c, d)?;
        if denom.is_zero() {
            tracing::trace!(first = %self, second = %other, "parallel lines");
            return Ok(LineIntersection::Parallel);
        }
        let x = div(det2(k1, b, k2, d)?, denom)?;
        let y = div(det2(a, k1, c, k2)?, denom)?;
        Ok(LineIntersection::Point(Vector::from_nonempty(vec![x, y])))
    }
}

fn zero_normal() -> Vector {
    Vector::from_nonempty(vec![Decimal::ZERO; DIMENSION])
}

/// All zeros except `k`, where `k` is the first usable normal coordinate.
fn basepoint(
    normal_vector: &Vector,
    constant_term: Decimal,
    eps: Decimal,
) -> Result<Option<Vector>, LinalgError> {
    let Some(k) = first_nonzero_index(normal_vector, eps) else {
        return Ok(None);
    };
    let mut coords = vec![Decimal::ZERO; normal_vector.dimension()];
    coords[k] = div(constant_term, normal_vector[k])?;
    Ok(Some(Vector::from_nonempty(coords)))
}

#[cfg(test)]
mod tests;
