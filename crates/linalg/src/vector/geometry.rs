//! Angles, orthogonality/parallelism predicates, projections, cross product.
//!
//! Parallelism is decided algebraically: the rejection of `a` from `b` must be
//! shorter than `eps * |a|`, i.e. `sin θ < eps`. No transcendental function is
//! involved, so exact multiples such as `(4.046, 2.836)` and `(10.115, 7.09)`
//! are parallel without relying on `acos` hitting `0` or `π` exactly.

use std::iter;

use nalgebra::DVector;
use rust_decimal::prelude::*;

use super::Vector;
use crate::cfg::ZERO_EPS;
use crate::error::LinalgError;
use crate::scalar::{det2, mul};

const CROSS_PRODUCT: &str = "cross product";

/// Unit of `Vector::angle_with`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl Vector {
    /// Angle between `self` and `other` in `[0, π]` (or `[0, 180]` degrees).
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos` so rounding overshoot
    /// on (anti)parallel inputs cannot leave the domain.
    ///
    /// Errors: `DimensionMismatch`, `ZeroVectorAngle`.
    pub fn angle_with(&self, other: &Vector, unit: AngleUnit) -> Result<f64, LinalgError> {
        self.ensure_same_dimension(other)?;
        let u1 = self.normalized().map_err(|_| LinalgError::ZeroVectorAngle)?;
        let u2 = other.normalized().map_err(|_| LinalgError::ZeroVectorAngle)?;
        let cos = u1.dot(&u2)?.clamp(-Decimal::ONE, Decimal::ONE);
        let radians = cos.to_f64().map_or(f64::NAN, f64::acos);
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }

    /// `|self| < 1e-10`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.is_zero_eps(ZERO_EPS)
    }

    /// A norm too large to represent is never below `eps`.
    #[inline]
    pub fn is_zero_eps(&self, eps: Decimal) -> bool {
        self.magnitude().is_ok_and(|m| m < eps)
    }

    /// `|self · other| < 1e-10`.
    #[inline]
    pub fn is_orthogonal_to(&self, other: &Vector) -> Result<bool, LinalgError> {
        self.is_orthogonal_to_eps(other, ZERO_EPS)
    }

    pub fn is_orthogonal_to_eps(&self, other: &Vector, eps: Decimal) -> Result<bool, LinalgError> {
        Ok(self.dot(other)?.abs() < eps)
    }

    /// True when either vector is zero or they span at most a line.
    #[inline]
    pub fn is_parallel_to(&self, other: &Vector) -> Result<bool, LinalgError> {
        self.is_parallel_to_eps(other, ZERO_EPS)
    }

    /// `eps` is used both for the zero test and as the bound on `sin θ`.
    pub fn is_parallel_to_eps(&self, other: &Vector, eps: Decimal) -> Result<bool, LinalgError> {
        self.ensure_same_dimension(other)?;
        if self.is_zero_eps(eps) || other.is_zero_eps(eps) {
            return Ok(true);
        }
        let rejection = self.component_orthogonal_to(other)?;
        Ok(rejection.magnitude()? < mul(eps, self.magnitude()?)?)
    }

    /// Projection of `self` onto `basis`: `b̂ (self · b̂)`.
    ///
    /// Errors: `DimensionMismatch`, `NoUniqueParallelComponent` for a zero basis.
    pub fn component_parallel_to(&self, basis: &Vector) -> Result<Vector, LinalgError> {
        self.ensure_same_dimension(basis)?;
        let u = basis
            .normalized()
            .map_err(|_| LinalgError::NoUniqueParallelComponent)?;
        let weight = self.dot(&u)?;
        u.times_scalar(weight)
    }

    /// Rejection of `self` from `basis`: `self - component_parallel_to(basis)`.
    ///
    /// Errors: `DimensionMismatch`, `NoUniqueOrthogonalComponent` for a zero basis.
    pub fn component_orthogonal_to(&self, basis: &Vector) -> Result<Vector, LinalgError> {
        let projection = self.component_parallel_to(basis).map_err(|e| match e {
            LinalgError::NoUniqueParallelComponent => LinalgError::NoUniqueOrthogonalComponent,
            other => other,
        })?;
        self.minus(&projection)
    }

    /// Cross product, defined in 2 or 3 dimensions.
    ///
    /// 2D operands are lifted to `(x, y, 0)`, so the result is always 3D and
    /// `(0, 0, x1 y2 - x2 y1)` for planar inputs.
    ///
    /// Errors: `UnsupportedDimension` if either operand is outside {2, 3},
    /// `DimensionMismatch` for a 2D/3D pair, `Overflow`.
    pub fn cross(&self, other: &Vector) -> Result<Vector, LinalgError> {
        for dimension in [self.dimension(), other.dimension()] {
            if !(2..=3).contains(&dimension) {
                return Err(LinalgError::UnsupportedDimension {
                    op: CROSS_PRODUCT,
                    supported: "2 or 3",
                    dimension,
                });
            }
        }
        match (self.dimension(), other.dimension()) {
            (3, 3) => self.cross3(other),
            (2, 2) => self.lifted().cross3(&other.lifted()),
            (left, right) => Err(LinalgError::DimensionMismatch { left, right }),
        }
    }

    /// `|self × other|`.
    pub fn area_of_parallelogram_with(&self, other: &Vector) -> Result<Decimal, LinalgError> {
        self.cross(other)?.magnitude()
    }

    pub fn area_of_triangle_with(&self, other: &Vector) -> Result<Decimal, LinalgError> {
        Ok(self.area_of_parallelogram_with(other)? / Decimal::from(2))
    }

    fn cross3(&self, other: &Vector) -> Result<Vector, LinalgError> {
        let (x1, y1, z1) = (self[0], self[1], self[2]);
        let (x2, y2, z2) = (other[0], other[1], other[2]);
        Ok(Vector::from_nonempty(vec![
            det2(y1, z1, y2, z2)?,
            -det2(x1, z1, x2, z2)?,
            det2(x1, y1, x2, y2)?,
        ]))
    }

    /// Append a zero coordinate.
    fn lifted(&self) -> Vector {
        let n = self.dimension() + 1;
        let coords = self.iter().copied().chain(iter::once(Decimal::ZERO));
        Vector::from_dvector(DVector::from_iterator(n, coords))
    }
}
