use rust_decimal::prelude::*;

use super::Vector;
use crate::error::LinalgError;
use crate::scalar::{add, div, mul, sub};

impl Vector {
    /// Componentwise sum.
    pub fn plus(&self, other: &Vector) -> Result<Vector, LinalgError> {
        self.zip_with(other, add)
    }

    /// Componentwise difference `self - other`.
    pub fn minus(&self, other: &Vector) -> Result<Vector, LinalgError> {
        self.zip_with(other, sub)
    }

    /// Errors: `Overflow` if a product leaves the decimal range.
    pub fn times_scalar(&self, s: Decimal) -> Result<Vector, LinalgError> {
        self.try_map(|x| mul(x, s))
    }

    /// Euclidean norm, `sqrt(Σ x_i²)`, in decimal precision.
    ///
    /// Computed as `m · sqrt(Σ (x_i / m)²)` with `m = max |x_i|`, so squares of
    /// tiny coordinates do not round away and squares of large ones do not
    /// overflow. Errors: `Overflow` only if the norm itself is out of range.
    pub fn magnitude(&self) -> Result<Decimal, LinalgError> {
        let scale = self.iter().map(|x| x.abs()).max().unwrap_or(Decimal::ZERO);
        if scale.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let sum = self.iter().try_fold(Decimal::ZERO, |acc, x| {
            let r = div(*x, scale)?;
            add(acc, mul(r, r)?)
        })?;
        // 1 <= sum <= dimension
        let root = sum.sqrt().unwrap_or(Decimal::ONE);
        mul(scale, root)
    }

    /// Unit vector in the direction of `self`.
    ///
    /// Errors: `ZeroVector` when the magnitude is exactly zero.
    pub fn normalized(&self) -> Result<Vector, LinalgError> {
        let m = self.magnitude()?;
        if m.is_zero() {
            return Err(LinalgError::ZeroVector);
        }
        self.try_map(|x| div(x, m))
    }

    /// `Σ a_i b_i`.
    pub fn dot(&self, other: &Vector) -> Result<Decimal, LinalgError> {
        self.ensure_same_dimension(other)?;
        self.iter()
            .zip(other.iter())
            .try_fold(Decimal::ZERO, |acc, (a, b)| add(acc, mul(*a, *b)?))
    }

    fn zip_with<F>(&self, other: &Vector, f: F) -> Result<Vector, LinalgError>
    where
        F: Fn(Decimal, Decimal) -> Result<Decimal, LinalgError>,
    {
        self.ensure_same_dimension(other)?;
        let coords = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| f(*a, *b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Vector::from_nonempty(coords))
    }

    fn try_map<F>(&self, f: F) -> Result<Vector, LinalgError>
    where
        F: Fn(Decimal) -> Result<Decimal, LinalgError>,
    {
        let coords = self
            .iter()
            .map(|x| f(*x))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Vector::from_nonempty(coords))
    }
}
