//! Decimal scalar conversions, near-zero helpers and checked arithmetic.
//!
//! `Decimal` operators panic once a result leaves the representable range; the
//! crate-internal `add`/`sub`/`mul`/`div` report `LinalgError::Overflow` instead.
//! Underflow is not an error: results round toward zero at 28 decimal places.

use rust_decimal::prelude::*;

use crate::error::LinalgError;

/// Values accepted as vector coordinates.
///
/// On failure the rejected input is returned as text so errors can quote it.
pub trait IntoScalar {
    fn into_scalar(self) -> Result<Decimal, String>;
}

impl IntoScalar for Decimal {
    #[inline]
    fn into_scalar(self) -> Result<Decimal, String> {
        Ok(self)
    }
}

impl IntoScalar for &Decimal {
    #[inline]
    fn into_scalar(self) -> Result<Decimal, String> {
        Ok(*self)
    }
}

macro_rules! int_into_scalar {
    ($($t:ty),*) => {
        $(impl IntoScalar for $t {
            #[inline]
            fn into_scalar(self) -> Result<Decimal, String> {
                Ok(Decimal::from(self))
            }
        })*
    };
}

int_into_scalar!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl IntoScalar for f64 {
    /// Shortest decimal that round-trips the float (`8.462` stays `8.462`).
    fn into_scalar(self) -> Result<Decimal, String> {
        Decimal::from_f64(self).ok_or_else(|| self.to_string())
    }
}

impl IntoScalar for f32 {
    fn into_scalar(self) -> Result<Decimal, String> {
        Decimal::from_f32(self).ok_or_else(|| self.to_string())
    }
}

impl IntoScalar for &str {
    /// Plain (`-8.187`) or scientific (`1e-3`) notation, surrounding blanks ignored.
    fn into_scalar(self) -> Result<Decimal, String> {
        let t = self.trim();
        Decimal::from_str(t)
            .or_else(|_| Decimal::from_scientific(t))
            .map_err(|_| self.to_string())
    }
}

impl IntoScalar for String {
    fn into_scalar(self) -> Result<Decimal, String> {
        self.as_str().into_scalar()
    }
}

impl IntoScalar for &String {
    fn into_scalar(self) -> Result<Decimal, String> {
        self.as_str().into_scalar()
    }
}

/// `|x| < eps`.
#[inline]
pub fn is_near_zero(x: Decimal, eps: Decimal) -> bool {
    x.abs() < eps
}

/// Index of the first value that is non-zero and has `|x| >= eps`, if any.
///
/// An exact zero is never returned, even for `eps == 0`.
pub fn first_nonzero_index<'a, I>(values: I, eps: Decimal) -> Option<usize>
where
    I: IntoIterator<Item = &'a Decimal>,
{
    values
        .into_iter()
        .position(|x| !x.is_zero() && !is_near_zero(*x, eps))
}

#[inline]
pub(crate) fn add(a: Decimal, b: Decimal) -> Result<Decimal, LinalgError> {
    a.checked_add(b).ok_or(LinalgError::Overflow)
}

#[inline]
pub(crate) fn sub(a: Decimal, b: Decimal) -> Result<Decimal, LinalgError> {
    a.checked_sub(b).ok_or(LinalgError::Overflow)
}

#[inline]
pub(crate) fn mul(a: Decimal, b: Decimal) -> Result<Decimal, LinalgError> {
    a.checked_mul(b).ok_or(LinalgError::Overflow)
}

/// Callers guarantee `b != 0`; a zero divisor is reported as `Overflow`.
#[inline]
pub(crate) fn div(a: Decimal, b: Decimal) -> Result<Decimal, LinalgError> {
    a.checked_div(b).ok_or(LinalgError::Overflow)
}

/// `a d - b c`, the determinant of `[a b; c d]`.
#[inline]
pub(crate) fn det2(
    a: Decimal,
    b: Decimal,
    c: Decimal,
    d: Decimal,
) -> Result<Decimal, LinalgError> {
    sub(mul(a, d)?, mul(b, c)?)
}
