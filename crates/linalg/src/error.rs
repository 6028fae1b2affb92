//! Error type shared by vectors and lines.

use std::fmt;

/// Failure classes surfaced to callers.
///
/// Degenerate geometric outcomes (parallel or coincident lines) are not errors;
/// they are variants of `LineIntersection`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input itself is malformed (empty, non-numeric, mismatched dimensions).
    InvalidInput,
    /// The input is well-formed but the operation has no defined result for it.
    UndefinedOperation,
}

/// Errors surfaced by vector and line operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinalgError {
    /// A vector needs at least one coordinate.
    EmptyCoordinates,
    /// Coordinate `index` is not a finite decimal.
    InvalidCoordinate { index: usize, input: String },
    /// Binary operation on vectors of different dimension.
    DimensionMismatch { left: usize, right: usize },
    /// Normalizing the zero vector.
    ZeroVector,
    /// Angle involving the zero vector.
    ZeroVectorAngle,
    /// Projection onto the zero vector.
    NoUniqueParallelComponent,
    /// Rejection from the zero vector.
    NoUniqueOrthogonalComponent,
    /// An intermediate or final value left the `Decimal` range (about ±7.9e28).
    Overflow,
    /// `op` is only defined in the `supported` dimensions.
    UnsupportedDimension {
        op: &'static str,
        supported: &'static str,
        dimension: usize,
    },
}

impl LinalgError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyCoordinates
            | Self::InvalidCoordinate { .. }
            | Self::DimensionMismatch { .. } => ErrorKind::InvalidInput,
            Self::ZeroVector
            | Self::ZeroVectorAngle
            | Self::NoUniqueParallelComponent
            | Self::NoUniqueOrthogonalComponent
            | Self::Overflow
            | Self::UnsupportedDimension { .. } => ErrorKind::UndefinedOperation,
        }
    }

    pub(crate) fn invalid(index: usize, input: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            index,
            input: input.into(),
        }
    }
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCoordinates => write!(f, "the coordinates must be nonempty"),
            Self::InvalidCoordinate { index, input } => {
                write!(f, "coordinate {index} ({input:?}) is not a finite decimal")
            }
            Self::DimensionMismatch { left, right } => {
                write!(f, "dimension mismatch: {left} vs {right}")
            }
            Self::ZeroVector => write!(f, "cannot normalize the zero vector"),
            Self::ZeroVectorAngle => write!(f, "cannot compute an angle with the zero vector"),
            Self::NoUniqueParallelComponent => write!(f, "no unique parallel component"),
            Self::NoUniqueOrthogonalComponent => write!(f, "no unique orthogonal component"),
            Self::Overflow => write!(f, "result exceeds the decimal range"),
            Self::UnsupportedDimension {
                op,
                supported,
                dimension,
            } => write!(
                f,
                "{op} is only defined in {supported} dimensions (got {dimension})"
            ),
        }
    }
}

impl std::error::Error for LinalgError {}
