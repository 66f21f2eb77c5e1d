//! Errors reported by vector and color operations.

use alloc::string::{String, ToString};
use core::fmt::{self, Display, Formatter};
use core::num::ParseIntError;

use crate::math::vec::Axis;

use Error::*;

/// Error returned by a failed vector or color operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A constructor or setter received arguments of an unrecognized shape.
    InvalidArgument(Shape),
    /// The operands of a binary operation had different dimensions.
    DimensionMismatch { expected: usize, actual: usize },
    /// A named axis was accessed on a vector with too few dimensions.
    AxisOutOfRange { axis: Axis, dim: usize },
    /// Malformed hex color string.
    InvalidFormat(String),
    /// The operation is not defined for vectors of this dimension.
    UnsupportedOperation { op: &'static str, dim: usize },
}

/// The shape of an argument rejected with [`Error::InvalidArgument`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Shape {
    /// The given number of separate scalars.
    Scalars(usize),
    /// A single sequence of the given length.
    Sequence(usize),
}

/// Result of a fallible vector or color operation.
pub type Result<T> = core::result::Result<T, Error>;

impl core::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument(shape) => write!(f, "invalid argument: {shape}"),
            DimensionMismatch { expected, actual } => write!(
                f,
                "dimension mismatch: expected {expected}, got {actual}"
            ),
            AxisOutOfRange { axis, dim } => {
                write!(f, "axis {axis} out of range for a {dim}D vector")
            }
            InvalidFormat(s) => write!(f, "invalid hex color: {s:?}"),
            UnsupportedOperation { op, dim } => {
                write!(f, "{op} is not supported for {dim}D vectors")
            }
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalars(1) => f.write_str("1 scalar"),
            Self::Scalars(n) => write!(f, "{n} scalars"),
            Self::Sequence(n) => write!(f, "sequence of length {n}"),
        }
    }
}

impl From<ParseIntError> for Error {
    fn from(e: ParseIntError) -> Self {
        InvalidFormat(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", DimensionMismatch { expected: 2, actual: 3 }),
            "dimension mismatch: expected 2, got 3"
        );
        assert_eq!(
            format!("{}", AxisOutOfRange { axis: Axis::W, dim: 2 }),
            "axis w out of range for a 2D vector"
        );
        assert_eq!(
            format!("{}", InvalidArgument(Shape::Scalars(2))),
            "invalid argument: 2 scalars"
        );
        assert_eq!(
            format!("{}", InvalidArgument(Shape::Sequence(0))),
            "invalid argument: sequence of length 0"
        );
        assert_eq!(
            format!("{}", InvalidFormat("#12".into())),
            "invalid hex color: \"#12\""
        );
        assert_eq!(
            format!("{}", UnsupportedOperation { op: "heading", dim: 3 }),
            "heading is not supported for 3D vectors"
        );
    }

    #[test]
    fn from_parse_int_error() {
        let e = u8::from_str_radix("zz", 16).unwrap_err();
        assert!(matches!(Error::from(e), InvalidFormat(_)));
    }
}
