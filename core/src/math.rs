//! Vectors, colors, and supporting mathematics.
//!
//! Includes runtime-dimensioned [vectors][self::vec], clamped RGB
//! [colors][color], [angles][angle] and [pseudo-random numbers][rand], as
//! well as utilities such as approximate equality comparisons.
//!
//! Unlike fixed-size vector types, a [`Vector`] carries its dimension at
//! runtime. Every binary operation checks that its operands agree in
//! dimension and reports a mismatch as an [`Error`] instead of panicking or
//! silently truncating.

pub use {
    angle::{Angle, degs, rads, turns},
    approx::ApproxEq,
    color::{Color, rgb},
    error::{Error, Result, Shape},
    vec::{Axis, Input, Op, Vector, linear_interpolate},
};
#[cfg(feature = "fp")]
pub use angle::atan2;

/// Implements an operator trait for references in terms of an op-assign
/// trait, cloning the left operand.
macro_rules! impl_op {
    ($trait:ident :: $method:ident, $self:ty, $rhs:ty, $op:tt) => {
        impl core::ops::$trait<$rhs> for &$self {
            type Output = $self;
            #[inline]
            fn $method(self, rhs: $rhs) -> $self {
                let mut res = self.clone();
                res $op rhs;
                res
            }
        }
    };
}

pub mod angle;
pub mod approx;
pub mod color;
pub mod error;
pub mod float;
pub mod rand;
pub mod vec;
