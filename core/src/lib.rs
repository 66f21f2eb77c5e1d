//! N-dimensional vectors and RGB colors.
//!
//! Provides a runtime-dimensioned [`Vector`][math::Vector] of `f64` values
//! with dimension-checked elementwise arithmetic, named axis accessors,
//! magnitude and normalization, distance and dot product, interpolation,
//! and angle utilities; as well as a clamped-byte [`Color`][math::Color]
//! built on top of it, with hex and HSV conversions.
//!
//! # Crate features
//!
//! * `std`:
//!   Uses the floating-point functions of the standard library. Enabled by
//!   default.
//!
//!   If this feature is disabled, the crate only depends on `alloc`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! Without either of the above, trigonometric functions are unavailable and
//! square roots are computed with a portable approximation.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

pub mod math;

pub mod prelude {
    #[cfg(feature = "fp")]
    pub use crate::math::angle::atan2;
    pub use crate::math::{
        angle::{Angle, degs, rads, turns},
        approx::ApproxEq,
        color::{Color, rgb},
        error::Error,
        rand::{Distrib, Uniform, Xorshift64},
        vec::{Axis, Input, Op, Vector, linear_interpolate},
    };
}
