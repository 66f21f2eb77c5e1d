//! Floating-point compatibility API.
//!
//! Most floating-point functions are unavailable in `no_std`. This module
//! provides them using either `std` or the `libm` crate, depending on which
//! feature is enabled. As a fallback, it also implements the subset of the
//! functions needed by vector arithmetic even if neither feature is enabled.
//!
//! Call sites import the module under the name `f64`, so that
//! `f64::sqrt(x)` resolves to the inherent method with `std` and to one of
//! the free functions below otherwise.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::fabs as abs;
    pub use libm::sqrt;

    pub use libm::atan2;
    pub use libm::cos;
    pub use libm::pow as powf;
    pub use libm::sin;

    pub use super::fallback::rem_euclid;
}

pub mod fallback {
    const TWO_POW_108: f64 = (1u128 << 108) as f64;
    const TWO_POW_NEG_54: f64 = 1.0 / (1u64 << 54) as f64;

    /// Returns the absolute value of `x`.
    #[inline]
    pub fn abs(x: f64) -> f64 {
        f64::from_bits(x.to_bits() & !(1 << 63))
    }
    /// Returns the least non-negative remainder of `x` (mod `m`).
    #[inline]
    pub fn rem_euclid(x: f64, m: f64) -> f64 {
        let r = x % m;
        r + if r < 0.0 { abs(m) } else { 0.0 }
    }
    /// Returns the square root of `x`, or NaN if `x` is negative.
    #[inline]
    pub fn sqrt(x: f64) -> f64 {
        if x == 0.0 || x.is_infinite() || x.is_nan() {
            return x;
        }
        if x < 0.0 {
            return f64::NAN;
        }
        if x < f64::MIN_POSITIVE {
            // Subnormal: scale into the normal range and back
            return sqrt(x * TWO_POW_108) * TWO_POW_NEG_54;
        }
        x * super::fast_recip_sqrt(x)
    }
}

/// Returns an approximation of the reciprocal square root of a number,
/// refined to nearly full `f64` precision.
#[inline]
pub fn fast_recip_sqrt(x: f64) -> f64 {
    // https://en.wikipedia.org/wiki/Fast_inverse_square_root
    const MAGIC: u64 = 0x5fe6_eb50_c7b5_37a9;
    let mut y = <f64>::from_bits(MAGIC.saturating_sub(x.to_bits() >> 1));
    // Newton's method roughly doubles the correct digits each round
    for _ in 0..5 {
        y *= 1.5 - 0.5 * x * y * y;
    }
    y
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f64 = core::primitive::f64;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f64;

#[cfg(not(feature = "fp"))]
pub use fallback as f64;

#[cfg(test)]
#[allow(unused_imports)]
mod tests {
    use core::f64::consts::*;

    use super::{f64, *};
    use crate::assert_approx_eq;

    #[cfg(feature = "libm")]
    #[test]
    fn libm_functions() {
        assert_eq!(libm::abs(-2.5), 2.5);

        assert_approx_eq!(libm::rem_euclid(1.6, 0.5), 0.1);
        assert_approx_eq!(libm::rem_euclid(-1.6, 0.5), 0.4);

        assert_eq!(libm::sqrt(9.0), 3.0);
        assert!(libm::sqrt(-1.0).is_nan());

        assert_approx_eq!(libm::sin(FRAC_PI_6), 0.5);
        assert_eq!(libm::cos(PI), -1.0);
        assert_approx_eq!(libm::atan2(1.0, 1.0), FRAC_PI_4);
        assert_eq!(libm::powf(2.0, 10.0), 1024.0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_functions() {
        assert_eq!(f64::abs(-2.5), 2.5);

        assert_approx_eq!(f64::rem_euclid(1.6, 0.5), 0.1);
        assert_approx_eq!(f64::rem_euclid(-1.6, 0.5), 0.4);

        assert_eq!(f64::sqrt(9.0), 3.0);
        assert!(f64::sqrt(-1.0).is_nan());

        assert_eq!(f64::cos(PI), -1.0);
        assert_approx_eq!(f64::atan2(1.0, 1.0), FRAC_PI_4);
        assert_eq!(f64::powf(2.0, 10.0), 1024.0);
    }

    #[test]
    fn fallback_functions() {
        use fallback as fb;
        assert_eq!(fb::abs(-2.5), 2.5);
        assert_eq!(fb::abs(-0.0), 0.0);
        assert_eq!(fb::abs(3.0), 3.0);

        assert_approx_eq!(fb::rem_euclid(1.6, 0.5), 0.1);
        assert_approx_eq!(fb::rem_euclid(-1.6, 0.5), 0.4);
        assert_approx_eq!(fb::rem_euclid(1.6, -0.5), 0.1);
        assert_approx_eq!(fb::rem_euclid(-1.6, -0.5), 0.4);

        assert_approx_eq!(fb::sqrt(9.0), 3.0);
        assert_approx_eq!(fb::sqrt(16.0), 4.0);
        assert_approx_eq!(fb::sqrt(2.0), SQRT_2);
        assert_approx_eq!(fb::sqrt(106_937.0), 327.012_232_187_115_6);
        assert_eq!(fb::sqrt(0.0), 0.0);
        // Subnormal input
        let x = 1e-320;
        let r = fb::sqrt(x) * 1e150;
        assert_approx_eq!(r * r / (x * 1e300), 1.0);
        assert!(fb::sqrt(x) > 9.9e-161);
        assert!(fb::sqrt(-1.0).is_nan());
    }
}
