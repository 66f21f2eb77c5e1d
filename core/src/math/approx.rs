//! Testing and asserting approximate equality.

use core::iter::zip;

use crate::math::{color::Color, vec::Vector};

/// Trait for testing approximate equality.
///
/// Floating-point types are only an approximation of real numbers due to their
/// finite precision. The presence of rounding errors means that two floats may
/// not compare equal even if their counterparts in ℝ would. Even such a simple
/// expression as `0.1 + 0.2 == 0.3` will evaluate to false due to precision
/// issues.
///
/// Approximate equality is a more robust way to compare floating-point values
/// than strict equality. Two values are considered approximately equal if their
/// absolute difference is less than some small value, "epsilon". The epsilon
/// is *relative* to the magnitude of the values being compared.
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = Self> {
    /// Returns whether `self` and `other` are approximately equal.
    /// Uses the epsilon returned by [`Self::relative_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the relative epsilon `rel_eps`.
    fn approx_eq_eps(&self, other: &Other, rel_eps: &Epsilon) -> bool;

    /// Returns the default relative epsilon of type `E`.
    fn relative_epsilon() -> Epsilon;
}

impl ApproxEq for f64 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &Self) -> bool {
        use super::float::f64;
        let diff = f64::abs(self - other);
        diff <= *rel_eps * f64::abs(*self).max(1.0)
    }

    fn relative_epsilon() -> Self {
        if cfg!(feature = "fp") { 1e-9 } else { 1e-7 }
    }
}

impl<E, T: Sized + ApproxEq<T, E>> ApproxEq<Self, E> for [T] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.len() == other.len()
            && zip(self, other).all(|(s, o)| s.approx_eq_eps(o, rel_eps))
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

impl<E, T: Sized + ApproxEq<T, E>, const N: usize> ApproxEq<Self, E>
    for [T; N]
{
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.as_slice().approx_eq_eps(other, rel_eps)
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

impl ApproxEq<Self, f64> for Vector {
    /// Returns whether `self` and `other` have equal dimensions and
    /// approximately equal components.
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f64) -> bool {
        self.as_slice().approx_eq_eps(other.as_slice(), rel_eps)
    }
    fn relative_epsilon() -> f64 {
        f64::relative_epsilon()
    }
}

impl<const N: usize> ApproxEq<[f64; N], f64> for Vector {
    fn approx_eq_eps(&self, other: &[f64; N], rel_eps: &f64) -> bool {
        self.as_slice().approx_eq_eps(other.as_slice(), rel_eps)
    }
    fn relative_epsilon() -> f64 {
        f64::relative_epsilon()
    }
}

impl ApproxEq<Self, f64> for Color {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f64) -> bool {
        self.as_vector().approx_eq_eps(other.as_vector(), rel_eps)
    }
    fn relative_epsilon() -> f64 {
        f64::relative_epsilon()
    }
}

/// Asserts that two values are approximately equal.
/// Requires that the left operand has an applicable [`ApproxEq`] impl
/// and that both operands impl `Debug` unless a custom message is given.
///
/// # Panics
///
/// If the given values are not approximately equal.
///
/// # Examples
/// `assert_eq` would fail, but `assert_approx_eq` passes:
/// ```
/// # use nvector_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// ```
/// A custom epsilon can be given:
/// ```
/// # use nvector_core::assert_approx_eq;
/// assert_approx_eq!(100.0, 101.0, eps = 0.01);
/// ```
/// Vectors can be compared to each other or to arrays:
/// ```
/// # use nvector_core::{assert_approx_eq, math::Vector};
/// let v = Vector::from([0.1, 0.2]).add(&[0.2, 0.1]).unwrap();
/// assert_approx_eq!(v, [0.3, 0.3]);
/// ```
/// Like `assert_eq`, this macro supports custom panic messages.
/// The epsilon, if present, must come before the format string.
/// ```should_panic
/// # use nvector_core::assert_approx_eq;
/// assert_approx_eq!(3.14_f64.sin(), 0.0, eps = 0.0001,
///     "3.14 is not a good approximation of {}!", std::f64::consts::PI);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:literal) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:literal, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, &$eps),
                $fmt $(, $args)*
            )
        }
    }};
}

#[cfg(test)]
mod tests {

    mod f64 {
        #[test]
        fn approx_eq_zero() {
            assert_approx_eq!(0.0, 0.0);
            assert_approx_eq!(-0.0, 0.0);
            assert_approx_eq!(0.0, -0.0);
        }

        #[test]
        fn approx_eq_positive() {
            assert_approx_eq!(0.0, 0.000_000_000_1);
            assert_approx_eq!(0.999_999_999_9, 1.0);
            assert_approx_eq!(1.0e10, 1.000_000_000_01e10);
        }

        #[test]
        fn approx_eq_negative() {
            assert_approx_eq!(0.0, -0.000_000_000_1);
            assert_approx_eq!(-1.0, -1.000_000_000_1);
            assert_approx_eq!(-1.0e10, -1.000_000_000_01e10);
        }

        #[test]
        fn approx_eq_custom_epsilon() {
            assert_approx_eq!(0.0, 0.001, eps = 0.01);
            assert_approx_eq!(1.0, 0.999, eps = 0.01);
            assert_approx_eq!(100.0, 99.9, eps = 0.01);
        }

        #[test]
        #[should_panic]
        fn zero_not_approx_eq_to_one() {
            assert_approx_eq!(0.0, 1.0);
        }
        #[test]
        #[should_panic]
        fn one_not_approx_eq_to_1_00001() {
            assert_approx_eq!(1.0, 1.00001);
        }
        #[test]
        #[should_panic]
        fn nan_not_approx_eq_to_nan() {
            assert_approx_eq!(f64::NAN, f64::NAN);
        }
    }

    mod vector {
        use crate::math::Vector;

        #[test]
        fn approx_eq_vector() {
            let v = Vector::from([0.1, 0.2, 0.3]);
            let w = Vector::from([0.1 + 1e-12, 0.2, 0.3 - 1e-12]);
            assert_approx_eq!(v, w);
            assert_approx_eq!(v, [0.1, 0.2, 0.3]);
        }

        #[test]
        #[should_panic]
        fn different_dims_not_approx_eq() {
            assert_approx_eq!(Vector::from([1.0, 2.0]), [1.0, 2.0, 0.0]);
        }
    }
}
