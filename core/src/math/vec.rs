//! Real vectors of runtime dimension.
//!
//! A [`Vector`] is an ordered sequence of `f64` components whose length, the
//! *dimension*, is chosen at runtime. Binary operations are only defined
//! between operands of equal dimension; a mismatch is reported as
//! [`Error::DimensionMismatch`] and never silently truncated or padded.
//!
//! Operations that take a second operand accept anything convertible to an
//! [`Input`]: another vector, a slice or array, or a single scalar, which
//! is broadcast to every axis.

use alloc::{vec, vec::Vec};
use core::fmt::{self, Debug, Display, Formatter};
use core::iter::zip;
use core::ops::{
    AddAssign, DivAssign, Index, IndexMut, MulAssign, Neg, Range, SubAssign,
};
use core::slice;

use log::{debug, trace};

#[cfg(feature = "fp")]
use crate::math::angle::{Angle, rads};
use crate::math::error::{Error, Error::*, Result, Shape};
use crate::math::rand::{Distrib, Uniform, Xorshift64};

//
// Types
//

/// A vector of `f64` components with a dimension chosen at runtime.
///
/// The components can be accessed by index, or by one of the named
/// [axes](Axis) `x`, `y`, `z`, `w` or their color channel aliases `r`, `g`,
/// `b`, `a`. Named accessors are views into the same storage and fail with
/// [`Error::AxisOutOfRange`] if the vector has too few dimensions.
///
/// Cloning a `Vector` deep-copies its components.
#[derive(Clone, Default, PartialEq)]
pub struct Vector(Vec<f64>);

/// A named axis of a vector, aliasing a fixed component index.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// The first axis, index 0.
    X,
    /// The second axis, index 1.
    Y,
    /// The third axis, index 2.
    Z,
    /// The fourth axis, index 3.
    W,
    /// The red channel, alias of [`Axis::X`].
    R,
    /// The green channel, alias of [`Axis::Y`].
    G,
    /// The blue channel, alias of [`Axis::Z`].
    B,
    /// The alpha channel, alias of [`Axis::W`].
    A,
}

/// An elementwise binary operation.
///
/// Division follows IEEE 754 semantics: dividing by zero yields an infinity
/// or NaN rather than an error. The same holds for powers, e.g. a negative
/// base with a fractional exponent yields NaN.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    /// Raises the left operand to the power of the right.
    #[cfg(feature = "fp")]
    Pow,
}

/// An operand that can be coerced into a sequence of vector components.
#[derive(Copy, Clone, Debug)]
pub enum Input<'a> {
    /// A single scalar.
    Scalar(f64),
    /// Separate scalar arguments. An empty slice means no arguments.
    Scalars(&'a [f64]),
    /// A single ordered sequence.
    Sequence(&'a [f64]),
    /// Another vector.
    Vector(&'a Vector),
}

//
// Free fns
//

/// Linearly interpolates between `a` and `b`, returning
/// `a + t * (b - a)` componentwise.
///
/// `t` outside `[0, 1]` extrapolates.
///
/// # Errors
/// [`Error::DimensionMismatch`] if `a` and `b` have different dimensions.
///
/// # Examples
/// ```
/// use nvector_core::math::{Vector, vec::linear_interpolate};
///
/// let a = Vector::from([0.0, 10.0]);
/// let b = Vector::from([10.0, 20.0]);
/// assert_eq!(linear_interpolate(&a, &b, 0.5), Ok(Vector::from([5.0, 15.0])));
/// ```
pub fn linear_interpolate(a: &Vector, b: &Vector, t: f64) -> Result<Vector> {
    a.lerp(b, t)
}

//
// Inherent impls
//

impl Axis {
    /// Returns the component index that `self` refers to.
    pub const fn index(self) -> usize {
        match self {
            Self::X | Self::R => 0,
            Self::Y | Self::G => 1,
            Self::Z | Self::B => 2,
            Self::W | Self::A => 3,
        }
    }
    /// Returns the lowercase name of `self`.
    pub const fn name(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
            Self::W => 'w',
            Self::R => 'r',
            Self::G => 'g',
            Self::B => 'b',
            Self::A => 'a',
        }
    }
}

impl Op {
    /// Applies `self` to a pair of scalars.
    #[inline]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
            #[cfg(feature = "fp")]
            Self::Pow => {
                use crate::math::float::f64;
                f64::powf(a, b)
            }
        }
    }
}

impl Input<'_> {
    /// Returns the shape of `self`, as reported in errors.
    pub fn shape(&self) -> Shape {
        match *self {
            Self::Scalar(_) => Shape::Scalars(1),
            Self::Scalars(s) => Shape::Scalars(s.len()),
            Self::Sequence(s) => Shape::Sequence(s.len()),
            Self::Vector(v) => Shape::Sequence(v.dim()),
        }
    }

    /// Normalizes `self` into a plain sequence of values.
    ///
    /// If `expected_dim` is `None`, returns the values as given; a single
    /// scalar becomes a sequence of length one.
    ///
    /// If `expected_dim` is `Some(n)`, no arguments yield `n` zeros and a
    /// single scalar, or a sequence of length one, is broadcast to `n` values.
    /// Anything else must have exactly `n` values.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the resulting sequence does not have
    /// the expected length.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::math::{Error, Vector, vec::Input};
    ///
    /// assert_eq!(Input::Scalar(2.0).to_values(Some(3)), Ok(vec![2.0; 3]));
    ///
    /// let v = Vector::from([1.0, 2.0]);
    /// assert_eq!(Input::Vector(&v).to_values(None), Ok(vec![1.0, 2.0]));
    /// assert_eq!(
    ///     Input::Vector(&v).to_values(Some(3)),
    ///     Err(Error::DimensionMismatch { expected: 3, actual: 2 })
    /// );
    /// ```
    pub fn to_values(self, expected_dim: Option<usize>) -> Result<Vec<f64>> {
        let Some(n) = expected_dim else {
            return Ok(self.into_values());
        };
        let values = match self {
            Self::Scalars([]) => vec![0.0; n],
            Self::Scalar(s) | Self::Scalars(&[s]) | Self::Sequence(&[s]) => {
                vec![s; n]
            }
            other => other.into_values(),
        };
        if values.len() != n {
            return Err(DimensionMismatch {
                expected: n,
                actual: values.len(),
            });
        }
        Ok(values)
    }

    fn into_values(self) -> Vec<f64> {
        match self {
            Self::Scalar(s) => vec![s],
            Self::Scalars(s) | Self::Sequence(s) => s.to_vec(),
            Self::Vector(v) => v.0.clone(),
        }
    }
}

impl Vector {
    /// Returns a vector with the given components.
    #[inline]
    pub const fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Returns the all-zeroes vector of dimension `dim`.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::math::Vector;
    /// assert_eq!(Vector::zero(3).as_slice(), &[0.0, 0.0, 0.0]);
    /// ```
    pub fn zero(dim: usize) -> Self {
        Self(vec![0.0; dim])
    }

    /// Returns a vector of dimension `dim` with every component equal to `s`.
    pub fn from_scalar(dim: usize, s: f64) -> Self {
        Self(vec![s; dim])
    }

    /// Returns a vector of dimension `dim` from the values of `seq`.
    ///
    /// A sequence of length one is broadcast to every axis; a longer
    /// sequence is truncated to its first `dim` values.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `seq` is empty or shorter than `dim`
    /// (and longer than one).
    pub fn from_sequence(dim: usize, seq: &[f64]) -> Result<Self> {
        Self::make(dim, Input::Sequence(seq))
    }

    /// Returns a copy of `v`, checking that it has dimension `dim`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimension of `v` is not `dim`.
    pub fn from_vector(dim: usize, v: &Vector) -> Result<Self> {
        Self::make(dim, Input::Vector(v))
    }

    /// Returns a vector of dimension `dim` made from `input`.
    ///
    /// The following shapes are accepted, in priority order:
    /// 1. no scalars: the zero vector
    /// 2. exactly `dim` scalars: one value per axis
    /// 3. a single scalar: broadcast to every axis
    /// 4. a sequence of length one: its value broadcast to every axis
    /// 5. a sequence of length at least `dim`: its first `dim` values
    /// 6. a vector of dimension `dim`: a copy of its components
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `input` is a vector of a different
    /// dimension, [`Error::InvalidArgument`] for any other shape.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::math::{Error, Vector, vec::Input, error::Shape};
    ///
    /// let v = Vector::make(3, Input::Scalars(&[])).unwrap();
    /// assert_eq!(v, Vector::zero(3));
    ///
    /// let v = Vector::make(3, 1.5).unwrap();
    /// assert_eq!(v.as_slice(), &[1.5, 1.5, 1.5]);
    ///
    /// let v = Vector::make(2, &[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v.as_slice(), &[1.0, 2.0]);
    ///
    /// assert_eq!(
    ///     Vector::make(3, Input::Scalars(&[1.0, 2.0])),
    ///     Err(Error::InvalidArgument(Shape::Scalars(2)))
    /// );
    /// ```
    pub fn make<'a>(dim: usize, input: impl Into<Input<'a>>) -> Result<Self> {
        let values = match input.into() {
            Input::Scalars([]) => vec![0.0; dim],
            Input::Scalars(s) if s.len() == dim => s.to_vec(),
            Input::Scalar(s) | Input::Scalars(&[s]) | Input::Sequence(&[s]) => {
                vec![s; dim]
            }
            Input::Sequence(s) if s.len() >= dim => s[..dim].to_vec(),
            Input::Vector(v) if v.dim() == dim => v.0.clone(),
            Input::Vector(v) => {
                debug!("cannot make a {dim}D vector from {v:?}");
                return Err(DimensionMismatch {
                    expected: dim,
                    actual: v.dim(),
                });
            }
            other => {
                debug!("cannot make a {dim}D vector from {}", other.shape());
                return Err(InvalidArgument(other.shape()));
            }
        };
        Ok(Self(values))
    }

    /// Returns a 2D vector pointing in the direction `angle` radians
    /// counterclockwise from the positive `x` axis, `(cos(angle), sin(angle))`.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::{assert_approx_eq, math::Vector};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(Vector::from_angle(0.0), [1.0, 0.0]);
    /// assert_approx_eq!(Vector::from_angle(FRAC_PI_2), [0.0, 1.0]);
    /// ```
    #[cfg(feature = "fp")]
    pub fn from_angle(angle: f64) -> Self {
        Self::from_polar(rads(angle))
    }

    /// Returns a 2D unit vector in the direction of `angle`.
    #[cfg(feature = "fp")]
    pub fn from_polar(angle: Angle) -> Self {
        Self(vec![angle.cos(), angle.sin()])
    }

    /// Returns a vector of dimension `dim` with each component drawn
    /// uniformly from `[-1, 1)`.
    ///
    /// Note that the result is a random point in the unit *box*; it is not
    /// normalized to unit length.
    pub fn random_unit(dim: usize, rng: &mut Xorshift64) -> Self {
        Self::sample(dim, -1.0..1.0, rng)
    }

    /// Returns a vector of dimension `dim` with each component drawn
    /// uniformly from `[0, 1)`.
    pub fn random_normal(dim: usize, rng: &mut Xorshift64) -> Self {
        Self::sample(dim, 0.0..1.0, rng)
    }

    /// Returns a vector drawn uniformly from the axis-aligned box spanned by
    /// `min` (inclusive) and `max` (exclusive).
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `min` and `max` have different
    /// dimensions.
    pub fn random_in(
        min: &Vector,
        max: &Vector,
        rng: &mut Xorshift64,
    ) -> Result<Self> {
        let max = min.coerce(max)?;
        Ok(zip(&min.0, max)
            .map(|(&lo, hi)| Uniform(lo..hi).sample(rng))
            .collect())
    }

    fn sample(dim: usize, range: Range<f64>, rng: &mut Xorshift64) -> Self {
        let d = Uniform(range);
        (0..dim).map(|_| d.sample(rng)).collect()
    }

    /// Returns the number of components of `self`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Returns whether `self` has zero dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the components of `self` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the components of `self` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.0
    }

    /// Returns the components of `self` as a `Vec`.
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.clone()
    }

    /// Returns the components of `self` truncated toward zero.
    ///
    /// Values out of the range of `i64` saturate and NaN maps to zero.
    pub fn to_ints(&self) -> Vec<i64> {
        self.0.iter().map(|&v| v as i64).collect()
    }

    /// Returns an iterator over the components of `self`.
    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Returns the component of `self` aliased by `axis`.
    ///
    /// # Errors
    /// [`Error::AxisOutOfRange`] if `self` has too few dimensions.
    pub fn get(&self, axis: Axis) -> Result<f64> {
        self.0
            .get(axis.index())
            .copied()
            .ok_or_else(|| self.axis_error(axis))
    }

    /// Returns a mutable reference to the component aliased by `axis`.
    ///
    /// # Errors
    /// [`Error::AxisOutOfRange`] if `self` has too few dimensions.
    pub fn get_mut(&mut self, axis: Axis) -> Result<&mut f64> {
        let err = self.axis_error(axis);
        self.0.get_mut(axis.index()).ok_or(err)
    }

    /// Sets the component aliased by `axis` to `value`.
    ///
    /// # Errors
    /// [`Error::AxisOutOfRange`] if `self` has too few dimensions.
    pub fn set_axis(&mut self, axis: Axis, value: f64) -> Result<()> {
        *self.get_mut(axis)? = value;
        Ok(())
    }

    fn axis_error(&self, axis: Axis) -> Error {
        AxisOutOfRange { axis, dim: self.dim() }
    }

    /// Replaces the components of `self` with `input`.
    ///
    /// The dimension of `self` becomes that of `input`; a scalar yields
    /// a one-dimensional vector. Use [`assign`][Self::assign] to keep the
    /// dimension fixed.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::math::Vector;
    ///
    /// let mut v = Vector::from([1.0, 2.0]);
    /// v.set(&[3.0, 4.0, 5.0]);
    /// assert_eq!(v.dim(), 3);
    /// ```
    pub fn set<'a>(&mut self, input: impl Into<Input<'a>>) {
        let values = input.into().into_values();
        if values.len() != self.dim() {
            trace!("vector dimension {} -> {}", self.dim(), values.len());
        }
        self.0 = values;
    }

    /// Replaces the components of `self` with `input`, coerced to the
    /// current dimension of `self`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `input` cannot be coerced to the
    /// dimension of `self`. In that case `self` is left unchanged.
    pub fn assign<'a>(&mut self, input: impl Into<Input<'a>>) -> Result<()> {
        self.0 = self.coerce(input)?;
        Ok(())
    }

    /// Returns the result of applying `op` to each pair of corresponding
    /// components of `self` and `rhs`.
    ///
    /// All arithmetic methods, allocating and in-place, are implemented in
    /// terms of [`combine_assign`][Self::combine_assign].
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `rhs` cannot be coerced to the
    /// dimension of `self`.
    pub fn combine<'a>(
        &self,
        rhs: impl Into<Input<'a>>,
        op: Op,
    ) -> Result<Self> {
        let mut res = self.clone();
        res.combine_assign(rhs, op)?;
        Ok(res)
    }

    /// Applies `op` to each pair of corresponding components of `self` and
    /// `rhs`, storing the result in `self`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `rhs` cannot be coerced to the
    /// dimension of `self`. In that case `self` is left unchanged.
    pub fn combine_assign<'a>(
        &mut self,
        rhs: impl Into<Input<'a>>,
        op: Op,
    ) -> Result<&mut Self> {
        let rhs = self.coerce(rhs)?;
        for (a, b) in zip(&mut self.0, rhs) {
            *a = op.apply(*a, b);
        }
        Ok(self)
    }

    /// Returns the componentwise sum of `self` and `rhs`.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::math::Vector;
    ///
    /// let v = Vector::from([5.0, 3.6, 1.0]);
    /// let w = Vector::from([5.0, 6.4, 9.0]);
    /// assert_eq!(v.add(&w).unwrap().as_slice(), &[10.0, 10.0, 10.0]);
    /// ```
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn add<'a>(&self, rhs: impl Into<Input<'a>>) -> Result<Self> {
        self.combine(rhs, Op::Add)
    }
    /// Returns the componentwise difference of `self` and `rhs`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn sub<'a>(&self, rhs: impl Into<Input<'a>>) -> Result<Self> {
        self.combine(rhs, Op::Sub)
    }
    /// Returns the componentwise product of `self` and `rhs`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn mul<'a>(&self, rhs: impl Into<Input<'a>>) -> Result<Self> {
        self.combine(rhs, Op::Mul)
    }
    /// Returns the componentwise quotient of `self` and `rhs`.
    ///
    /// Division by zero is not an error; the affected components become
    /// infinite or NaN as per IEEE 754.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn div<'a>(&self, rhs: impl Into<Input<'a>>) -> Result<Self> {
        self.combine(rhs, Op::Div)
    }

    /// Returns `self` with each component raised to the power of the
    /// corresponding component of `rhs`.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::math::Vector;
    ///
    /// let v = Vector::from([2.0, 3.0, 4.0]);
    /// assert_eq!(v.pow(2.0), Ok(Vector::from([4.0, 9.0, 16.0])));
    /// assert_eq!(v.pow(&[3.0, 0.0, 0.5]), Ok(Vector::from([8.0, 1.0, 2.0])));
    /// ```
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    #[cfg(feature = "fp")]
    pub fn pow<'a>(&self, rhs: impl Into<Input<'a>>) -> Result<Self> {
        self.combine(rhs, Op::Pow)
    }

    /// Adds `rhs` to `self` componentwise.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn add_assign<'a>(
        &mut self,
        rhs: impl Into<Input<'a>>,
    ) -> Result<&mut Self> {
        self.combine_assign(rhs, Op::Add)
    }
    /// Subtracts `rhs` from `self` componentwise.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn sub_assign<'a>(
        &mut self,
        rhs: impl Into<Input<'a>>,
    ) -> Result<&mut Self> {
        self.combine_assign(rhs, Op::Sub)
    }
    /// Multiplies `self` by `rhs` componentwise.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn mul_assign<'a>(
        &mut self,
        rhs: impl Into<Input<'a>>,
    ) -> Result<&mut Self> {
        self.combine_assign(rhs, Op::Mul)
    }
    /// Divides `self` by `rhs` componentwise, with IEEE 754 semantics.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn div_assign<'a>(
        &mut self,
        rhs: impl Into<Input<'a>>,
    ) -> Result<&mut Self> {
        self.combine_assign(rhs, Op::Div)
    }
    /// Raises each component of `self` to the power of the corresponding
    /// component of `rhs`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    #[cfg(feature = "fp")]
    pub fn pow_assign<'a>(
        &mut self,
        rhs: impl Into<Input<'a>>,
    ) -> Result<&mut Self> {
        self.combine_assign(rhs, Op::Pow)
    }

    /// Returns the square of the Euclidean length of `self`.
    ///
    /// The sum of squares overflows to infinity if any component is larger
    /// than about 1e154 in absolute value; [`magnitude`][Self::magnitude]
    /// does not.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::math::Vector;
    /// assert_eq!(Vector::from([3.0, -4.0]).magnitude_squared(), 25.0);
    /// ```
    pub fn magnitude_squared(&self) -> f64 {
        self.0.iter().map(|v| v * v).sum()
    }

    /// Returns the Euclidean length of `self`.
    ///
    /// Components too large or too small to be squared without overflow or
    /// underflow are first scaled by the largest absolute component.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::{assert_approx_eq, math::Vector};
    ///
    /// assert_eq!(Vector::from([3.0, 4.0]).magnitude(), 5.0);
    ///
    /// let m = Vector::from([3e200, 4e200]).magnitude();
    /// assert_approx_eq!(m / 5e200, 1.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        use crate::math::float::f64;
        let sqr = self.magnitude_squared();
        if sqr.is_normal() {
            return f64::sqrt(sqr);
        }
        let max = self.0.iter().fold(0.0, |m, &v| f64::abs(v).max(m));
        if max == 0.0 || max.is_infinite() {
            // Zero, infinite, or NaN
            return if sqr.is_nan() { sqr } else { max };
        }
        let sum = self.0.iter().fold(0.0, |s, v| s + (v / max) * (v / max));
        f64::sqrt(sum) * max
    }

    /// Returns `self` divided by its magnitude.
    ///
    /// If `self` is a zero vector, returns an unchanged copy.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut res = self.clone();
        res.normalize();
        res
    }

    /// Divides `self` by its magnitude in place.
    ///
    /// If `self` is a zero vector, leaves it unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let mag = self.magnitude();
        if mag != 0.0 {
            self.apply_scalar(Op::Div, mag);
        }
        self
    }

    /// Clamps every component of `self` to `-max..=max` in place.
    ///
    /// The sign of `max` is ignored. If `max` is NaN, leaves `self`
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::math::Vector;
    ///
    /// let mut v = Vector::from([-7.0, 0.5, 3.0]);
    /// v.limit(2.0);
    /// assert_eq!(v.as_slice(), &[-2.0, 0.5, 2.0]);
    /// ```
    pub fn limit(&mut self, max: f64) -> &mut Self {
        use crate::math::float::f64;
        let max = f64::abs(max);
        for a in &mut self.0 {
            if *a > max {
                *a = max;
            } else if *a < -max {
                *a = -max;
            }
        }
        self
    }

    /// Returns a copy of `self` with every component clamped to `-max..=max`.
    #[must_use]
    pub fn limited(&self, max: f64) -> Self {
        let mut res = self.clone();
        res.limit(max);
        res
    }

    /// Maps every component of `self` linearly from the range `from` to the
    /// range `to` in place.
    ///
    /// Values outside `from` are extrapolated. An empty `from` range
    /// divides by zero with IEEE 754 semantics.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::math::Vector;
    ///
    /// let mut v = Vector::from([0.0, 5.0, 10.0]);
    /// v.map_to_range(0.0..10.0, -1.0..1.0);
    /// assert_eq!(v.as_slice(), &[-1.0, 0.0, 1.0]);
    /// ```
    pub fn map_to_range(
        &mut self,
        from: Range<f64>,
        to: Range<f64>,
    ) -> &mut Self {
        let (in_len, out_len) = (from.end - from.start, to.end - to.start);
        for a in &mut self.0 {
            *a = to.start + (*a - from.start) / in_len * out_len;
        }
        self
    }

    /// Returns a copy of `self` with every component mapped linearly from
    /// the range `from` to the range `to`.
    #[must_use]
    pub fn mapped_to_range(&self, from: Range<f64>, to: Range<f64>) -> Self {
        let mut res = self.clone();
        res.map_to_range(from, to);
        res
    }

    /// Returns the squared Euclidean distance between `self` and `other`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn distance_squared<'a>(
        &self,
        other: impl Into<Input<'a>>,
    ) -> Result<f64> {
        let other = self.coerce(other)?;
        Ok(zip(other, &self.0)
            .map(|(o, s)| (o - s) * (o - s))
            .sum())
    }

    /// Returns the Euclidean distance between `self` and `other`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn distance<'a>(&self, other: impl Into<Input<'a>>) -> Result<f64> {
        use crate::math::float::f64;
        self.distance_squared(other).map(f64::sqrt)
    }

    /// Returns the dot product of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::math::Vector;
    ///
    /// let v = Vector::from([15.0, 75.0, 93.0]);
    /// let w = Vector::from([9.0, 31.0, 52.0]);
    /// assert_eq!(v.dot(&w), Ok(7296.0));
    /// ```
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn dot<'a>(&self, other: impl Into<Input<'a>>) -> Result<f64> {
        let other = self.coerce(other)?;
        Ok(zip(other, &self.0).map(|(o, s)| o * s).sum())
    }

    /// Returns the heading angle of a 2D vector in radians, computed as
    /// `atan2(x, y)`.
    ///
    /// Note the argument order: the angle is measured from the positive `y`
    /// axis toward the positive `x` axis.
    ///
    /// # Errors
    /// [`Error::UnsupportedOperation`] if `self` is not two-dimensional.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::{assert_approx_eq, math::Vector};
    ///
    /// let v = Vector::from([10.0, 5.0]);
    /// assert_approx_eq!(v.heading_angle().unwrap(), 1.1071487177940904);
    /// ```
    #[cfg(feature = "fp")]
    pub fn heading_angle(&self) -> Result<f64> {
        use crate::math::float::f64;
        match self.0[..] {
            [x, y] => Ok(f64::atan2(x, y)),
            _ => {
                debug!("heading angle requested for {self:?}");
                Err(UnsupportedOperation {
                    op: "heading_angle",
                    dim: self.dim(),
                })
            }
        }
    }

    /// Returns the heading of a 2D vector as an [`Angle`].
    ///
    /// # Errors
    /// [`Error::UnsupportedOperation`] if `self` is not two-dimensional.
    #[cfg(feature = "fp")]
    pub fn heading(&self) -> Result<Angle> {
        self.heading_angle().map(rads)
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// If `t` = 0, returns `self`; if `t` = 1, returns `other`. Otherwise
    /// returns `self + t * (other - self)`, extrapolating if `t` is outside
    /// `[0, 1]`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn lerp<'a>(
        &self,
        other: impl Into<Input<'a>>,
        t: f64,
    ) -> Result<Self> {
        let other = self.coerce(other)?;
        Ok(zip(&self.0, other).map(|(a, b)| a + t * (b - a)).collect())
    }

    /// Returns the point halfway between `self` and `other`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn midpoint<'a>(&self, other: impl Into<Input<'a>>) -> Result<Self> {
        self.lerp(other, 0.5)
    }

    /// Applies `op` with the same scalar on the right to every component.
    pub(crate) fn apply_scalar(&mut self, op: Op, s: f64) {
        for a in &mut self.0 {
            *a = op.apply(*a, s);
        }
    }

    /// Coerces `rhs` to the dimension of `self`.
    fn coerce<'a>(&self, rhs: impl Into<Input<'a>>) -> Result<Vec<f64>> {
        rhs.into()
            .to_values(Some(self.dim()))
            .inspect_err(|e| debug!("rejected operand for {self:?}: {e}"))
    }
}

/// Named axis accessors, each a bounds-checked view of a fixed index.
macro_rules! impl_axes {
    ($($axis:ident: $get:ident, $set:ident;)*) => {
        impl Vector {
            $(
                #[doc = concat!(
                    "Returns the `", stringify!($get), "` component of `self`."
                )]
                ///
                /// # Errors
                /// [`Error::AxisOutOfRange`] if `self` has too few dimensions.
                #[inline]
                pub fn $get(&self) -> Result<f64> {
                    self.get(Axis::$axis)
                }
                #[doc = concat!(
                    "Sets the `", stringify!($get), "` component of `self`."
                )]
                ///
                /// # Errors
                /// [`Error::AxisOutOfRange`] if `self` has too few dimensions.
                #[inline]
                pub fn $set(&mut self, value: f64) -> Result<()> {
                    self.set_axis(Axis::$axis, value)
                }
            )*
        }
    };
}

impl_axes! {
    X: x, set_x;
    Y: y, set_y;
    Z: z, set_z;
    W: w, set_w;
    R: r, set_r;
    G: g, set_g;
    B: b, set_b;
    A: a, set_a;
}

//
// Foreign trait impls
//

impl Debug for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec<{}>{:?}", self.dim(), self.0)
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vector{}D {:?}", self.dim(), self.0)
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Vec<f64>> for Vector {
    #[inline]
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    #[inline]
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    #[inline]
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(it: I) -> Self {
        Self(it.into_iter().collect())
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;
    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Vector {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

impl From<f64> for Input<'_> {
    #[inline]
    fn from(s: f64) -> Self {
        Self::Scalar(s)
    }
}

impl<'a> From<&'a [f64]> for Input<'a> {
    #[inline]
    fn from(seq: &'a [f64]) -> Self {
        Self::Sequence(seq)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Input<'a> {
    #[inline]
    fn from(seq: &'a [f64; N]) -> Self {
        Self::Sequence(seq)
    }
}

impl<'a> From<&'a Vec<f64>> for Input<'a> {
    #[inline]
    fn from(seq: &'a Vec<f64>) -> Self {
        Self::Sequence(seq)
    }
}

impl<'a> From<&'a Vector> for Input<'a> {
    #[inline]
    fn from(v: &'a Vector) -> Self {
        Self::Vector(v)
    }
}

impl AddAssign<f64> for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        self.apply_scalar(Op::Add, rhs);
    }
}
impl SubAssign<f64> for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        self.apply_scalar(Op::Sub, rhs);
    }
}
impl MulAssign<f64> for Vector {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.apply_scalar(Op::Mul, rhs);
    }
}
impl DivAssign<f64> for Vector {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.apply_scalar(Op::Div, rhs);
    }
}

impl_op!(Add::add, Vector, f64, +=);
impl_op!(Sub::sub, Vector, f64, -=);
impl_op!(Mul::mul, Vector, f64, *=);
impl_op!(Div::div, Vector, f64, /=);

impl Neg for Vector {
    type Output = Self;
    fn neg(mut self) -> Self {
        self.0.iter_mut().for_each(|a| *a = -*a);
        self
    }
}

impl Neg for &Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        -self.clone()
    }
}
