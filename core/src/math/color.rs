//! RGB colors with clamped byte channels.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt::{self, Debug, Display, Formatter};
use core::str::FromStr;

use log::debug;

use crate::math::error::{Error::*, Error, Result};
use crate::math::rand::Xorshift64;
use crate::math::vec::{Input, Op, Vector};

//
// Types
//

/// An RGB color with three channels, each an integer in `0..=255`.
///
/// A `Color` is a three-dimensional [`Vector`] whose components are clamped
/// to the byte range and truncated toward zero whenever they are written.
/// Arithmetic follows the same coercion rules as `Vector`: the other operand
/// may be a color, a vector or sequence of length three, or a scalar.
#[derive(Clone, PartialEq)]
pub struct Color(Vector);

/// Returns a new color with `r`, `g`, and `b` channels.
pub fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color(Vector::from([r, g, b].map(f64::from)))
}

//
// Inherent impls
//

impl Color {
    /// The number of channels of a color.
    pub const DIM: usize = 3;

    /// Returns a black color.
    pub fn zero() -> Self {
        Self(Vector::zero(Self::DIM))
    }

    /// Returns a gray color with all three channels set to `v`, clamped.
    pub fn gray(v: f64) -> Self {
        Self::clamped(Vector::from_scalar(Self::DIM, v))
    }

    /// Returns a color made from `input`, with every channel clamped.
    ///
    /// Accepts the same shapes as [`Vector::make`] with a dimension of 3.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] or [`Error::DimensionMismatch`] if `input`
    /// cannot be made into three channels.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::math::{Color, rgb};
    ///
    /// assert_eq!(Color::make(&[300.0, -5.0, 12.7]), Ok(rgb(255, 0, 12)));
    /// ```
    pub fn make<'a>(input: impl Into<Input<'a>>) -> Result<Self> {
        Vector::make(Self::DIM, input).map(Self::clamped)
    }

    /// Parses a color from six hex digits, optionally prefixed by `#`.
    ///
    /// Digits are case-insensitive; the channels are in order red, green,
    /// blue.
    ///
    /// # Errors
    /// [`Error::InvalidFormat`] if `s` is not of the form `#RRGGBB` or
    /// `RRGGBB`.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::math::{Color, rgb};
    ///
    /// assert_eq!(Color::from_hex("#FF8000"), Ok(rgb(0xFF, 0x80, 0x00)));
    /// assert_eq!(Color::from_hex("0a0b0c"), Ok(rgb(0x0A, 0x0B, 0x0C)));
    /// assert!(Color::from_hex("#12345").is_err());
    /// ```
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let is_hex = digits.bytes().all(|b| b.is_ascii_hexdigit());
        if digits.len() != 6 || !is_hex {
            debug!("rejected hex color {s:?}");
            return Err(InvalidFormat(s.to_string()));
        }
        let [_, r, g, b] = u32::from_str_radix(digits, 16)?.to_be_bytes();
        Ok(rgb(r, g, b))
    }

    /// Returns a color from hue, saturation and value components.
    ///
    /// The hue `h` is in degrees and wraps around to `0..360`. Saturation `s`
    /// and value `v` are percentages, clamped to `0..=100`. Channels are
    /// rounded to the nearest integer.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::math::{Color, rgb};
    ///
    /// assert_eq!(Color::from_hsv(0.0, 100.0, 100.0), rgb(255, 0, 0));
    /// assert_eq!(Color::from_hsv(240.0, 100.0, 100.0), rgb(0, 0, 255));
    /// assert_eq!(Color::from_hsv(0.0, 0.0, 50.0), rgb(128, 128, 128));
    /// ```
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        use crate::math::float::f64;

        let h = f64::rem_euclid(h, 360.0) / 60.0;
        let s = s.clamp(0.0, 100.0) / 100.0;
        let v = v.clamp(0.0, 100.0) / 100.0;

        let c = v * s;
        let x = c * (1.0 - f64::abs(f64::rem_euclid(h, 2.0) - 1.0));
        let m = v - c;

        let [r, g, b] = match h as u32 {
            0 => [c, x, 0.0],
            1 => [x, c, 0.0],
            2 => [0.0, c, x],
            3 => [0.0, x, c],
            4 => [x, 0.0, c],
            _ => [c, 0.0, x],
        };
        Self::clamped([r, g, b].map(|ch| (ch + m) * 255.0 + 0.5).into())
    }

    /// Returns a color with each channel drawn uniformly from `0..=254`.
    pub fn random(rng: &mut Xorshift64) -> Self {
        let mut v = Vector::random_normal(Self::DIM, rng);
        v *= 255.0;
        Self::clamped(v)
    }

    /// Returns the red channel of `self`.
    #[inline]
    pub fn r(&self) -> u8 {
        self.0[0] as u8
    }
    /// Returns the green channel of `self`.
    #[inline]
    pub fn g(&self) -> u8 {
        self.0[1] as u8
    }
    /// Returns the blue channel of `self`.
    #[inline]
    pub fn b(&self) -> u8 {
        self.0[2] as u8
    }

    /// Sets the red channel of `self` to `val`, clamped.
    pub fn set_r(&mut self, val: f64) {
        self.0[0] = clamp_channel(val);
    }
    /// Sets the green channel of `self` to `val`, clamped.
    pub fn set_g(&mut self, val: f64) {
        self.0[1] = clamp_channel(val);
    }
    /// Sets the blue channel of `self` to `val`, clamped.
    pub fn set_b(&mut self, val: f64) {
        self.0[2] = clamp_channel(val);
    }

    /// Returns the channels of `self` as bytes.
    pub fn channels(&self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }

    /// Returns the channels of `self` as six uppercase hex digits, without
    /// a leading `#`.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::math::rgb;
    /// assert_eq!(rgb(255, 8, 0).as_hex(), "FF0800");
    /// ```
    pub fn as_hex(&self) -> String {
        let [r, g, b] = self.channels();
        format!("{r:02X}{g:02X}{b:02X}")
    }

    /// Returns the channels of `self` mapped linearly from `0..=255` to
    /// `0.0..=1.0`.
    pub fn to_unit(&self) -> Vector {
        &self.0 / 255.0
    }

    /// Sets every channel of `self` to zero.
    pub fn clear(&mut self) {
        *self = Self::zero();
    }

    /// Replaces the channels of `self` with `input`, clamped.
    ///
    /// # Errors
    /// As with [`Color::make`]. In case of an error, `self` is unchanged.
    pub fn set<'a>(&mut self, input: impl Into<Input<'a>>) -> Result<()> {
        *self = Self::make(input)?;
        Ok(())
    }

    /// Returns the channels of `self` as a vector.
    pub fn as_vector(&self) -> &Vector {
        &self.0
    }

    /// Returns the channels of `self` as a vector.
    pub fn into_vector(self) -> Vector {
        self.0
    }

    /// Returns the result of applying `op` to each pair of corresponding
    /// channels of `self` and `rhs`, clamped.
    ///
    /// Dividing by zero saturates a nonzero channel to 255 and sets a zero
    /// channel to zero.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `rhs` cannot be coerced to three
    /// channels.
    pub fn combine<'a>(
        &self,
        rhs: impl Into<Input<'a>>,
        op: Op,
    ) -> Result<Self> {
        self.0.combine(rhs, op).map(Self::clamped)
    }

    /// Applies `op` to each pair of corresponding channels of `self` and
    /// `rhs`, storing the clamped result in `self`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `rhs` cannot be coerced to three
    /// channels. In that case `self` is left unchanged.
    pub fn combine_assign<'a>(
        &mut self,
        rhs: impl Into<Input<'a>>,
        op: Op,
    ) -> Result<&mut Self> {
        self.0.combine_assign(rhs, op)?;
        self.clamp_channels();
        Ok(self)
    }

    /// Returns the channelwise sum of `self` and `rhs`, clamped.
    ///
    /// # Examples
    /// ```
    /// use nvector_core::math::rgb;
    ///
    /// let c = rgb(200, 100, 0).add(&rgb(100, 100, 100)).unwrap();
    /// assert_eq!(c, rgb(255, 200, 100));
    /// ```
    /// # Errors
    /// [`Error::DimensionMismatch`] if `rhs` has the wrong dimension.
    pub fn add<'a>(&self, rhs: impl Into<Input<'a>>) -> Result<Self> {
        self.combine(rhs, Op::Add)
    }
    /// Returns the channelwise difference of `self` and `rhs`, clamped.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `rhs` has the wrong dimension.
    pub fn sub<'a>(&self, rhs: impl Into<Input<'a>>) -> Result<Self> {
        self.combine(rhs, Op::Sub)
    }
    /// Returns the channelwise product of `self` and `rhs`, clamped.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `rhs` has the wrong dimension.
    pub fn mul<'a>(&self, rhs: impl Into<Input<'a>>) -> Result<Self> {
        self.combine(rhs, Op::Mul)
    }
    /// Returns the channelwise quotient of `self` and `rhs`, clamped.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `rhs` has the wrong dimension.
    pub fn div<'a>(&self, rhs: impl Into<Input<'a>>) -> Result<Self> {
        self.combine(rhs, Op::Div)
    }

    /// Adds `rhs` to `self` channelwise, clamping the result.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `rhs` has the wrong dimension.
    pub fn add_assign<'a>(
        &mut self,
        rhs: impl Into<Input<'a>>,
    ) -> Result<&mut Self> {
        self.combine_assign(rhs, Op::Add)
    }
    /// Subtracts `rhs` from `self` channelwise, clamping the result.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `rhs` has the wrong dimension.
    pub fn sub_assign<'a>(
        &mut self,
        rhs: impl Into<Input<'a>>,
    ) -> Result<&mut Self> {
        self.combine_assign(rhs, Op::Sub)
    }
    /// Multiplies `self` by `rhs` channelwise, clamping the result.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `rhs` has the wrong dimension.
    pub fn mul_assign<'a>(
        &mut self,
        rhs: impl Into<Input<'a>>,
    ) -> Result<&mut Self> {
        self.combine_assign(rhs, Op::Mul)
    }
    /// Divides `self` by `rhs` channelwise, clamping the result.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if `rhs` has the wrong dimension.
    pub fn div_assign<'a>(
        &mut self,
        rhs: impl Into<Input<'a>>,
    ) -> Result<&mut Self> {
        self.combine_assign(rhs, Op::Div)
    }

    fn clamped(v: Vector) -> Self {
        debug_assert_eq!(v.dim(), Self::DIM);
        let mut c = Self(v);
        c.clamp_channels();
        c
    }

    fn clamp_channels(&mut self) {
        self.0
            .as_mut_slice()
            .iter_mut()
            .for_each(|ch| *ch = clamp_channel(*ch));
    }
}

/// Clamps `val` to `0..=255` and truncates it toward zero. NaN maps to zero.
#[inline]
fn clamp_channel(val: f64) -> f64 {
    f64::from(val as u8)
}

//
// Foreign trait impls
//

impl Default for Color {
    /// Returns black.
    fn default() -> Self {
        Self::zero()
    }
}

impl Debug for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Color<Rgb>{:?}", self.channels())
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.channels();
        write!(f, "Color R: {r}, G: {g}, B: {b}")
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<Vector> for Color {
    type Error = Error;

    /// Converts a three-dimensional vector into a color, clamping each
    /// component.
    fn try_from(v: Vector) -> Result<Self> {
        if v.dim() != Self::DIM {
            return Err(DimensionMismatch {
                expected: Self::DIM,
                actual: v.dim(),
            });
        }
        Ok(Self::clamped(v))
    }
}

impl From<Color> for Vector {
    fn from(c: Color) -> Self {
        c.0
    }
}

impl<'a> From<&'a Color> for Input<'a> {
    #[inline]
    fn from(c: &'a Color) -> Self {
        Self::Vector(&c.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::math::error::Shape;

    use super::*;

    #[test]
    fn channels() {
        let c = rgb(0x11, 0x22, 0x33);
        assert_eq!(c.r(), 0x11);
        assert_eq!(c.g(), 0x22);
        assert_eq!(c.b(), 0x33);
        assert_eq!(c.channels(), [0x11, 0x22, 0x33]);
    }

    #[test]
    fn make_clamps_and_truncates() {
        assert_eq!(Color::make(&[-1.0, 127.9, 1e9]), Ok(rgb(0, 127, 255)));
        assert_eq!(Color::make(f64::NAN), Ok(Color::zero()));
        assert_eq!(Color::make(Input::Scalars(&[])), Ok(Color::zero()));
        assert_eq!(Color::gray(300.0), rgb(255, 255, 255));
    }

    #[test]
    fn make_invalid() {
        assert_eq!(
            Color::make(Input::Scalars(&[1.0, 2.0])),
            Err(InvalidArgument(Shape::Scalars(2)))
        );
        assert_eq!(
            Color::make(&Vector::from([1.0, 2.0])),
            Err(DimensionMismatch { expected: 3, actual: 2 })
        );
    }

    #[test]
    fn setters_clamp() {
        let mut c = Color::zero();
        c.set_r(256.0);
        c.set_g(-3.0);
        c.set_b(99.99);
        assert_eq!(c, rgb(255, 0, 99));
    }

    #[test]
    fn set_and_clear() {
        let mut c = Color::zero();
        c.set(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        assert_eq!(c, rgb(10, 20, 30));
        assert!(c.set(Input::Scalars(&[1.0, 2.0])).is_err());
        assert_eq!(c, rgb(10, 20, 30));
        c.clear();
        assert_eq!(c, Color::zero());
    }

    #[test]
    fn arithmetic_saturates() {
        let c = rgb(200, 100, 50);
        assert_eq!(c.add(100.0), Ok(rgb(255, 200, 150)));
        assert_eq!(c.sub(&rgb(250, 50, 0)), Ok(rgb(0, 50, 50)));
        assert_eq!(c.mul(&[2.0, 0.5, 0.25]), Ok(rgb(255, 50, 12)));
        assert_eq!(c.div(0.0), Ok(rgb(255, 255, 255)));
        assert_eq!(Color::zero().div(0.0), Ok(Color::zero()));
    }

    #[test]
    fn arithmetic_in_place() {
        let mut c = rgb(10, 20, 30);
        c.add_assign(250.0).unwrap().sub_assign(&[0.0, 10.0, 20.0]).unwrap();
        assert_eq!(c, rgb(255, 245, 235));
        c.div_assign(2.0).unwrap();
        assert_eq!(c, rgb(127, 122, 117));
        c.mul_assign(&rgb(0, 1, 2)).unwrap();
        assert_eq!(c, rgb(0, 122, 234));
    }

    #[test]
    fn arithmetic_mismatch() {
        let mut c = rgb(1, 2, 3);
        assert_eq!(
            c.add_assign(&[1.0, 2.0]).map(|c| c.clone()),
            Err(DimensionMismatch { expected: 3, actual: 2 })
        );
        assert_eq!(c, rgb(1, 2, 3));
    }

    #[test]
    fn hex() {
        assert_eq!(rgb(0xAB, 0x05, 0x00).as_hex(), "AB0500");
        assert_eq!(Color::from_hex("#ab0500"), Ok(rgb(0xAB, 0x05, 0x00)));
        assert_eq!("00ff7f".parse::<Color>(), Ok(rgb(0x00, 0xFF, 0x7F)));
    }

    #[test]
    fn invalid_hex() {
        for s in ["", "#", "12345", "#1234567", "#12345G", "##12345", "+12345"]
        {
            assert_eq!(
                Color::from_hex(s),
                Err(InvalidFormat(s.to_string())),
                "{s:?}"
            );
        }
    }

    #[test]
    fn hsv_primary_and_secondary() {
        let cases = [
            (0.0, rgb(255, 0, 0)),
            (60.0, rgb(255, 255, 0)),
            (120.0, rgb(0, 255, 0)),
            (180.0, rgb(0, 255, 255)),
            (240.0, rgb(0, 0, 255)),
            (300.0, rgb(255, 0, 255)),
            (360.0, rgb(255, 0, 0)),
            (-120.0, rgb(0, 0, 255)),
        ];
        for (h, c) in cases {
            assert_eq!(Color::from_hsv(h, 100.0, 100.0), c, "hue {h}");
        }
    }

    #[test]
    fn hsv_intermediate() {
        assert_eq!(Color::from_hsv(30.0, 100.0, 100.0), rgb(255, 128, 0));
        assert_eq!(Color::from_hsv(0.0, 0.0, 100.0), rgb(255, 255, 255));
        assert_eq!(Color::from_hsv(0.0, 0.0, 0.0), rgb(0, 0, 0));
        assert_eq!(Color::from_hsv(210.0, 50.0, 80.0), rgb(102, 153, 204));
        // Out-of-range saturation and value are clamped
        assert_eq!(Color::from_hsv(0.0, 200.0, 150.0), rgb(255, 0, 0));
    }

    #[test]
    fn to_unit() {
        let v = rgb(255, 0, 51).to_unit();
        assert_eq!(v, Vector::from([1.0, 0.0, 0.2]));
    }

    #[test]
    fn random_is_clamped() {
        let rng = &mut Xorshift64::default();
        for _ in 0..100 {
            let c = Color::random(rng);
            let v = c.as_vector();
            assert!(v.iter().all(|&ch| ch == clamp_channel(ch)), "{c:?}");
        }
    }

    #[test]
    fn try_from_vector() {
        let v = Vector::from([1.5, 256.0, -1.0]);
        assert_eq!(Color::try_from(v), Ok(rgb(1, 255, 0)));
        assert_eq!(
            Color::try_from(Vector::zero(4)),
            Err(DimensionMismatch { expected: 3, actual: 4 })
        );
        assert_eq!(Vector::from(rgb(1, 2, 3)), Vector::from([1.0, 2.0, 3.0]));
    }

    #[test]
    fn fmt() {
        let c = rgb(255, 0, 16);
        assert_eq!(format!("{c}"), "Color R: 255, G: 0, B: 16");
        assert_eq!(format!("{c:?}"), "Color<Rgb>[255, 0, 16]");
    }
}
