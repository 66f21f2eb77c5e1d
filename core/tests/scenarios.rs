use nvector_core::assert_approx_eq;
use nvector_core::prelude::*;

#[test]
fn add_3d() {
    let v = Vector::from([5.0, 3.6, 1.0]);
    let w = Vector::from([5.0, 6.4, 9.0]);
    assert_approx_eq!(v.add(&w).unwrap(), [10.0, 10.0, 10.0]);
}

#[test]
fn normalize_3d() {
    let v = Vector::from([5.0, 324.0, 44.0]);
    assert_approx_eq!(
        v.normalized(),
        [0.01529, 0.99079, 0.13455],
        eps = 1e-4
    );
}

#[test]
fn magnitude_3d() {
    let v = Vector::from([5.0, 324.0, 44.0]);
    assert_approx_eq!(v.magnitude(), 327.0122, eps = 1e-6);
}

#[test]
fn dot_3d() {
    let v = Vector::from([15.0, 75.0, 93.0]);
    let w = Vector::from([9.0, 31.0, 52.0]);
    assert_eq!(v.dot(&w), Ok(7296.0));
}

#[cfg(feature = "fp")]
#[test]
fn heading_angle_2d() {
    let v = Vector::from([10.0, 5.0]);
    assert_approx_eq!(v.heading_angle().unwrap(), 1.10715, eps = 1e-5);
}

#[test]
fn dimension_mismatch() {
    let mut v = Vector::from([1.0, 2.0]);
    let w = Vector::from([1.0, 2.0, 3.0]);

    let err = v.add(&w).unwrap_err();
    assert_eq!(err, Error::DimensionMismatch { expected: 2, actual: 3 });
    assert_eq!(err.to_string(), "dimension mismatch: expected 2, got 3");

    assert!(v.add_assign(&w).is_err());
    assert_eq!(v, Vector::from([1.0, 2.0]));
}

#[test]
fn axis_out_of_range() {
    let v = Vector::from([1.0, 2.0]);
    let err = v.w().unwrap_err();
    assert_eq!(err, Error::AxisOutOfRange { axis: Axis::W, dim: 2 });
    assert_eq!(err.to_string(), "axis w out of range for a 2D vector");
}

#[test]
fn color_round_trip() {
    let c = Color::from_hex("#1E90FF").unwrap();
    assert_eq!(c, rgb(0x1E, 0x90, 0xFF));
    assert_eq!(c.as_hex(), "1E90FF");
    assert_eq!(c.to_string(), "Color R: 30, G: 144, B: 255");
}

#[test]
fn color_is_a_clamped_vector() {
    let c = Color::make(&Vector::from([-10.0, 128.6, 999.0])).unwrap();
    assert_eq!(c.channels(), [0, 128, 255]);

    let brighter = c.mul(2.0).unwrap();
    assert_eq!(brighter.channels(), [0, 255, 255]);

    let v = brighter.as_vector().sub(&[0.0, 0.5, 0.0]).unwrap();
    assert_eq!(v.as_slice(), &[0.0, 254.5, 255.0]);
}

#[test]
fn seeded_random_is_reproducible() {
    let mut a = Xorshift64::from_seed(1234);
    let mut b = Xorshift64::from_seed(1234);
    assert_eq!(
        Vector::random_unit(5, &mut a),
        Vector::random_unit(5, &mut b)
    );
    assert_eq!(Color::random(&mut a), Color::random(&mut b));
}

#[test]
fn interpolate_between_points() {
    let a = Vector::from([0.0, 0.0, 0.0]);
    let b = Vector::from([2.0, 4.0, -8.0]);
    let path: Vec<_> = [0.0, 0.25, 0.5, 1.0]
        .into_iter()
        .map(|t| linear_interpolate(&a, &b, t).unwrap())
        .collect();
    assert_eq!(path[1].as_slice(), &[0.5, 1.0, -2.0]);
    assert_eq!(path[2], a.midpoint(&b).unwrap());
    assert_eq!(path[3], b);
}
