use nvector_core::prelude::*;
use proptest::collection::vec;
use proptest::prelude::*;

const OPS: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

prop_compose! {
    fn vector(dim: usize)(values in vec(-1e3..1e3, dim)) -> Vector {
        values.into()
    }
}

prop_compose! {
    fn vector_pair(max_dim: usize)(dim in 1..=max_dim)(
        u in vector(dim),
        v in vector(dim),
    ) -> (Vector, Vector) {
        (u, v)
    }
}

proptest! {
    #[test]
    fn combine_is_componentwise((u, v) in vector_pair(8)) {
        for op in OPS {
            let w = u.combine(&v, op).unwrap();
            prop_assert_eq!(w.dim(), u.dim());
            for i in 0..u.dim() {
                let expected = op.apply(u[i], v[i]);
                prop_assert_eq!(w[i].to_bits(), expected.to_bits());
            }
        }
    }

    #[test]
    fn in_place_matches_allocating((u, v) in vector_pair(8)) {
        for op in OPS {
            let mut w = u.clone();
            w.combine_assign(&v, op).unwrap();
            prop_assert_eq!(Ok(w), u.combine(&v, op));
        }
    }

    #[test]
    fn add_then_sub_is_identity((u, v) in vector_pair(8)) {
        let w = u.add(&v).unwrap().sub(&v).unwrap();
        prop_assert!(w.approx_eq(&u), "{w:?} != {u:?}");
    }

    #[test]
    fn normalized_has_unit_magnitude(u in vector(4)) {
        prop_assume!(u.magnitude() > 1e-6);
        let m = u.normalized().magnitude();
        prop_assert!(m.approx_eq(&1.0), "magnitude was {m}");
    }

    #[test]
    fn normalized_has_unit_magnitude_at_any_scale(
        u in vector(4),
        scale in prop::sample::select(vec![1e-300, 1e-160, 1e160, 1e300]),
    ) {
        prop_assume!(u.magnitude() > 1e-6);
        let v = &u * scale;
        let m = v.normalized().magnitude();
        prop_assert!(m.approx_eq(&1.0), "magnitude was {m}");
    }

    #[test]
    fn distance_is_symmetric((u, v) in vector_pair(8)) {
        prop_assert_eq!(u.distance_squared(&v), v.distance_squared(&u));
        prop_assert!(u.distance_squared(&v).unwrap() >= 0.0);
    }

    #[test]
    fn dimension_mismatch_is_rejected(
        u in vector(3),
        v in (1..8usize).prop_filter("dim != 3", |&d| d != 3)
            .prop_flat_map(vector),
    ) {
        let mut w = u.clone();
        let err = Error::DimensionMismatch { expected: 3, actual: v.dim() };
        for op in OPS {
            prop_assert_eq!(u.combine(&v, op), Err(err.clone()));
            prop_assert!(w.combine_assign(&v, op).is_err());
        }
        prop_assert_eq!(w, u);
    }

    #[test]
    fn hex_round_trip(bytes in any::<[u8; 3]>()) {
        let [r, g, b] = bytes;
        let c = rgb(r, g, b);
        prop_assert_eq!(Color::from_hex(&c.as_hex()), Ok(c.clone()));
        prop_assert_eq!(c.as_hex().parse::<Color>(), Ok(c));
    }

    #[test]
    fn lerp_hits_endpoints((u, v) in vector_pair(8)) {
        prop_assert_eq!(u.lerp(&v, 0.0), Ok(u.clone()));
        let end = u.lerp(&v, 1.0).unwrap();
        prop_assert!(end.approx_eq_eps(&v, &1e-9), "{end:?} != {v:?}");
    }
}
