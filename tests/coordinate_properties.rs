//! Property tests for the cartesian/spherical mapping.

use proptest::prelude::*;
use vector_magnet::{CartesianVector, SphericalVector};

const EPS: f64 = 1e-9;

fn component() -> impl Strategy<Value = f64> {
    -10.0f64..10.0
}

proptest! {
    #[test]
    fn cartesian_survives_round_trip(x in component(), y in component(), z in component()) {
        let v = CartesianVector::new(x, y, z);
        prop_assume!(v.magnitude() > 1e-6);

        let back = v.to_spherical().to_cartesian();
        prop_assert!(back.approx_eq(&v, EPS), "{:?} -> {:?}", v, back);
    }

    #[test]
    fn spherical_output_is_in_range(x in component(), y in component(), z in component()) {
        let s = CartesianVector::new(x, y, z).to_spherical();

        prop_assert!(!s.theta.is_nan() && !s.r.is_nan() && !s.phi.is_nan());
        prop_assert!(s.r >= 0.0);
        prop_assert!((0.0..=180.0).contains(&s.theta));
        prop_assert!((0.0..360.0).contains(&s.phi));
    }

    #[test]
    fn spherical_survives_round_trip(
        theta in 1.0f64..179.0,
        r in 0.01f64..10.0,
        phi in 0.0f64..359.0,
    ) {
        let s = SphericalVector::new(theta, r, phi);
        let back = s.to_cartesian().to_spherical();

        prop_assert!((back.theta - theta).abs() < EPS);
        prop_assert!((back.r - r).abs() < EPS);
        prop_assert!((back.phi - phi).abs() < EPS);
    }

    #[test]
    fn magnitude_matches_r(theta in 0.0f64..=180.0, r in 0.0f64..10.0, phi in -720.0f64..720.0) {
        let v = SphericalVector::new(theta, r, phi).to_cartesian();
        prop_assert!((v.magnitude() - r).abs() < EPS);
    }
}

#[test]
fn degenerate_points_have_zero_angles() {
    let origin = CartesianVector::ZERO.to_spherical();
    assert_eq!(origin, SphericalVector::new(0.0, 0.0, 0.0));

    let down = CartesianVector::new(0.0, 0.0, -3.0).to_spherical();
    assert_eq!(down.phi, 0.0);
    assert!((down.theta - 180.0).abs() < EPS);
    assert_eq!(down.r, 3.0);
}

#[test]
fn negative_azimuth_is_normalised() {
    let s = CartesianVector::new(0.0, -1.0, 0.0).to_spherical();
    assert!((s.phi - 270.0).abs() < EPS);
}
