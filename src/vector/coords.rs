//! Cartesian and spherical field vectors and the mapping between them.
//!
//! Spherical convention: `theta` is the polar angle from +z in degrees,
//! `r` the magnitude in Tesla, `phi` the azimuth from +x towards +y in
//! degrees. Angles that are undefined collapse to 0: at the origin both
//! `theta` and `phi` are 0, and on the z axis `phi` is 0.

use core::ops::{Index, IndexMut};

use crate::axis::Axis;
use crate::config::units::Degrees;

/// Field vector in cartesian components, Tesla.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartesianVector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

/// Field vector in spherical components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphericalVector {
    /// Polar angle from +z, degrees in `[0, 180]`.
    pub theta: f64,
    /// Magnitude, Tesla, `>= 0`.
    pub r: f64,
    /// Azimuth from +x towards +y, degrees in `[0, 360)`.
    pub phi: f64,
}

/// One spherical coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SphericalComponent {
    /// Polar angle.
    Theta,
    /// Magnitude.
    R,
    /// Azimuth.
    Phi,
}

impl CartesianVector {
    /// The zero field.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create from components in axis order.
    #[inline]
    pub const fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    /// Components in axis order.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Whether every component is within `tolerance` of `other`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| libm::fabs(self[axis] - other[axis]) <= tolerance)
    }

    /// Convert to spherical coordinates.
    #[inline]
    pub fn to_spherical(self) -> SphericalVector {
        to_spherical(self)
    }

    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Replace one spherical component of this vector.
    ///
    /// Works on the cartesian components directly so that a component the
    /// change does not touch keeps its exact value: a new `r` scales the
    /// vector, a new `phi` rotates the xy projection and leaves z alone, a new
    /// `theta` sets z and rescales the xy projection along its azimuth.
    /// Degenerate directions follow the `theta = 0`, `phi = 0` convention.
    pub fn with_spherical(self, component: SphericalComponent, value: f64) -> Self {
        let r = self.magnitude();
        let rho = libm::sqrt(self.x * self.x + self.y * self.y);

        match component {
            SphericalComponent::R => {
                if r == 0.0 {
                    Self::new(0.0, 0.0, value)
                } else {
                    let k = value / r;
                    Self::new(self.x * k, self.y * k, self.z * k)
                }
            }
            SphericalComponent::Phi => {
                let phi = Degrees(value).to_radians();
                Self::new(rho * libm::cos(phi), rho * libm::sin(phi), self.z)
            }
            SphericalComponent::Theta => {
                let theta = Degrees(value).to_radians();
                let new_rho = r * libm::sin(theta);
                let (x, y) = if rho == 0.0 {
                    (new_rho, 0.0)
                } else {
                    let k = new_rho / rho;
                    (self.x * k, self.y * k)
                };
                Self::new(x, y, r * libm::cos(theta))
            }
        }
    }

    /// Replace every component within `tolerance` of `reference` by the
    /// reference value.
    pub fn snapped_to(mut self, reference: &Self, tolerance: f64) -> Self {
        for axis in Axis::ALL {
            if libm::fabs(self[axis] - reference[axis]) <= tolerance {
                self[axis] = reference[axis];
            }
        }
        self
    }
}

impl Index<Axis> for CartesianVector {
    type Output = f64;

    fn index(&self, axis: Axis) -> &f64 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl IndexMut<Axis> for CartesianVector {
    fn index_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl SphericalVector {
    /// Create a new vector.
    #[inline]
    pub const fn new(theta: f64, r: f64, phi: f64) -> Self {
        Self { theta, r, phi }
    }

    /// Read one component.
    #[inline]
    pub fn get(&self, component: SphericalComponent) -> f64 {
        match component {
            SphericalComponent::Theta => self.theta,
            SphericalComponent::R => self.r,
            SphericalComponent::Phi => self.phi,
        }
    }

    /// Convert to cartesian coordinates.
    #[inline]
    pub fn to_cartesian(self) -> CartesianVector {
        to_cartesian(self)
    }
}

/// Map a cartesian vector to spherical coordinates.
///
/// Never returns NaN for finite input.
pub fn to_spherical(v: CartesianVector) -> SphericalVector {
    let r = v.magnitude();
    if r == 0.0 {
        return SphericalVector::new(0.0, 0.0, 0.0);
    }

    // Rounding can push |z| / r a hair past 1.
    let cos_theta = (v.z / r).clamp(-1.0, 1.0);
    let theta = Degrees::from_radians(libm::acos(cos_theta)).0;

    let phi = if v.x == 0.0 && v.y == 0.0 {
        0.0
    } else {
        Degrees::from_radians(libm::atan2(v.y, v.x)).normalized().0
    };

    SphericalVector::new(theta, r, phi)
}

/// Map a spherical vector to cartesian coordinates.
pub fn to_cartesian(s: SphericalVector) -> CartesianVector {
    let theta = Degrees(s.theta).to_radians();
    let phi = Degrees(s.phi).to_radians();
    let sin_theta = libm::sin(theta);

    CartesianVector::new(
        s.r * sin_theta * libm::cos(phi),
        s.r * sin_theta * libm::sin(phi),
        s.r * libm::cos(theta),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_origin_is_canonical() {
        let s = to_spherical(CartesianVector::ZERO);
        assert_eq!(s, SphericalVector::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_z_axis() {
        let up = to_spherical(CartesianVector::new(0.0, 0.0, 1.0));
        assert!((up.theta).abs() < EPS);
        assert_eq!(up.phi, 0.0);
        assert!((up.r - 1.0).abs() < EPS);

        let down = to_spherical(CartesianVector::new(0.0, 0.0, -2.0));
        assert!((down.theta - 180.0).abs() < EPS);
        assert_eq!(down.phi, 0.0);
        assert!((down.r - 2.0).abs() < EPS);
    }

    #[test]
    fn test_phi_wraps_into_positive_range() {
        let s = to_spherical(CartesianVector::new(0.0, -1.0, 0.0));
        assert!((s.phi - 270.0).abs() < EPS);
        assert!((s.theta - 90.0).abs() < EPS);

        let s = to_spherical(CartesianVector::new(-1.0, 0.0, 0.0));
        assert!((s.phi - 180.0).abs() < EPS);
    }

    #[test]
    fn test_to_cartesian_equator() {
        let v = to_cartesian(SphericalVector::new(90.0, 2.0, 90.0));
        assert!(v.approx_eq(&CartesianVector::new(0.0, 2.0, 0.0), EPS));
    }

    #[test]
    fn test_get_component() {
        let s = SphericalVector::new(30.0, 2.5, 45.0);
        assert_eq!(s.get(SphericalComponent::Theta), 30.0);
        assert_eq!(s.get(SphericalComponent::R), 2.5);
        assert_eq!(s.get(SphericalComponent::Phi), 45.0);
    }

    #[test]
    fn test_with_spherical_phi_keeps_z() {
        let v = CartesianVector::new(0.01, 0.3, 0.037);
        let rotated = v.with_spherical(SphericalComponent::Phi, 90.0);

        assert_eq!(rotated.z, v.z);
        assert!((rotated.to_spherical().phi - 90.0).abs() < EPS);
        assert!((rotated.magnitude() - v.magnitude()).abs() < EPS);
    }

    #[test]
    fn test_with_spherical_r_keeps_zero_components() {
        let v = CartesianVector::new(0.0, 3.0, 4.0).with_spherical(SphericalComponent::R, 10.0);
        assert_eq!(v, CartesianVector::new(0.0, 6.0, 8.0));

        let from_origin = CartesianVector::ZERO.with_spherical(SphericalComponent::R, 0.5);
        assert_eq!(from_origin, CartesianVector::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_with_spherical_theta_keeps_azimuth() {
        let v = CartesianVector::new(0.0, 1.0, 1.0);
        let tilted = v.with_spherical(SphericalComponent::Theta, 90.0);

        assert_eq!(tilted.x, 0.0);
        assert!((tilted.y - v.magnitude()).abs() < EPS);
        assert!(tilted.z.abs() < EPS);

        let from_pole = CartesianVector::new(0.0, 0.0, 2.0)
            .with_spherical(SphericalComponent::Theta, 90.0);
        assert!(from_pole.approx_eq(&CartesianVector::new(2.0, 0.0, 0.0), EPS));
        assert_eq!(from_pole.y, 0.0);
    }

    #[test]
    fn test_snapped_to() {
        let measured = CartesianVector::new(0.3, -0.4, 1.2);
        let target = CartesianVector::new(0.3 + 1e-15, -0.5, 1.2 - 1e-15);

        let snapped = target.snapped_to(&measured, 1e-12);
        assert_eq!(snapped, CartesianVector::new(0.3, -0.5, 1.2));
    }

    #[test]
    fn test_axis_indexing() {
        let mut v = CartesianVector::new(1.0, 2.0, 3.0);
        v[Axis::Y] = 5.0;
        assert_eq!(v.to_array(), [1.0, 5.0, 3.0]);
        assert_eq!(v[Axis::Z], 3.0);
    }
}
