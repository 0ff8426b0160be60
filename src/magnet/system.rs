//! Vector magnet facade.
//!
//! Exposes the derived spherical parameters on top of the ramp coordinator.

use embedded_hal::delay::DelayNs;

use crate::axis::AxisController;
use crate::config::RampConfig;
use crate::error::{Error, RampError, Result};
use crate::vector::{CartesianVector, SafeRegion, SphericalComponent, SphericalVector, Unbounded};

use super::builder::VectorMagnetBuilder;
use super::cancel::CancelToken;
use super::coordinator::RampCoordinator;
use super::mode::RampMode;
use super::parameter::DerivedParameter;
use super::state::VectorState;

// Relative to the field magnitude. Staged components closer than this to the
// measured value are taken as unchanged.
const SNAP_TOLERANCE: f64 = 1e-12;

/// A three-axis magnet with spherical set/get semantics.
///
/// `set` on a derived parameter is one blocking operation: the new
/// component is combined with the two other measured components, the
/// resulting cartesian target is checked against the safe region and staged,
/// the ramp runs in the parameter's mode, and the freshly measured value is
/// returned.
///
/// # Example
///
/// ```rust,ignore
/// use vector_magnet::{DerivedParameter, VectorMagnet};
///
/// let mut magnet = VectorMagnet::builder()
///     .axes([x_supply, y_supply, z_supply])
///     .delay(delay)
///     .build()?;
///
/// let r = magnet.set(DerivedParameter::RSafeRamp, 0.5)?;
/// ```
pub struct VectorMagnet<A, D, R = Unbounded> {
    coordinator: RampCoordinator<A, D>,
    region: R,
    name: heapless::String<32>,
}

impl VectorMagnet<(), (), Unbounded> {
    /// Start building a magnet.
    pub fn builder<A, D>() -> VectorMagnetBuilder<A, D, Unbounded> {
        VectorMagnetBuilder::new()
    }
}

impl<A, D, R> VectorMagnet<A, D, R> {
    pub(crate) fn new(
        coordinator: RampCoordinator<A, D>,
        region: R,
        name: heapless::String<32>,
    ) -> Self {
        Self {
            coordinator,
            region,
            name,
        }
    }

    /// Instrument name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Safe region used to check staged targets.
    #[inline]
    pub fn region(&self) -> &R {
        &self.region
    }

    /// Ramp settings in use.
    #[inline]
    pub fn ramp_config(&self) -> &RampConfig {
        self.coordinator.config()
    }

    /// Borrow the coordinator.
    #[inline]
    pub fn coordinator(&self) -> &RampCoordinator<A, D> {
        &self.coordinator
    }

    /// Mutably borrow the coordinator.
    #[inline]
    pub fn coordinator_mut(&mut self) -> &mut RampCoordinator<A, D> {
        &mut self.coordinator
    }

    /// Borrow the axis controllers.
    #[inline]
    pub fn state(&self) -> &VectorState<A> {
        self.coordinator.state()
    }

    /// Release the controllers and delay provider.
    pub fn release(self) -> (VectorState<A>, D) {
        self.coordinator.release()
    }
}

impl<A, D, R> VectorMagnet<A, D, R>
where
    A: AxisController,
    D: DelayNs,
    R: SafeRegion,
{
    /// Measured value of a derived parameter.
    pub fn get(&mut self, param: DerivedParameter) -> Result<f64, A::Error> {
        Ok(self.measured_spherical()?.get(param.component()))
    }

    /// Set a derived parameter, ramp, and return the measured value.
    ///
    /// The other two spherical components keep their measured values. Axes
    /// the change does not affect are staged at exactly their measured value,
    /// so they never count as moving.
    ///
    /// # Errors
    ///
    /// - [`RampError::InvalidTarget`] for a non-finite value or a negative
    ///   magnitude; nothing is read or staged.
    /// - [`RampError::OutsideSafeRegion`] if the resulting target is not
    ///   allowed; nothing is staged.
    /// - Any error of [`RampCoordinator::ramp`].
    pub fn set(&mut self, param: DerivedParameter, value: f64) -> Result<f64, A::Error> {
        let component = param.component();
        if !value.is_finite() || (component == SphericalComponent::R && value < 0.0) {
            warn!("{}: rejected value {}", param, value);
            return Err(Error::Ramp(RampError::InvalidTarget(value)));
        }

        info!("{}: set {}", param, value);
        let measured = self.measured_cartesian()?;
        let target = measured.with_spherical(component, value);
        let tolerance = SNAP_TOLERANCE * libm::fmax(measured.magnitude(), target.magnitude());

        self.set_target_cartesian(target.snapped_to(&measured, tolerance))?;
        self.coordinator.ramp(param.mode())?;
        self.get(param)
    }

    /// Stage a cartesian target after checking it against the safe region.
    ///
    /// Does not start a ramp.
    pub fn set_target_cartesian(&mut self, target: CartesianVector) -> Result<(), A::Error> {
        if !target.is_finite() {
            let bad = [target.x, target.y, target.z]
                .into_iter()
                .find(|c| !c.is_finite())
                .unwrap_or(f64::NAN);
            warn!("target component {} is not finite", bad);
            return Err(Error::Ramp(RampError::InvalidTarget(bad)));
        }

        if !self.region.contains(&target) {
            warn!(
                "target ({}, {}, {}) outside safe region",
                target.x,
                target.y,
                target.z
            );
            return Err(Error::Ramp(RampError::OutsideSafeRegion {
                x: target.x,
                y: target.y,
                z: target.z,
            }));
        }
        self.coordinator.state_mut().stage(target)
    }

    /// Stage a spherical target after checking it against the safe region.
    ///
    /// A negative `r` is rejected with [`RampError::InvalidTarget`].
    pub fn set_target_spherical(&mut self, target: SphericalVector) -> Result<(), A::Error> {
        if target.r < 0.0 {
            return Err(Error::Ramp(RampError::InvalidTarget(target.r)));
        }
        self.set_target_cartesian(target.to_cartesian())
    }

    /// Ramp the staged targets. See [`RampCoordinator::ramp`].
    pub fn ramp(&mut self, mode: RampMode) -> Result<(), A::Error> {
        self.coordinator.ramp(mode)
    }

    /// Ramp with the mode given by name. See [`RampCoordinator::ramp_named`].
    pub fn ramp_named(&mut self, mode: &str) -> Result<(), A::Error> {
        self.coordinator.ramp_named(mode)
    }

    /// Ramp with a cancellation token. See [`RampCoordinator::ramp_with_cancel`].
    pub fn ramp_with_cancel(&mut self, mode: RampMode, cancel: &CancelToken) -> Result<(), A::Error> {
        self.coordinator.ramp_with_cancel(mode, cancel)
    }

    /// Measured field, cartesian.
    pub fn measured_cartesian(&mut self) -> Result<CartesianVector, A::Error> {
        self.coordinator.state_mut().measured()
    }

    /// Staged target, cartesian.
    pub fn target_cartesian(&mut self) -> Result<CartesianVector, A::Error> {
        self.coordinator.state_mut().target()
    }

    /// Measured field, spherical.
    pub fn measured_spherical(&mut self) -> Result<SphericalVector, A::Error> {
        Ok(self.measured_cartesian()?.to_spherical())
    }

    /// Staged target, spherical.
    pub fn target_spherical(&mut self) -> Result<SphericalVector, A::Error> {
        Ok(self.target_cartesian()?.to_spherical())
    }

    /// Whether any axis is still ramping.
    pub fn is_ramping(&mut self) -> Result<bool, A::Error> {
        self.coordinator.state_mut().is_ramping()
    }

    /// Measured polar angle in degrees.
    pub fn theta_saferamp(&mut self) -> Result<f64, A::Error> {
        self.get(DerivedParameter::ThetaSafeRamp)
    }

    /// Set the polar angle in degrees with a safe ramp.
    pub fn set_theta_saferamp(&mut self, theta: f64) -> Result<f64, A::Error> {
        self.set(DerivedParameter::ThetaSafeRamp, theta)
    }

    /// Measured magnitude in Tesla.
    pub fn r_saferamp(&mut self) -> Result<f64, A::Error> {
        self.get(DerivedParameter::RSafeRamp)
    }

    /// Set the magnitude in Tesla with a safe ramp.
    pub fn set_r_saferamp(&mut self, r: f64) -> Result<f64, A::Error> {
        self.set(DerivedParameter::RSafeRamp, r)
    }

    /// Measured magnitude in Tesla.
    pub fn r_simulramp(&mut self) -> Result<f64, A::Error> {
        self.get(DerivedParameter::RSimulRamp)
    }

    /// Set the magnitude in Tesla, ramping all axes together.
    pub fn set_r_simulramp(&mut self, r: f64) -> Result<f64, A::Error> {
        self.set(DerivedParameter::RSimulRamp, r)
    }

    /// Measured azimuth in degrees.
    pub fn phi_saferamp(&mut self) -> Result<f64, A::Error> {
        self.get(DerivedParameter::PhiSafeRamp)
    }

    /// Set the azimuth in degrees with a safe ramp.
    pub fn set_phi_saferamp(&mut self, phi: f64) -> Result<f64, A::Error> {
        self.set(DerivedParameter::PhiSafeRamp, phi)
    }

    /// Measured azimuth in degrees.
    pub fn phi(&mut self) -> Result<f64, A::Error> {
        self.get(DerivedParameter::Phi)
    }

    /// Set the azimuth in degrees.
    pub fn set_phi(&mut self, phi: f64) -> Result<f64, A::Error> {
        self.set(DerivedParameter::Phi, phi)
    }
}
