//! Axis controller interface.
//!
//! Each field axis is driven by an independent power supply. This crate does not
//! talk to the hardware itself; it drives whatever implements [`AxisController`].

/// Ramp status reported by an axis controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampStatus {
    /// The supply is moving towards its target.
    Ramping,
    /// The supply is holding its output.
    Holding,
}

impl RampStatus {
    /// Whether the axis is still moving.
    #[inline]
    pub fn is_ramping(self) -> bool {
        self == RampStatus::Ramping
    }
}

/// A single power-supply axis.
///
/// All methods take `&mut self` because every call is device I/O, even the
/// reads. Values are in Tesla and Tesla per minute.
pub trait AxisController {
    /// Transport or device error. Passed through to the caller unmodified.
    type Error: core::fmt::Debug;

    /// Measured field on this axis.
    fn measured(&mut self) -> Result<f64, Self::Error>;

    /// Currently staged target.
    fn target(&mut self) -> Result<f64, Self::Error>;

    /// Stage a new target without starting a ramp.
    fn set_target(&mut self, value: f64) -> Result<(), Self::Error>;

    /// Ramp rate in Tesla per minute.
    fn ramp_rate(&mut self) -> Result<f64, Self::Error>;

    /// Start ramping to the staged target. Must not block.
    fn ramp_to_target(&mut self) -> Result<(), Self::Error>;

    /// Current ramp status.
    fn ramp_status(&mut self) -> Result<RampStatus, Self::Error>;

    /// Ramp to the staged target and block until the axis holds, for devices
    /// that provide their own safe ramp.
    ///
    /// Returns `None` when unsupported, the default. A safe ramp then starts
    /// the axis with [`ramp_to_target`](Self::ramp_to_target) and polls
    /// [`ramp_status`](Self::ramp_status) itself.
    fn ramp_safely(&mut self) -> Option<Result<(), Self::Error>> {
        None
    }
}

impl<T: AxisController + ?Sized> AxisController for &mut T {
    type Error = T::Error;

    fn measured(&mut self) -> Result<f64, Self::Error> {
        (**self).measured()
    }

    fn target(&mut self) -> Result<f64, Self::Error> {
        (**self).target()
    }

    fn set_target(&mut self, value: f64) -> Result<(), Self::Error> {
        (**self).set_target(value)
    }

    fn ramp_rate(&mut self) -> Result<f64, Self::Error> {
        (**self).ramp_rate()
    }

    fn ramp_to_target(&mut self) -> Result<(), Self::Error> {
        (**self).ramp_to_target()
    }

    fn ramp_status(&mut self) -> Result<RampStatus, Self::Error> {
        (**self).ramp_status()
    }

    fn ramp_safely(&mut self) -> Option<Result<(), Self::Error>> {
        (**self).ramp_safely()
    }
}

#[cfg(feature = "alloc")]
impl<T: AxisController + ?Sized> AxisController for alloc::boxed::Box<T> {
    type Error = T::Error;

    fn measured(&mut self) -> Result<f64, Self::Error> {
        (**self).measured()
    }

    fn target(&mut self) -> Result<f64, Self::Error> {
        (**self).target()
    }

    fn set_target(&mut self, value: f64) -> Result<(), Self::Error> {
        (**self).set_target(value)
    }

    fn ramp_rate(&mut self) -> Result<f64, Self::Error> {
        (**self).ramp_rate()
    }

    fn ramp_to_target(&mut self) -> Result<(), Self::Error> {
        (**self).ramp_to_target()
    }

    fn ramp_status(&mut self) -> Result<RampStatus, Self::Error> {
        (**self).ramp_status()
    }

    fn ramp_safely(&mut self) -> Option<Result<(), Self::Error>> {
        (**self).ramp_safely()
    }
}
