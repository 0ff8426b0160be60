//! Vector state: the three axis controllers in fixed axis order.

use crate::axis::{Axis, AxisController, RampStatus};
use crate::config::units::TeslaPerMin;
use crate::error::{Error, Result};
use crate::vector::CartesianVector;

/// Owns one controller per axis, indexed by [`Axis::index`].
///
/// Measured and target vectors are never cached; every read goes to the
/// controllers. Controller errors come back tagged with their axis.
#[derive(Debug)]
pub struct VectorState<A> {
    axes: [A; 3],
}

impl<A> VectorState<A> {
    /// Create from controllers in X, Y, Z order.
    pub fn new(axes: [A; 3]) -> Self {
        Self { axes }
    }

    /// Borrow one controller.
    #[inline]
    pub fn axis(&self, axis: Axis) -> &A {
        &self.axes[axis.index()]
    }

    /// Mutably borrow one controller.
    #[inline]
    pub fn axis_mut(&mut self, axis: Axis) -> &mut A {
        &mut self.axes[axis.index()]
    }

    /// Release the controllers.
    pub fn into_axes(self) -> [A; 3] {
        self.axes
    }
}

impl<A: AxisController> VectorState<A> {
    /// Measured component on one axis.
    pub fn measured_component(&mut self, axis: Axis) -> Result<f64, A::Error> {
        self.axis_mut(axis)
            .measured()
            .map_err(|e| Error::axis(axis, e))
    }

    /// Staged target on one axis.
    pub fn target_component(&mut self, axis: Axis) -> Result<f64, A::Error> {
        self.axis_mut(axis).target().map_err(|e| Error::axis(axis, e))
    }

    /// Measured field vector.
    pub fn measured(&mut self) -> Result<CartesianVector, A::Error> {
        let mut v = CartesianVector::ZERO;
        for axis in Axis::ALL {
            v[axis] = self.measured_component(axis)?;
        }
        Ok(v)
    }

    /// Staged target vector.
    pub fn target(&mut self) -> Result<CartesianVector, A::Error> {
        let mut v = CartesianVector::ZERO;
        for axis in Axis::ALL {
            v[axis] = self.target_component(axis)?;
        }
        Ok(v)
    }

    /// Ramp rate on one axis.
    pub fn ramp_rate(&mut self, axis: Axis) -> Result<TeslaPerMin, A::Error> {
        self.axis_mut(axis)
            .ramp_rate()
            .map(TeslaPerMin)
            .map_err(|e| Error::axis(axis, e))
    }

    /// Ramp status on one axis.
    pub fn ramp_status(&mut self, axis: Axis) -> Result<RampStatus, A::Error> {
        self.axis_mut(axis)
            .ramp_status()
            .map_err(|e| Error::axis(axis, e))
    }

    /// Start the hardware ramp on one axis.
    pub fn ramp_to_target(&mut self, axis: Axis) -> Result<(), A::Error> {
        debug!("axis {}: ramp to target", axis);
        self.axis_mut(axis)
            .ramp_to_target()
            .map_err(|e| Error::axis(axis, e))
    }

    /// Run the controller's own blocking safe ramp on one axis, if it has one.
    pub fn ramp_safely(&mut self, axis: Axis) -> Option<Result<(), A::Error>> {
        self.axis_mut(axis)
            .ramp_safely()
            .map(|r| r.map_err(|e| Error::axis(axis, e)))
    }

    /// Stage a target on one axis.
    pub fn stage_axis(&mut self, axis: Axis, value: f64) -> Result<(), A::Error> {
        self.axis_mut(axis)
            .set_target(value)
            .map_err(|e| Error::axis(axis, e))
    }

    /// Stage a full target vector, X first.
    ///
    /// Stops at the first failing axis; earlier axes keep their new target.
    pub fn stage(&mut self, target: CartesianVector) -> Result<(), A::Error> {
        for axis in Axis::ALL {
            self.stage_axis(axis, target[axis])?;
        }
        Ok(())
    }

    /// Whether any axis reports [`RampStatus::Ramping`].
    pub fn is_ramping(&mut self) -> Result<bool, A::Error> {
        for axis in Axis::ALL {
            if self.ramp_status(axis)?.is_ramping() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
