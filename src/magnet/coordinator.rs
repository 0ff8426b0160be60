//! Ramp coordinator.
//!
//! Runs the pre-flight check and one of the three ramp strategies against
//! targets that were already staged on the axis controllers.

use core::cmp::Ordering;

use embedded_hal::delay::DelayNs;

use crate::axis::{Axis, AxisController};
use crate::config::{RampConfig, SafeOrder};
use crate::error::{Error, RampError, Result};
use crate::vector::CartesianVector;

use super::cancel::CancelToken;
use super::mode::RampMode;
use super::state::VectorState;

// Used by `ramp`, never cancelled.
static NEVER_CANCELLED: CancelToken = CancelToken::new();

/// Snapshot taken by the pre-flight check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampPlan {
    /// Measured field when the ramp was requested.
    pub measured: CartesianVector,
    /// Staged target.
    pub target: CartesianVector,
    /// Axes whose target differs from the measured value, by index.
    pub moving: [bool; 3],
}

impl RampPlan {
    /// Whether `axis` has to move.
    #[inline]
    pub fn moves(&self, axis: Axis) -> bool {
        self.moving[axis.index()]
    }

    /// Whether no axis has to move.
    pub fn is_idle(&self) -> bool {
        !self.moving.iter().any(|&m| m)
    }

    /// Axes in the order a safe ramp visits them.
    ///
    /// `DecreasingFirst` sorts by change in magnitude, shrinking axes first;
    /// ties keep index order.
    pub fn safe_sequence(&self, order: SafeOrder) -> [Axis; 3] {
        let mut axes = Axis::ALL;
        if order == SafeOrder::DecreasingFirst {
            let growth =
                |axis: Axis| libm::fabs(self.target[axis]) - libm::fabs(self.measured[axis]);
            axes.sort_unstable_by(|a, b| {
                growth(*a)
                    .partial_cmp(&growth(*b))
                    .unwrap_or(Ordering::Equal)
                    .then(a.index().cmp(&b.index()))
            });
        }
        axes
    }
}

/// Drives the staged targets of a [`VectorState`] to completion.
///
/// Holds the controllers exclusively; `&mut self` on every ramp keeps two
/// ramps from overlapping.
#[derive(Debug)]
pub struct RampCoordinator<A, D> {
    state: VectorState<A>,
    delay: D,
    config: RampConfig,
}

impl<A, D> RampCoordinator<A, D> {
    /// Create a coordinator. `config` is assumed validated.
    pub fn new(state: VectorState<A>, delay: D, config: RampConfig) -> Self {
        Self {
            state,
            delay,
            config,
        }
    }

    /// Borrow the vector state.
    #[inline]
    pub fn state(&self) -> &VectorState<A> {
        &self.state
    }

    /// Mutably borrow the vector state.
    #[inline]
    pub fn state_mut(&mut self) -> &mut VectorState<A> {
        &mut self.state
    }

    /// Ramp settings in use.
    #[inline]
    pub fn config(&self) -> &RampConfig {
        &self.config
    }

    /// Release the state and delay provider.
    pub fn release(self) -> (VectorState<A>, D) {
        (self.state, self.delay)
    }
}

impl<A, D> RampCoordinator<A, D>
where
    A: AxisController,
    D: DelayNs,
{
    /// Ramp the staged targets using `mode`.
    ///
    /// # Errors
    ///
    /// - [`RampError::ZeroRampRate`] if an axis that must move has a zero
    ///   ramp rate; nothing is started in that case.
    /// - [`RampError::Timeout`] if `max_wait` elapses while polling.
    /// - [`Error::Axis`] for any controller failure. Axes already started
    ///   are left ramping.
    pub fn ramp(&mut self, mode: RampMode) -> Result<(), A::Error> {
        self.ramp_with_cancel(mode, &NEVER_CANCELLED)
    }

    /// Parse `mode` and ramp.
    ///
    /// An unknown mode fails with [`RampError::InvalidRampMode`] before any
    /// controller is contacted.
    pub fn ramp_named(&mut self, mode: &str) -> Result<(), A::Error> {
        let mode: RampMode = mode.parse()?;
        self.ramp(mode)
    }

    /// Ramp with a cancellation token.
    ///
    /// A cancelled wait returns [`RampError::Cancelled`] and leaves the
    /// hardware as it is.
    pub fn ramp_with_cancel(&mut self, mode: RampMode, cancel: &CancelToken) -> Result<(), A::Error> {
        info!("ramp requested, mode {}", mode);
        let plan = self.preflight()?;

        if plan.is_idle() {
            debug!("all axes already at target");
        }

        // One wait budget for the whole ramp
        let mut waited_ms = 0;
        match mode {
            RampMode::Safe => self.ramp_safely(&plan, cancel, &mut waited_ms),
            RampMode::Simultaneous => self.start_all(&plan),
            RampMode::SimultaneousBlocking => {
                self.start_all(&plan)?;
                self.poll_until_holding(&Axis::ALL, cancel, &mut waited_ms)
            }
        }
    }

    /// Read measured and target vectors and check ramp rates.
    ///
    /// Fails with [`RampError::ZeroRampRate`] for the first axis (in index
    /// order) that must move but has a non-positive rate.
    pub fn preflight(&mut self) -> Result<RampPlan, A::Error> {
        let measured = self.state.measured()?;
        let target = self.state.target()?;
        let mut moving = [false; 3];

        for axis in Axis::ALL {
            // Exact comparison; readback tolerance belongs to the controller.
            if target[axis] != measured[axis] {
                if !self.state.ramp_rate(axis)?.is_positive() {
                    warn!("axis {} must move but ramp rate is zero", axis);
                    return Err(Error::Ramp(RampError::ZeroRampRate(axis)));
                }
                moving[axis.index()] = true;
            }
        }

        Ok(RampPlan {
            measured,
            target,
            moving,
        })
    }

    fn ramp_safely(
        &mut self,
        plan: &RampPlan,
        cancel: &CancelToken,
        waited_ms: &mut u32,
    ) -> Result<(), A::Error> {
        for axis in plan.safe_sequence(self.config.safe_order) {
            if !plan.moves(axis) {
                continue;
            }
            if cancel.is_cancelled() {
                warn!("safe ramp cancelled before axis {}", axis);
                return Err(Error::Ramp(RampError::Cancelled));
            }
            match self.state.ramp_safely(axis) {
                Some(result) => result?,
                None => {
                    self.state.ramp_to_target(axis)?;
                    self.poll_until_holding(&[axis], cancel, waited_ms)?;
                }
            }
        }
        Ok(())
    }

    fn start_all(&mut self, plan: &RampPlan) -> Result<(), A::Error> {
        for axis in Axis::ALL {
            if plan.moves(axis) {
                self.state.ramp_to_target(axis)?;
            }
        }
        Ok(())
    }

    /// Poll `axes` until none reports ramping.
    ///
    /// Every axis is read on every round. The delay between rounds is the
    /// configured poll interval, and `max_wait` counts from this call.
    pub fn wait_until_holding(&mut self, axes: &[Axis], cancel: &CancelToken) -> Result<(), A::Error> {
        let mut waited_ms = 0;
        self.poll_until_holding(axes, cancel, &mut waited_ms)
    }

    // `waited_ms` carries over between calls within one ramp.
    fn poll_until_holding(
        &mut self,
        axes: &[Axis],
        cancel: &CancelToken,
        waited_ms: &mut u32,
    ) -> Result<(), A::Error> {
        let interval = self.config.poll_interval.0;

        loop {
            if cancel.is_cancelled() {
                warn!("ramp wait cancelled after {} ms", *waited_ms);
                return Err(Error::Ramp(RampError::Cancelled));
            }

            let mut ramping = false;
            for &axis in axes {
                ramping |= self.state.ramp_status(axis)?.is_ramping();
            }

            if !ramping {
                debug!("axes holding after {} ms", *waited_ms);
                return Ok(());
            }

            if let Some(max_wait) = self.config.max_wait {
                if *waited_ms >= max_wait.0 {
                    warn!("axes still ramping after {} ms", *waited_ms);
                    return Err(Error::Ramp(RampError::Timeout {
                        waited_ms: *waited_ms,
                    }));
                }
            }

            self.delay.delay_ms(interval);
            *waited_ms = waited_ms.saturating_add(interval);
        }
    }
}
