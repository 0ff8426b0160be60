//! Simulated axis controllers shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use vector_magnet::{Axis, AxisController, RampConfig, RampStatus, VectorMagnet};

/// One recorded interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Measured(Axis),
    Target(Axis),
    SetTarget(Axis, f64),
    RampRate(Axis),
    RampToTarget(Axis),
    RampStatus(Axis),
    RampSafely(Axis),
    Delay(u32),
}

/// Call log shared between the axes and the delay provider.
#[derive(Debug, Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Call>>>);

impl Log {
    pub fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.0.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn ramp_starts(&self) -> Vec<Axis> {
        self.0
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::RampToTarget(axis) => Some(*axis),
                _ => None,
            })
            .collect()
    }

    pub fn staged(&self) -> Vec<(Axis, f64)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::SetTarget(axis, v) => Some((*axis, *v)),
                _ => None,
            })
            .collect()
    }

    pub fn position(&self, call: &Call) -> Option<usize> {
        self.0.borrow().iter().position(|c| c == call)
    }

    pub fn has_contact(&self) -> bool {
        self.0
            .borrow()
            .iter()
            .any(|c| !matches!(c, Call::Delay(_)))
    }
}

/// Error raised by a simulated axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SimError {
    pub axis: Axis,
    pub op: &'static str,
}

/// An axis whose ramp completes after a fixed number of status polls.
#[derive(Debug)]
pub struct SimAxis {
    pub axis: Axis,
    pub measured: f64,
    pub target: f64,
    pub rate: f64,
    /// Status polls answered with `Ramping` before the ramp completes.
    pub polls_per_ramp: u32,
    remaining_polls: Option<u32>,
    pub fail_on: Option<&'static str>,
    /// Whether the axis runs its own blocking safe ramp.
    pub device_safe_ramp: bool,
    log: Log,
}

impl SimAxis {
    pub fn new(axis: Axis, measured: f64, rate: f64, log: Log) -> Self {
        Self {
            axis,
            measured,
            target: measured,
            rate,
            polls_per_ramp: 0,
            remaining_polls: None,
            fail_on: None,
            device_safe_ramp: false,
            log,
        }
    }

    pub fn with_device_safe_ramp(mut self) -> Self {
        self.device_safe_ramp = true;
        self
    }

    pub fn with_polls(mut self, polls: u32) -> Self {
        self.polls_per_ramp = polls;
        self
    }

    pub fn failing_on(mut self, op: &'static str) -> Self {
        self.fail_on = Some(op);
        self
    }

    fn check(&self, op: &'static str) -> Result<(), SimError> {
        if self.fail_on == Some(op) {
            Err(SimError {
                axis: self.axis,
                op,
            })
        } else {
            Ok(())
        }
    }
}

impl AxisController for SimAxis {
    type Error = SimError;

    fn measured(&mut self) -> Result<f64, SimError> {
        self.log.push(Call::Measured(self.axis));
        self.check("measured")?;
        Ok(self.measured)
    }

    fn target(&mut self) -> Result<f64, SimError> {
        self.log.push(Call::Target(self.axis));
        self.check("target")?;
        Ok(self.target)
    }

    fn set_target(&mut self, value: f64) -> Result<(), SimError> {
        self.log.push(Call::SetTarget(self.axis, value));
        self.check("set_target")?;
        self.target = value;
        Ok(())
    }

    fn ramp_rate(&mut self) -> Result<f64, SimError> {
        self.log.push(Call::RampRate(self.axis));
        self.check("ramp_rate")?;
        Ok(self.rate)
    }

    fn ramp_to_target(&mut self) -> Result<(), SimError> {
        self.log.push(Call::RampToTarget(self.axis));
        self.check("ramp_to_target")?;
        if self.polls_per_ramp == 0 {
            self.measured = self.target;
        } else {
            self.remaining_polls = Some(self.polls_per_ramp);
        }
        Ok(())
    }

    fn ramp_status(&mut self) -> Result<RampStatus, SimError> {
        self.log.push(Call::RampStatus(self.axis));
        self.check("ramp_status")?;
        match self.remaining_polls {
            Some(0) => {
                self.remaining_polls = None;
                self.measured = self.target;
                Ok(RampStatus::Holding)
            }
            Some(n) => {
                self.remaining_polls = Some(n - 1);
                Ok(RampStatus::Ramping)
            }
            None => Ok(RampStatus::Holding),
        }
    }

    fn ramp_safely(&mut self) -> Option<Result<(), SimError>> {
        if !self.device_safe_ramp {
            return None;
        }
        self.log.push(Call::RampSafely(self.axis));
        if let Err(e) = self.check("ramp_safely") {
            return Some(Err(e));
        }
        self.measured = self.target;
        Some(Ok(()))
    }
}

/// Delay provider that records each wait in the shared log.
#[derive(Debug, Clone)]
pub struct LoggingDelay {
    log: Log,
}

impl LoggingDelay {
    pub fn new(log: Log) -> Self {
        Self { log }
    }
}

impl DelayNs for LoggingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(Call::Delay(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Call::Delay(ms));
    }
}

pub type SimMagnet = VectorMagnet<SimAxis, LoggingDelay>;

/// Three instant axes at `measured` with the given ramp rates.
pub fn sim_axes(measured: [f64; 3], rates: [f64; 3], log: &Log) -> [SimAxis; 3] {
    [
        SimAxis::new(Axis::X, measured[0], rates[0], log.clone()),
        SimAxis::new(Axis::Y, measured[1], rates[1], log.clone()),
        SimAxis::new(Axis::Z, measured[2], rates[2], log.clone()),
    ]
}

pub fn magnet_with(axes: [SimAxis; 3], ramp: RampConfig, log: &Log) -> SimMagnet {
    VectorMagnet::builder()
        .axes(axes)
        .delay(LoggingDelay::new(log.clone()))
        .ramp_config(ramp)
        .build()
        .expect("valid magnet")
}

/// Magnet at `measured` with unit ramp rates and default timing.
pub fn magnet_at(measured: [f64; 3]) -> (SimMagnet, Log) {
    let log = Log::default();
    let axes = sim_axes(measured, [1.0, 1.0, 1.0], &log);
    (magnet_with(axes, RampConfig::default(), &log), log)
}
