//! Simulated vector magnet example.
//!
//! Drives three simulated power supplies through the spherical parameters.
//! Each supply moves linearly towards its target at its ramp rate, in wall
//! clock time, so the poll loop really waits.

use std::time::{Duration, Instant};

use vector_magnet::{
    parse_config, Axis, AxisController, DerivedParameter, Error, RampError, RampMode, RampStatus,
    VectorMagnet,
};

/// Delay provider backed by the OS scheduler.
struct StdDelay;

impl embedded_hal::delay::DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns as u64));
    }
}

/// A power supply ramping linearly at a fixed rate.
struct SimulatedSupply {
    axis: Axis,
    start: f64,
    target: f64,
    rate_tesla_per_min: f64,
    started: Option<Instant>,
}

impl SimulatedSupply {
    fn new(axis: Axis, field: f64, rate_tesla_per_min: f64) -> Self {
        Self {
            axis,
            start: field,
            target: field,
            rate_tesla_per_min,
            started: None,
        }
    }

    fn field(&self) -> f64 {
        let Some(started) = self.started else {
            return self.start;
        };
        let minutes = started.elapsed().as_secs_f64() / 60.0;
        let travelled = self.rate_tesla_per_min * minutes;
        let distance = self.target - self.start;
        if travelled >= distance.abs() {
            self.target
        } else {
            self.start + travelled * distance.signum()
        }
    }
}

impl AxisController for SimulatedSupply {
    type Error = core::convert::Infallible;

    fn measured(&mut self) -> Result<f64, Self::Error> {
        Ok(self.field())
    }

    fn target(&mut self) -> Result<f64, Self::Error> {
        Ok(self.target)
    }

    fn set_target(&mut self, value: f64) -> Result<(), Self::Error> {
        self.start = self.field();
        self.started = None;
        self.target = value;
        Ok(())
    }

    fn ramp_rate(&mut self) -> Result<f64, Self::Error> {
        Ok(self.rate_tesla_per_min)
    }

    fn ramp_to_target(&mut self) -> Result<(), Self::Error> {
        println!("  {} supply ramping to {:.3} T", self.axis, self.target);
        self.started = Some(Instant::now());
        Ok(())
    }

    fn ramp_status(&mut self) -> Result<RampStatus, Self::Error> {
        if self.field() == self.target {
            Ok(RampStatus::Holding)
        } else {
            Ok(RampStatus::Ramping)
        }
    }
}

const CONFIG: &str = r#"
name = "demo_magnet"

[ramp]
poll_interval_ms = 20
max_wait_ms = 10000
safe_order = "decreasing_first"

[limits]
max_magnitude_tesla = 1.0
"#;

fn main() {
    println!("=== Simulated Vector Magnet Example ===\n");

    let config = parse_config(CONFIG).expect("Failed to parse configuration");

    // 60 T/min is 1 T/s, fast enough for a demo
    let supplies = [
        SimulatedSupply::new(Axis::X, 0.0, 60.0),
        SimulatedSupply::new(Axis::Y, 0.0, 60.0),
        SimulatedSupply::new(Axis::Z, 0.2, 60.0),
    ];

    let mut magnet = VectorMagnet::builder()
        .axes(supplies)
        .delay(StdDelay)
        .config(&config)
        .build()
        .expect("Failed to build magnet");

    println!("Magnet: {}", magnet.name());
    print_field(&mut magnet);

    for (param, value) in [
        (DerivedParameter::RSafeRamp, 0.5),
        (DerivedParameter::ThetaSafeRamp, 45.0),
        (DerivedParameter::PhiSafeRamp, 120.0),
        (DerivedParameter::RSimulRamp, 0.3),
    ] {
        println!("\nSet {} ({}) to {} {}", param, param.label(), value, param.unit());
        let started = Instant::now();
        match magnet.set(param, value) {
            Ok(measured) => println!(
                "  settled at {:.4} {} after {:?}",
                measured,
                param.unit(),
                started.elapsed()
            ),
            Err(e) => println!("  failed: {}", e),
        }
        print_field(&mut magnet);
    }

    // The magnitude limit rejects this before anything moves
    println!("\nSet r_saferamp to 2.0 Tesla");
    match magnet.set_r_saferamp(2.0) {
        Err(Error::Ramp(RampError::OutsideSafeRegion { .. })) => {
            println!("  rejected: outside the safe region")
        }
        other => println!("  unexpected: {:?}", other),
    }

    // Invalid mode names are caught before any supply is touched
    println!("\nRamp with mode 'fast'");
    if let Err(e) = magnet.ramp_named("fast") {
        println!("  {}", e);
    }

    println!("\nAvailable ramp modes:");
    for mode in RampMode::ALL {
        println!("  {} (blocking: {})", mode, mode.is_blocking());
    }
}

fn print_field<R: vector_magnet::SafeRegion>(
    magnet: &mut VectorMagnet<SimulatedSupply, StdDelay, R>,
) {
    let c = magnet.measured_cartesian().expect("Failed to read field");
    let s = c.to_spherical();
    println!(
        "  field: ({:.3}, {:.3}, {:.3}) T = theta {:.2} deg, r {:.3} T, phi {:.2} deg",
        c.x, c.y, c.z, s.theta, s.r, s.phi
    );
}
