//! Configuration module for vector-magnet.
//!
//! Provides types for loading and validating ramp timing and field limits
//! from TOML files (with `std` feature) or pre-built values.

mod limits;
#[cfg(feature = "std")]
mod loader;
mod ramp;
mod system;
pub mod units;
mod validation;

pub use limits::{AxisLimits, FieldLimits};
pub use ramp::{RampConfig, SafeOrder, DEFAULT_POLL_INTERVAL};
pub use system::MagnetConfig;
pub use validation::validate_config;
pub(crate) use validation::validate_ramp;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, Milliseconds, Tesla, TeslaPerMin};
