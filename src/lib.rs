//! # vector-magnet
//!
//! Safe ramping of a three-axis vector magnet, with the field exposed in
//! spherical coordinates.
//!
//! ## Features
//!
//! - **Pre-flight checks**: a ramp never starts if an axis that must move has a
//!   zero ramp rate, and targets outside the safe region are never staged
//! - **Three ramp strategies**: safe (one axis at a time), simultaneous, and
//!   simultaneous with blocking wait
//! - **Spherical parameters**: set theta, r or phi and get the measured value
//!   back once the field has settled
//! - **Bounded waits**: configurable poll interval, optional timeout and
//!   cooperative cancellation
//! - **no_std compatible**: the core library works without the standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vector_magnet::{DerivedParameter, VectorMagnet};
//!
//! let config = vector_magnet::load_config("magnet.toml")?;
//!
//! let mut magnet = VectorMagnet::builder()
//!     .axes([x_supply, y_supply, z_supply])
//!     .delay(delay)
//!     .config(&config)
//!     .build()?;
//!
//! let theta = magnet.set(DerivedParameter::ThetaSafeRamp, 45.0)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Must come first so the logging macros are visible in every module
#[macro_use]
mod fmt;

// Core modules
pub mod axis;
pub mod config;
pub mod error;
pub mod magnet;
pub mod vector;

// Re-exports for ergonomic API
pub use axis::{Axis, AxisController, RampStatus};
pub use config::{validate_config, FieldLimits, MagnetConfig, RampConfig, SafeOrder};
pub use error::{ConfigError, Error, RampError, Result};
pub use magnet::{CancelToken, DerivedParameter, RampCoordinator, RampMode, VectorMagnet, VectorState};
pub use vector::{CartesianVector, SafeRegion, SphericalComponent, SphericalVector};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, Milliseconds, Tesla, TeslaPerMin};
