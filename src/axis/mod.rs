//! Axis module for vector-magnet.
//!
//! Defines the fixed axis order and the interface each power-supply axis exposes.

mod controller;
mod id;

pub use controller::{AxisController, RampStatus};
pub use id::Axis;
