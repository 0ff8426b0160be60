//! Magnet module for vector-magnet.
//!
//! Ramp coordination over the three axis controllers and the derived
//! spherical parameters built on it.

mod builder;
mod cancel;
mod coordinator;
mod mode;
mod parameter;
mod state;
mod system;

pub use builder::VectorMagnetBuilder;
pub use cancel::CancelToken;
pub use coordinator::{RampCoordinator, RampPlan};
pub use mode::RampMode;
pub use parameter::DerivedParameter;
pub use state::VectorState;
pub use system::VectorMagnet;
