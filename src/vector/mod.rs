//! Vector module for vector-magnet.
//!
//! Field vectors in cartesian and spherical form and the safe-region predicate.

mod coords;
mod region;

pub use coords::{to_cartesian, to_spherical, CartesianVector, SphericalComponent, SphericalVector};
pub use region::{SafeRegion, Unbounded};
