//! Derived spherical field parameters.

use core::fmt;
use core::str::FromStr;

use crate::error::{truncated, ConfigError};
use crate::vector::SphericalComponent;

use super::mode::RampMode;

/// The spherical parameters exposed on top of the three cartesian axes.
///
/// Each one replaces a single spherical component of the measured field,
/// ramps with a fixed [`RampMode`] and reads the result back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DerivedParameter {
    /// Polar angle, safe ramp.
    ThetaSafeRamp,
    /// Magnitude, safe ramp.
    RSafeRamp,
    /// Magnitude, simultaneous blocking ramp.
    RSimulRamp,
    /// Azimuth, safe ramp.
    PhiSafeRamp,
    /// Azimuth, safe ramp.
    Phi,
}

impl DerivedParameter {
    /// All derived parameters.
    pub const ALL: [DerivedParameter; 5] = [
        DerivedParameter::ThetaSafeRamp,
        DerivedParameter::RSafeRamp,
        DerivedParameter::RSimulRamp,
        DerivedParameter::PhiSafeRamp,
        DerivedParameter::Phi,
    ];

    /// Parameter name.
    pub const fn name(self) -> &'static str {
        match self {
            DerivedParameter::ThetaSafeRamp => "theta_saferamp",
            DerivedParameter::RSafeRamp => "r_saferamp",
            DerivedParameter::RSimulRamp => "r_simulramp",
            DerivedParameter::PhiSafeRamp => "phi_saferamp",
            DerivedParameter::Phi => "phi",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self.component() {
            SphericalComponent::Theta => "Theta",
            SphericalComponent::R => "B_Radius",
            SphericalComponent::Phi => "Phi",
        }
    }

    /// Unit of the value.
    pub const fn unit(self) -> &'static str {
        match self.component() {
            SphericalComponent::R => "Tesla",
            SphericalComponent::Theta | SphericalComponent::Phi => "degrees",
        }
    }

    /// Spherical component this parameter reads and writes.
    pub const fn component(self) -> SphericalComponent {
        match self {
            DerivedParameter::ThetaSafeRamp => SphericalComponent::Theta,
            DerivedParameter::RSafeRamp | DerivedParameter::RSimulRamp => SphericalComponent::R,
            DerivedParameter::PhiSafeRamp | DerivedParameter::Phi => SphericalComponent::Phi,
        }
    }

    /// Ramp strategy used on set.
    pub const fn mode(self) -> RampMode {
        match self {
            DerivedParameter::RSimulRamp => RampMode::SimultaneousBlocking,
            DerivedParameter::ThetaSafeRamp
            | DerivedParameter::RSafeRamp
            | DerivedParameter::PhiSafeRamp
            | DerivedParameter::Phi => RampMode::Safe,
        }
    }
}

impl fmt::Display for DerivedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DerivedParameter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DerivedParameter::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| ConfigError::InvalidParameter(truncated(s)))
    }
}
