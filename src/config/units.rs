//! Unit types for physical quantities.
//!
//! Provides type-safe representations of field strength, ramp rates, angles
//! and wait times to prevent unit confusion at compile time.

use serde::Deserialize;

/// Magnetic field in Tesla.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Tesla(pub f64);

/// Ramp rate in Tesla per minute.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct TeslaPerMin(pub f64);

impl TeslaPerMin {
    /// Whether the rate can move the field at all.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

/// Angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Convert to radians.
    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Create from radians.
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self(radians.to_degrees())
    }

    /// Wrap into `[0, 360)`.
    pub fn normalized(self) -> Self {
        let wrapped = libm::fmod(self.0, 360.0);
        let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
        // -1e-17 + 360.0 rounds to exactly 360.0
        if wrapped >= 360.0 {
            Self(0.0)
        } else {
            Self(wrapped)
        }
    }
}

/// Wait duration in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct Milliseconds(pub u32);
