//! Field limit configuration.

use serde::Deserialize;

use crate::axis::Axis;
use crate::vector::CartesianVector;

use super::units::Tesla;

/// Inclusive bounds on one axis component.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AxisLimits {
    /// Minimum allowed component.
    #[serde(rename = "min_tesla")]
    pub min: Tesla,

    /// Maximum allowed component.
    #[serde(rename = "max_tesla")]
    pub max: Tesla,
}

impl AxisLimits {
    /// Create new axis limits.
    pub const fn new(min: Tesla, max: Tesla) -> Self {
        Self { min, max }
    }

    /// Check if limits are valid (min < max).
    pub fn is_valid(&self) -> bool {
        self.min.0 < self.max.0
    }

    /// Check if a component is within limits.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min.0 && value <= self.max.0
    }
}

/// Box and magnitude limits on the field vector.
///
/// Every configured bound must hold for a vector to be inside. Unconfigured
/// bounds do not restrict anything, so `FieldLimits::default()` admits every
/// vector.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FieldLimits {
    /// Bounds on the x component.
    #[serde(default)]
    pub x: Option<AxisLimits>,

    /// Bounds on the y component.
    #[serde(default)]
    pub y: Option<AxisLimits>,

    /// Bounds on the z component.
    #[serde(default)]
    pub z: Option<AxisLimits>,

    /// Maximum vector magnitude.
    #[serde(default, rename = "max_magnitude_tesla")]
    pub max_magnitude: Option<Tesla>,
}

impl FieldLimits {
    /// Limits restricting only the magnitude.
    pub fn sphere(radius: Tesla) -> Self {
        Self {
            max_magnitude: Some(radius),
            ..Self::default()
        }
    }

    /// Set bounds for one axis.
    pub fn with_axis(mut self, axis: Axis, limits: AxisLimits) -> Self {
        match axis {
            Axis::X => self.x = Some(limits),
            Axis::Y => self.y = Some(limits),
            Axis::Z => self.z = Some(limits),
        }
        self
    }

    /// Bounds configured for one axis.
    pub fn axis(&self, axis: Axis) -> Option<&AxisLimits> {
        match axis {
            Axis::X => self.x.as_ref(),
            Axis::Y => self.y.as_ref(),
            Axis::Z => self.z.as_ref(),
        }
    }

    /// Check a vector against every configured bound.
    pub fn contains(&self, v: &CartesianVector) -> bool {
        let within_box = Axis::ALL.iter().all(|&axis| {
            self.axis(axis)
                .map(|limits| limits.contains(v[axis]))
                .unwrap_or(true)
        });

        let within_sphere = self
            .max_magnitude
            .map(|max| v.magnitude() <= max.0)
            .unwrap_or(true);

        within_box && within_sphere
    }
}
