//! Safe-region predicate.

use crate::config::FieldLimits;

use super::CartesianVector;

/// Feasibility predicate over field vectors.
///
/// Safe ramps keep the field inside the region only if the region is convex;
/// the predicate itself is only evaluated on staged targets.
pub trait SafeRegion {
    /// Whether `v` is an allowed field.
    fn contains(&self, v: &CartesianVector) -> bool;
}

/// Region admitting every vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl SafeRegion for Unbounded {
    #[inline]
    fn contains(&self, _v: &CartesianVector) -> bool {
        true
    }
}

impl SafeRegion for FieldLimits {
    #[inline]
    fn contains(&self, v: &CartesianVector) -> bool {
        FieldLimits::contains(self, v)
    }
}

impl<F> SafeRegion for F
where
    F: Fn(&CartesianVector) -> bool,
{
    #[inline]
    fn contains(&self, v: &CartesianVector) -> bool {
        self(v)
    }
}
