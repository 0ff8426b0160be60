//! Configuration validation.

use crate::axis::Axis;
use crate::error::{ConfigError, Error, Result};

use super::limits::FieldLimits;
use super::ramp::RampConfig;
use super::MagnetConfig;

/// Validate a magnet configuration.
///
/// Checks:
/// - Poll interval is positive
/// - Maximum wait is at least one poll interval
/// - Per-axis field limits are valid (min < max)
/// - Maximum magnitude is positive
pub fn validate_config(config: &MagnetConfig) -> Result<()> {
    validate_ramp(&config.ramp)?;

    if let Some(ref limits) = config.limits {
        validate_limits(limits)?;
    }

    Ok(())
}

pub(crate) fn validate_ramp(ramp: &RampConfig) -> Result<()> {
    if ramp.poll_interval.0 == 0 {
        return Err(Error::Config(ConfigError::InvalidPollInterval(
            ramp.poll_interval.0,
        )));
    }

    if let Some(max_wait) = ramp.max_wait {
        if max_wait < ramp.poll_interval {
            return Err(Error::Config(ConfigError::InvalidMaxWait {
                max_wait_ms: max_wait.0,
                poll_interval_ms: ramp.poll_interval.0,
            }));
        }
    }

    Ok(())
}

fn validate_limits(limits: &FieldLimits) -> Result<()> {
    for axis in Axis::ALL {
        if let Some(axis_limits) = limits.axis(axis) {
            if !axis_limits.is_valid() {
                return Err(Error::Config(ConfigError::InvalidFieldLimits {
                    axis,
                    min: axis_limits.min.0,
                    max: axis_limits.max.0,
                }));
            }
        }
    }

    if let Some(max) = limits.max_magnitude {
        if max.0.is_nan() || max.0 <= 0.0 {
            return Err(Error::Config(ConfigError::InvalidMaxMagnitude(max.0)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Milliseconds, Tesla};
    use crate::config::AxisLimits;

    #[test]
    fn test_zero_poll_interval() {
        let ramp = RampConfig::default().with_poll_interval(Milliseconds(0));
        assert!(matches!(
            validate_ramp(&ramp),
            Err(Error::Config(ConfigError::InvalidPollInterval(0)))
        ));
    }

    #[test]
    fn test_max_wait_shorter_than_poll() {
        let ramp = RampConfig::default()
            .with_poll_interval(Milliseconds(100))
            .with_max_wait(Milliseconds(50));
        assert!(matches!(
            validate_ramp(&ramp),
            Err(Error::Config(ConfigError::InvalidMaxWait { .. }))
        ));
    }

    #[test]
    fn test_inverted_axis_limits() {
        let limits = FieldLimits::default()
            .with_axis(Axis::Y, AxisLimits::new(Tesla(1.0), Tesla(-1.0)));
        let result = validate_limits(&limits);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidFieldLimits { axis: Axis::Y, .. }))
        ));
    }

    #[test]
    fn test_non_positive_magnitude() {
        let limits = FieldLimits::sphere(Tesla(0.0));
        assert!(validate_limits(&limits).is_err());
    }
}
