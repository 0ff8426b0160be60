//! Builder pattern for VectorMagnet.

use crate::axis::Axis;
use crate::config::{validate_config, validate_ramp, FieldLimits, MagnetConfig, RampConfig};
use crate::error::{ConfigError, Error, Result};
use crate::vector::{SafeRegion, Unbounded};

use super::coordinator::RampCoordinator;
use super::state::VectorState;
use super::system::VectorMagnet;

/// Builder for creating VectorMagnet instances.
pub struct VectorMagnetBuilder<A, D, R = Unbounded> {
    axes: [Option<A>; 3],
    delay: Option<D>,
    region: R,
    ramp: RampConfig,
    name: Option<heapless::String<32>>,
    config_error: Option<Error>,
}

impl<A, D> Default for VectorMagnetBuilder<A, D, Unbounded> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, D> VectorMagnetBuilder<A, D, Unbounded> {
    /// Create a new builder with an unbounded safe region.
    pub fn new() -> Self {
        Self {
            axes: [None, None, None],
            delay: None,
            region: Unbounded,
            ramp: RampConfig::default(),
            name: None,
            config_error: None,
        }
    }
}

impl<A, D, R> VectorMagnetBuilder<A, D, R> {
    /// Set all three controllers in X, Y, Z order.
    pub fn axes(mut self, axes: [A; 3]) -> Self {
        let [x, y, z] = axes;
        self.axes = [Some(x), Some(y), Some(z)];
        self
    }

    /// Set the controller for one axis.
    pub fn axis(mut self, axis: Axis, controller: A) -> Self {
        self.axes[axis.index()] = Some(controller);
        self
    }

    /// Set the delay provider used between status polls.
    pub fn delay(mut self, delay: D) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the instrument name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the ramp settings.
    pub fn ramp_config(mut self, ramp: RampConfig) -> Self {
        self.ramp = ramp;
        self
    }

    /// Set the safe region.
    pub fn region<R2: SafeRegion>(self, region: R2) -> VectorMagnetBuilder<A, D, R2> {
        VectorMagnetBuilder {
            axes: self.axes,
            delay: self.delay,
            region,
            ramp: self.ramp,
            name: self.name,
            config_error: self.config_error,
        }
    }

    /// Configure name, ramp settings and field limits from a MagnetConfig.
    ///
    /// Without configured limits the region admits every vector. The config
    /// is validated here; a failure is reported by [`build`](Self::build).
    pub fn config(self, config: &MagnetConfig) -> VectorMagnetBuilder<A, D, FieldLimits> {
        let limits = config.limits.clone().unwrap_or_default();
        let mut builder = self.ramp_config(config.ramp.clone()).region(limits);
        builder.name = Some(config.name.clone());
        if builder.config_error.is_none() {
            builder.config_error = validate_config(config).err();
        }
        builder
    }

    /// Build the VectorMagnet.
    ///
    /// # Errors
    ///
    /// Returns an error if a MagnetConfig passed to [`config`](Self::config)
    /// is invalid, if a controller or the delay provider is missing, or if
    /// the ramp settings are invalid.
    pub fn build(self) -> Result<VectorMagnet<A, D, R>> {
        if let Some(err) = self.config_error {
            return Err(err);
        }

        let [x, y, z] = self.axes;
        let x = x.ok_or(Error::Config(ConfigError::MissingField("x axis controller")))?;
        let y = y.ok_or(Error::Config(ConfigError::MissingField("y axis controller")))?;
        let z = z.ok_or(Error::Config(ConfigError::MissingField("z axis controller")))?;

        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;

        validate_ramp(&self.ramp)?;

        let name = self.name.unwrap_or_else(|| {
            let mut name = heapless::String::new();
            let _ = name.push_str("magnet");
            name
        });

        let coordinator = RampCoordinator::new(VectorState::new([x, y, z]), delay, self.ramp);
        Ok(VectorMagnet::new(coordinator, self.region, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Milliseconds;
    use embedded_hal_mock::eh1::delay::NoopDelay;

    #[test]
    fn test_missing_axis() {
        let result = VectorMagnetBuilder::<u8, NoopDelay, _>::new()
            .axis(Axis::X, 0)
            .axis(Axis::Z, 2)
            .delay(NoopDelay::new())
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField("y axis controller")))
        ));
    }

    #[test]
    fn test_missing_delay() {
        let result = VectorMagnetBuilder::<u8, NoopDelay, _>::new()
            .axes([0, 1, 2])
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField("delay")))
        ));
    }

    #[test]
    fn test_invalid_ramp_config() {
        let result = VectorMagnetBuilder::<u8, NoopDelay, _>::new()
            .axes([0, 1, 2])
            .delay(NoopDelay::new())
            .ramp_config(RampConfig::default().with_poll_interval(Milliseconds(0)))
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidPollInterval(0)))
        ));
    }

    #[test]
    fn test_config_with_inverted_limits_is_rejected() {
        use crate::config::units::Tesla;
        use crate::config::AxisLimits;

        let config = MagnetConfig {
            limits: Some(
                FieldLimits::default()
                    .with_axis(Axis::Y, AxisLimits::new(Tesla(2.0), Tesla(-2.0))),
            ),
            ..MagnetConfig::default()
        };

        let result = VectorMagnetBuilder::<u8, NoopDelay, _>::new()
            .axes([0, 1, 2])
            .delay(NoopDelay::new())
            .config(&config)
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidFieldLimits { axis: Axis::Y, .. }))
        ));
    }

    #[test]
    fn test_config_sets_name_and_timing() {
        let mut config = MagnetConfig::default();
        config.name = heapless::String::try_from("mercury").unwrap();
        config.ramp = RampConfig::default().with_poll_interval(Milliseconds(20));

        let magnet = VectorMagnetBuilder::<u8, NoopDelay, _>::new()
            .axes([0, 1, 2])
            .delay(NoopDelay::new())
            .config(&config)
            .build()
            .unwrap();

        assert_eq!(magnet.name(), "mercury");
        assert_eq!(magnet.ramp_config().poll_interval, Milliseconds(20));
        assert_eq!(magnet.region(), &FieldLimits::default());
    }
}
