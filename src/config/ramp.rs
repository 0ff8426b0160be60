//! Ramp timing and sequencing configuration.

use serde::Deserialize;

use super::units::Milliseconds;

/// Default delay between two ramp-status polls.
pub const DEFAULT_POLL_INTERVAL: Milliseconds = Milliseconds(100);

/// Order in which a safe ramp moves the axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum SafeOrder {
    /// X, then Y, then Z.
    #[default]
    Index,
    /// Axes whose magnitude shrinks first, then the ones that grow.
    ///
    /// Ties keep index order.
    DecreasingFirst,
}

/// Ramp coordinator settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RampConfig {
    /// Delay between ramp-status polls.
    #[serde(default = "default_poll_interval", rename = "poll_interval_ms")]
    pub poll_interval: Milliseconds,

    /// Give up waiting after this long. `None` waits forever.
    #[serde(default, rename = "max_wait_ms")]
    pub max_wait: Option<Milliseconds>,

    /// Axis sequencing for safe ramps.
    #[serde(default)]
    pub safe_order: SafeOrder,
}

fn default_poll_interval() -> Milliseconds {
    DEFAULT_POLL_INTERVAL
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_wait: None,
            safe_order: SafeOrder::Index,
        }
    }
}

impl RampConfig {
    /// Set the poll interval.
    pub fn with_poll_interval(mut self, interval: Milliseconds) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the maximum wait.
    pub fn with_max_wait(mut self, max_wait: Milliseconds) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    /// Set the safe-ramp axis order.
    pub fn with_safe_order(mut self, order: SafeOrder) -> Self {
        self.safe_order = order;
        self
    }
}
