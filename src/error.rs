//! Error types for vector-magnet.
//!
//! Provides unified error handling across configuration, ramp coordination, and
//! the external axis controllers.

use core::convert::Infallible;
use core::fmt;

use crate::axis::Axis;

/// Result type alias using the library's Error type.
///
/// `E` is the axis controller error type; it defaults to [`Infallible`] for
/// operations that never talk to a controller (configuration loading, parsing).
pub type Result<T, E = Infallible> = core::result::Result<T, Error<E>>;

/// Unified error type for all vector-magnet operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error<E = Infallible> {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Ramp precondition or execution error
    Ramp(RampError),
    /// Failure reported by an axis controller, passed through unmodified
    Axis {
        /// Axis whose controller failed
        axis: Axis,
        /// Error returned by the controller
        source: E,
    },
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Poll interval must be > 0
    InvalidPollInterval(u32),
    /// Maximum wait must not be shorter than one poll interval
    InvalidMaxWait {
        /// Configured maximum wait in milliseconds
        max_wait_ms: u32,
        /// Configured poll interval in milliseconds
        poll_interval_ms: u32,
    },
    /// Per-axis field limits are inverted (min must be < max)
    InvalidFieldLimits {
        /// Axis the limits belong to
        axis: Axis,
        /// Minimum limit value
        min: f64,
        /// Maximum limit value
        max: f64,
    },
    /// Maximum field magnitude must be > 0
    InvalidMaxMagnitude(f64),
    /// Unknown derived parameter name
    InvalidParameter(heapless::String<32>),
    /// Builder is missing a required part
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Ramp coordination errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampError {
    /// Mode string is not one of `safe`, `simul`, `simul_block`
    InvalidRampMode(heapless::String<32>),
    /// Axis must move but its ramp rate is zero
    ZeroRampRate(Axis),
    /// Requested value is not finite, or a negative magnitude
    InvalidTarget(f64),
    /// Requested target lies outside the safe region
    OutsideSafeRegion {
        /// Target x component in Tesla
        x: f64,
        /// Target y component in Tesla
        y: f64,
        /// Target z component in Tesla
        z: f64,
    },
    /// Axes were still ramping when the maximum wait elapsed
    Timeout {
        /// Time spent polling, in milliseconds
        waited_ms: u32,
    },
    /// The wait was cancelled through a [`CancelToken`](crate::magnet::CancelToken)
    Cancelled,
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Ramp(e) => write!(f, "Ramp error: {}", e),
            Error::Axis { axis, source } => {
                write!(f, "Axis {} controller error: {:?}", axis, source)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidPollInterval(v) => {
                write!(f, "Invalid poll interval: {} ms. Must be > 0", v)
            }
            ConfigError::InvalidMaxWait {
                max_wait_ms,
                poll_interval_ms,
            } => write!(
                f,
                "Invalid max wait: {} ms is shorter than the poll interval ({} ms)",
                max_wait_ms, poll_interval_ms
            ),
            ConfigError::InvalidFieldLimits { axis, min, max } => write!(
                f,
                "Invalid field limits on axis {}: min ({}) must be < max ({})",
                axis, min, max
            ),
            ConfigError::InvalidMaxMagnitude(v) => {
                write!(f, "Invalid max magnitude: {} T. Must be > 0", v)
            }
            ConfigError::InvalidParameter(name) => {
                write!(f, "Unknown derived parameter '{}'", name)
            }
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for RampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RampError::InvalidRampMode(mode) => write!(
                f,
                "Invalid ramp mode '{}'. Valid modes: safe, simul, simul_block",
                mode
            ),
            RampError::ZeroRampRate(axis) => {
                write!(f, "Axis {} must move but its ramp rate is zero", axis)
            }
            RampError::InvalidTarget(v) => write!(
                f,
                "Invalid target value {}. Must be finite, magnitudes >= 0",
                v
            ),
            RampError::OutsideSafeRegion { x, y, z } => write!(
                f,
                "Target ({}, {}, {}) T lies outside the safe region",
                x, y, z
            ),
            RampError::Timeout { waited_ms } => {
                write!(f, "Axes still ramping after {} ms", waited_ms)
            }
            RampError::Cancelled => write!(f, "Ramp wait cancelled"),
        }
    }
}

impl<E> Error<E> {
    /// Wrap a controller error with the axis it came from.
    pub fn axis(axis: Axis, source: E) -> Self {
        Error::Axis { axis, source }
    }
}

/// Copy as much of `msg` as fits into an error payload.
pub(crate) fn truncated<const N: usize>(msg: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

// Conversion impls
impl<E> From<ConfigError> for Error<E> {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl<E> From<RampError> for Error<E> {
    fn from(e: RampError) -> Self {
        Error::Ramp(e)
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for RampError {}
