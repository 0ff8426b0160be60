//! Ramp strategies.

use core::fmt;
use core::str::FromStr;

use crate::error::{truncated, RampError};

/// How the coordinator moves the axes to their staged targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampMode {
    /// One axis at a time, each waited for before the next starts.
    ///
    /// Keeps the field inside a convex safe region. Blocks until every axis
    /// holds.
    Safe,
    /// Start every axis at once and return immediately.
    ///
    /// The field may leave the safe region while the axes move.
    Simultaneous,
    /// Start every axis at once, then poll until all of them hold.
    ///
    /// Same safe-region caveat as [`RampMode::Simultaneous`].
    SimultaneousBlocking,
}

impl RampMode {
    /// All modes.
    pub const ALL: [RampMode; 3] = [
        RampMode::Safe,
        RampMode::Simultaneous,
        RampMode::SimultaneousBlocking,
    ];

    /// Name accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            RampMode::Safe => "safe",
            RampMode::Simultaneous => "simul",
            RampMode::SimultaneousBlocking => "simul_block",
        }
    }

    /// Whether the call returns only once every axis holds.
    pub const fn is_blocking(self) -> bool {
        !matches!(self, RampMode::Simultaneous)
    }
}

impl fmt::Display for RampMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RampMode {
    type Err = RampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RampMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| RampError::InvalidRampMode(truncated(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        assert_eq!("safe".parse::<RampMode>(), Ok(RampMode::Safe));
        assert_eq!("simul".parse::<RampMode>(), Ok(RampMode::Simultaneous));
        assert_eq!(
            "simul_block".parse::<RampMode>(),
            Ok(RampMode::SimultaneousBlocking)
        );
    }

    #[test]
    fn test_parse_unknown_mode() {
        let err = "fast".parse::<RampMode>().unwrap_err();
        match err {
            RampError::InvalidRampMode(name) => assert_eq!(name.as_str(), "fast"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_display_round_trip() {
        for mode in RampMode::ALL {
            assert_eq!(mode.to_string().parse::<RampMode>(), Ok(mode));
        }
    }
}
