//! Magnet configuration - root configuration structure.

use heapless::String;
use serde::Deserialize;

use super::limits::FieldLimits;
use super::ramp::RampConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MagnetConfig {
    /// Instrument name used in log output.
    #[serde(default = "default_name")]
    pub name: String<32>,

    /// Ramp coordinator settings.
    #[serde(default)]
    pub ramp: RampConfig,

    /// Optional field limits; absent means unbounded.
    #[serde(default)]
    pub limits: Option<FieldLimits>,
}

fn default_name() -> String<32> {
    let mut name = String::new();
    let _ = name.push_str("magnet");
    name
}

impl Default for MagnetConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            ramp: RampConfig::default(),
            limits: None,
        }
    }
}

impl MagnetConfig {
    /// Instrument name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
