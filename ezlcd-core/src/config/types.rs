//! Configuration type definitions
//!
//! With the `serde` feature the configuration can be persisted as a
//! postcard blob wrapped in a magic/version header.

use ezlcd_protocol::TouchProtocol;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest brightness level the display accepts
pub const MAX_BRIGHTNESS: u8 = 100;

/// Magic number to identify a stored configuration
pub const CONFIG_MAGIC: u32 = 0x455A_4C43; // "EZLC"

/// Current stored configuration version
pub const CONFIG_VERSION: u8 = 1;

/// Upper bound on the serialized size of [`StoredConfig`]
pub const MAX_CONFIG_SIZE: usize = 32;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A poll limit of zero would never poll
    ZeroPollLimit,
    /// Brightness above [`MAX_BRIGHTNESS`]
    BrightnessOutOfRange(u8),
    /// Serialization failed
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// Invalid magic or version
    InvalidFormat,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroPollLimit => write!(f, "Poll limit must be at least 1"),
            Self::BrightnessOutOfRange(level) => {
                write!(f, "Brightness {} exceeds {}", level, MAX_BRIGHTNESS)
            }
            Self::Serialize => write!(f, "Failed to serialize configuration"),
            Self::Deserialize => write!(f, "Failed to deserialize configuration"),
            Self::InvalidFormat => write!(f, "Invalid configuration header"),
        }
    }
}

/// Settings the driver applies and the limits on its blocking loops
///
/// A poll limit of `None` waits forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Touch protocol selected at init
    pub touch_protocol: TouchProtocol,
    /// Backlight brightness set at init (0-100); `None` leaves it alone
    pub brightness: Option<u8>,
    /// Maximum failed pings while waiting for the display to come up
    pub ready_polls: Option<u32>,
    /// Maximum no-ops while waiting for calibration to finish
    pub calibration_polls: Option<u32>,
    /// Maximum no-ops while waiting for a button press
    pub event_polls: Option<u32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            touch_protocol: TouchProtocol::EzButton,
            brightness: None,
            ready_polls: None,
            calibration_polls: None,
            event_polls: None,
        }
    }
}

impl DisplayConfig {
    /// Check the configuration for values the driver cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = self.brightness {
            if level > MAX_BRIGHTNESS {
                return Err(ConfigError::BrightnessOutOfRange(level));
            }
        }

        let limits = [self.ready_polls, self.calibration_polls, self.event_polls];
        if limits.contains(&Some(0)) {
            return Err(ConfigError::ZeroPollLimit);
        }

        Ok(())
    }

    /// Use the same limit for every blocking loop
    pub fn with_poll_limit(mut self, limit: u32) -> Self {
        self.ready_polls = Some(limit);
        self.calibration_polls = Some(limit);
        self.event_polls = Some(limit);
        self
    }
}

/// Persisted configuration with a header for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StoredConfig {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    /// The configuration itself
    pub config: DisplayConfig,
}

impl StoredConfig {
    pub const fn new(config: DisplayConfig) -> Self {
        Self {
            magic: CONFIG_MAGIC,
            version: CONFIG_VERSION,
            config,
        }
    }

    /// Check if the header matches this build
    pub fn is_valid(&self) -> bool {
        self.magic == CONFIG_MAGIC && self.version == CONFIG_VERSION
    }
}

#[cfg(feature = "serde")]
impl DisplayConfig {
    /// Serialize into `buffer`, returning the used prefix
    pub fn to_slice<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        self.validate()?;
        postcard::to_slice(&StoredConfig::new(*self), buffer).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize a blob written by [`DisplayConfig::to_slice`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let stored: StoredConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

        if !stored.is_valid() {
            return Err(ConfigError::InvalidFormat);
        }

        stored.config.validate()?;
        Ok(stored.config)
    }
}
