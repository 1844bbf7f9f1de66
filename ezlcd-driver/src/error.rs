//! Driver error type

use ezlcd_core::config::ConfigError;
use ezlcd_protocol::{CommandError, TouchProtocol};

/// Errors returned by [`EzLcd`](crate::EzLcd) operations
///
/// `E` is the transport's error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus failure
    Transport(E),
    /// Command could not be encoded; nothing was sent
    Command(CommandError),
    /// Configuration rejected before anything was sent
    Config(ConfigError),
    /// A bounded wait ran out of polls
    WouldBlock,
    /// Button polling while the display reports raw coordinates
    UnsupportedTouchProtocol(TouchProtocol),
}

impl<E> From<CommandError> for Error<E> {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}

impl<E> From<ConfigError> for Error<E> {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {:?}", e),
            Self::Command(e) => write!(f, "Command error: {}", e),
            Self::Config(e) => write!(f, "Config error: {}", e),
            Self::WouldBlock => write!(f, "Poll limit reached"),
            Self::UnsupportedTouchProtocol(protocol) => {
                write!(f, "Touch protocol {:?} does not report buttons", protocol)
            }
        }
    }
}
