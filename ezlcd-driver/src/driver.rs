//! The driver handle

use ezlcd_core::config::DisplayConfig;
use ezlcd_hal::{TransferEnd, Transport};
use ezlcd_protocol::opcodes::NOP;
use ezlcd_protocol::{Command, DisplayCommand, TouchProtocol};

use crate::error::Error;

/// ezLCD+103 driver
///
/// Owns the transport for its whole lifetime, so a multi-byte command can
/// never be interleaved with another exchange. Every operation takes
/// `&mut self` and blocks until its bytes are on the wire.
pub struct EzLcd<T: Transport> {
    pub(crate) transport: T,
    pub(crate) config: DisplayConfig,
    pub(crate) touch_protocol: Option<TouchProtocol>,
}

impl<T: Transport> EzLcd<T> {
    /// Create a driver with the default configuration
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, DisplayConfig::default())
    }

    /// Create a driver with the given configuration
    ///
    /// Nothing is sent until [`init`](Self::init) or another operation.
    pub fn with_config(transport: T, config: DisplayConfig) -> Self {
        Self {
            transport,
            config,
            touch_protocol: None,
        }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Replace the configuration; takes effect on the next operation
    pub fn set_config(&mut self, config: DisplayConfig) {
        self.config = config;
    }

    /// Touch protocol last sent to the display, if any
    ///
    /// The display's power-up default is never assumed.
    pub fn touch_protocol(&self) -> Option<TouchProtocol> {
        self.touch_protocol
    }

    /// Give the transport back
    pub fn release(self) -> T {
        self.transport
    }

    /// Encode and send one command
    pub fn send(&mut self, command: &DisplayCommand<'_>) -> Result<(), Error<T::Error>> {
        let command = command.to_command()?;
        self.transmit(&command)
    }

    /// Send an encoded command
    ///
    /// An opcode alone is a single exchange; anything longer is one long
    /// transfer released by its last byte.
    pub fn transmit(&mut self, command: &Command) -> Result<(), Error<T::Error>> {
        if command.is_opcode_only() {
            self.exchange(command.opcode)?;
            return Ok(());
        }

        let last = command.len() - 1;
        for (i, byte) in command.bytes().enumerate() {
            self.transport
                .exchange_long(byte, TransferEnd::from_last(i == last))
                .map_err(Error::Transport)?;
        }
        Ok(())
    }

    /// Clock out a no-op and return what the display answered
    pub fn nop(&mut self) -> Result<u8, Error<T::Error>> {
        self.exchange(NOP)
    }

    pub(crate) fn exchange(&mut self, byte: u8) -> Result<u8, Error<T::Error>> {
        self.transport.exchange(byte).map_err(Error::Transport)
    }

    /// Retry `attempt` until it yields a value, at most `limit` times
    ///
    /// `None` retries forever.
    pub(crate) fn poll_within<R>(
        &mut self,
        limit: Option<u32>,
        mut attempt: impl FnMut(&mut Self) -> Result<Option<R>, Error<T::Error>>,
    ) -> Result<R, Error<T::Error>> {
        let mut polls: u32 = 0;
        loop {
            if let Some(max) = limit {
                if polls >= max {
                    return Err(Error::WouldBlock);
                }
            }

            if let Some(value) = attempt(self)? {
                return Ok(value);
            }

            polls = polls.saturating_add(1);
        }
    }
}
