//! Byte transport abstraction
//!
//! The ezLCD+103 is a polled SPI slave: every byte the host clocks out is
//! answered by one byte clocked in. There is no interrupt line, so the host
//! learns about touches only by sending no-op bytes and reading the reply.

/// What happens to the chip select after a byte of a long transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferEnd {
    /// Keep the display selected, more bytes of this command follow
    Hold,
    /// Deselect the display after this byte
    Release,
}

impl TransferEnd {
    /// `Release` for the last byte of a command, `Hold` otherwise
    pub const fn from_last(last: bool) -> Self {
        if last {
            TransferEnd::Release
        } else {
            TransferEnd::Hold
        }
    }

    /// Check if the transfer ends with this byte
    pub const fn is_release(self) -> bool {
        matches!(self, TransferEnd::Release)
    }
}

/// Duplex byte exchange with the display
///
/// Implementations block until the byte has been clocked; there is no
/// timeout and no retry at this level.
///
/// A long transfer is a run of [`exchange_long`](Transport::exchange_long)
/// calls with [`TransferEnd::Hold`] closed by one with
/// [`TransferEnd::Release`]. Callers must not start any other exchange while
/// a long transfer is open.
pub trait Transport {
    /// Error type for bus operations
    type Error;

    /// Select the display, exchange one byte, deselect
    ///
    /// Returns the byte clocked in while `byte` was clocked out.
    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error>;

    /// Exchange one byte as part of a long transfer
    ///
    /// Selects the display if it is not selected yet. With
    /// [`TransferEnd::Release`] the display is deselected afterwards.
    fn exchange_long(&mut self, byte: u8, end: TransferEnd) -> Result<u8, Self::Error>;

    /// Send a complete command as one long transfer
    ///
    /// The last byte releases the transport. Responses are discarded.
    /// An empty slice sends nothing.
    fn write_long(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        let last = bytes.len().saturating_sub(1);
        for (i, &byte) in bytes.iter().enumerate() {
            self.exchange_long(byte, TransferEnd::from_last(i == last))?;
        }
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error> {
        T::exchange(self, byte)
    }

    fn exchange_long(&mut self, byte: u8, end: TransferEnd) -> Result<u8, Self::Error> {
        T::exchange_long(self, byte, end)
    }

    fn write_long(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        T::write_long(self, bytes)
    }
}
