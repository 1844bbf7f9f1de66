//! SPI transport
//!
//! Drives the display through an `embedded-hal` SPI bus and a dedicated,
//! active-low chip select pin. The chip select is asserted on the first byte
//! of a transfer and released only after the byte flagged
//! [`TransferEnd::Release`], which is what keeps a multi-byte command atomic
//! on the display side.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{Mode, SpiBus, MODE_0};

use crate::transport::{TransferEnd, Transport};

/// Fastest SCK the ezLCD+103 accepts
pub const MAX_FREQUENCY_HZ: u32 = 4_000_000;

/// SPI settings the display expects
///
/// The transport does not configure the bus itself; use these values when
/// setting up the chip HAL's SPI peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity and phase
    pub mode: Mode,
    /// Most significant bit first
    pub msb_first: bool,
}

impl SpiConfig {
    /// Mode 0, MSB first, 4 MHz
    pub const EZLCD: Self = Self {
        frequency: MAX_FREQUENCY_HZ,
        mode: MODE_0,
        msb_first: true,
    };

    /// Same settings with a different clock, capped at [`MAX_FREQUENCY_HZ`]
    pub const fn with_frequency(self, frequency: u32) -> Self {
        let frequency = if frequency > MAX_FREQUENCY_HZ {
            MAX_FREQUENCY_HZ
        } else {
            frequency
        };
        Self { frequency, ..self }
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::EZLCD
    }
}

/// Errors from the SPI transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiTransportError<SpiE, PinE> {
    /// SPI bus error
    Spi(SpiE),
    /// Chip select pin error
    ChipSelect(PinE),
}

/// [`Transport`] over an SPI bus and a chip select pin
///
/// The bus must already be configured per [`SpiConfig::EZLCD`] and the
/// chip select pin must idle high.
pub struct SpiTransport<SPI, CS> {
    spi: SPI,
    cs: CS,
    selected: bool,
}

impl<SPI, CS> SpiTransport<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    /// Create a transport from an SPI bus and a chip select pin
    pub const fn new(spi: SPI, cs: CS) -> Self {
        Self {
            spi,
            cs,
            selected: false,
        }
    }

    /// Check if a long transfer is currently holding the display selected
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Release the bus and pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    fn select(&mut self) -> Result<(), SpiTransportError<SPI::Error, CS::Error>> {
        if !self.selected {
            self.cs.set_low().map_err(SpiTransportError::ChipSelect)?;
            self.selected = true;
        }
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), SpiTransportError<SPI::Error, CS::Error>> {
        // SCK must be idle before the display sees CS go high
        self.spi.flush().map_err(SpiTransportError::Spi)?;
        self.cs.set_high().map_err(SpiTransportError::ChipSelect)?;
        self.selected = false;
        Ok(())
    }

    fn shift(&mut self, byte: u8) -> Result<u8, SpiTransportError<SPI::Error, CS::Error>> {
        let mut buf = [byte];
        self.spi
            .transfer_in_place(&mut buf)
            .map_err(SpiTransportError::Spi)?;
        Ok(buf[0])
    }
}

impl<SPI, CS> Transport for SpiTransport<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    type Error = SpiTransportError<SPI::Error, CS::Error>;

    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error> {
        self.exchange_long(byte, TransferEnd::Release)
    }

    fn exchange_long(&mut self, byte: u8, end: TransferEnd) -> Result<u8, Self::Error> {
        self.select()?;
        let response = match self.shift(byte) {
            Ok(response) => response,
            Err(e) => {
                // The frame is broken; the next command must start its own.
                // The shift error is the one reported.
                let _ = self.deselect();
                self.selected = false;
                return Err(e);
            }
        };
        if end.is_release() {
            self.deselect()?;
        }
        Ok(response)
    }
}
