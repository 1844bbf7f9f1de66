//! Liveness, backlight and init

use ezlcd_hal::Transport;
use ezlcd_protocol::opcodes::response::PING_READY;
use ezlcd_protocol::DisplayCommand;

use crate::driver::EzLcd;
use crate::error::Error;

impl<T: Transport> EzLcd<T> {
    /// Check whether the display is ready for commands
    ///
    /// Sends the ping opcode, then a no-op whose answer is the ready flag.
    pub fn ping(&mut self) -> Result<bool, Error<T::Error>> {
        self.send(&DisplayCommand::Ping)?;
        Ok(self.nop()? == PING_READY)
    }

    /// Ping until the display answers, at most `limit` times
    pub fn wait_until_ready(&mut self, limit: Option<u32>) -> Result<(), Error<T::Error>> {
        let result = self.poll_within(limit, |lcd| Ok(lcd.ping()?.then_some(())));

        #[cfg(feature = "defmt")]
        match &result {
            Ok(()) => defmt::info!("ezLCD ready"),
            Err(Error::WouldBlock) => defmt::warn!("ezLCD did not answer ping"),
            Err(_) => {}
        }

        result
    }

    /// Bring the display into the configured state
    ///
    /// Waits for the display, selects the touch protocol and applies the
    /// brightness, if one is configured.
    pub fn init(&mut self) -> Result<(), Error<T::Error>> {
        let config = self.config;
        config.validate()?;

        self.wait_until_ready(config.ready_polls)?;
        self.set_touch_protocol(config.touch_protocol)?;

        if let Some(level) = config.brightness {
            self.set_brightness(level)?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("ezLCD initialized: {}", config);

        Ok(())
    }

    pub fn backlight_on(&mut self) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::BacklightOn)
    }

    pub fn backlight_off(&mut self) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::BacklightOff)
    }

    /// Set backlight brightness (0-100)
    pub fn set_brightness(&mut self, level: u8) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetBrightness(level))
    }
}
