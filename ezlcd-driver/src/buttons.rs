//! Buttons and touch events
//!
//! The display tracks button touch zones and images itself. The host
//! defines buttons, picks the touch protocol, and polls with no-ops for
//! press and release reports.

use ezlcd_core::state::{render_state, PressState};
use ezlcd_hal::Transport;
use ezlcd_protocol::opcodes::response::CALIBRATION_COMPLETE;
use ezlcd_protocol::{ButtonDescriptor, ButtonEvent, ButtonState, DisplayCommand, TouchProtocol};

use crate::driver::EzLcd;
use crate::error::Error;

/// Result of [`EzLcd::define_button`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DefineOutcome {
    /// The button was sent to the display
    Defined,
    /// Id above 63; nothing was sent
    InvalidId,
}

impl<T: Transport> EzLcd<T> {
    /// Define a button
    ///
    /// Ids above [`BUTTON_ID_MAX`](ezlcd_protocol::BUTTON_ID_MAX) are
    /// skipped without touching the bus.
    pub fn define_button(
        &mut self,
        button: &ButtonDescriptor,
    ) -> Result<DefineOutcome, Error<T::Error>> {
        if !button.has_valid_id() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Skipping button define: id {} out of range", button.id);
            return Ok(DefineOutcome::InvalidId);
        }

        self.send(&DisplayCommand::DefineButton(*button))?;
        Ok(DefineOutcome::Defined)
    }

    /// Change a button's visual state
    pub fn set_button_state(&mut self, id: u8, state: ButtonState) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetButtonState { id, state })
    }

    /// Select how the display reports touches
    pub fn set_touch_protocol(&mut self, protocol: TouchProtocol) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetTouchProtocol(protocol))?;
        self.touch_protocol = Some(protocol);
        Ok(())
    }

    pub fn all_buttons_up(&mut self) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::AllButtonsUp)
    }

    /// Stop every button from responding; images stay on screen
    pub fn deactivate_all_buttons(&mut self) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::DeactivateAllButtons)
    }

    /// Run the touch calibration routine
    ///
    /// Waits up to [`DisplayConfig::calibration_polls`](ezlcd_core::config::DisplayConfig)
    /// no-ops for the display to report completion.
    pub fn calibrate(&mut self) -> Result<(), Error<T::Error>> {
        self.calibrate_within(self.config.calibration_polls)
    }

    /// Run the touch calibration routine, polling at most `limit` times
    pub fn calibrate_within(&mut self, limit: Option<u32>) -> Result<(), Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::info!("Starting touch calibration");

        self.send(&DisplayCommand::Calibrate)?;

        let result = self.poll_within(limit, |lcd| {
            Ok((lcd.nop()? == CALIBRATION_COMPLETE).then_some(()))
        });

        #[cfg(feature = "defmt")]
        match &result {
            Ok(()) => defmt::info!("Touch calibration complete"),
            Err(Error::WouldBlock) => defmt::warn!("Touch calibration did not finish"),
            Err(_) => {}
        }

        result
    }

    /// Poll once for a touch event and advance `state`
    ///
    /// Mirrors every DOWN and UP onto the button's visual state. Returns
    /// the id once `state` holds a completed press; call
    /// [`PressState::reset`] before waiting for the next one.
    pub fn poll_event(&mut self, state: &mut PressState) -> Result<Option<u8>, Error<T::Error>> {
        self.check_touch_protocol()?;
        self.poll_once(state)
    }

    /// Block until a button is pressed and released
    ///
    /// Waits up to [`DisplayConfig::event_polls`](ezlcd_core::config::DisplayConfig)
    /// no-ops.
    pub fn wait_for_event(&mut self) -> Result<u8, Error<T::Error>> {
        self.wait_for_event_within(self.config.event_polls)
    }

    /// Block until a button is pressed and released, polling at most
    /// `limit` times
    pub fn wait_for_event_within(&mut self, limit: Option<u32>) -> Result<u8, Error<T::Error>> {
        self.check_touch_protocol()?;

        let mut state = PressState::Waiting;
        let result = self.poll_within(limit, |lcd| lcd.poll_once(&mut state));

        #[cfg(feature = "defmt")]
        match &result {
            Ok(id) => defmt::debug!("Button {} pressed and released", id),
            Err(Error::WouldBlock) => defmt::warn!("No button press within poll limit"),
            Err(_) => {}
        }

        result
    }

    fn poll_once(&mut self, state: &mut PressState) -> Result<Option<u8>, Error<T::Error>> {
        let event = ButtonEvent::from_byte(self.nop()?);

        if let Some(visual) = render_state(event) {
            #[cfg(feature = "defmt")]
            defmt::trace!("Button {} -> {}", event.id, visual);
            self.set_button_state(event.id, visual)?;
        }

        *state = state.transition(event);
        Ok(state.completed())
    }

    fn check_touch_protocol(&self) -> Result<(), Error<T::Error>> {
        match self.touch_protocol {
            Some(protocol) if !protocol.reports_buttons() => {
                Err(Error::UnsupportedTouchProtocol(protocol))
            }
            Some(_) => Ok(()),
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Polling for buttons before a touch protocol was set");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTransport;
    use ezlcd_protocol::ButtonImages;
    use proptest::prelude::*;

    const DOWN: u8 = 0x40;
    const UP: u8 = 0x80;

    fn lcd(script: &[u8]) -> EzLcd<ScriptedTransport> {
        EzLcd::new(ScriptedTransport::new(script))
    }

    fn button(id: u8) -> ButtonDescriptor {
        ButtonDescriptor {
            id,
            state: ButtonState::Up,
            images: ButtonImages::new(1, 2, 3),
            x: 10,
            y: 20,
            width: 60,
            height: 30,
        }
    }

    #[test]
    fn test_define_button_sends_one_command() {
        let mut lcd = lcd(&[]);
        assert_eq!(lcd.define_button(&button(7)), Ok(DefineOutcome::Defined));

        let transport = lcd.release();
        assert_eq!(
            transport.transfers,
            vec![vec![0xB5, 7, 1, 0, 1, 0, 2, 0, 3, 0, 10, 0, 20, 60, 30]]
        );
        assert!(!transport.is_selected());
    }

    #[test]
    fn test_press_release_cycle() {
        let mut lcd = lcd(&[DOWN | 5, DOWN | 5, UP | 5]);
        lcd.set_touch_protocol(TouchProtocol::EzButton).unwrap();
        assert_eq!(lcd.wait_for_event(), Ok(5));

        let transport = lcd.release();
        assert_eq!(
            transport.transfers,
            vec![
                vec![0xB2, 1],
                vec![0x00],
                vec![0xB1, 5, 2],
                vec![0x00],
                vec![0xB1, 5, 2],
                vec![0x00],
                vec![0xB1, 5, 1],
            ]
        );
        assert_eq!(transport.nop_count(), 3);
    }

    #[test]
    fn test_press_release_cycle_for_id_zero() {
        // The id byte of the mirrored state change is 0x00 on the wire
        let mut lcd = lcd(&[DOWN, DOWN, UP]);
        assert_eq!(lcd.wait_for_event_within(Some(3)), Ok(0));

        let transport = lcd.release();
        assert_eq!(
            transport.transfers,
            vec![
                vec![0x00],
                vec![0xB1, 0, 2],
                vec![0x00],
                vec![0xB1, 0, 2],
                vec![0x00],
                vec![0xB1, 0, 1],
            ]
        );
        assert_eq!(transport.nop_count(), 3);
    }

    #[test]
    fn test_leading_up_does_not_complete() {
        let mut lcd = lcd(&[UP | 5]);
        assert_eq!(lcd.wait_for_event_within(Some(5)), Err(Error::WouldBlock));

        let transport = lcd.release();
        assert_eq!(transport.nop_count(), 5);
        // The stray UP is still mirrored
        assert_eq!(transport.commands(), vec![vec![0xB1, 5, 1]]);
    }

    #[test]
    fn test_up_after_leading_up_completes_real_press() {
        let mut lcd = lcd(&[UP | 2, 0x00, DOWN | 9, UP | 9]);
        assert_eq!(lcd.wait_for_event_within(Some(10)), Ok(9));
        assert_eq!(lcd.release().nop_count(), 4);
    }

    #[test]
    fn test_configured_event_limit() {
        let config = ezlcd_core::config::DisplayConfig::default().with_poll_limit(2);
        let mut lcd = EzLcd::with_config(ScriptedTransport::new(&[DOWN | 1]), config);
        assert_eq!(lcd.wait_for_event(), Err(Error::WouldBlock));
    }

    #[test]
    fn test_calibrated_xy_refuses_to_poll() {
        let mut lcd = lcd(&[DOWN | 1, UP | 1]);
        lcd.set_touch_protocol(TouchProtocol::CalibratedXy).unwrap();
        assert_eq!(
            lcd.wait_for_event(),
            Err(Error::UnsupportedTouchProtocol(TouchProtocol::CalibratedXy))
        );

        let mut state = PressState::Waiting;
        assert!(lcd.poll_event(&mut state).is_err());

        let transport = lcd.release();
        assert_eq!(transport.transfers, vec![vec![0xB2, 64]]);
    }

    #[test]
    fn test_poll_event_steps() {
        let mut lcd = lcd(&[0x00, DOWN | 3, UP | 3]);
        let mut state = PressState::Waiting;

        assert_eq!(lcd.poll_event(&mut state), Ok(None));
        assert_eq!(state, PressState::Waiting);
        assert_eq!(lcd.poll_event(&mut state), Ok(None));
        assert_eq!(state, PressState::Pressed { id: 3 });
        assert_eq!(lcd.poll_event(&mut state), Ok(Some(3)));

        state.reset();
        assert_eq!(lcd.poll_event(&mut state), Ok(None));
    }

    #[test]
    fn test_calibrate_waits_for_completion() {
        let mut lcd = lcd(&[0x00, 0x00, 0x32]);
        lcd.calibrate().unwrap();

        let transport = lcd.release();
        assert_eq!(
            transport.transfers,
            vec![vec![0xB6], vec![0x00], vec![0x00], vec![0x00]]
        );
        assert_eq!(transport.single_exchanges, 4);
    }

    #[test]
    fn test_calibrate_within_limit() {
        let mut lcd = lcd(&[]);
        assert_eq!(lcd.calibrate_within(Some(2)), Err(Error::WouldBlock));
        assert_eq!(lcd.release().nop_count(), 2);
    }

    #[test]
    fn test_single_opcode_button_commands() {
        let mut lcd = lcd(&[]);
        lcd.all_buttons_up().unwrap();
        lcd.deactivate_all_buttons().unwrap();
        lcd.set_button_state(63, ButtonState::Invisible).unwrap();

        let transport = lcd.release();
        assert_eq!(
            transport.transfers,
            vec![vec![0xB3], vec![0xB4], vec![0xB1, 63, 4]]
        );
    }

    #[test]
    fn test_set_touch_protocol_records_mode() {
        let mut lcd = lcd(&[]);
        lcd.set_touch_protocol(TouchProtocol::CuButton).unwrap();
        assert_eq!(lcd.touch_protocol(), Some(TouchProtocol::CuButton));
    }

    proptest! {
        #[test]
        fn prop_valid_ids_send_exactly_one_command(id in 0u8..=63) {
            let mut lcd = lcd(&[]);
            prop_assert_eq!(lcd.define_button(&button(id)), Ok(DefineOutcome::Defined));

            let transport = lcd.release();
            prop_assert_eq!(transport.transfers.len(), 1);
            prop_assert_eq!(transport.transfers[0].len(), 15);
            prop_assert_eq!(transport.transfers[0][1], id);
        }

        #[test]
        fn prop_invalid_ids_send_nothing(id in 64u8..=255) {
            let mut lcd = lcd(&[]);
            prop_assert_eq!(lcd.define_button(&button(id)), Ok(DefineOutcome::InvalidId));
            prop_assert!(lcd.release().transfers.is_empty());
        }

        #[test]
        fn prop_completed_id_is_masked(id in 0u8..=63) {
            let mut lcd = lcd(&[DOWN | id, UP | id]);
            prop_assert_eq!(lcd.wait_for_event_within(Some(2)), Ok(id));
        }
    }
}
