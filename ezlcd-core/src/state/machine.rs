//! Press/release state machine
//!
//! A button press is complete once the display has reported DOWN for an id
//! and then UP for the same id. Everything in between is a function of the
//! current state and the next decoded event.

use ezlcd_protocol::{ButtonEvent, ButtonState, ButtonStatus};

/// Progress through one press/release cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressState {
    /// No press recorded yet
    #[default]
    Waiting,
    /// A DOWN was seen for this id
    Pressed { id: u8 },
    /// The pressed button was released; the cycle is complete
    Released { id: u8 },
}

impl PressState {
    /// Process an event and return the next state
    pub fn transition(self, event: ButtonEvent) -> Self {
        use PressState::*;

        match (self, event.status) {
            // Once released, the cycle is over
            (Released { .. }, _) => self,

            // A DOWN always (re)records the pressed id
            (_, ButtonStatus::Down) => Pressed { id: event.id },

            // Only the UP matching the recorded press completes it
            (Pressed { id }, ButtonStatus::Up) if id == event.id => Released { id },

            // Stray UP, idle and reserved bytes
            _ => self,
        }
    }

    /// Id of the completed press, if the cycle is over
    pub fn completed(&self) -> Option<u8> {
        match self {
            PressState::Released { id } => Some(*id),
            _ => None,
        }
    }

    /// Id of the button currently held down
    pub fn pressed(&self) -> Option<u8> {
        match self {
            PressState::Pressed { id } => Some(*id),
            _ => None,
        }
    }

    /// Start over, ready for the next press
    pub fn reset(&mut self) {
        *self = PressState::Waiting;
    }
}

/// Visual state to mirror onto the display for an event
///
/// Every DOWN and every UP is rendered, whether or not it changes the
/// machine's state.
pub fn render_state(event: ButtonEvent) -> Option<ButtonState> {
    match event.status {
        ButtonStatus::Down => Some(ButtonState::Down),
        ButtonStatus::Up => Some(ButtonState::Up),
        ButtonStatus::Idle | ButtonStatus::Reserved => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn down(id: u8) -> ButtonEvent {
        ButtonEvent::new(ButtonStatus::Down, id)
    }

    fn up(id: u8) -> ButtonEvent {
        ButtonEvent::new(ButtonStatus::Up, id)
    }

    fn run(events: &[ButtonEvent]) -> PressState {
        events
            .iter()
            .fold(PressState::Waiting, |state, event| state.transition(*event))
    }

    #[test]
    fn test_down_then_up_completes() {
        let state = run(&[down(5), up(5)]);
        assert_eq!(state, PressState::Released { id: 5 });
        assert_eq!(state.completed(), Some(5));
    }

    #[test]
    fn test_repeated_down_is_idempotent() {
        let pressed = run(&[down(5)]);
        assert_eq!(pressed.transition(down(5)), pressed);
        assert_eq!(run(&[down(5), down(5), up(5)]).completed(), Some(5));
    }

    #[test]
    fn test_leading_up_never_completes() {
        let state = run(&[up(5)]);
        assert_eq!(state, PressState::Waiting);
        assert_eq!(state.completed(), None);
    }

    #[test]
    fn test_up_for_other_id_is_ignored() {
        let state = run(&[down(5), up(7)]);
        assert_eq!(state, PressState::Pressed { id: 5 });
        assert_eq!(state.pressed(), Some(5));
    }

    #[test]
    fn test_down_for_new_id_replaces_press() {
        let state = run(&[down(5), down(9), up(5)]);
        assert_eq!(state, PressState::Pressed { id: 9 });
        assert_eq!(state.transition(up(9)).completed(), Some(9));
    }

    #[test]
    fn test_idle_and_reserved_bytes_keep_state() {
        let pressed = PressState::Pressed { id: 3 };
        assert_eq!(pressed.transition(ButtonEvent::from_byte(0x00)), pressed);
        assert_eq!(pressed.transition(ButtonEvent::from_byte(0xC3)), pressed);
        assert_eq!(
            PressState::Waiting.transition(ButtonEvent::from_byte(0x3F)),
            PressState::Waiting
        );
    }

    #[test]
    fn test_released_is_terminal_until_reset() {
        let mut state = run(&[down(1), up(1)]);
        assert_eq!(state.transition(down(2)), state);

        state.reset();
        assert_eq!(state, PressState::Waiting);
        assert_eq!(state.completed(), None);
    }

    #[test]
    fn test_render_state() {
        assert_eq!(render_state(down(4)), Some(ButtonState::Down));
        assert_eq!(render_state(up(4)), Some(ButtonState::Up));
        assert_eq!(render_state(ButtonEvent::from_byte(0x04)), None);
        assert_eq!(render_state(ButtonEvent::from_byte(0xC4)), None);
    }

    proptest! {
        #[test]
        fn prop_up_without_down_never_completes(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            // Strip every DOWN so no press can be recorded
            let events: Vec<ButtonEvent> = bytes
                .into_iter()
                .map(ButtonEvent::from_byte)
                .filter(|e| !e.is_down())
                .collect();
            prop_assert_eq!(run(&events), PressState::Waiting);
        }

        #[test]
        fn prop_completion_matches_last_down(ids in proptest::collection::vec(0u8..=63, 1..16)) {
            let mut events: Vec<ButtonEvent> = ids.iter().map(|&id| down(id)).collect();
            let last = *ids.last().unwrap();
            events.push(up(last));
            prop_assert_eq!(run(&events).completed(), Some(last));
        }
    }
}
