//! Touch events reported by the display
//!
//! With the ezButton or cuButton touch protocol selected, every byte the
//! display returns for a no-op is a button report: the top two bits carry
//! the status, the low six bits the button id.

/// Mask for the status bits of an event byte
pub const STATUS_MASK: u8 = 0xC0;

/// Mask for the id bits of an event byte
pub const ID_MASK: u8 = 0x3F;

const STATUS_SHIFT: u8 = 6;

// Wire format values of the status field
const STATUS_IDLE: u8 = 0b00;
const STATUS_DOWN: u8 = 0b01;
const STATUS_UP: u8 = 0b10;
const STATUS_RESERVED: u8 = 0b11;

/// Status field of an event byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonStatus {
    /// Nothing to report
    Idle,
    /// Button is being pressed
    Down,
    /// Button was released
    Up,
    /// Not used by the button protocols
    Reserved,
}

impl ButtonStatus {
    /// Parse the two status bits (already shifted down)
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            STATUS_IDLE => ButtonStatus::Idle,
            STATUS_DOWN => ButtonStatus::Down,
            STATUS_UP => ButtonStatus::Up,
            _ => ButtonStatus::Reserved,
        }
    }

    /// Convert to the two status bits (not shifted)
    pub const fn to_bits(self) -> u8 {
        match self {
            ButtonStatus::Idle => STATUS_IDLE,
            ButtonStatus::Down => STATUS_DOWN,
            ButtonStatus::Up => STATUS_UP,
            ButtonStatus::Reserved => STATUS_RESERVED,
        }
    }
}

/// One decoded event byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    /// Reported status
    pub status: ButtonStatus,
    /// Button id (0-63)
    pub id: u8,
}

impl ButtonEvent {
    /// Create an event; the id is truncated to six bits
    pub const fn new(status: ButtonStatus, id: u8) -> Self {
        Self {
            status,
            id: id & ID_MASK,
        }
    }

    /// Decode an event byte
    ///
    /// Every byte decodes; there is no invalid input.
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            status: ButtonStatus::from_bits((byte & STATUS_MASK) >> STATUS_SHIFT),
            id: byte & ID_MASK,
        }
    }

    /// Encode to the wire byte (for testing or simulation)
    pub const fn to_byte(self) -> u8 {
        (self.status.to_bits() << STATUS_SHIFT) | (self.id & ID_MASK)
    }

    /// Returns true if this reports a press
    pub fn is_down(&self) -> bool {
        self.status == ButtonStatus::Down
    }

    /// Returns true if this reports a release
    pub fn is_up(&self) -> bool {
        self.status == ButtonStatus::Up
    }
}

impl From<u8> for ButtonEvent {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}
