//! Value types shared by commands and events

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display width in pixels
pub const DISPLAY_WIDTH: u16 = 320;

/// Display height in pixels
pub const DISPLAY_HEIGHT: u16 = 240;

/// Highest button id the display accepts
pub const BUTTON_ID_MAX: u8 = 63;

/// ROM image index meaning "no image for this state"
pub const NO_IMAGE: u16 = 0xFFFF;

/// Visual state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum ButtonState {
    /// Released, drawn with the UP image
    #[default]
    Up = 1,
    /// Pressed, drawn with the DOWN image
    Down = 2,
    /// Drawn with the DISABLED image, ignores touches
    Disabled = 3,
    /// Removed from the screen
    Invisible = 4,
}

impl ButtonState {
    /// Parse a state from its wire value
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(ButtonState::Up),
            2 => Some(ButtonState::Down),
            3 => Some(ButtonState::Disabled),
            4 => Some(ButtonState::Invisible),
            _ => None,
        }
    }

    /// Convert to wire value
    pub const fn to_byte(self) -> u8 {
        self as u8
    }
}

/// Touch reporting convention, applies to the whole screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum TouchProtocol {
    /// Display switches button images itself and reports id + status
    #[default]
    EzButton = 1,
    /// Host switches button images; display reports id + status
    CuButton = 2,
    /// Display reports raw calibrated coordinates
    CalibratedXy = 64,
}

impl TouchProtocol {
    /// Parse a protocol from its wire value
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(TouchProtocol::EzButton),
            2 => Some(TouchProtocol::CuButton),
            64 => Some(TouchProtocol::CalibratedXy),
            _ => None,
        }
    }

    /// Convert to wire value
    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    /// Returns true if no-op replies carry button events in this mode
    pub fn reports_buttons(&self) -> bool {
        matches!(self, TouchProtocol::EzButton | TouchProtocol::CuButton)
    }
}

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xFF);
    pub const RED: Rgb = Rgb::new(0xFF, 0x00, 0x00);
    pub const GREEN: Rgb = Rgb::new(0x00, 0xFF, 0x00);
    pub const YELLOW: Rgb = Rgb::new(0xFF, 0xFF, 0x00);
    pub const ORANGE: Rgb = Rgb::new(0xFF, 0xA5, 0x00);
    pub const DARK_BLUE: Rgb = Rgb::new(0x00, 0x00, 0x8B);
    pub const VIOLET: Rgb = Rgb::new(0xEE, 0x82, 0xEE);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Wire order: red, green, blue
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Polygon vertex in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// ROM image indices for each button state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonImages {
    pub up: u16,
    pub down: u16,
    pub disabled: u16,
}

impl ButtonImages {
    pub const fn new(up: u16, down: u16, disabled: u16) -> Self {
        Self { up, down, disabled }
    }

    /// A button with no images (touch zone only)
    pub const fn none() -> Self {
        Self::new(NO_IMAGE, NO_IMAGE, NO_IMAGE)
    }
}

impl Default for ButtonImages {
    fn default() -> Self {
        Self::none()
    }
}

/// Everything the display needs to place a button
///
/// A button cannot be deleted; it stays defined until the display is reset
/// or the id is defined again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonDescriptor {
    /// Caller-assigned id, unique on screen (0-63)
    pub id: u8,
    /// State the button is drawn in initially
    pub state: ButtonState,
    /// Images per state
    pub images: ButtonImages,
    /// Top-left corner X
    pub x: u16,
    /// Top-left corner Y
    pub y: u16,
    /// Touch zone width
    pub width: u8,
    /// Touch zone height
    pub height: u8,
}

impl ButtonDescriptor {
    /// Check if the id is one the display accepts
    pub fn has_valid_id(&self) -> bool {
        self.id <= BUTTON_ID_MAX
    }
}
