//! Opcodes and response sentinels
//!
//! Grouped the way the display's external command manual groups them.

/// No-op. Sent to clock a response byte out of the display.
pub const NOP: u8 = 0x00;

// Colors
pub const SET_COLOR: u8 = 0x31;
pub const SET_ALPHA: u8 = 0x20;
pub const SET_TRANSPARENT_COLOR: u8 = 0x5A;
pub const CLEAR_TRANSPARENT_COLOR: u8 = 0x5B;
pub const SET_BACKGROUND_COLOR: u8 = 0x32;
pub const REPLACE_COLOR: u8 = 0x5D;

// Current position
pub const SET_XY: u8 = 0x33;
pub const SET_X: u8 = 0x6E;
pub const SET_Y: u8 = 0x6F;
pub const SAVE_POSITION: u8 = 0x35;
pub const RESTORE_POSITION: u8 = 0x36;

// Curves
pub const CIRCLE: u8 = 0x89;
pub const CIRCLE_FILL: u8 = 0x99;
pub const ARC: u8 = 0x8F;
pub const PIE: u8 = 0x90;
pub const ELLIPSE: u8 = 0x8A;
pub const ELLIPSE_FILL: u8 = 0x8B;
pub const ELLIPSE_ARC: u8 = 0x8C;
pub const ELLIPSE_PIE: u8 = 0x8E;

// Fill
pub const CLEAR: u8 = 0x21;
pub const FILL: u8 = 0x9B;
pub const FILL_BOUND: u8 = 0x9C;

// Frames
pub const SET_DRAW_FRAME: u8 = 0x51;
pub const SET_DISPLAY_FRAME: u8 = 0x52;

// Images
pub const PUT_PICTURE_ROM: u8 = 0x59;
pub const PUT_PICTURE_SD: u8 = 0x70;

// Lines
pub const LINE: u8 = 0x3F;
pub const H_LINE: u8 = 0xA0;
pub const V_LINE: u8 = 0xA1;

// Pen
pub const SET_PEN_SIZE: u8 = 0x81;
pub const SET_PEN_HEIGHT: u8 = 0x82;

// Pixels
pub const PLOT: u8 = 0x26;
pub const PLOT_XY: u8 = 0x3E;

// Polygons
pub const RECT: u8 = 0xA4;
pub const RECT_FILL: u8 = 0xA5;
pub const POLYGON: u8 = 0xA6;
pub const SET_EDIT_RECTANGLE: u8 = 0x5C;

// Text
pub const SET_BITMAP_FONT: u8 = 0x2B;
pub const PUT_CHAR: u8 = 0x2C;
pub const PUT_CHAR_BG: u8 = 0x3C;
pub const SET_TRUE_TYPE_FONT: u8 = 0x91;
pub const SET_TTF_UNICODE_BASE: u8 = 0x93;

// System
pub const BACKLIGHT_ON: u8 = 0x22;
pub const BACKLIGHT_OFF: u8 = 0x23;
pub const SET_BRIGHTNESS: u8 = 0x80;
pub const PING: u8 = 0x83;

// Buttons
pub const SET_BUTTON_STATE: u8 = 0xB1;
pub const SET_TOUCH_PROTOCOL: u8 = 0xB2;
pub const ALL_BUTTONS_UP: u8 = 0xB3;
pub const DEACTIVATE_ALL_BUTTONS: u8 = 0xB4;
pub const DEFINE_BUTTON: u8 = 0xB5;
pub const CALIBRATE: u8 = 0xB6;

/// Bytes the display sends back in answer to a no-op
pub mod response {
    /// Reply to the no-op following [`PING`](super::PING) when ready
    pub const PING_READY: u8 = 0x38;
    /// Reply to a no-op once touch calibration has finished
    pub const CALIBRATION_COMPLETE: u8 = 0x32;
}
