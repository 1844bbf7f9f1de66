//! Typed commands for the ezLCD+103
//!
//! Every variant maps to exactly one opcode with a fixed parameter layout.
//! Encoding never fails except for the two variable-length commands
//! (polygon and SD card image), which are bounds-checked.

use crate::command::{Command, CommandError};
use crate::opcodes as op;
use crate::types::{ButtonDescriptor, ButtonState, Point, Rgb, TouchProtocol};

/// Most vertices a polygon command may carry (the count is one byte)
pub const MAX_POLYGON_VERTICES: usize = u8::MAX as usize;

/// Longest SD card image path, without the NUL terminator
pub const MAX_PATH_LEN: usize = u8::MAX as usize;

/// Commands from the host to the display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayCommand<'a> {
    // Buttons
    /// Place a button on the current draw frame
    DefineButton(ButtonDescriptor),
    /// Change the visual state of a defined button
    SetButtonState { id: u8, state: ButtonState },
    /// Select the touch reporting convention
    SetTouchProtocol(TouchProtocol),
    /// Start the built-in touch calibration routine
    Calibrate,
    /// Put every button in its UP state
    AllButtonsUp,
    /// Stop all buttons from responding; images stay on screen
    DeactivateAllButtons,

    // System
    /// Readiness probe; answered on the following no-op
    Ping,
    BacklightOn,
    BacklightOff,
    SetBrightness(u8),

    // Colors
    SetColor(Rgb),
    SetAlpha(u8),
    SetTransparentColor(Rgb),
    ClearTransparentColor,
    SetBackgroundColor(Rgb),
    ReplaceColor { from: Rgb, to: Rgb },

    // Current position
    SetXy { x: i16, y: i16 },
    SetX(i16),
    SetY(i16),
    SavePosition(u8),
    RestorePosition(u8),

    // Curves, centered on the current position
    Circle { radius: u16 },
    CircleFill { radius: u16 },
    Arc { radius: u16, start: u16, end: u16 },
    Pie { radius: u16, start: u16, end: u16 },
    Ellipse { semi_major: u16, semi_minor: u16 },
    EllipseFill { semi_major: u16, semi_minor: u16 },
    EllipseArc { semi_major: u16, semi_minor: u16, start: u16, end: u16 },
    EllipsePie { semi_major: u16, semi_minor: u16, start: u16, end: u16 },

    // Fill
    /// Clear the draw frame to the background color
    Clear,
    /// Flood fill from the current position
    Fill,
    /// Flood fill up to a border of the given color
    FillBound(Rgb),

    // Frames
    SetDisplayFrame(u8),
    SetDrawFrame(u8),

    // Images
    PutPictureRom(u16),
    /// Draw an image from the SD card by file path
    PutPictureSd(&'a str),

    // Lines, from the current position
    Line { x: i16, y: i16 },
    HLine(i16),
    VLine(i16),

    // Pen
    SetPenSize(u8),
    SetPenHeight(u8),

    // Pixels
    PlotPixel,
    PlotPixelXy { x: u16, y: u16 },

    // Polygons
    Rect { x2: u16, y2: u16 },
    RectFill { x2: u16, y2: u16 },
    /// Polygon starting at the current position through the given vertices
    Polygon(&'a [Point]),
    SetEditRectangle { x: i16, y: i16, width: u16, height: u16 },

    // Text
    SetBitmapFont(u8),
    /// Select a TrueType font; a width of 0 scales with the height
    SetTrueTypeFont { font: u8, height: u8, width: u8 },
    SetTtfUnicodeBase(u16),
    PutChar(u8),
    PutCharBg(u8),
}

impl<'a> DisplayCommand<'a> {
    /// The opcode this command is sent with
    pub fn opcode(&self) -> u8 {
        match self {
            DisplayCommand::DefineButton(_) => op::DEFINE_BUTTON,
            DisplayCommand::SetButtonState { .. } => op::SET_BUTTON_STATE,
            DisplayCommand::SetTouchProtocol(_) => op::SET_TOUCH_PROTOCOL,
            DisplayCommand::Calibrate => op::CALIBRATE,
            DisplayCommand::AllButtonsUp => op::ALL_BUTTONS_UP,
            DisplayCommand::DeactivateAllButtons => op::DEACTIVATE_ALL_BUTTONS,
            DisplayCommand::Ping => op::PING,
            DisplayCommand::BacklightOn => op::BACKLIGHT_ON,
            DisplayCommand::BacklightOff => op::BACKLIGHT_OFF,
            DisplayCommand::SetBrightness(_) => op::SET_BRIGHTNESS,
            DisplayCommand::SetColor(_) => op::SET_COLOR,
            DisplayCommand::SetAlpha(_) => op::SET_ALPHA,
            DisplayCommand::SetTransparentColor(_) => op::SET_TRANSPARENT_COLOR,
            DisplayCommand::ClearTransparentColor => op::CLEAR_TRANSPARENT_COLOR,
            DisplayCommand::SetBackgroundColor(_) => op::SET_BACKGROUND_COLOR,
            DisplayCommand::ReplaceColor { .. } => op::REPLACE_COLOR,
            DisplayCommand::SetXy { .. } => op::SET_XY,
            DisplayCommand::SetX(_) => op::SET_X,
            DisplayCommand::SetY(_) => op::SET_Y,
            DisplayCommand::SavePosition(_) => op::SAVE_POSITION,
            DisplayCommand::RestorePosition(_) => op::RESTORE_POSITION,
            DisplayCommand::Circle { .. } => op::CIRCLE,
            DisplayCommand::CircleFill { .. } => op::CIRCLE_FILL,
            DisplayCommand::Arc { .. } => op::ARC,
            DisplayCommand::Pie { .. } => op::PIE,
            DisplayCommand::Ellipse { .. } => op::ELLIPSE,
            DisplayCommand::EllipseFill { .. } => op::ELLIPSE_FILL,
            DisplayCommand::EllipseArc { .. } => op::ELLIPSE_ARC,
            DisplayCommand::EllipsePie { .. } => op::ELLIPSE_PIE,
            DisplayCommand::Clear => op::CLEAR,
            DisplayCommand::Fill => op::FILL,
            DisplayCommand::FillBound(_) => op::FILL_BOUND,
            DisplayCommand::SetDisplayFrame(_) => op::SET_DISPLAY_FRAME,
            DisplayCommand::SetDrawFrame(_) => op::SET_DRAW_FRAME,
            DisplayCommand::PutPictureRom(_) => op::PUT_PICTURE_ROM,
            DisplayCommand::PutPictureSd(_) => op::PUT_PICTURE_SD,
            DisplayCommand::Line { .. } => op::LINE,
            DisplayCommand::HLine(_) => op::H_LINE,
            DisplayCommand::VLine(_) => op::V_LINE,
            DisplayCommand::SetPenSize(_) => op::SET_PEN_SIZE,
            DisplayCommand::SetPenHeight(_) => op::SET_PEN_HEIGHT,
            DisplayCommand::PlotPixel => op::PLOT,
            DisplayCommand::PlotPixelXy { .. } => op::PLOT_XY,
            DisplayCommand::Rect { .. } => op::RECT,
            DisplayCommand::RectFill { .. } => op::RECT_FILL,
            DisplayCommand::Polygon(_) => op::POLYGON,
            DisplayCommand::SetEditRectangle { .. } => op::SET_EDIT_RECTANGLE,
            DisplayCommand::SetBitmapFont(_) => op::SET_BITMAP_FONT,
            DisplayCommand::SetTrueTypeFont { .. } => op::SET_TRUE_TYPE_FONT,
            DisplayCommand::SetTtfUnicodeBase(_) => op::SET_TTF_UNICODE_BASE,
            DisplayCommand::PutChar(_) => op::PUT_CHAR,
            DisplayCommand::PutCharBg(_) => op::PUT_CHAR_BG,
        }
    }

    /// Encode this command with its parameters
    pub fn to_command(&self) -> Result<Command, CommandError> {
        let mut cmd = Command::opcode_only(self.opcode());

        match self {
            DisplayCommand::DefineButton(button) => {
                // Payload: [id][state][up][down][disabled][x][y][w][h]
                cmd.push_u8(button.id)?
                    .push_u8(button.state.to_byte())?
                    .push_u16(button.images.up)?
                    .push_u16(button.images.down)?
                    .push_u16(button.images.disabled)?
                    .push_u16(button.x)?
                    .push_u16(button.y)?
                    .push_u8(button.width)?
                    .push_u8(button.height)?;
            }
            DisplayCommand::SetButtonState { id, state } => {
                cmd.push_u8(*id)?.push_u8(state.to_byte())?;
            }
            DisplayCommand::SetTouchProtocol(protocol) => {
                cmd.push_u8(protocol.to_byte())?;
            }
            DisplayCommand::SetBrightness(value)
            | DisplayCommand::SetAlpha(value)
            | DisplayCommand::SavePosition(value)
            | DisplayCommand::RestorePosition(value)
            | DisplayCommand::SetDisplayFrame(value)
            | DisplayCommand::SetDrawFrame(value)
            | DisplayCommand::SetPenSize(value)
            | DisplayCommand::SetPenHeight(value)
            | DisplayCommand::SetBitmapFont(value)
            | DisplayCommand::PutChar(value)
            | DisplayCommand::PutCharBg(value) => {
                cmd.push_u8(*value)?;
            }
            DisplayCommand::SetColor(color)
            | DisplayCommand::SetTransparentColor(color)
            | DisplayCommand::SetBackgroundColor(color)
            | DisplayCommand::FillBound(color) => {
                cmd.push_bytes(&color.to_bytes())?;
            }
            DisplayCommand::ReplaceColor { from, to } => {
                cmd.push_bytes(&from.to_bytes())?.push_bytes(&to.to_bytes())?;
            }
            DisplayCommand::SetXy { x, y } | DisplayCommand::Line { x, y } => {
                cmd.push_i16(*x)?.push_i16(*y)?;
            }
            DisplayCommand::SetX(value)
            | DisplayCommand::SetY(value)
            | DisplayCommand::HLine(value)
            | DisplayCommand::VLine(value) => {
                cmd.push_i16(*value)?;
            }
            DisplayCommand::Circle { radius } | DisplayCommand::CircleFill { radius } => {
                cmd.push_u16(*radius)?;
            }
            DisplayCommand::Arc { radius, start, end } | DisplayCommand::Pie { radius, start, end } => {
                cmd.push_u16(*radius)?.push_u16(*start)?.push_u16(*end)?;
            }
            DisplayCommand::Ellipse {
                semi_major,
                semi_minor,
            }
            | DisplayCommand::EllipseFill {
                semi_major,
                semi_minor,
            } => {
                cmd.push_u16(*semi_major)?.push_u16(*semi_minor)?;
            }
            DisplayCommand::EllipseArc {
                semi_major,
                semi_minor,
                start,
                end,
            }
            | DisplayCommand::EllipsePie {
                semi_major,
                semi_minor,
                start,
                end,
            } => {
                cmd.push_u16(*semi_major)?
                    .push_u16(*semi_minor)?
                    .push_u16(*start)?
                    .push_u16(*end)?;
            }
            DisplayCommand::PutPictureRom(index) | DisplayCommand::SetTtfUnicodeBase(index) => {
                cmd.push_u16(*index)?;
            }
            DisplayCommand::PutPictureSd(path) => {
                // Payload: [path bytes...][0x00]
                let bytes = path.as_bytes();
                if bytes.is_empty() || bytes.len() > MAX_PATH_LEN || bytes.contains(&0) {
                    return Err(CommandError::InvalidPath);
                }
                cmd.push_bytes(bytes)?.push_u8(0x00)?;
            }
            DisplayCommand::PlotPixelXy { x, y } => {
                cmd.push_u16(*x)?.push_u16(*y)?;
            }
            DisplayCommand::Rect { x2, y2 } | DisplayCommand::RectFill { x2, y2 } => {
                cmd.push_u16(*x2)?.push_u16(*y2)?;
            }
            DisplayCommand::Polygon(vertices) => {
                // Payload: [n][x0][y0]...[xn-1][yn-1]
                if vertices.is_empty() || vertices.len() > MAX_POLYGON_VERTICES {
                    return Err(CommandError::InvalidVertexCount);
                }
                cmd.push_u8(vertices.len() as u8)?;
                for vertex in vertices.iter() {
                    cmd.push_u16(vertex.x)?.push_u16(vertex.y)?;
                }
            }
            DisplayCommand::SetEditRectangle {
                x,
                y,
                width,
                height,
            } => {
                cmd.push_i16(*x)?
                    .push_i16(*y)?
                    .push_u16(*width)?
                    .push_u16(*height)?;
            }
            DisplayCommand::SetTrueTypeFont {
                font,
                height,
                width,
            } => {
                cmd.push_u8(*font)?.push_u8(*height)?.push_u8(*width)?;
            }
            DisplayCommand::Calibrate
            | DisplayCommand::AllButtonsUp
            | DisplayCommand::DeactivateAllButtons
            | DisplayCommand::Ping
            | DisplayCommand::BacklightOn
            | DisplayCommand::BacklightOff
            | DisplayCommand::ClearTransparentColor
            | DisplayCommand::Clear
            | DisplayCommand::Fill
            | DisplayCommand::PlotPixel => {}
        }

        Ok(cmd)
    }
}
