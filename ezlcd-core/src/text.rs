//! Text box cursor
//!
//! Lays characters out inside a rectangular text box: wraps at the right
//! edge or on `'\n'`, and clears the box and starts over at the top once
//! the next line would run past the bottom. Placement is pure; the driver
//! turns each [`Placement`] into drawing commands.

use ezlcd_protocol::Rgb;

/// Vertical gap between lines, in pixels
pub const LINE_SPACING: u16 = 2;

/// Horizontal gap between characters, in pixels
pub const CHAR_SPACING: u16 = 1;

/// Geometry and colors of a text box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextBox {
    /// Top-left corner X
    pub x: u16,
    /// Top-left corner Y
    pub y: u16,
    pub width: u16,
    pub height: u16,
    /// Padding between the box edge and the text, left and right
    pub bezel_width: u8,
    /// Padding between the box edge and the text, top and bottom
    pub bezel_height: u8,
    /// Character cell size of the selected font
    pub font_width: u8,
    pub font_height: u8,
    /// Box fill color
    pub background: Rgb,
    /// Text color
    pub foreground: Rgb,
}

impl TextBox {
    /// Where the first character of a line goes
    pub fn line_start(&self) -> u16 {
        self.x.saturating_add(self.bezel_width as u16)
    }

    /// Where the first line goes
    pub fn top(&self) -> u16 {
        self.y.saturating_add(self.bezel_height as u16)
    }

    /// Bottom-right corner, as passed to a filled rectangle
    pub fn far_corner(&self) -> (u16, u16) {
        (
            self.x.saturating_add(self.width),
            self.y.saturating_add(self.height),
        )
    }

    // A character starting at or past this X wraps to the next line
    fn wrap_x(&self) -> u16 {
        self.x
            .saturating_add(self.width)
            .saturating_add(self.bezel_width as u16)
            .saturating_sub(self.font_width as u16)
    }

    // A line whose bottom reaches this Y does not fit
    fn bottom_limit(&self) -> u16 {
        self.y
            .saturating_add(self.height)
            .saturating_sub(self.bezel_height as u16)
    }
}

/// What to draw for one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Placement {
    /// Repaint the box before drawing (the text ran off the bottom)
    pub repaint: bool,
    /// Position to move to
    pub x: u16,
    pub y: u16,
    /// Byte to draw at that position; `None` for a newline
    pub glyph: Option<u8>,
}

/// Current writing position inside a [`TextBox`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextCursor {
    text_box: TextBox,
    x: u16,
    y: u16,
}

impl TextCursor {
    /// Cursor at the top-left of the text area
    pub fn new(text_box: TextBox) -> Self {
        Self {
            x: text_box.line_start(),
            y: text_box.top(),
            text_box,
        }
    }

    pub fn text_box(&self) -> &TextBox {
        &self.text_box
    }

    /// Position the next character will be drawn at, before wrapping
    pub fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// Move back to the top-left of the text area
    pub fn home(&mut self) {
        self.x = self.text_box.line_start();
        self.y = self.text_box.top();
    }

    /// Lay out one character and advance the cursor
    pub fn place(&mut self, c: u8) -> Placement {
        let tb = self.text_box;

        if c == b'\n' || self.x >= tb.wrap_x() {
            self.y = self
                .y
                .saturating_add(tb.font_height as u16)
                .saturating_add(LINE_SPACING);
            self.x = tb.line_start();
        }

        let repaint = self.y.saturating_add(tb.font_height as u16) >= tb.bottom_limit();
        if repaint {
            self.y = tb.top();
        }

        let placement = Placement {
            repaint,
            x: self.x,
            y: self.y,
            glyph: (c != b'\n').then_some(c),
        };

        if c != b'\n' {
            self.x = self
                .x
                .saturating_add(tb.font_width as u16)
                .saturating_add(CHAR_SPACING);
        }

        placement
    }
}
