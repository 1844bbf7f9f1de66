//! Fonts and text boxes
//!
//! The display draws glyphs itself; the host only picks a font and places
//! characters. [`TextCursor`] keeps the layout state for a text box, so any
//! number of boxes can be written to independently.

use core::fmt;

use ezlcd_core::text::{TextBox, TextCursor};
use ezlcd_hal::Transport;
use ezlcd_protocol::DisplayCommand;

use crate::driver::EzLcd;
use crate::error::Error;

// Text box geometry is unsigned; positions on the wire are signed
fn coord(value: u16) -> i16 {
    i16::try_from(value).unwrap_or(i16::MAX)
}

impl<T: Transport> EzLcd<T> {
    pub fn set_bitmap_font(&mut self, font: u8) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetBitmapFont(font))
    }

    /// Select a TrueType font; a `width` of 0 keeps the aspect ratio
    pub fn set_true_type_font(
        &mut self,
        font: u8,
        height: u8,
        width: u8,
    ) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetTrueTypeFont {
            font,
            height,
            width,
        })
    }

    /// Offset added to character codes before TrueType glyph lookup
    pub fn set_ttf_unicode_base(&mut self, base: u16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetTtfUnicodeBase(base))
    }

    /// Draw one character at the current position
    pub fn put_char(&mut self, c: u8) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::PutChar(c))
    }

    /// Draw one character over a background-colored cell
    pub fn put_char_bg(&mut self, c: u8) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::PutCharBg(c))
    }

    /// Paint a text box and return a cursor at its top-left
    ///
    /// Leaves the drawing color set to the text color.
    pub fn open_text_box(&mut self, text_box: TextBox) -> Result<TextCursor, Error<T::Error>> {
        self.paint_text_box(&text_box)?;
        Ok(TextCursor::new(text_box))
    }

    /// Write one character into a text box
    ///
    /// `'\n'` moves to the next line. Text running off the bottom clears
    /// the box and continues at the top.
    pub fn print_char(&mut self, cursor: &mut TextCursor, c: u8) -> Result<(), Error<T::Error>> {
        let text_box = *cursor.text_box();
        self.set_color(text_box.foreground)?;

        let placement = cursor.place(c);
        if placement.repaint {
            self.paint_text_box(&text_box)?;
        }

        self.set_xy(coord(placement.x), coord(placement.y))?;
        if let Some(glyph) = placement.glyph {
            self.put_char(glyph)?;
        }
        Ok(())
    }

    /// Write a string into a text box, byte by byte
    pub fn print_str(&mut self, cursor: &mut TextCursor, s: &str) -> Result<(), Error<T::Error>> {
        for c in s.bytes() {
            self.print_char(cursor, c)?;
        }
        Ok(())
    }

    fn paint_text_box(&mut self, text_box: &TextBox) -> Result<(), Error<T::Error>> {
        let (x2, y2) = text_box.far_corner();
        self.set_color(text_box.background)?;
        self.set_xy(coord(text_box.x), coord(text_box.y))?;
        self.rect_fill(x2, y2)?;
        self.set_color(text_box.foreground)
    }
}

/// [`fmt::Write`] into a text box
///
/// `fmt::Write` cannot carry the driver error, so the first failure is
/// kept and can be read back with [`take_error`](Self::take_error).
pub struct TextWriter<'a, T: Transport> {
    lcd: &'a mut EzLcd<T>,
    cursor: &'a mut TextCursor,
    error: Option<Error<T::Error>>,
}

impl<'a, T: Transport> TextWriter<'a, T> {
    pub fn new(lcd: &'a mut EzLcd<T>, cursor: &'a mut TextCursor) -> Self {
        Self {
            lcd,
            cursor,
            error: None,
        }
    }

    /// The error that made the last write fail, if any
    pub fn take_error(&mut self) -> Option<Error<T::Error>> {
        self.error.take()
    }
}

impl<T: Transport> fmt::Write for TextWriter<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if let Err(e) = self.lcd.print_str(self.cursor, s) {
            self.error = Some(e);
            return Err(fmt::Error);
        }
        Ok(())
    }
}
