//! Drawing primitives
//!
//! Thin wrappers over [`DisplayCommand`]. Most primitives draw relative to
//! the display's current position, which only the display knows; move it
//! with [`set_xy`](EzLcd::set_xy) first.

use ezlcd_hal::Transport;
use ezlcd_protocol::{DisplayCommand, Point, Rgb};

use crate::driver::EzLcd;
use crate::error::Error;

impl<T: Transport> EzLcd<T> {
    // Colors

    /// Set the drawing color
    pub fn set_color(&mut self, color: Rgb) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetColor(color))
    }

    /// Set the alpha blending level (0 transparent, 255 opaque)
    pub fn set_alpha(&mut self, alpha: u8) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetAlpha(alpha))
    }

    /// Pixels of this color in images are not drawn
    pub fn set_transparent_color(&mut self, color: Rgb) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetTransparentColor(color))
    }

    pub fn clear_transparent_color(&mut self) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::ClearTransparentColor)
    }

    pub fn set_background_color(&mut self, color: Rgb) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetBackgroundColor(color))
    }

    /// Repaint every pixel of `from` in the edit rectangle with `to`
    pub fn replace_color(&mut self, from: Rgb, to: Rgb) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::ReplaceColor { from, to })
    }

    // Current position

    pub fn set_xy(&mut self, x: i16, y: i16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetXy { x, y })
    }

    pub fn set_x(&mut self, x: i16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetX(x))
    }

    pub fn set_y(&mut self, y: i16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetY(y))
    }

    /// Store the current position in a display-side slot
    pub fn save_position(&mut self, slot: u8) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SavePosition(slot))
    }

    pub fn restore_position(&mut self, slot: u8) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::RestorePosition(slot))
    }

    // Curves

    pub fn circle(&mut self, radius: u16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::Circle { radius })
    }

    pub fn circle_fill(&mut self, radius: u16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::CircleFill { radius })
    }

    /// Arc between two angles, in degrees
    pub fn arc(&mut self, radius: u16, start: u16, end: u16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::Arc { radius, start, end })
    }

    pub fn pie(&mut self, radius: u16, start: u16, end: u16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::Pie { radius, start, end })
    }

    pub fn ellipse(&mut self, semi_major: u16, semi_minor: u16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::Ellipse {
            semi_major,
            semi_minor,
        })
    }

    pub fn ellipse_fill(
        &mut self,
        semi_major: u16,
        semi_minor: u16,
    ) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::EllipseFill {
            semi_major,
            semi_minor,
        })
    }

    pub fn ellipse_arc(
        &mut self,
        semi_major: u16,
        semi_minor: u16,
        start: u16,
        end: u16,
    ) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::EllipseArc {
            semi_major,
            semi_minor,
            start,
            end,
        })
    }

    pub fn ellipse_pie(
        &mut self,
        semi_major: u16,
        semi_minor: u16,
        start: u16,
        end: u16,
    ) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::EllipsePie {
            semi_major,
            semi_minor,
            start,
            end,
        })
    }

    // Fill

    /// Clear the draw frame to the background color
    pub fn clear(&mut self) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::Clear)
    }

    /// Flood fill from the current position
    pub fn fill(&mut self) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::Fill)
    }

    /// Flood fill from the current position up to a `border` colored edge
    pub fn fill_bound(&mut self, border: Rgb) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::FillBound(border))
    }

    // Frames

    /// Select the frame shown on screen
    pub fn set_display_frame(&mut self, frame: u8) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetDisplayFrame(frame))
    }

    /// Select the frame drawing commands write to
    pub fn set_draw_frame(&mut self, frame: u8) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetDrawFrame(frame))
    }

    // Images

    /// Draw an image stored in the display's ROM
    pub fn put_picture_rom(&mut self, index: u16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::PutPictureRom(index))
    }

    /// Draw an image from the SD card
    ///
    /// Fails with [`CommandError::InvalidPath`](ezlcd_protocol::CommandError)
    /// for an empty path, a path over 255 bytes, or one containing NUL.
    pub fn put_picture_sd(&mut self, path: &str) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::PutPictureSd(path))
    }

    // Lines

    /// Line from the current position to `(x, y)`
    pub fn line(&mut self, x: i16, y: i16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::Line { x, y })
    }

    pub fn h_line(&mut self, x: i16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::HLine(x))
    }

    pub fn v_line(&mut self, y: i16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::VLine(y))
    }

    // Pen

    pub fn set_pen_size(&mut self, size: u8) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetPenSize(size))
    }

    pub fn set_pen_height(&mut self, height: u8) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetPenHeight(height))
    }

    // Pixels

    /// Plot a pixel at the current position
    pub fn plot_pixel(&mut self) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::PlotPixel)
    }

    pub fn plot_pixel_xy(&mut self, x: u16, y: u16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::PlotPixelXy { x, y })
    }

    // Polygons

    /// Rectangle from the current position to `(x2, y2)`
    pub fn rect(&mut self, x2: u16, y2: u16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::Rect { x2, y2 })
    }

    pub fn rect_fill(&mut self, x2: u16, y2: u16) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::RectFill { x2, y2 })
    }

    /// Closed polygon from the current position through `vertices`
    pub fn polygon(&mut self, vertices: &[Point]) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::Polygon(vertices))
    }

    /// Restrict color replacement to a rectangle
    pub fn set_edit_rectangle(
        &mut self,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
    ) -> Result<(), Error<T::Error>> {
        self.send(&DisplayCommand::SetEditRectangle {
            x,
            y,
            width,
            height,
        })
    }
}
