//! Blocking host driver for the EarthLCD ezLCD+103
//!
//! [`EzLcd`] owns a [`Transport`](ezlcd_hal::Transport) and exposes every
//! command the display understands, grouped by concern:
//!
//! - Buttons and touch events ([`buttons`])
//! - Liveness, backlight and init ([`system`])
//! - Drawing primitives ([`draw`])
//! - Fonts and text boxes ([`text`])
//!
//! All blocking loops wait forever unless a poll limit is configured in
//! [`DisplayConfig`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buttons;
pub mod draw;
mod driver;
mod error;
pub mod system;
pub mod text;

#[cfg(test)]
pub(crate) mod testing;

pub use buttons::DefineOutcome;
pub use driver::EzLcd;
pub use error::Error;
pub use text::TextWriter;

pub use ezlcd_core::config::DisplayConfig;
pub use ezlcd_core::state::PressState;
pub use ezlcd_core::text::{TextBox, TextCursor};
pub use ezlcd_hal::{TransferEnd, Transport};
pub use ezlcd_protocol::{
    ButtonDescriptor, ButtonEvent, ButtonImages, ButtonState, CommandError, DisplayCommand, Point,
    Rgb, TouchProtocol,
};
