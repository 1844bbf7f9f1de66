//! ezLCD+103 SPI Command Protocol
//!
//! This crate defines the byte-level contract between a host MCU (SPI master)
//! and the ezLCD+103 display controller (SPI slave). It has no knowledge of
//! the bus itself; `ezlcd-driver` pushes the encoded bytes through a
//! transport.
//!
//! # Protocol Overview
//!
//! Every command is one opcode byte followed by a fixed parameter list,
//! sent while the display stays selected. 16-bit parameters are split high
//! byte first:
//! ```text
//! ┌────────┬──────────────────────────────┐
//! │ OPCODE │ PARAMS (0–1021 bytes)        │
//! │ 1B     │ u8 / u16 big-endian          │
//! └────────┴──────────────────────────────┘
//! ```
//!
//! The display answers every byte it receives. Sending the no-op byte
//! (`0x00`) is how the host reads touch events:
//! ```text
//! ┌────────┬─────────────────┐
//! │ STATUS │ BUTTON ID       │
//! │ [7:6]  │ [5:0] (0–63)    │
//! └────────┴─────────────────┘
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod events;
pub mod messages;
pub mod opcodes;
pub mod types;

pub use command::{Command, CommandError, MAX_PARAMS};
pub use events::{ButtonEvent, ButtonStatus};
pub use messages::{DisplayCommand, MAX_PATH_LEN, MAX_POLYGON_VERTICES};
pub use types::{
    ButtonDescriptor, ButtonImages, ButtonState, Point, Rgb, TouchProtocol, BUTTON_ID_MAX,
    DISPLAY_HEIGHT, DISPLAY_WIDTH, NO_IMAGE,
};
