//! ezLCD Hardware Abstraction Layer
//!
//! This crate defines the byte transport the ezLCD+103 driver talks through,
//! and one implementation of it on top of the `embedded-hal` SPI and GPIO
//! traits. Any chip HAL that implements `embedded_hal::spi::SpiBus` and
//! `embedded_hal::digital::OutputPin` can drive the display.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  ezlcd-driver (EzLcd<T: Transport>)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ezlcd-hal (this crate - Transport)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-hal SpiBus + chip select pin  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`transport::Transport`] - duplex single-byte exchange with long transfers
//! - [`spi::SpiTransport`] - `Transport` over an SPI bus and a chip select pin

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod spi;
pub mod transport;

// Re-export key items at crate root for convenience
pub use spi::{SpiConfig, SpiTransport, SpiTransportError};
pub use transport::{TransferEnd, Transport};
