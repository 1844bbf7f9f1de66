//! Transport-agnostic logic for the ezLCD+103 driver
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Touch event state machine (press/release detection)
//! - Text box cursor placement
//! - Driver configuration and its persisted form

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod state;
pub mod text;
