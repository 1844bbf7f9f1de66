//! Touch event state machine
//!
//! Tracks one press/release cycle from the stream of decoded event bytes.
//! The machine is pure; the driver feeds it and mirrors each transition
//! onto the display.

pub mod machine;

pub use machine::{render_state, PressState};
