//! Platform abstraction layer
//!
//! Handles the pieces that sit between a window/event loop and the
//! simulation:
//! - Input edge detection (held keys -> per-frame commands)
//! - Frame timing (measured delta -> clamped simulation delta)

pub mod input;
pub mod time;

pub use input::{InputLatch, KeyState};
pub use time::FrameClock;
