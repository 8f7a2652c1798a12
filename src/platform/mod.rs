//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time (monotonic clock)
//! - Input (held-key state translated into tick input)

pub mod input;
pub mod time;

pub use input::KeyState;
pub use time::{Clock, ManualClock, SystemClock};
