//! Frame timing.
//!
//! One `FrameClock` per window; `tick()` once per presented frame. Animated
//! parameters integrate `FrameTime::dt`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
