//! Pointer and keyboard input.
//!
//! Public types are platform-agnostic. `platform::winit` translates window
//! events into `InputEvent`s; the runtime applies them to `InputState` and
//! records per-frame transitions in `InputFrame`.

mod frame;
mod state;
mod types;

pub mod platform;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
