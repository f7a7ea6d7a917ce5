use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton, MouseButtonState, PointerButtonEvent};

/// Per-frame input deltas.
///
/// `InputState` provides the held state; `InputFrame` holds what happened
/// since the previous frame. The runtime clears it after each frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    pub keys_pressed: HashSet<Key>,

    pub keys_released: HashSet<Key>,

    pub buttons_pressed: HashSet<MouseButton>,

    pub buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    /// Positions (device space) at which `button` was released this frame, in order.
    ///
    /// Unlike `buttons_released`, every release is reported, so two fast clicks
    /// within one frame yield two positions.
    pub fn releases(&self, button: MouseButton) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.events.iter().filter_map(move |ev| match ev {
            InputEvent::PointerButton(PointerButtonEvent {
                button: b,
                state: MouseButtonState::Released,
                x,
                y,
                ..
            }) if *b == button => Some((*x, *y)),
            _ => None,
        })
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }
}
