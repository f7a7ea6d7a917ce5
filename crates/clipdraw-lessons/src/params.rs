//! Keyboard-driven transform parameters.
//!
//! Held keys move a slider at its rate (units per second); `Space` and `R`
//! act once per press.

use clipdraw_engine::input::{InputFrame, InputState, Key};
use clipdraw_engine::transform::TransformParams;
use glam::Vec2;

/// A bounded scalar parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSlider {
    pub label: &'static str,
    min: f32,
    max: f32,
    default: f32,
    /// Change per second while a bound key is held.
    rate: f32,
    value: f32,
}

impl ParamSlider {
    pub fn new(label: &'static str, min: f32, max: f32, default: f32, rate: f32) -> Self {
        let default = default.clamp(min, max);
        Self { label, min, max, default, rate, value: default }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sets the value, clamped to the range. Non-finite values are ignored.
    pub fn set(&mut self, value: f32) {
        if value.is_finite() {
            self.value = value.clamp(self.min, self.max);
        }
    }

    /// Moves the value by `direction * rate * dt`.
    pub fn drive(&mut self, direction: f32, dt: f32) {
        self.set(self.value + direction * self.rate * dt);
    }

    pub fn reset(&mut self) {
        self.value = self.default;
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Axis {
    Scale,
    Rotation,
    TranslateX,
    TranslateY,
}

/// Held-key bindings: key, slider, direction.
const BINDINGS: [(Key, Axis, f32); 8] = [
    (Key::W, Axis::Scale, 1.0),
    (Key::S, Axis::Scale, -1.0),
    (Key::A, Axis::Rotation, 1.0),
    (Key::D, Axis::Rotation, -1.0),
    (Key::ArrowRight, Axis::TranslateX, 1.0),
    (Key::ArrowLeft, Axis::TranslateX, -1.0),
    (Key::ArrowUp, Axis::TranslateY, 1.0),
    (Key::ArrowDown, Axis::TranslateY, -1.0),
];

/// The live parameter source of the transform exercise.
#[derive(Debug, Clone)]
pub struct ParamPanel {
    pub scale: ParamSlider,
    pub rotation: ParamSlider,
    pub tx: ParamSlider,
    pub ty: ParamSlider,
    pub auto_rotate: bool,
    /// Degrees per second while auto-rotating.
    pub spin_rate: f32,
}

impl Default for ParamPanel {
    fn default() -> Self {
        Self {
            scale: ParamSlider::new("scale", 0.01, 2.0, 1.0, 0.75),
            rotation: ParamSlider::new("rotation", -360.0, 360.0, 0.0, 120.0),
            tx: ParamSlider::new("tx", -1.0, 1.0, 0.0, 0.75),
            ty: ParamSlider::new("ty", -1.0, 1.0, 0.0, 0.75),
            auto_rotate: false,
            spin_rate: 90.0,
        }
    }
}

impl ParamPanel {
    /// Advances the panel by one frame.
    ///
    /// Returns `true` when any parameter changed.
    pub fn update(&mut self, input: &InputState, frame: &InputFrame, dt: f32) -> bool {
        let before = self.snapshot();

        if frame.key_pressed(Key::R) {
            self.reset();
        }
        if frame.key_pressed(Key::Space) {
            self.auto_rotate = !self.auto_rotate;
            log::debug!("auto-rotate {}", if self.auto_rotate { "on" } else { "off" });
        }

        for (key, axis, direction) in BINDINGS {
            if input.key_down(key) {
                self.slider_mut(axis).drive(direction, dt);
            }
        }

        if self.auto_rotate {
            self.spin(dt);
        }

        self.snapshot() != before
    }

    /// Rotates by `spin_rate * dt`, wrapping instead of stopping at the range ends.
    pub fn spin(&mut self, dt: f32) {
        let next = self.rotation.value() + self.spin_rate * dt;
        self.rotation.set(next.rem_euclid(360.0));
    }

    pub fn reset(&mut self) {
        self.scale.reset();
        self.rotation.reset();
        self.tx.reset();
        self.ty.reset();
        self.auto_rotate = false;
    }

    /// Current values as transform parameters.
    pub fn snapshot(&self) -> TransformParams {
        TransformParams::new(
            self.scale.value(),
            self.rotation.value(),
            Vec2::new(self.tx.value(), self.ty.value()),
        )
    }

    /// One-line readout, e.g. for a window title.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for s in [&self.scale, &self.rotation, &self.tx, &self.ty] {
            if !out.is_empty() {
                out.push_str("  ");
            }
            out.push_str(&format!("{} {:.2}", s.label, s.value()));
        }
        if self.auto_rotate {
            out.push_str("  (spin)");
        }
        out
    }

    fn slider_mut(&mut self, axis: Axis) -> &mut ParamSlider {
        match axis {
            Axis::Scale => &mut self.scale,
            Axis::Rotation => &mut self.rotation,
            Axis::TranslateX => &mut self.tx,
            Axis::TranslateY => &mut self.ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn held(keys: &[Key]) -> InputState {
        let mut input = InputState::default();
        input.keys_down.extend(keys.iter().copied());
        input
    }

    fn pressed(keys: &[Key]) -> InputFrame {
        let mut frame = InputFrame::default();
        frame.keys_pressed.extend(keys.iter().copied());
        frame
    }

    // ── slider ───────────────────────────────────────────────────────────

    #[test]
    fn slider_clamps_to_range() {
        let mut s = ParamSlider::new("scale", 0.01, 2.0, 1.0, 1.0);
        s.set(5.0);
        assert_eq!(s.value(), 2.0);
        s.set(-3.0);
        assert_eq!(s.value(), 0.01);
        s.set(f32::NAN);
        assert_eq!(s.value(), 0.01);
    }

    #[test]
    fn slider_default_is_clamped() {
        let s = ParamSlider::new("tx", -1.0, 1.0, 4.0, 1.0);
        assert_eq!(s.value(), 1.0);
    }

    #[test]
    fn slider_drive_and_reset() {
        let mut s = ParamSlider::new("tx", -1.0, 1.0, 0.0, 0.5);
        s.drive(1.0, 1.0);
        assert_eq!(s.value(), 0.5);
        s.drive(-1.0, 4.0);
        assert_eq!(s.value(), -1.0);
        s.reset();
        assert_eq!(s.value(), 0.0);
    }

    // ── panel ────────────────────────────────────────────────────────────

    #[test]
    fn default_snapshot_is_identity() {
        assert_eq!(ParamPanel::default().snapshot(), TransformParams::identity());
    }

    #[test]
    fn held_keys_drive_sliders() {
        let mut panel = ParamPanel::default();
        let changed = panel.update(&held(&[Key::W, Key::ArrowLeft]), &InputFrame::default(), 0.5);
        assert!(changed);

        let p = panel.snapshot();
        assert_abs_diff_eq!(p.scale, 1.375, epsilon = 1e-6);
        assert_abs_diff_eq!(p.translation.x, -0.375, epsilon = 1e-6);
        assert_eq!(p.translation.y, 0.0);
        assert_eq!(p.rotation_degrees, 0.0);
    }

    #[test]
    fn no_input_means_no_change() {
        let mut panel = ParamPanel::default();
        assert!(!panel.update(&InputState::default(), &InputFrame::default(), 0.016));
    }

    #[test]
    fn scale_never_reaches_zero() {
        let mut panel = ParamPanel::default();
        panel.update(&held(&[Key::S]), &InputFrame::default(), 10.0);
        assert_eq!(panel.snapshot().scale, 0.01);
    }

    #[test]
    fn space_toggles_auto_rotate() {
        let mut panel = ParamPanel::default();
        panel.update(&InputState::default(), &pressed(&[Key::Space]), 0.5);
        assert!(panel.auto_rotate);
        assert_abs_diff_eq!(panel.snapshot().rotation_degrees, 45.0, epsilon = 1e-4);

        panel.update(&InputState::default(), &pressed(&[Key::Space]), 0.5);
        assert!(!panel.auto_rotate);
        assert_abs_diff_eq!(panel.snapshot().rotation_degrees, 45.0, epsilon = 1e-4);
    }

    #[test]
    fn spin_wraps_past_full_turn() {
        let mut panel = ParamPanel::default();
        panel.rotation.set(350.0);
        panel.spin(0.5);
        assert_abs_diff_eq!(panel.rotation.value(), 35.0, epsilon = 1e-3);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut panel = ParamPanel::default();
        panel.update(&held(&[Key::A, Key::ArrowUp]), &pressed(&[Key::Space]), 1.0);
        assert_ne!(panel.snapshot(), TransformParams::identity());

        panel.update(&InputState::default(), &pressed(&[Key::R]), 0.0);
        assert_eq!(panel.snapshot(), TransformParams::identity());
        assert!(!panel.auto_rotate);
    }

    #[test]
    fn summary_lists_every_slider() {
        let mut panel = ParamPanel::default();
        panel.tx.set(0.25);
        assert_eq!(panel.summary(), "scale 1.00  rotation 0.00  tx 0.25  ty 0.00");

        panel.auto_rotate = true;
        assert!(panel.summary().ends_with("(spin)"));
    }

    #[test]
    fn snapshot_composes() {
        let mut panel = ParamPanel::default();
        panel.tx.set(0.5);
        let m = panel.snapshot().compose().unwrap();
        let p = m.transform_point(Vec2::ZERO);
        assert_abs_diff_eq!(p.x, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-6);
    }
}
