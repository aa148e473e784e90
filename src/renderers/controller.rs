//! Command dispatch
//!
//! Owns the wheel state, applies navigation commands to it and re-renders.
//! Each command runs a full transition and render before returning.

use super::{render_frame, WheelRenderer};
use crate::layout::{DisplayList, LayoutEngine};
use crate::models::{Command, WheelState};

pub struct WheelController<R: WheelRenderer> {
    state: WheelState,
    engine: LayoutEngine,
    renderer: R,
}

impl<R: WheelRenderer> WheelController<R> {
    pub fn new(engine: LayoutEngine, renderer: R) -> Self {
        Self::with_state(WheelState::new(), engine, renderer)
    }

    pub fn with_state(state: WheelState, engine: LayoutEngine, renderer: R) -> Self {
        Self {
            state,
            engine,
            renderer,
        }
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn display_list(&self) -> DisplayList {
        self.engine.compute_layout(&self.state)
    }

    /// Render the current state
    pub fn render(&mut self) {
        let frame = self.engine.compute_layout(&self.state);
        let skipped = render_frame(&frame, &mut self.renderer);
        if !skipped.is_empty() {
            log::debug!("rendered {} with {} stage(s) skipped", frame.key_name, skipped.len());
        }
    }

    /// Apply a command and re-render
    pub fn dispatch(&mut self, command: Command) -> &WheelState {
        self.state = self.state.apply(command);
        log::debug!(
            "{:?} -> {} (chromatic {}°, fifths {}°)",
            command,
            self.state.pitch_class,
            self.state.chromatic_angle,
            self.state.fifths_angle
        );
        self.render();
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WheelError;
    use crate::layout::{RenderStaff, ScaleHighlight};
    use crate::models::{Dial, PitchClass};
    use crate::renderers::SnapshotRenderer;

    #[test]
    fn test_dispatch_renders_new_state() {
        let mut controller = WheelController::new(LayoutEngine::default(), SnapshotRenderer::new());
        controller.dispatch(Command::RotateFifthsRight);

        let snapshot = controller.renderer();
        assert_eq!(controller.state().pitch_class, PitchClass::G);
        assert_eq!(snapshot.key_name.as_deref(), Some("G"));
        assert_eq!(snapshot.fifths_angle, Some(30.0));
        // G is 210° round the chromatic dial; -150° is the nearer equivalent of 0°
        assert_eq!(snapshot.chromatic_angle, Some(-150.0));
        assert_eq!(snapshot.highlights.len(), 7);
        assert_eq!(snapshot.frames, 1);
    }

    /// Renderer whose keyboard target is missing
    #[derive(Default)]
    struct NoKeyboard {
        inner: SnapshotRenderer,
    }

    impl WheelRenderer for NoKeyboard {
        fn render_dial(&mut self, dial: Dial, angle: f64) -> Result<(), WheelError> {
            self.inner.render_dial(dial, angle)
        }

        fn render_key_name(&mut self, name: &str) -> Result<(), WheelError> {
            self.inner.render_key_name(name)
        }

        fn render_keyboard_highlights(&mut self, _: &[ScaleHighlight]) -> Result<(), WheelError> {
            Err(WheelError::Dom("no .piano".into()))
        }

        fn render_staff(&mut self, staves: &[RenderStaff]) -> Result<(), WheelError> {
            self.inner.render_staff(staves)
        }
    }

    #[test]
    fn test_failing_stage_does_not_stop_the_frame() {
        let mut controller = WheelController::new(LayoutEngine::default(), NoKeyboard::default());
        controller.dispatch(Command::RotateChromaticRight);

        let inner = &controller.renderer().inner;
        assert_eq!(inner.key_name.as_deref(), Some("C♯ / D♭"));
        assert!(inner.highlights.is_empty());
        assert_eq!(inner.staves.len(), 4);
    }
}
