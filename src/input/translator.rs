//! Host event to scene event translation.

use crate::coords::{CoordinateMapper, HostPoint, LogicalPoint};
use crate::event::{
    keycodes, Key, KeyEvent, KeyEventKind, Modifiers, PointerButton, PointerEvent,
};
use crate::input::text::SharedTextInput;
use crate::scene::Scene;

/// Maps host input callbacks into scene events and dispatches them.
///
/// Press/release handling reports the scene's consumed flag back to the
/// caller; an unconsumed event means the host's default handling should
/// proceed. The one asymmetry is backspace: when the scene does not consume
/// a backspace key-down, the translator bridges it as an edit command to any
/// open text session, because the raw key code is not part of the scene's
/// key vocabulary.
pub struct InputTranslator {
    mapper: CoordinateMapper,
    text_input: SharedTextInput,
}

impl InputTranslator {
    pub fn new(mapper: CoordinateMapper, text_input: SharedTextInput) -> Self {
        Self { mapper, text_input }
    }

    pub fn mapper(&self) -> CoordinateMapper {
        self.mapper
    }

    /// Replaces the mapper after a host scale change.
    pub fn set_mapper(&mut self, mapper: CoordinateMapper) {
        self.mapper = mapper;
    }

    /// Maps a host-pixel pointer position into logical space.
    pub fn pointer_position(&self, x: f64, y: f64) -> LogicalPoint {
        self.mapper
            .point_to_logical(HostPoint::new(x as f32, y as f32))
    }

    /// Forwards the per-frame pointer move. Sent unconditionally so hover
    /// state stays correct when the scale changed under a still pointer.
    pub fn pointer_move(&self, scene: &mut dyn Scene, x: f64, y: f64) {
        let position = self.pointer_position(x, y);
        scene.send_pointer_event(&PointerEvent::Move { position });
    }

    /// Forwards a button press. Returns the scene's consumed flag.
    pub fn pointer_press(&self, scene: &mut dyn Scene, x: f64, y: f64, button: i32) -> bool {
        scene.send_pointer_event(&PointerEvent::Press {
            position: self.pointer_position(x, y),
            button: PointerButton(button),
        })
    }

    /// Forwards a button release. Returns the scene's consumed flag.
    pub fn pointer_release(&self, scene: &mut dyn Scene, x: f64, y: f64, button: i32) -> bool {
        scene.send_pointer_event(&PointerEvent::Release {
            position: self.pointer_position(x, y),
            button: PointerButton(button),
        })
    }

    /// Forwards this frame's consumed scroll delta at the pointer position.
    pub fn forward_scroll(
        &self,
        scene: &mut dyn Scene,
        position: LogicalPoint,
        delta_x: f32,
        delta_y: f32,
    ) {
        scene.send_pointer_event(&PointerEvent::Scroll {
            position,
            delta_x,
            delta_y,
        });
    }

    fn key_event(code: i32, modifiers: i32, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            key: Key::from_host_code(code),
            kind,
            modifiers: Modifiers::from_host_bits(modifiers),
        }
    }

    /// Forwards a key press, with the backspace edit fallback.
    pub fn key_pressed(
        &self,
        scene: &mut dyn Scene,
        code: i32,
        _scan_code: i32,
        modifiers: i32,
    ) -> bool {
        let event = Self::key_event(code, modifiers, KeyEventKind::KeyDown);
        if scene.send_key_event(&event) {
            true
        } else if code == keycodes::KEY_BACKSPACE {
            self.text_input.lock().backspace();
            true
        } else {
            false
        }
    }

    /// Forwards a key release. Returns the scene's consumed flag.
    pub fn key_released(
        &self,
        scene: &mut dyn Scene,
        code: i32,
        _scan_code: i32,
        modifiers: i32,
    ) -> bool {
        scene.send_key_event(&Self::key_event(code, modifiers, KeyEventKind::KeyUp))
    }
}
