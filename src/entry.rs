//! Host-facing entry shapes.
//!
//! A [`Bridge`](crate::bridge::Bridge) is presentation-context agnostic;
//! these adapters wire it into the three ways a host actually shows
//! embedded content: a full-screen modal, a persistent HUD overlay, and an
//! embeddable sub-region of some larger host screen. Each adapter is a thin
//! forwarding layer; all real behavior lives in the bridge.

use crate::bridge::Bridge;
use crate::coords::HostRect;
use crate::errors::BridgeError;
use crate::host::HostDraw;

/// Full-screen modal presentation.
///
/// The host opens it, routes every lifecycle and input callback through it,
/// and closes it when the player dismisses the screen.
pub struct ModalScreen {
    bridge: Bridge,
}

impl ModalScreen {
    pub fn new(bridge: Bridge) -> Self {
        Self { bridge }
    }

    pub fn bridge(&mut self) -> &mut Bridge {
        &mut self.bridge
    }

    pub fn init(&mut self) -> Result<(), BridgeError> {
        self.bridge.init()
    }

    pub fn render(&mut self, host: &mut dyn HostDraw, mouse_x: f64, mouse_y: f64, partial_tick: f32) {
        self.bridge.render(host, mouse_x, mouse_y, partial_tick);
    }

    pub fn mouse_clicked(&mut self, x: f64, y: f64, button: i32) -> bool {
        self.bridge.mouse_clicked(x, y, button)
    }

    pub fn mouse_released(&mut self, x: f64, y: f64, button: i32) -> bool {
        self.bridge.mouse_released(x, y, button)
    }

    /// Forwards the wheel delta into the bridge's momentum accumulator.
    ///
    /// The returned flag reports acceptance to the host, but modal hosts run
    /// their own scroll handling regardless of it; the scene sees the decayed
    /// delta on following frames either way.
    pub fn mouse_scrolled(&mut self, x: f64, y: f64, delta_x: f64, delta_y: f64) -> bool {
        self.bridge.mouse_scrolled(x, y, delta_x, delta_y)
    }

    pub fn key_pressed(&mut self, code: i32, scan_code: i32, modifiers: i32) -> bool {
        self.bridge.key_pressed(code, scan_code, modifiers)
    }

    pub fn key_released(&mut self, code: i32, scan_code: i32, modifiers: i32) -> bool {
        self.bridge.key_released(code, scan_code, modifiers)
    }

    pub fn on_close(&mut self) {
        self.bridge.on_close();
    }
}

/// Persistent HUD overlay presentation.
///
/// Lives for as long as the host world is rendered; gets a render call per
/// frame and nothing else. No input ever reaches it, so hover-driven
/// overlays stay inert (the pointer is parked outside any bounds).
pub struct HudOverlay {
    bridge: Bridge,
}

impl HudOverlay {
    pub fn new(bridge: Bridge) -> Self {
        Self { bridge }
    }

    pub fn bridge(&mut self) -> &mut Bridge {
        &mut self.bridge
    }

    pub fn init(&mut self) -> Result<(), BridgeError> {
        self.bridge.init()
    }

    pub fn render(&mut self, host: &mut dyn HostDraw, partial_tick: f32) {
        self.bridge.render(host, -1.0, -1.0, partial_tick);
    }

    pub fn on_close(&mut self) {
        self.bridge.on_close();
    }
}

/// Embeddable sub-region of a larger host screen.
///
/// The outer screen owns a viewport rectangle in host pixels; every
/// coordinate crossing into the bridge is first made viewport-relative, so
/// the embedded scene lays out against its own origin no matter where the
/// panel sits.
pub struct EmbeddedPanel {
    bridge: Bridge,
    viewport: HostRect,
}

impl EmbeddedPanel {
    pub fn new(bridge: Bridge, viewport: HostRect) -> Self {
        Self { bridge, viewport }
    }

    pub fn bridge(&mut self) -> &mut Bridge {
        &mut self.bridge
    }

    pub fn viewport(&self) -> HostRect {
        self.viewport
    }

    /// Moves or resizes the panel within the outer screen.
    pub fn set_viewport(&mut self, viewport: HostRect) {
        self.viewport = viewport;
    }

    fn local(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.viewport.x as f64, y - self.viewport.y as f64)
    }

    pub fn init(&mut self) -> Result<(), BridgeError> {
        self.bridge.init()
    }

    pub fn render(&mut self, host: &mut dyn HostDraw, mouse_x: f64, mouse_y: f64, partial_tick: f32) {
        let (x, y) = self.local(mouse_x, mouse_y);
        self.bridge.render(host, x, y, partial_tick);
    }

    pub fn mouse_clicked(&mut self, x: f64, y: f64, button: i32) -> bool {
        let (x, y) = self.local(x, y);
        self.bridge.mouse_clicked(x, y, button)
    }

    pub fn mouse_released(&mut self, x: f64, y: f64, button: i32) -> bool {
        let (x, y) = self.local(x, y);
        self.bridge.mouse_released(x, y, button)
    }

    pub fn mouse_scrolled(&mut self, x: f64, y: f64, delta_x: f64, delta_y: f64) -> bool {
        let (x, y) = self.local(x, y);
        self.bridge.mouse_scrolled(x, y, delta_x, delta_y)
    }

    pub fn key_pressed(&mut self, code: i32, scan_code: i32, modifiers: i32) -> bool {
        self.bridge.key_pressed(code, scan_code, modifiers)
    }

    pub fn key_released(&mut self, code: i32, scan_code: i32, modifiers: i32) -> bool {
        self.bridge.key_released(code, scan_code, modifiers)
    }

    pub fn on_close(&mut self) {
        self.bridge.on_close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BridgeConfig;
    use crate::coords::LogicalPoint;
    use crate::event::PointerEvent;
    use crate::host::HostServices;
    use crate::testutil::{
        CallLog, EmptyAssets, EmptyTranslations, RecordingScene, StubClipboard, StubTextInput,
        StubWindow,
    };
    use std::sync::Arc;

    fn bridge(scale: f32) -> (Bridge, RecordingScene) {
        let scene = RecordingScene::default();
        let handles = RecordingScene {
            pointer_events: scene.pointer_events.clone(),
            key_events: scene.key_events.clone(),
            consume_pointer: scene.consume_pointer,
            consume_keys: scene.consume_keys,
            closed: scene.closed.clone(),
            size: scene.size.clone(),
            size_calls: scene.size_calls.clone(),
            density: scene.density.clone(),
        };
        let services = HostServices {
            window: StubWindow::new(800, 600, scale),
            clipboard: Arc::new(StubClipboard::default()),
            text_input: Arc::new(StubTextInput::default()),
            assets: Arc::new(EmptyAssets),
            translations: Arc::new(EmptyTranslations),
        };
        (
            Bridge::new(Box::new(scene), services, BridgeConfig::default()).unwrap(),
            handles,
        )
    }

    #[test]
    fn modal_screen_forwards_input_and_close() {
        let (bridge, scene) = bridge(2.0);
        let mut screen = ModalScreen::new(bridge);
        screen.init().unwrap();

        assert!(screen.mouse_clicked(100.0, 50.0, 0));
        assert!(screen.mouse_scrolled(0.0, 0.0, 0.0, 1.0));
        screen.on_close();
        assert_eq!(*scene.closed.lock(), 1);

        let events = scene.pointer_events.lock();
        assert_eq!(
            events[0],
            PointerEvent::Press {
                position: LogicalPoint::new(50.0, 25.0),
                button: crate::event::PointerButton::LEFT,
            }
        );
    }

    #[test]
    fn hud_overlay_renders_without_input() {
        let (bridge, scene) = bridge(1.0);
        let mut hud = HudOverlay::new(bridge);
        hud.init().unwrap();

        let mut host = CallLog::default();
        hud.render(&mut host, 0.0);
        assert_eq!(host.matching("blit").len(), 1);

        // Only the synthetic per-frame move reaches the scene, parked
        // off-canvas so nothing registers hover.
        let events = scene.pointer_events.lock();
        let moves: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, PointerEvent::Move { .. }))
            .collect();
        assert_eq!(
            *moves[0],
            PointerEvent::Move {
                position: LogicalPoint::new(-1.0, -1.0)
            }
        );
    }

    #[test]
    fn embedded_panel_offsets_into_viewport_space() {
        let (bridge, scene) = bridge(2.0);
        let mut panel = EmbeddedPanel::new(bridge, HostRect::new(100, 50, 400, 300));
        panel.init().unwrap();

        panel.mouse_clicked(110.0, 60.0, 1);
        let events = scene.pointer_events.lock();
        assert_eq!(
            events[0],
            PointerEvent::Press {
                position: LogicalPoint::new(5.0, 5.0),
                button: crate::event::PointerButton::RIGHT,
            }
        );
    }

    #[test]
    fn moving_the_panel_moves_its_origin() {
        let (bridge, scene) = bridge(1.0);
        let mut panel = EmbeddedPanel::new(bridge, HostRect::new(0, 0, 400, 300));
        panel.init().unwrap();

        panel.set_viewport(HostRect::new(40, 40, 400, 300));
        panel.mouse_clicked(40.0, 40.0, 0);
        let events = scene.pointer_events.lock();
        assert_eq!(
            events[0],
            PointerEvent::Press {
                position: LogicalPoint::new(0.0, 0.0),
                button: crate::event::PointerButton::LEFT,
            }
        );
    }
}
