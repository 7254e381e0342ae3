//! Shared mocks for unit tests.

use crate::assets::AssetId;
use crate::coords::HostRect;
use crate::event::{KeyEvent, PointerEvent};
use crate::host::{
    AssetSource, CharSink, CursorIcon, HostClipboard, HostDraw, HostTextInput, HostWindow,
    ItemRef, TextureRef, Transform2D, TranslationSource, UvRect,
};
use crate::i18n::{Translated, TranslateArg};
use crate::scene::{Scene, SceneCanvas};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// [`HostDraw`] that records the call sequence, for asserting ordering and
/// state restoration.
#[derive(Default)]
pub struct CallLog {
    pub calls: Vec<String>,
    pub scissor_enabled: bool,
    pub state_depth: i32,
    pub transform_depth: i32,
}

impl HostDraw for CallLog {
    fn blit_rgba(&mut self, _pixels: &[u8], width: u32, height: u32) {
        self.calls.push(format!("blit {width}x{height}"));
    }

    fn draw_item_icon(&mut self, item: &ItemRef, x: f32, y: f32) {
        self.calls.push(format!("icon {} {x},{y}", item.id));
    }

    fn draw_item_decorations(&mut self, item: &ItemRef, _x: f32, _y: f32) {
        self.calls.push(format!("decorations {}", item.id));
    }

    fn draw_item_tooltip(&mut self, item: &ItemRef, x: f32, y: f32) {
        self.calls.push(format!("tooltip {} {x},{y}", item.id));
    }

    fn draw_textured_quad(&mut self, texture: TextureRef, uv: UvRect, width: f32, height: f32) {
        self.calls.push(format!(
            "quad {} uv({},{},{},{}) {width}x{height}",
            texture.0, uv.u, uv.v, uv.w, uv.h
        ));
    }

    fn scissor_enabled(&self) -> bool {
        self.scissor_enabled
    }

    fn enable_scissor(&mut self, rect: HostRect) {
        self.scissor_enabled = true;
        self.calls.push(format!(
            "scissor {},{},{}x{}",
            rect.x, rect.y, rect.width, rect.height
        ));
    }

    fn disable_scissor(&mut self) {
        self.scissor_enabled = false;
        self.calls.push("scissor off".into());
    }

    fn push_transform(&mut self, t: Transform2D) {
        self.transform_depth += 1;
        self.calls.push(format!("push {},{} x{}", t.tx, t.ty, t.scale));
    }

    fn pop_transform(&mut self) {
        self.transform_depth -= 1;
        self.calls.push("pop".into());
    }

    fn save_render_state(&mut self) {
        self.state_depth += 1;
        self.calls.push("save".into());
    }

    fn restore_render_state(&mut self) {
        self.state_depth -= 1;
        self.calls.push("restore".into());
    }
}

impl CallLog {
    /// Calls matching a prefix, e.g. every "tooltip" draw.
    pub fn matching(&self, prefix: &str) -> Vec<&String> {
        self.calls.iter().filter(|c| c.starts_with(prefix)).collect()
    }
}

/// Mutable stub window. Records every cursor switch it receives.
pub struct StubWindow {
    size: Mutex<(u32, u32)>,
    scale: Mutex<f32>,
    pub cursors: Mutex<Vec<CursorIcon>>,
}

impl StubWindow {
    pub fn new(width: u32, height: u32, scale: f32) -> Arc<Self> {
        Arc::new(Self {
            size: Mutex::new((width, height)),
            scale: Mutex::new(scale),
            cursors: Mutex::new(Vec::new()),
        })
    }

    pub fn set_size(&self, width: u32, height: u32) {
        *self.size.lock() = (width, height);
    }

    pub fn set_scale(&self, scale: f32) {
        *self.scale.lock() = scale;
    }
}

impl HostWindow for StubWindow {
    fn width(&self) -> u32 {
        self.size.lock().0
    }

    fn height(&self) -> u32 {
        self.size.lock().1
    }

    fn gui_scale(&self) -> f32 {
        *self.scale.lock()
    }

    fn set_cursor(&self, icon: CursorIcon) {
        self.cursors.lock().push(icon);
    }
}

/// In-memory clipboard; can be told to fail writes.
#[derive(Default)]
pub struct StubClipboard {
    pub text: Mutex<Option<String>>,
    pub fail_writes: bool,
}

impl HostClipboard for StubClipboard {
    fn read(&self) -> Option<String> {
        self.text.lock().clone()
    }

    fn write(&self, text: &str) -> anyhow::Result<()> {
        if self.fail_writes {
            anyhow::bail!("unsupported data flavor");
        }
        *self.text.lock() = Some(text.to_string());
        Ok(())
    }
}

/// Captures the installed character callback so tests can feed codepoints.
#[derive(Default)]
pub struct StubTextInput {
    sink: Mutex<Option<CharSink>>,
    pub installs: AtomicUsize,
    pub uninstalls: AtomicUsize,
}

impl StubTextInput {
    pub fn emit(&self, c: char) {
        if let Some(sink) = self.sink.lock().as_mut() {
            sink(c);
        }
    }
}

impl HostTextInput for StubTextInput {
    fn install_char_callback(&self, sink: CharSink) {
        self.installs.fetch_add(1, Ordering::SeqCst);
        *self.sink.lock() = Some(sink);
    }

    fn uninstall_char_callback(&self) {
        self.uninstalls.fetch_add(1, Ordering::SeqCst);
        *self.sink.lock() = None;
    }
}

/// Asset source with no assets.
pub struct EmptyAssets;

impl AssetSource for EmptyAssets {
    fn load(&self, _id: &AssetId) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(None)
    }
}

/// Translation source with no entries.
pub struct EmptyTranslations;

impl TranslationSource for EmptyTranslations {
    fn lookup(&self, _key: &str, _args: &[TranslateArg]) -> Option<Translated> {
        None
    }
}

/// Scene stub that records dispatched events and reports a configurable
/// consumed flag.
pub struct RecordingScene {
    pub pointer_events: Arc<Mutex<Vec<PointerEvent>>>,
    pub key_events: Arc<Mutex<Vec<KeyEvent>>>,
    pub consume_pointer: bool,
    pub consume_keys: bool,
    pub closed: Arc<Mutex<u32>>,
    pub size: Arc<Mutex<(u32, u32)>>,
    pub size_calls: Arc<Mutex<u32>>,
    pub density: Arc<Mutex<f32>>,
}

impl Default for RecordingScene {
    fn default() -> Self {
        Self {
            pointer_events: Arc::new(Mutex::new(Vec::new())),
            key_events: Arc::new(Mutex::new(Vec::new())),
            consume_pointer: true,
            consume_keys: false,
            closed: Arc::new(Mutex::new(0)),
            size: Arc::new(Mutex::new((0, 0))),
            size_calls: Arc::new(Mutex::new(0)),
            density: Arc::new(Mutex::new(0.0)),
        }
    }
}

impl Scene for RecordingScene {
    fn set_size(&mut self, width: u32, height: u32) {
        *self.size.lock() = (width, height);
        *self.size_calls.lock() += 1;
    }

    fn set_density(&mut self, density: f32) {
        *self.density.lock() = density;
    }

    fn send_pointer_event(&mut self, event: &PointerEvent) -> bool {
        self.pointer_events.lock().push(event.clone());
        self.consume_pointer
    }

    fn send_key_event(&mut self, event: &KeyEvent) -> bool {
        self.key_events.lock().push(*event);
        self.consume_keys
    }

    fn render(&mut self, _canvas: &mut dyn SceneCanvas, _frame_nanos: u64) {}

    fn close(&mut self) {
        *self.closed.lock() += 1;
    }
}
