//! The embedding bridge.
//!
//! One [`Bridge`] ties a retained-mode [`Scene`] to a host that renders
//! immediate-mode, frame by frame. It owns the scene's lifetime, the
//! offscreen [`Surface`], input translation, the text-input session, the
//! scroll accumulator, and the arena of embedded draw tasks. The host
//! drives it through a handful of lifecycle entry points: `init`, `render`
//! once per frame, the mouse/keyboard callbacks, and `on_close`.
//!
//! Everything here runs on the host's presentation thread. The only work
//! scheduled elsewhere is asset decoding and clipboard write negotiation,
//! both on the bridge's worker runtime.

use crate::assets::AssetImages;
use crate::config::BridgeConfig;
use crate::coords::CoordinateMapper;
use crate::errors::BridgeError;
use crate::host::{CursorIcon, HostDraw, HostServices, TranslationSource};
use crate::input::{text, ClipboardBridge, InputTranslator, ScrollAccumulator, SharedTextInput};
use crate::scene::Scene;
use crate::surface::Surface;
use crate::tasks::{DrawHandle, ElementId, FramePainter, FrameTasks};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Runtime;

/// Bridge lifecycle. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Uninitialized,
    Active,
    Closed,
}

/// Embeds one scene into the host's frame loop.
pub struct Bridge {
    state: BridgeState,
    scene: Box<dyn Scene>,
    surface: Surface,
    translator: InputTranslator,
    scroll: ScrollAccumulator,
    text_input: SharedTextInput,
    clipboard: ClipboardBridge,
    tasks: FrameTasks,
    images: Arc<AssetImages>,
    services: HostServices,
    config: BridgeConfig,
    /// Worker runtime for asset decode and clipboard writes. Shared with
    /// [`AssetImages`]; kept alive for the bridge's lifetime.
    _runtime: Arc<Runtime>,
    /// Host window dimensions observed last frame.
    viewport: (u32, u32),
    /// Host GUI scale observed last frame.
    gui_scale: f32,
    char_callback_installed: bool,
    /// Cursor shape last applied to the host window.
    cursor: CursorIcon,
    /// Frame timestamps handed to the scene are measured from here.
    epoch: Instant,
}

impl Bridge {
    /// Creates a bridge around `scene`. The scene's content root is fixed
    /// from here on; only recomposition mutates it.
    pub fn new(
        scene: Box<dyn Scene>,
        services: HostServices,
        config: BridgeConfig,
    ) -> Result<Self, BridgeError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(|e| BridgeError::Runtime(e.to_string()))?;
        let runtime = Arc::new(runtime);

        let text_input = text::shared();
        let mapper = CoordinateMapper::with_density_factor(
            services.window.gui_scale(),
            config.density_factor,
        );
        let images = Arc::new(AssetImages::new(
            services.assets.clone(),
            runtime.handle().clone(),
            config.image_cache_capacity,
        ));

        Ok(Self {
            state: BridgeState::Uninitialized,
            scene,
            surface: Surface::new(services.window.width(), services.window.height()),
            translator: InputTranslator::new(mapper, text_input.clone()),
            scroll: ScrollAccumulator::new(),
            clipboard: ClipboardBridge::new(services.clipboard.clone(), runtime.handle().clone()),
            text_input,
            tasks: FrameTasks::new(),
            images,
            services,
            config,
            _runtime: runtime,
            viewport: (0, 0),
            gui_scale: 0.0,
            char_callback_installed: false,
            cursor: CursorIcon::Arrow,
            epoch: Instant::now(),
        })
    }

    pub fn state(&self) -> BridgeState {
        self.state
    }

    /// The shared decode cache, for constructing image elements.
    pub fn images(&self) -> Arc<AssetImages> {
        self.images.clone()
    }

    /// The host's localization lookup, for constructing text elements.
    pub fn translations(&self) -> Arc<dyn TranslationSource> {
        self.services.translations.clone()
    }

    pub fn clipboard(&self) -> &ClipboardBridge {
        &self.clipboard
    }

    /// The session slot scene implementations open when an element takes
    /// text focus.
    pub fn text_input(&self) -> SharedTextInput {
        self.text_input.clone()
    }

    /// Arms the per-frame draw task for an embedded element.
    pub fn register_painter(
        &mut self,
        id: ElementId,
        handle: DrawHandle,
        painter: Rc<RefCell<dyn FramePainter>>,
    ) {
        self.tasks.register(id, handle, painter);
    }

    /// Captures the host window geometry, sizes the surface and scene, and
    /// installs the character callback.
    ///
    /// Safe to call again when the host re-opens the same screen: geometry
    /// is refreshed and the already-installed callback is left alone rather
    /// than duplicated.
    pub fn init(&mut self) -> Result<(), BridgeError> {
        if self.state == BridgeState::Closed {
            return Err(BridgeError::Closed);
        }

        self.refresh_geometry();

        if !self.char_callback_installed {
            let text_input = self.text_input.clone();
            let mut buf = [0u8; 4];
            // Each host codepoint becomes a commit to whatever session is
            // open when it arrives; with no session open it is dropped.
            self.services
                .text_input
                .install_char_callback(Box::new(move |c| {
                    text_input.lock().commit(c.encode_utf8(&mut buf));
                }));
            self.char_callback_installed = true;
        }

        self.state = BridgeState::Active;
        Ok(())
    }

    /// Re-reads window size and scale, propagating changes to the mapper,
    /// the surface, and the scene. Unchanged geometry does nothing.
    fn refresh_geometry(&mut self) {
        let width = self.services.window.width();
        let height = self.services.window.height();
        let scale = self.services.window.gui_scale();

        let scale_changed = scale != self.gui_scale;
        if scale_changed {
            let mapper = CoordinateMapper::with_density_factor(scale, self.config.density_factor);
            self.translator.set_mapper(mapper);
            self.scene.set_density(mapper.density());
            self.gui_scale = scale;
        }

        if scale_changed || (width, height) != self.viewport {
            self.surface.resize(width, height);
            let mapper = self.translator.mapper();
            self.scene.set_size(
                mapper.host_to_logical(width as f32).round() as u32,
                mapper.host_to_logical(height as f32).round() as u32,
            );
            self.viewport = (width, height);
        }
    }

    /// Renders one frame into the host's current frame target.
    ///
    /// Order per frame: synthetic pointer move at the current position,
    /// scroll momentum consumption, geometry refresh, scene paint into a
    /// fresh recording, embedded draw task cycle, composite.
    pub fn render(
        &mut self,
        host: &mut dyn HostDraw,
        pointer_x: f64,
        pointer_y: f64,
        _partial_tick: f32,
    ) {
        if self.state != BridgeState::Active {
            debug!("render on {:?} bridge ignored", self.state);
            return;
        }

        self.refresh_geometry();

        let pointer = self.translator.pointer_position(pointer_x, pointer_y);
        self.translator
            .pointer_move(self.scene.as_mut(), pointer_x, pointer_y);

        let (scroll_x, scroll_y) = self.scroll.advance(Instant::now(), self.config.scroll_decay);
        self.translator
            .forward_scroll(self.scene.as_mut(), pointer, scroll_x, scroll_y);

        let frame_nanos = self.epoch.elapsed().as_nanos() as u64;
        let window_height = self.surface.height();
        let mapper = self.translator.mapper();

        let mut recording = self.surface.begin_recording();
        self.scene.render(recording.canvas(), frame_nanos);
        self.tasks
            .poll(&mut recording, mapper, pointer, window_height, self.config.tooltips);
        recording.composite(host);
    }

    /// Host mouse-press entry. Returns whether the scene consumed the
    /// click; the host runs its own handling when it did not.
    pub fn mouse_clicked(&mut self, x: f64, y: f64, button: i32) -> bool {
        if self.state != BridgeState::Active {
            return false;
        }
        self.translator
            .pointer_press(self.scene.as_mut(), x, y, button)
    }

    /// Host mouse-release entry. Same consumed-flag contract as
    /// [`Bridge::mouse_clicked`].
    pub fn mouse_released(&mut self, x: f64, y: f64, button: i32) -> bool {
        if self.state != BridgeState::Active {
            return false;
        }
        self.translator
            .pointer_release(self.scene.as_mut(), x, y, button)
    }

    /// Host scroll entry. The delta lands in the accumulator; the decayed
    /// share reaches the scene on subsequent `render` calls.
    pub fn mouse_scrolled(&mut self, _x: f64, _y: f64, delta_x: f64, delta_y: f64) -> bool {
        if self.state != BridgeState::Active {
            return false;
        }
        self.scroll.push(delta_x as f32, delta_y as f32);
        true
    }

    /// Host key-down entry, with the translator's backspace edit fallback.
    pub fn key_pressed(&mut self, code: i32, scan_code: i32, modifiers: i32) -> bool {
        if self.state != BridgeState::Active {
            return false;
        }
        self.translator
            .key_pressed(self.scene.as_mut(), code, scan_code, modifiers)
    }

    /// Applies a scene-requested cursor shape to the host window.
    ///
    /// Elements request a shape whenever their hover state changes (hand
    /// over links, text beam over editable text); requests repeating the
    /// current shape never reach the host.
    pub fn set_cursor_icon(&mut self, icon: CursorIcon) {
        if self.state != BridgeState::Active || icon == self.cursor {
            return;
        }
        self.services.window.set_cursor(icon);
        self.cursor = icon;
    }

    /// Host key-up entry.
    pub fn key_released(&mut self, code: i32, scan_code: i32, modifiers: i32) -> bool {
        if self.state != BridgeState::Active {
            return false;
        }
        self.translator
            .key_released(self.scene.as_mut(), code, scan_code, modifiers)
    }

    /// Tears the bridge down: closes the scene, cancels any text session,
    /// uninstalls the character callback, hands the cursor back to the
    /// host, and drops every draw task so no further frame signals reach
    /// them. Idempotent.
    pub fn on_close(&mut self) {
        if self.state == BridgeState::Closed {
            return;
        }
        self.scene.close();
        self.text_input.lock().cancel();
        if self.cursor != CursorIcon::Arrow {
            self.services.window.set_cursor(CursorIcon::Arrow);
            self.cursor = CursorIcon::Arrow;
        }
        if self.char_callback_installed {
            self.services.text_input.uninstall_char_callback();
            self.char_callback_installed = false;
        }
        self.tasks.clear();
        self.state = BridgeState::Closed;
    }
}
