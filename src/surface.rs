//! Offscreen drawing surface and frame recording.
//!
//! The surface owns the canvas the scene paints into, sized in host physical
//! pixels. Exactly one [`Recording`] can be open per frame: the handle
//! mutably borrows the surface, so opening a second one is a compile error
//! rather than a runtime check. Compositing consumes the handle, blits the
//! canvas over the host frame target, runs the frame's deferred host-native
//! draws in order, and restores the host's render state before returning.

use crate::host::HostDraw;
use crate::scene::{BufferCanvas, SceneCanvas};
use log::debug;

/// A host-native draw queued by an embedded element, executed after the
/// canvas blit during composite.
pub type DeferredDraw = Box<dyn FnOnce(&mut dyn HostDraw)>;

/// GPU-resident offscreen canvas for one bridge.
pub struct Surface {
    width: u32,
    height: u32,
    canvas: BufferCanvas,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            canvas: BufferCanvas::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resizes the canvas. Idempotent: unchanged dimensions reallocate
    /// nothing. Returns whether a reallocation happened.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        debug!("surface resize {}x{} -> {width}x{height}", self.width, self.height);
        self.width = width;
        self.height = height;
        self.canvas = BufferCanvas::new(width, height);
        true
    }

    /// Opens the frame's recording. The canvas is cleared; the returned
    /// handle must be composited (or dropped, discarding the frame) before
    /// another recording can begin.
    pub fn begin_recording(&mut self) -> Recording<'_> {
        self.canvas.clear();
        Recording {
            surface: self,
            deferred: Vec::new(),
        }
    }
}

/// An open frame recording. Holds the surface's canvas and the frame's
/// deferred host draws; consumed by [`Recording::composite`].
pub struct Recording<'a> {
    surface: &'a mut Surface,
    deferred: Vec<DeferredDraw>,
}

impl Recording<'_> {
    /// The canvas the scene paints this frame into.
    pub fn canvas(&mut self) -> &mut dyn SceneCanvas {
        &mut self.surface.canvas
    }

    /// Queues a host-native draw to run after the canvas blit.
    pub fn defer(&mut self, draw: DeferredDraw) {
        self.deferred.push(draw);
    }

    /// Number of draws queued so far this frame.
    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }

    /// Finishes the frame: blits the canvas into the host frame target and
    /// runs the deferred draws in submission order. Host render state is
    /// saved on entry and restored on return.
    pub fn composite(self, host: &mut dyn HostDraw) {
        host.save_render_state();
        host.blit_rgba(
            self.surface.canvas.pixels(),
            self.surface.width,
            self.surface.height,
        );
        for draw in self.deferred {
            draw(host);
        }
        host.restore_render_state();
    }
}
