//! The host's native draw-call surface.
//!
//! All methods must be called on the thread that owns the host's rendering
//! context. The bridge guarantees correct sequencing (state save/restore,
//! scissor nesting, transform balance); the host guarantees nothing beyond
//! executing each call as issued.

use crate::coords::HostRect;

/// An inventory item reference the host can resolve to a drawable icon.
///
/// Opaque to the bridge; only the host interprets the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRef {
    pub id: String,
    pub count: u32,
}

impl ItemRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), count: 1 }
    }

    pub fn with_count(id: impl Into<String>, count: u32) -> Self {
        Self { id: id.into(), count }
    }
}

/// A host texture identifier, as returned by the host's texture manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRef(pub u32);

/// A normalized UV sub-rectangle into a host texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    pub u: f32,
    pub v: f32,
    pub w: f32,
    pub h: f32,
}

impl UvRect {
    /// The whole texture.
    pub const FULL: UvRect = UvRect { u: 0.0, v: 0.0, w: 1.0, h: 1.0 };
}

/// A 2D transform pushed around a group of host draw calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub tx: f32,
    pub ty: f32,
    pub scale: f32,
}

impl Transform2D {
    pub fn translation(tx: f32, ty: f32) -> Self {
        Self { tx, ty, scale: 1.0 }
    }

    pub fn new(tx: f32, ty: f32, scale: f32) -> Self {
        Self { tx, ty, scale }
    }
}

/// Primitive draw operations the bridge issues into the host renderer.
pub trait HostDraw {
    /// Composites an RGBA8 pixel buffer over the host's current frame
    /// target, covering the full window.
    fn blit_rgba(&mut self, pixels: &[u8], width: u32, height: u32);

    /// Draws a 16-unit inventory icon with its top-left at `(x, y)` under
    /// the current transform.
    fn draw_item_icon(&mut self, item: &ItemRef, x: f32, y: f32);

    /// Draws stack-count and durability decorations for `item`.
    fn draw_item_decorations(&mut self, item: &ItemRef, x: f32, y: f32);

    /// Draws the hover tooltip for `item` anchored at `(x, y)` in host
    /// pixels, untransformed.
    fn draw_item_tooltip(&mut self, item: &ItemRef, x: f32, y: f32);

    /// Draws a `width` x `height` quad sampling `uv` from `texture`, with
    /// its top-left at the current transform origin.
    fn draw_textured_quad(&mut self, texture: TextureRef, uv: UvRect, width: f32, height: f32);

    /// Whether a scissor rectangle is currently active.
    fn scissor_enabled(&self) -> bool;

    /// Enables (or updates) the scissor rectangle. `rect` uses the host's
    /// bottom-left-origin pixel convention.
    fn enable_scissor(&mut self, rect: HostRect);

    /// Disables scissoring entirely.
    fn disable_scissor(&mut self);

    fn push_transform(&mut self, transform: Transform2D);

    fn pop_transform(&mut self);

    /// Snapshots host render state the bridge may disturb (active shader,
    /// bound texture, blend mode).
    fn save_render_state(&mut self);

    /// Restores the snapshot taken by the matching `save_render_state`.
    fn restore_render_state(&mut self);
}
