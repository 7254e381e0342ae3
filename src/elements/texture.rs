//! Raw host-texture element.

use crate::host::{HostDraw, TextureRef, Transform2D, UvRect};
use crate::tasks::{FrameContext, FramePainter};

/// Fills the element's bounds with a quad sampling a UV sub-rectangle of a
/// host texture.
pub struct TextureQuad {
    texture: TextureRef,
    uv: UvRect,
}

impl TextureQuad {
    /// A quad sampling the whole texture.
    pub fn new(texture: TextureRef) -> Self {
        Self {
            texture,
            uv: UvRect::FULL,
        }
    }

    /// A quad sampling the `u, v, w, h` sub-rectangle (normalized).
    pub fn with_uv(texture: TextureRef, uv: UvRect) -> Self {
        Self { texture, uv }
    }
}

impl FramePainter for TextureQuad {
    fn paint(&mut self, ctx: &FrameContext, host: &mut dyn HostDraw) {
        host.push_transform(Transform2D::translation(
            ctx.host_bounds.x as f32,
            ctx.host_bounds.y as f32,
        ));
        host.draw_textured_quad(
            self.texture,
            self.uv,
            ctx.host_bounds.width as f32,
            ctx.host_bounds.height as f32,
        );
        host.pop_transform();
    }
}
