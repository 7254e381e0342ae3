//! The retained-mode scene, seen from the bridge.
//!
//! The scene's composition, layout, and paint engine are external. The
//! bridge only needs the operations below: size/density updates, event
//! dispatch with a consumed flag, per-frame painting into an offscreen
//! canvas, and teardown.

use crate::assets::Bitmap;
use crate::coords::HostRect;
use crate::event::{KeyEvent, PointerEvent};

/// The embedded retained-mode UI scene.
///
/// The content root is supplied when the implementation is constructed and
/// never replaced; recomposition mutates it in place.
pub trait Scene {
    /// Updates the scene's logical size.
    fn set_size(&mut self, width: u32, height: u32);

    /// Updates the scene's logical-to-physical density.
    fn set_density(&mut self, density: f32);

    /// Dispatches a pointer event. Returns whether the scene consumed it.
    fn send_pointer_event(&mut self, event: &PointerEvent) -> bool;

    /// Dispatches a key event. Returns whether the scene consumed it.
    fn send_key_event(&mut self, event: &KeyEvent) -> bool;

    /// Recomposes as needed and paints one frame into `canvas`.
    /// `frame_nanos` is a monotonic frame timestamp driving animations.
    fn render(&mut self, canvas: &mut dyn SceneCanvas, frame_nanos: u64);

    /// Releases the scene's resources. Called once, when the bridge closes.
    fn close(&mut self);
}

/// The offscreen paint target a scene renders into.
///
/// Sized in host physical pixels; the surface owns one per bridge and
/// composites it back into the host frame after painting.
pub trait SceneCanvas {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Resets the canvas to fully transparent.
    fn clear(&mut self);

    /// Draws `bitmap` scaled into `dst`, clipped to the canvas.
    fn draw_bitmap(&mut self, bitmap: &Bitmap, dst: HostRect);

    /// The finished frame as tightly-packed RGBA8 rows.
    fn pixels(&self) -> &[u8];
}

/// CPU-side RGBA8 canvas backing the offscreen surface.
pub struct BufferCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl BufferCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        }
    }
}

impl SceneCanvas for BufferCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, dst: HostRect) {
        if dst.width == 0 || dst.height == 0 || bitmap.width == 0 || bitmap.height == 0 {
            return;
        }
        // Nearest-neighbor scale into the destination, skipping rows and
        // columns that fall outside the canvas.
        for row in 0..dst.height {
            let out_y = dst.y + row as i32;
            if out_y < 0 || out_y >= self.height as i32 {
                continue;
            }
            let src_y = (row as u64 * bitmap.height as u64 / dst.height as u64) as u32;
            for col in 0..dst.width {
                let out_x = dst.x + col as i32;
                if out_x < 0 || out_x >= self.width as i32 {
                    continue;
                }
                let src_x = (col as u64 * bitmap.width as u64 / dst.width as u64) as u32;
                // Offsets in usize; u32 products overflow for gigapixel
                // bitmaps.
                let src = (src_y as usize * bitmap.width as usize + src_x as usize) * 4;
                let out = (out_y as usize * self.width as usize + out_x as usize) * 4;
                self.pixels[out..out + 4].copy_from_slice(&bitmap.pixels[src..src + 4]);
            }
        }
    }

    fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
