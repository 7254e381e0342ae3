//! Asset-backed image element.

use crate::assets::{AssetId, AssetImages};
use crate::coords::HostRect;
use crate::scene::SceneCanvas;
use std::sync::Arc;

/// Paints a decoded asset bitmap into the scene canvas.
///
/// Construction kicks off the off-thread decode; until it finishes (or when
/// the asset is missing) the element paints nothing at all. No failure ever
/// escapes this element.
pub struct AssetImage {
    id: AssetId,
    images: Arc<AssetImages>,
}

impl AssetImage {
    pub fn new(id: AssetId, images: Arc<AssetImages>) -> Self {
        images.request(&id);
        Self { id, images }
    }

    /// Whether the bitmap has been decoded and is ready to paint.
    pub fn ready(&self) -> bool {
        self.images.poll(&self.id).is_some()
    }

    /// Paints the bitmap scaled into `dst`, or nothing while unavailable.
    pub fn paint(&self, canvas: &mut dyn SceneCanvas, dst: HostRect) {
        if let Some(bitmap) = self.images.poll(&self.id) {
            canvas.draw_bitmap(&bitmap, dst);
        }
    }
}
