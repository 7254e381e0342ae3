//! Leaf UI elements that bridge host content into the scene.
//!
//! Two kinds: frame painters ([`icon`], [`texture`]) issue host-native
//! draws inside their laid-out bounds every frame, via the task arena;
//! canvas elements ([`image`], [`text`]) resolve host resources and paint
//! or expose them through the scene's own pipeline.

pub mod icon;
pub mod image;
pub mod text;
pub mod texture;

pub use icon::ItemIcon;
pub use image::AssetImage;
pub use text::TranslatedLabel;
pub use texture::TextureQuad;
