//! Capability interfaces the embedding host supplies.
//!
//! The bridge never manages the host's graphics device, clipboard storage,
//! resource packs, or language data directly. It sequences calls into these
//! traits and treats everything behind them as opaque.

pub mod assets;
pub mod clipboard;
pub mod draw;
pub mod text_input;
pub mod translation;
pub mod window;

pub use assets::AssetSource;
pub use clipboard::HostClipboard;
pub use draw::{HostDraw, ItemRef, TextureRef, Transform2D, UvRect};
pub use text_input::{CharSink, HostTextInput};
pub use translation::TranslationSource;
pub use window::{CursorIcon, HostWindow};

use std::sync::Arc;

/// The full set of host collaborators a bridge is constructed over.
#[derive(Clone)]
pub struct HostServices {
    pub window: Arc<dyn HostWindow>,
    pub clipboard: Arc<dyn HostClipboard>,
    pub text_input: Arc<dyn HostTextInput>,
    pub assets: Arc<dyn AssetSource>,
    pub translations: Arc<dyn TranslationSource>,
}
