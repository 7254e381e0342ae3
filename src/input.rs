//! Host input translation.
//!
//! Converts host-native pointer, keyboard, scroll, and clipboard traffic
//! into the scene's event vocabulary, and owns the text-input session used
//! for IME-like character commit. All of this runs on the single
//! presentation thread; the only off-thread work is clipboard write
//! negotiation.

pub mod clipboard;
pub mod scroll;
pub mod text;
pub mod translator;

pub use clipboard::ClipboardBridge;
pub use scroll::ScrollAccumulator;
pub use text::{EditSink, SharedTextInput, TextInput};
pub use translator::InputTranslator;
