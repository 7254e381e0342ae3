pub mod assets;
pub mod bridge;
pub mod config;
pub mod coords;
pub mod elements;
pub mod entry;
pub mod errors;
pub mod event;
pub mod host;
pub mod i18n;
pub mod input;
pub mod scene;
pub mod surface;
pub mod tasks;

#[cfg(test)]
pub(crate) mod testutil;

pub use bridge::{Bridge, BridgeState};
pub use config::BridgeConfig;
pub use entry::{EmbeddedPanel, HudOverlay, ModalScreen};
pub use errors::BridgeError;
