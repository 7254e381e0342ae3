//! Text input session routing.
//!
//! While an element in the scene holds text focus, the host's character
//! callback must deliver committed text to it. The session is the open or
//! closed switch for that routing: open, every codepoint becomes a
//! [`EditCommand::CommitText`]; closed, character input is dropped.

use crate::event::EditCommand;
use log::debug;
use parking_lot::Mutex;
use std::sync::Arc;

/// Receives edit commands for the focused element while its session is open.
pub type EditSink = Box<dyn FnMut(EditCommand) + Send>;

/// The bridge's single text-input session slot.
///
/// At most one session is open per bridge. Opening while one is active
/// replaces it; cancelling twice is a no-op.
#[derive(Default)]
pub struct TextInput {
    session: Option<EditSink>,
}

impl TextInput {
    pub fn new() -> Self {
        Self { session: None }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Opens a session routing edit commands into `sink`. Replaces, never
    /// stacks, any session already open.
    pub fn start_session(&mut self, sink: EditSink) {
        if self.session.is_some() {
            debug!("text input session replaced while open");
        }
        self.session = Some(sink);
    }

    /// Closes the open session, discarding any partial state. No-op when
    /// already closed.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Routes committed text to the open session. Returns whether a session
    /// consumed it.
    pub fn commit(&mut self, text: &str) -> bool {
        match self.session.as_mut() {
            Some(sink) => {
                sink(EditCommand::CommitText(text.to_string()));
                true
            }
            None => false,
        }
    }

    /// Routes a backspace edit to the open session. Returns whether a
    /// session consumed it.
    pub fn backspace(&mut self) -> bool {
        match self.session.as_mut() {
            Some(sink) => {
                sink(EditCommand::Backspace);
                true
            }
            None => false,
        }
    }
}

/// The session slot, shared between the bridge, the translator, and the
/// host character callback.
pub type SharedTextInput = Arc<Mutex<TextInput>>;

pub fn shared() -> SharedTextInput {
    Arc::new(Mutex::new(TextInput::new()))
}
