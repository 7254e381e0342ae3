/// Receives each codepoint the host delivers while a character callback is
/// installed.
pub type CharSink = Box<dyn FnMut(char) + Send>;

/// Installation point for the host's character-input callback.
///
/// At most one callback is live at a time: installing while one is active
/// replaces it, never stacks. The bridge installs on `init` and uninstalls
/// on close.
pub trait HostTextInput: Send + Sync {
    fn install_char_callback(&self, sink: CharSink);

    fn uninstall_char_callback(&self);
}
