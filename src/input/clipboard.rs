//! Clipboard proxy.
//!
//! Reads are cheap and run inline. Writes can involve data-transfer
//! negotiation with the platform, so they run on the worker runtime;
//! failures there are swallowed as no-ops and never reach the scene.

use crate::host::HostClipboard;
use log::debug;
use std::sync::Arc;

/// Thin read/write proxy over the host clipboard. Owns no state.
pub struct ClipboardBridge {
    host: Arc<dyn HostClipboard>,
    runtime: tokio::runtime::Handle,
}

impl ClipboardBridge {
    pub fn new(host: Arc<dyn HostClipboard>, runtime: tokio::runtime::Handle) -> Self {
        Self { host, runtime }
    }

    /// Current clipboard text, `None` when empty.
    pub fn read(&self) -> Option<String> {
        self.host.read()
    }

    /// Schedules a clipboard write off the event thread. Completion never
    /// gates a frame; failure is a logged no-op.
    pub fn write(&self, text: String) {
        let host = self.host.clone();
        self.runtime.spawn_blocking(move || {
            if let Err(e) = host.write(&text) {
                debug!("clipboard write failed: {e}");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::StubClipboard;
    use std::time::Duration;

    #[test]
    fn read_passes_through() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let host = Arc::new(StubClipboard::default());
        *host.text.lock() = Some("copied".to_string());
        let clipboard = ClipboardBridge::new(host, runtime.handle().clone());
        assert_eq!(clipboard.read(), Some("copied".to_string()));
    }

    #[test]
    fn absent_text_reads_as_none() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let clipboard =
            ClipboardBridge::new(Arc::new(StubClipboard::default()), runtime.handle().clone());
        assert_eq!(clipboard.read(), None);
    }

    #[test]
    fn write_lands_off_thread() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let host = Arc::new(StubClipboard::default());
        let clipboard = ClipboardBridge::new(host.clone(), runtime.handle().clone());

        clipboard.write("pasted".to_string());
        for _ in 0..200 {
            if host.text.lock().is_some() {
                break;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        assert_eq!(*host.text.lock(), Some("pasted".to_string()));
    }

    #[test]
    fn failed_write_is_a_silent_noop() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let host = Arc::new(StubClipboard {
            fail_writes: true,
            ..Default::default()
        });
        let clipboard = ClipboardBridge::new(host.clone(), runtime.handle().clone());

        clipboard.write("never lands".to_string());
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(*host.text.lock(), None);
    }
}
