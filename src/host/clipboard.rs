/// The host's clipboard storage.
///
/// Reads happen inline on the event thread. Writes may perform data-transfer
/// negotiation; the bridge always runs them on the worker runtime so a slow
/// or failing transfer never gates a frame.
pub trait HostClipboard: Send + Sync {
    /// Current clipboard text. Absent text is `None`, never an error.
    fn read(&self) -> Option<String>;

    /// Replaces the clipboard text. Failures (unsupported flavor, transfer
    /// exception) are reported here but the bridge swallows them as no-ops.
    fn write(&self, text: &str) -> anyhow::Result<()>;
}
