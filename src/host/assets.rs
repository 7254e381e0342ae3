use crate::assets::AssetId;

/// The host's resource/asset loader.
///
/// Returns the raw encoded bytes for a resource, or `None` when the resource
/// does not exist. I/O failures may surface as `Err`; the bridge treats them
/// as not-found and logs, never propagates.
///
/// Called from the worker runtime, never from the render thread.
pub trait AssetSource: Send + Sync {
    fn load(&self, id: &AssetId) -> anyhow::Result<Option<Vec<u8>>>;
}
