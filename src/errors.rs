#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Worker runtime failed to start: {0}")]
    Runtime(String),

    #[error("Bridge is closed")]
    Closed,

    #[error("Asset decode failed: {0}")]
    AssetDecode(String),
}
