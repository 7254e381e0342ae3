//! Asset bitmap decoding and caching.
//!
//! Decoding never happens on the render thread. [`AssetImages::request`]
//! spawns the load + decode on the worker runtime; the render thread polls
//! the result non-blockingly each frame and only ever touches the finished
//! bitmap. Decoded bitmaps live in a bounded LRU cache keyed by resource
//! identity. Two concurrent decodes of the same key are allowed; the results
//! are value-equal, so the last write wins without correctness impact.

use crate::errors::BridgeError;
use futures::FutureExt;
use hashbrown::HashMap;
use log::{info, warn};
use parking_lot::Mutex;
use std::fmt::Display;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Identifies a host resource, `namespace:path` style.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId {
    pub namespace: String,
    pub path: String,
}

impl AssetId {
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }
}

impl Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// A decoded RGBA8 bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert!(
            pixels.len() >= (width as usize) * (height as usize) * 4,
            "pixel buffer too small for bitmap dimensions"
        );
        Self { width, height, pixels }
    }
}

/// Decodes PNG bytes into an RGBA8 [`Bitmap`].
pub fn decode_png(bytes: &[u8]) -> Result<Bitmap, BridgeError> {
    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| BridgeError::AssetDecode(e.to_string()))?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| BridgeError::AssetDecode(e.to_string()))?;
    buf.truncate(frame.buffer_size());

    let (width, height) = (frame.width, frame.height);
    let pixels = match frame.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        other => {
            return Err(BridgeError::AssetDecode(format!(
                "unsupported color type {other:?}"
            )))
        }
    };

    Ok(Bitmap::new(width, height, pixels))
}

struct CacheEntry {
    bitmap: Arc<Bitmap>,
    last_used: u64,
}

/// Bounded least-recently-used bitmap cache.
pub struct ImageCache {
    capacity: usize,
    tick: u64,
    entries: HashMap<AssetId, CacheEntry>,
}

impl ImageCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            tick: 0,
            entries: HashMap::new(),
        }
    }

    /// Looks up `id`, promoting it to most-recently-used on a hit.
    pub fn get(&mut self, id: &AssetId) -> Option<Arc<Bitmap>> {
        self.tick += 1;
        let tick = self.tick;
        let entry = self.entries.get_mut(id)?;
        entry.last_used = tick;
        Some(entry.bitmap.clone())
    }

    /// Inserts `bitmap` under `id`, evicting the least-recently-used entry
    /// when at capacity. Re-inserting an existing key replaces its value.
    pub fn insert(&mut self, id: AssetId, bitmap: Arc<Bitmap>) {
        self.tick += 1;
        if !self.entries.contains_key(&id) && self.entries.len() >= self.capacity {
            if let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, e)| e.last_used)
                .map(|(k, _)| k.clone())
            {
                self.entries.remove(&oldest);
            }
        }
        self.entries.insert(
            id,
            CacheEntry {
                bitmap,
                last_used: self.tick,
            },
        );
    }

    pub fn contains(&self, id: &AssetId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shared decode pipeline: worker-side load + decode, render-side polling.
pub struct AssetImages {
    source: Arc<dyn crate::host::AssetSource>,
    runtime: tokio::runtime::Handle,
    cache: Mutex<ImageCache>,
    pending: Mutex<HashMap<AssetId, JoinHandle<Option<Bitmap>>>>,
}

impl AssetImages {
    pub fn new(
        source: Arc<dyn crate::host::AssetSource>,
        runtime: tokio::runtime::Handle,
        capacity: usize,
    ) -> Self {
        Self {
            source,
            runtime,
            cache: Mutex::new(ImageCache::new(capacity)),
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Starts a decode for `id` unless it is already cached or in flight.
    pub fn request(&self, id: &AssetId) {
        if self.cache.lock().contains(id) || self.pending.lock().contains_key(id) {
            return;
        }
        let source = self.source.clone();
        let task_id = id.clone();
        let handle = self.runtime.spawn_blocking(move || {
            match source.load(&task_id) {
                Ok(Some(bytes)) => match decode_png(&bytes) {
                    Ok(bitmap) => Some(bitmap),
                    Err(e) => {
                        info!("asset {task_id}: {e}");
                        None
                    }
                },
                Ok(None) => {
                    info!("asset {task_id} not found");
                    None
                }
                Err(e) => {
                    // Loader I/O failure is treated the same as not-found.
                    info!("asset {task_id} failed to load: {e}");
                    None
                }
            }
        });
        self.pending.lock().insert(id.clone(), handle);
    }

    /// Non-blocking lookup. Returns the decoded bitmap once the worker has
    /// finished, `None` while pending or when the asset is missing.
    pub fn poll(&self, id: &AssetId) -> Option<Arc<Bitmap>> {
        if let Some(bitmap) = self.cache.lock().get(id) {
            return Some(bitmap);
        }

        let mut pending = self.pending.lock();
        let handle = pending.get_mut(id)?;
        let joined = handle.now_or_never()?;
        pending.remove(id);
        drop(pending);

        match joined {
            Ok(Some(bitmap)) => {
                let bitmap = Arc::new(bitmap);
                self.cache.lock().insert(id.clone(), bitmap.clone());
                Some(bitmap)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("asset decode task for {id} did not finish: {e}");
                None
            }
        }
    }
}
