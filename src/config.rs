use crate::coords::DENSITY_FACTOR;

/// Tunables for a single bridge instance.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Relation between host GUI scale and scene density. Applied uniformly;
    /// see [`DENSITY_FACTOR`].
    pub density_factor: f32,
    /// Per-second decay base for pending scroll momentum.
    pub scroll_decay: f32,
    /// Maximum number of decoded asset bitmaps kept in memory.
    pub image_cache_capacity: usize,
    /// Whether hovering icon elements draw tooltips.
    pub tooltips: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            density_factor: DENSITY_FACTOR,
            scroll_decay: 0.3,
            image_cache_capacity: 64,
            tooltips: true,
        }
    }
}
