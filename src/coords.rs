//! Coordinate mapping between host pixel space and scene logical space.
//!
//! The host renders in its own pixel space, scaled by a user-configurable
//! "GUI scale". The embedded scene lays out in logical units, scaled by a
//! density derived from that same GUI scale. A [`CoordinateMapper`] holds the
//! current scale and performs all conversions between the two spaces.
//!
//! Every bound handed to an embedded draw task must be produced through this
//! type. Ad-hoc conversions at call sites break pixel-exact nesting between
//! scene layout and host-native draws.
//!
//! # Examples
//!
//! ```
//! use composite_bridge::coords::{CoordinateMapper, LogicalRect};
//!
//! let mapper = CoordinateMapper::new(2.0);
//! let bounds = LogicalRect::new(10.0, 20.0, 32.0, 32.0);
//! let host = mapper.rect_to_host(bounds);
//! assert_eq!((host.x, host.y, host.width, host.height), (20, 40, 64, 64));
//! ```

/// Fixed relation between the host GUI scale and the scene density.
///
/// The scene density is always `gui_scale * DENSITY_FACTOR`. This is a single
/// named constant applied uniformly; no call site derives its own factor.
pub const DENSITY_FACTOR: f32 = 1.0;

/// A point in scene logical space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LogicalPoint {
    pub x: f32,
    pub y: f32,
}

impl LogicalPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A point in host pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct HostPoint {
    pub x: f32,
    pub y: f32,
}

impl HostPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in scene logical space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LogicalRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LogicalRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether `point` falls inside this rectangle (right/bottom exclusive).
    pub fn contains(&self, point: LogicalPoint) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }
}

/// An axis-aligned rectangle in host pixel space, integer-snapped.
///
/// Used for scissor rectangles and surface blits, where the host expects
/// whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct HostRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl HostRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Converts a top-left-origin rectangle to the host's bottom-left-origin
    /// scissor convention.
    pub fn flip_y(&self, window_height: u32) -> HostRect {
        HostRect {
            x: self.x,
            y: window_height as i32 - (self.y + self.height as i32),
            width: self.width,
            height: self.height,
        }
    }
}

/// Converts between host pixel space and scene logical space.
///
/// Pure and stateless apart from the captured GUI scale; the bridge rebuilds
/// it whenever the host reports a scale change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    gui_scale: f32,
    density_factor: f32,
}

impl CoordinateMapper {
    /// Creates a mapper for the given host GUI scale, using the crate-wide
    /// [`DENSITY_FACTOR`].
    ///
    /// A scale of zero would make the mapping degenerate; it is clamped to a
    /// minimum of 1.0, matching host behavior for uninitialized windows.
    pub fn new(gui_scale: f32) -> Self {
        Self::with_density_factor(gui_scale, DENSITY_FACTOR)
    }

    /// Creates a mapper with an explicit density factor (from
    /// [`BridgeConfig`](crate::config::BridgeConfig)).
    pub fn with_density_factor(gui_scale: f32, density_factor: f32) -> Self {
        Self {
            gui_scale: if gui_scale > 0.0 { gui_scale } else { 1.0 },
            density_factor,
        }
    }

    /// The host GUI scale this mapper was built from.
    pub fn gui_scale(&self) -> f32 {
        self.gui_scale
    }

    /// The scene density for this scale. See [`DENSITY_FACTOR`].
    pub fn density(&self) -> f32 {
        self.gui_scale * self.density_factor
    }

    /// Scales a host-pixel scalar to logical units.
    pub fn host_to_logical(&self, value: f32) -> f32 {
        value / self.gui_scale
    }

    /// Scales a logical scalar to host pixels.
    pub fn logical_to_host(&self, value: f32) -> f32 {
        value * self.gui_scale
    }

    /// Maps a host-pixel point into logical space.
    pub fn point_to_logical(&self, point: HostPoint) -> LogicalPoint {
        LogicalPoint {
            x: self.host_to_logical(point.x),
            y: self.host_to_logical(point.y),
        }
    }

    /// Maps a logical point into host pixel space.
    pub fn point_to_host(&self, point: LogicalPoint) -> HostPoint {
        HostPoint {
            x: self.logical_to_host(point.x),
            y: self.logical_to_host(point.y),
        }
    }

    /// Maps a logical rectangle into an integer-snapped host rectangle.
    pub fn rect_to_host(&self, rect: LogicalRect) -> HostRect {
        let x = self.logical_to_host(rect.x);
        let y = self.logical_to_host(rect.y);
        HostRect {
            x: x.round() as i32,
            y: y.round() as i32,
            width: self.logical_to_host(rect.width).round().max(0.0) as u32,
            height: self.logical_to_host(rect.height).round().max(0.0) as u32,
        }
    }
}
