/// Cursor shapes the bridge can request from the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    #[default]
    Arrow,
    Hand,
    Text,
    Crosshair,
}

/// Read access to the host window's current dimensions and scale, plus the
/// cursor shape switch.
///
/// The bridge samples the geometry once per frame; a size or scale change
/// observed between frames triggers a surface resize before the next
/// recording.
pub trait HostWindow: Send + Sync {
    /// Window width in host physical pixels.
    fn width(&self) -> u32;

    /// Window height in host physical pixels.
    fn height(&self) -> u32;

    /// The host's current GUI scale factor.
    fn gui_scale(&self) -> f32;

    /// Switches the window's cursor shape.
    fn set_cursor(&self, icon: CursorIcon);
}
