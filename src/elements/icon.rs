//! Inventory icon element.

use crate::host::{HostDraw, ItemRef, Transform2D};
use crate::tasks::{FrameContext, FramePainter};

/// Intrinsic edge length of a host inventory icon, in logical units.
pub const ICON_SIZE: f32 = 16.0;

/// Draws a host inventory icon centered in the element's bounds, uniformly
/// scaled to fit. While hovered, draws the item's tooltip at the pointer.
pub struct ItemIcon {
    item: ItemRef,
    decorations: bool,
    tooltip: bool,
}

impl ItemIcon {
    pub fn new(item: ItemRef) -> Self {
        Self {
            item,
            decorations: true,
            tooltip: true,
        }
    }

    pub fn decorations(mut self, on: bool) -> Self {
        self.decorations = on;
        self
    }

    pub fn tooltip(mut self, on: bool) -> Self {
        self.tooltip = on;
        self
    }
}

impl FramePainter for ItemIcon {
    fn paint(&mut self, ctx: &FrameContext, host: &mut dyn HostDraw) {
        let icon_px = ctx.mapper.logical_to_host(ICON_SIZE);
        let width = ctx.host_bounds.width as f32;
        let height = ctx.host_bounds.height as f32;
        let scale = (width / icon_px).min(height / icon_px);
        let offset_x = (width - icon_px * scale) / 2.0;
        let offset_y = (height - icon_px * scale) / 2.0;

        host.push_transform(Transform2D::new(
            ctx.host_bounds.x as f32 + offset_x,
            ctx.host_bounds.y as f32 + offset_y,
            scale,
        ));
        host.draw_item_icon(&self.item, 0.0, 0.0);
        if self.decorations {
            host.draw_item_decorations(&self.item, 0.0, 0.0);
        }
        host.pop_transform();
    }

    fn paint_overlay(&mut self, ctx: &FrameContext, host: &mut dyn HostDraw) {
        if self.tooltip && ctx.tooltips && ctx.logical_bounds.contains(ctx.pointer) {
            let anchor = ctx.mapper.point_to_host(ctx.pointer);
            host.draw_item_tooltip(&self.item, anchor.x, anchor.y);
        }
    }
}
