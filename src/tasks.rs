//! Per-frame draw tasks for embedded custom-draw elements.
//!
//! An element that issues host-native draws registers a task here once it
//! has been laid out. The arena polls every task exactly once per frame, on
//! the presentation thread: still attached, the task's painter is queued
//! into the frame recording, wrapped in scissor bookkeeping; detached, the
//! task is dropped silently, and no draw is issued that frame or ever
//! again. Detachment is the only cancellation signal.
//!
//! Task records are plain data (shared bounds slot + painter). The host's
//! frame tick drives them; there is no suspended coroutine to resume.

use crate::coords::{CoordinateMapper, HostRect, LogicalPoint, LogicalRect};
use crate::host::HostDraw;
use crate::surface::Recording;
use hashbrown::HashMap;
use log::debug;
use parking_lot::Mutex;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use uuid::Uuid;

/// Identity of an embedded custom-draw element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

/// The layout-to-task channel for one element: the scene's layout pass
/// writes the element's logical bounds here, the task arena reads them.
/// `None` means the element is not (or no longer) attached to the live
/// scene tree.
#[derive(Clone, Default)]
pub struct DrawHandle {
    bounds: Arc<Mutex<Option<LogicalRect>>>,
}

impl DrawHandle {
    /// A fresh, detached handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called by layout when the element is positioned or repositioned.
    pub fn set_bounds(&self, bounds: LogicalRect) {
        *self.bounds.lock() = Some(bounds);
    }

    /// Called when the element leaves the scene tree.
    pub fn detach(&self) {
        *self.bounds.lock() = None;
    }

    pub fn bounds(&self) -> Option<LogicalRect> {
        *self.bounds.lock()
    }

    pub fn is_attached(&self) -> bool {
        self.bounds.lock().is_some()
    }
}

/// Everything a painter needs for one frame, precomputed through the
/// coordinate mapper so no painter converts coordinates ad hoc.
#[derive(Clone, Copy, Debug)]
pub struct FrameContext {
    /// Element bounds in host pixels, top-left origin.
    pub host_bounds: HostRect,
    /// Element bounds in logical space.
    pub logical_bounds: LogicalRect,
    pub mapper: CoordinateMapper,
    /// Pointer position in logical space.
    pub pointer: LogicalPoint,
    /// Host window height, for the scissor origin flip.
    pub window_height: u32,
    /// Bridge-wide tooltip switch.
    pub tooltips: bool,
}

/// One embedded element's host-native drawing, invoked once per frame while
/// the element stays attached.
pub trait FramePainter {
    /// Draws inside the element's bounds. When no enclosing scissor is
    /// active, one clipped to those bounds is enabled for the duration of
    /// this call; an ancestor's scissor rect is honored as-is otherwise.
    fn paint(&mut self, ctx: &FrameContext, host: &mut dyn HostDraw);

    /// Draws after any scissor this element enabled is gone. Used for
    /// hover tooltips that escape the element's bounds.
    fn paint_overlay(&mut self, _ctx: &FrameContext, _host: &mut dyn HostDraw) {}
}

struct TaskRecord {
    handle: DrawHandle,
    painter: Rc<RefCell<dyn FramePainter>>,
}

/// Arena of live draw tasks, keyed by element identity.
pub struct FrameTasks {
    tasks: HashMap<ElementId, TaskRecord>,
}

impl FrameTasks {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Arms (or re-arms) the task for `id`. Registering an id that already
    /// has a task replaces it.
    pub fn register(
        &mut self,
        id: ElementId,
        handle: DrawHandle,
        painter: Rc<RefCell<dyn FramePainter>>,
    ) {
        self.tasks.insert(id, TaskRecord { handle, painter });
    }

    /// Drops every task without running it. Used when the bridge closes.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Runs one frame cycle: removes detached tasks, queues the rest into
    /// the recording. The queued closure clips to the element's host-pixel
    /// bounds unless an enclosing region already holds a scissor, in which
    /// case the ancestor's rect is left untouched; a scissor this element
    /// enabled is disabled again before the painter draws its unclipped
    /// overlay.
    pub fn poll(
        &mut self,
        recording: &mut Recording<'_>,
        mapper: CoordinateMapper,
        pointer: LogicalPoint,
        window_height: u32,
        tooltips: bool,
    ) {
        self.tasks.retain(|id, record| {
            let Some(logical_bounds) = record.handle.bounds() else {
                debug!("draw task {id:?} detached, stopping");
                return false;
            };

            let ctx = FrameContext {
                host_bounds: mapper.rect_to_host(logical_bounds),
                logical_bounds,
                mapper,
                pointer,
                window_height,
                tooltips,
            };
            let painter = Rc::clone(&record.painter);
            recording.defer(Box::new(move |host| {
                let was_enabled = host.scissor_enabled();
                if !was_enabled {
                    host.enable_scissor(ctx.host_bounds.flip_y(ctx.window_height));
                }
                painter.borrow_mut().paint(&ctx, host);
                if !was_enabled {
                    host.disable_scissor();
                }
                painter.borrow_mut().paint_overlay(&ctx, host);
            }));
            true
        });
    }
}

impl Default for FrameTasks {
    fn default() -> Self {
        Self::new()
    }
}
