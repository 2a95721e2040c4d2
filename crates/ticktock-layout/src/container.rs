use ticktock_core::{ElementId, LayoutObserver, Point, Rect, Size};

use crate::element::{DigitSlot, DraggableElement, ElementStyle, Gesture};

/// Padding added around the slots' union when the container auto-fits.
pub const BOUNDS_PADDING: i32 = 40;

// ──────────────────────────────────────────────
// Child tracking
// ──────────────────────────────────────────────

/// Geometry captured when a container gesture starts: the container's own
/// rect and every tracked slot's rect, in the same order as the slots.
#[derive(Debug, Clone, Default)]
struct ChildSnapshot {
    origin: Rect,
    children: Vec<Rect>,
}

impl ChildSnapshot {
    fn capture(&mut self, origin: Rect, slots: &[DigitSlot]) {
        self.origin = origin;
        self.children = slots.iter().map(|s| s.rect()).collect();
    }
}

/// The container's side of the resize notifications: snapshot on begin,
/// proportionally rescale every slot on change.
struct ChildScaler<'a> {
    snapshot: &'a mut ChildSnapshot,
    slots: &'a mut [DigitSlot],
}

impl LayoutObserver for ChildScaler<'_> {
    fn on_resize_begin(&mut self, _element: ElementId, rect: Rect) {
        self.snapshot.capture(rect, self.slots);
    }

    fn on_resize_changed(&mut self, _element: ElementId, rect: Rect) {
        scale_children(self.snapshot, rect, self.slots);
    }
}

/// Maps each snapshotted child from the original container rect onto `current`,
/// keeping its relative offset and size ratio.
fn scale_children(snapshot: &ChildSnapshot, current: Rect, slots: &mut [DigitSlot]) {
    let origin = snapshot.origin;
    if origin.size().is_degenerate() {
        log::debug!("container snapshot has zero size, skipping child rescale");
        return;
    }
    let scale_x = current.width as f64 / origin.width as f64;
    let scale_y = current.height as f64 / origin.height as f64;

    for (slot, child) in slots.iter_mut().zip(snapshot.children.iter()) {
        let rel_x = (child.x - origin.x) as f64;
        let rel_y = (child.y - origin.y) as f64;
        slot.set_rect(Rect::new(
            current.x + (rel_x * scale_x) as i32,
            current.y + (rel_y * scale_y) as i32,
            (child.width as f64 * scale_x) as i32,
            (child.height as f64 * scale_y) as i32,
        ));
    }
}

// ──────────────────────────────────────────────
// ContainerElement
// ──────────────────────────────────────────────

/// The group box around the slots. It does not own them: it tracks them,
/// deriving its rect from theirs (auto-fit) and driving theirs when dragged
/// or resized. Visible only in edit mode.
#[derive(Debug, Clone)]
pub struct ContainerElement {
    element: DraggableElement,
    snapshot: ChildSnapshot,
}

impl ContainerElement {
    pub fn new(rect: Rect) -> Self {
        Self {
            element: DraggableElement::new(ElementId::Container, rect, ElementStyle::CONTAINER),
            snapshot: ChildSnapshot::default(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.element.rect()
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.element.set_rect(rect);
    }

    pub fn element(&self) -> &DraggableElement {
        &self.element
    }

    pub fn gesture(&self) -> Gesture {
        self.element.gesture()
    }

    pub fn is_visible(&self) -> bool {
        self.element.is_editing()
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.element.set_editing(editing);
    }

    pub fn contains(&self, pointer: Point) -> bool {
        self.element.contains(pointer)
    }

    pub fn in_resize_handle(&self, pointer: Point) -> bool {
        self.element.in_resize_handle(pointer)
    }

    pub fn begin_drag(&mut self, pointer: Point, slots: &[DigitSlot]) -> bool {
        if !self.element.begin_drag(pointer) {
            return false;
        }
        self.snapshot.capture(self.element.rect(), slots);
        true
    }

    pub fn begin_resize(&mut self, pointer: Point, slots: &mut [DigitSlot]) -> bool {
        let mut scaler = ChildScaler {
            snapshot: &mut self.snapshot,
            slots,
        };
        self.element.begin_resize(pointer, &mut scaler)
    }

    /// Moves the container inside `window` (margin 10) and translates every
    /// slot by the delta the container actually moved after clamping.
    pub fn update_drag(&mut self, pointer: Point, window: Size, slots: &mut [DigitSlot]) -> bool {
        let Some(origin) = self.element.update_drag(pointer, window) else {
            return false;
        };
        let applied = origin - self.snapshot.origin.origin();
        for (slot, child) in slots.iter_mut().zip(self.snapshot.children.iter()) {
            slot.set_rect(child.translate(applied));
        }
        true
    }

    /// Resizes the container, shrinking it to fit the space left before the
    /// window's right/bottom edge, then rescales every slot in lock-step.
    pub fn update_resize(
        &mut self,
        pointer: Point,
        aspect_locked: bool,
        window: Size,
        slots: &mut [DigitSlot],
    ) -> bool {
        if let Gesture::Resizing { start_rect, .. } = self.element.gesture() {
            if start_rect.is_empty() {
                log::debug!("container resize started from zero size, ignoring");
                return false;
            }
        }
        let rect = self.element.rect();
        let min = self.element.style().min_size;
        let margin = self.element.style().margin;
        let max = Size::new(
            (window.width - rect.x - margin).max(min.width),
            (window.height - rect.y - margin).max(min.height),
        );
        let mut scaler = ChildScaler {
            snapshot: &mut self.snapshot,
            slots,
        };
        self.element
            .update_resize(pointer, aspect_locked, Some(max), &mut scaler)
            .is_some()
    }

    pub fn end_gesture(&mut self) -> bool {
        self.element.end_gesture()
    }

    /// Sets the rect to the union of `children` grown by [`BOUNDS_PADDING`].
    /// No-op on an empty set.
    pub fn recompute_bounds(&mut self, children: &[Rect]) -> bool {
        let Some((first, rest)) = children.split_first() else {
            return false;
        };
        let union = rest.iter().fold(*first, |acc, r| acc.union(r));
        self.element.set_rect(union.inflate(BOUNDS_PADDING));
        true
    }
}
