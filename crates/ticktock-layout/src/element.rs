use ticktock_core::{ElementId, Glyph, LayoutObserver, Point, Rect, Size};

// ──────────────────────────────────────────────
// Gesture state
// ──────────────────────────────────────────────

/// Which handle a resize gesture was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    Corner,
    Right,
    Bottom,
}

/// Transient per-element gesture: created on press, consumed on move, cleared on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Idle,
    Dragging {
        start_pointer: Point,
        start_rect: Rect,
    },
    Resizing {
        start_pointer: Point,
        start_rect: Rect,
        mode: ResizeMode,
    },
}

impl Gesture {
    pub fn is_active(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Gesture::Resizing { .. })
    }

    pub fn start_rect(&self) -> Option<Rect> {
        match *self {
            Gesture::Idle => None,
            Gesture::Dragging { start_rect, .. } | Gesture::Resizing { start_rect, .. } => {
                Some(start_rect)
            }
        }
    }
}

// ──────────────────────────────────────────────
// Sizing
// ──────────────────────────────────────────────

/// New size for a bottom-right resize: start size plus pointer delta, floored at `min`.
///
/// With `aspect_locked` the starting width/height ratio is kept; the axis with the
/// larger absolute delta drives and the other is derived from it.
pub fn resized_size(start: Size, delta: Point, min: Size, aspect_locked: bool) -> Size {
    let mut width = start.width.saturating_add(delta.x).max(min.width);
    let mut height = start.height.saturating_add(delta.y).max(min.height);

    if aspect_locked && start.height > 0 {
        let ratio = start.width as f64 / start.height as f64;
        if delta.x.abs() > delta.y.abs() {
            if ratio > 0.0001 {
                height = (width as f64 / ratio) as i32;
            }
        } else {
            width = (height as f64 * ratio) as i32;
        }
    }

    Size::new(width, height)
}

/// Caps `size` at `max`. With `aspect_locked` both axes shrink by the same
/// factor, so the element only shrinks to fit and keeps its ratio.
pub fn cap_size(size: Size, max: Size, aspect_locked: bool) -> Size {
    if size.width <= max.width && size.height <= max.height {
        return size;
    }
    if !aspect_locked || size.is_degenerate() {
        return Size::new(size.width.min(max.width), size.height.min(max.height));
    }
    let (w, h) = (i64::from(size.width), i64::from(size.height));
    if i64::from(max.width) * h <= i64::from(max.height) * w {
        Size::new(max.width, (i64::from(max.width) * h / w) as i32)
    } else {
        Size::new((i64::from(max.height) * w / h) as i32, max.height)
    }
}

/// Clamp `target` so an element of `size` stays `margin` away from every edge of `parent`.
/// When the element cannot fit, it pins to the top/left margin.
pub fn clamp_origin(target: Point, size: Size, parent: Size, margin: i32) -> Point {
    let x = target.x.min(parent.width - size.width - margin).max(margin);
    let y = target.y.min(parent.height - size.height - margin).max(margin);
    Point::new(x, y)
}

// ──────────────────────────────────────────────
// DraggableElement
// ──────────────────────────────────────────────

/// Per-kind interaction constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementStyle {
    /// Side of the square resize zone centered on the bottom-right corner.
    pub handle_size: i32,
    /// Distance kept from the window edge while dragging.
    pub margin: i32,
    pub min_size: Size,
}

impl ElementStyle {
    pub const SLOT: ElementStyle = ElementStyle {
        handle_size: 30,
        margin: 20,
        min_size: Size::new(20, 20),
    };

    pub const CONTAINER: ElementStyle = ElementStyle {
        handle_size: 40,
        margin: 10,
        min_size: Size::new(50, 50),
    };
}

/// A movable, resizable rectangle in window-local coordinates.
///
/// Gestures are only accepted in edit mode. All pointer positions passed in are
/// window-local; the window does not move while an element gesture is active,
/// so deltas equal their screen-space counterparts.
#[derive(Debug, Clone)]
pub struct DraggableElement {
    id: ElementId,
    rect: Rect,
    editing: bool,
    gesture: Gesture,
    style: ElementStyle,
}

impl DraggableElement {
    pub fn new(id: ElementId, rect: Rect, style: ElementStyle) -> Self {
        Self {
            id,
            rect,
            editing: false,
            gesture: Gesture::Idle,
            style,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn style(&self) -> ElementStyle {
        self.style
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Leaving edit mode drops any in-flight gesture.
    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
        if !editing {
            self.gesture = Gesture::Idle;
        }
    }

    pub fn resize_handle(&self) -> Rect {
        Rect::square_around(self.rect.bottom_right(), self.style.handle_size)
    }

    pub fn in_resize_handle(&self, pointer: Point) -> bool {
        self.resize_handle().contains(pointer)
    }

    pub fn contains(&self, pointer: Point) -> bool {
        self.rect.contains(pointer)
    }

    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if !self.editing || self.gesture.is_active() {
            return false;
        }
        self.gesture = Gesture::Dragging {
            start_pointer: pointer,
            start_rect: self.rect,
        };
        true
    }

    /// Starts a resize if `pointer` is inside the bottom-right handle zone.
    pub fn begin_resize(&mut self, pointer: Point, observer: &mut dyn LayoutObserver) -> bool {
        if !self.editing || self.gesture.is_active() || !self.in_resize_handle(pointer) {
            return false;
        }
        self.gesture = Gesture::Resizing {
            start_pointer: pointer,
            start_rect: self.rect,
            mode: ResizeMode::Corner,
        };
        observer.on_resize_begin(self.id, self.rect);
        true
    }

    /// Moves the element by the pointer delta, clamped inside `parent` minus the margin.
    /// Returns the applied origin.
    pub fn update_drag(&mut self, pointer: Point, parent: Size) -> Option<Point> {
        let Gesture::Dragging {
            start_pointer,
            start_rect,
        } = self.gesture
        else {
            return None;
        };
        let target = start_rect.origin() + (pointer - start_pointer);
        let origin = clamp_origin(target, self.rect.size(), parent, self.style.margin);
        self.rect = self.rect.with_origin(origin);
        Some(origin)
    }

    /// Resizes from the bottom-right corner. `max` caps the result after the
    /// minimum and aspect rules have run; see [`cap_size`].
    pub fn update_resize(
        &mut self,
        pointer: Point,
        aspect_locked: bool,
        max: Option<Size>,
        observer: &mut dyn LayoutObserver,
    ) -> Option<Rect> {
        let Gesture::Resizing {
            start_pointer,
            start_rect,
            ..
        } = self.gesture
        else {
            return None;
        };
        let size = resized_size(
            start_rect.size(),
            pointer - start_pointer,
            self.style.min_size,
            aspect_locked,
        );
        let size = match max {
            Some(max) => cap_size(size, max, aspect_locked),
            None => size,
        };
        self.rect = self.rect.with_size(size);
        observer.on_resize_changed(self.id, self.rect);
        Some(self.rect)
    }

    /// Clears any gesture. Returns whether one was active.
    pub fn end_gesture(&mut self) -> bool {
        let was_active = self.gesture.is_active();
        self.gesture = Gesture::Idle;
        was_active
    }
}

// ──────────────────────────────────────────────
// DigitSlot
// ──────────────────────────────────────────────

/// One of the five fixed display positions. Slot 2 is the separator.
#[derive(Debug, Clone)]
pub struct DigitSlot {
    pub element: DraggableElement,
    pub glyph: Option<Glyph>,
}

impl DigitSlot {
    pub fn new(index: usize, rect: Rect) -> Self {
        Self {
            element: DraggableElement::new(ElementId::Slot(index), rect, ElementStyle::SLOT),
            glyph: None,
        }
    }

    pub fn index(&self) -> usize {
        match self.element.id() {
            ElementId::Slot(i) => i,
            _ => 0,
        }
    }

    pub fn is_separator(&self) -> bool {
        self.index() == ticktock_core::SEPARATOR_SLOT
    }

    pub fn rect(&self) -> Rect {
        self.element.rect()
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.element.set_rect(rect);
    }
}
