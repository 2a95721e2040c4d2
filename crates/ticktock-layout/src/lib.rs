// Direct-manipulation layout engine: drag/resize of the digit slots, their
// tracking container and the window frame, plus canonical layout reset.

mod container;
mod coordinator;
mod element;
mod frame;
mod pointer;
mod tests;

use ticktock_core::{Point, Rect, Size, SLOT_COUNT};

pub use container::{ContainerElement, BOUNDS_PADDING};
pub use coordinator::{LayoutCoordinator, DEFAULT_HEIGHT_FRACTION, RESET_PADDING};
pub use element::{
    cap_size, clamp_origin, resized_size, DigitSlot, DraggableElement, ElementStyle, Gesture,
    ResizeMode,
};
pub use frame::{
    frame_resize, initial_position, WindowFrame, WindowResizeController, FRAME_HANDLE_SIZE,
    FRAME_MIN_SIZE,
};
pub use pointer::{ActiveGesture, PointerResponse};

// ──────────────────────────────────────────────
// LayoutHost
// ──────────────────────────────────────────────

/// What the coordinator needs from the window it lays out.
pub trait LayoutHost {
    fn slots(&self) -> &[DigitSlot];
    fn slots_mut(&mut self) -> &mut [DigitSlot];
    fn container(&self) -> &ContainerElement;
    fn container_mut(&mut self) -> &mut ContainerElement;
    fn frame(&self) -> &WindowFrame;
    fn frame_mut(&mut self) -> &mut WindowFrame;
    /// Geometry changed in a way that must be persisted.
    fn notify_config_dirty(&mut self);
    /// Leaving edit mode: drop any in-flight gesture that is only valid while
    /// editing. A whole-window move survives.
    fn end_edit_gestures(&mut self);
}

// ──────────────────────────────────────────────
// WindowLayoutState
// ──────────────────────────────────────────────

/// All geometry of one widget window, passed explicitly to every gesture handler.
#[derive(Debug, Clone)]
pub struct WindowLayoutState {
    pub(crate) frame: WindowFrame,
    pub(crate) resizer: WindowResizeController,
    pub(crate) container: ContainerElement,
    pub(crate) slots: Vec<DigitSlot>,
    pub(crate) active: Option<ActiveGesture>,
    config_dirty: bool,
}

impl WindowLayoutState {
    pub fn new(frame: Rect, container: Rect, slots: [Rect; SLOT_COUNT]) -> Self {
        Self {
            frame: WindowFrame::new(frame),
            resizer: WindowResizeController::new(),
            container: ContainerElement::new(container),
            slots: slots
                .iter()
                .enumerate()
                .map(|(i, r)| DigitSlot::new(i, *r))
                .collect(),
            active: None,
            config_dirty: false,
        }
    }

    /// A window at `origin`/`size` with every slot and the container collapsed
    /// at the origin; callers follow up with a reset or a bounds recompute.
    pub fn blank(origin: Point, size: Size) -> Self {
        Self::new(
            Rect::from_parts(origin, size),
            Rect::default(),
            [Rect::default(); SLOT_COUNT],
        )
    }

    pub fn is_editing(&self) -> bool {
        self.frame.is_editing()
    }

    pub fn active_gesture(&self) -> Option<ActiveGesture> {
        self.active
    }

    pub fn slot_rects(&self) -> [Rect; SLOT_COUNT] {
        let mut out = [Rect::default(); SLOT_COUNT];
        for (dst, slot) in out.iter_mut().zip(self.slots.iter()) {
            *dst = slot.rect();
        }
        out
    }

    /// The resize controller's current mode, if a frame resize is active.
    pub fn frame_resize_mode(&self) -> Option<ResizeMode> {
        self.resizer.mode()
    }

    /// Returns and clears the dirty flag.
    pub fn take_config_dirty(&mut self) -> bool {
        std::mem::take(&mut self.config_dirty)
    }
}

impl LayoutHost for WindowLayoutState {
    fn slots(&self) -> &[DigitSlot] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [DigitSlot] {
        &mut self.slots
    }

    fn container(&self) -> &ContainerElement {
        &self.container
    }

    fn container_mut(&mut self) -> &mut ContainerElement {
        &mut self.container
    }

    fn frame(&self) -> &WindowFrame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut WindowFrame {
        &mut self.frame
    }

    fn notify_config_dirty(&mut self) {
        self.config_dirty = true;
    }

    fn end_edit_gestures(&mut self) {
        if self.resizer.end_gesture() {
            log::debug!("frame resize dropped on leaving edit mode");
        }
        if self.active != Some(ActiveGesture::FrameMove) {
            self.active = None;
        }
    }
}
