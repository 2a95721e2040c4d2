use ticktock_core::{ElementId, LayoutObserver, Point, Rect, SLOT_COUNT};

use crate::LayoutHost;

/// Fraction of window width the reset container may use.
const WIDTH_FRACTION: f32 = 0.9;

/// Default fraction of window height the reset container may use.
pub const DEFAULT_HEIGHT_FRACTION: f32 = 0.8;

const MIN_HEIGHT_FRACTION: f32 = 0.6;
const MAX_HEIGHT_FRACTION: f32 = 0.8;

/// Padding between the reset container edge and the slot row.
pub const RESET_PADDING: i32 = 20;

/// Target slot width/height ratio (2:3).
const SLOT_ASPECT: f32 = 0.66;

/// Floor for the space available to the slot row on either axis.
const MIN_AVAILABLE: i32 = 50;

const MIN_SLOT_WIDTH: i32 = 20;
const MIN_SLOT_HEIGHT: i32 = 30;

// ──────────────────────────────────────────────
// LayoutCoordinator
// ──────────────────────────────────────────────

/// Orchestrates layout across the frame, the container and the slots:
/// reset, container auto-fit, edit-mode transitions and pointer routing.
#[derive(Debug, Clone)]
pub struct LayoutCoordinator {
    height_fraction: f32,
    /// Set by slot resize notifications; consumed after the gesture step.
    pub(crate) refit_pending: bool,
}

impl Default for LayoutCoordinator {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT_FRACTION)
    }
}

impl LayoutCoordinator {
    /// `height_fraction` is clamped to 0.6–0.8.
    pub fn new(height_fraction: f32) -> Self {
        Self {
            height_fraction: height_fraction.clamp(MIN_HEIGHT_FRACTION, MAX_HEIGHT_FRACTION),
            refit_pending: false,
        }
    }

    pub fn height_fraction(&self) -> f32 {
        self.height_fraction
    }

    /// Lays the five slots out left-to-right, centered in the window, sized to
    /// the target aspect ratio within the width and height budgets. Marks the
    /// config dirty.
    pub fn reset_layout<H: LayoutHost>(&mut self, host: &mut H) {
        let size = host.frame().size();
        let max_cont_w = (size.width as f32 * WIDTH_FRACTION) as i32;
        let max_cont_h = (size.height as f32 * self.height_fraction) as i32;

        let available_w = (max_cont_w - 2 * RESET_PADDING).max(MIN_AVAILABLE);
        let available_h = (max_cont_h - 2 * RESET_PADDING).max(MIN_AVAILABLE);

        let count = SLOT_COUNT as f32;
        let w_by_width = available_w as f32 / count;
        let h_by_width = w_by_width / SLOT_ASPECT;

        let (slot_w, slot_h) = if h_by_width <= available_h as f32 {
            (w_by_width, h_by_width)
        } else {
            (available_h as f32 * SLOT_ASPECT, available_h as f32)
        };
        let slot_w = (slot_w as i32).max(MIN_SLOT_WIDTH);
        let slot_h = (slot_h as i32).max(MIN_SLOT_HEIGHT);

        let cont_w = slot_w * SLOT_COUNT as i32 + 2 * RESET_PADDING;
        let cont_h = slot_h + 2 * RESET_PADDING;
        let start = Point::new(
            (size.width - cont_w).div_euclid(2),
            (size.height - cont_h).div_euclid(2),
        );
        host.container_mut()
            .set_rect(Rect::new(start.x, start.y, cont_w, cont_h));

        for (i, slot) in host.slots_mut().iter_mut().enumerate() {
            slot.set_rect(Rect::new(
                start.x + RESET_PADDING + i as i32 * slot_w,
                start.y + RESET_PADDING,
                slot_w,
                slot_h,
            ));
        }

        self.update_container_geometry(host);
        log::info!(
            "layout reset for {}x{} window: slots {}x{}",
            size.width,
            size.height,
            slot_w,
            slot_h
        );
        host.notify_config_dirty();
    }

    /// Refits the container around all slots. No-op with zero slots.
    pub fn update_container_geometry<H: LayoutHost>(&self, host: &mut H) {
        let rects: Vec<Rect> = host.slots().iter().map(|s| s.rect()).collect();
        host.container_mut().recompute_bounds(&rects);
    }

    /// Would grow the window to keep dragged-out slots inside it.
    ///
    /// Intentionally inert: the frame no longer follows its content. The hook
    /// stays so the behavior can be switched back on in one place.
    pub fn ensure_bounds<H: LayoutHost>(&self, _host: &mut H) {}

    /// Entering edit mode shows the container and fits it around the slots;
    /// leaving it hides the container, ends any element or frame-resize
    /// gesture and marks the geometry for saving.
    pub fn set_edit_mode<H: LayoutHost>(&mut self, host: &mut H, editing: bool) {
        host.frame_mut().set_editing(editing);
        host.container_mut().set_editing(editing);
        for slot in host.slots_mut() {
            slot.element.set_editing(editing);
        }

        if editing {
            self.update_container_geometry(host);
        } else {
            host.end_edit_gestures();
            host.notify_config_dirty();
        }
        log::info!("edit mode {}", if editing { "on" } else { "off" });
    }

    pub fn toggle_edit_mode<H: LayoutHost>(&mut self, host: &mut H) -> bool {
        let editing = !host.frame().is_editing();
        self.set_edit_mode(host, editing);
        editing
    }
}

impl LayoutObserver for LayoutCoordinator {
    fn on_resize_changed(&mut self, element: ElementId, _rect: Rect) {
        if let ElementId::Slot(_) = element {
            self.refit_pending = true;
        }
    }
}
