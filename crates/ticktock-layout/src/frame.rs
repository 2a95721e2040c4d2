use ticktock_core::{Point, Rect, Size};

use crate::element::{resized_size, ResizeMode};

/// Side of each square window resize zone.
pub const FRAME_HANDLE_SIZE: i32 = 10;

/// The frame never shrinks below this.
pub const FRAME_MIN_SIZE: Size = Size::new(100, 50);

/// Inset used when deciding whether a saved position is still on screen.
const ON_SCREEN_INSET: i32 = 20;

// ──────────────────────────────────────────────
// WindowFrame
// ──────────────────────────────────────────────

/// The top-level frameless window. Its rect is in screen space.
#[derive(Debug, Clone)]
pub struct WindowFrame {
    rect: Rect,
    editing: bool,
    pub top_most: bool,
    /// Active whole-window move: (pointer at press, window origin at press).
    move_grab: Option<(Point, Point)>,
}

impl WindowFrame {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Rect::from_parts(rect.origin(), clamp_frame_size(rect.size())),
            editing: false,
            top_most: false,
            move_grab: None,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn origin(&self) -> Point {
        self.rect.origin()
    }

    pub fn size(&self) -> Size {
        self.rect.size()
    }

    /// Window-local rect: origin at zero.
    pub fn local_rect(&self) -> Rect {
        Rect::from_parts(Point::default(), self.size())
    }

    pub fn set_size(&mut self, size: Size) {
        self.rect = self.rect.with_size(clamp_frame_size(size));
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.rect = self.rect.with_origin(origin);
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    /// Converts a screen-space point into window-local coordinates.
    pub fn to_local(&self, screen: Point) -> Point {
        screen - self.rect.origin()
    }

    pub fn is_moving(&self) -> bool {
        self.move_grab.is_some()
    }

    /// Starts a whole-window move. Allowed in and out of edit mode.
    pub fn begin_move(&mut self, pointer: Point) -> bool {
        if self.move_grab.is_some() {
            return false;
        }
        self.move_grab = Some((pointer, self.rect.origin()));
        true
    }

    /// Moves the window by the pointer delta. No clamping.
    pub fn update_move(&mut self, pointer: Point) -> Option<Point> {
        let (start_pointer, start_origin) = self.move_grab?;
        let origin = start_origin + (pointer - start_pointer);
        self.rect = self.rect.with_origin(origin);
        Some(origin)
    }

    pub fn end_move(&mut self) -> bool {
        self.move_grab.take().is_some()
    }
}

fn clamp_frame_size(size: Size) -> Size {
    Size::new(
        size.width.max(FRAME_MIN_SIZE.width),
        size.height.max(FRAME_MIN_SIZE.height),
    )
}

/// Where to place the window at startup: the saved position if a point just
/// inside its top-left corner is on `screen`, otherwise centered on `screen`.
pub fn initial_position(saved: Option<Point>, size: Size, screen: Rect) -> Point {
    if let Some(pos) = saved {
        if screen.contains(pos + Point::new(ON_SCREEN_INSET, ON_SCREEN_INSET)) {
            return pos;
        }
        log::info!("saved position ({}, {}) is off-screen, centering", pos.x, pos.y);
    }
    Point::new(
        screen.x + (screen.width - size.width).div_euclid(2),
        screen.y + (screen.height - size.height).div_euclid(2),
    )
}

// ──────────────────────────────────────────────
// WindowResizeController
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResizeGrab {
    start_pointer: Point,
    start_size: Size,
    mode: ResizeMode,
}

/// Edge/corner resize of the frame in edit mode.
///
/// Resizing the frame never touches the container or slots: frame size and
/// content size are decoupled.
#[derive(Debug, Clone, Default)]
pub struct WindowResizeController {
    grab: Option<ResizeGrab>,
}

impl WindowResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three hit zones in window-local coordinates, corner first.
    pub fn handle_zones(size: Size) -> [(ResizeMode, Rect); 3] {
        let s = FRAME_HANDLE_SIZE;
        [
            (
                ResizeMode::Corner,
                Rect::new(size.width - s, size.height - s, s, s),
            ),
            (
                ResizeMode::Right,
                Rect::new(size.width - s, size.height / 2 - s / 2, s, s),
            ),
            (
                ResizeMode::Bottom,
                Rect::new(size.width / 2 - s / 2, size.height - s, s, s),
            ),
        ]
    }

    /// Which zone contains the window-local `pointer`. The corner wins ties.
    pub fn hit_test(size: Size, pointer: Point) -> Option<ResizeMode> {
        Self::handle_zones(size)
            .into_iter()
            .find(|(_, zone)| zone.contains(pointer))
            .map(|(mode, _)| mode)
    }

    pub fn mode(&self) -> Option<ResizeMode> {
        self.grab.map(|g| g.mode)
    }

    pub fn is_resizing(&self) -> bool {
        self.grab.is_some()
    }

    /// `pointer` is in screen space.
    pub fn begin_resize(&mut self, frame: &WindowFrame, pointer: Point) -> bool {
        if !frame.is_editing() || self.grab.is_some() {
            return false;
        }
        let Some(mode) = Self::hit_test(frame.size(), frame.to_local(pointer)) else {
            return false;
        };
        self.grab = Some(ResizeGrab {
            start_pointer: pointer,
            start_size: frame.size(),
            mode,
        });
        true
    }

    pub fn update_resize(
        &mut self,
        frame: &mut WindowFrame,
        pointer: Point,
        aspect_locked: bool,
    ) -> Option<Size> {
        let grab = self.grab?;
        let size = frame_resize(grab.start_size, pointer - grab.start_pointer, grab.mode, aspect_locked);
        frame.set_size(size);
        Some(frame.size())
    }

    /// Clears the grab. Returns whether a resize was in progress; the caller
    /// runs bounds reconciliation only then, never mid-drag.
    pub fn end_gesture(&mut self) -> bool {
        self.grab.take().is_some()
    }
}

/// Frame size for a resize from `mode`'s handle.
pub fn frame_resize(start: Size, delta: Point, mode: ResizeMode, aspect_locked: bool) -> Size {
    let locked = aspect_locked && start.height > 0;
    let ratio = if locked {
        start.width as f64 / start.height as f64
    } else {
        1.0
    };

    let size = match mode {
        ResizeMode::Corner => resized_size(start, delta, FRAME_MIN_SIZE, aspect_locked),
        ResizeMode::Right => {
            let width = start.width.saturating_add(delta.x).max(FRAME_MIN_SIZE.width);
            let height = if locked {
                (width as f64 / ratio) as i32
            } else {
                start.height
            };
            Size::new(width, height)
        }
        ResizeMode::Bottom => {
            let height = start.height.saturating_add(delta.y).max(FRAME_MIN_SIZE.height);
            let width = if locked {
                (height as f64 * ratio) as i32
            } else {
                start.width
            };
            Size::new(width, height)
        }
    };
    clamp_frame_size(size)
}
