//! Pointer routing: which element a press targets, and forwarding of move and
//! release to the single active gesture.
//!
//! In edit mode a press goes to the topmost slot, then the frame's resize
//! zones, then the container, and finally starts a whole-window move.

use ticktock_core::{CursorHint, MouseButton, Point, PointerEvent};

use crate::element::ResizeMode;
use crate::frame::WindowResizeController;
use crate::{LayoutCoordinator, WindowLayoutState};

/// The one gesture a window may have in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveGesture {
    Slot(usize),
    Container,
    FrameResize,
    FrameMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerResponse {
    /// Geometry of the window or any element changed.
    pub changed: bool,
    pub cursor: CursorHint,
}

impl PointerResponse {
    fn idle(cursor: CursorHint) -> Self {
        Self {
            changed: false,
            cursor,
        }
    }
}

fn cursor_for_mode(mode: ResizeMode) -> CursorHint {
    match mode {
        ResizeMode::Corner => CursorHint::ResizeDiagonal,
        ResizeMode::Right => CursorHint::ResizeHorizontal,
        ResizeMode::Bottom => CursorHint::ResizeVertical,
    }
}

impl LayoutCoordinator {
    pub fn handle_pointer(
        &mut self,
        state: &mut WindowLayoutState,
        event: PointerEvent,
    ) -> PointerResponse {
        match event {
            PointerEvent::Press {
                position, button, ..
            } => self.pointer_press(state, position, button),
            PointerEvent::Move {
                position,
                modifiers,
            } => self.pointer_move(state, position, modifiers.aspect_locked()),
            PointerEvent::Release { .. } => self.pointer_release(state),
        }
    }

    fn pointer_press(
        &mut self,
        state: &mut WindowLayoutState,
        position: Point,
        button: MouseButton,
    ) -> PointerResponse {
        if button != MouseButton::Left || state.active.is_some() {
            return PointerResponse::default();
        }

        if !state.is_editing() {
            state.frame.begin_move(position);
            state.active = Some(ActiveGesture::FrameMove);
            return PointerResponse::idle(CursorHint::Default);
        }

        let local = state.frame.to_local(position);

        // Slots sit above the container; the last slot is topmost.
        if let Some(i) = (0..state.slots.len())
            .rev()
            .find(|&i| state.slots[i].element.contains(local))
        {
            let slot = &mut state.slots[i].element;
            let started = if slot.in_resize_handle(local) {
                slot.begin_resize(local, self)
            } else {
                slot.begin_drag(local)
            };
            if started {
                state.active = Some(ActiveGesture::Slot(i));
                let cursor = if state.slots[i].element.gesture().is_resizing() {
                    CursorHint::ResizeDiagonal
                } else {
                    CursorHint::Move
                };
                return PointerResponse::idle(cursor);
            }
        }

        // The frame's edge zones sit above the container, which may cover them.
        if state.resizer.begin_resize(&state.frame, position) {
            state.active = Some(ActiveGesture::FrameResize);
            let cursor = state
                .resizer
                .mode()
                .map(cursor_for_mode)
                .unwrap_or_default();
            return PointerResponse::idle(cursor);
        }

        if state.container.contains(local) {
            let started = if state.container.in_resize_handle(local) {
                state.container.begin_resize(local, &mut state.slots)
            } else {
                state.container.begin_drag(local, &state.slots)
            };
            if started {
                state.active = Some(ActiveGesture::Container);
                let cursor = if state.container.gesture().is_resizing() {
                    CursorHint::ResizeDiagonal
                } else {
                    CursorHint::Move
                };
                return PointerResponse::idle(cursor);
            }
        }

        state.frame.begin_move(position);
        state.active = Some(ActiveGesture::FrameMove);
        PointerResponse::idle(CursorHint::Default)
    }

    fn pointer_move(
        &mut self,
        state: &mut WindowLayoutState,
        position: Point,
        aspect_locked: bool,
    ) -> PointerResponse {
        let local = state.frame.to_local(position);
        let window = state.frame.size();

        match state.active {
            None => PointerResponse::idle(self.hover_cursor(state, local)),
            Some(ActiveGesture::Slot(i)) => {
                let Some(slot) = state.slots.get_mut(i) else {
                    return PointerResponse::default();
                };
                let element = &mut slot.element;
                // Resizes request a refit through the observer, drags directly.
                let (changed, refit, cursor) = if element.gesture().is_resizing() {
                    let changed = element
                        .update_resize(local, aspect_locked, None, self)
                        .is_some();
                    let refit = std::mem::take(&mut self.refit_pending);
                    (changed, refit, CursorHint::ResizeDiagonal)
                } else {
                    let changed = element.update_drag(local, window).is_some();
                    (changed, changed, CursorHint::Move)
                };
                if refit {
                    self.update_container_geometry(state);
                }
                PointerResponse { changed, cursor }
            }
            Some(ActiveGesture::Container) => {
                if state.container.gesture().is_resizing() {
                    let changed =
                        state
                            .container
                            .update_resize(local, aspect_locked, window, &mut state.slots);
                    PointerResponse {
                        changed,
                        cursor: CursorHint::ResizeDiagonal,
                    }
                } else {
                    let changed = state.container.update_drag(local, window, &mut state.slots);
                    PointerResponse {
                        changed,
                        cursor: CursorHint::Move,
                    }
                }
            }
            Some(ActiveGesture::FrameResize) => {
                let changed = state
                    .resizer
                    .update_resize(&mut state.frame, position, aspect_locked)
                    .is_some();
                let cursor = state
                    .resizer
                    .mode()
                    .map(cursor_for_mode)
                    .unwrap_or_default();
                PointerResponse { changed, cursor }
            }
            Some(ActiveGesture::FrameMove) => {
                let changed = state.frame.update_move(position).is_some();
                PointerResponse {
                    changed,
                    cursor: CursorHint::Default,
                }
            }
        }
    }

    /// Ends whatever gesture is active. A release always keeps the last
    /// computed geometry; there is no rollback.
    fn pointer_release(&mut self, state: &mut WindowLayoutState) -> PointerResponse {
        let Some(active) = state.active.take() else {
            return PointerResponse::default();
        };
        let reconcile = match active {
            ActiveGesture::Slot(i) => state
                .slots
                .get_mut(i)
                .is_some_and(|s| s.element.end_gesture()),
            ActiveGesture::Container => state.container.end_gesture(),
            ActiveGesture::FrameResize => state.resizer.end_gesture(),
            ActiveGesture::FrameMove => {
                state.frame.end_move();
                false
            }
        };
        if reconcile {
            self.ensure_bounds(state);
        }
        PointerResponse::idle(CursorHint::Default)
    }

    /// Cursor for the element under `local` with no gesture active.
    pub fn hover_cursor(&self, state: &WindowLayoutState, local: Point) -> CursorHint {
        if !state.is_editing() {
            return CursorHint::Default;
        }
        if let Some(slot) = state
            .slots
            .iter()
            .rev()
            .find(|s| s.element.contains(local))
        {
            return if slot.element.in_resize_handle(local) {
                CursorHint::ResizeDiagonal
            } else {
                CursorHint::Move
            };
        }
        if let Some(mode) = WindowResizeController::hit_test(state.frame.size(), local) {
            return cursor_for_mode(mode);
        }
        if state.container.contains(local) {
            return if state.container.in_resize_handle(local) {
                CursorHint::ResizeDiagonal
            } else {
                CursorHint::Move
            };
        }
        CursorHint::Default
    }
}
