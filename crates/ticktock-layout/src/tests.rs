#[cfg(test)]
mod tests {
    use crate::{
        cap_size, frame_resize, initial_position, resized_size, ActiveGesture, ContainerElement, DigitSlot,
        DraggableElement, ElementStyle, LayoutCoordinator, LayoutHost, ResizeMode,
        WindowLayoutState, WindowResizeController, RESET_PADDING,
    };
    use ticktock_core::{
        CursorHint, ElementId, LayoutObserver, Modifiers, MouseButton, NullObserver, Point,
        PointerEvent, Rect, Size, SLOT_COUNT,
    };

    fn press(x: i32, y: i32) -> PointerEvent {
        PointerEvent::Press {
            position: Point::new(x, y),
            button: MouseButton::Left,
            modifiers: Modifiers::default(),
        }
    }

    fn move_to(x: i32, y: i32) -> PointerEvent {
        PointerEvent::Move {
            position: Point::new(x, y),
            modifiers: Modifiers::default(),
        }
    }

    fn shift_move_to(x: i32, y: i32) -> PointerEvent {
        PointerEvent::Move {
            position: Point::new(x, y),
            modifiers: Modifiers::SHIFT,
        }
    }

    fn release(x: i32, y: i32) -> PointerEvent {
        PointerEvent::Release {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    /// 500×200 window at screen (100, 100) with the default reset layout.
    fn reset_state() -> (LayoutCoordinator, WindowLayoutState) {
        let mut coordinator = LayoutCoordinator::default();
        let mut state = WindowLayoutState::blank(Point::new(100, 100), Size::new(500, 200));
        coordinator.reset_layout(&mut state);
        state.take_config_dirty();
        (coordinator, state)
    }

    /// One slot far from the others, so pointer hits are unambiguous.
    fn single_slot_state(origin: Point, slot: Rect) -> WindowLayoutState {
        let mut slots = [Rect::new(400, 150, 0, 0); SLOT_COUNT];
        slots[0] = slot;
        WindowLayoutState::new(
            Rect::from_parts(origin, Size::new(500, 200)),
            Rect::default(),
            slots,
        )
    }

    // ──────────────────────────────────────────
    // Draggable element
    // ──────────────────────────────────────────

    #[test]
    fn drag_requires_edit_mode() {
        let mut el = DraggableElement::new(ElementId::Slot(0), Rect::new(0, 0, 40, 40), ElementStyle::SLOT);
        assert!(!el.begin_drag(Point::new(10, 10)));
        el.set_editing(true);
        assert!(el.begin_drag(Point::new(10, 10)));
        assert!(el.gesture().is_dragging());
    }

    #[test]
    fn resize_requires_corner_handle() {
        let mut el = DraggableElement::new(ElementId::Slot(0), Rect::new(0, 0, 60, 60), ElementStyle::SLOT);
        el.set_editing(true);
        assert!(!el.begin_resize(Point::new(10, 10), &mut NullObserver));
        assert!(el.begin_resize(Point::new(55, 55), &mut NullObserver));
        assert!(el.gesture().is_resizing());
    }

    #[test]
    fn drag_stays_inside_window_margin() {
        let window = Size::new(500, 200);
        let margin = ElementStyle::SLOT.margin;
        let deltas = [
            (0, 0),
            (-1000, -1000),
            (1000, 1000),
            (300, -40),
            (-35, 70),
            (5, 5),
            (1000, -1000),
        ];
        for (dx, dy) in deltas {
            let mut el = DraggableElement::new(
                ElementId::Slot(1),
                Rect::new(50, 50, 40, 60),
                ElementStyle::SLOT,
            );
            el.set_editing(true);
            assert!(el.begin_drag(Point::new(60, 60)));
            el.update_drag(Point::new(60 + dx, 60 + dy), window);
            let r = el.rect();
            assert!(r.x >= margin && r.x <= window.width - r.width - margin, "x {} for {:?}", r.x, (dx, dy));
            assert!(r.y >= margin && r.y <= window.height - r.height - margin, "y {} for {:?}", r.y, (dx, dy));
            assert_eq!(r.size(), Size::new(40, 60));
        }
    }

    #[test]
    fn resize_applies_minimum() {
        let size = resized_size(Size::new(60, 60), Point::new(-100, -55), Size::new(20, 20), false);
        assert_eq!(size, Size::new(20, 20));
    }

    #[test]
    fn aspect_locked_resize_keeps_ratio() {
        let deltas = [(40, 5), (-10, 30), (100, -20), (-30, -35), (7, 7), (0, 90), (-25, 3)];
        for (dx, dy) in deltas {
            let mut el = DraggableElement::new(
                ElementId::Slot(0),
                Rect::new(0, 0, 60, 90),
                ElementStyle::SLOT,
            );
            el.set_editing(true);
            assert!(el.begin_resize(Point::new(60, 90), &mut NullObserver));
            let r = el
                .update_resize(Point::new(60 + dx, 90 + dy), true, None, &mut NullObserver)
                .unwrap();
            let ratio = 60.0 / 90.0;
            let from_width = (r.width as f64 / ratio - r.height as f64).abs();
            let from_height = (r.height as f64 * ratio - r.width as f64).abs();
            assert!(
                from_width <= 1.0 || from_height <= 1.0,
                "ratio drifted to {}x{} for {:?}",
                r.width,
                r.height,
                (dx, dy)
            );
        }
    }

    #[test]
    fn dominant_axis_drives_locked_resize() {
        // x dominates: height derived from width
        assert_eq!(
            resized_size(Size::new(100, 50), Point::new(50, 10), Size::new(20, 20), true),
            Size::new(150, 75)
        );
        // y dominates (ties go to y): width derived from height
        assert_eq!(
            resized_size(Size::new(100, 50), Point::new(10, 10), Size::new(20, 20), true),
            Size::new(120, 60)
        );
    }

    #[test]
    fn end_gesture_is_idempotent() {
        let mut el = DraggableElement::new(ElementId::Slot(0), Rect::new(0, 0, 40, 40), ElementStyle::SLOT);
        el.set_editing(true);
        el.begin_drag(Point::new(5, 5));
        assert!(el.end_gesture());
        assert!(!el.end_gesture());
        assert!(!el.gesture().is_active());
    }

    // ──────────────────────────────────────────
    // Container element
    // ──────────────────────────────────────────

    #[test]
    fn recompute_bounds_on_empty_set_is_noop() {
        let mut container = ContainerElement::new(Rect::new(5, 6, 70, 80));
        assert!(!container.recompute_bounds(&[]));
        assert_eq!(container.rect(), Rect::new(5, 6, 70, 80));
    }

    #[test]
    fn recompute_bounds_wraps_children_with_padding() {
        let mut container = ContainerElement::new(Rect::default());
        container.recompute_bounds(&[Rect::new(100, 50, 20, 30), Rect::new(150, 60, 20, 40)]);
        assert_eq!(container.rect(), Rect::new(60, 10, 150, 130));
    }

    #[test]
    fn container_resize_scales_children() {
        let mut container = ContainerElement::new(Rect::new(0, 0, 200, 100));
        container.set_editing(true);
        let mut slots = vec![DigitSlot::new(0, Rect::new(20, 20, 40, 40))];

        assert!(container.begin_resize(Point::new(200, 100), &mut slots));
        assert!(container.update_resize(Point::new(400, 100), false, Size::new(600, 300), &mut slots));

        assert_eq!(container.rect(), Rect::new(0, 0, 400, 100));
        assert_eq!(slots[0].rect(), Rect::new(40, 20, 80, 40));
    }

    #[test]
    fn container_resize_scales_from_snapshot_not_current() {
        let mut container = ContainerElement::new(Rect::new(0, 0, 200, 100));
        container.set_editing(true);
        let mut slots = vec![DigitSlot::new(0, Rect::new(20, 20, 40, 40))];
        let window = Size::new(600, 300);

        container.begin_resize(Point::new(200, 100), &mut slots);
        container.update_resize(Point::new(400, 100), false, window, &mut slots);
        container.update_resize(Point::new(300, 200), false, window, &mut slots);

        // 1.5x, 2x from the starting snapshot
        assert_eq!(container.rect(), Rect::new(0, 0, 300, 200));
        assert_eq!(slots[0].rect(), Rect::new(30, 40, 60, 80));
    }

    #[test]
    fn container_resize_shrinks_to_window_edge() {
        let mut container = ContainerElement::new(Rect::new(20, 20, 100, 100));
        container.set_editing(true);
        let mut slots = vec![DigitSlot::new(0, Rect::new(40, 40, 20, 20))];

        container.begin_resize(Point::new(120, 120), &mut slots);
        container.update_resize(Point::new(1000, 1000), false, Size::new(300, 200), &mut slots);

        // 300 - 20 - 10, 200 - 20 - 10; the container never moves
        assert_eq!(container.rect(), Rect::new(20, 20, 270, 170));
    }

    #[test]
    fn cap_size_shrinks_both_axes_when_locked() {
        let max = Size::new(270, 170);
        assert_eq!(cap_size(Size::new(400, 200), max, false), Size::new(270, 170));
        assert_eq!(cap_size(Size::new(400, 200), max, true), Size::new(270, 135));
        assert_eq!(cap_size(Size::new(100, 300), max, true), Size::new(56, 170));
        assert_eq!(cap_size(Size::new(100, 100), max, true), Size::new(100, 100));
    }

    #[test]
    fn locked_container_resize_keeps_ratio_at_window_edge() {
        let mut container = ContainerElement::new(Rect::new(20, 20, 100, 50));
        container.set_editing(true);
        let mut slots = vec![DigitSlot::new(0, Rect::new(30, 30, 20, 20))];

        assert!(container.begin_resize(Point::new(120, 70), &mut slots));
        assert!(container.update_resize(Point::new(420, 80), true, Size::new(300, 200), &mut slots));

        // 400x200 wanted, scaled down to the 270 px left before the right edge
        let r = container.rect();
        assert_eq!(r, Rect::new(20, 20, 270, 135));
        assert_eq!(r.width, 2 * r.height);
        assert_eq!(slots[0].rect(), Rect::new(47, 47, 54, 54));
    }

    #[test]
    fn container_resize_from_zero_size_is_noop() {
        let mut container = ContainerElement::new(Rect::new(10, 10, 0, 0));
        container.set_editing(true);
        let mut slots = vec![DigitSlot::new(0, Rect::new(10, 10, 20, 20))];

        assert!(container.begin_resize(Point::new(10, 10), &mut slots));
        assert!(!container.update_resize(Point::new(200, 200), false, Size::new(500, 500), &mut slots));
        assert_eq!(container.rect(), Rect::new(10, 10, 0, 0));
        assert_eq!(slots[0].rect(), Rect::new(10, 10, 20, 20));
    }

    #[test]
    fn container_drag_moves_children_by_clamped_delta() {
        let mut container = ContainerElement::new(Rect::new(10, 10, 200, 100));
        container.set_editing(true);
        let mut slots = vec![DigitSlot::new(0, Rect::new(30, 30, 40, 40))];
        let window = Size::new(500, 200);

        assert!(container.begin_drag(Point::new(50, 50), &slots));

        // Fully clamped: container stays, child stays.
        container.update_drag(Point::new(-50, 50), window, &mut slots);
        assert_eq!(container.rect().origin(), Point::new(10, 10));
        assert_eq!(slots[0].rect(), Rect::new(30, 30, 40, 40));

        // x clamps at 500 - 200 - 10, y moves freely.
        container.update_drag(Point::new(1050, 55), window, &mut slots);
        assert_eq!(container.rect().origin(), Point::new(290, 15));
        assert_eq!(slots[0].rect(), Rect::new(310, 35, 40, 40));
    }

    // ──────────────────────────────────────────
    // Window resize controller
    // ──────────────────────────────────────────

    #[test]
    fn right_handle_with_aspect_lock() {
        let size = frame_resize(Size::new(200, 100), Point::new(100, 0), ResizeMode::Right, true);
        assert_eq!(size, Size::new(300, 150));
    }

    #[test]
    fn right_handle_without_lock_keeps_height() {
        let size = frame_resize(Size::new(200, 100), Point::new(100, 40), ResizeMode::Right, false);
        assert_eq!(size, Size::new(300, 100));
    }

    #[test]
    fn bottom_handle_with_aspect_lock() {
        let size = frame_resize(Size::new(200, 100), Point::new(0, 50), ResizeMode::Bottom, true);
        assert_eq!(size, Size::new(300, 150));
    }

    #[test]
    fn corner_handle_respects_minimum() {
        let size = frame_resize(Size::new(200, 100), Point::new(-500, -500), ResizeMode::Corner, false);
        assert_eq!(size, Size::new(100, 50));
    }

    #[test]
    fn corner_handle_with_lock_uses_dominant_axis() {
        let size = frame_resize(Size::new(200, 100), Point::new(50, 10), ResizeMode::Corner, true);
        assert_eq!(size, Size::new(250, 125));
    }

    #[test]
    fn corner_zone_wins() {
        let size = Size::new(200, 100);
        assert_eq!(
            WindowResizeController::hit_test(size, Point::new(195, 95)),
            Some(ResizeMode::Corner)
        );
        assert_eq!(
            WindowResizeController::hit_test(size, Point::new(195, 50)),
            Some(ResizeMode::Right)
        );
        assert_eq!(
            WindowResizeController::hit_test(size, Point::new(100, 95)),
            Some(ResizeMode::Bottom)
        );
        assert_eq!(WindowResizeController::hit_test(size, Point::new(100, 50)), None);
    }

    #[test]
    fn frame_resize_through_pointer_leaves_content_alone() {
        let mut coordinator = LayoutCoordinator::default();
        let mut state = WindowLayoutState::blank(Point::new(0, 0), Size::new(200, 100));
        coordinator.set_edit_mode(&mut state, true);
        let slots_before = state.slot_rects();
        let container_before = state.container().rect();

        coordinator.handle_pointer(&mut state, press(195, 50));
        assert_eq!(state.active_gesture(), Some(ActiveGesture::FrameResize));
        assert_eq!(state.frame_resize_mode(), Some(ResizeMode::Right));

        let response = coordinator.handle_pointer(&mut state, shift_move_to(295, 50));
        assert!(response.changed);
        assert_eq!(response.cursor, CursorHint::ResizeHorizontal);
        assert_eq!(state.frame().size(), Size::new(300, 150));

        coordinator.handle_pointer(&mut state, release(295, 50));
        assert_eq!(state.active_gesture(), None);
        assert_eq!(state.frame_resize_mode(), None);
        assert_eq!(state.slot_rects(), slots_before);
        assert_eq!(state.container().rect(), container_before);
    }

    #[test]
    fn leaving_edit_mode_ends_frame_resize() {
        let mut coordinator = LayoutCoordinator::default();
        let mut state = WindowLayoutState::blank(Point::new(0, 0), Size::new(200, 100));
        coordinator.set_edit_mode(&mut state, true);

        coordinator.handle_pointer(&mut state, press(195, 95));
        assert_eq!(state.active_gesture(), Some(ActiveGesture::FrameResize));
        coordinator.set_edit_mode(&mut state, false);
        assert_eq!(state.active_gesture(), None);
        assert_eq!(state.frame_resize_mode(), None);

        let response = coordinator.handle_pointer(&mut state, move_to(295, 145));
        assert!(!response.changed);
        assert_eq!(state.frame().size(), Size::new(200, 100));

        // the next press is a plain window move
        coordinator.handle_pointer(&mut state, press(50, 50));
        assert_eq!(state.active_gesture(), Some(ActiveGesture::FrameMove));
    }

    #[test]
    fn leaving_edit_mode_keeps_window_move() {
        let mut coordinator = LayoutCoordinator::default();
        let mut state = WindowLayoutState::blank(Point::new(0, 0), Size::new(200, 100));
        coordinator.set_edit_mode(&mut state, true);

        coordinator.handle_pointer(&mut state, press(100, 50));
        assert_eq!(state.active_gesture(), Some(ActiveGesture::FrameMove));
        coordinator.set_edit_mode(&mut state, false);
        coordinator.handle_pointer(&mut state, move_to(130, 60));
        assert_eq!(state.frame().origin(), Point::new(30, 10));
    }

    #[test]
    fn frame_resize_needs_edit_mode() {
        let mut state = WindowLayoutState::blank(Point::new(0, 0), Size::new(200, 100));
        let mut resizer = WindowResizeController::new();
        assert!(!resizer.begin_resize(state.frame(), Point::new(195, 95)));
        state.frame_mut().set_editing(true);
        assert!(resizer.begin_resize(state.frame(), Point::new(195, 95)));
        assert!(resizer.end_gesture());
        assert!(!resizer.end_gesture());
    }

    #[test]
    fn saved_position_used_when_on_screen() {
        let screen = Rect::new(0, 0, 1920, 1080);
        let size = Size::new(500, 200);
        assert_eq!(
            initial_position(Some(Point::new(300, 400)), size, screen),
            Point::new(300, 400)
        );
        assert_eq!(
            initial_position(Some(Point::new(5000, 400)), size, screen),
            Point::new(710, 440)
        );
        assert_eq!(initial_position(None, size, screen), Point::new(710, 440));
    }

    // ──────────────────────────────────────────
    // Layout coordinator
    // ──────────────────────────────────────────

    #[test]
    fn reset_layout_on_default_window() {
        let mut coordinator = LayoutCoordinator::default();
        let mut state = WindowLayoutState::blank(Point::new(0, 0), Size::new(500, 200));
        coordinator.reset_layout(&mut state);

        let slots = state.slot_rects();
        assert_eq!(slots[0], Rect::new(52, 40, 79, 120));
        assert_eq!(slots[4], Rect::new(368, 40, 79, 120));

        let interior = state.container().rect().inflate(-RESET_PADDING);
        for (i, r) in slots.iter().enumerate() {
            assert!(interior.contains_rect(r), "slot {} {:?} outside {:?}", i, r, interior);
            if i > 0 {
                assert!(slots[i - 1].right() <= r.x, "slots {} and {} out of order", i - 1, i);
                assert!(!slots[i - 1].intersects(r));
            }
        }
        assert_eq!(state.container().rect(), Rect::new(12, 0, 475, 200));
        assert!(state.take_config_dirty());
    }

    #[test]
    fn reset_layout_on_wide_window_is_height_bound() {
        let mut coordinator = LayoutCoordinator::new(0.6);
        let mut state = WindowLayoutState::blank(Point::new(0, 0), Size::new(1200, 200));
        coordinator.reset_layout(&mut state);

        // 200 * 0.6 - 40 = 80 tall, 52 wide
        let slots = state.slot_rects();
        for r in &slots {
            assert_eq!(r.size(), Size::new(52, 80));
        }
        assert_eq!(slots[0], Rect::new(470, 60, 52, 80));
        // centered: equal gaps on both sides of the row
        assert_eq!(slots[0].x, 1200 - slots[4].right());
    }

    #[test]
    fn height_fraction_is_clamped() {
        assert_eq!(LayoutCoordinator::new(0.3).height_fraction(), 0.6);
        assert_eq!(LayoutCoordinator::new(0.95).height_fraction(), 0.8);
        assert_eq!(LayoutCoordinator::new(0.7).height_fraction(), 0.7);
    }

    #[test]
    fn entering_edit_mode_fits_container() {
        let mut coordinator = LayoutCoordinator::default();
        let mut state = single_slot_state(Point::new(0, 0), Rect::new(100, 50, 40, 60));
        state.container_mut().set_rect(Rect::new(0, 0, 1, 1));

        coordinator.set_edit_mode(&mut state, true);
        assert!(state.is_editing());
        assert!(state.container().is_visible());
        assert_eq!(state.container().rect(), Rect::new(60, 10, 380, 180));
        assert!(!state.take_config_dirty());

        coordinator.set_edit_mode(&mut state, false);
        assert!(!state.container().is_visible());
        assert!(state.take_config_dirty());
    }

    #[test]
    fn update_container_geometry_with_no_slots_is_noop() {
        struct Empty {
            frame: crate::WindowFrame,
            container: ContainerElement,
            slots: Vec<DigitSlot>,
        }
        impl LayoutHost for Empty {
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
            fn frame(&self) -> &crate::WindowFrame {
                &self.frame
            }
            fn frame_mut(&mut self) -> &mut crate::WindowFrame {
                &mut self.frame
            }
            fn notify_config_dirty(&mut self) {}
            fn end_edit_gestures(&mut self) {}
        }

        let mut host = Empty {
            frame: crate::WindowFrame::new(Rect::new(0, 0, 500, 200)),
            container: ContainerElement::new(Rect::new(1, 2, 3, 4)),
            slots: Vec::new(),
        };
        LayoutCoordinator::default().update_container_geometry(&mut host);
        assert_eq!(host.container.rect(), Rect::new(1, 2, 3, 4));
    }

    // ──────────────────────────────────────────
    // Pointer routing
    // ──────────────────────────────────────────

    #[test]
    fn press_outside_edit_mode_moves_window() {
        let mut coordinator = LayoutCoordinator::default();
        let mut state = single_slot_state(Point::new(100, 100), Rect::new(50, 50, 40, 60));

        coordinator.handle_pointer(&mut state, press(160, 160));
        assert_eq!(state.active_gesture(), Some(ActiveGesture::FrameMove));
        coordinator.handle_pointer(&mut state, move_to(170, 180));
        coordinator.handle_pointer(&mut state, release(170, 180));

        assert_eq!(state.frame().origin(), Point::new(110, 120));
        assert_eq!(state.slot_rects()[0], Rect::new(50, 50, 40, 60));
    }

    #[test]
    fn slot_drag_in_edit_mode_refits_container() {
        let mut coordinator = LayoutCoordinator::default();
        let mut state = single_slot_state(Point::new(100, 100), Rect::new(50, 50, 40, 60));
        coordinator.set_edit_mode(&mut state, true);

        coordinator.handle_pointer(&mut state, press(160, 160));
        assert_eq!(state.active_gesture(), Some(ActiveGesture::Slot(0)));
        let response = coordinator.handle_pointer(&mut state, move_to(190, 150));
        assert!(response.changed);
        assert_eq!(response.cursor, CursorHint::Move);

        assert_eq!(state.slot_rects()[0], Rect::new(80, 40, 40, 60));
        assert_eq!(state.frame().origin(), Point::new(100, 100));
        // union of (80,40,40,60) and the parked slots at (400,150), padded by 40
        assert_eq!(state.container().rect(), Rect::new(40, 0, 400, 190));
    }

    #[test]
    fn slot_resize_in_edit_mode_refits_container() {
        let mut coordinator = LayoutCoordinator::default();
        let mut state = single_slot_state(Point::new(0, 0), Rect::new(50, 50, 40, 60));
        coordinator.set_edit_mode(&mut state, true);

        coordinator.handle_pointer(&mut state, press(88, 108));
        assert!(state.slots()[0].element.gesture().is_resizing());
        coordinator.handle_pointer(&mut state, move_to(98, 118));
        assert_eq!(state.slot_rects()[0], Rect::new(50, 50, 50, 70));
        assert_eq!(state.container().rect(), Rect::new(10, 10, 430, 180));
    }

    #[test]
    fn only_slot_resizes_request_a_refit() {
        let mut coordinator = LayoutCoordinator::default();
        coordinator.on_resize_changed(ElementId::Container, Rect::new(0, 0, 100, 100));
        assert!(!coordinator.refit_pending);
        coordinator.on_resize_changed(ElementId::Slot(3), Rect::new(0, 0, 30, 40));
        assert!(coordinator.refit_pending);
    }

    #[test]
    fn second_press_is_ignored_while_gesture_active() {
        let mut coordinator = LayoutCoordinator::default();
        let (_, mut state) = reset_state();
        coordinator.set_edit_mode(&mut state, true);

        // inside slot 0 body
        coordinator.handle_pointer(&mut state, press(100 + 60, 100 + 60));
        assert_eq!(state.active_gesture(), Some(ActiveGesture::Slot(0)));
        coordinator.handle_pointer(&mut state, press(100 + 400, 100 + 60));
        assert_eq!(state.active_gesture(), Some(ActiveGesture::Slot(0)));
        assert!(!state.slots()[4].element.gesture().is_active());
        coordinator.handle_pointer(&mut state, release(0, 0));
        assert_eq!(state.active_gesture(), None);
    }

    #[test]
    fn press_on_container_padding_drags_container_and_slots() {
        let (mut coordinator, mut state) = reset_state();
        coordinator.set_edit_mode(&mut state, true);
        let before = state.slot_rects();
        let container = state.container().rect();

        // top padding strip of the container, above the slots
        let grab = Point::new(100 + container.x + 100, 100 + container.y + 10);
        coordinator.handle_pointer(&mut state, press(grab.x, grab.y));
        assert_eq!(state.active_gesture(), Some(ActiveGesture::Container));
        coordinator.handle_pointer(&mut state, move_to(grab.x - 2, grab.y + 10));

        let moved = state.container().rect().origin() - container.origin();
        for (after, before) in state.slot_rects().iter().zip(before.iter()) {
            assert_eq!(*after, before.translate(moved));
        }
    }

    #[test]
    fn frame_bottom_zone_wins_over_container() {
        let (mut coordinator, mut state) = reset_state();
        coordinator.set_edit_mode(&mut state, true);
        assert_eq!(state.container().rect(), Rect::new(12, 0, 475, 200));

        // local (250, 195): inside the container and the bottom edge zone
        assert_eq!(
            coordinator.handle_pointer(&mut state, move_to(350, 295)).cursor,
            CursorHint::ResizeVertical
        );
        coordinator.handle_pointer(&mut state, press(350, 295));
        assert_eq!(state.active_gesture(), Some(ActiveGesture::FrameResize));
        assert_eq!(state.frame_resize_mode(), Some(ResizeMode::Bottom));
        coordinator.handle_pointer(&mut state, release(350, 295));

        // the container's own handle outside the frame zones still works
        coordinator.handle_pointer(&mut state, press(580, 295));
        assert_eq!(state.active_gesture(), Some(ActiveGesture::Container));
        assert!(state.container().gesture().is_resizing());
    }

    #[test]
    fn window_move_saturates_at_extreme_pointer() {
        let mut coordinator = LayoutCoordinator::default();
        let mut state = single_slot_state(Point::new(0, 0), Rect::new(50, 50, 40, 60));

        coordinator.handle_pointer(&mut state, press(-10, 0));
        let response = coordinator.handle_pointer(&mut state, move_to(i32::MAX, 0));
        assert!(response.changed);
        assert_eq!(state.frame().origin(), Point::new(i32::MAX, 0));
    }

    #[test]
    fn release_calls_inert_bounds_check() {
        let mut coordinator = LayoutCoordinator::default();
        let mut state = single_slot_state(Point::new(0, 0), Rect::new(50, 50, 40, 60));
        coordinator.set_edit_mode(&mut state, true);

        coordinator.handle_pointer(&mut state, press(60, 60));
        coordinator.handle_pointer(&mut state, move_to(2000, 2000));
        coordinator.handle_pointer(&mut state, release(2000, 2000));

        // the window does not grow to follow the slot
        assert_eq!(state.frame().size(), Size::new(500, 200));
        assert!(!state.take_config_dirty());
    }

    #[test]
    fn hover_cursor_reports_handles() {
        let mut coordinator = LayoutCoordinator::default();
        let mut state = single_slot_state(Point::new(0, 0), Rect::new(50, 50, 40, 60));
        assert_eq!(
            coordinator.handle_pointer(&mut state, move_to(60, 60)).cursor,
            CursorHint::Default
        );
        coordinator.set_edit_mode(&mut state, true);
        assert_eq!(
            coordinator.handle_pointer(&mut state, move_to(60, 60)).cursor,
            CursorHint::Move
        );
        assert_eq!(
            coordinator.handle_pointer(&mut state, move_to(88, 108)).cursor,
            CursorHint::ResizeDiagonal
        );
        assert_eq!(
            coordinator.handle_pointer(&mut state, move_to(495, 100)).cursor,
            CursorHint::ResizeHorizontal
        );
    }

    #[test]
    fn right_button_never_starts_a_gesture() {
        let mut coordinator = LayoutCoordinator::default();
        let (_, mut state) = reset_state();
        coordinator.handle_pointer(
            &mut state,
            PointerEvent::Press {
                position: Point::new(150, 150),
                button: MouseButton::Right,
                modifiers: Modifiers::default(),
            },
        );
        assert_eq!(state.active_gesture(), None);
    }
}
