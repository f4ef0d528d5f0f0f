mod common;

use carousel::{Key, KeyScope, PointerEvent, PointerType};
use common::{TrackOp, ms, setup, setup_with_clock};

// =============================================================================
// Taps and long-presses
// =============================================================================

#[test]
fn test_mouse_click_selects_immediately() {
    let (mut carousel, _clock) = setup_with_clock(4);
    let mut rx = carousel.subscribe();

    carousel.pointer_down(PointerEvent::mouse(120.0));
    carousel.pointer_up(PointerEvent::mouse(120.0));

    assert_eq!(carousel.selected_index(), Some(0));
    let change = rx.try_recv().unwrap();
    assert_eq!(change.index, 0);
    assert_eq!(change.item.src, "https://example.com/1.jpg");
    assert!(!carousel.is_animating());
}

#[test]
fn test_pen_click_selects() {
    let (mut carousel, clock) = setup_with_clock(3);
    carousel.pointer_down(PointerEvent::pen(50.0));
    clock.advance(ms(30));
    carousel.pointer_up(PointerEvent::pen(58.0));
    assert_eq!(carousel.selected_index(), Some(0));
}

#[test]
fn test_touch_tap_does_not_select() {
    let (mut carousel, clock) = setup_with_clock(4);
    let mut rx = carousel.subscribe();

    carousel.pointer_down(PointerEvent::touch(120.0));
    clock.advance(ms(449));
    carousel.pointer_up(PointerEvent::touch(120.0));

    assert_eq!(carousel.selected_index(), None);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_touch_long_press_selects() {
    let (mut carousel, clock) = setup_with_clock(4);

    carousel.pointer_down(PointerEvent::touch(120.0));
    clock.advance(ms(450));
    carousel.pointer_up(PointerEvent::touch(125.0));

    assert_eq!(carousel.selected_index(), Some(0));
    assert_eq!(carousel.selection_pulse(), 1);
}

#[test]
fn test_touch_long_press_that_moved_does_not_select() {
    let (mut carousel, clock) = setup_with_clock(4);

    carousel.pointer_down(PointerEvent::touch(120.0));
    clock.advance(ms(800));
    carousel.pointer_up(PointerEvent::touch(140.0));

    assert_eq!(carousel.selected_index(), None);
    assert!(!carousel.is_animating());
}

#[test]
fn test_unknown_pointer_type_never_selects() {
    let (mut carousel, clock) = setup_with_clock(4);
    let event = PointerEvent::new(9, 10.0, PointerType::Other);

    carousel.pointer_down(event);
    clock.advance(ms(1000));
    carousel.pointer_up(event);

    assert_eq!(carousel.selected_index(), None);
}

#[test]
fn test_selection_uses_slide_under_pointer_down() {
    let (mut carousel, _clock) = setup_with_clock(4);

    carousel.pointer_down(PointerEvent::mouse(200.0));
    // The view moves while the button is held.
    carousel.handle_key(Key::Right, KeyScope::focused());
    carousel.settle();
    assert_eq!(carousel.current_item_index(), Some(1));

    carousel.pointer_up(PointerEvent::mouse(200.0));
    assert_eq!(carousel.selected_index(), Some(0));
}

// =============================================================================
// Swipes
// =============================================================================

#[test]
fn test_swipe_left_navigates_forward_without_selecting() {
    let (mut carousel, clock) = setup_with_clock(4);

    carousel.pointer_down(PointerEvent::touch(300.0));
    clock.advance(ms(1000));
    carousel.pointer_up(PointerEvent::touch(200.0));

    assert!(carousel.is_animating());
    carousel.settle();
    assert_eq!(carousel.current_item_index(), Some(1));
    assert_eq!(carousel.selected_index(), None);
}

#[test]
fn test_mouse_swipe_right_navigates_backward() {
    let (mut carousel, _clock) = setup_with_clock(4);

    carousel.pointer_down(PointerEvent::mouse(100.0));
    carousel.pointer_up(PointerEvent::mouse(148.0));
    carousel.settle();

    assert_eq!(carousel.current_item_index(), Some(3));
    assert_eq!(carousel.selected_index(), None);
}

#[test]
fn test_threshold_scales_with_track_width() {
    let (mut carousel, _clock) = setup_with_clock(4);
    carousel.host_mut().width = 1000.0;

    // 60px is below 0.08 * 1000 and above the tap tolerance.
    carousel.pointer_down(PointerEvent::mouse(500.0));
    carousel.pointer_up(PointerEvent::mouse(440.0));
    assert!(!carousel.is_animating());
    assert_eq!(carousel.selected_index(), None);

    carousel.pointer_down(PointerEvent::mouse(500.0));
    carousel.pointer_up(PointerEvent::mouse(420.0));
    assert!(carousel.is_animating());
}

#[test]
fn test_swipes_queue_behind_animation() {
    let (mut carousel, _clock) = setup_with_clock(5);

    for _ in 0..3 {
        carousel.pointer_down(PointerEvent::mouse(300.0));
        carousel.pointer_up(PointerEvent::mouse(100.0));
    }
    assert_eq!(carousel.queued_steps(), 2);
    assert_eq!(carousel.settle(), 3);
    assert_eq!(carousel.current_item_index(), Some(3));
}

// =============================================================================
// Capture and cancel
// =============================================================================

#[test]
fn test_pointer_is_captured_and_released() {
    let mut carousel = setup(3);
    carousel.host_mut().ops.clear();

    carousel.pointer_down(PointerEvent::new(7, 0.0, PointerType::Mouse));
    carousel.pointer_up(PointerEvent::new(7, 0.0, PointerType::Mouse));

    assert_eq!(
        carousel.host().ops,
        vec![TrackOp::Capture(7), TrackOp::Release(7)]
    );
}

#[test]
fn test_second_pointer_replaces_first() {
    let mut carousel = setup(3);
    carousel.host_mut().ops.clear();

    carousel.pointer_down(PointerEvent::new(1, 0.0, PointerType::Touch));
    carousel.pointer_down(PointerEvent::new(2, 0.0, PointerType::Mouse));
    assert_eq!(
        carousel.host().ops,
        vec![TrackOp::Capture(1), TrackOp::Release(1), TrackOp::Capture(2)]
    );

    // Up from the replaced pointer is ignored.
    carousel.pointer_up(PointerEvent::new(1, 0.0, PointerType::Touch));
    assert_eq!(carousel.selected_index(), None);

    carousel.pointer_up(PointerEvent::new(2, 0.0, PointerType::Mouse));
    assert_eq!(carousel.selected_index(), Some(0));
}

#[test]
fn test_cancel_neither_navigates_nor_selects() {
    let mut carousel = setup(4);

    carousel.pointer_down(PointerEvent::mouse(300.0));
    carousel.pointer_cancel();
    carousel.pointer_up(PointerEvent::mouse(0.0));

    assert!(!carousel.is_animating());
    assert_eq!(carousel.selected_index(), None);
    assert_eq!(carousel.host().ops.last(), Some(&TrackOp::Release(1)));
}

// =============================================================================
// Keyboard
// =============================================================================

#[test]
fn test_arrow_keys_navigate() {
    let mut carousel = setup(4);

    assert!(carousel.handle_key(Key::Right, KeyScope::focused()));
    carousel.settle();
    assert_eq!(carousel.current_item_index(), Some(1));

    assert!(carousel.handle_key(Key::Left, KeyScope::container()));
    assert!(carousel.handle_key(Key::Left, KeyScope::container()));
    carousel.settle();
    assert_eq!(carousel.current_item_index(), Some(3));
}

#[test]
fn test_enter_and_space_select_current_item() {
    let mut carousel = setup(4);
    let mut rx = carousel.subscribe();

    carousel.next();
    carousel.settle();
    assert!(carousel.handle_key(Key::Enter, KeyScope::focused()));
    assert!(carousel.handle_key(Key::Space, KeyScope::focused()));

    assert_eq!(carousel.selected_index(), Some(1));
    assert_eq!(carousel.selection_pulse(), 2);
    assert_eq!(rx.try_recv().unwrap().index, 1);
    assert_eq!(rx.try_recv().unwrap().index, 1);
}

#[test]
fn test_keys_outside_scope_pass_through() {
    let mut carousel = setup(4);
    assert!(!carousel.handle_key(Key::Right, KeyScope::outside()));
    assert!(!carousel.handle_key(Key::Up, KeyScope::focused()));
    assert!(!carousel.is_animating());
}

#[test]
fn test_select_key_on_empty_carousel_is_consumed_but_inert() {
    let mut carousel = setup(0);
    assert!(carousel.handle_key(Key::Enter, KeyScope::focused()));
    assert_eq!(carousel.selected_index(), None);
}
