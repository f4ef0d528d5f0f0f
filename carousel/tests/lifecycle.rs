mod common;

use carousel::{Carousel, CarouselConfig, ConfigError, GestureConfig, Key, KeyScope, ManualClock};
use common::{RecordingTrack, images, setup};
use tokio::sync::mpsc::error::TryRecvError;

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_invalid_config_is_rejected() {
    let config = CarouselConfig::new().gestures(GestureConfig::new().swipe_width_ratio(2.0));
    let result = Carousel::with_config(
        images(3),
        RecordingTrack::new(400.0),
        config,
        ManualClock::new(),
    );
    assert_eq!(result.unwrap_err(), ConfigError::InvalidRatio(2.0));
}

#[test]
fn test_custom_gesture_thresholds_apply() {
    let clock = ManualClock::new();
    let gestures = GestureConfig::new()
        .swipe_min_px(20.0)
        .long_press(std::time::Duration::from_millis(100));
    let config = CarouselConfig::new()
        .aria_label("Holiday photos")
        .gestures(gestures);
    let mut carousel =
        Carousel::with_config(images(3), RecordingTrack::new(100.0), config, clock.clone())
            .unwrap();
    assert_eq!(carousel.aria_label(), Some("Holiday photos"));

    carousel.pointer_down(carousel::PointerEvent::touch(50.0));
    carousel.pointer_up(carousel::PointerEvent::touch(30.0));
    assert!(carousel.is_animating());
    carousel.settle();

    carousel.pointer_down(carousel::PointerEvent::touch(50.0));
    clock.advance(std::time::Duration::from_millis(100));
    carousel.pointer_up(carousel::PointerEvent::touch(50.0));
    assert_eq!(carousel.selected_index(), Some(1));
}

// =============================================================================
// Teardown
// =============================================================================

#[test]
fn test_teardown_discards_pending_commit() {
    let mut carousel = setup(4);
    carousel.next();
    carousel.next();
    assert!(carousel.is_animating());

    carousel.teardown();

    assert!(carousel.is_torn_down());
    assert!(!carousel.is_animating());
    assert_eq!(carousel.queued_steps(), 0);
    assert!(!carousel.run_pending());
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.current_item_index(), Some(0));
}

#[test]
fn test_teardown_unsubscribes_keyboard() {
    let mut carousel = setup(4);
    carousel.teardown();
    assert!(!carousel.handle_key(Key::Right, KeyScope::focused()));
    assert!(!carousel.is_animating());
}

#[test]
fn test_teardown_closes_subscribers() {
    let mut carousel = setup(4);
    let mut rx = carousel.subscribe();
    carousel.teardown();
    carousel.select(1);

    assert_eq!(carousel.selected_index(), None);
    assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Disconnected);
}

#[test]
fn test_commands_after_teardown_are_ignored() {
    let mut carousel = setup(4);
    carousel.teardown();

    carousel.next();
    carousel.go_to(3);
    carousel.go_to_item(2);
    carousel.set_items(images(2));
    carousel.pointer_down(carousel::PointerEvent::mouse(0.0));
    carousel.pointer_up(carousel::PointerEvent::mouse(0.0));

    assert_eq!(carousel.len(), 4);
    assert_eq!(carousel.current_item_index(), Some(0));
    assert_eq!(carousel.selected_index(), None);
    assert!(!carousel.is_animating());

    // Idempotent.
    carousel.teardown();
}

#[test]
fn test_teardown_releases_active_pointer() {
    let mut carousel = setup(3);
    carousel.pointer_down(carousel::PointerEvent::mouse(10.0));
    carousel.teardown();
    assert_eq!(
        carousel.host().ops.last(),
        Some(&common::TrackOp::Release(1))
    );
}
