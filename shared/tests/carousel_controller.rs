mod common;

use common::{init_tracing, RecordingHost};
use page_widgets_shared::carousel::CarouselController;

fn attach(slides: usize) -> CarouselController<RecordingHost> {
    init_tracing();
    CarouselController::attach(Some(RecordingHost::with_slides(slides))).expect("track present")
}

#[test]
fn attach_creates_one_indicator_per_slide_and_paints_first() {
    let carousel = attach(3);
    let host = carousel.host();

    assert_eq!(carousel.indicator_count(), 3);
    assert_eq!(host.indicators[0].0, "Go to review 1");
    assert_eq!(host.indicators[2].0, "Go to review 3");
    assert_eq!(host.current_indicators(), vec![0]);
    assert_eq!(host.transform.as_deref(), Some("translateX(-0%)"));
    assert_eq!(host.prev_disabled, Some(true));
    assert_eq!(host.next_disabled, Some(false));
}

#[test]
fn absent_track_is_a_no_op() {
    let carousel = CarouselController::<RecordingHost>::attach(None);
    assert!(carousel.is_none());
}

#[test]
fn zero_slides_attach_without_indicators() {
    let carousel = attach(0);
    assert_eq!(carousel.slide_count(), 0);
    assert_eq!(carousel.indicator_count(), 0);
    assert!(carousel.host().indicators.is_empty());
    assert_eq!(carousel.current(), 0);
}

#[test]
fn go_to_clamps_for_five_slides() {
    let mut carousel = attach(5);
    assert_eq!(carousel.go_to(-3), 0);
    assert_eq!(carousel.go_to(99), 4);
    assert_eq!(carousel.host().transform.as_deref(), Some("translateX(-400%)"));
}

#[test]
fn exactly_one_indicator_is_current_after_every_jump() {
    let mut carousel = attach(4);
    for target in [2i64, -1, 3, 10, 1] {
        let index = carousel.go_to(target);
        assert_eq!(carousel.host().current_indicators(), vec![index]);
    }
}

#[test]
fn nav_controls_disable_only_at_the_ends() {
    let mut carousel = attach(3);
    for target in 0..3i64 {
        let index = carousel.go_to(target);
        let host = carousel.host();
        assert_eq!(host.prev_disabled, Some(index == 0));
        assert_eq!(host.next_disabled, Some(index == 2));
    }
}

#[test]
fn buttons_step_without_wrapping() {
    let mut carousel = attach(2);
    assert_eq!(carousel.prev(), 0);
    assert_eq!(carousel.next(), 1);
    assert_eq!(carousel.next(), 1);
}

#[test]
fn arrow_keys_drive_the_carousel() {
    let mut carousel = attach(3);
    assert!(carousel.handle_key("ArrowRight"));
    assert_eq!(carousel.current(), 1);
    assert!(carousel.handle_key("ArrowLeft"));
    assert_eq!(carousel.current(), 0);
    assert!(!carousel.handle_key("Enter"));
    assert_eq!(carousel.current(), 0);
}

#[test]
fn swipe_left_past_threshold_advances() {
    let mut carousel = attach(4);
    carousel.go_to(1);
    carousel.touch_start(300.0);
    carousel.touch_move(250.0);
    assert_eq!(carousel.current(), 2);
}

#[test]
fn short_drag_does_nothing() {
    let mut carousel = attach(4);
    carousel.go_to(1);
    carousel.touch_start(300.0);
    carousel.touch_move(320.0);
    assert_eq!(carousel.current(), 1);
}

#[test]
fn one_gesture_moves_at_most_one_slide() {
    let mut carousel = attach(4);
    carousel.go_to(2);
    carousel.touch_start(100.0);
    carousel.touch_move(150.0);
    carousel.touch_move(250.0);
    carousel.touch_move(400.0);
    assert_eq!(carousel.current(), 1);
}

#[test]
fn missing_indicator_container_keeps_other_channels() {
    let host = RecordingHost {
        slides: 3,
        has_dots: false,
        ..RecordingHost::default()
    };
    let mut carousel = CarouselController::attach(Some(host)).expect("track present");
    assert_eq!(carousel.indicator_count(), 0);
    assert_eq!(carousel.next(), 1);
    assert_eq!(carousel.host().transform.as_deref(), Some("translateX(-100%)"));
}

#[test]
fn custom_swipe_threshold_is_honored() {
    let host = RecordingHost::with_slides(3);
    let mut carousel =
        CarouselController::attach_with_threshold(Some(host), 10.0).expect("track present");
    carousel.touch_start(0.0);
    carousel.touch_move(-15.0);
    assert_eq!(carousel.current(), 1);
}

#[test]
fn jumps_repaint_without_creating_indicators() {
    let mut carousel = attach(3);
    let mutations = carousel.host().mutations;
    carousel.go_to(2);
    assert_eq!(carousel.host().indicators.len(), 3);
    // transform + two nav flags + one mark per indicator
    assert_eq!(carousel.host().mutations, mutations + 3 + 3);
}
