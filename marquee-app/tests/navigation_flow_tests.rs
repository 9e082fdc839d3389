//! End-to-end flows through the update loop: click, navigate, tick.

use std::time::{Duration, Instant};

use iced::Size;

use marquee_app::app::AppConfig;
use marquee_app::message::{CarouselMessage, Message};
use marquee_app::state::{INITIAL_SELECTION, ITEM_COUNT, State};
use marquee_app::update::update;

use marquee_core::layout::item_transform;

fn boot_state() -> State {
    State::new(AppConfig::default(), Instant::now())
}

fn press(state: &mut State, message: CarouselMessage) {
    let _task = update(state, Message::Carousel(message));
}

fn settle(state: &mut State) {
    let _task = update(state, Message::Tick(state.now() + Duration::from_secs(1)));
}

#[test]
fn initial_frame_matches_the_seeded_scenario() {
    let state = boot_state();
    assert_eq!(state.store().len(), 5);
    assert_eq!(state.selected(), INITIAL_SELECTION);

    let focus = state.focus();
    let center = item_transform(2, focus);
    assert!((center.scale - 1.0).abs() < 0.001);
    assert!((center.offset_x - 0.0).abs() < 0.001);

    let first = item_transform(0, focus);
    assert!((first.scale - 0.6).abs() < 0.001);
    assert!((first.offset_x - -360.0).abs() < 0.001);

    let last = item_transform(4, focus);
    assert!((last.scale - 0.6).abs() < 0.001);
    assert!((last.offset_x - 360.0).abs() < 0.001);
}

#[test]
fn clicking_the_last_item_centers_it_and_hides_next() {
    let mut state = boot_state();
    press(&mut state, CarouselMessage::ItemPressed(4));

    assert_eq!(state.selected(), 4);
    assert!(!state.can_go_next());
    assert!(state.can_go_previous());

    settle(&mut state);
    let transform = item_transform(4, state.focus());
    assert!((transform.scale - 1.0).abs() < 0.001);
    assert!((transform.offset_x - 0.0).abs() < 0.001);
}

#[test]
fn previous_at_the_first_item_is_a_noop() {
    let mut state = boot_state();
    press(&mut state, CarouselMessage::ItemPressed(0));
    settle(&mut state);

    press(&mut state, CarouselMessage::Previous);
    assert_eq!(state.selected(), 0);
    assert!(!state.can_go_previous());
}

#[test]
fn next_at_the_last_item_is_a_noop() {
    let mut state = boot_state();
    press(&mut state, CarouselMessage::ItemPressed(ITEM_COUNT as usize - 1));
    settle(&mut state);

    press(&mut state, CarouselMessage::Next);
    assert_eq!(state.selected(), ITEM_COUNT as usize - 1);
}

#[test]
fn next_then_previous_round_trips_from_interior_indices() {
    for start in 1..ITEM_COUNT as usize - 1 {
        let mut state = boot_state();
        press(&mut state, CarouselMessage::ItemPressed(start));
        settle(&mut state);

        press(&mut state, CarouselMessage::Next);
        press(&mut state, CarouselMessage::Previous);
        assert_eq!(state.selected(), start);
    }
}

#[test]
fn control_visibility_tracks_the_bounds() {
    let mut state = boot_state();
    assert!(state.can_go_previous());
    assert!(state.can_go_next());

    press(&mut state, CarouselMessage::ItemPressed(0));
    assert!(!state.can_go_previous());
    assert!(state.can_go_next());

    press(&mut state, CarouselMessage::ItemPressed(4));
    assert!(state.can_go_previous());
    assert!(!state.can_go_next());
}

#[test]
fn selection_animates_between_indices() {
    let mut state = boot_state();
    press(&mut state, CarouselMessage::ItemPressed(4));

    assert!(state.is_focus_animating());
    let tick_at = state.now() + Duration::from_millis(100);
    let _task = update(&mut state, Message::Tick(tick_at));
    let mid = state.focus();
    assert!(mid > INITIAL_SELECTION as f32);
    assert!(mid < 4.0);

    settle(&mut state);
    assert!((state.focus() - 4.0).abs() < 0.001);
    assert!(!state.is_focus_animating());
}

#[test]
fn reduced_motion_selections_settle_immediately() {
    let config = AppConfig {
        reduced_motion: true,
    };
    let mut state = State::new(config, Instant::now());

    press(&mut state, CarouselMessage::ItemPressed(0));
    assert_eq!(state.selected(), 0);
    assert!((state.focus() - 0.0).abs() < 0.001);
    assert!(!state.animation_active());
}

#[test]
fn window_resize_is_committed() {
    let mut state = boot_state();
    let _task = update(&mut state, Message::WindowResized(Size::new(1600.0, 900.0)));
    assert_eq!(state.window_size().width, 1600.0);
    assert_eq!(state.window_size().height, 900.0);
}
