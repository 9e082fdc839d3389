//! Root-level subscription composition.

use std::time::Duration;

use iced::Subscription;
use iced::keyboard::{self, Key, key::Named};

use crate::message::{CarouselMessage, Message};
use crate::state::State;

/// Animation frame cadence (~60 FPS).
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Composes the animation driver, window events, and keyboard navigation
/// into a single batch.
///
/// The periodic driver is only returned while something animates, so with
/// reduced motion on no timer exists at all; dropping the subscription on
/// teardown releases it.
pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![
        iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
        keyboard::on_key_press(handle_key_press),
    ];

    if state.animation_active() {
        subscriptions.push(iced::time::every(TICK_INTERVAL).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}

fn handle_key_press(key: Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(Message::Carousel(CarouselMessage::Previous)),
        Key::Named(Named::ArrowRight) => Some(Message::Carousel(CarouselMessage::Next)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_navigation() {
        let left = handle_key_press(
            Key::Named(Named::ArrowLeft),
            keyboard::Modifiers::empty(),
        );
        assert!(matches!(
            left,
            Some(Message::Carousel(CarouselMessage::Previous))
        ));

        let right = handle_key_press(
            Key::Named(Named::ArrowRight),
            keyboard::Modifiers::empty(),
        );
        assert!(matches!(
            right,
            Some(Message::Carousel(CarouselMessage::Next))
        ));
    }

    #[test]
    fn modified_chords_are_ignored() {
        let chord = handle_key_press(Key::Named(Named::ArrowLeft), keyboard::Modifiers::CTRL);
        assert!(chord.is_none());
    }

    #[test]
    fn other_keys_are_ignored() {
        let escape = handle_key_press(
            Key::Named(Named::Escape),
            keyboard::Modifiers::empty(),
        );
        assert!(escape.is_none());
    }
}
