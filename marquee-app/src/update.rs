//! Root message dispatch.

use iced::Task;

use crate::message::{CarouselMessage, Message};
use crate::state::State;

/// Apply a message to the state. All mutation happens here, on the UI
/// thread, in event order.
pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Carousel(carousel) => {
            let changed = match carousel {
                CarouselMessage::ItemPressed(index) => state.select(index),
                CarouselMessage::Previous => state.select_previous(),
                CarouselMessage::Next => state.select_next(),
            };

            if changed {
                log::debug!("selection changed to {}", state.selected());
            }

            Task::none()
        }
        Message::Tick(now) => {
            state.tick(now);
            Task::none()
        }
        Message::WindowResized(size) => {
            log::debug!("window resized to {}x{}", size.width, size.height);
            state.set_window_size(size);
            Task::none()
        }
    }
}
