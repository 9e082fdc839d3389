use std::time::Instant;

use iced::Size;

/// Root application message.
#[derive(Debug, Clone)]
pub enum Message {
    /// Carousel interaction.
    Carousel(CarouselMessage),
    /// Animation frame from the periodic driver.
    Tick(Instant),
    /// Window geometry changed.
    WindowResized(Size),
}

/// Message for carousel selection and navigation.
#[derive(Debug, Clone, Copy)]
pub enum CarouselMessage {
    /// An item card was clicked.
    ItemPressed(usize),
    /// The previous control was activated.
    Previous,
    /// The next control was activated.
    Next,
}
