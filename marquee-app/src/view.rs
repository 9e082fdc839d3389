//! Visual tree construction.

use iced::widget::{Space, button, column, container, mouse_area, row, stack, text};
use iced::{Element, Length, Size, alignment};

use marquee_core::items::Item;
use marquee_core::layout::{ITEM_HEIGHT, ITEM_WIDTH, anchor_x, item_transform};

use crate::message::{CarouselMessage, Message};
use crate::state::State;
use crate::theme::CarouselTheme;

const LABEL_SIZE: f32 = 20.0;
const NAV_GLYPH_SIZE: f32 = 26.0;
const NAV_MARGIN: f32 = 32.0;

/// Build the frame from the current state.
///
/// One stack layer per item card, ordered so cards nearer the focus render
/// above farther ones, plus overlay layers for the navigation controls.
/// The mapper is re-evaluated for every item on every call.
pub fn view(state: &State) -> Element<'_, Message> {
    let focus = state.focus();
    let viewport = state.window_size();

    let mut order: Vec<usize> = (0..state.store().len()).collect();
    order.sort_by(|a, b| {
        let near_a = (*a as f32 - focus).abs();
        let near_b = (*b as f32 - focus).abs();
        near_b
            .partial_cmp(&near_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut layers: Vec<Element<'_, Message>> = Vec::with_capacity(order.len() + 2);
    for index in order {
        if let Some(item) = state.store().get(index) {
            layers.push(item_layer(index, item, focus, viewport));
        }
    }

    let pulse_scale = state.pulse_scale();
    if state.can_go_previous() {
        layers.push(nav_layer(
            "\u{2039}",
            CarouselMessage::Previous,
            pulse_scale,
            alignment::Horizontal::Left,
        ));
    }
    if state.can_go_next() {
        layers.push(nav_layer(
            "\u{203A}",
            CarouselMessage::Next,
            pulse_scale,
            alignment::Horizontal::Right,
        ));
    }

    stack(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One absolutely positioned card: a leading horizontal spacer for x, a
/// top spacer for y, then the scaled card itself.
fn item_layer(index: usize, item: &Item, focus: f32, viewport: Size) -> Element<'static, Message> {
    let transform = item_transform(index, focus);
    let width = ITEM_WIDTH * transform.scale;
    let height = ITEM_HEIGHT * transform.scale;
    let x = (anchor_x(viewport.width, width) + transform.offset_x).max(0.0);
    let y = ((viewport.height - height) / 2.0).max(0.0);

    let color = CarouselTheme::ITEM_PALETTE[item.palette_slot(CarouselTheme::ITEM_PALETTE.len())];

    let card = container(
        text(item.label())
            .size(LABEL_SIZE * transform.scale)
            .color(CarouselTheme::TEXT_PRIMARY),
    )
    .width(Length::Fixed(width))
    .height(Length::Fixed(height))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(CarouselTheme::card(color));

    let card = mouse_area(card)
        .on_press(Message::Carousel(CarouselMessage::ItemPressed(index)))
        .interaction(iced::mouse::Interaction::Pointer);

    row![
        Space::with_width(Length::Fixed(x)),
        column![Space::with_height(Length::Fixed(y)), card],
    ]
    .into()
}

/// Overlay layer holding one pulsing navigation control at the left or
/// right edge, vertically centered.
fn nav_layer(
    glyph: &str,
    message: CarouselMessage,
    pulse_scale: f32,
    edge: alignment::Horizontal,
) -> Element<'static, Message> {
    let control = button(
        text(glyph.to_string())
            .size(NAV_GLYPH_SIZE * pulse_scale)
            .color(CarouselTheme::TEXT_PRIMARY),
    )
    .on_press(Message::Carousel(message))
    .padding([8.0, 16.0])
    .style(CarouselTheme::nav_button);

    container(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(edge)
        .align_y(alignment::Vertical::Center)
        .padding(NAV_MARGIN)
        .into()
}
