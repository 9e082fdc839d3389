//! Marquee core
//!
//! Renderer-agnostic model and animation math for the spotlight carousel.
//! This crate deliberately knows nothing about widgets or any particular
//! UI framework: the host application owns the event loop and rendering,
//! calls into the selection state machine on input, and evaluates the
//! layout mapper and animation primitives per frame.
//!
//! All time-dependent types take the current [`std::time::Instant`] as an
//! explicit argument rather than reading the clock themselves, so tests
//! drive them with constructed instants.

pub mod easing;
pub mod items;
pub mod layout;
pub mod pulse;
pub mod selection;
pub mod transition;

pub use easing::Easing;
pub use items::{Item, ItemId, ItemStore};
pub use layout::{ItemTransform, item_transform};
pub use pulse::Pulse;
pub use selection::SelectionState;
pub use transition::Transition;
