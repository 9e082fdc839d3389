//! Marquee application library
//!
//! This crate contains the desktop carousel's library surfaces used by the
//! executable in `src/main.rs`: application glue around `marquee-core`
//! following iced's state/update/view/subscription split.
//!
//! The library surface exists mainly to enable testing and internal reuse;
//! most consumers should use the `marquee-app` binary.

pub mod app;
pub mod message;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
