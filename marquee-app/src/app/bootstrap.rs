//! Boot configuration and initial state construction.

use std::time::Instant;

use iced::Task;
use thiserror::Error;

use crate::message::Message;
use crate::state::State;

/// Runtime configuration resolved before the UI starts.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Disable the pulse and make selection changes instant.
    pub reduced_motion: bool,
}

/// Failure to interpret the environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {variable} (expected 1/true/yes or 0/false/no)")]
    InvalidFlag {
        variable: &'static str,
        value: String,
    },
}

impl AppConfig {
    /// Read configuration from the environment.
    pub fn from_environment() -> Result<Self, ConfigError> {
        Ok(Self {
            reduced_motion: flag_from_env("MARQUEE_REDUCED_MOTION")?,
        })
    }
}

fn flag_from_env(variable: &'static str) -> Result<bool, ConfigError> {
    match std::env::var(variable) {
        Err(_) => Ok(false),
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "" | "0" | "false" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidFlag { variable, value }),
        },
    }
}

/// Boot logic for the running application, returning the initial state and
/// task batch.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    let state = State::new(config.clone(), Instant::now());

    log::info!(
        "booting with {} items, selection {}, reduced motion {}",
        state.store().len(),
        state.selected(),
        config.reduced_motion,
    );

    (state, Task::none())
}
