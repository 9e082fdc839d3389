use marquee_app::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("marquee_app", LevelFilter::Debug)
        .filter_module("marquee_core", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = match AppConfig::from_environment() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; falling back to defaults");
            AppConfig::default()
        }
    };

    app::run(config)
}
