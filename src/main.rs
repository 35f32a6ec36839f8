#![warn(
    clippy::all,
    // clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    // clippy::unwrap_used
)]
use app::App;
use clap::Parser;

mod app;
pub mod calendar;
mod cli;
pub mod config;
mod logger;
pub mod views;

fn main() -> iced::Result {
    let cli = cli::Cli::parse();
    logger::init(cli.log_level);

    let mut config = match config::init(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    if cli.date.is_some() {
        config.initial_date = cli.date;
    }

    let scale_factor = config.scale_factor;

    iced::application::application("Calendar", App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .scale_factor(move |_| scale_factor)
        .run_with(move || App::new(config))
}
