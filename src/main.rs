//! Lesson Player
//!
//! A learning dashboard whose lesson video keeps playing while you browse:
//! docked on the lesson page, floating in a draggable mini player elsewhere.

mod app;
mod components;
mod constants;
mod core;
mod hotkeys;
mod state;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::core::paths::settings_path;
use crate::state::PlayerSettings;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lesson_player=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let path = settings_path();
    let settings = match PlayerSettings::load(&path) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
            PlayerSettings::default()
        }
    };
    tracing::info!(path = %path.display(), "settings loaded");

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Lesson Player")
                .with_inner_size(LogicalSize::new(settings.window_width, settings.window_height))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(settings)
        .launch(app::App);
}
