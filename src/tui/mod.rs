use crate::config::ConfigManager;
use crate::tui::app::App;

pub mod app;
pub mod components;
pub mod event;
pub mod listener;
pub mod theme;
pub mod ui;
pub mod widgets;

pub fn run(config_manager: ConfigManager) -> Result<(), Box<dyn std::error::Error>> {
    App::run(config_manager)
}
