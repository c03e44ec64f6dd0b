pub mod cli;
pub mod config;
pub mod handles;
pub mod tui;
pub mod utils;

pub use config::models::{OptionValue, SelectOption};
pub use tui::components::select::{SelectError, SelectProps, SelectState, SelectValue};
pub use tui::event::select::{ClickTarget, SelectEvent, SelectKey};
pub use tui::widgets::select::SelectLayout;
