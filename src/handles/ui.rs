use crate::cli::ConfigArgs;
use crate::config::ConfigManager;

pub fn handle(args: ConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config_manager = ConfigManager::new(args.config)?;
    crate::tui::run(config_manager)
}
