use crate::cli::ConfigArgs;
use crate::config::ConfigManager;
use crate::utils::display;

pub fn handle(args: ConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config_manager = ConfigManager::new(args.config)?;

    if !config_manager.from_file {
        display::show_info(&format!(
            "No fields file at {}, showing the built-in sample.",
            config_manager.path.display()
        ));
    }

    display::show_fields(&config_manager.fields);
    Ok(())
}
