use crate::cli::ConfigArgs;
use crate::config::{self, default_fields_path, loader};
use crate::utils::display;

pub fn handle(args: ConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    let explicit = args.config.is_some();
    let path = match args.config {
        Some(path) => path,
        None => default_fields_path()?,
    };

    // A path given on the command line has to exist; read_fields reports it.
    if !explicit && !path.exists() {
        display::show_warning(&format!(
            "No fields file at {}. Run `tui-select init` to create one.",
            path.display()
        ));
        return Ok(());
    }

    let file = loader::read_fields(&path)?;
    let issues = config::check(&file);

    if issues.is_empty() {
        display::show_success(&format!(
            "All {} fields in {} are valid.",
            file.fields.len(),
            path.display()
        ));
        return Ok(());
    }

    for issue in &issues {
        display::show_error(&issue.to_string());
    }
    Err(format!("Found {} issue(s) in {}.", issues.len(), path.display()).into())
}
