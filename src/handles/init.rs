use std::path::PathBuf;

use crate::config::models::FieldsFile;
use crate::config::{ConfigError, default_fields_path, loader};
use crate::utils::display;

pub fn handle(path: Option<PathBuf>, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let path = match path {
        Some(path) => path,
        None => default_fields_path()?,
    };

    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists { path }.into());
    }

    loader::write_fields(&path, &FieldsFile::sample())?;
    display::show_success(&format!("Wrote sample fields to {}", path.display()));
    Ok(())
}
