use std::fs;
use std::path::Path;

use crate::config::ConfigError;
use crate::config::models::FieldsFile;

pub fn read_fields(path: &Path) -> Result<FieldsFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(FieldsFile::default());
    }

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_fields(path: &Path, file: &FieldsFile) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let content = toml::to_string_pretty(file)?;
    fs::write(path, content).map_err(io_err)?;
    Ok(())
}
