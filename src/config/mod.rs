use self::models::{FieldConfig, FieldsFile};
use crate::tui::components::select::{SelectError, SelectValue};
use log::info;
use std::path::PathBuf;

pub mod loader;
pub mod models;

pub const APP_DIR: &str = "tui-select";
pub const FIELDS_FILE: &str = "fields.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not find the configuration directory")]
    NoConfigDir,

    #[error("Could not access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not serialize fields: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Field '{field}': {source}")]
    Invalid {
        field: String,
        #[source]
        source: SelectError,
    },

    #[error("Field '{name}' is defined more than once")]
    DuplicateField { name: String },

    #[error("No select fields are defined")]
    NoFields,

    #[error("'{path}' already exists (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },
}

/// Where the fields file lives when no path is given on the command line.
pub fn default_fields_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join(APP_DIR).join(FIELDS_FILE))
}

/// A validated field, ready to back one select widget.
#[derive(Debug, Clone)]
pub struct Field {
    pub config: FieldConfig,
    pub initial: SelectValue,
}

pub struct ConfigManager {
    pub fields: Vec<Field>,
    pub path: PathBuf,
    /// False when the built-in sample stands in for a missing file.
    pub from_file: bool,
}

impl ConfigManager {
    /// Load and validate the fields file at `path`, or the default location.
    /// A missing default file falls back to the built-in sample.
    pub fn new(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let explicit = path.is_some();
        let path = match path {
            Some(path) => path,
            None => default_fields_path()?,
        };

        let (file, from_file) = if !explicit && !path.exists() {
            info!("no fields file at {}, using the sample", path.display());
            (FieldsFile::sample(), false)
        } else {
            (loader::read_fields(&path)?, true)
        };

        let fields = validate(file)?;
        info!("loaded {} select fields", fields.len());

        Ok(Self {
            fields,
            path,
            from_file,
        })
    }
}

/// Check every field and resolve its initial value. Stops at the first
/// problem; see [`check`] for collecting all of them.
pub fn validate(file: FieldsFile) -> Result<Vec<Field>, ConfigError> {
    if let Some(err) = check(&file).into_iter().next() {
        return Err(err);
    }

    file.fields
        .into_iter()
        .map(|config| -> Result<Field, ConfigError> {
            let initial = config.initial_value().map_err(|source| ConfigError::Invalid {
                field: config.name.clone(),
                source,
            })?;
            Ok(Field { config, initial })
        })
        .collect()
}

/// Every problem found in `file`, in field order.
pub fn check(file: &FieldsFile) -> Vec<ConfigError> {
    if file.is_empty() {
        return vec![ConfigError::NoFields];
    }

    let mut issues = Vec::new();
    let mut names = std::collections::HashSet::new();
    for field in &file.fields {
        if !names.insert(field.name.as_str()) {
            issues.push(ConfigError::DuplicateField {
                name: field.name.clone(),
            });
        }
        if let Err(source) = field.initial_value() {
            issues.push(ConfigError::Invalid {
                field: field.name.clone(),
                source,
            });
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::models::{FieldDefault, SelectOption};

    fn field(name: &str) -> FieldConfig {
        FieldConfig {
            name: name.to_string(),
            multiple: false,
            default: None,
            options: vec![SelectOption::new("A", 1)],
        }
    }

    #[test]
    fn empty_file_is_an_issue() {
        let issues = check(&FieldsFile::default());
        assert!(matches!(issues.as_slice(), [ConfigError::NoFields]));
    }

    #[test]
    fn check_collects_every_issue() {
        let mut bad = field("Second");
        bad.default = Some(FieldDefault::One(9.into()));
        let file = FieldsFile::new(vec![field("First"), bad, field("First")]);

        let issues = check(&file);
        assert_eq!(issues.len(), 2);
        assert!(matches!(&issues[0], ConfigError::Invalid { field, .. } if field == "Second"));
        assert!(matches!(&issues[1], ConfigError::DuplicateField { name } if name == "First"));

        assert!(validate(file).is_err());
    }

    #[test]
    fn validate_resolves_initial_values() {
        let fields = validate(FieldsFile::sample()).unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1].initial.labels(), vec!["2021"]);
    }

    #[test]
    fn manager_keeps_the_explicit_path() {
        let path = std::env::temp_dir()
            .join(format!("tui-select-{}-manager", std::process::id()))
            .join("fields.toml");
        loader::write_fields(&path, &FieldsFile::sample()).unwrap();

        let manager = ConfigManager::new(Some(path.clone())).unwrap();
        assert_eq!(manager.path, path);
        assert!(manager.from_file);
        assert_eq!(manager.fields.len(), 3);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
