use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tui::components::select::{SelectError, SelectProps, SelectValue};

/// The value carried by an option. Integers are tried first so that `2` in a
/// fields file stays a number rather than becoming the string "2".
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{n}"),
            OptionValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Number(value.into())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

/// A label/value pair offered as a selectable choice. Options never mutate
/// once handed to a select widget.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: OptionValue,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The initial selection of a field as written in the fields file: a single
/// option value, or an array of them for multiple-selection fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldDefault {
    One(OptionValue),
    Many(Vec<OptionValue>),
}

// One select field of the demo form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldDefault>,
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

impl FieldConfig {
    /// Resolve the configured default against the option list, producing
    /// the value shape that matches `multiple`.
    pub fn initial_value(&self) -> Result<SelectValue, SelectError> {
        let value = match (&self.default, self.multiple) {
            (None, false) => SelectValue::Single(None),
            (None, true) => SelectValue::Multiple(Vec::new()),
            (Some(FieldDefault::One(v)), false) => {
                SelectValue::Single(Some(self.find_option(v)?.clone()))
            }
            (Some(FieldDefault::Many(values)), true) => SelectValue::Multiple(
                values
                    .iter()
                    .map(|v| self.find_option(v).cloned())
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            (Some(FieldDefault::One(_)), true) | (Some(FieldDefault::Many(_)), false) => {
                return Err(SelectError::ModeMismatch {
                    multiple: self.multiple,
                });
            }
        };

        // Run the same boundary checks the widget applies on every event.
        SelectProps::new(&self.options, self.multiple, &value)?;
        Ok(value)
    }

    fn find_option(&self, value: &OptionValue) -> Result<&SelectOption, SelectError> {
        self.options
            .iter()
            .find(|o| &o.value == value)
            .ok_or_else(|| SelectError::UnknownValue {
                value: value.to_string(),
            })
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FieldsFile {
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl FieldsFile {
    pub fn new(fields: Vec<FieldConfig>) -> Self {
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The built-in form used when no fields file exists yet.
    pub fn sample() -> Self {
        Self::new(vec![
            FieldConfig {
                name: "Language".to_string(),
                multiple: false,
                default: None,
                options: vec![
                    SelectOption::new("Rust", "rust"),
                    SelectOption::new("Go", "go"),
                    SelectOption::new("Zig", "zig"),
                    SelectOption::new("OCaml", "ocaml"),
                    SelectOption::new("Haskell", "haskell"),
                ],
            },
            FieldConfig {
                name: "Editions".to_string(),
                multiple: true,
                default: Some(FieldDefault::Many(vec![OptionValue::Number(2021)])),
                options: vec![
                    SelectOption::new("2015", 2015),
                    SelectOption::new("2018", 2018),
                    SelectOption::new("2021", 2021),
                    SelectOption::new("2024", 2024),
                ],
            },
            FieldConfig {
                name: "Targets".to_string(),
                multiple: true,
                default: None,
                options: vec![
                    SelectOption::new("x86_64 Linux", "x86_64-unknown-linux-gnu"),
                    SelectOption::new("aarch64 macOS", "aarch64-apple-darwin"),
                    SelectOption::new("x86_64 Windows", "x86_64-pc-windows-msvc"),
                    SelectOption::new("wasm32", "wasm32-unknown-unknown"),
                    SelectOption::new("RISC-V", "riscv64gc-unknown-linux-gnu"),
                    SelectOption::new("ARMv7", "armv7-unknown-linux-gnueabihf"),
                    SelectOption::new("Android", "aarch64-linux-android"),
                    SelectOption::new("iOS", "aarch64-apple-ios"),
                    SelectOption::new("FreeBSD", "x86_64-unknown-freebsd"),
                ],
            },
        ])
    }
}
