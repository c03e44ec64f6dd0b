use crate::config::Field;
use crate::config::models::{FieldConfig, SelectOption};
use colored::*;

pub fn show_fields(fields: &[Field]) {
    if fields.is_empty() {
        return;
    }

    eprintln!("{}", "Fields:".yellow());
    let mut fields_iter = fields.iter().peekable();
    while let Some(field) = fields_iter.next() {
        let is_last_field = fields_iter.peek().is_none();
        let branch = if is_last_field { "└──" } else { "├──" };
        let mode = if field.config.multiple {
            "multiple"
        } else {
            "single"
        };
        eprintln!("{branch} {} {}", field.config.name.cyan(), format!("({mode})").dimmed());

        let indent = if is_last_field { "    " } else { "│   " };
        show_options(&field.config, indent, field.initial.selected());
    }
}

fn show_options(field: &FieldConfig, indent: &str, selected: &[SelectOption]) {
    let mut options_iter = field.options.iter().peekable();
    while let Some(option) = options_iter.next() {
        let branch = if options_iter.peek().is_none() {
            "└──"
        } else {
            "├──"
        };
        let label = option_label(option, selected);
        eprintln!(
            "{indent}{branch} {label} {}",
            format!("= {}", option.value).dimmed()
        );
    }
}

// Options are matched whole: two options may share a label.
fn option_label(option: &SelectOption, selected: &[SelectOption]) -> ColoredString {
    if selected.contains(option) {
        format!("{} ✓", option.label).green().bold()
    } else {
        option.label.normal()
    }
}

pub fn show_success(message: &str) {
    eprintln!("{}", format!("✔ {message}").green());
}

pub fn show_error(message: &str) {
    eprintln!("{}", format!("✗ {message}").red());
}

pub fn show_warning(message: &str) {
    eprintln!("{}", format!("⚠ {message}").yellow());
}

pub fn show_info(message: &str) {
    eprintln!("{}", format!("ℹ {message}").blue());
}
