use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    bin_name = "tui-select",
    name = "tui-select",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal dropdown select widget with single and multiple selection",
    long_about = None,
    color = clap::ColorChoice::Always
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive select demo
    Ui(ConfigArgs),

    /// List the configured select fields and their options
    #[command(visible_alias = "ls")]
    List(ConfigArgs),

    /// Validate the fields file (duplicate options, bad defaults, mode mismatches)
    Check(ConfigArgs),

    /// Write a sample fields file
    Init {
        /// Where to write the file (defaults to the config directory)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Path to the fields file (defaults to the config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
