use crate::cli::Cli;
use crate::cli::Commands::{Check, Init, List, Ui};

mod check;
mod init;
mod list;
mod ui;

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Ui(args) => ui::handle(args),
        List(args) => list::handle(args),
        Check(args) => check::handle(args),
        Init { config, force } => init::handle(config, force),
    }
}
