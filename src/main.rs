use tui_select::cli::Cli;
use tui_select::handles::run;
use tui_select::utils::logging;

fn main() {
    let cli = Cli::parse_args();
    if let Err(e) = logging::init() {
        eprintln!("logging disabled: {e}");
    }
    if let Err(e) = run(cli) {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
