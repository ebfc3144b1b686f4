use clap::Parser;
use plank::cli::commands::Cli;
use plank::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.clone();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = plank::tui::run(config_path.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
