mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use commands::{handle_export_command, handle_inventory_command, handle_parse_command};

use cisco_clerk::config::ClerkConfig;
use cisco_clerk::logging::init_logging;
use cisco_clerk::output::print_error;

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClerkConfig::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Inventory { directory, format } => {
            handle_inventory_command(directory, format.as_deref(), &config)
        }
        Commands::Parse { file, format } => handle_parse_command(file, format.as_deref(), &config),
        Commands::Export {
            directory,
            output_dir,
        } => handle_export_command(directory, output_dir.as_deref(), &config),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
