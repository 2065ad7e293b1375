//! Byline CLI - contributor reports from git history.

use clap::Parser;

mod commands;
mod output;

use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    output::set_quiet(cli.quiet);

    let result = match cli.command {
        Commands::Report(args) => commands::report::run(&args),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
