mod cli;
mod color;
mod commands;
mod config;
mod integrations;
mod launcher;
mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::env::CompleteEnv;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Handle dynamic completion via COMPLETE environment variable
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    // Resolve color mode from CLI flag and environment variables
    let color_mode = color::ColorMode::resolve(cli.color);

    match cli.command {
        Commands::Add {
            name,
            path,
            args,
            fork,
            force,
        } => commands::add::cmd_add(&name, &path, &args, fork, force, color_mode),
        Commands::List => commands::list::cmd_list(color_mode),
        Commands::Get { name } => commands::get::cmd_get(&name),
        Commands::Rem { names } => commands::rm::cmd_rm(&names, color_mode),
        Commands::Install { check } => commands::install::cmd_install(check, color_mode),
        Commands::Completion { shell } => commands::completion::cmd_completion(&shell),
    }
}
