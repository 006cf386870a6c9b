//! Paperboard command line: the web server plus a few inspection commands.

use clap::Parser;

mod backend;
mod cli;
mod commands;
mod output;
mod session;
mod templates;

use cli::{Cli, Commands, ServeArgs};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve(args)) => commands::serve::run(&args).await,
        Some(Commands::Health(args)) => commands::health::run(&args).await,
        Some(Commands::Info(args)) => commands::info::run(&args).await,
        Some(Commands::Papers(args)) => commands::papers::run(&args).await,
        None => commands::serve::run(&ServeArgs::default()).await,
    }
}
