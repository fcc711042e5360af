//! opsworks-tf - export AWS OpsWorks applications as Terraform resources

use std::io;

use clap::{CommandFactory, Parser};
use colored::Colorize;

mod cli;
mod client;
mod config;
mod discovery;
mod encode;
mod error;
mod models;
mod output;
mod pipeline;
mod resource;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Export { format, output } => {
            cli::export::run(&opts, format, output.as_deref()).await
        }
        Commands::Stacks { format } => cli::stacks::list(&opts, format).await,
        Commands::Apps { stack, format } => cli::apps::list(&opts, stack.as_deref(), format).await,
        Commands::Version => {
            println!("opsworks-tf version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "opsworks-tf", &mut io::stdout());
            Ok(())
        }
    }
}
