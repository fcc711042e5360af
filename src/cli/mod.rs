//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod apps;
pub mod args;
pub mod context;
pub mod export;
mod progress;
pub mod stacks;

pub use args::{ExportFormat, GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// opsworks-tf - export AWS OpsWorks applications as Terraform resources
#[derive(Parser, Debug)]
#[command(name = "opsworks-tf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Override config file location
    #[arg(long, global = true, env = "OPSWORKS_TF_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// OpsWorks endpoint URL (e.g. a signing proxy or local emulator)
    #[arg(long, global = true, env = "OPSWORKS_TF_ENDPOINT", hide_env = true)]
    pub endpoint: Option<String>,

    /// AWS region used to build the default endpoint
    #[arg(long, global = true, env = "AWS_REGION", hide_env = true)]
    pub region: Option<String>,

    /// Maximum concurrent app listings (1 = sequential)
    #[arg(long, global = true, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: Option<u16>,

    /// Enable debug logging
    #[arg(long, global = true, env = "OPSWORKS_TF_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export every application as an aws_opsworks_application resource
    Export {
        /// Resource block syntax
        #[arg(long, value_enum, default_value_t = ExportFormat::Hcl)]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<String>,
    },

    /// List OpsWorks stacks
    Stacks {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List applications in one stack or across all stacks
    Apps {
        /// Only list apps in this stack
        #[arg(long)]
        stack: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   opsworks-tf completion bash > /etc/bash_completion.d/opsworks-tf
  zsh:    opsworks-tf completion zsh > \"${fpath[1]}/_opsworks-tf\"
  fish:   opsworks-tf completion fish > ~/.config/fish/completions/opsworks-tf.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
