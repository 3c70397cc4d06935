mod check;
mod clean;
mod completions;
mod generate;
mod info;
mod project;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use clean::CleanCommand;
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use info::InfoCommand;
use tracing_subscriber::EnvFilter;

pub(crate) use project::ProjectArgs;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "DTSGEN_LOG";

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for dtsgen_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "dtsgen")]
#[command(version)]
#[command(about = "Generate TypeScript declaration files from an object-oriented type model")]
pub(crate) struct Cli {
    /// Log traversal decisions (same as DTSGEN_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn init_tracing(&self) {
        let filter = if self.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate declaration files for source units
    Generate(GenerateCommand),

    /// Report which units have stale declarations, without writing
    Check(CheckCommand),

    /// Remove generated declaration files
    Clean(CleanCommand),

    /// Show project and configuration information
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
