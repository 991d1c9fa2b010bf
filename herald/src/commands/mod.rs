mod completions;
mod modules;
mod run;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use modules::ModulesCommand;
use run::RunCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for herald_config::Result<T> {
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
#[command(name = "herald")]
#[command(version)]
#[command(about = "Generate and package target-platform deliverables from a service description")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Run(cmd) => cmd.run(),
            Commands::Modules(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline over a set of service description sources
    Run(RunCommand),

    /// List the modules available to a run
    Modules(ModulesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
