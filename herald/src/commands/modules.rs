use clap::Args;
use eyre::Result;
use herald_pipeline::{DiscoveryScope, StaticDiscovery, discover_modules};

#[derive(Args)]
pub struct ModulesCommand {}

impl ModulesCommand {
    /// List the modules a default run would execute.
    pub fn run(&self) -> Result<()> {
        let found = discover_modules(&StaticDiscovery::new(), &DiscoveryScope::default())?;

        for warning in &found.warnings {
            eprintln!("{warning}");
        }

        println!("Modules ({}):", found.modules.len());
        for module in &found.modules {
            println!("  - {}", module.name());
        }
        Ok(())
    }
}
