use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Preview generated declarations without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Regenerate every unit, even when its source is unchanged
    #[arg(long)]
    pub no_incremental: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let project = self.project.load()?;

        let report = ops::generate(
            &project,
            GenerateOptions {
                dry_run: self.dry_run,
                incremental: !self.no_incremental,
            },
        );
        report.render(&mut TerminalOutput::new());

        match report.failure_count() {
            0 => Ok(()),
            n => Err(eyre::eyre!("{} unit(s) could not be generated", n)),
        }
    }
}
