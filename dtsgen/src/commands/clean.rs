use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops::{self, clean::CleanOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Show what would be deleted without deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let project = self.project.load()?;

        let report = ops::clean(
            &project,
            CleanOptions {
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
