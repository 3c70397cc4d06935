use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl CheckCommand {
    /// Run the check command. Exits with status 1 when any unit is stale.
    pub fn run(&self) -> Result<()> {
        let project = self.project.load()?;

        let report = ops::check(&project);
        report.render(&mut TerminalOutput::new());

        if !report.is_current() {
            std::process::exit(1);
        }
        Ok(())
    }
}
