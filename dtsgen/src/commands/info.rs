use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let project = self.project.load()?;

        let report = ops::info(&project);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
