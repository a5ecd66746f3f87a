use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mkproj_manifest::ProjectToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to mkproj.toml (defaults to ./mkproj.toml)
    #[arg(short, long, default_value = "mkproj.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = ProjectToml::open(&self.config).unwrap_or_exit();
        let report = ops::list(&file, file.dir())?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
