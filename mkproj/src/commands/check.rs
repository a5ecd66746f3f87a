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
pub struct CheckCommand {
    /// Path to mkproj.toml (defaults to ./mkproj.toml)
    #[arg(short, long, default_value = "mkproj.toml")]
    pub config: PathBuf,

    /// Output directory the file prefix is computed for
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = ProjectToml::open(&self.config).unwrap_or_exit();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| file.dir().to_path_buf());

        let report = ops::check(&file, &output_dir)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
