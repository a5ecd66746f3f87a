use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mkproj_manifest::{Backend, ProjectToml};

use super::UnwrapOrExit;
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to mkproj.toml (defaults to ./mkproj.toml)
    #[arg(short, long, default_value = "mkproj.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to the manifest's directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Backend to generate for (defaults to the manifest's backend)
    #[arg(short, long)]
    pub backend: Option<Backend>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = ProjectToml::open(&self.config).unwrap_or_exit();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| file.dir().to_path_buf());

        let report = ops::generate(
            &file,
            GenerateOptions {
                output_dir: &output_dir,
                backend: self.backend,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
