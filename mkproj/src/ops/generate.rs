//! Generate operation - project files from a manifest.

use std::path::Path;

use eyre::{Context, Result};
use mkproj_codegen::Output;
use mkproj_manifest::{Backend, ProjectToml};

use super::load;
use crate::{
    backend,
    reports::{GenerateReport, GenerationResult},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory receiving the artifacts.
    pub output_dir: &'a Path,
    /// Backend override; the manifest's choice otherwise.
    pub backend: Option<Backend>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(file: &ProjectToml, opts: GenerateOptions) -> Result<GenerateReport> {
    let project = load(file, opts.output_dir)?;
    let backend = opts.backend.unwrap_or(file.manifest().project.backend);
    let provider = backend::provider(backend);

    let output = if opts.dry_run {
        Output::preview()
    } else {
        Output::disk(&project.config.output_dir)
    };

    let report = mkproj_codegen::generate(provider.as_ref(), &project.config, &project.targets, &output)
        .wrap_err("Failed to generate project files")?;

    let result = if opts.dry_run {
        GenerationResult::Preview(output.preview_files())
    } else {
        GenerationResult::Written(report.artifacts)
    };

    Ok(GenerateReport {
        project: project.config.description.clone(),
        backend: report.provider,
        targets: report
            .targets
            .into_iter()
            .map(|(name, id)| (name, id.to_string()))
            .collect(),
        diagnostics: report.diagnostics,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use tempfile::TempDir;

    use super::*;

    fn project(backend: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("src/engines/sky")).unwrap();
        fs::write(root.join("src/main.cpp"), "").unwrap();
        fs::write(root.join("src/icon.rc"), "").unwrap();
        fs::write(root.join("src/engines/sky/sky.cpp"), "").unwrap();
        fs::write(
            root.join("mkproj.toml"),
            format!(
                r#"
[project]
name = "demo"
source-root = "src"
backend = "{backend}"
warnings = ["-Wall"]

[[target]]
name = "demo"
kind = "executable"
exclude = ["engines"]

[[target]]
name = "sky"
kind = "library"
path = "engines/sky"
warnings = ["-Wno-unused"]
"#
            ),
        )
        .unwrap();
        temp
    }

    #[test]
    fn test_generate_cmake_to_disk() {
        let temp = project("cmake");
        let file = ProjectToml::open(temp.path().join("mkproj.toml")).unwrap();
        let out_dir = temp.path().join("build");

        let report = generate(
            &file,
            GenerateOptions {
                output_dir: &out_dir,
                backend: None,
                dry_run: false,
            },
        )
        .unwrap();

        assert_eq!(report.backend, "cmake");
        let names: Vec<_> = report.targets.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["demo", "sky"]);
        assert!(report.diagnostics.iter().any(|d| d.location.as_deref() == Some("target.sky")));

        let lists = fs::read_to_string(out_dir.join("CMakeLists.txt")).unwrap();
        assert!(lists.contains("add_executable(demo\n\t../src/main.cpp\n)"));
        assert!(lists.contains("add_library(sky\n\t../src/engines/sky/sky.cpp\n)"));
    }

    #[test]
    fn test_backend_override_and_dry_run() {
        let temp = project("cmake");
        let file = ProjectToml::open(temp.path().join("mkproj.toml")).unwrap();
        let out_dir = temp.path().join("build");

        let report = generate(
            &file,
            GenerateOptions {
                output_dir: &out_dir,
                backend: Some(Backend::CodeBlocks),
                dry_run: true,
            },
        )
        .unwrap();

        assert_eq!(report.backend, "codeblocks");
        match report.result {
            GenerationResult::Preview(files) => {
                let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
                assert!(paths.contains(&"demo.workspace"));
                assert!(paths.contains(&"sky.cbp"));
            }
            other => panic!("expected preview, got {other:?}"),
        }
        assert!(!out_dir.exists());
    }

    #[test]
    fn test_rerun_in_manifest_dir_is_byte_identical() {
        for backend in ["cmake", "codeblocks"] {
            let temp = TempDir::new().unwrap();
            let root = temp.path();
            fs::write(root.join("main.cpp"), "").unwrap();
            fs::write(
                root.join("mkproj.toml"),
                format!(
                    "[project]\nname = \"demo\"\nbackend = \"{backend}\"\n\n\
                     [[target]]\nname = \"demo\"\nkind = \"executable\"\n"
                ),
            )
            .unwrap();
            let file = ProjectToml::open(root.join("mkproj.toml")).unwrap();

            let run = || -> Vec<(PathBuf, Vec<u8>)> {
                let report = generate(
                    &file,
                    GenerateOptions {
                        output_dir: root,
                        backend: None,
                        dry_run: false,
                    },
                )
                .unwrap();
                match report.result {
                    GenerationResult::Written(paths) => paths
                        .into_iter()
                        .map(|p| {
                            let bytes = fs::read(&p).unwrap();
                            (p, bytes)
                        })
                        .collect(),
                    other => panic!("expected written files, got {other:?}"),
                }
            };

            let first = run();
            let second = run();
            assert_eq!(first, second, "{backend} output changed on rerun");

            let content: String = second
                .iter()
                .map(|(_, bytes)| String::from_utf8_lossy(bytes).into_owned())
                .collect();
            assert!(content.contains("main.cpp"));
            for generated in ["mkproj.toml", "CMakeLists.txt", "demo.cbp", "demo.workspace"] {
                assert!(!content.contains(&format!("\t{generated}\n")), "{backend} listed {generated}");
                assert!(
                    !content.contains(&format!("<Unit filename=\"{generated}\"")),
                    "{backend} listed {generated}"
                );
            }
        }
    }
}
