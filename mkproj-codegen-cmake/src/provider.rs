use mkproj_codegen::{
    Artifact, Diagnostic, Output, Provider, Result, Workspace, builder::CodeBuilder, collect_files,
};
use mkproj_core::{BuildConfig, IdentifierRegistry, Target, TargetId, TargetKind};
use tracing::debug;

use crate::packages::partition;

/// Name of the single artifact every target is appended to.
pub const CMAKE_LISTS: &str = "CMakeLists.txt";

/// Emits one `CMakeLists.txt` holding every target.
#[derive(Debug, Default, Clone, Copy)]
pub struct CMakeProvider;

impl CMakeProvider {
    pub fn new() -> Self {
        Self
    }

    fn header(&self, config: &BuildConfig) -> CodeBuilder {
        let (packages, _) = partition(&config.libraries);
        let source_dir = format!("${{{}_SOURCE_DIR}}", config.project_name);

        let mut include_line = format!("include_directories({}", source_dir);
        for dir in &config.include_dirs {
            include_line.push_str(&format!(" {}/{}", source_dir, dir));
        }

        CodeBuilder::tab()
            .line(&format!(
                "cmake_minimum_required(VERSION {})",
                config.min_version
            ))
            .line(&format!("project({})", config.project_name))
            .blank()
            .each(&packages, |b, p| b.line(&format!("Include(Find{})", p.module)))
            .each(&packages, |b, p| {
                b.line(&format!("Find_Package({} REQUIRED)", p.module))
            })
            .line(&include_line)
            .when(config.libs_env.is_some(), |b| {
                let var = config.libs_env.as_deref().unwrap_or_default();
                b.line(&format!("$ENV{{{}}}/include", var))
            })
            .each(&packages, |b, p| b.line(&format!("${{{}}}", p.include_var)))
            .line(")")
            .blank()
    }

    fn link_block(
        &self,
        target: &Target,
        registry: &IdentifierRegistry,
        config: &BuildConfig,
    ) -> CodeBuilder {
        let (packages, others) = partition(&config.libraries);

        CodeBuilder::tab().block_with_close(
            &format!("target_link_libraries({}", target.name),
            ")",
            |b| {
                b.each(&packages, |b, p| b.line(&format!("${{{}}}", p.library_var)))
                    .each(&others, |b, lib| b.line(lib))
                    .each(registry.others(&target.name), |b, (name, _)| b.line(name))
            },
        )
    }
}

impl Provider for CMakeProvider {
    fn name(&self) -> &'static str {
        "cmake"
    }

    fn file_extension(&self) -> &'static str {
        ".txt"
    }

    fn open_workspace(&self, output: &Output, config: &BuildConfig) -> Result<Workspace> {
        let mut workspace = Workspace::open(output, CMAKE_LISTS)?;
        let artifact = workspace.primary();

        artifact.emit(self.header(config))?;
        self.write_warnings(&config.warnings, artifact)?;
        self.write_defines(&config.defines, artifact)?;

        debug!(path = %artifact.path().display(), "opened cmake workspace");
        Ok(workspace)
    }

    fn add_target(
        &self,
        workspace: &mut Workspace,
        target: &Target,
        registry: &mut IdentifierRegistry,
        config: &BuildConfig,
    ) -> Result<TargetId> {
        let id = workspace.begin_target(target, registry);
        let command = match target.kind {
            TargetKind::Executable => "add_executable",
            TargetKind::Library => "add_library",
        };

        let mut code = CodeBuilder::tab();
        code.push_line(&format!("{}({}", command, target.name))
            .push_indent();
        for file in collect_files(target, config) {
            if file.is_compiled() {
                code.push_line(&file.path);
                continue;
            }
            workspace.push_diagnostic(
                Diagnostic::info(
                    self.name(),
                    format!("skipped {} file {}", file.kind, file.relative),
                )
                .at(format!("target.{}", target.name)),
            );
        }
        code.push_dedent().push_line(")");
        workspace.primary().emit(code)?;

        if target.is_executable() {
            workspace.primary().emit(self.link_block(target, registry, config))?;
        }
        Ok(id)
    }

    fn write_warnings(&self, warnings: &[String], artifact: &mut Artifact) -> Result<()> {
        artifact.emit(CodeBuilder::tab().block_with_close("add_definitions(", ")", |b| {
            b.each(warnings, |b, w| b.line(w))
        }))
    }

    fn write_defines(&self, defines: &[String], artifact: &mut Artifact) -> Result<()> {
        artifact.emit(CodeBuilder::tab().block_with_close("add_definitions(", ")", |b| {
            b.each(defines, |b, d| b.line(&format!("-D{}", d)))
        }))
    }
}

#[cfg(test)]
mod tests {
    use mkproj_core::Version;

    use super::*;

    fn config() -> BuildConfig {
        BuildConfig {
            libraries: vec!["sdl".into(), "freetype".into(), "zlib".into(), "GL".into()],
            include_dirs: vec!["engines".into()],
            libs_env: Some("SCUMMVM_LIBS".into()),
            min_version: Version::new(3, 2),
            ..BuildConfig::new("scummvm")
        }
    }

    #[test]
    fn test_header_matches_find_package_layout() {
        let header = CMakeProvider.header(&config()).build();
        assert_eq!(
            header,
            "cmake_minimum_required(VERSION 3.2)\n\
             project(scummvm)\n\
             \n\
             Include(FindSDL)\n\
             Include(FindFreetype)\n\
             Include(FindZLIB)\n\
             Find_Package(SDL REQUIRED)\n\
             Find_Package(Freetype REQUIRED)\n\
             Find_Package(ZLIB REQUIRED)\n\
             include_directories(${scummvm_SOURCE_DIR} ${scummvm_SOURCE_DIR}/engines\n\
             $ENV{SCUMMVM_LIBS}/include\n\
             ${SDL_INCLUDE_DIR}\n\
             ${FREETYPE_INCLUDE_DIRS}\n\
             ${ZLIB_INCLUDE_DIRS}\n\
             )\n\
             \n"
        );
    }

    #[test]
    fn test_header_without_packages() {
        let config = BuildConfig::new("demo");
        let header = CMakeProvider.header(&config).build();
        assert!(header.contains("include_directories(${demo_SOURCE_DIR}\n)\n"));
        assert!(!header.contains("Find_Package"));
        assert!(!header.contains("$ENV"));
    }

    #[test]
    fn test_header_names_come_from_project_name() {
        let config = BuildConfig {
            description: "ScummVM & friends".to_string(),
            ..BuildConfig::new("scummvm")
        };
        let header = CMakeProvider.header(&config).build();
        assert!(header.contains("project(scummvm)\n"));
        assert!(header.contains("include_directories(${scummvm_SOURCE_DIR}\n"));
        assert!(!header.contains("friends"));
    }

    #[test]
    fn test_empty_blocks_still_written() {
        let output = Output::preview();
        let mut artifact = output.create("x.txt").unwrap();
        CMakeProvider.write_warnings(&[], &mut artifact).unwrap();
        artifact.finish().unwrap();
        assert_eq!(output.preview_files()[0].content, "add_definitions(\n)\n");
    }
}
