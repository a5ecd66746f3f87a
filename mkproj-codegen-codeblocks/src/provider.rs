use std::path::PathBuf;

use mkproj_codegen::{
    Artifact, Diagnostic, Output, Provider, Result, SourceFile, Workspace, builder::CodeBuilder,
    collect_files, normalize_library_name,
};
use mkproj_core::{BuildConfig, FileKind, IdentifierRegistry, Target, TargetId, join_path};
use tracing::debug;

use crate::xml::escape_attr;

/// Suffix of the top-level workspace file.
pub const WORKSPACE_EXTENSION: &str = ".workspace";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>"#;

/// Indentation of the `<Add .../>` lines inside `<Compiler>` and `<Linker>`.
const OPTION_LEVEL: usize = 5;

/// Emits a `<project>.workspace` plus one `<target>.cbp` per target.
#[derive(Debug, Default, Clone, Copy)]
pub struct CodeBlocksProvider;

impl CodeBlocksProvider {
    pub fn new() -> Self {
        Self
    }

    fn workspace_name(config: &BuildConfig) -> String {
        format!("{}{}", config.project_name, WORKSPACE_EXTENSION)
    }

    fn project_name(&self, target: &str) -> String {
        format!("{}{}", target, self.file_extension())
    }

    fn project_head(&self, target: &Target) -> CodeBuilder {
        // 1: console application, 2: static library
        let kind = if target.is_executable() { 1 } else { 2 };
        let name = escape_attr(&target.name);

        CodeBuilder::tab()
            .line(XML_DECLARATION)
            .line("<CodeBlocks_project_file>")
            .indent()
            .line(r#"<FileVersion major="1" minor="6" />"#)
            .line("<Project>")
            .indent()
            .line(&format!(r#"<Option title="{}" />"#, name))
            .line(r#"<Option pch_mode="2" />"#)
            .line(r#"<Option compiler="gcc" />"#)
            .line("<Build>")
            .indent()
            .line(r#"<Target title="default">"#)
            .indent()
            .line(&format!(
                r#"<Option output="{0}/{0}" prefix_auto="1" extension_auto="1" />"#,
                name
            ))
            .line(&format!(r#"<Option object_output="{}" />"#, name))
            .line(&format!(r#"<Option type="{}" />"#, kind))
            .line(r#"<Option compiler="gcc" />"#)
            .line("<Compiler>")
    }

    fn include_dirs(&self, config: &BuildConfig) -> CodeBuilder {
        let root = if config.file_prefix.is_empty() {
            ".".to_string()
        } else {
            join_path(&config.file_prefix, "")
        };

        CodeBuilder::tab()
            .at_level(OPTION_LEVEL)
            .line(&format!(r#"<Add directory="{}" />"#, escape_attr(&root)))
            .each(&config.include_dirs, |b, dir| {
                b.line(&format!(
                    r#"<Add directory="{}" />"#,
                    escape_attr(&join_path(&root, dir))
                ))
            })
            .when(config.libs_env.is_some(), |b| {
                let var = config.libs_env.as_deref().unwrap_or_default();
                b.line(&format!(r#"<Add directory="$({})/include" />"#, escape_attr(var)))
            })
            .dedent()
            .line("</Compiler>")
    }

    fn linker(
        &self,
        target: &Target,
        registry: &IdentifierRegistry,
        config: &BuildConfig,
    ) -> CodeBuilder {
        let mut libraries: Vec<String> = Vec::new();
        for name in config.libraries.iter().map(|l| normalize_library_name(l)) {
            if !libraries.contains(&name) {
                libraries.push(name);
            }
        }

        CodeBuilder::tab()
            .at_level(OPTION_LEVEL - 1)
            .block_with_close("<Linker>", "</Linker>", |b| {
                b.each(&libraries, |b, lib| {
                    b.line(&format!(r#"<Add library="{}" />"#, escape_attr(lib)))
                })
                .each(registry.others(&target.name), |b, (name, _)| {
                    b.line(&format!(r#"<Add library="{}" />"#, escape_attr(name)))
                })
                .when(config.libs_env.is_some(), |b| {
                    let var = config.libs_env.as_deref().unwrap_or_default();
                    b.line(&format!(r#"<Add directory="$({})/lib" />"#, escape_attr(var)))
                })
            })
    }

    fn units(&self, files: &[SourceFile]) -> CodeBuilder {
        let mut code = CodeBuilder::tab().at_level(2);
        for file in files {
            let path = escape_attr(&file.path);
            match file.kind {
                FileKind::Resource => {
                    code.push_line(&format!(r#"<Unit filename="{}">"#, path))
                        .push_indent()
                        .push_line(r#"<Option compilerVar="WINDRES" />"#)
                        .push_dedent()
                        .push_line("</Unit>");
                }
                FileKind::Assembly => {}
                FileKind::Source | FileKind::Other => {
                    code.push_line(&format!(r#"<Unit filename="{}" />"#, path));
                }
            }
        }
        code
    }

    fn project_tail(&self) -> CodeBuilder {
        CodeBuilder::tab()
            .at_level(2)
            .line("<Extensions>")
            .indent()
            .line("<code_completion />")
            .line("<debugger />")
            .dedent()
            .line("</Extensions>")
            .dedent()
            .line("</Project>")
            .dedent()
            .line("</CodeBlocks_project_file>")
    }
}

impl Provider for CodeBlocksProvider {
    fn name(&self) -> &'static str {
        "codeblocks"
    }

    fn file_extension(&self) -> &'static str {
        ".cbp"
    }

    fn supports_target_warnings(&self) -> bool {
        true
    }

    fn open_workspace(&self, output: &Output, config: &BuildConfig) -> Result<Workspace> {
        let mut workspace = Workspace::open(output, &Self::workspace_name(config))?;
        workspace.primary().emit(
            CodeBuilder::tab()
                .line(XML_DECLARATION)
                .line("<CodeBlocks_workspace_file>")
                .indent()
                .line(&format!(
                    r#"<Workspace title="{}">"#,
                    escape_attr(&config.description)
                )),
        )?;

        debug!(path = %workspace.primary().path().display(), "opened codeblocks workspace");
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
        let files = collect_files(target, config);
        for file in files.iter().filter(|f| f.kind == FileKind::Assembly) {
            workspace.push_diagnostic(
                Diagnostic::info(self.name(), format!("skipped assembly file {}", file.relative))
                    .at(format!("target.{}", target.name)),
            );
        }

        let mut project = workspace.create_artifact(&self.project_name(&target.name))?;
        project.emit(self.project_head(target))?;
        self.write_warnings(&config.warnings, &mut project)?;
        self.write_warnings(&target.warnings, &mut project)?;
        self.write_defines(&config.defines, &mut project)?;
        project.emit(self.include_dirs(config))?;
        if target.is_executable() {
            project.emit(self.linker(target, registry, config))?;
        }
        project.emit(
            CodeBuilder::tab()
                .at_level(3)
                .line("</Target>")
                .dedent()
                .line("</Build>"),
        )?;
        project.emit(self.units(&files))?;
        project.emit(self.project_tail())?;

        debug!(path = %project.path().display(), files = files.len(), "wrote codeblocks project");
        workspace.finish_artifact(project)?;
        Ok(id)
    }

    fn close_workspace(
        &self,
        mut workspace: Workspace,
        registry: &IdentifierRegistry,
        _config: &BuildConfig,
    ) -> Result<Vec<PathBuf>> {
        let executable = workspace.executable().map(str::to_string);
        let mut code = CodeBuilder::tab().at_level(2);

        if let Some(exe) = &executable {
            code.push_line(&format!(
                r#"<Project filename="{}" active="1">"#,
                escape_attr(&self.project_name(exe))
            ))
            .push_indent();
            for (name, _) in registry.others(exe) {
                code.push_line(&format!(
                    r#"<Depends filename="{}" />"#,
                    escape_attr(&self.project_name(name))
                ));
            }
            code.push_dedent().push_line("</Project>");
        }

        for (name, _) in registry.lookup_all() {
            if Some(name) == executable.as_deref() {
                continue;
            }
            code.push_line(&format!(
                r#"<Project filename="{}" />"#,
                escape_attr(&self.project_name(name))
            ));
        }

        code.push_dedent()
            .push_line("</Workspace>")
            .push_dedent()
            .push_line("</CodeBlocks_workspace_file>");

        workspace.primary().emit(code)?;
        workspace.finish()
    }

    fn write_warnings(&self, warnings: &[String], artifact: &mut Artifact) -> Result<()> {
        artifact.emit(CodeBuilder::tab().at_level(OPTION_LEVEL).each(warnings, |b, w| {
            b.line(&format!(r#"<Add option="{}" />"#, escape_attr(w)))
        }))
    }

    fn write_defines(&self, defines: &[String], artifact: &mut Artifact) -> Result<()> {
        artifact.emit(CodeBuilder::tab().at_level(OPTION_LEVEL).each(defines, |b, d| {
            b.line(&format!(r#"<Add option="-D{}" />"#, escape_attr(d)))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_dirs_relative_to_prefix() {
        let config = BuildConfig {
            file_prefix: "..\\..".to_string(),
            include_dirs: vec!["engines".to_string()],
            libs_env: Some("SCUMMVM_LIBS".to_string()),
            ..BuildConfig::new("scummvm")
        };
        let code = CodeBlocksProvider.include_dirs(&config).build();
        assert_eq!(
            code,
            "\t\t\t\t\t<Add directory=\"../..\" />\n\
             \t\t\t\t\t<Add directory=\"../../engines\" />\n\
             \t\t\t\t\t<Add directory=\"$(SCUMMVM_LIBS)/include\" />\n\
             \t\t\t\t</Compiler>\n"
        );
    }

    #[test]
    fn test_units_by_kind() {
        let files = vec![
            SourceFile {
                path: "../a.cpp".to_string(),
                relative: "a.cpp".to_string(),
                kind: FileKind::Source,
            },
            SourceFile {
                path: "../icon.rc".to_string(),
                relative: "icon.rc".to_string(),
                kind: FileKind::Resource,
            },
            SourceFile {
                path: "../scale.asm".to_string(),
                relative: "scale.asm".to_string(),
                kind: FileKind::Assembly,
            },
        ];
        let code = CodeBlocksProvider.units(&files).build();
        assert_eq!(
            code,
            "\t\t<Unit filename=\"../a.cpp\" />\n\
             \t\t<Unit filename=\"../icon.rc\">\n\
             \t\t\t<Option compilerVar=\"WINDRES\" />\n\
             \t\t</Unit>\n"
        );
    }
}
