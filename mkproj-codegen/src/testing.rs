//! Test fixtures for providers.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use mkproj_core::{BuildConfig, FileNode, Target, TargetKind};

/// A single executable module with two sources and a resource file,
/// the `USE_ZLIB` define and the `-Wall` warning.
pub fn demo() -> (BuildConfig, Vec<Target>) {
    let config = BuildConfig {
        file_prefix: "..".to_string(),
        defines: vec!["USE_ZLIB".to_string()],
        warnings: vec!["-Wall".to_string()],
        ..BuildConfig::new("demo")
    };

    let tree = FileNode::dir(
        "demo",
        [
            FileNode::file("a.cpp"),
            FileNode::file("b.cpp"),
            FileNode::file("icon.rc"),
        ],
    );
    let targets = vec![Target::new("demo", TargetKind::Executable, "", tree)];

    (config, targets)
}

/// An executable `main` followed by a library `enginelib`.
pub fn main_with_engine() -> (BuildConfig, Vec<Target>) {
    let config = BuildConfig {
        file_prefix: "..".to_string(),
        ..BuildConfig::new("main")
    };

    let main = Target::new(
        "main",
        TargetKind::Executable,
        "",
        FileNode::dir("main", [FileNode::file("main.cpp")]),
    );
    let engine = Target::new(
        "enginelib",
        TargetKind::Library,
        "engines/engine",
        FileNode::dir(
            "engine",
            [
                FileNode::file("engine.cpp"),
                FileNode::file("engine.h"),
                FileNode::dir("gfx", [FileNode::file("draw.cpp")]),
            ],
        ),
    );

    (config, vec![main, engine])
}
