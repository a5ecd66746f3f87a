//! Backend dispatch.
//!
//! Maps the manifest's backend choice onto a provider.

use mkproj_codegen::Provider;
use mkproj_codegen_cmake::CMakeProvider;
use mkproj_codegen_codeblocks::CodeBlocksProvider;
use mkproj_manifest::Backend;

/// Create the provider for the given backend.
pub fn provider(backend: Backend) -> Box<dyn Provider> {
    match backend {
        Backend::CMake => Box::new(CMakeProvider),
        Backend::CodeBlocks => Box::new(CodeBlocksProvider),
    }
}
