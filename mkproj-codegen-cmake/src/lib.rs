//! CMake backend for mkproj.
//!
//! Every target lands in a single `CMakeLists.txt`: a header locating the
//! known external packages, the global warning and define blocks, one
//! `add_executable`/`add_library` per target and a `target_link_libraries`
//! block for the executable.

mod packages;
mod provider;

pub use mkproj_codegen::{GenerationReport, Output, PreviewFile, Provider, generate};
pub use packages::{Package, find_package};
pub use provider::{CMAKE_LISTS, CMakeProvider};
