//! Text building blocks for emitted build files.

mod code_builder;

pub use code_builder::CodeBuilder;
