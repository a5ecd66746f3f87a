//! Core operations.
//!
//! This module contains the business logic for mkproj commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;
pub mod load;
pub mod scan;

pub use check::check;
pub use generate::generate;
pub use list::list;
pub use load::load;
pub use scan::scan_module;
