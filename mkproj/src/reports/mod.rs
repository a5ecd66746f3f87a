//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod list;
mod output;

pub use check::{CheckReport, TargetSummary};
pub use generate::{GenerateReport, GenerationResult};
pub use list::{ListReport, TargetFiles};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
