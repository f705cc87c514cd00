//! Report data structures for commands.
//!
//! Operations build reports; commands render them as text or JSON.

mod check;
mod generate;
mod output;

pub use check::{CheckReport, ModelSummary};
pub use generate::{GenerateReport, Outcome, PreviewFile};
pub use output::{Report, TerminalOutput};
