#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod models;
pub mod report;
pub mod rewrite;
pub mod runner;
pub mod scan;

pub use models::{FileKind, RunError, RunPhase, RunSummary};
pub use report::{ConsoleReporter, RunObserver};
pub use rewrite::CdnRewriter;
pub use runner::scan_and_fix;
