//! Building blocks for reporting what a scheduled task was started with.
//!
//! A batch scheduler fans a job out over many nodes and processes. Each task
//! receives its placement through environment variables and its work
//! description through a `job.json` dropped in its working directory. This
//! crate loads both and renders them, so that a smoke-test task can show
//! the scheduler propagated everything correctly.

pub mod env;
pub mod error;
pub mod job;
pub mod report;

pub use env::{EnvSnapshot, EnvSource, Param, ProcessEnv};
pub use error::ReportError;
pub use job::JobConfig;
pub use report::{JobFormat, Reporter};
