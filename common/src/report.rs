use std::io::Write;

use crate::env::{EnvSnapshot, JOB_ID_VAR, NODE_ID_VAR, PROC_ID_VAR};
use crate::error::Result;
use crate::job::JobConfig;

/// Printed before any work is done.
pub const BANNER: &str = "running main...";

/// Label for the configuration object.
pub const JOB_LABEL: &str = "job";

/// How the configuration object is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JobFormat {
    /// A single line.
    #[default]
    Compact,
    /// Indented over several lines.
    Pretty,
}

/// Writes the label/value lines of a task report.
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn banner(&mut self) -> Result<()> {
        writeln!(self.out, "{}", BANNER)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Announce the configuration file about to be loaded.
    pub fn config_path(&mut self, path: &str) -> Result<()> {
        writeln!(self.out, "{}", path)?;
        Ok(())
    }

    pub fn field(&mut self, label: &str, value: &str) -> Result<()> {
        writeln!(self.out, "{}", label)?;
        writeln!(self.out, "{}", value)?;
        Ok(())
    }

    /// Identifiers in fixed order: node, process, job, then the parameter
    /// if one was captured.
    pub fn environment(&mut self, env: &EnvSnapshot) -> Result<()> {
        self.field(NODE_ID_VAR, &env.node_id)?;
        self.field(PROC_ID_VAR, &env.proc_id)?;
        self.field(JOB_ID_VAR, &env.job_id)?;
        if let Some(param) = &env.param {
            self.field(&param.name, &param.value)?;
        }
        Ok(())
    }

    pub fn job(&mut self, job: &JobConfig, format: JobFormat) -> Result<()> {
        let rendered = match format {
            JobFormat::Compact => job.to_string(),
            JobFormat::Pretty => job.to_pretty_string(),
        };
        self.field(JOB_LABEL, &rendered)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Consumes the reporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
