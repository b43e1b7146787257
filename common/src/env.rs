//! Per-task identifiers handed to a worker process by the scheduler and
//! the submitting harness.
//!
//! Everything is read once, through an [`EnvSource`], into an
//! [`EnvSnapshot`]. The reporter only ever sees the snapshot, so tests can
//! inject any environment they like.

use std::collections::HashMap;
use std::env::VarError;

use serde::Serialize;
use tracing::debug;

use crate::error::{ReportError, Result};

/// Scheduler-assigned node index within the allocation.
pub const NODE_ID_VAR: &str = "SLURM_NODEID";

/// Scheduler-assigned process index within the allocation.
pub const PROC_ID_VAR: &str = "SLURM_PROCID";

/// Identifier the submitting harness gives the whole job.
pub const JOB_ID_VAR: &str = "job_id";

/// Parameter variable set by the harness for each task variant.
pub const DEFAULT_PARAM_VAR: &str = "param_a";

/// Anything environment variables can be looked up in.
pub trait EnvSource {
    fn var(&self, name: &str) -> std::result::Result<String, VarError>;
}

/// The environment of the running process.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> std::result::Result<String, VarError> {
        std::env::var(name)
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> std::result::Result<String, VarError> {
        self.get(name).cloned().ok_or(VarError::NotPresent)
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, name: &str) -> std::result::Result<String, VarError> {
        self.get(name)
            .map(|value| value.to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// A named job parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub value: String,
}

/// The identifiers a task was started with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnvSnapshot {
    pub node_id: String,
    pub proc_id: String,
    pub job_id: String,

    /// `None` when parameter reporting is disabled.
    pub param: Option<Param>,
}

impl EnvSnapshot {
    /// Read the identifiers from `env`, plus the parameter named `param`
    /// if one is requested.
    ///
    /// Variables are looked up in report order and the first one that is
    /// absent is the one reported in the error.
    pub fn capture<E: EnvSource + ?Sized>(env: &E, param: Option<&str>) -> Result<Self> {
        let node_id = require(env, NODE_ID_VAR)?;
        let proc_id = require(env, PROC_ID_VAR)?;
        let job_id = require(env, JOB_ID_VAR)?;
        let param = match param {
            Some(name) => Some(Param {
                name: name.to_string(),
                value: require(env, name)?,
            }),
            None => None,
        };

        let snapshot = Self {
            node_id,
            proc_id,
            job_id,
            param,
        };
        match serde_json::to_string(&snapshot) {
            Ok(json) => debug!(snapshot = %json, "Captured task environment"),
            Err(e) => debug!("Captured task environment (unserializable: {})", e),
        }
        Ok(snapshot)
    }
}

fn require<E: EnvSource + ?Sized>(env: &E, name: &str) -> Result<String> {
    env.var(name).map_err(|e| match e {
        VarError::NotPresent => ReportError::MissingEnvironmentVariable {
            name: name.to_string(),
        },
        VarError::NotUnicode(_) => ReportError::InvalidEnvironmentVariable {
            name: name.to_string(),
        },
    })
}
