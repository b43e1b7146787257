use std::fmt;
use std::fmt::Formatter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{ReportError, Result};

/// Where the submitting harness drops the job description for each task.
pub const DEFAULT_JOB_PATH: &str = "./job.json";

/// The job description written by the submitting harness.
///
/// No schema is enforced: keys and value types are whatever the harness
/// produced. Object keys keep the order they had in the file, and numbers
/// keep the exact text they were written with.
#[derive(Clone, Debug, PartialEq)]
pub struct JobConfig {
    path: PathBuf,
    value: Value,
}

impl JobConfig {
    /// Read and parse the job description at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ReportError::ConfigNotFound { path })
            }
            Err(source) => return Err(ReportError::ConfigRead { path, source }),
        };

        let value = match serde_json::from_slice(&raw) {
            Ok(value) => value,
            Err(source) => return Err(ReportError::ConfigParse { path, source }),
        };

        debug!("Loaded job configuration from {}", path.display());
        Ok(Self { path, value })
    }

    /// Path the configuration was loaded from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed document.
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Number of top-level keys, or `None` if the document is not an object.
    pub fn key_count(&self) -> Option<usize> {
        self.value.as_object().map(|map| map.len())
    }

    /// Multi-line rendering of the document.
    pub fn to_pretty_string(&self) -> String {
        // Serializing a `Value` has no failure path.
        serde_json::to_string_pretty(&self.value).unwrap_or_else(|_| self.value.to_string())
    }
}

impl fmt::Display for JobConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_job(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_object_and_keeps_key_order() {
        let file = write_job(r#"{"lr": 0.01, "epochs": 5, "arch": "resnet"}"#);
        let job = JobConfig::load(file.path()).unwrap();

        let keys: Vec<_> = job.value().as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["lr", "epochs", "arch"]);
        assert_eq!(job.key_count(), Some(3));
        assert_eq!(job.path(), file.path());
    }

    #[test]
    fn display_reparses_to_same_document() {
        let file = write_job(r#"{"lr": 0.01, "epochs": 5, "tags": ["a", null, true]}"#);
        let job = JobConfig::load(file.path()).unwrap();

        let reparsed: Value = serde_json::from_str(&job.to_string()).unwrap();
        assert_eq!(&reparsed, job.value());

        let reparsed: Value = serde_json::from_str(&job.to_pretty_string()).unwrap();
        assert_eq!(&reparsed, job.value());
    }

    #[test]
    fn non_object_documents_are_accepted() {
        let file = write_job("[1, 2, 3]");
        let job = JobConfig::load(file.path()).unwrap();
        assert_eq!(job.key_count(), None);
        assert_eq!(job.value(), &serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn numbers_keep_their_written_form() {
        let file = write_job(r#"{"seed": 12345678901234567890123, "x": 1e400, "lr": 0.01}"#);
        let job = JobConfig::load(file.path()).unwrap();

        assert_eq!(
            job.to_string(),
            r#"{"seed":12345678901234567890123,"x":1e400,"lr":0.01}"#
        );
        let reparsed: Value = serde_json::from_str(&job.to_string()).unwrap();
        assert_eq!(&reparsed, job.value());
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.json");

        let err = JobConfig::load(&path).unwrap_err();
        assert!(matches!(err, ReportError::ConfigNotFound { path: ref p } if *p == path));
        assert!(err.is_config_error());
    }

    #[test]
    fn truncated_json_is_parse_error() {
        let file = write_job(r#"{"lr": 0.01, "epochs": 5"#);
        let err = JobConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ReportError::ConfigParse { .. }));
        assert!(err.is_config_error());
    }

    #[test]
    fn invalid_utf8_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"a\": \"\xff\"}").unwrap();

        let err = JobConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ReportError::ConfigParse { .. }));
    }

    #[test]
    fn directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JobConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ReportError::ConfigRead { .. }));
    }
}
