use std::io;
use std::path::PathBuf;

/// Fatal conditions raised while producing a task report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("job configuration `{}` not found", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("failed to read job configuration `{}`", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("job configuration `{}` is not valid JSON", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("required environment variable `{name}` is not set")]
    MissingEnvironmentVariable { name: String },

    #[error("environment variable `{name}` is not valid unicode")]
    InvalidEnvironmentVariable { name: String },

    #[error("failed writing report")]
    Output(#[from] io::Error),
}

impl ReportError {
    /// Whether the failure came from loading the job configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ReportError::ConfigNotFound { .. }
                | ReportError::ConfigRead { .. }
                | ReportError::ConfigParse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
