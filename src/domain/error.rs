use thiserror::Error;

/// Failure taxonomy for layout, theme and backup operations. Every variant
/// maps to a distinct user-visible message; nothing here is retried
/// automatically.
#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("configuration tool failed: {output}")]
    ConfigTool { output: String },

    #[error("value not applied: wrote '{expected}', read back '{observed}'")]
    VerifiedMismatch { expected: String, observed: String },

    #[error("required extension missing or disabled: {uuid}")]
    PrerequisiteMissing { uuid: String },

    #[error("resource not found: {file}")]
    ResourceNotFound { file: String },

    #[error("no backup available")]
    BackupUnavailable,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
