use crate::command::CommandError;
use crate::errors::NnsError;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("Editor remote '{binary}' is not installed")]
    BackendUnavailable { binary: &'static str },

    #[error("Failed to list editor servers: {source}")]
    ListFailed {
        #[source]
        source: CommandError,
    },

    #[error("Editor server '{server}' did not respond: {source}")]
    ServerUnreachable {
        server: String,
        #[source]
        source: CommandError,
    },

    #[error("Editor server '{server}' returned an invalid pid: '{output}'")]
    InvalidPid { server: String, output: String },

    #[error("Failed to focus buffer '{buffer}' on server '{server}': {source}")]
    FocusFailed {
        server: String,
        buffer: String,
        #[source]
        source: CommandError,
    },
}

impl NnsError for EditorError {
    fn error_code(&self) -> &'static str {
        match self {
            EditorError::BackendUnavailable { .. } => "EDITOR_BACKEND_UNAVAILABLE",
            EditorError::ListFailed { .. } => "EDITOR_LIST_FAILED",
            EditorError::ServerUnreachable { .. } => "EDITOR_SERVER_UNREACHABLE",
            EditorError::InvalidPid { .. } => "EDITOR_INVALID_PID",
            EditorError::FocusFailed { .. } => "EDITOR_FOCUS_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, EditorError::BackendUnavailable { .. })
    }
}
