use crate::command::CommandError;
use crate::errors::NnsError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Window manager '{backend}' is not available (missing {binary})")]
    BackendUnavailable {
        backend: &'static str,
        binary: &'static str,
    },

    #[error("Failed to list windows: {source}")]
    ListFailed {
        #[source]
        source: CommandError,
    },

    #[error("Failed to read properties of window '{id}': {source}")]
    PropertyQueryFailed {
        id: String,
        #[source]
        source: CommandError,
    },

    #[error("Failed to focus window '{id}': {source}")]
    FocusFailed {
        id: String,
        #[source]
        source: CommandError,
    },
}

impl NnsError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::BackendUnavailable { .. } => "WINDOW_BACKEND_UNAVAILABLE",
            WindowError::ListFailed { .. } => "WINDOW_LIST_FAILED",
            WindowError::PropertyQueryFailed { .. } => "WINDOW_PROPERTY_QUERY_FAILED",
            WindowError::FocusFailed { .. } => "WINDOW_FOCUS_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, WindowError::BackendUnavailable { .. })
    }
}
