use crate::errors::NnsError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Invalid PID: {value}")]
    InvalidPid { value: String },

    #[error("Process '{pid}' not found")]
    NotFound { pid: u32 },
}

impl NnsError for ProcessError {
    fn error_code(&self) -> &'static str {
        match self {
            ProcessError::InvalidPid { .. } => "PROCESS_INVALID_PID",
            ProcessError::NotFound { .. } => "PROCESS_NOT_FOUND",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pid_display() {
        let error = ProcessError::InvalidPid {
            value: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid PID: abc");
        assert_eq!(error.error_code(), "PROCESS_INVALID_PID");
    }
}
