use crate::errors::NnsError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Failed to start '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("IO error talking to '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl CommandError {
    /// True when the program binary itself could not be found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CommandError::SpawnFailed { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

impl NnsError for CommandError {
    fn error_code(&self) -> &'static str {
        match self {
            CommandError::SpawnFailed { .. } => "COMMAND_SPAWN_FAILED",
            CommandError::Failed { .. } => "COMMAND_FAILED",
            CommandError::Io { .. } => "COMMAND_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        self.is_not_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failed_not_found() {
        let error = CommandError::SpawnFailed {
            program: "bspc".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(error.is_not_found());
        assert!(error.is_user_error());
        assert_eq!(error.error_code(), "COMMAND_SPAWN_FAILED");
        assert!(error.to_string().starts_with("Failed to start 'bspc'"));
    }

    #[test]
    fn test_failed_display() {
        let error = CommandError::Failed {
            program: "xprop".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "BadWindow".to_string(),
        };
        assert_eq!(error.to_string(), "'xprop' exited with exit status: 1: BadWindow");
        assert!(!error.is_not_found());
    }
}
