use crate::command::CommandError;
use crate::errors::NnsError;

#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error("Picker '{binary}' is not installed")]
    NotInstalled { binary: &'static str },

    #[error("Picker failed: {source}")]
    Failed {
        #[from]
        source: CommandError,
    },
}

impl NnsError for PickerError {
    fn error_code(&self) -> &'static str {
        match self {
            PickerError::NotInstalled { .. } => "PICKER_NOT_INSTALLED",
            PickerError::Failed { .. } => "PICKER_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, PickerError::NotInstalled { .. })
    }
}
