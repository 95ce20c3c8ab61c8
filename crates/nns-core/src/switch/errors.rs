use crate::dispatch::DispatchError;
use crate::errors::NnsError;
use crate::picker::PickerError;
use crate::window::WindowError;

#[derive(Debug, thiserror::Error)]
pub enum SwitchError {
    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Picker(#[from] PickerError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl NnsError for SwitchError {
    fn error_code(&self) -> &'static str {
        match self {
            SwitchError::Window(e) => e.error_code(),
            SwitchError::Picker(e) => e.error_code(),
            SwitchError::Dispatch(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            SwitchError::Window(e) => e.is_user_error(),
            SwitchError::Picker(e) => e.is_user_error(),
            SwitchError::Dispatch(e) => e.is_user_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_delegates() {
        let error = SwitchError::from(PickerError::NotInstalled { binary: "rofi" });
        assert_eq!(error.error_code(), "PICKER_NOT_INSTALLED");
        assert!(error.is_user_error());
        assert_eq!(error.to_string(), "Picker 'rofi' is not installed");
    }
}
