use crate::editor::EditorError;
use crate::errors::NnsError;
use crate::window::WindowError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

impl NnsError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Window(e) => e.error_code(),
            DispatchError::Editor(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Window(e) => e.is_user_error(),
            DispatchError::Editor(e) => e.is_user_error(),
        }
    }
}
