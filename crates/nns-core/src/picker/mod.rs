pub mod errors;
pub mod rofi;
pub mod traits;

pub use errors::PickerError;
pub use rofi::{RofiPicker, RofiSettings, render_line};
pub use traits::Picker;
