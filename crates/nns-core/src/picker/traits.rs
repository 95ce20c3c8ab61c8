use crate::menu::MenuEntry;
use crate::picker::errors::PickerError;

/// An interactive chooser over menu entries.
pub trait Picker {
    /// Present `entries` and return the raw chosen line.
    ///
    /// `Ok(None)` means the user dismissed the picker.
    fn choose(&self, entries: &[MenuEntry]) -> Result<Option<String>, PickerError>;
}
