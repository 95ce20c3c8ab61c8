use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::window::WindowHandle;

/// Icon name handed to the picker for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IconTag(String);

impl IconTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One line offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub display: String,
    pub icon: IconTag,
    /// Lookup key into the metadata table: the sanitized display text.
    pub key: String,
}

/// What to focus when an entry is chosen.
///
/// Buffer entries always carry `editor_server` and `buffer`, plus `window`
/// when the server's host window was found. Window entries carry only
/// `window`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntryMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowHandle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_server: Option<String>,
    /// Buffer name exactly as the editor reported it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer: Option<String>,
}

/// Normalize picker output (or a menu display text) into a lookup key.
///
/// Drops any out-of-band directive after the NUL separator, trailing line
/// terminators and every single quote.
pub fn sanitize_selection(raw: &str) -> String {
    let text = raw.split('\0').next().unwrap_or_default();
    text.trim_end_matches(['\n', '\r']).replace('\'', "")
}

/// Menu entries in insertion order plus their metadata table.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    entries: Vec<MenuEntry>,
    metadata: HashMap<String, EntryMetadata>,
}

impl Menu {
    pub(crate) fn from_parts(
        entries: Vec<MenuEntry>,
        metadata: HashMap<String, EntryMetadata>,
    ) -> Self {
        Self { entries, metadata }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Metadata for an entry key.
    pub fn metadata(&self, key: &str) -> Option<&EntryMetadata> {
        self.metadata.get(key)
    }

    /// Metadata for raw picker output; `None` for cancel or unknown text.
    pub fn lookup(&self, selection: &str) -> Option<&EntryMetadata> {
        let key = sanitize_selection(selection);
        if key.trim().is_empty() {
            return None;
        }
        self.metadata.get(&key)
    }
}
