use std::fmt;

use serde::{Deserialize, Serialize};

use crate::process::Pid;

/// Opaque window-manager id of one leaf node (hex string such as `0x03A00003`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(String);

impl WindowHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Properties read from one window. Any field may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WindowProperties {
    /// `WM_CLASS` strings in order: instance name, then class name.
    pub wm_class: Vec<String>,
    pub pid: Option<Pid>,
    pub title: Option<String>,
}

impl WindowProperties {
    /// All `WM_CLASS` strings joined, the form terminal matching runs against.
    pub fn class_name(&self) -> Option<String> {
        if self.wm_class.is_empty() {
            None
        } else {
            Some(self.wm_class.join(" "))
        }
    }

    /// The class part of `WM_CLASS` (falls back to the instance).
    pub fn class(&self) -> Option<&str> {
        self.wm_class.last().map(String::as_str)
    }
}
