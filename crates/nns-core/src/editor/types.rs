use serde::Serialize;

use crate::process::Pid;

/// One running editor server and its open buffers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorInstance {
    /// Address used for remote commands (socket path for neovim).
    pub server_id: String,
    pub pid: Pid,
    /// Buffer names in the editor's order; unique within one server.
    pub buffers: Vec<String>,
}

impl EditorInstance {
    pub fn new(server_id: impl Into<String>, pid: Pid, buffers: Vec<String>) -> Self {
        Self {
            server_id: server_id.into(),
            pid,
            buffers,
        }
    }
}
