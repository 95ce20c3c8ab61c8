//! Editor remote-control trait definition.

use crate::editor::errors::EditorError;
use crate::process::Pid;

/// Remote-control interface of an editor that runs as addressable servers.
pub trait EditorBackend {
    /// The canonical name of this backend (e.g., "nvr").
    fn name(&self) -> &'static str;

    /// Check if the remote-control program is installed.
    fn is_available(&self) -> bool;

    /// Identifiers of every reachable server.
    fn list_servers(&self) -> Result<Vec<String>, EditorError>;

    /// Process id the server reports for itself.
    fn server_pid(&self, server: &str) -> Result<Pid, EditorError>;

    /// Names of the buffers open in `server`.
    fn buffers(&self, server: &str) -> Result<Vec<String>, EditorError>;

    /// Make `buffer` the current buffer of `server` (side effect only).
    fn focus_buffer(&self, server: &str, buffer: &str) -> Result<(), EditorError>;
}
