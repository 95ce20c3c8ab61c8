//! Neovim backend driven through neovim-remote (`nvr`).

use tracing::info;

use crate::command::{run_capture, run_status};
use crate::editor::{errors::EditorError, traits::EditorBackend};
use crate::process::Pid;

const NVR: &str = "nvr";

/// Backend implementation for neovim via `nvr`.
#[derive(Debug, Clone)]
pub struct NvrBackend {
    /// Remote expression evaluating to the space-joined buffer list.
    buffers_expr: String,
}

impl NvrBackend {
    pub fn new(buffers_expr: impl Into<String>) -> Self {
        Self {
            buffers_expr: buffers_expr.into(),
        }
    }

    fn remote_expr(&self, server: &str, expr: &str) -> Result<String, EditorError> {
        run_capture(
            NVR,
            &["--servername", server, "--remote-expr", expr, "--nostart"],
        )
        .map_err(|source| EditorError::ServerUnreachable {
            server: server.to_string(),
            source,
        })
    }
}

impl EditorBackend for NvrBackend {
    fn name(&self) -> &'static str {
        "nvr"
    }

    fn is_available(&self) -> bool {
        which::which(NVR).is_ok()
    }

    fn list_servers(&self) -> Result<Vec<String>, EditorError> {
        let output =
            run_capture(NVR, &["--serverlist"]).map_err(|source| EditorError::ListFailed { source })?;
        Ok(output.split_whitespace().map(str::to_string).collect())
    }

    fn server_pid(&self, server: &str) -> Result<Pid, EditorError> {
        let output = self.remote_expr(server, "getpid()")?;
        output.parse().map_err(|_| EditorError::InvalidPid {
            server: server.to_string(),
            output: output.trim().to_string(),
        })
    }

    fn buffers(&self, server: &str) -> Result<Vec<String>, EditorError> {
        let output = self.remote_expr(server, &self.buffers_expr)?;
        Ok(output.split_whitespace().map(str::to_string).collect())
    }

    fn focus_buffer(&self, server: &str, buffer: &str) -> Result<(), EditorError> {
        run_status(NVR, &["--servername", server, "--remote", buffer]).map_err(|source| {
            EditorError::FocusFailed {
                server: server.to_string(),
                buffer: buffer.to_string(),
                source,
            }
        })?;
        info!(
            event = "core.editor.focus_completed",
            server = server,
            buffer = buffer
        );
        Ok(())
    }
}
