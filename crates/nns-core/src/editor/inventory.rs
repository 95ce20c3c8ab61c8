use tracing::{debug, info, warn};

use crate::editor::{errors::EditorError, traits::EditorBackend, types::EditorInstance};

/// True for terminal/scratch buffers, which are not editing targets.
pub fn is_excluded_buffer(name: &str, marker: &str) -> bool {
    name.contains(marker)
}

/// Query every reachable editor server.
///
/// A server that fails to report its pid or buffers is dropped silently
/// (it most likely exited between listing and querying). Only a failure to
/// list servers at all is an error.
pub fn collect_instances(
    backend: &dyn EditorBackend,
    exclude_marker: &str,
) -> Result<Vec<EditorInstance>, EditorError> {
    let servers = backend.list_servers()?;
    let mut instances = Vec::with_capacity(servers.len());

    for server in servers {
        let pid = match backend.server_pid(&server) {
            Ok(pid) => pid,
            Err(e) => {
                debug!(
                    event = "core.editor.server_dropped",
                    server = %server,
                    error = %e
                );
                continue;
            }
        };

        let buffers = match backend.buffers(&server) {
            Ok(buffers) => buffers,
            Err(e) => {
                debug!(
                    event = "core.editor.server_dropped",
                    server = %server,
                    error = %e
                );
                continue;
            }
        };

        let buffers: Vec<String> = buffers
            .into_iter()
            .filter(|name| !is_excluded_buffer(name, exclude_marker))
            .collect();

        instances.push(EditorInstance::new(server, pid, buffers));
    }

    info!(
        event = "core.editor.inventory_completed",
        backend = backend.name(),
        servers = instances.len()
    );

    Ok(instances)
}

/// Like [`collect_instances`] but degrades a missing or broken editor remote
/// to an empty inventory, so window switching still works.
pub fn collect_instances_or_empty(
    backend: &dyn EditorBackend,
    exclude_marker: &str,
) -> Vec<EditorInstance> {
    if !backend.is_available() {
        warn!(
            event = "core.editor.backend_unavailable",
            backend = backend.name()
        );
        return Vec::new();
    }

    collect_instances(backend, exclude_marker).unwrap_or_else(|e| {
        warn!(event = "core.editor.inventory_failed", error = %e);
        Vec::new()
    })
}
