use std::collections::{BTreeSet, HashMap, HashSet};

use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, RefreshKind, System};
use tracing::{debug, warn};

use crate::command::{CommandError, run_capture};
use crate::process::types::{Pid, ProcessSource};

/// Source of direct parent -> child relations.
///
/// A pid that no longer exists simply has no children.
pub trait ChildLister {
    fn children(&self, pid: Pid) -> Vec<Pid>;
}

/// Collect every transitive descendant of `pid`, excluding `pid` itself.
///
/// Walks breadth-first with a visited set, so a malformed table containing a
/// cycle still terminates.
pub fn descendants(lister: &dyn ChildLister, pid: Pid) -> BTreeSet<Pid> {
    let mut visited: HashSet<Pid> = HashSet::from([pid]);
    let mut found = BTreeSet::new();
    let mut queue = vec![pid];

    while let Some(current) = queue.pop() {
        for child in lister.children(current) {
            if visited.insert(child) {
                found.insert(child);
                queue.push(child);
            }
        }
    }

    debug!(
        event = "core.process.descendants_completed",
        pid = pid.as_u32(),
        count = found.len()
    );

    found
}

/// In-memory parent -> children index over a single process table snapshot.
#[derive(Debug, Clone, Default)]
pub struct ProcessTable {
    children: HashMap<Pid, Vec<Pid>>,
}

impl ProcessTable {
    /// Snapshot the host process table once.
    pub fn snapshot() -> Self {
        let mut system = System::new_with_specifics(
            RefreshKind::nothing().with_processes(ProcessRefreshKind::nothing()),
        );
        system.refresh_processes(ProcessesToUpdate::All, true);

        let pairs = system.processes().iter().filter_map(|(pid, process)| {
            // Linux threads show up as tasks; only real processes form the tree.
            if process.thread_kind().is_some() {
                return None;
            }
            process
                .parent()
                .map(|parent| (Pid::from(parent), Pid::from(*pid)))
        });

        let table = Self::from_parent_pairs(pairs);
        debug!(
            event = "core.process.snapshot_completed",
            parents = table.children.len()
        );
        table
    }

    /// Build a table from `(parent, child)` pairs.
    pub fn from_parent_pairs(pairs: impl IntoIterator<Item = (Pid, Pid)>) -> Self {
        let mut children: HashMap<Pid, Vec<Pid>> = HashMap::new();
        for (parent, child) in pairs {
            children.entry(parent).or_default().push(child);
        }
        for list in children.values_mut() {
            list.sort();
        }
        Self { children }
    }
}

impl ChildLister for ProcessTable {
    fn children(&self, pid: Pid) -> Vec<Pid> {
        self.children.get(&pid).cloned().unwrap_or_default()
    }
}

/// Queries `pgrep -P <pid>` for every visited node.
#[derive(Debug, Clone, Default)]
pub struct PgrepChildLister;

/// Parse one pid per line, ignoring blank or malformed lines.
fn parse_pid_lines(output: &str) -> Vec<Pid> {
    output
        .lines()
        .filter_map(|line| line.parse::<Pid>().ok())
        .collect()
}

impl ChildLister for PgrepChildLister {
    fn children(&self, pid: Pid) -> Vec<Pid> {
        let pid_arg = pid.to_string();
        match run_capture("pgrep", &["-P", &pid_arg]) {
            Ok(output) => parse_pid_lines(&output),
            // pgrep exits 1 when nothing matched
            Err(CommandError::Failed { .. }) => Vec::new(),
            Err(e) => {
                warn!(
                    event = "core.process.pgrep_failed",
                    pid = pid.as_u32(),
                    error = %e
                );
                Vec::new()
            }
        }
    }
}

/// Build the child lister for the configured source.
pub fn child_lister_for(source: ProcessSource) -> Box<dyn ChildLister> {
    match source {
        ProcessSource::Sysinfo => Box::new(ProcessTable::snapshot()),
        ProcessSource::Pgrep => Box::new(PgrepChildLister),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::{Command, Stdio};

    fn pid(n: u32) -> Pid {
        Pid::from_raw(n)
    }

    fn table(pairs: &[(u32, u32)]) -> ProcessTable {
        ProcessTable::from_parent_pairs(pairs.iter().map(|&(p, c)| (pid(p), pid(c))))
    }

    #[test]
    fn test_descendants_transitive() {
        let t = table(&[(100, 200), (200, 300), (100, 201), (999, 1000)]);
        let found = descendants(&t, pid(100));
        assert_eq!(found, BTreeSet::from([pid(200), pid(201), pid(300)]));
    }

    #[test]
    fn test_descendants_excludes_self() {
        let t = table(&[(1, 2)]);
        assert!(!descendants(&t, pid(1)).contains(&pid(1)));
    }

    #[test]
    fn test_descendants_of_exited_process_is_empty() {
        let t = table(&[(1, 2)]);
        assert!(descendants(&t, pid(424242)).is_empty());
    }

    #[test]
    fn test_descendants_terminates_on_cycle() {
        let t = table(&[(1, 2), (2, 3), (3, 1), (3, 4)]);
        let found = descendants(&t, pid(1));
        assert_eq!(found, BTreeSet::from([pid(2), pid(3), pid(4)]));
    }

    #[test]
    fn test_parse_pid_lines() {
        assert_eq!(parse_pid_lines("12\n\n34\ngarbage\n"), vec![pid(12), pid(34)]);
        assert!(parse_pid_lines("").is_empty());
    }

    #[test]
    fn test_snapshot_sees_spawned_grandchild() {
        let mut child = Command::new("sh")
            .args(["-c", "sleep 5 & wait"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to spawn test process");

        std::thread::sleep(std::time::Duration::from_millis(200));

        let me = Pid::from_raw(std::process::id());
        let found = descendants(&ProcessTable::snapshot(), me);
        assert!(found.contains(&Pid::from_raw(child.id())));
        assert!(found.len() >= 2, "expected sh and its sleep child");

        let _ = child.kill();
        let _ = child.wait();
    }

    #[test]
    fn test_pgrep_lister_unknown_pid_has_no_children() {
        assert!(PgrepChildLister.children(pid(999_999)).is_empty());
    }
}
