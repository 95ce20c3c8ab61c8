use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sysinfo::Pid as SysinfoPid;

use crate::process::errors::ProcessError;

/// Platform-safe process ID wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pid(u32);

impl Pid {
    pub fn new(pid: u32) -> Result<Self, ProcessError> {
        if pid == 0 {
            return Err(ProcessError::InvalidPid {
                value: pid.to_string(),
            });
        }
        Ok(Self(pid))
    }

    pub fn from_raw(pid: u32) -> Self {
        Self(pid)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Pid {
    fn from(pid: u32) -> Self {
        Self(pid)
    }
}

impl From<SysinfoPid> for Pid {
    fn from(pid: SysinfoPid) -> Self {
        Self(pid.as_u32())
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses the textual pid that external tools print (surrounding whitespace allowed).
impl FromStr for Pid {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let raw = trimmed
            .parse::<u32>()
            .map_err(|_| ProcessError::InvalidPid {
                value: trimmed.to_string(),
            })?;
        Pid::new(raw)
    }
}

/// Where child-process relations come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessSource {
    /// One in-memory snapshot of the whole process table.
    #[default]
    Sysinfo,
    /// One `pgrep -P` invocation per visited process.
    Pgrep,
}

impl fmt::Display for ProcessSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessSource::Sysinfo => write!(f, "sysinfo"),
            ProcessSource::Pgrep => write!(f, "pgrep"),
        }
    }
}
