use std::io::{self, Write};
use std::process::{Command, Output, Stdio};
use std::thread;

use tracing::debug;

use crate::command::errors::CommandError;

/// Captured result of a finished child process.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl CommandOutput {
    fn from_output(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        }
    }
}

fn spawn_error(program: &str, source: std::io::Error) -> CommandError {
    CommandError::SpawnFailed {
        program: program.to_string(),
        source,
    }
}

fn failed(program: &str, output: &Output) -> CommandError {
    CommandError::Failed {
        program: program.to_string(),
        status: output.status.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

/// Run `program` to completion and return its stdout.
///
/// A non-zero exit status is an error carrying the trimmed stderr.
pub fn run_capture(program: &str, args: &[&str]) -> Result<String, CommandError> {
    debug!(event = "core.command.run_started", program = program, args = ?args);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(program, e))?;

    if !output.status.success() {
        debug!(
            event = "core.command.run_failed",
            program = program,
            status = %output.status
        );
        return Err(failed(program, &output));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run `program` for its side effect, discarding output.
pub fn run_status(program: &str, args: &[&str]) -> Result<(), CommandError> {
    debug!(event = "core.command.run_started", program = program, args = ?args);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(program, e))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(failed(program, &output))
    }
}

/// Run `program` with `input` written to its stdin.
///
/// The child sees EOF once all of `input` is written. The exit status is
/// reported rather than treated as an error: pickers use it to signal
/// cancellation.
pub fn run_with_input(
    program: &str,
    args: &[&str],
    input: &[u8],
) -> Result<CommandOutput, CommandError> {
    debug!(
        event = "core.command.run_with_input_started",
        program = program,
        input_bytes = input.len()
    );

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| spawn_error(program, e))?;

    let stdin = child.stdin.take();

    // Stdin is fed from its own thread while stdout and stderr are drained.
    // The child is always reaped, even when writing failed.
    let (output, write_result) = thread::scope(|scope| {
        let writer = scope.spawn(move || match stdin {
            Some(mut stdin) => stdin.write_all(input),
            None => Ok(()),
        });
        let output = child.wait_with_output();
        let write_result = writer
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
        (output, write_result)
    });

    let output = output.map_err(|e| CommandError::Io {
        program: program.to_string(),
        source: e,
    })?;

    if let Err(e) = write_result
        && e.kind() != io::ErrorKind::BrokenPipe
    {
        return Err(CommandError::Io {
            program: program.to_string(),
            source: e,
        });
    }

    Ok(CommandOutput::from_output(output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_capture_echo() {
        let out = run_capture("echo", &["hello"]).expect("echo should run");
        assert_eq!(out.trim(), "hello");
    }

    #[test]
    fn test_run_capture_missing_binary() {
        let result = run_capture("nns-definitely-not-a-binary", &[]);
        assert!(matches!(result, Err(ref e) if e.is_not_found()));
    }

    #[test]
    fn test_run_capture_nonzero_exit() {
        let result = run_capture("false", &[]);
        assert!(matches!(result, Err(CommandError::Failed { .. })));
    }

    #[test]
    fn test_run_status() {
        assert!(run_status("true", &[]).is_ok());
        assert!(run_status("false", &[]).is_err());
    }

    #[test]
    fn test_run_with_input_roundtrips_stdin() {
        let out = run_with_input("cat", &[], b"a.py\nlib.rs\n").expect("cat should run");
        assert!(out.success);
        assert_eq!(out.stdout, "a.py\nlib.rs\n");
    }

    #[test]
    fn test_run_with_input_reports_failure_status() {
        let out = run_with_input("false", &[], b"ignored").expect("false should run");
        assert!(!out.success);
    }

    #[test]
    fn test_run_with_input_larger_than_pipe_buffer() {
        let line = "some/long/path/to/a/buffer.rs\n";
        let input = line.repeat(32 * 1024);
        let out = run_with_input("cat", &[], input.as_bytes()).expect("cat should run");
        assert!(out.success);
        assert_eq!(out.stdout.len(), input.len());
    }
}
