//! Blocking execution of external programs.
//!
//! Every helper here waits for the child to exit and drains its output
//! before returning, on success and failure alike, so no zombie is left
//! behind between repeated invocations.

pub mod errors;
pub mod operations;

pub use errors::CommandError;
pub use operations::{CommandOutput, run_capture, run_status, run_with_input};
