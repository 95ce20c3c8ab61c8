pub mod errors;
pub mod operations;
pub mod types;

pub use errors::ProcessError;
pub use operations::{
    ChildLister, PgrepChildLister, ProcessTable, child_lister_for, descendants,
};
pub use types::{Pid, ProcessSource};
