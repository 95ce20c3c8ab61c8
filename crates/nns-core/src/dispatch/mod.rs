pub mod errors;
pub mod operations;

pub use errors::DispatchError;
pub use operations::{DispatchOutcome, dispatch};
