pub mod errors;
pub mod handler;
pub mod types;

pub use errors::SwitchError;
pub use types::{Backends, SystemBackends};
