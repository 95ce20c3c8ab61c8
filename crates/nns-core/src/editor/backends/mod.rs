//! Editor backend implementations.

mod nvr;

pub use nvr::NvrBackend;
