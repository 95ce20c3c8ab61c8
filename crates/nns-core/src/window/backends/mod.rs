//! Window manager backend implementations.

mod bspwm;

pub use bspwm::BspwmBackend;
