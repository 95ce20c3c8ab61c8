//! Mapping a process to the terminal window that hosts it.
//!
//! A terminal window hosts a process when that process is a descendant of
//! the window's owning process. Candidates are checked in enumeration order
//! and the first hit wins; process trees of distinct terminals are disjoint
//! in practice, so ties are not detected.

pub mod operations;

pub use operations::Correlator;
