//! nns-core: Core library for the nested node switcher
//!
//! Correlates three independent inventories (window manager leaves, the
//! terminal process tree, editor buffers) into one picker menu and focuses
//! whatever the user chooses. It is used by the `nns` CLI.
//!
//! # Main Entry Points
//!
//! - [`switch`] - Build a menu snapshot, run the picker, dispatch the choice
//! - [`correlate`] - Find the terminal window hosting a process
//! - [`process`] - Walk the process tree
//! - [`config`] - Configuration management

pub mod command;
pub mod config;
pub mod correlate;
pub mod dispatch;
pub mod editor;
pub mod errors;
pub mod events;
pub mod logging;
pub mod menu;
pub mod picker;
pub mod process;
pub mod switch;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use config::NnsConfig;
pub use dispatch::{DispatchError, DispatchOutcome};
pub use editor::{EditorBackend, EditorError, EditorInstance};
pub use errors::NnsError;
pub use menu::{EntryMetadata, IconTag, Menu, MenuEntry};
pub use picker::{Picker, PickerError};
pub use process::{ChildLister, Pid, ProcessError};
pub use window::{WindowBackend, WindowError, WindowHandle};

// Re-export handler modules as the primary API
pub use switch::handler as switch_ops;

// Re-export logging initialization
pub use logging::init_logging;
