//! The option list shown in the picker, plus the metadata needed to act on
//! whichever option comes back.

pub mod builder;
pub mod icons;
pub mod types;

pub use builder::{MenuBuilder, MenuOptions};
pub use icons::{IconRule, IconRules};
pub use types::{EntryMetadata, IconTag, Menu, MenuEntry, sanitize_selection};
