pub mod backends;
pub mod errors;
pub mod inventory;
pub mod traits;
pub mod types;

pub use backends::NvrBackend;
pub use errors::EditorError;
pub use inventory::{collect_instances, collect_instances_or_empty, is_excluded_buffer};
pub use traits::EditorBackend;
pub use types::EditorInstance;
