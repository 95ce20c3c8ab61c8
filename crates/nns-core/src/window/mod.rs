pub mod backends;
pub mod errors;
pub mod inventory;
pub mod traits;
pub mod types;
pub mod xprop;

pub use backends::BspwmBackend;
pub use errors::WindowError;
pub use inventory::WindowInventory;
pub use traits::WindowBackend;
pub use types::{WindowHandle, WindowProperties};
