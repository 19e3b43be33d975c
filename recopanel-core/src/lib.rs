pub mod config;
pub mod input;
pub mod notification;
pub mod types;

// Keep the public surface small and intentional.
pub use config::*;
pub use input::*;
pub use notification::*;
pub use types::*;
