pub mod controller;
pub mod log_feed;
pub mod runtime;
pub mod traits;
