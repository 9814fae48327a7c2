pub mod admin_handler;
pub mod citizen_handler;

pub use admin_handler::*;
pub use citizen_handler::*;
