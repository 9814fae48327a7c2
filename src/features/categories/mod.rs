//! Report category vocabulary, exposed for form dropdowns.

pub mod dtos;
pub mod handlers;
pub mod routes;

pub use routes::routes;
