// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod map;
pub mod models;
pub mod routes;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use error::{AppError, Result};
