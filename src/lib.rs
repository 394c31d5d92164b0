pub mod core;
pub mod error;
pub mod fs;
pub mod models;

pub use crate::core::parse_options;
pub use crate::error::OptionsError;
pub use crate::models::TruffulaOptions;
