pub mod config;
pub mod error;
pub mod prediction;

pub use config::*;
pub use error::*;
pub use prediction::*;
