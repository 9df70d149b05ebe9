pub mod config;
pub mod error;
pub mod filesystem;

pub use config::*;
pub use error::*;
pub use filesystem::*;
