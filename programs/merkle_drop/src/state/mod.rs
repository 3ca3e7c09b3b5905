pub mod campaign;
pub mod config;

pub use campaign::*;
pub use config::*;
