pub mod account;
pub mod merkle;
pub mod token;
pub mod validations;

pub use account::*;
pub use merkle::*;
pub use token::*;
pub use validations::*;
