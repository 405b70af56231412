pub mod error;
pub mod term;
pub mod token;
