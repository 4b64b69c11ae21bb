pub mod assembler;
pub mod catalog;
pub mod config;
pub mod error;
pub mod reload;
pub mod render;
pub mod tsig;
pub mod writer;

pub use error::{ConfigError, Result};
