pub mod algorithm;
pub mod keyfile;

pub use algorithm::TsigAlgorithm;
pub use keyfile::{TsigKey, parse_key_material};
