pub mod common;
pub mod tx;
