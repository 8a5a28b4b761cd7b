//! State structures for the launch curve

pub mod coin;
pub mod config;

pub use coin::*;
pub use config::*;
