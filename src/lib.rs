// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod notify;
pub mod progress;
pub mod quest;
pub mod scrape;
pub mod specs;

pub use error::{Error, Result};
