pub mod cli;
pub mod config;
pub mod constants;
pub mod publisher;
pub mod service;
pub mod target;

pub use anyhow::Result;
