//! Perfect CV Match command-line client

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod report;
pub mod resume;
pub mod session_store;
