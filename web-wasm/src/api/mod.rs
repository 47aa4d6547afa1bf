//! Scoring service access from the browser

pub mod client;
