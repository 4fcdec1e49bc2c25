//! byteint library: command-line application logic for the `byteint` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod output;
