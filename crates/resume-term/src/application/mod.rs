//! Application layer: command line parsing and the terminal UI loop.

pub mod cli;
pub mod ui;
