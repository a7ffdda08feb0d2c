//! Command-line front end for the textfmt helper crates.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
