//! Command-line front end for the lab synonym finder.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
