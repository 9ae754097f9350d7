//! Library surface of the feedclean CLI.
//!
//! The binary keeps its argument parsing and command dispatch private; only
//! the logging setup is exposed here so embedders and tests can wire the
//! same subscriber configuration.

pub mod logging;
