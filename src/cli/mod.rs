//! Command line interface for the bayesic binary.

pub mod args;
pub mod commands;
pub mod output;
