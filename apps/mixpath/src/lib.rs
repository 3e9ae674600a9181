//! # mixpath
//!
//! Command-line front end for the mixpath recipe engine.
//!
//! - [`cli`]: clap argument structure and command implementations
//! - [`render`]: colored text and JSON output

pub mod cli;
pub mod render;
