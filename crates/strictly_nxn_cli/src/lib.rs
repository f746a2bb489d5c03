//! Console front end for strictly_nxn.
//!
//! Everything here is presentation and input collection; game rules live
//! in the `strictly_nxn` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod render;

pub use cli::{Cli, PlayerArg};
pub use config::{CliConfig, ConfigError};
pub use console::Console;
