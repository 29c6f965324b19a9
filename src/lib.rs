//! MCU dashboard command-line front end
//!
//! The dashboard state lives in `mcu-dashboard-common`; this crate adds the
//! terminal surface: one-shot subcommands, an interactive session, config
//! and logging.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod progress;
pub mod render;
pub mod session;
