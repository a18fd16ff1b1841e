//! Command handlers for the `hog` CLI.
//!
//! Each handler takes its output streams as `&mut dyn Write` and reports
//! failures through [`crate::CliError`].

mod cfg;
mod experiments;

pub use cfg::handle_cfg_command;
pub use experiments::handle_experiments_command;
