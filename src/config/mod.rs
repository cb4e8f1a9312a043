//! Configuration: CLI definition, library `Config` and defaults.

mod cli;
mod constants;
mod types;

// Re-export public API
pub use cli::{
    AddArgs, Cli, Command, DashboardArgs, DashboardCommand, GlobalArgs, ServeArgs, ShowArgs,
    StaticMapArgs,
};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
