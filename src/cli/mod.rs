//! Command-line interface components
//!
//! This module contains CLI-specific code for the health tracker,
//! including argument parsing and the command handlers.

pub mod args;
pub mod commands;

pub use args::{
    BmiArgs, CaloriesArgs, Cli, Commands, ConfigAction, ConfigArgs, DiaryAction, DiaryArgs,
    GlobalArgs, LookupArgs,
};
pub use commands::{handle_bmi, handle_calories, handle_config, handle_diary, handle_lookup};
