//! Command-line argument parsing for the health tracker
//!
//! This module defines the CLI structure using clap derive macros, covering
//! the web nutrition lookup, the local calculators, the diary and
//! configuration management.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::constants::calories;

/// Health tracker - BMI, calories and a personal diary
#[derive(Parser, Debug)]
#[command(
    name = "health_tracker",
    version,
    about = "Personal health diary with BMI and calorie calculators",
    long_about = "Track weight and calories in a local diary, calculate BMI, and look up
nutrition data for any food on a public nutrition table."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up nutrition data for a food on the web
    Lookup(LookupArgs),

    /// Calories in a portion (local table, web fallback)
    Calories(CaloriesArgs),

    /// Calculate body-mass index
    Bmi(BmiArgs),

    /// Manage the health diary
    Diary(DiaryArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the lookup command
#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Product name (several words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub product: Vec<String>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Override the maximum number of pages to scan
    #[arg(long, value_name = "N")]
    pub max_pages: Option<u32>,
}

/// Arguments for the calories command
#[derive(Args, Debug, Clone)]
pub struct CaloriesArgs {
    /// Product name
    pub product: String,

    /// Portion size in grams
    #[arg(short, long, default_value_t = calories::DEFAULT_GRAMS)]
    pub grams: f64,

    /// Do not fall back to the web lookup for unknown products
    #[arg(long)]
    pub no_web: bool,
}

/// Arguments for the BMI command
#[derive(Args, Debug, Clone)]
pub struct BmiArgs {
    /// Height in centimetres
    #[arg(long, value_name = "CM")]
    pub height: f64,

    /// Weight in kilograms
    #[arg(long, value_name = "KG")]
    pub weight: f64,
}

/// Arguments for diary management
#[derive(Args, Debug)]
pub struct DiaryArgs {
    #[command(subcommand)]
    pub action: DiaryAction,
}

/// Diary actions
#[derive(Subcommand, Debug)]
pub enum DiaryAction {
    /// Append an entry
    Add {
        /// Entry date (YYYY-MM-DD), today if omitted
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Weight in kilograms
        #[arg(short, long)]
        weight: f64,

        /// Calories eaten
        #[arg(short, long)]
        calories: f64,

        /// Free-text notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Print all entries
    Show,

    /// Show weight and calorie statistics
    Stats,

    /// Copy the diary file elsewhere
    Export {
        /// Destination file
        #[arg(value_name = "FILE")]
        destination: PathBuf,
    },
}

/// Arguments for configuration management
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Destination (defaults to the user config directory)
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Logging level requested by flags, if any
    ///
    /// `None` means the configured level applies.
    pub fn log_level(&self) -> Option<tracing::Level> {
        if self.global.quiet {
            Some(tracing::Level::ERROR)
        } else if self.global.very_verbose {
            Some(tracing::Level::DEBUG)
        } else if self.global.verbose {
            Some(tracing::Level::INFO)
        } else {
            None
        }
    }
}

impl LookupArgs {
    /// The product name as a single query string
    pub fn query(&self) -> String {
        self.product.join(" ")
    }
}
