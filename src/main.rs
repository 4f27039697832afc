//! Health Tracker CLI application
//!
//! Command-line interface for the BMI and calorie calculators, the health
//! diary, and the web nutrition lookup.

use std::process;

use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use health_tracker::cli::{
    handle_bmi, handle_calories, handle_config, handle_diary, handle_lookup, Cli, Commands,
};
use health_tracker::config::AppConfig;
use health_tracker::errors::Result;

#[tokio::main]
async fn main() {
    // Initialize program
    let result = run().await;

    // Handle any errors that occurred
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    // Parse command line arguments
    let cli = Cli::parse_args();

    let config = AppConfig::load(cli.global.config.as_deref()).await?;

    // Initialize logging based on verbosity, falling back to the configured level
    init_logging(&cli, &config);

    info!("Health Tracker v{} starting", env!("CARGO_PKG_VERSION"));

    let show_progress = !cli.global.quiet;

    // Execute the appropriate command
    match cli.command {
        Commands::Lookup(args) => {
            info!("Executing lookup command");
            handle_lookup(args, &config, show_progress).await
        }
        Commands::Calories(args) => {
            info!("Executing calories command");
            handle_calories(args, &config, show_progress).await
        }
        Commands::Bmi(args) => {
            info!("Executing bmi command");
            handle_bmi(args).await
        }
        Commands::Diary(args) => {
            info!("Executing diary command");
            handle_diary(args, &config).await
        }
        Commands::Config(args) => {
            info!("Executing config command");
            handle_config(args, &config).await
        }
    }
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli, config: &AppConfig) {
    let log_level = cli
        .log_level()
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    // Create environment filter
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("health_tracker={}", log_level).parse() {
        filter = filter.add_directive(directive);
    }

    // Initialize subscriber
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(cli.global.very_verbose) // Show levels only in very verbose mode
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
}
