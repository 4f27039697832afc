//! Command handlers for the CLI
//!
//! Each handler takes its parsed arguments plus the loaded configuration and
//! prints user-facing text to stdout. Diagnostics go through `tracing`.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::app::{
    calculate_bmi, calculate_calories, calories, known_products, lookup_product, portion_calories,
    BmiInput, Diary, DiaryEntry, LookupConfig, LookupOutcome,
};
use crate::cli::args::{
    BmiArgs, CaloriesArgs, ConfigAction, ConfigArgs, DiaryAction, DiaryArgs, LookupArgs,
};
use crate::config::AppConfig;
use crate::errors::{AppError, DiaryError, Result};

/// Handle the web lookup command
///
/// `show_progress` is false in quiet mode; JSON output never shows a spinner.
pub async fn handle_lookup(
    args: LookupArgs,
    config: &AppConfig,
    show_progress: bool,
) -> Result<()> {
    let mut lookup_config = config.lookup_config()?;
    if let Some(max_pages) = args.max_pages {
        lookup_config.max_pages = max_pages;
    }

    let outcome = run_lookup(
        &lookup_config,
        &args.query(),
        spinner_enabled(args.json, show_progress),
    )
    .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome);
    }
    Ok(())
}

/// Handle the calories command
pub async fn handle_calories(
    args: CaloriesArgs,
    config: &AppConfig,
    show_progress: bool,
) -> Result<()> {
    if let Some(kcal) = calculate_calories(&args.product, args.grams)? {
        println!(
            "Калорійність {} г {}: {} ккал",
            args.grams,
            args.product.trim(),
            kcal
        );
        return Ok(());
    }

    if args.no_web {
        println!(
            "'{}' немає в локальній таблиці ({}). Для інших продуктів скористайтесь командою 'lookup'.",
            args.product.trim(),
            known_products().collect::<Vec<_>>().join(", ")
        );
        return Ok(());
    }

    info!(
        "'{}' not in local table, falling back to web lookup",
        args.product
    );
    let lookup_config = config.lookup_config()?;
    let outcome = run_lookup(
        &lookup_config,
        &args.product,
        spinner_enabled(false, show_progress),
    )
    .await?;
    println!("{}", outcome);

    if let Some(kcal) = outcome.record().and_then(|record| record.calories_numeric()) {
        println!(
            "≈ {} ккал у {} г",
            portion_calories(kcal, calories::validate_grams(args.grams)?),
            args.grams
        );
    }
    Ok(())
}

/// Handle the BMI command
pub async fn handle_bmi(args: BmiArgs) -> Result<()> {
    let input = BmiInput::new(args.height, args.weight)?;
    let report = calculate_bmi(&input);
    debug!("BMI input {:?} -> {:?}", input, report);

    println!("{}", report);
    if let Some(advice) = report.status.advice() {
        println!("{}", advice);
    }
    Ok(())
}

/// Handle diary commands
pub async fn handle_diary(args: DiaryArgs, config: &AppConfig) -> Result<()> {
    let diary = Diary::new(&config.diary_config());

    match args.action {
        DiaryAction::Add {
            date,
            weight,
            calories,
            notes,
        } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let entry = DiaryEntry::new(date, weight, calories, notes)?;
            diary.append(&entry).await?;
            println!("Запис збережено!");
            println!("Дані записуються у файл {}", diary.path().display());
        }
        DiaryAction::Show => match diary.read_entries().await {
            Ok(entries) if entries.is_empty() => println!("Ще не додано жодного запису."),
            Ok(entries) => display_entries(&entries),
            Err(DiaryError::NotFound { path }) => {
                println!("Файл {} не знайдено.", path.display())
            }
            Err(e) => return Err(e.into()),
        },
        DiaryAction::Stats => match diary.stats().await {
            Ok(Some(stats)) => println!("{}", stats),
            Ok(None) | Err(DiaryError::NotFound { .. }) => {
                println!("Ще не додано жодного запису.")
            }
            Err(e) => return Err(e.into()),
        },
        DiaryAction::Export { destination } => {
            let bytes = diary.export(&destination).await?;
            println!(
                "Щоденник збережено у {} ({} байт)",
                destination.display(),
                bytes
            );
        }
    }

    Ok(())
}

/// Handle configuration commands
pub async fn handle_config(args: ConfigArgs, config: &AppConfig) -> Result<()> {
    match args.action {
        ConfigAction::Init { path, force } => {
            let path = match path {
                Some(path) => path,
                None => AppConfig::default_config_path()?,
            };
            AppConfig::write_default(&path, force).await?;
            println!("Created configuration file: {}", path.display());
        }
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}

/// Whether a lookup should draw its spinner
fn spinner_enabled(json: bool, show_progress: bool) -> bool {
    show_progress && !json
}

/// Runs one web lookup, with a spinner when requested
///
/// Setup failures (bad URL, client build) are errors; everything that
/// happens during the page walk is part of the returned outcome.
async fn run_lookup(
    lookup_config: &LookupConfig,
    product: &str,
    show_spinner: bool,
) -> Result<LookupOutcome> {
    let spinner = show_spinner.then(|| {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style.tick_strings(&["◐", "◓", "◑", "◒"]));
        }
        let host = url::Url::parse(&lookup_config.base_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| lookup_config.base_url.clone());
        spinner.set_message(format!("Йде пошук на {} ...", host));
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    });

    let started = Instant::now();
    let result = lookup_product(lookup_config, product).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let outcome = result.map_err(AppError::Lookup)?;
    info!("Lookup finished in {:?}", started.elapsed());
    if let LookupOutcome::TransportError(message) = &outcome {
        warn!("Web lookup failed: {}", message);
    }
    Ok(outcome)
}

/// Print diary entries as a simple aligned table
fn display_entries(entries: &[DiaryEntry]) {
    println!(
        "{:<12} {:>10} {:>10}  {}",
        "Дата", "Вага (кг)", "Калорії", "Примітки"
    );
    println!("{}", "-".repeat(50));
    for entry in entries {
        println!(
            "{:<12} {:>10.1} {:>10.0}  {}",
            entry.date.to_string(),
            entry.weight_kg,
            entry.calories,
            entry.notes
        );
    }
}
